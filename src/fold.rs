//! Resumable fold over a zipper.
//!
//! A fold walks rightward from the cursor (not from the start of
//! the sequence), handing each element to a step function along
//! with the accumulator. The step function decides how to go on:
//! - `Step::Continue(acc)`: move to the next element
//! - `Step::Suspend(acc)`: stop here, returning a `Suspension`
//! - `Step::Halt(acc)`: stop for good
//!
//! Reaching the end of the zipper finishes the fold as `Folded::Done`.
//! A `Suspension` holds the zipper at the next element and can be
//! resumed any number of times, each run independent of the others.
//!
//! The iterator, `find` and collection impls below are all written
//! against this protocol.

use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

use tracing::trace;

use crate::zipper::Zipper;

/// What to do after folding an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<A> {
	Continue(A),
	Suspend(A),
	Halt(A),
}

/// How a fold ended
pub enum Folded<T, A, F> {
	/// ran off the end of the zipper
	Done(A),
	/// stopped by `Step::Halt`
	Halted(A),
	/// paused by `Step::Suspend`
	Suspended(A, Suspension<T, F>),
}

impl<T, A, F> Folded<T, A, F> {
	/// the accumulator, however the fold ended
	pub fn acc(&self) -> &A {
		match *self {
			Folded::Done(ref a) | Folded::Halted(ref a) | Folded::Suspended(ref a, _) => a,
		}
	}

	pub fn into_acc(self) -> A {
		match self {
			Folded::Done(a) | Folded::Halted(a) | Folded::Suspended(a, _) => a,
		}
	}

	pub fn is_done(&self) -> bool {
		matches!(*self, Folded::Done(_))
	}
}

impl<T, A: fmt::Debug, F> fmt::Debug for Folded<T, A, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {
			Folded::Done(ref a) => f.debug_tuple("Done").field(a).finish(),
			Folded::Halted(ref a) => f.debug_tuple("Halted").field(a).finish(),
			Folded::Suspended(ref a, _) => f.debug_tuple("Suspended").field(a).finish(),
		}
	}
}

/// A paused fold, holding the rest of the zipper and the step function
pub struct Suspension<T, F> {
	zipper: Zipper<T>,
	step: Rc<F>,
}

impl<T: Clone, F> Clone for Suspension<T, F> {
	fn clone(&self) -> Self {
		Suspension { zipper: self.zipper.clone(), step: self.step.clone() }
	}
}

impl<T: Clone, F> Suspension<T, F> {
	/// the zipper focused where the fold will pick up
	pub fn zipper(&self) -> &Zipper<T> { &self.zipper }

	/// carry on from the suspended position with a new directive
	pub fn resume<A>(&self, directive: Step<A>) -> Folded<T, A, F>
	where F: Fn(&T, A) -> Step<A>
	{
		drive(self.zipper.clone(), directive, self.step.clone())
	}
}

fn drive<T, A, F>(mut zipper: Zipper<T>, mut directive: Step<A>, step: Rc<F>) -> Folded<T, A, F>
where
	T: Clone,
	F: Fn(&T, A) -> Step<A>,
{
	loop {
		let acc = match (directive, zipper.is_at_end()) {
			(Step::Halt(acc), _) => {
				trace!(remaining = zipper.len() - zipper.position(), "fold halted");
				return Folded::Halted(acc)
			}
			(Step::Continue(acc), true) | (Step::Suspend(acc), true) => {
				trace!("fold done");
				return Folded::Done(acc)
			}
			(Step::Suspend(acc), false) => {
				trace!(position = zipper.position(), "fold suspended");
				return Folded::Suspended(acc, Suspension { zipper, step })
			}
			(Step::Continue(acc), false) => acc,
		};
		directive = match zipper.cursor() {
			Some(elem) => (*step)(elem, acc),
			// reversed past-the-end zipper, nothing focused yet
			None => Step::Continue(acc),
		};
		zipper = zipper.move_right();
	}
}

impl<T: Clone> Zipper<T> {

	/// Folds rightward from the cursor, starting with `directive`.
	pub fn fold<A, F>(&self, directive: Step<A>, step: F) -> Folded<T, A, F>
	where F: Fn(&T, A) -> Step<A>
	{
		drive(self.clone(), directive, Rc::new(step))
	}

	/// first element from the cursor onward matching `pred`
	pub fn find<P>(&self, pred: P) -> Option<T>
	where P: Fn(&T) -> bool
	{
		self.fold(Step::Continue(None), |elem, _| {
			if pred(elem) { Step::Halt(Some(elem.clone())) } else { Step::Continue(None) }
		}).into_acc()
	}

	/// number of elements from the cursor onward, counted by folding
	pub fn fold_count(&self) -> usize {
		self.fold(Step::Continue(0), |_, n| Step::Continue(n + 1)).into_acc()
	}

	/// Whether `val` is anywhere in the zipper.
	///
	/// Checks the cursor, then the right side, then the left side,
	/// so unlike a fold this sees the whole sequence.
	pub fn contains(&self, val: &T) -> bool where T: PartialEq {
		self.cursor() == Some(val)
			|| self.right_stack().iter().any(|e| e == val)
			|| self.left_stack().iter().any(|e| e == val)
	}

	/// owned elements from the cursor to the end
	pub fn iter(&self) -> IntoIter<T> {
		self.clone().into_iter()
	}
}

type YieldOne<T> = fn(&T, Option<T>) -> Step<Option<T>>;

fn yield_one<T: Clone>(elem: &T, _: Option<T>) -> Step<Option<T>> {
	Step::Suspend(Some(elem.clone()))
}

/// Iterator from the cursor rightward, suspending the fold after each element
pub struct IntoIter<T> {
	state: Option<Suspension<T, YieldOne<T>>>,
}

impl<T: Clone> Iterator for IntoIter<T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		let susp = self.state.take()?;
		match susp.resume(Step::Continue(None)) {
			Folded::Suspended(elem, rest) => {
				self.state = Some(rest);
				elem
			}
			// the last element finishes the fold as it suspends
			Folded::Done(elem) => elem,
			Folded::Halted(_) => None,
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let n = self.state.as_ref().map_or(0, |s| s.zipper.len() - s.zipper.position());
		(0, Some(n))
	}
}

impl<T: Clone> IntoIterator for Zipper<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	fn into_iter(self) -> IntoIter<T> {
		let step: YieldOne<T> = yield_one::<T>;
		IntoIter { state: Some(Suspension { zipper: self, step: Rc::new(step) }) }
	}
}

/// each value is inserted and then passed over, landing on the left
impl<T: Clone> Extend<T> for Zipper<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for val in iter {
			*self = self.insert(val).move_right();
		}
	}
}

/// the collected zipper is focused past its last element
impl<T: Clone> FromIterator<T> for Zipper<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut zip = Zipper::new();
		zip.extend(iter);
		zip
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn sum(x: &i32, acc: i32) -> Step<i32> { Step::Continue(acc + x) }

	#[test]
	fn test_fold_from_cursor() {
		let z = Zipper::between(vec![1,2,3], vec![4,5]).unwrap();
		let res = z.fold(Step::Continue(0), sum);
		assert!(res.is_done());
		assert_eq!(9, res.into_acc());
		assert_eq!(15, z.reset_to_start().fold(Step::Continue(0), sum).into_acc());
	}

	#[test]
	fn test_suspend_resume() {
		let z = Zipper::between(vec![1], vec![2,3,4,5]).unwrap();
		let res = z.fold(Step::Continue(0), |x, acc| {
			if *x == 3 { Step::Suspend(acc) } else { Step::Continue(acc + x) }
		});
		let susp = match res {
			Folded::Suspended(acc, susp) => { assert_eq!(2, acc); susp }
			other => panic!("expected a suspension, got {:?}", other),
		};
		assert_eq!(Some(&4), susp.zipper().cursor());

		let first = susp.resume(Step::Continue(4));
		assert!(first.is_done());
		assert_eq!(13, first.into_acc());
		// the suspension is not used up
		assert_eq!(13, susp.resume(Step::Continue(4)).into_acc());
		assert_eq!(9, susp.resume(Step::Continue(0)).into_acc());
	}

	#[test]
	fn test_initial_directives() {
		let z = Zipper::at_start(vec![1,2]).unwrap();
		let res = z.fold(Step::Halt(7), sum);
		assert!(matches!(res, Folded::Halted(7)));

		let res = z.fold(Step::Suspend(7), sum);
		let susp = match res {
			Folded::Suspended(7, susp) => susp,
			other => panic!("expected a suspension, got {:?}", other),
		};
		assert_eq!(&z, susp.zipper());
		assert_eq!(3, susp.resume(Step::Continue(0)).into_acc());
		assert!(matches!(susp.resume(Step::Halt(1)), Folded::Halted(1)));
	}

	#[test]
	fn test_end_wins_over_suspend() {
		let end = Zipper::at_end(vec![1,2]);
		assert!(matches!(end.fold(Step::Suspend(0), sum), Folded::Done(0)));
		assert!(matches!(Zipper::<i32>::new().fold(Step::Continue(5), sum), Folded::Done(5)));

		// suspending on the last element runs off the end
		let z = Zipper::at_start(vec![1,2]).unwrap();
		let res = z.fold(Step::Continue(0), |x, acc| {
			if *x == 2 { Step::Suspend(acc + x) } else { Step::Continue(acc + x) }
		});
		assert!(matches!(res, Folded::Done(3)));
	}

	#[test]
	fn test_halt_stops_early() {
		let z = Zipper::at_start(vec![1,2,3,4]).unwrap();
		let seen = std::cell::RefCell::new(Vec::new());
		let res = z.fold(Step::Continue(0), |x, acc| {
			seen.borrow_mut().push(*x);
			if *x == 2 { Step::Halt(acc) } else { Step::Continue(acc + x) }
		});
		assert!(matches!(res, Folded::Halted(1)));
		assert_eq!(vec![1,2], *seen.borrow());
	}

	#[test]
	fn test_find() {
		let z = Zipper::between(vec![1,8], vec![3,4,6]).unwrap();
		assert_eq!(Some(4), z.find(|x| x % 2 == 0));
		assert_eq!(None, z.find(|x| *x == 8));
		assert_eq!(Some(8), z.reset_to_start().find(|x| *x == 8));
	}

	#[test]
	fn test_contains() {
		assert!(!Zipper::<i32>::new().contains(&0));
		assert!(Zipper::at_end(vec![1,3,5]).contains(&5));
		assert!(Zipper::at_start(vec![10]).unwrap().contains(&10));
		let z = Zipper::between(vec![1], vec![2,3]).unwrap();
		assert!(z.contains(&1) && z.contains(&2) && z.contains(&3));
		assert!(!z.contains(&4));
	}

	#[test]
	fn test_counts_agree() {
		let z = Zipper::between(vec!['a','b'], vec!['c','d','e']).unwrap();
		assert_eq!(3, z.fold_count());
		assert_eq!(z.len(), z.reset_to_start().fold_count());
		assert_eq!(0, z.reset_to_end().fold_count());
	}

	#[test]
	fn test_iter() {
		let z = Zipper::between(vec![1,2], vec![3,4]).unwrap();
		assert_eq!(vec![3,4], z.iter().collect::<Vec<_>>());
		assert_eq!(vec![1,2,3,4], z.reset_to_start().into_iter().collect::<Vec<_>>());
		assert_eq!(4, z.reset_to_start().iter().count());
		assert_eq!(0, Zipper::<u8>::new().iter().count());
		assert_eq!(vec![Some(1), None], Zipper::at_start(vec![Some(1), None]).unwrap().iter().collect::<Vec<_>>());
		// reversed past the end, the whole sequence is still ahead
		assert_eq!(vec![2,1], Zipper::at_end(vec![1,2]).reverse().iter().collect::<Vec<_>>());
	}

	#[test]
	fn test_collect() {
		let z: Zipper<_> = vec![1,2,3].into_iter().collect();
		assert!(z.is_at_end());
		assert_eq!(Zipper::at_end(vec![1,2,3]), z);

		let mut z = Zipper::at_start(vec![9]).unwrap();
		z.extend(vec![1,2]);
		assert_eq!(Some(&9), z.cursor());
		assert_eq!(vec![1,2,9], z.to_vec());
	}
}
