//! List zipper
//! - a cursor within a persistent sequence, built from two stacks
//! - moving the cursor or editing around it is O(1)
//! - every operation returns a new zipper, old ones stay valid
//!
//! The left stack holds the elements before the cursor, nearest
//! first. The right stack holds the elements after it, in order.
//! The cursor itself is `None` once focus has moved past the last
//! element, so a zipper over `Option<T>` can still hold `None` as data.

use tracing::trace;

use crate::error::{Error, Result};
use crate::stack::Stack;

/// A cursor in a persistent sequence
///
/// Fields are declared (and printed by `Debug`) in reading order:
/// everything before the cursor, the cursor, everything after it.
#[derive(Debug, PartialEq, Eq)]
pub struct Zipper<T> {
	left: Stack<T>,
	cursor: Option<T>,
	right: Stack<T>,
}

impl<T: Clone> Clone for Zipper<T> {
	fn clone(&self) -> Self {
		Zipper {
			left: self.left.clone(),
			cursor: self.cursor.clone(),
			right: self.right.clone(),
		}
	}
}

impl<T> Default for Zipper<T> {
	fn default() -> Self {
		Zipper::new()
	}
}

impl<T> Zipper<T> {

	/// the empty zipper, with no elements and no cursor
	pub fn new() -> Self {
		Zipper { left: Stack::new(), cursor: None, right: Stack::new() }
	}

	/// assemble a zipper from its parts
	///
	/// `left` is nearest-first. Fails with `Error::Gap` if there
	/// is no cursor but `right` holds elements.
	pub fn from_parts(left: Stack<T>, cursor: Option<T>, right: Stack<T>) -> Result<Self> {
		let zip = Zipper { left, cursor, right };
		zip.validate()?;
		Ok(zip)
	}

	// inspectors

	pub fn cursor(&self) -> Option<&T> { self.cursor.as_ref() }
	pub fn left_stack(&self) -> &Stack<T> { &self.left }
	pub fn right_stack(&self) -> &Stack<T> { &self.right }
	/// element just before the cursor
	pub fn peek_left(&self) -> Option<&T> { self.left.peek() }
	/// element just after the cursor
	pub fn peek_right(&self) -> Option<&T> { self.right.peek() }
	/// number of elements before the cursor
	pub fn position(&self) -> usize { self.left.len() }

	pub fn is_at_start(&self) -> bool {
		self.left.is_empty()
	}

	/// focus is past the last element
	pub fn is_at_end(&self) -> bool {
		self.cursor.is_none() && self.right.is_empty()
	}

	pub fn is_empty(&self) -> bool {
		self.left.is_empty() && self.cursor.is_none() && self.right.is_empty()
	}

	pub fn len(&self) -> usize {
		self.left.len() + self.right.len() + self.cursor.is_some() as usize
	}

	/// Checks that there is no hole between the cursor and the right side.
	///
	/// The only way to reach that shape through the zipper's own
	/// operations is `reverse` on a zipper focused past its end.
	pub fn validate(&self) -> Result<()> {
		if self.cursor.is_none() && !self.right.is_empty() {
			return Err(Error::Gap(self.right.len()))
		}
		Ok(())
	}

	/// all elements, first to last, regardless of the cursor
	pub fn iter_all(&self) -> impl Iterator<Item = &T> + '_ {
		let mut before: Vec<&T> = self.left.iter().collect();
		before.reverse();
		before.into_iter()
			.chain(self.cursor.as_ref())
			.chain(self.right.iter())
	}
}

impl<T: Clone> Zipper<T> {

	/// focus on the first element of `items`
	pub fn at_start<I: IntoIterator<Item = T>>(items: I) -> Result<Self> {
		let mut items = items.into_iter();
		let first = items.next().ok_or(Error::EmptySequence)?;
		Ok(Zipper {
			left: Stack::new(),
			cursor: Some(first),
			right: items.collect(),
		})
	}

	/// focus on the first element of `right`, with `left` before it
	pub fn between<L, R>(left: L, right: R) -> Result<Self>
	where
		L: IntoIterator<Item = T>,
		R: IntoIterator<Item = T>,
	{
		let mut right = right.into_iter();
		let first = right.next().ok_or(Error::EmptySequence)?;
		Ok(Zipper {
			left: left.into_iter().fold(Stack::new(), |s, e| s.push(e)),
			cursor: Some(first),
			right: right.collect(),
		})
	}

	/// focus just past the last element of `items`
	pub fn at_end<I: IntoIterator<Item = T>>(items: I) -> Self {
		Zipper {
			left: items.into_iter().fold(Stack::new(), |s, e| s.push(e)),
			cursor: None,
			right: Stack::new(),
		}
	}

	pub fn to_vec(&self) -> Vec<T> {
		self.iter_all().cloned().collect()
	}

	// navigation

	/// Moves focus one element left, no-op at the start.
	///
	/// An absent cursor is dropped rather than carried to the right.
	pub fn move_left(&self) -> Self {
		match self.left.pop() {
			None => self.clone(),
			Some((head, tail)) => Zipper {
				left: tail,
				right: self.push_cursor(&self.right),
				cursor: Some(head),
			},
		}
	}

	/// Moves focus one element right, no-op at the end.
	///
	/// From the last element the cursor moves onto the left side
	/// and focus is left past the end.
	pub fn move_right(&self) -> Self {
		match self.right.pop() {
			None if self.cursor.is_none() => self.clone(),
			None => Zipper {
				left: self.push_cursor(&self.left),
				cursor: None,
				right: Stack::new(),
			},
			Some((head, tail)) => Zipper {
				left: self.push_cursor(&self.left),
				cursor: Some(head),
				right: tail,
			},
		}
	}

	// `side` with the cursor on top, if there is one
	fn push_cursor(&self, side: &Stack<T>) -> Stack<T> {
		match self.cursor {
			Some(ref c) => side.push(c.clone()),
			None => side.clone(),
		}
	}

	// edits

	/// `val` becomes the cursor, shifting any old cursor to the right
	pub fn insert(&self, val: T) -> Self {
		Zipper {
			left: self.left.clone(),
			right: self.push_cursor(&self.right),
			cursor: Some(val),
		}
	}

	/// drops the cursor, pulling the next element into focus
	pub fn delete(&self) -> Self {
		if self.cursor.is_none() { return self.clone() }
		match self.right.pop() {
			Some((head, tail)) => Zipper {
				left: self.left.clone(),
				cursor: Some(head),
				right: tail,
			},
			None => Zipper {
				left: self.left.clone(),
				cursor: None,
				right: Stack::new(),
			},
		}
	}

	/// adds `val` just before the cursor
	pub fn push(&self, val: T) -> Self {
		Zipper {
			left: self.left.push(val),
			cursor: self.cursor.clone(),
			right: self.right.clone(),
		}
	}

	/// drops the element just before the cursor, if any
	pub fn pop(&self) -> Self {
		match self.left.pull() {
			None => self.clone(),
			Some(tail) => Zipper {
				left: tail,
				cursor: self.cursor.clone(),
				right: self.right.clone(),
			},
		}
	}

	/// Swaps the left and right sides, O(1).
	///
	/// The cursor keeps its value, and what was `k` elements from
	/// the start is now `k` elements from the end. The order within
	/// each side is untouched, so the logical sequence reads backwards.
	pub fn reverse(&self) -> Self {
		Zipper {
			left: self.right.clone(),
			cursor: self.cursor.clone(),
			right: self.left.clone(),
		}
	}

	pub fn replace(&self, val: T) -> Self {
		Zipper {
			left: self.left.clone(),
			cursor: Some(val),
			right: self.right.clone(),
		}
	}

	/// Refocuses on the first element. O(n)
	pub fn reset_to_start(&self) -> Self {
		if self.left.is_empty() && self.right.is_empty() { return self.clone() }
		trace!(len = self.len(), "rebuilding zipper at start");
		let mut all = self.to_vec().into_iter();
		let zip = Zipper {
			left: Stack::new(),
			cursor: all.next(),
			right: all.collect(),
		};
		debug_assert!(zip.validate().is_ok());
		zip
	}

	/// Refocuses past the last element. O(n)
	pub fn reset_to_end(&self) -> Self {
		if self.right.is_empty() { return self.clone() }
		trace!(len = self.len(), "rebuilding zipper at end");
		let zip = Zipper::at_end(self.to_vec());
		debug_assert!(zip.validate().is_ok());
		zip
	}
}
