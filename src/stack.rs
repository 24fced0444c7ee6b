//! Persistent Linked List (Cons-list)
//!
//! `Stack` is the storage for both sides of a zipper. Every
//! operation returns a new stack that shares its tail with the
//! old one, so keeping old versions around is cheap.
//!
//! The length is cached at each node, which keeps `len` O(1).

use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

/// Common linked-list
pub struct Stack<T>(Option<Rc<Node<T>>>);

struct Node<T> {
	elem: T,
	len: usize,
	next: Option<Rc<Node<T>>>,
}

impl<T> Stack<T> {

	/// this is identical to `Stack::default()`
	pub fn new() -> Self {
		Stack(None)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_none()
	}

	pub fn len(&self) -> usize {
		self.0.as_ref().map_or(0, |n| n.len)
	}

	/// return a stack with the new item as head
	pub fn push(&self, elem: T) -> Self {
		Stack(Some(Rc::new(Node {
			len: self.len() + 1,
			elem: elem,
			next: self.0.clone(),
		})))
	}

	/// return the top item, if there is one
	pub fn peek(&self) -> Option<&T> {
		self.0.as_ref().map(|n| &n.elem)
	}

	/// return the stack without the top item (this is sometimes called `tail`)
	pub fn pull(&self) -> Option<Self> {
		self.0.as_ref().map(|n| Stack(n.next.clone()))
	}

	/// return an iterator over the elements from the top of the stack
	pub fn iter(&self) -> Iter<'_, T> {
		Iter { next: self.0.as_deref(), left: self.len() }
	}
}

impl<T: Clone> Stack<T> {

	/// the top item and the rest of the stack
	pub fn pop(&self) -> Option<(T, Self)> {
		self.0.as_ref().map(|n| (n.elem.clone(), Stack(n.next.clone())))
	}

	/// a new stack with the items in the opposite order, O(n)
	pub fn reverse(&self) -> Self {
		self.iter().fold(Stack::new(), |acc, e| acc.push(e.clone()))
	}

	/// builds a stack with `items[0]` on top
	pub fn from_vec(items: Vec<T>) -> Self {
		items.into_iter().rev().fold(Stack::new(), |acc, e| acc.push(e))
	}

	pub fn to_vec(&self) -> Vec<T> {
		self.iter().cloned().collect()
	}
}

// unlinks nodes one at a time, long stacks would otherwise
// overflow the call stack through recursive drops
impl<T> Drop for Stack<T> {
	fn drop(&mut self) {
		let mut next = self.0.take();
		while let Some(node) = next {
			match Rc::try_unwrap(node) {
				Ok(mut node) => next = node.next.take(),
				Err(_) => break,
			}
		}
	}
}

impl<T> Clone for Stack<T> {
	fn clone(&self) -> Self {
		Stack(self.0.clone())
	}
}

impl<T> Default for Stack<T> {
	fn default() -> Self {
		Stack::new()
	}
}

impl<T: PartialEq> PartialEq for Stack<T> {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.iter().eq(other.iter())
	}
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

/// collects with the first item on top, the reverse of pushing each in turn
impl<T: Clone> FromIterator<T> for Stack<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Stack::from_vec(iter.into_iter().collect())
	}
}

impl<T: Clone> From<Vec<T>> for Stack<T> {
	fn from(v: Vec<T>) -> Self {
		Stack::from_vec(v)
	}
}

/// Iterator for list items
pub struct Iter<'a, T> {
	next: Option<&'a Node<T>>,
	left: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<Self::Item> {
		self.next.map(|node| {
			self.next = node.next.as_deref();
			self.left -= 1;
			&node.elem
		})
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.left, Some(self.left))
	}
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a Stack<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
