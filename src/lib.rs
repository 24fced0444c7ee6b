//! Persistent list zipper
//!
//! A `Zipper` is a cursor into a sequence with O(1) movement and
//! O(1) edits next to the cursor. Every operation returns a new
//! zipper and leaves the old one intact, since both sides are
//! persistent stacks that share structure between versions.
//!
//! A zipper can also be consumed from its cursor onward with a
//! resumable fold (see `fold`), which its iterator is built on.

pub mod error;
pub mod stack;
pub mod zipper;
pub mod zip;
pub mod fold;

pub use error::{Error, Result};
pub use fold::{Folded, Step, Suspension};
pub use stack::Stack;
pub use zip::{Cmd, Dir};
pub use zipper::Zipper;
