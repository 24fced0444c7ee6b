use thiserror::Error;

/// Errors from building or checking a zipper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
	/// a focused zipper needs at least one element for the cursor
	#[error("cannot focus a cursor on an empty sequence")]
	EmptySequence,
	/// the cursor is absent while elements remain on the right
	#[error("zipper has no cursor but {0} element(s) to its right")]
	Gap(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
