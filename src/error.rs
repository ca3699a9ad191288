use thiserror::Error;

/// The error returned by [`LinkedBst::remove()`] when the requested item is
/// not stored in the tree.
///
/// The tree is left unchanged when this error is returned.
///
/// [`LinkedBst::remove()`]: crate::LinkedBst::remove
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("item not found in tree")]
pub struct NotFound;
