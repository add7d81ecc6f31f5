//! Error types for reduction.
//!
//! There is exactly one failure the operators themselves can produce:
//! reducing an empty sequence without a seed. Errors returned by a fallible
//! combining function belong to the caller and are carried through
//! [`ReduceError::Combine`] without being inspected or rewritten.

/// An empty sequence was reduced without a seed value.
///
/// Raised before the combining function is ever called. The caller can
/// recover by supplying a seed or by treating the empty case with a default
/// of their choosing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, thiserror::Error)]
#[error("cannot reduce an empty sequence without a seed value")]
pub struct EmptyReductionError;

/// Failure of a reduction whose combining function is itself fallible.
///
/// `E` is the combining function's error type.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReduceError<E> {
    /// The sequence was empty and no seed was supplied.
    #[error(transparent)]
    Empty(#[from] EmptyReductionError),
    /// The combining function failed; the value is exactly what it returned
    /// and is reported as this error's `source()`.
    #[error("combining function failed")]
    Combine(#[source] E),
}

impl<E> ReduceError<E> {
    /// Whether this is the empty-and-unseeded failure.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// Borrow the combining function's error, if that is what failed.
    #[inline]
    pub fn combine_error(&self) -> Option<&E> {
        match self {
            Self::Combine(err) => Some(err),
            Self::Empty(_) => None,
        }
    }

    /// Take the combining function's error, if that is what failed.
    pub fn into_combine_error(self) -> Option<E> {
        match self {
            Self::Combine(err) => Some(err),
            Self::Empty(_) => None,
        }
    }
}
