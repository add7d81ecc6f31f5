//! Method-call spelling of the reduction operators.
//!
//! `Iterator::reduce` already exists in `std` (unseeded, returning `Option`),
//! and `Iterator::try_reduce` is reserved there, so the methods here carry a
//! `_with` suffix.

use crate::errors::{EmptyReductionError, ReduceError};
use crate::reduce::{reduce, try_reduce};

/// Seeded reduction on any iterator.
///
/// ```
/// use reduce::Reduction;
///
/// assert_eq!((1..=5).reduce_with(None, |a, b| a * b), Ok(120));
/// assert_eq!((1..1).reduce_with(Some(0), |a, b| a + b), Ok(0));
/// ```
pub trait Reduction: Iterator + Sized {
    /// Same as [`reduce`](crate::reduce()) with `self` as the sequence.
    fn reduce_with<F>(
        self,
        seed: Option<Self::Item>,
        combine: F,
    ) -> Result<Self::Item, EmptyReductionError>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        reduce(combine, self, seed)
    }

    /// Same as [`try_reduce`](crate::try_reduce()) with `self` as the sequence.
    fn try_reduce_with<F, E>(
        self,
        seed: Option<Self::Item>,
        combine: F,
    ) -> Result<Self::Item, ReduceError<E>>
    where
        F: FnMut(Self::Item, Self::Item) -> Result<Self::Item, E>,
    {
        try_reduce(combine, self, seed)
    }
}

impl<I: Iterator> Reduction for I {}

#[cfg(test)]
mod tests;
