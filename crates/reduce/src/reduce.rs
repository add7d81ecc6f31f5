//! Fold and reduce operators.
//!
//! All four operators share one traversal discipline: the sequence is turned
//! into an iterator once, pulled left to right, and never re-entered. The
//! combining function sees each element exactly once, in order, paired with
//! the accumulator built so far.
//!
//! | operator         | seed        | combine                  | result                           |
//! |------------------|-------------|--------------------------|----------------------------------|
//! | [`reduce()`]     | `Option<T>` | `(T, T) -> T`            | `Result<T, EmptyReductionError>` |
//! | [`fold()`]       | `A`         | `(A, T) -> A`            | `A`                              |
//! | [`try_fold()`]   | `A`         | `(A, T) -> Result<A, E>` | `Result<A, E>`                   |
//! | [`try_reduce()`] | `Option<T>` | `(T, T) -> Result<T, E>` | `Result<T, ReduceError<E>>`      |

use crate::errors::{EmptyReductionError, ReduceError};

/// Reduce `sequence` to a single value by repeated left-to-right application
/// of `combine`, optionally starting from `seed`.
///
/// - `Some(seed)`: returns `combine(...combine(combine(seed, s0), s1)..., sn)`,
///   or `seed` itself for an empty sequence. `combine` runs `n` times.
/// - `None`: the first element becomes the accumulator. A single element is
///   returned without calling `combine`; `combine` runs `n - 1` times. An
///   empty sequence is an [`EmptyReductionError`].
///
/// A present seed is always honoured, whatever its value:
///
/// ```
/// use reduce::reduce;
///
/// let words = ["a", "b"].map(String::from);
/// let joined = reduce(|acc, w| acc + &w, words, Some(String::new()));
/// assert_eq!(joined.as_deref(), Ok("ab"));
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(seeded = seed.is_some()))]
pub fn reduce<T, I, F>(
    combine: F,
    sequence: I,
    seed: Option<T>,
) -> Result<T, EmptyReductionError>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> T,
{
    let mut elements = sequence.into_iter();
    let initial = initial_accumulator(seed, &mut elements)?;
    Ok(elements.fold(initial, combine))
}

/// Left fold with an always-present seed and an accumulator type of its own.
///
/// ```
/// use reduce::fold;
///
/// let lengths = fold(
///     |mut acc: Vec<usize>, s: &str| {
///         acc.push(s.len());
///         acc
///     },
///     ["ab", "c"],
///     Vec::new(),
/// );
/// assert_eq!(lengths, vec![2, 1]);
/// ```
#[tracing::instrument(level = "trace", skip_all)]
pub fn fold<A, T, I, F>(combine: F, sequence: I, seed: A) -> A
where
    I: IntoIterator<Item = T>,
    F: FnMut(A, T) -> A,
{
    sequence.into_iter().fold(seed, combine)
}

/// Seeded fold whose combining function may fail.
///
/// The first `Err` ends the traversal: no further elements are pulled from
/// the sequence, and the error is returned as-is.
#[tracing::instrument(level = "trace", skip_all)]
pub fn try_fold<A, T, I, F, E>(mut combine: F, sequence: I, seed: A) -> Result<A, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(A, T) -> Result<A, E>,
{
    sequence
        .into_iter()
        .enumerate()
        .try_fold(seed, |acc, (step, element)| {
            combine(acc, element).inspect_err(|_| {
                tracing::debug!(step, "combining function failed");
            })
        })
}

/// [`reduce()`] with a fallible combining function.
///
/// Empty-and-unseeded is reported as [`ReduceError::Empty`] before `combine`
/// is called; a failing `combine` stops the traversal and its error is
/// wrapped in [`ReduceError::Combine`] untouched.
#[tracing::instrument(level = "trace", skip_all, fields(seeded = seed.is_some()))]
pub fn try_reduce<T, I, F, E>(
    combine: F,
    sequence: I,
    seed: Option<T>,
) -> Result<T, ReduceError<E>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> Result<T, E>,
{
    let mut elements = sequence.into_iter();
    let initial = initial_accumulator(seed, &mut elements)?;
    try_fold(combine, elements, initial).map_err(ReduceError::Combine)
}

/// The seed if one was supplied, otherwise the first element.
fn initial_accumulator<T>(
    seed: Option<T>,
    elements: &mut impl Iterator<Item = T>,
) -> Result<T, EmptyReductionError> {
    match seed {
        Some(seed) => Ok(seed),
        None => elements.next().ok_or_else(|| {
            tracing::debug!("empty sequence reduced without a seed");
            EmptyReductionError
        }),
    }
}
