use super::*;
use pretty_assertions::assert_eq;

#[test]
fn reduce_with_on_ranges() {
    assert_eq!((1..=4).reduce_with(None, |a, b| a + b), Ok(10));
    assert_eq!((1..=4).reduce_with(Some(10), |a, b| a + b), Ok(20));
}

#[test]
fn reduce_with_empty() {
    let nothing = std::iter::empty::<i32>;
    let sum = |a: i32, b: i32| a + b;

    assert_eq!(nothing().reduce_with(None, sum), Err(EmptyReductionError));
    assert_eq!(nothing().reduce_with(Some(0), sum), Ok(0));
}

#[test]
fn reduce_with_agrees_with_std_reduce_when_unseeded() {
    let items = vec![7, 2, 9, 4];
    let digits = || items.iter().copied();
    let shift_in = |a: i32, b: i32| a * 10 + b;

    assert_eq!(
        digits().reduce_with(None, shift_in).ok(),
        digits().reduce(shift_in)
    );
}

#[test]
fn reduce_with_after_adapters() {
    let longest = ["pear", "fig", "banana", "kiwi"]
        .into_iter()
        .filter(|s| s.len() > 3)
        .reduce_with(None, |a, b| if b.len() > a.len() { b } else { a });
    assert_eq!(longest, Ok("banana"));
}

#[test]
fn try_reduce_with_reports_both_failures() {
    let checked_sum = |a: u8, b: u8| a.checked_add(b).ok_or("overflow");
    let fits = [100, 100].into_iter().try_reduce_with(None, checked_sum);
    let overflows = [200, 100].into_iter().try_reduce_with(None, checked_sum);
    let empty = std::iter::empty().try_reduce_with(None, checked_sum);

    assert_eq!(fits, Ok(200));
    assert_eq!(overflows, Err(ReduceError::Combine("overflow")));
    assert_eq!(empty, Err(ReduceError::Empty(EmptyReductionError)));
}
