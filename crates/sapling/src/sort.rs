//! Quadratic bubble sort

use crate::error::Result;
use crate::{ops, Value};

/// Sort `arr` ascending in place with adjacent compare-and-swap passes.
///
/// Always performs `n(n-1)/2` comparisons. Returns the same slice.
pub fn bubble_sort<T: PartialOrd>(arr: &mut [T]) -> &mut [T] {
    let n = arr.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
    arr
}

/// Bubble sort over runtime values.
///
/// Incomparable neighbours (a string next to a number, NaN) are a type
/// error; the slice may be partially sorted when that happens.
///
/// ```
/// use sapling::{inefficient_sort, Value};
///
/// let mut values = vec![Value::Int(3), Value::Int(1), Value::Int(2)];
/// inefficient_sort(&mut values).unwrap();
/// assert_eq!(values, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
/// ```
pub fn inefficient_sort(arr: &mut [Value]) -> Result<&mut [Value]> {
    let n = arr.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if ops::gt(&arr[j], &arr[j + 1])? {
                arr.swap(j, j + 1);
            }
        }
    }
    Ok(arr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::cmp::Ordering;

    fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().copied().map(Value::Int).collect()
    }

    #[test]
    fn test_sort_basic() {
        let mut v = ints(&[3, 1, 2]);
        assert_eq!(inefficient_sort(&mut v).unwrap(), ints(&[1, 2, 3]).as_slice());
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty: Vec<Value> = vec![];
        assert!(inefficient_sort(&mut empty).unwrap().is_empty());
        let mut one = ints(&[7]);
        assert_eq!(inefficient_sort(&mut one).unwrap(), ints(&[7]).as_slice());
    }

    #[test]
    fn test_sort_returns_same_slice() {
        let mut v = ints(&[2, 1]);
        let ptr = v.as_ptr();
        let sorted = inefficient_sort(&mut v).unwrap();
        assert_eq!(sorted.as_ptr(), ptr);
    }

    #[test]
    fn test_sort_idempotent() {
        let mut v = ints(&[5, -1, 3, 3, 0]);
        inefficient_sort(&mut v).unwrap();
        let once = v.clone();
        inefficient_sort(&mut v).unwrap();
        assert_eq!(v, once);
    }

    #[test]
    fn test_sort_mixed_numbers() {
        let mut v = vec![Value::Float(2.5), Value::Int(1), Value::Int(3)];
        inefficient_sort(&mut v).unwrap();
        assert_eq!(v, vec![Value::Int(1), Value::Float(2.5), Value::Int(3)]);
    }

    #[test]
    fn test_sort_incomparable() {
        let mut v = vec![Value::Int(1), Value::string("a")];
        assert!(inefficient_sort(&mut v).is_err());
    }

    /// Counts every `partial_cmp` made through it.
    #[derive(Debug)]
    struct Counted<'a> {
        value: i32,
        calls: &'a Cell<usize>,
    }

    impl PartialEq for Counted<'_> {
        fn eq(&self, other: &Self) -> bool {
            self.value == other.value
        }
    }

    impl PartialOrd for Counted<'_> {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.calls.set(self.calls.get() + 1);
            self.value.partial_cmp(&other.value)
        }
    }

    fn comparisons_for(values: &[i32]) -> usize {
        let calls = Cell::new(0);
        let mut items: Vec<Counted<'_>> = values
            .iter()
            .map(|&value| Counted {
                value,
                calls: &calls,
            })
            .collect();
        bubble_sort(&mut items);
        calls.get()
    }

    #[test]
    fn test_bubble_sort_comparison_count() {
        // n(n-1)/2 regardless of input order
        assert_eq!(comparisons_for(&[]), 0);
        assert_eq!(comparisons_for(&[1]), 0);
        assert_eq!(comparisons_for(&[1, 2, 3, 4, 5]), 10);
        assert_eq!(comparisons_for(&[5, 4, 3, 2, 1]), 10);
        assert_eq!(comparisons_for(&[3, 1, 4, 1, 5, 9, 2]), 21);
    }

    #[test]
    fn test_bubble_sort_generic() {
        let mut v = vec![9, 4, 7, 1];
        assert_eq!(bubble_sort(&mut v), &[1, 4, 7, 9]);
        let mut words = vec!["pear", "apple"];
        assert_eq!(bubble_sort(&mut words), &["apple", "pear"]);
    }
}
