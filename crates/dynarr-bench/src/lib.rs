//! Benchmark workloads for the dynarr container.
//!
//! - [`sequential_fill`]: append `n` values from the default capacity
//! - [`churn`]: interleaved middle inserts and front removals
//! - [`ReferenceSizes`]: element counts shared by all benchmark groups

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr::DynamicArray;

/// Element counts used across benchmark groups.
pub struct ReferenceSizes;

impl ReferenceSizes {
    /// Small enough to stay inside a few cache lines.
    pub const SMALL: usize = 16;
    /// Typical working-set size.
    pub const MEDIUM: usize = 1_000;
    /// Large enough to exercise many growth steps.
    pub const LARGE: usize = 100_000;

    /// All sizes, smallest first.
    pub const ALL: [usize; 3] = [Self::SMALL, Self::MEDIUM, Self::LARGE];
}

/// Build an array by appending `0..n` to a default-capacity array.
pub fn sequential_fill(n: usize) -> DynamicArray<u64> {
    let mut arr = DynamicArray::new();
    for i in 0..n as u64 {
        arr.push(i);
    }
    arr
}

/// Run `rounds` of insert-in-the-middle followed by remove-at-front.
///
/// The array length is unchanged afterwards; returns the sum of the
/// removed values so the work cannot be optimised away.
pub fn churn(arr: &mut DynamicArray<u64>, rounds: usize) -> u64 {
    let mut removed = 0u64;
    for round in 0..rounds as u64 {
        let mid = arr.len() / 2;
        if arr.insert(mid, round).is_err() {
            break;
        }
        match arr.remove(0) {
            Ok(v) => removed = removed.wrapping_add(v),
            Err(_) => break,
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_fill_has_requested_len() {
        let arr = sequential_fill(ReferenceSizes::MEDIUM);
        assert_eq!(arr.len(), 1_000);
        assert_eq!(arr.back(), Some(&999));
    }

    #[test]
    fn churn_preserves_length() {
        let mut arr = sequential_fill(10);
        let removed = churn(&mut arr, 4);
        assert_eq!(arr.len(), 10);
        assert_eq!(removed, 6);
    }

    #[test]
    fn churn_on_empty_array_returns_each_inserted_value() {
        let mut arr = DynamicArray::new();
        let removed = churn(&mut arr, 3);
        assert_eq!(removed, 3);
        assert!(arr.is_empty());
    }
}
