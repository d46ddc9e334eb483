//! # Rotated Sorted Array Search
//!
//! Binary search over an ascending array of distinct values that was rotated at an
//! unknown pivot, e.g. `[4, 5, 6, 7, 0, 1, 2]`.
//!
//! At every step one of the two halves around `mid` is ascending. Comparing the
//! first element with `nums[mid]` tells which one, and the target's value range
//! decides whether that half is kept.

use tracing::trace;

/// Index of `target` in the rotated ascending slice `nums`, or `None` if it is absent.
///
/// `nums` must not contain duplicates.
pub fn search<T: Ord>(nums: &[T], target: &T) -> Option<usize> {
    let (first, last) = (nums.first()?, nums.last()?);
    let (mut left, mut right) = (0, nums.len() - 1);

    while left < right {
        let mid: usize = left + (right - left) / 2;
        let left_ascending: bool = first <= &nums[mid];

        let keep_left: bool = if left_ascending {
            first <= target && target <= &nums[mid]
        } else {
            !(&nums[mid] < target && target <= last)
        };

        if keep_left {
            right = mid;
        } else {
            left = mid + 1;
        }
        trace!(left, right, mid, "narrowed rotated search");
    }

    (&nums[left] == target).then_some(left)
}

/// [`search`] over `i32` values with `-1` standing for "not found".
pub fn search_index(nums: &[i32], target: i32) -> i64 {
    match search(nums, &target) {
        Some(idx) => idx as i64,
        None => -1,
    }
}

/// Index of the smallest element, i.e. how far the ascending array was rotated.
///
/// Returns 0 for an empty or unrotated slice.
pub fn pivot<T: Ord>(nums: &[T]) -> usize {
    let Some(last) = nums.last() else {
        return 0;
    };
    let (mut left, mut right) = (0, nums.len() - 1);

    while left < right {
        let mid: usize = left + (right - left) / 2;
        if &nums[mid] > last {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    left
}

/// Whether `nums` is a rotation of a strictly ascending sequence.
pub fn is_rotated_ascending<T: Ord>(nums: &[T]) -> bool {
    let descents: usize = nums.windows(2).filter(|pair| pair[0] >= pair[1]).count();
    match (descents, nums.first(), nums.last()) {
        (0, _, _) => true,
        (1, Some(first), Some(last)) => last < first,
        _ => false,
    }
}
