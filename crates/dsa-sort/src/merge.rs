//! Top-down and bottom-up mergesort.
//!
//! Both variants share [`merge`], which copies the range into an auxiliary
//! array and merges back. Equal keys keep their relative order, so the sort
//! is stable.

/// Top-down mergesort: split in half, sort each half recursively, merge.
pub fn merge_sort<T: Ord + Clone>(a: &mut [T]) {
    let n = a.len();
    sort_range(a, 0, n);
}

fn sort_range<T: Ord + Clone>(a: &mut [T], lo: usize, hi: usize) {
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(a, lo, mid);
    sort_range(a, mid, hi);
    merge(a, lo, mid, hi);
}

/// Bottom-up mergesort: one pass of merges for each subarray width
/// 1, 2, 4, ... so no recursion is needed.
pub fn bottom_up_merge_sort<T: Ord + Clone>(a: &mut [T]) {
    let n = a.len();
    if n <= 1 {
        return;
    }
    let mut size = 1;
    while size < n {
        let mut lo = 0;
        while lo < n - size {
            let mid = lo + size;
            let hi = usize::min(lo + 2 * size, n);
            merge(a, lo, mid, hi);
            lo += 2 * size;
        }
        size *= 2;
    }
}

/// Merges the sorted runs `a[lo..mid]` and `a[mid..hi]` in place.
///
/// When the runs are already in order (`a[mid - 1] <= a[mid]`) the copy is
/// skipped entirely. The left run wins ties.
pub fn merge<T: Ord + Clone>(a: &mut [T], lo: usize, mid: usize, hi: usize) {
    if hi - lo <= 1 {
        return;
    }
    debug_assert!(a[lo..mid].is_sorted(), "left run not sorted");
    debug_assert!(a[mid..hi].is_sorted(), "right run not sorted");

    if a[mid - 1] <= a[mid] {
        return;
    }

    // aux indices are relative to lo
    let aux: Vec<T> = a[lo..hi].to_vec();
    let left_end = mid - lo;
    let right_end = hi - lo;
    let (mut left, mut right) = (0, left_end);

    for merged in lo..hi {
        if left == left_end {
            a[merged..hi].clone_from_slice(&aux[right..]);
            break;
        }
        if right == right_end {
            a[merged..hi].clone_from_slice(&aux[left..left_end]);
            break;
        }
        if aux[left] <= aux[right] {
            a[merged] = aux[left].clone();
            left += 1;
        } else {
            a[merged] = aux[right].clone();
            right += 1;
        }
    }
}
