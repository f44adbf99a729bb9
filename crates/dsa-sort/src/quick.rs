//! Quicksort, 3-way quicksort and quickselect.

use std::cmp::Ordering;

use crate::shuffle::knuth_shuffle;

/// Quicksort: shuffle, partition around `a[lo]`, recurse on both sides.
/// The shuffle is the probabilistic guard against quadratic worst cases.
/// Not stable.
pub fn quick_sort<T: Ord>(a: &mut [T]) {
    knuth_shuffle(a);
    let n = a.len();
    sort_range(a, 0, n);
}

fn sort_range<T: Ord>(a: &mut [T], lo: usize, hi: usize) {
    if hi - lo <= 1 {
        return;
    }
    let j = partition(a, lo, hi);
    // a[j] is in its final position
    sort_range(a, lo, j);
    sort_range(a, j + 1, hi);
}

/// Partitions `a[lo..hi]` around the entry at `lo` and returns its final
/// index `j`: nothing left of `j` is larger, nothing right of `j` is
/// smaller.
///
/// Scans `i` rightward past entries smaller than the pivot and `j`
/// leftward past entries larger, swapping the out-of-place pair, until the
/// pointers cross. Both pointers advance before each scan so runs of keys
/// equal to the pivot cannot stall the loop.
fn partition<T: Ord>(a: &mut [T], lo: usize, hi: usize) -> usize {
    let mut i = lo;
    let mut j = hi;
    loop {
        i += 1;
        while i < hi - 1 && a[i] < a[lo] {
            i += 1;
        }
        j -= 1;
        while j > lo && a[j] > a[lo] {
            j -= 1;
        }
        if i >= j {
            break;
        }
        a.swap(i, j);
    }
    a.swap(lo, j);
    j
}

/// Dijkstra's 3-way quicksort: partitions into entries less than, equal to
/// and greater than the pivot, so duplicate-heavy inputs skip the equal
/// region entirely.
pub fn three_way_quick_sort<T: Ord>(a: &mut [T]) {
    let n = a.len();
    sort_range_3way(a, 0, n);
}

fn sort_range_3way<T: Ord>(a: &mut [T], lo: usize, hi: usize) {
    if hi - lo <= 1 {
        return;
    }
    // invariant: a[lo..lt] < pivot, a[lt..i] == pivot, a[gt+1..hi] > pivot,
    // and the pivot itself sits at lt, so a[lt] stands in for it
    let mut lt = lo;
    let mut i = lo;
    let mut gt = hi - 1;
    while i <= gt {
        match a[i].cmp(&a[lt]) {
            Ordering::Less => {
                a.swap(i, lt);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                a.swap(i, gt);
                gt -= 1;
            }
            Ordering::Equal => i += 1,
        }
    }
    sort_range_3way(a, lo, lt);
    sort_range_3way(a, gt + 1, hi);
}

/// Returns the `k`-th smallest entry (0-based) by repeatedly partitioning
/// only the side that contains `k`. The slice is shuffled and partially
/// reordered in the process.
///
/// Returns `None` on an empty slice. Panics when `k` is out of range for a
/// non-empty slice.
pub fn quick_select<T: Ord>(a: &mut [T], k: usize) -> Option<&T> {
    if a.is_empty() {
        return None;
    }
    let n = a.len();
    assert!(k < n, "selection index {k} is out of range for {n} elements");
    if n == 1 {
        return Some(&a[0]);
    }

    knuth_shuffle(a);
    let mut lo = 0;
    let mut hi = n;
    while lo < hi - 1 {
        let j = partition(a, lo, hi);
        match k.cmp(&j) {
            Ordering::Less => hi = j,
            Ordering::Greater => lo = j + 1,
            Ordering::Equal => break,
        }
    }
    Some(&a[k])
}
