//! Elementary sorts: selection, insertion and shellsort.

/// Selection sort: for each position, select the smallest remaining item
/// and swap it into place.
pub fn selection_sort<T: Ord>(a: &mut [T]) {
    for current in 0..a.len() {
        let mut smallest = current;
        for candidate in current + 1..a.len() {
            if a[candidate] < a[smallest] {
                smallest = candidate;
            }
        }
        if smallest != current {
            a.swap(current, smallest);
        }
    }
}

/// Insertion sort: sink each item leftward while it is smaller than its
/// left neighbor.
pub fn insertion_sort<T: Ord>(a: &mut [T]) {
    for i in 1..a.len() {
        let mut j = i;
        while j > 0 && a[j] < a[j - 1] {
            a.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Shellsort: insertion sort over a shrinking gap sequence, largest gap
/// first. Uses [`knuth_sequence`].
pub fn shell_sort<T: Ord>(a: &mut [T]) {
    let n = a.len();
    for &gap in knuth_sequence(n).iter().rev() {
        for i in gap..n {
            let mut j = i;
            while j >= gap && a[j] < a[j - gap] {
                a.swap(j, j - gap);
                j -= gap;
            }
        }
    }
}

/// Gap sequence from the recurrence `gap = 3*gap + 1`: every gap below
/// `n / 3`, ascending. Inputs too small for the recurrence fall back to
/// `[1]`, which degenerates shellsort into plain insertion sort.
pub fn knuth_sequence(n: usize) -> Vec<usize> {
    if n / 3 <= 1 {
        return vec![1];
    }
    let mut gap = 1;
    let mut sequence = Vec::new();
    while gap < n / 3 {
        sequence.push(gap);
        gap = 3 * gap + 1;
    }
    sequence
}
