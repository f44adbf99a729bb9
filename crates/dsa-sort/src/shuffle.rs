//! Uniformly random shuffling.

use rand::Rng;

/// Knuth (Fisher-Yates) shuffle: for each `i`, swap `a[i]` with a uniformly
/// random entry in `a[0..=i]`. Every permutation is equally likely.
pub fn knuth_shuffle<T>(a: &mut [T]) {
    knuth_shuffle_with(&mut rand::thread_rng(), a);
}

/// [`knuth_shuffle`] with a caller-supplied RNG, so a seeded shuffle is
/// reproducible.
pub fn knuth_shuffle_with<R: Rng + ?Sized, T>(rng: &mut R, a: &mut [T]) {
    for i in 0..a.len() {
        let r = rng.gen_range(0..=i);
        a.swap(i, r);
    }
}

/// Shuffle by sorting: pair every entry with an independent uniform random
/// key and sort by key.
pub fn sort_shuffle<T>(a: &mut [T]) {
    sort_shuffle_with(&mut rand::thread_rng(), a);
}

/// [`sort_shuffle`] with a caller-supplied RNG.
pub fn sort_shuffle_with<R: Rng + ?Sized, T>(rng: &mut R, a: &mut [T]) {
    a.sort_by_cached_key(|_| rng.r#gen::<u64>());
}
