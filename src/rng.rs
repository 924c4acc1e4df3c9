//! Secure randomness primitives.
//!
//! Everything here is driven by a [`CryptoRng`]. The default source is the
//! thread-local generator from `rand`, a ChaCha stream reseeded from the OS.
//! Uniformity comes from `rand` itself: shuffling is Fisher-Yates and range
//! sampling rejects out-of-zone values instead of reducing modulo `n`.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

/// Thread-local CSPRNG used when the caller does not supply one.
#[inline]
pub fn secure() -> ThreadRng {
    rand::rng()
}

/// Uniformly random permutation of references to `items`.
///
/// The input is left untouched; every permutation has probability `1/n!`.
pub fn shuffled<'a, T, R>(items: &'a [T], rng: &mut R) -> Vec<&'a T>
where
    R: CryptoRng,
{
    let mut refs: Vec<&T> = items.iter().collect();
    refs.shuffle(rng);
    refs
}

/// Unbiased index in `[0, n)`. `n` must be non-zero.
#[inline]
pub fn index<R>(rng: &mut R, n: usize) -> usize
where
    R: CryptoRng,
{
    rng.random_range(0..n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_shuffled_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = [1, 2, 3, 4, 5];
        let mut out: Vec<i32> = shuffled(&items, &mut rng).into_iter().copied().collect();
        out.sort();
        assert_eq!(out, items);
    }

    #[test]
    fn test_shuffled_covers_all_orders() {
        // 3! = 6 orders; 600 draws should hit each of them
        let mut rng = StdRng::seed_from_u64(42);
        let items = ['a', 'b', 'c'];
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            let order: String = shuffled(&items, &mut rng).into_iter().collect();
            seen.insert(order);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_index_in_range() {
        let mut rng = secure();
        for n in 1..50 {
            for _ in 0..20 {
                assert!(index(&mut rng, n) < n);
            }
        }
    }

    #[test]
    fn test_index_single_slot() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(index(&mut rng, 1), 0);
        }
    }
}
