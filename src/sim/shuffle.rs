//! In-place uniform shuffle
//!
//! Walks the slice from the back, swapping each slot with a uniformly chosen
//! slot at or before it. Consumes exactly one draw per element, so a seeded
//! RNG always produces the same permutation.

use rand::Rng;

/// Shuffle `items` in place
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    let mut counter = items.len();
    while counter > 0 {
        let index = rng.random_range(0..counter);
        counter -= 1;
        items.swap(counter, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::HashSet;

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut items = [10, 20, 30, 40];
        shuffle(&mut items, &mut rng);

        let mut sorted = items;
        sorted.sort();
        assert_eq!(sorted, [10, 20, 30, 40]);
    }

    #[test]
    fn test_shuffle_deterministic_for_seed() {
        let mut a = [0, 1, 2, 3];
        let mut b = [0, 1, 2, 3];
        shuffle(&mut a, &mut Pcg32::seed_from_u64(42));
        shuffle(&mut b, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_reaches_all_permutations() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let mut seen = HashSet::new();
        for _ in 0..5000 {
            let mut items = [0u8, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            seen.insert(items);
        }
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);

        let mut one = [9];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, [9]);
    }
}
