//! Uniform in-place Fisher–Yates shuffle shared by hint selection and
//! line ordering.

use rand::Rng;

/// Shuffle `items` in place, each permutation equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Return a shuffled copy of `items`.
pub fn shuffled<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    shuffle(&mut items, rng);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn keeps_all_elements() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items = shuffled((0..50).collect::<Vec<_>>(), &mut rng);
        items.sort_unstable();
        assert_eq!(items, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn handles_short_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());
        assert_eq!(shuffled(vec!["only"], &mut rng), vec!["only"]);
    }

    #[test]
    fn every_position_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen_first = [false; 4];
        for _ in 0..200 {
            let items = shuffled(vec![0usize, 1, 2, 3], &mut rng);
            seen_first[items[0]] = true;
        }
        assert!(seen_first.iter().all(|s| *s));
    }
}
