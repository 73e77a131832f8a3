use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Nothing survived eligibility filtering, so there is nothing to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no eligible items to pick from")]
pub struct EmptySelectionError;

/// Picks one element uniformly at random from `items`.
///
/// The slice is only read. Callers keep ownership and order.
pub fn pick<T>(items: &[T]) -> Result<&T, EmptySelectionError> {
    pick_with(&mut rand::rng(), items)
}

/// `pick` with a caller-supplied RNG, for reproducible selection.
pub fn pick_with<'a, R, T>(rng: &mut R, items: &'a [T]) -> Result<&'a T, EmptySelectionError>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return Err(EmptySelectionError);
    }
    Ok(&items[rng.random_range(0..items.len())])
}

/// Picks one element uniformly at random from the items satisfying
/// `predicate`. Filtering preserves relative order, and each eligible
/// index is equally likely: probability `1/k` for `k` eligible items.
pub fn pick_where<T, F>(items: &[T], predicate: F) -> Result<&T, EmptySelectionError>
where
    F: Fn(&T) -> bool,
{
    pick_where_with(&mut rand::rng(), items, predicate)
}

/// `pick_where` with a caller-supplied RNG.
pub fn pick_where_with<'a, R, T, F>(
    rng: &mut R,
    items: &'a [T],
    predicate: F,
) -> Result<&'a T, EmptySelectionError>
where
    R: Rng + ?Sized,
    F: Fn(&T) -> bool,
{
    let eligible: Vec<&T> = items.iter().filter(|item| predicate(item)).collect();
    if eligible.is_empty() {
        return Err(EmptySelectionError);
    }
    Ok(eligible[rng.random_range(0..eligible.len())])
}

/// Returns a new vector holding the same elements as `items` in a
/// uniformly random order (Fisher-Yates). The input is left untouched.
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    shuffled_with(&mut rand::rng(), items)
}

/// `shuffled` with a caller-supplied RNG.
pub fn shuffled_with<R, T>(rng: &mut R, items: &[T]) -> Vec<T>
where
    R: Rng + ?Sized,
    T: Clone,
{
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::test_utils::chi_square;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_pick_empty_slice_fails() {
        let items: Vec<u32> = vec![];
        assert_eq!(pick(&items), Err(EmptySelectionError));
    }

    #[test]
    fn test_pick_where_without_match_fails() {
        let items = vec![1, 3, 5];
        assert_eq!(pick_where(&items, |n| n % 2 == 0), Err(EmptySelectionError));
    }

    #[test]
    fn test_pick_singleton() {
        let items = ["only"];
        assert_eq!(pick(&items).unwrap(), &"only");
    }

    #[test]
    fn test_pick_where_result_satisfies_predicate() {
        let items: Vec<u32> = (0..100).collect();
        for _ in 0..1000 {
            let picked = pick_where(&items, |n| n % 7 == 0).unwrap();
            assert_eq!(picked % 7, 0);
        }
    }

    #[test]
    fn test_pick_where_does_not_disturb_input() {
        let items = vec![3, 1, 4, 1, 5];
        let before = items.clone();
        let _ = pick_where(&items, |n| *n > 1);
        assert_eq!(items, before);
    }

    #[test]
    fn test_pick_with_is_reproducible() {
        let items: Vec<u32> = (0..50).collect();
        let one = *pick_with(&mut StdRng::seed_from_u64(99), &items).unwrap();
        let two = *pick_with(&mut StdRng::seed_from_u64(99), &items).unwrap();
        assert_eq!(one, two);
    }

    #[test]
    fn test_pick_where_uniform_over_eligible() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let items: Vec<u32> = (0..10).collect();
        const ROUNDS: usize = 20_000;

        // eligible subset: the five even values
        let mut counts = [0usize; 5];
        for _ in 0..ROUNDS {
            let picked = *pick_where_with(&mut rng, &items, |n| n % 2 == 0).unwrap();
            counts[(picked / 2) as usize] += 1;
        }

        let stat = chi_square(&counts, ROUNDS as f64 / counts.len() as f64);
        // df = 4; a uniform source stays far below this
        assert!(stat < 45.0, "chi-square {} for counts {:?}", stat, counts);
    }

    #[test]
    fn test_shuffled_keeps_multiset() {
        let items = vec![9, 9, 2, 7, 7, 7, 0];
        let mut result = shuffled(&items);
        assert_eq!(result.len(), items.len());
        result.sort_unstable();
        let mut expected = items.clone();
        expected.sort_unstable();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_shuffled_trivial_inputs() {
        let empty: Vec<u8> = vec![];
        assert!(shuffled(&empty).is_empty());
        assert_eq!(shuffled(&["x"]), vec!["x"]);
    }

    #[test]
    fn test_shuffled_leaves_input_untouched() {
        let items = vec![1, 2, 3, 4];
        let before = items.clone();
        let _ = shuffled(&items);
        assert_eq!(items, before);
    }

    #[test]
    fn test_shuffled_uniform_over_permutations() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let items = [0u8, 1, 2];
        const ROUNDS: usize = 30_000;

        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
        for _ in 0..ROUNDS {
            *counts.entry(shuffled_with(&mut rng, &items)).or_default() += 1;
        }

        assert_eq!(counts.len(), 6, "missing permutations: {:?}", counts);
        let observed: Vec<usize> = counts.values().copied().collect();
        let stat = chi_square(&observed, ROUNDS as f64 / 6.0);
        // df = 5; a uniform source stays far below this
        assert!(stat < 50.0, "chi-square {} for counts {:?}", stat, counts);
    }

    #[test]
    fn test_shuffled_with_same_seed_matches() {
        let items: Vec<u32> = (0..20).collect();
        let one = shuffled_with(&mut StdRng::seed_from_u64(5), &items);
        let two = shuffled_with(&mut StdRng::seed_from_u64(5), &items);
        assert_eq!(one, two);
    }
}
