//! Random index selection.
//!
//! RULE: Nothing in the simulation may call a global RNG.
//! All randomness flows through the `RandomSource` the engine owns.
//! Production engines seed one `TrialRng` from OS entropy at
//! construction; tests substitute a seeded or scripted source.

use crate::error::{SimError, SimResult};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Draw a value in `[0, max_inclusive]`.
    fn uniform_int(&mut self, max_inclusive: usize) -> usize;

    /// Pick uniformly among the indices of `items` that satisfy
    /// `predicate`. Uniform over the matches, not over all indices.
    fn choose_index_matching<T>(
        &mut self,
        items: &[T],
        predicate: impl Fn(&T) -> bool,
    ) -> SimResult<usize>
    where
        Self: Sized,
    {
        let candidates: Vec<usize> = items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| predicate(item).then_some(i))
            .collect();

        if candidates.is_empty() {
            return Err(SimError::NoSuitableCandidate);
        }

        Ok(candidates[self.uniform_int(candidates.len() - 1)])
    }
}

/// The production source: a PCG stream seeded once per engine.
pub struct TrialRng {
    inner: Pcg64Mcg,
}

impl TrialRng {
    /// Seed from OS entropy. One seed per engine instance.
    pub fn from_entropy() -> Self {
        Self { inner: Pcg64Mcg::from_entropy() }
    }

    /// Reproducible stream. Same seed, same draws.
    pub fn from_seed(seed: u64) -> Self {
        Self { inner: Pcg64Mcg::seed_from_u64(seed) }
    }
}

impl RandomSource for TrialRng {
    fn uniform_int(&mut self, max_inclusive: usize) -> usize {
        self.inner.gen_range(0..=max_inclusive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always returns the largest allowed value.
    struct MaxSource;

    impl RandomSource for MaxSource {
        fn uniform_int(&mut self, max_inclusive: usize) -> usize {
            max_inclusive
        }
    }

    #[test]
    fn uniform_int_stays_in_bounds() {
        let mut rng = TrialRng::from_seed(7);
        for max in 0..5 {
            for _ in 0..200 {
                assert!(rng.uniform_int(max) <= max);
            }
        }
    }

    #[test]
    fn uniform_int_with_zero_bound_is_zero() {
        let mut rng = TrialRng::from_seed(1);
        assert_eq!(rng.uniform_int(0), 0);
    }

    #[test]
    fn uniform_int_hits_every_value() {
        let mut rng = TrialRng::from_seed(42);
        let mut seen = [0u32; 3];
        for _ in 0..3_000 {
            seen[rng.uniform_int(2)] += 1;
        }
        // Expect ~1000 each.
        for count in seen {
            assert!(count > 800 && count < 1200, "skewed draw counts: {seen:?}");
        }
    }

    #[test]
    fn empty_candidate_set_is_an_error() {
        let mut rng = TrialRng::from_seed(3);
        let result = rng.choose_index_matching(&[1, 2, 3], |_| false);
        assert!(matches!(result, Err(SimError::NoSuitableCandidate)));
    }

    #[test]
    fn empty_input_is_an_error() {
        let mut rng = TrialRng::from_seed(3);
        let items: [u8; 0] = [];
        assert!(matches!(
            rng.choose_index_matching(&items, |_| true),
            Err(SimError::NoSuitableCandidate)
        ));
    }

    #[test]
    fn draw_indexes_into_candidates_not_items() {
        // Matches are at 1 and 3; the max draw must land on 3, not 1 or 4.
        let items = [false, true, false, true, false];
        assert_eq!(MaxSource.choose_index_matching(&items, |b| *b).unwrap(), 3);
    }

    #[test]
    fn single_match_is_always_returned() {
        let mut rng = TrialRng::from_seed(11);
        for _ in 0..50 {
            assert_eq!(rng.choose_index_matching(&[0, 0, 9], |v| *v == 9).unwrap(), 2);
        }
    }

    #[test]
    fn choice_is_uniform_among_matches() {
        let mut rng = TrialRng::from_seed(99);
        let items = [true, false, true];
        let mut hits = [0u32; 3];
        for _ in 0..2_000 {
            hits[rng.choose_index_matching(&items, |b| *b).unwrap()] += 1;
        }
        assert_eq!(hits[1], 0);
        assert!(hits[0] > 850 && hits[2] > 850, "skewed choice: {hits:?}");
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = TrialRng::from_seed(0xDEAD_BEEF);
        let mut b = TrialRng::from_seed(0xDEAD_BEEF);
        let draws_a: Vec<usize> = (0..64).map(|_| a.uniform_int(2)).collect();
        let draws_b: Vec<usize> = (0..64).map(|_| b.uniform_int(2)).collect();
        assert_eq!(draws_a, draws_b);
    }
}
