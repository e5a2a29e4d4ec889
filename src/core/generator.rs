use anyhow::{Context, Result};
use rand::Rng;

use super::params::MemParams;

/// Build the random image for `params`.
///
/// Every entry contributes two words: one drawn uniformly from
/// `[0, high_bound / 2]`, then one from `[high_bound / 2, high_bound]`.
/// The returned vector always holds `params.word_count()` values; failing to
/// reserve room for them is reported as an error instead of aborting.
pub fn gen_random_data<R: Rng + ?Sized>(params: &MemParams, rng: &mut R) -> Result<Vec<u128>> {
    let high_bound = params.high_bound();
    let midpoint = params.midpoint();
    let entries = params.entry_count();

    log::debug!(
        "Generating {entries} entries (high_bound={high_bound:#x}, midpoint={midpoint:#x})"
    );

    let words = usize::try_from(params.word_count())
        .context("Image word count does not fit in memory on this target")?;
    let mut data = Vec::new();
    data.try_reserve_exact(words)
        .with_context(|| format!("Failed to allocate {words} image words"))?;
    for _ in 0..entries {
        data.push(rng.random_range(0..=midpoint));
        data.push(rng.random_range(midpoint..=high_bound));
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_pairs_alternate_between_halves() {
        let params = MemParams::new(4, 8, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let data = gen_random_data(&params, &mut rng).unwrap();

        assert_eq!(data.len(), 8);
        for (i, value) in data.iter().enumerate() {
            if i % 2 == 0 {
                assert!(*value <= 127, "low word {value} out of range");
            } else {
                assert!((127..=255).contains(value), "high word {value} out of range");
            }
        }
    }

    #[test]
    fn test_seeded_runs_match() {
        let params = MemParams::new(10, 32, 4).unwrap();
        let a = gen_random_data(&params, &mut StdRng::seed_from_u64(1234)).unwrap();
        let b = gen_random_data(&params, &mut StdRng::seed_from_u64(1234)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_one_bit_words() {
        // high_bound = 1, midpoint = 0: low words are always 0
        let params = MemParams::new(6, 1, 1).unwrap();
        let data = gen_random_data(&params, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(data.len(), 64);
        assert!(data.iter().step_by(2).all(|v| *v == 0));
        assert!(data.iter().skip(1).step_by(2).all(|v| *v <= 1));
    }

    #[test]
    fn test_full_width_words() {
        let params = MemParams::new(5, 128, 2).unwrap();
        let data = gen_random_data(&params, &mut StdRng::seed_from_u64(99)).unwrap();
        let mid = u128::MAX / 2;
        assert_eq!(data.len(), 16);
        assert!(data.iter().step_by(2).all(|v| *v <= mid));
        assert!(data.iter().skip(1).step_by(2).all(|v| *v >= mid));
    }
}
