use pulse_config::GeneratorConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Pick the generation seed: `--seed`, then `generator.seed`, then a fresh one.
#[must_use]
pub fn resolve_seed(flag: Option<u64>, configured: Option<u64>) -> u64 {
    flag.or(configured).unwrap_or_else(|| rand::rng().random())
}

#[must_use]
pub fn seeded(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Batch size for a refresh: `--count`, else drawn from the configured bounds.
pub fn batch_size<R: Rng>(count: Option<usize>, config: &GeneratorConfig, rng: &mut R) -> usize {
    count.unwrap_or_else(|| rng.random_range(config.min_batch..=config.max_batch))
}
