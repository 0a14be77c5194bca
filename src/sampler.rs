//! Random sources: secure key bits and non-cryptographic noise.

use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};
use rand_distr::{Binomial, Distribution};

use crate::error::LweError;

/// Coin flips per noise sample.
const NOISE_TRIALS: u64 = 10;
/// Centering offset, half the flip count.
const NOISE_OFFSET: i64 = 5;

/// Two independent samplers: secure uniform bits for key material and
/// centered-binomial noise for per-encryption errors.
///
/// The noise generator is a general-purpose seeded one, deliberately distinct
/// from the secure source that key bits come from. A source is not
/// thread-safe and belongs to exactly one key generator.
pub struct RandomSource {
    noise_rng: SmallRng,
    binomial: Binomial,
}

impl RandomSource {
    /// Source with an entropy-seeded noise generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Source with a fixed noise seed. Key bits still come from the OS.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(noise_rng: SmallRng) -> Self {
        let binomial = Binomial::new(NOISE_TRIALS, 0.5).expect("valid binomial parameters");
        Self { noise_rng, binomial }
    }

    /// `count` independent uniform bits, one secure byte consumed per bit.
    ///
    /// Fails with [`LweError::SecureRandom`] when the entropy source cannot
    /// supply bytes.
    pub fn secure_bits(&mut self, count: usize) -> Result<Vec<u128>, LweError> {
        let mut bits = Vec::with_capacity(count);
        let mut byte = [0u8; 1];
        for _ in 0..count {
            OsRng.try_fill_bytes(&mut byte)?;
            bits.push(u128::from(byte[0] % 2));
        }
        Ok(bits)
    }

    /// `count` noise values, each the sum of ten fair coin flips minus five,
    /// so every value lies in `[-5, 5]`.
    pub fn centered_binomial(&mut self, count: usize) -> Vec<i64> {
        (0..count)
            .map(|_| self.binomial.sample(&mut self.noise_rng) as i64 - NOISE_OFFSET)
            .collect()
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}
