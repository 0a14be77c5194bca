//! Secret/public key generation.

use crate::error::LweError;
use crate::ntt;
use crate::params::LweParams;
use crate::ring::RingElement;
use crate::sampler::RandomSource;

/// Public key: two independent transform products of the secret key with
/// freshly sampled bit vectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    /// First component.
    pub first: RingElement,
    /// Second component.
    pub second: RingElement,
}

/// Produces key material and per-encryption noise.
///
/// Constructed once and exclusively owned by its engine, together with the
/// random source it samples from.
pub struct KeyGenerator {
    params: LweParams,
    source: RandomSource,
}

impl KeyGenerator {
    /// Generator with an entropy-seeded noise source.
    #[must_use]
    pub fn new(params: LweParams) -> Self {
        Self::with_source(params, RandomSource::new())
    }

    /// Generator over an explicit random source.
    #[must_use]
    pub fn with_source(params: LweParams, source: RandomSource) -> Self {
        Self { params, source }
    }

    /// Secret key: a degree-length vector of secure uniform bits.
    pub fn generate_secret_key(&mut self) -> Result<RingElement, LweError> {
        let bits = self.source.secure_bits(self.params.poly_degree)?;
        Ok(RingElement::new(bits, self.params.modulus))
    }

    /// Public key from a secret key and two independently sampled fresh bit
    /// vectors. No key material is shared between the components, and each
    /// grows to the padded transform length.
    pub fn generate_public_key(&mut self, secret: &RingElement) -> Result<PublicKey, LweError> {
        let first = self.fresh_component(secret)?;
        let second = self.fresh_component(secret)?;
        Ok(PublicKey { first, second })
    }

    fn fresh_component(&mut self, secret: &RingElement) -> Result<RingElement, LweError> {
        let bits = self.source.secure_bits(self.params.poly_degree)?;
        let fresh = RingElement::new(bits, self.params.modulus);
        ntt::multiply(secret, &fresh, self.params.root)
    }

    /// Fresh centered-binomial error vector, folded into `[0, modulus)`.
    pub fn sample_noise(&mut self) -> RingElement {
        let noise = self.source.centered_binomial(self.params.poly_degree);
        RingElement::from_signed(&noise, self.params.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(degree: usize) -> KeyGenerator {
        KeyGenerator::new(LweParams::new(degree, 257).unwrap())
    }

    #[test]
    fn test_secret_key_is_bit_vector() {
        let mut key_gen = generator(32);
        let secret = key_gen.generate_secret_key().unwrap();
        assert_eq!(secret.len(), 32);
        assert!(secret.coeffs.iter().all(|&c| c == 0 || c == 1));
    }

    #[test]
    fn test_public_key_component_growth() {
        let mut key_gen = generator(32);
        let secret = key_gen.generate_secret_key().unwrap();
        let public = key_gen.generate_public_key(&secret).unwrap();
        // next power of two >= 2*32 - 1
        assert_eq!(public.first.len(), 64);
        assert_eq!(public.second.len(), 64);
    }

    #[test]
    fn test_public_keys_are_fresh() {
        let mut key_gen = generator(32);
        // all-one key keeps both products nontrivial
        let secret = RingElement::new(vec![1; 32], 257);
        let a = key_gen.generate_public_key(&secret).unwrap();
        let b = key_gen.generate_public_key(&secret).unwrap();
        assert_ne!(a, b, "independent draws must not repeat key material");
        assert_ne!(a.first, a.second);
    }

    #[test]
    fn test_noise_vector_shape() {
        let mut key_gen = generator(32);
        let noise = key_gen.sample_noise();
        assert_eq!(noise.len(), 32);
        // every sample folded from [-5, 5] into [0, q)
        assert!(noise
            .coeffs
            .iter()
            .all(|&c| c <= 5 || (252..257).contains(&c)));
    }
}
