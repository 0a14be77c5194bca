//! Engine parameters and fail-fast compatibility validation.

use serde::{Deserialize, Serialize};

use crate::error::LweError;
use crate::modular::{is_prime, mod_pow};

/// Primitive root shared by the stock parameter sets.
pub const DEFAULT_ROOT: u128 = 3;

/// Ring dimension, modulus and transform root for one engine instance.
///
/// The triple is checked once, at engine construction, instead of trusting
/// the caller: an incompatible triple would make the transform silently
/// compute garbage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LweParams {
    /// Polynomial degree `n`: length of secret keys and plaintext vectors.
    pub poly_degree: usize,
    /// Coefficient modulus `q`; must be an odd prime.
    pub modulus: u128,
    /// Primitive root for the transform.
    pub root: u128,
}

impl LweParams {
    /// Validated parameters with the default root.
    pub fn new(poly_degree: usize, modulus: u128) -> Result<Self, LweError> {
        Self::with_root(poly_degree, modulus, DEFAULT_ROOT)
    }

    /// Validated parameters with an explicit root.
    pub fn with_root(poly_degree: usize, modulus: u128, root: u128) -> Result<Self, LweError> {
        let params = Self {
            poly_degree,
            modulus,
            root,
        };
        params.validate()?;
        Ok(params)
    }

    /// Transform length used when two degree-length vectors are multiplied.
    #[must_use]
    pub fn transform_size(&self) -> usize {
        (2 * self.poly_degree - 1).next_power_of_two()
    }

    /// Check that the `(degree, modulus, root)` triple supports the
    /// transform.
    pub fn validate(&self) -> Result<(), LweError> {
        let fail = |reason: &'static str| Err(LweError::IncompatibleParameters { reason });
        if !self.poly_degree.is_power_of_two() {
            return fail("polynomial degree must be a power of two");
        }
        if self.modulus < 3 || self.modulus % 2 == 0 {
            return fail("modulus must be an odd number >= 3");
        }
        if !is_prime(self.modulus) {
            return fail("modulus must be prime");
        }
        if (self.modulus - 1) % self.transform_size() as u128 != 0 {
            return fail("transform size must divide modulus - 1");
        }
        if self.root % self.modulus == 0 {
            return fail("root must be nonzero modulo the modulus");
        }
        // A quadratic nonresidue has exact order N for every power-of-two N
        // dividing modulus - 1.
        if mod_pow(self.root, (self.modulus - 1) / 2, self.modulus) != self.modulus - 1 {
            return fail("root must be a quadratic nonresidue");
        }
        Ok(())
    }
}

impl Default for LweParams {
    /// The legacy demo parameter set `(512, 4096)`.
    ///
    /// [`LweParams::validate`] rejects it — 4096 is not prime, so the
    /// transform has no inverse. Engines constructed with the defaults fail
    /// fast instead of silently computing garbage.
    fn default() -> Self {
        Self {
            poly_degree: 512,
            modulus: 4096,
            root: DEFAULT_ROOT,
        }
    }
}
