//! Bit-reversal NTT and the transform-backed convolution multiplier.

use crate::error::LweError;
use crate::modular::{mod_inv, mod_pow};
use crate::ring::RingElement;

/// In-place bit-reversal permutation of a power-of-two-length slice.
fn bit_reverse(values: &mut [u128]) {
    let n = values.len();
    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            values.swap(i, j);
        }
    }
}

/// In-place forward transform with the given primitive root.
///
/// `values.len()` must be a power of two dividing `modulus - 1`; an
/// incompatible `(length, modulus, root)` triple is not detected here and
/// silently yields wrong results. Engine construction validates the triple
/// once up front.
pub fn forward(values: &mut [u128], modulus: u128, root: u128) {
    let n = values.len();
    bit_reverse(values);

    let mut len = 2;
    while len <= n {
        let w_len = mod_pow(root, (modulus - 1) / len as u128, modulus);
        for i in (0..n).step_by(len) {
            let mut w = 1u128;
            for j in 0..len / 2 {
                let u = values[i + j];
                let v = values[i + j + len / 2] * w % modulus;
                values[i + j] = (u + v) % modulus;
                values[i + j + len / 2] = (u + modulus - v) % modulus;
                w = w * w_len % modulus;
            }
        }
        len <<= 1;
    }
}

/// In-place inverse transform: [`forward`] with the inverse root, then a
/// scale of every entry by `n^-1`.
pub fn inverse(values: &mut [u128], modulus: u128, root: u128) {
    forward(values, modulus, mod_inv(root, modulus));
    let inv_n = mod_inv(values.len() as u128, modulus);
    for x in values.iter_mut() {
        *x = *x * inv_n % modulus;
    }
}

/// Convolution of two coefficient vectors via the transform.
///
/// Operands are treated as a single row and a single column, so their shared
/// dimension must agree. Both are zero-padded to the next power of two that
/// fits the full convolution, and the product comes back at that padded
/// length: there is no reduction modulo a ring polynomial, so every product
/// outgrows its operands.
pub fn multiply(a: &RingElement, b: &RingElement, root: u128) -> Result<RingElement, LweError> {
    assert_eq!(a.modulus, b.modulus, "moduli must match");
    if a.coeffs.len() != b.coeffs.len() {
        return Err(LweError::DimensionMismatch {
            left: a.coeffs.len(),
            right: b.coeffs.len(),
        });
    }

    let modulus = a.modulus;
    let result_size = (a.coeffs.len() + b.coeffs.len() - 1).next_power_of_two();

    let mut fa = vec![0u128; result_size];
    let mut fb = vec![0u128; result_size];
    fa[..a.coeffs.len()].copy_from_slice(&a.coeffs);
    fb[..b.coeffs.len()].copy_from_slice(&b.coeffs);

    forward(&mut fa, modulus, root);
    forward(&mut fb, modulus, root);
    for i in 0..result_size {
        fa[i] = fa[i] * fb[i] % modulus;
    }
    inverse(&mut fa, modulus, root);

    Ok(RingElement::new(fa, modulus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    const Q: u128 = 257;
    const ROOT: u128 = 3;

    fn random_vec(rng: &mut SmallRng, len: usize) -> Vec<u128> {
        (0..len).map(|_| rng.gen_range(0..Q)).collect()
    }

    #[test]
    fn test_forward_inverse_round_trip() {
        let mut rng = SmallRng::seed_from_u64(7);
        for len in [1usize, 2, 8, 16, 64] {
            let original = random_vec(&mut rng, len);
            let mut values = original.clone();
            forward(&mut values, Q, ROOT);
            inverse(&mut values, Q, ROOT);
            assert_eq!(values, original, "round trip at length {len}");
        }
    }

    #[test]
    fn test_multiply_known_product() {
        // (1 + 2x)(3 + 4x) = 3 + 10x + 8x^2, padded to length 4
        let a = RingElement::new(vec![1, 2], Q);
        let b = RingElement::new(vec![3, 4], Q);
        let prod = multiply(&a, &b, ROOT).unwrap();
        assert_eq!(prod.coeffs, vec![3, 10, 8, 0]);
    }

    #[test]
    fn test_multiply_single_coefficient() {
        let a = RingElement::new(vec![200], Q);
        let b = RingElement::new(vec![150], Q);
        let prod = multiply(&a, &b, ROOT).unwrap();
        assert_eq!(prod.coeffs, vec![200 * 150 % Q]);
    }

    #[test]
    fn test_multiply_commutative() {
        let mut rng = SmallRng::seed_from_u64(11);
        let a = RingElement::new(random_vec(&mut rng, 8), Q);
        let b = RingElement::new(random_vec(&mut rng, 8), Q);
        let ab = multiply(&a, &b, ROOT).unwrap();
        let ba = multiply(&b, &a, ROOT).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_multiply_output_growth() {
        let a = RingElement::new(vec![1; 8], Q);
        let b = RingElement::new(vec![0; 8], Q);
        let prod = multiply(&a, &b, ROOT).unwrap();
        // next power of two >= 2*8 - 1, never trimmed
        assert_eq!(prod.len(), 16);
        assert!(prod.coeffs.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_multiply_shared_dimension() {
        let a = RingElement::new(vec![1; 4], Q);
        let b = RingElement::new(vec![1; 8], Q);
        let err = multiply(&a, &b, ROOT).unwrap_err();
        assert!(matches!(
            err,
            LweError::DimensionMismatch { left: 4, right: 8 }
        ));
    }
}
