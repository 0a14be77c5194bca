//! Ciphertext container.

use crate::ring::RingElement;

/// `(c1, c2)` pair produced per encryption call; never persisted or reused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    /// Product of the first public-key component and the plaintext vector.
    pub c1: RingElement,
    /// Plaintext vector plus the masked error term.
    pub c2: RingElement,
}
