//! Typed errors for the encryption engine.

use thiserror::Error;

/// Failures surfaced by key generation, encryption and decryption.
///
/// Every failure is raised synchronously at the point of detection and aborts
/// only the current operation; nothing is retried internally, and a failed
/// construction leaves no usable engine behind.
#[derive(Debug, Error)]
pub enum LweError {
    /// The OS entropy source could not supply bytes.
    #[error("secure random source unavailable: {0}")]
    SecureRandom(#[from] rand::Error),

    /// Operand shapes are incompatible for multiplication or key use.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Length of the left-hand operand.
        left: usize,
        /// Length of the right-hand operand.
        right: usize,
    },

    /// Plaintext does not fit the configured ring dimension.
    #[error("plaintext of {len} bytes exceeds ring dimension {max}")]
    PlaintextTooLong {
        /// Bytes supplied by the caller.
        len: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// Parameter validation failed at engine construction.
    #[error("incompatible parameters: {reason}")]
    IncompatibleParameters {
        /// What the validation rejected.
        reason: &'static str,
    },
}
