//! Injectable structured-event observer.
//!
//! Sinks are off by default and attached explicitly; they only ever see
//! lengths and counts. Key bytes and message bytes never reach a sink.

/// One structured engine event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A key pair was generated at engine construction.
    KeyPairGenerated {
        /// Configured polynomial degree.
        poly_degree: usize,
        /// Length of each public-key component.
        component_len: usize,
    },
    /// A fresh error vector was sampled for an encryption.
    NoiseSampled {
        /// Number of noise coefficients drawn.
        len: usize,
    },
    /// An encryption completed.
    Encrypted {
        /// Plaintext bytes consumed.
        plaintext_len: usize,
        /// Length of the first ciphertext component.
        c1_len: usize,
        /// Length of the second ciphertext component.
        c2_len: usize,
    },
    /// A decryption completed.
    Decrypted {
        /// Bytes collected before the end-of-message sentinel.
        recovered_len: usize,
    },
}

/// Observer hook for engine events.
///
/// Attach one with [`RingLwe::with_event_sink`](crate::scheme::RingLwe::with_event_sink)
/// or [`RingLwe::set_event_sink`](crate::scheme::RingLwe::set_event_sink).
pub trait EventSink {
    /// Record one event.
    fn record(&self, event: Event);
}
