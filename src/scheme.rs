//! Encryption & decryption.

use std::fmt::Write as _;

use crate::cipher::Ciphertext;
use crate::error::LweError;
use crate::event::{Event, EventSink};
use crate::keygen::{KeyGenerator, PublicKey};
use crate::ntt;
use crate::params::LweParams;
use crate::ring::RingElement;

/// End-of-message sentinels: a recovered byte of 0x00 or 0xff stops the scan.
const SENTINEL_LOW: u8 = 0x00;
const SENTINEL_HIGH: u8 = 0xff;

/// Main engine: generates its key pair at construction and owns it,
/// immutable, for the engine's whole lifetime.
pub struct RingLwe {
    params: LweParams,
    key_gen: KeyGenerator,
    secret_key: RingElement,
    public_key: PublicKey,
    sink: Option<Box<dyn EventSink>>,
}

impl std::fmt::Debug for RingLwe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RingLwe")
            .field("sink", &self.sink.as_ref().map(|_| "..."))
            .finish_non_exhaustive()
    }
}

impl RingLwe {
    /// Validate the parameters, then generate and store a key pair.
    ///
    /// Any sampler or multiplier failure aborts construction; a partially
    /// built engine is never returned.
    pub fn new(params: LweParams) -> Result<Self, LweError> {
        Self::build(params, None)
    }

    /// Like [`RingLwe::new`], with an observer attached before key
    /// generation runs.
    pub fn with_event_sink(
        params: LweParams,
        sink: Box<dyn EventSink>,
    ) -> Result<Self, LweError> {
        Self::build(params, Some(sink))
    }

    fn build(params: LweParams, sink: Option<Box<dyn EventSink>>) -> Result<Self, LweError> {
        params.validate()?;
        let mut key_gen = KeyGenerator::new(params);
        let secret_key = key_gen.generate_secret_key()?;
        let public_key = key_gen.generate_public_key(&secret_key)?;
        let engine = Self {
            params,
            key_gen,
            secret_key,
            public_key,
            sink,
        };
        engine.emit(Event::KeyPairGenerated {
            poly_degree: params.poly_degree,
            component_len: engine.public_key.first.len(),
        });
        Ok(engine)
    }

    /// Engine over caller-supplied key material.
    ///
    /// Freshly generated public keys outgrow the ring dimension, so this is
    /// the entry point for embedders holding dimension-conforming keys.
    #[must_use]
    pub fn with_key_pair(
        params: LweParams,
        secret_key: RingElement,
        public_key: PublicKey,
    ) -> Self {
        Self {
            params,
            key_gen: KeyGenerator::new(params),
            secret_key,
            public_key,
            sink: None,
        }
    }

    /// The engine's public key.
    #[must_use]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The engine's parameters.
    #[must_use]
    pub fn params(&self) -> LweParams {
        self.params
    }

    /// Attach or replace the observer.
    pub fn set_event_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sink = Some(sink);
    }

    fn emit(&self, event: Event) {
        if let Some(sink) = &self.sink {
            sink.record(event);
        }
    }

    /// Encrypt up to `poly_degree` bytes into a `(c1, c2)` pair.
    ///
    /// Takes `&mut self` only because the per-call noise draw advances the
    /// generator; the key material never changes. The error vector is
    /// sampled fresh on every call and dropped with it.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Ciphertext, LweError> {
        let n = self.params.poly_degree;
        if plaintext.len() > n {
            return Err(LweError::PlaintextTooLong {
                len: plaintext.len(),
                max: n,
            });
        }

        let mut coeffs = vec![0u128; n];
        for (slot, &byte) in coeffs.iter_mut().zip(plaintext) {
            *slot = u128::from(byte);
        }
        let plaintext_vec = RingElement::new(coeffs, self.params.modulus);

        let error_vec = self.key_gen.sample_noise();
        self.emit(Event::NoiseSampled {
            len: error_vec.len(),
        });

        if self.public_key.first.len() != n {
            return Err(LweError::DimensionMismatch {
                left: self.public_key.first.len(),
                right: n,
            });
        }

        let c1 = ntt::multiply(&self.public_key.first, &plaintext_vec, self.params.root)?;
        let masked = ntt::multiply(&self.public_key.second, &error_vec, self.params.root)?;
        let c2 = &plaintext_vec + &masked;

        self.emit(Event::Encrypted {
            plaintext_len: plaintext.len(),
            c1_len: c1.len(),
            c2_len: c2.len(),
        });
        Ok(Ciphertext { c1, c2 })
    }

    /// Decrypt a `(c1, c2)` pair into the hex encoding of the recovered
    /// bytes.
    ///
    /// The difference `c2 - c1 * secret` is taken without modulus reduction;
    /// each coefficient is read as an unsigned byte (its low 8 bits) and the
    /// first 0x00 or 0xff stops the scan as an end-of-message sentinel. The
    /// output is always hex, never raw plaintext bytes.
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String, LweError> {
        let product = ntt::multiply(&ciphertext.c1, &self.secret_key, self.params.root)?;

        let len = ciphertext.c2.len().max(product.len());
        let mut recovered = Vec::new();
        for i in 0..len {
            let lhs = ciphertext.c2.coeffs.get(i).copied().unwrap_or(0) as i128;
            let rhs = product.coeffs.get(i).copied().unwrap_or(0) as i128;
            let byte = (lhs - rhs) as u8;
            if byte == SENTINEL_LOW || byte == SENTINEL_HIGH {
                break;
            }
            recovered.push(byte);
        }

        self.emit(Event::Decrypted {
            recovered_len: recovered.len(),
        });

        let mut hex = String::with_capacity(recovered.len() * 2);
        for byte in &recovered {
            write!(hex, "{byte:02x}").expect("writing to a String cannot fail");
        }
        Ok(hex)
    }
}
