//! Ring-LWE lattice encryption engine (research prototype, not audited)

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, missing_docs)]

pub mod cipher;
pub mod error;
pub mod event;
pub mod keygen;
pub mod modular;
pub mod ntt;
pub mod params;
pub mod ring;
pub mod sampler;
pub mod scheme;

pub use cipher::Ciphertext;
pub use error::LweError;
pub use event::{Event, EventSink};
pub use keygen::{KeyGenerator, PublicKey};
pub use params::LweParams;
pub use ring::RingElement;
pub use sampler::RandomSource;
pub use scheme::RingLwe;
