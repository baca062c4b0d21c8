//! # Key Exchange Subsystem (DG-01)
//!
//! Diffie-Hellman session establishment for the authentication handshake.
//!
//! A [`DhSession`] negotiates a shared secret with the peer over an untrusted
//! channel and then encrypts/decrypts the small authentication buffers that
//! must not travel in the clear. One session exists per connection; the bulk
//! data channel is never encrypted with it.
//!
//! ## Compatibility Notes
//!
//! Two deliberate concessions keep this layer interoperable with the existing
//! client population; neither may be "fixed" silently:
//!
//! - The shared secret is the minimal big-endian encoding of the raw DH value
//!   (a pre-standard derivation, not a hash-based KDF), re-derived on every
//!   encrypt/decrypt call. Short secrets are zero-padded on the tail, never
//!   the head, and only on the encrypt path.
//! - The CBC initialization vector is all zeroes.

pub mod cipher;
pub mod errors;
pub mod keypair;
pub mod material;
pub mod params;
pub mod session;

pub use cipher::{CipherSpec, KeySpec};
pub use errors::KeyExchangeError;
pub use keypair::DhKeyPair;
pub use params::DhParameters;
pub use session::DhSession;
