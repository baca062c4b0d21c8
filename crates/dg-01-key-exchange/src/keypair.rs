//! # DH Key Pairs
//!
//! A local key pair is generated once from an agreed parameter set and is
//! immutable for the life of the session.

use crate::params::DhParameters;
use num_bigint::{BigUint, RandBigInt};

/// A private exponent and its corresponding public value.
pub struct DhKeyPair {
    private: BigUint,
    public: BigUint,
}

impl DhKeyPair {
    /// Generate a fresh key pair for the given group.
    ///
    /// The private exponent is drawn uniformly from `[1, p-2]`; the public
    /// value is `g^x mod p`.
    pub fn generate(params: &DhParameters) -> Self {
        let mut rng = rand::thread_rng();
        let upper = params.prime() - 1u32;
        let private = rng.gen_biguint_range(&BigUint::from(1u32), &upper);
        let public = params.generator().modpow(&private, params.prime());
        Self { private, public }
    }

    /// The public value to publish in handshake material.
    pub fn public(&self) -> &BigUint {
        &self.public
    }

    /// The private exponent. Never leaves this crate.
    pub(crate) fn private(&self) -> &BigUint {
        &self.private
    }
}

// Key material must not appear in logs.
impl std::fmt::Debug for DhKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DhKeyPair")
            .field("public", &self.public)
            .field("private", &"<redacted>")
            .finish()
    }
}
