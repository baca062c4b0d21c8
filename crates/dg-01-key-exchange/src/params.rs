//! # DH Parameter Sets
//!
//! A parameter set is the (prime, generator, bit length) triple both peers
//! must agree on. The built-in set below is used whenever this side initiates
//! as the responder; an initiating side adopts whatever the responder sends.

use lazy_static::lazy_static;
use num_bigint::BigUint;

// 512-bit prime generated with OpenSSL; passes its validity tests and is
// therefore considered safe. Generator is 2.
const BUILTIN_PRIME_HEX: &[u8] = b"a8379d6fffe863a0b1470c26dd1a450b\
e2039af083b1ba5bfa1d2f5b2a890802\
d8c4d4668d148d35bb24b1af1ad375c7\
c03b61aa853f5669aef267da20875d93";

lazy_static! {
    /// The built-in parameter set used when acting as the responder.
    pub static ref BUILTIN_PARAMETERS: DhParameters = DhParameters::new(
        BigUint::parse_bytes(BUILTIN_PRIME_HEX, 16).expect("built-in prime is valid hex"),
        BigUint::from(2u32),
        0,
    );
}

/// An agreed-upon DH group: prime modulus, generator and key bit length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhParameters {
    prime: BigUint,
    generator: BigUint,
    bit_length: u64,
}

impl DhParameters {
    /// Build a parameter set, resolving the declared bit length.
    ///
    /// Peers may declare a bit length of zero (or omit it from the wire
    /// encoding entirely). Key pair generation fails for a zero length, so it
    /// is replaced with the true bit length of the prime. Legacy quirk;
    /// preserved as-is.
    pub fn new(prime: BigUint, generator: BigUint, bit_length: u64) -> Self {
        let bit_length = if bit_length == 0 {
            prime.bits()
        } else {
            bit_length
        };
        Self {
            prime,
            generator,
            bit_length,
        }
    }

    /// The prime modulus of the group.
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// The group generator.
    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    /// The resolved key bit length.
    pub fn bit_length(&self) -> u64 {
        self.bit_length
    }

    /// Whether two parameter sets describe the same group. The bit length is
    /// derived data and does not participate.
    pub fn matches_group(&self, other: &DhParameters) -> bool {
        self.prime == other.prime && self.generator == other.generator
    }
}
