//! Integration flows across the security-layer crates.

pub mod authz_gate;
pub mod key_exchange;
