//! # Shared Types Crate
//!
//! Protocol-level entities shared by the DataGate subsystems: parsed request
//! objects with their accessor/mutator contracts, permission levels, request
//! identifiers, status codes, opaque metadata parsing and connection identity.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses a subsystem boundary
//!   is defined here.
//! - **Externally Owned Requests**: request objects arrive fully decoded from
//!   the wire layer; downstream stages mutate them only through the accessors
//!   exposed here.

pub mod channel;
pub mod errors;
pub mod opaque;
pub mod protocol;
pub mod requests;

pub use channel::*;
pub use errors::*;
pub use opaque::*;
pub use protocol::*;
pub use requests::*;
