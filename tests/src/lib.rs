//! # Integration Tests Crate
//!
//! Cross-crate tests that drive the security layer the way a connection
//! pipeline would: a full DH handshake between two sessions, and the
//! authorization gate processing a realistic stream of requests.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! └── src/
//!     ├── lib.rs            # This file
//!     └── integration/
//!         ├── key_exchange.rs  # Handshake and session-key flows
//!         └── authz_gate.rs    # Pipeline flows over every operation kind
//! ```

pub mod integration;
