//! # Authorization Gate Subsystem (DG-02)
//!
//! Intercepts every parsed request between frame decoding and the business
//! logic, maps the operation onto the permission it needs, consults the
//! installed authorization capability, and rewrites granted paths in place.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Authorization context and error taxonomy,
//!   no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for the pluggable
//!   authorization capability
//! - **Adapters Layer** (`adapters/`): Shipped capability implementations
//! - **Service Layer** (`service.rs`): The interception pipeline itself
//!
//! ## Security Notes
//!
//! - **Fail-closed**: every capability failure, whatever its cause, denies
//!   the operation with a not-authorized status
//! - **No ambient grants**: handle-based operations pass through because
//!   access was decided when the handle was opened, not because they are
//!   trusted

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::noop::NoAuthorizationFactory;
pub use domain::context::AuthorizationContext;
pub use domain::errors::AuthzError;
pub use ports::outbound::{AuthorizationFactory, AuthorizationHandler};
pub use service::AuthorizationPipeline;
