//! # Outbound Ports (Driven Ports / SPI)
//!
//! The pluggable authorization capability the pipeline drives. Deployments
//! install one factory; the pipeline asks it for a fresh handler per
//! decision.

use crate::domain::context::AuthorizationContext;
use crate::domain::errors::AuthzError;

/// A single-use authorization decision maker.
///
/// One decision per handler. A handler may keep whatever intermediate state
/// it likes while deciding; the pipeline drops it right after the call.
#[async_trait::async_trait]
pub trait AuthorizationHandler: Send + Sync {
    /// Decide whether the context's subject may perform the operation.
    ///
    /// On success, returns the granted path. Capabilities backed by a name
    /// catalogue may return a different path than the requested one; the
    /// caller substitutes it into the request.
    ///
    /// # Errors
    /// * `AuthzError::Security` - The check could not be carried out
    /// * `AuthzError::Denied` - The subject is not allowed the operation
    async fn authorize(&self, context: &AuthorizationContext<'_>) -> Result<String, AuthzError>;
}

/// Factory for authorization handlers.
///
/// Installed once per deployment and shared across connections, so it must
/// tolerate concurrent `create_handler` calls. Handlers are created fresh
/// for every decision and never cached.
pub trait AuthorizationFactory: Send + Sync {
    /// Create a handler for one authorization decision.
    fn create_handler(&self) -> Box<dyn AuthorizationHandler>;
}
