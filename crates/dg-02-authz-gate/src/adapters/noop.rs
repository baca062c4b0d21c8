//! # No-op Authorization
//!
//! Grants everything and leaves paths untouched. The default capability for
//! deployments that delegate access control entirely to the backing store,
//! and a convenient baseline in tests.

use crate::domain::context::AuthorizationContext;
use crate::domain::errors::AuthzError;
use crate::ports::outbound::{AuthorizationFactory, AuthorizationHandler};

/// Factory for the grant-everything capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthorizationFactory;

struct NoAuthorizationHandler;

#[async_trait::async_trait]
impl AuthorizationHandler for NoAuthorizationHandler {
    async fn authorize(&self, context: &AuthorizationContext<'_>) -> Result<String, AuthzError> {
        Ok(context.path.to_string())
    }
}

impl AuthorizationFactory for NoAuthorizationFactory {
    fn create_handler(&self) -> Box<dyn AuthorizationHandler> {
        Box::new(NoAuthorizationHandler)
    }
}
