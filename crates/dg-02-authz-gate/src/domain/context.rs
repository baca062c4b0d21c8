//! # Authorization Context
//!
//! Everything a capability may consult for one decision, borrowed from the
//! request and channel it concerns. Built fresh per authorization call and
//! dropped immediately after; never cached between calls.

use shared_types::{OpaqueMap, Permission, RequestId, Subject};
use std::net::SocketAddr;

/// The inputs to a single authorization decision.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationContext<'a> {
    /// The authenticated subject of the requesting connection.
    pub subject: &'a Subject,
    /// Local endpoint of the channel the request arrived on.
    pub local_address: SocketAddr,
    /// Remote peer of the channel the request arrived on.
    pub remote_address: SocketAddr,
    /// The path the decision concerns.
    pub path: &'a str,
    /// Parsed opaque metadata accompanying the path.
    pub opaque: &'a OpaqueMap,
    /// Numeric identifier of the requested operation.
    pub request_id: RequestId,
    /// The permission the operation needs on `path`.
    pub permission: Permission,
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::parse_opaque;

    #[test]
    fn test_context_borrows_its_inputs() {
        let subject = Subject::new("alice");
        let opaque = parse_opaque("authz=token").unwrap();
        let local: SocketAddr = "127.0.0.1:1094".parse().unwrap();
        let remote: SocketAddr = "10.0.0.7:40000".parse().unwrap();

        let ctx = AuthorizationContext {
            subject: &subject,
            local_address: local,
            remote_address: remote,
            path: "/data/file",
            opaque: &opaque,
            request_id: RequestId::Stat,
            permission: Permission::Read,
        };

        assert_eq!(ctx.subject.principal(), Some("alice"));
        assert_eq!(ctx.opaque.get("authz").map(String::as_str), Some("token"));
        assert_eq!(ctx.permission, Permission::Read);
    }
}
