//! # Connection Identity
//!
//! Per-connection identity handed to the authorization pipeline: the
//! authenticated subject plus the local and remote socket addresses of the
//! channel the request arrived on.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Authenticated identity attached to a connection.
///
/// Populated by the authentication phase; treated as opaque by the
/// authorization pipeline, which only forwards it to the capability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    principal: Option<String>,
}

impl Subject {
    /// An authenticated subject with the given principal name.
    pub fn new(principal: impl Into<String>) -> Self {
        Self {
            principal: Some(principal.into()),
        }
    }

    /// A connection that has not (yet) authenticated.
    pub fn anonymous() -> Self {
        Self { principal: None }
    }

    /// The principal name, if any.
    pub fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }
}

/// Identity and endpoints of the channel a request arrived on.
///
/// One value per connection; requests on the same connection share it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelContext {
    /// The authenticated subject for this connection.
    pub subject: Subject,
    /// Address of the local endpoint.
    pub local_address: SocketAddr,
    /// Address of the remote peer.
    pub remote_address: SocketAddr,
}

impl ChannelContext {
    /// Create a channel context.
    pub fn new(subject: Subject, local_address: SocketAddr, remote_address: SocketAddr) -> Self {
        Self {
            subject,
            local_address,
            remote_address,
        }
    }
}
