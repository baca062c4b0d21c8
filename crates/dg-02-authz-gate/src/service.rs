//! # Authorization Pipeline
//!
//! The interception stage between frame decoding and the business logic.
//! Dispatch over operation kinds is an explicit `match` on the closed
//! request enum; the permission an operation needs is decided here, not by
//! the capability.
//!
//! The pipeline holds only the installed factory. Everything a decision
//! needs travels in as arguments and out as the rewritten request, so one
//! pipeline instance serves any number of connections concurrently.

use crate::domain::context::AuthorizationContext;
use crate::domain::errors::AuthzError;
use crate::ports::outbound::AuthorizationFactory;
use shared_types::{
    parse_opaque, ChannelContext, PathRequest, Permission, ProtocolError, Request, RequestId,
    StatusCode,
};
use tracing::{debug, trace};

/// The per-operation authorization interception stage.
pub struct AuthorizationPipeline<F: AuthorizationFactory> {
    factory: F,
}

impl<F: AuthorizationFactory> AuthorizationPipeline<F> {
    /// Create a pipeline driving the given capability factory.
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Authorize one request, rewriting granted paths in place.
    ///
    /// Path-bearing operations are checked against the permission they
    /// need; handle-based and administrative operations pass through
    /// untouched. On `Ok` the request carries the granted paths and may be
    /// forwarded; on `Err` nothing was forwarded and the error is the
    /// response to send.
    ///
    /// # Errors
    /// * `ArgMissing` - A required path is empty, reported before the
    ///   capability is consulted
    /// * `ArgInvalid` - The entries of a multi-path request do not line up
    /// * `NotAuthorized` - Undecodable opaque data, or the capability
    ///   refused the operation
    pub async fn process(
        &self,
        channel: &ChannelContext,
        request: &mut Request,
    ) -> Result<(), ProtocolError> {
        match request {
            Request::Stat(r) => {
                self.authorize_path(channel, RequestId::Stat, Permission::Read, r)
                    .await
            }
            Request::ListDir(r) => {
                self.authorize_path(channel, RequestId::ListDir, Permission::Read, r)
                    .await
            }
            Request::Remove(r) => {
                self.authorize_path(channel, RequestId::Remove, Permission::Delete, r)
                    .await
            }
            Request::RemoveDir(r) => {
                self.authorize_path(channel, RequestId::RemoveDir, Permission::Delete, r)
                    .await
            }
            Request::MakeDir(r) => {
                self.authorize_path(channel, RequestId::MakeDir, Permission::Write, r)
                    .await
            }
            Request::Open(r) => {
                // Creating or writable opens need write access; everything
                // else is a read.
                let permission = if r.is_new() || r.is_read_write() {
                    Permission::Write
                } else {
                    Permission::Read
                };
                self.authorize_path(channel, RequestId::Open, permission, r)
                    .await
            }
            Request::Move(r) => {
                if r.source_path().is_empty() || r.target_path().is_empty() {
                    return Err(missing_path());
                }
                let source = self
                    .decide(
                        channel,
                        RequestId::Move,
                        Permission::Delete,
                        r.source_path(),
                        r.opaque(),
                    )
                    .await?;
                let target = self
                    .decide(
                        channel,
                        RequestId::Move,
                        Permission::Write,
                        r.target_path(),
                        r.opaque(),
                    )
                    .await?;
                r.set_source_path(source);
                r.set_target_path(target);
                Ok(())
            }
            Request::StatMulti(r) => {
                if r.paths().len() != r.opaques().len() {
                    return Err(ProtocolError::new(
                        StatusCode::ArgInvalid,
                        "paths and opaques lists differ in length",
                    ));
                }
                if r.paths().is_empty() || r.paths().iter().any(|p| p.is_empty()) {
                    return Err(missing_path());
                }
                let mut granted = Vec::with_capacity(r.paths().len());
                for (path, opaque) in r.paths().iter().zip(r.opaques()) {
                    granted.push(
                        self.decide(
                            channel,
                            RequestId::StatMulti,
                            Permission::Read,
                            path,
                            opaque,
                        )
                        .await?,
                    );
                }
                r.set_paths(granted);
                Ok(())
            }
            // Handle-based and administrative operations: access was decided
            // when the handle was opened, or no path is involved at all.
            Request::Prepare(_)
            | Request::Read(_)
            | Request::ReadVector(_)
            | Request::Write(_)
            | Request::Sync(_)
            | Request::Close(_)
            | Request::Protocol(_) => Ok(()),
        }
    }

    async fn authorize_path<R: PathRequest + Send>(
        &self,
        channel: &ChannelContext,
        request_id: RequestId,
        permission: Permission,
        request: &mut R,
    ) -> Result<(), ProtocolError> {
        if request.path().is_empty() {
            return Err(missing_path());
        }
        let granted = self
            .decide(channel, request_id, permission, request.path(), request.opaque())
            .await?;
        request.set_path(granted);
        Ok(())
    }

    // One capability decision: parse the opaque data, build the context,
    // obtain a fresh handler, translate its verdict.
    async fn decide(
        &self,
        channel: &ChannelContext,
        request_id: RequestId,
        permission: Permission,
        path: &str,
        opaque: &str,
    ) -> Result<String, ProtocolError> {
        let parsed = parse_opaque(opaque).map_err(|e| {
            ProtocolError::new(
                StatusCode::NotAuthorized,
                format!("Invalid opaque data: {e} (opaque={opaque})"),
            )
        })?;

        trace!(
            request_id = request_id.code(),
            %permission,
            path,
            "authorizing operation"
        );

        let context = AuthorizationContext {
            subject: &channel.subject,
            local_address: channel.local_address,
            remote_address: channel.remote_address,
            path,
            opaque: &parsed,
            request_id,
            permission,
        };

        let handler = self.factory.create_handler();
        match handler.authorize(&context).await {
            Ok(granted) => Ok(granted),
            Err(AuthzError::Security(m)) => {
                debug!(path, "authorization check failed: {m}");
                Err(ProtocolError::new(
                    StatusCode::NotAuthorized,
                    format!("Authorization check failed: {m}"),
                ))
            }
            Err(AuthzError::Denied(m)) => {
                debug!(path, "permission denied: {m}");
                Err(ProtocolError::new(
                    StatusCode::NotAuthorized,
                    format!("Permission denied: {m}"),
                ))
            }
        }
    }
}

fn missing_path() -> ProtocolError {
    ProtocolError::new(StatusCode::ArgMissing, "no path specified")
}
