//! # Authorization Gate Flows
//!
//! The pipeline driven with a catalogue-style capability that maps logical
//! names onto storage paths, the way a real deployment fronting a name
//! space would.

#[cfg(test)]
mod tests {
    use dg_02_authz_gate::{
        AuthorizationContext, AuthorizationFactory, AuthorizationHandler, AuthorizationPipeline,
        AuthzError, NoAuthorizationFactory,
    };
    use shared_types::{
        ChannelContext, MoveRequest, OpenRequest, PathRequest, Permission, ProtocolRequest,
        ReadRequest, Request, StatMultiRequest, StatRequest, StatusCode, Subject,
    };

    fn channel_for(principal: &str) -> ChannelContext {
        ChannelContext::new(
            Subject::new(principal),
            "127.0.0.1:1094".parse().unwrap(),
            "192.0.2.15:41234".parse().unwrap(),
        )
    }

    /// Grants reads to everyone under `/public`, everything under the
    /// subject's home directory, and nothing else. Granted paths are
    /// rewritten onto the backing store.
    struct CatalogueFactory;

    struct CatalogueHandler;

    #[async_trait::async_trait]
    impl AuthorizationHandler for CatalogueHandler {
        async fn authorize(
            &self,
            context: &AuthorizationContext<'_>,
        ) -> Result<String, AuthzError> {
            let principal = context
                .subject
                .principal()
                .ok_or_else(|| AuthzError::Security("no authenticated subject".to_string()))?;

            let home = format!("/home/{principal}");
            let allowed = context.path.starts_with(&home)
                || (context.permission == Permission::Read
                    && context.path.starts_with("/public"));
            if !allowed {
                return Err(AuthzError::Denied(format!(
                    "{principal} may not {} {}",
                    context.permission, context.path
                )));
            }
            Ok(format!("/store{}", context.path))
        }
    }

    impl AuthorizationFactory for CatalogueFactory {
        fn create_handler(&self) -> Box<dyn AuthorizationHandler> {
            Box::new(CatalogueHandler)
        }
    }

    #[tokio::test]
    async fn test_session_of_requests_through_the_catalogue() {
        let pipeline = AuthorizationPipeline::new(CatalogueFactory);
        let channel = channel_for("alice");

        // Version negotiation passes through untouched.
        let mut protocol = Request::Protocol(ProtocolRequest {
            client_version: 0x310,
        });
        pipeline.process(&channel, &mut protocol).await.unwrap();

        // A public read is granted and lands on the backing store.
        let mut stat = Request::Stat(StatRequest::new("/public/dataset/run042", ""));
        pipeline.process(&channel, &mut stat).await.unwrap();
        match &stat {
            Request::Stat(r) => assert_eq!(r.path(), "/store/public/dataset/run042"),
            other => panic!("request kind changed: {other:?}"),
        }

        // Creating a file in the subject's home needs write access.
        let mut open = Request::Open(OpenRequest::new("/home/alice/out.root", "", true, false));
        pipeline.process(&channel, &mut open).await.unwrap();
        match &open {
            Request::Open(r) => assert_eq!(r.path(), "/store/home/alice/out.root"),
            other => panic!("request kind changed: {other:?}"),
        }

        // Reads on an open handle are not re-authorized.
        let mut read = Request::Read(ReadRequest {
            file_handle: 7,
            offset: 0,
            length: 65536,
        });
        pipeline.process(&channel, &mut read).await.unwrap();
    }

    #[tokio::test]
    async fn test_write_to_public_area_is_denied() {
        let pipeline = AuthorizationPipeline::new(CatalogueFactory);
        let channel = channel_for("alice");

        let mut open = Request::Open(OpenRequest::new("/public/dataset/raw", "", false, true));
        let err = pipeline.process(&channel, &mut open).await.unwrap_err();
        assert_eq!(err.code, StatusCode::NotAuthorized);
        assert_eq!(
            err.message,
            "Permission denied: alice may not write /public/dataset/raw"
        );
        // The requested path is left as it arrived.
        match &open {
            Request::Open(r) => assert_eq!(r.path(), "/public/dataset/raw"),
            other => panic!("request kind changed: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_move_needs_both_verdicts() {
        let pipeline = AuthorizationPipeline::new(CatalogueFactory);
        let channel = channel_for("alice");

        // Within the home directory both checks pass and both paths are
        // rewritten.
        let mut mv = Request::Move(MoveRequest::new(
            "/home/alice/a.root",
            "/home/alice/b.root",
            "",
        ));
        pipeline.process(&channel, &mut mv).await.unwrap();
        match &mv {
            Request::Move(r) => {
                assert_eq!(r.source_path(), "/store/home/alice/a.root");
                assert_eq!(r.target_path(), "/store/home/alice/b.root");
            }
            other => panic!("request kind changed: {other:?}"),
        }

        // Moving out of the home directory fails on the target check and
        // nothing is rewritten.
        let mut escape = Request::Move(MoveRequest::new(
            "/home/alice/a.root",
            "/home/bob/a.root",
            "",
        ));
        let err = pipeline.process(&channel, &mut escape).await.unwrap_err();
        assert_eq!(err.code, StatusCode::NotAuthorized);
        match &escape {
            Request::Move(r) => {
                assert_eq!(r.source_path(), "/home/alice/a.root");
                assert_eq!(r.target_path(), "/home/bob/a.root");
            }
            other => panic!("request kind changed: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_batched_stat_is_all_or_nothing() {
        let pipeline = AuthorizationPipeline::new(CatalogueFactory);
        let channel = channel_for("alice");

        let mut ok_batch = Request::StatMulti(StatMultiRequest::new(
            vec!["/public/a".into(), "/home/alice/b".into()],
            vec![String::new(), String::new()],
        ));
        pipeline.process(&channel, &mut ok_batch).await.unwrap();
        match &ok_batch {
            Request::StatMulti(r) => {
                assert_eq!(r.paths(), ["/store/public/a", "/store/home/alice/b"]);
            }
            other => panic!("request kind changed: {other:?}"),
        }

        let mut bad_batch = Request::StatMulti(StatMultiRequest::new(
            vec!["/public/a".into(), "/home/bob/secret".into()],
            vec![String::new(), String::new()],
        ));
        let err = pipeline.process(&channel, &mut bad_batch).await.unwrap_err();
        assert_eq!(err.code, StatusCode::NotAuthorized);
        match &bad_batch {
            Request::StatMulti(r) => assert_eq!(r.paths(), ["/public/a", "/home/bob/secret"]),
            other => panic!("request kind changed: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unauthenticated_channel_fails_the_check_itself() {
        let pipeline = AuthorizationPipeline::new(CatalogueFactory);
        let channel = ChannelContext::new(
            Subject::anonymous(),
            "127.0.0.1:1094".parse().unwrap(),
            "192.0.2.15:41234".parse().unwrap(),
        );

        let mut stat = Request::Stat(StatRequest::new("/public/a", ""));
        let err = pipeline.process(&channel, &mut stat).await.unwrap_err();
        assert_eq!(err.code, StatusCode::NotAuthorized);
        assert_eq!(
            err.message,
            "Authorization check failed: no authenticated subject"
        );
    }

    #[tokio::test]
    async fn test_noop_capability_grants_everything_unchanged() {
        let pipeline = AuthorizationPipeline::new(NoAuthorizationFactory);
        let channel = channel_for("anyone");

        let mut stat = Request::Stat(StatRequest::new("/anywhere/at/all", "authz=t&lfn=x"));
        pipeline.process(&channel, &mut stat).await.unwrap();
        match &stat {
            Request::Stat(r) => assert_eq!(r.path(), "/anywhere/at/all"),
            other => panic!("request kind changed: {other:?}"),
        }
    }
}
