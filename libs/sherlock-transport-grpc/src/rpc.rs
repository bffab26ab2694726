//! Unary call seam between the SDK and the wire.
//!
//! The engine exposes one gRPC service per business area, each a flat list of
//! unary methods. Instead of generating a typed stub per service, the SDK
//! addresses methods by their full path (`/Service/method`) and lets this
//! trait do the prost encoding. Production code uses [`Channel`]; tests use
//! [`crate::mock::MockChannel`].

use async_trait::async_trait;
use http::uri::PathAndQuery;
use tonic::Status;
use tonic::transport::Channel;

/// A handle able to perform one unary RPC at a time.
///
/// Implementations are cheap to clone and share one underlying connection.
#[async_trait]
pub trait RpcChannel: Clone + Send + Sync + 'static {
    /// Send `request` to the method at `path` and decode its reply.
    ///
    /// # Errors
    /// Returns the transport or server [`Status`] when the call fails.
    async fn unary<Req, Resp>(&self, path: &'static str, request: Req) -> Result<Resp, Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static;
}

#[async_trait]
impl RpcChannel for Channel {
    async fn unary<Req, Resp>(&self, path: &'static str, request: Req) -> Result<Resp, Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut grpc = tonic::client::Grpc::new(self.clone());
        grpc.ready()
            .await
            .map_err(|e| Status::unavailable(format!("engine channel not ready: {e}")))?;

        let codec = tonic_prost::ProstCodec::<Req, Resp>::default();
        let response = grpc
            .unary(
                tonic::Request::new(request),
                PathAndQuery::from_static(path),
                codec,
            )
            .await?;

        Ok(response.into_inner())
    }
}
