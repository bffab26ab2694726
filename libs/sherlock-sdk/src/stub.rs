//! Channel handle shared by the domain modules.

use sherlock_transport_grpc::RpcChannel;

use crate::cache::EnumCache;
use crate::errors::Failure;
use crate::proto::common::{HealthCheckRequest, HealthCheckResponse, paths};
use crate::proto::{EmptyRequest, NameListResponse};
use crate::validate::listed;
use crate::version::{EngineVersion, VersionGate};

/// Channel plus engine version; one per domain module.
#[derive(Debug, Clone)]
pub struct ServiceStub<C> {
    channel: C,
    version: EngineVersion,
}

impl<C: RpcChannel> ServiceStub<C> {
    pub const fn new(channel: C, version: EngineVersion) -> Self {
        Self { channel, version }
    }

    /// Health-check round trip; transport errors read as "down".
    pub async fn is_connection_up(&self) -> bool {
        match self
            .channel
            .unary::<_, HealthCheckResponse>(paths::CHECK, HealthCheckRequest {})
            .await
        {
            Ok(_) => true,
            Err(status) => {
                tracing::debug!(code = %status.code(), "health check failed");
                false
            }
        }
    }

    /// Connection guard run by every engine operation.
    pub async fn connected(&self) -> bool {
        let up = self.is_connection_up().await;
        if !up {
            tracing::error!("Not connected to a gRPC service.");
        }
        up
    }

    /// # Errors
    /// Returns [`Failure::Version`] when the gate refuses the engine version.
    pub fn require(&self, gate: VersionGate, function: &'static str) -> Result<(), Failure> {
        gate.check(self.version, function).map_err(Failure::from)
    }

    /// Send one request.
    ///
    /// # Errors
    /// Returns [`Failure::Transport`] when the RPC fails.
    pub async fn call<Req, Resp>(&self, path: &'static str, request: Req) -> Result<Resp, Failure>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        tracing::debug!(operation = path, "sending request");
        self.channel
            .unary(path, request)
            .await
            .map_err(Failure::from)
    }

    /// Fetch a name list; `None` unless the engine answered with value 0.
    pub async fn fetch_names(&self, path: &'static str) -> Option<Vec<String>> {
        match self
            .channel
            .unary::<_, NameListResponse>(path, EmptyRequest {})
            .await
        {
            Ok(response) => {
                let value = response.return_code.as_ref().map_or(0, |rc| rc.value);
                if value == 0 {
                    Some(response.names)
                } else {
                    tracing::warn!(operation = path, value, "engine list unavailable");
                    None
                }
            }
            Err(status) => {
                tracing::warn!(operation = path, code = %status.code(), "engine list unavailable");
                None
            }
        }
    }

    /// `true` when `value` is in the list behind `cache`, filling it from
    /// `path` on first use. An unavailable list accepts everything.
    pub async fn allowed(&self, cache: &EnumCache, path: &'static str, value: &str) -> bool {
        let names = cache.load(|| self.fetch_names(path)).await;
        listed(names, value)
    }
}
