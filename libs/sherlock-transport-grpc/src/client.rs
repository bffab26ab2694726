//! Channel configuration for the engine's gRPC server.
//!
//! The engine listens on a plain-text HTTP/2 port on the local machine. This
//! module only builds the [`Channel`]; it never dials eagerly and never
//! retries. Waiting for a booting engine is the caller's health-check loop.

use std::time::Duration;

use anyhow::Context;
use tonic::transport::{Channel, Endpoint};

/// Transport settings for a channel to the engine.
#[derive(Debug, Clone)]
pub struct GrpcClientConfig {
    /// Timeout for establishing the HTTP/2 connection.
    pub connect_timeout: Duration,

    /// Deadline applied by the transport to every RPC.
    pub rpc_timeout: Duration,

    /// Name used in log lines.
    pub service_name: &'static str,
}

impl Default for GrpcClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            rpc_timeout: Duration::from_secs(30),
            service_name: "sherlock",
        }
    }
}

impl GrpcClientConfig {
    #[must_use]
    pub fn new(service_name: &'static str) -> Self {
        Self {
            service_name,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_rpc_timeout(mut self, timeout: Duration) -> Self {
        self.rpc_timeout = timeout;
        self
    }
}

/// Address of an engine listening on `host:port`, in the form tonic expects.
#[must_use]
pub fn engine_uri(host: &str, port: u16) -> String {
    format!("http://{host}:{port}")
}

/// Build an [`Endpoint`] with the configured timeouts and HTTP/2 keepalive.
///
/// # Errors
/// Returns an error if `uri` is not a valid URI.
pub fn build_endpoint(
    uri: String,
    cfg: &GrpcClientConfig,
) -> Result<Endpoint, tonic::transport::Error> {
    let endpoint = Endpoint::from_shared(uri)?
        .connect_timeout(cfg.connect_timeout)
        .timeout(cfg.rpc_timeout)
        .tcp_keepalive(Some(Duration::from_secs(30)))
        .http2_keep_alive_interval(Duration::from_secs(30))
        .keep_alive_timeout(Duration::from_secs(10))
        .keep_alive_while_idle(true);

    Ok(endpoint)
}

/// Create a channel that connects on first use.
///
/// The engine may still be booting when the client is created, so nothing is
/// dialed here; the first RPC (normally the health check) opens the
/// connection and a failure surfaces as a transport `Status` on that call.
///
/// # Errors
/// Returns an error if `uri` is not a valid URI.
pub fn connect_lazy(uri: impl Into<String>, cfg: &GrpcClientConfig) -> anyhow::Result<Channel> {
    let uri = uri.into();
    let endpoint = build_endpoint(uri.clone(), cfg)
        .with_context(|| format!("invalid engine address: {uri}"))?;
    tracing::debug!(service = cfg.service_name, uri = %uri, "created lazy gRPC channel");
    Ok(endpoint.connect_lazy())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = GrpcClientConfig::default();
        assert_eq!(cfg.connect_timeout, Duration::from_secs(10));
        assert_eq!(cfg.rpc_timeout, Duration::from_secs(30));
        assert_eq!(cfg.service_name, "sherlock");
    }

    #[test]
    fn test_config_builder() {
        let cfg = GrpcClientConfig::new("engine")
            .with_connect_timeout(Duration::from_secs(2))
            .with_rpc_timeout(Duration::from_secs(120));

        assert_eq!(cfg.service_name, "engine");
        assert_eq!(cfg.connect_timeout, Duration::from_secs(2));
        assert_eq!(cfg.rpc_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_engine_uri() {
        assert_eq!(engine_uri("127.0.0.1", 9090), "http://127.0.0.1:9090");
    }

    #[test]
    fn test_build_endpoint_rejects_empty_uri() {
        let cfg = GrpcClientConfig::default();
        assert!(build_endpoint(String::new(), &cfg).is_err());
        assert!(build_endpoint(engine_uri("localhost", 9090), &cfg).is_ok());
    }

    #[tokio::test]
    async fn test_connect_lazy_does_not_dial() {
        let cfg = GrpcClientConfig::default();
        // Nothing listens on port 1; a lazy channel must still be created.
        let channel = connect_lazy(engine_uri("127.0.0.1", 1), &cfg);
        assert!(channel.is_ok());
    }

    #[test]
    fn test_connect_lazy_rejects_bad_address() {
        let err = connect_lazy("not a uri", &GrpcClientConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid engine address: not a uri"));
    }
}
