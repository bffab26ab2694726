#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for the engine channel helpers

use std::time::Duration;

use prost::Message;
use sherlock_transport_grpc::{GrpcClientConfig, MockChannel, RpcChannel, connect_lazy, engine_uri};

#[derive(Clone, PartialEq, Message)]
struct Ping {
    #[prost(int32, tag = "1")]
    value: i32,
}

fn quick_config() -> GrpcClientConfig {
    GrpcClientConfig::new("test_engine")
        .with_connect_timeout(Duration::from_millis(200))
        .with_rpc_timeout(Duration::from_millis(500))
}

#[test]
fn default_config_is_sane() {
    let cfg = GrpcClientConfig::default();

    assert!(
        cfg.connect_timeout > Duration::ZERO,
        "connect_timeout should be positive"
    );
    assert!(
        cfg.rpc_timeout >= cfg.connect_timeout,
        "rpc_timeout should not be shorter than connect_timeout"
    );
    assert!(
        !cfg.service_name.is_empty(),
        "service_name should not be empty"
    );
}

#[tokio::test]
async fn unary_on_dead_port_is_a_status_error() {
    let channel = connect_lazy(engine_uri("127.0.0.1", 1), &quick_config()).unwrap();

    let result = channel
        .unary::<Ping, Ping>("/SherlockCommonService/check", Ping::default())
        .await;

    assert!(
        result.is_err(),
        "a call to a port with no listener must fail with a Status"
    );
}

#[tokio::test]
async fn dead_port_is_not_retried() {
    let channel = connect_lazy(engine_uri("127.0.0.1", 1), &quick_config()).unwrap();

    let started = std::time::Instant::now();
    let first = channel
        .unary::<Ping, Ping>("/SherlockCommonService/check", Ping::default())
        .await;
    let second = channel
        .unary::<Ping, Ping>("/SherlockCommonService/check", Ping::default())
        .await;

    assert!(first.is_err() && second.is_err());
    assert!(
        started.elapsed() < Duration::from_secs(5),
        "refused connections must fail fast, without backoff"
    );
}

#[tokio::test]
async fn mock_channel_is_shared_between_clones() {
    let mock = MockChannel::new();
    mock.respond_always("/Svc/ping", &Ping { value: 7 });

    let clone = mock.clone();
    let reply: Ping = clone.unary("/Svc/ping", Ping { value: 1 }).await.unwrap();

    assert_eq!(reply.value, 7);
    assert_eq!(mock.calls().len(), 1, "clones must share the call log");
    assert_eq!(mock.last_request::<Ping>("/Svc/ping").unwrap().value, 1);
}

#[test]
#[allow(clippy::use_debug)]
fn mock_channel_is_debug() {
    let mock = MockChannel::new();
    mock.respond_always("/Svc/ping", &Ping::default());
    assert!(format!("{mock:?}").contains("MockChannel"));
}
