#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

//! gRPC transport for the Sherlock engine client.
//!
//! - [`client`]: channel configuration and lazy connection
//! - [`rpc`]: the [`RpcChannel`] unary-call seam used by every SDK service
//! - [`mock`]: a recording [`MockChannel`] for tests

pub mod client;
pub mod mock;
pub mod rpc;

pub use client::{GrpcClientConfig, connect_lazy, engine_uri};
pub use mock::{MockChannel, RecordedCall};
pub use rpc::RpcChannel;
