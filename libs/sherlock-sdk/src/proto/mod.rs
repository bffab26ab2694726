//! Wire messages for the engine's gRPC services.
//!
//! One submodule per engine service. Each holds the request/response messages
//! used by the SDK and a `paths` module with the full method paths.

pub mod analysis;
pub mod common;
pub mod layer;
pub mod lifecycle;
pub mod model;
pub mod parts;
pub mod project;
pub mod stackup;

/// Status pair embedded as `returnCode` in most engine responses.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReturnCode {
    #[prost(int32, tag = "1")]
    pub value: i32,
    #[prost(string, tag = "2")]
    pub message: String,
}

impl ReturnCode {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            value: 0,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            value: -1,
            message: message.into(),
        }
    }
}

/// Response of the many engine methods that answer with a bare status pair.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StatusResponse {
    #[prost(int32, tag = "1")]
    pub value: i32,
    #[prost(string, tag = "2")]
    pub message: String,
}

impl StatusResponse {
    #[must_use]
    pub fn new(value: i32, message: impl Into<String>) -> Self {
        Self {
            value,
            message: message.into(),
        }
    }
}

/// Response carrying a `returnCode` and a per-item error list.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReturnCodeWithErrors {
    #[prost(message, optional, tag = "1")]
    pub return_code: Option<ReturnCode>,
    #[prost(string, repeated, tag = "2")]
    pub errors: Vec<String>,
}

/// Request of the parameterless list methods.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EmptyRequest {}

/// Response of the list methods that back the enumeration caches.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NameListResponse {
    #[prost(message, optional, tag = "1")]
    pub return_code: Option<ReturnCode>,
    #[prost(string, repeated, tag = "2")]
    pub names: Vec<String>,
}

/// Response carrying only a `returnCode`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReturnCodeResponse {
    #[prost(message, optional, tag = "1")]
    pub return_code: Option<ReturnCode>,
}
