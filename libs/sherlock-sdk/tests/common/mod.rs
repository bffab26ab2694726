#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Scripted-engine helpers shared by the integration tests.

use sherlock_sdk::proto::common::{HealthCheckResponse, paths};
use sherlock_sdk::proto::{NameListResponse, ReturnCode, ReturnCodeWithErrors, StatusResponse};
use sherlock_sdk::{EngineVersion, MockChannel, Sherlock};

/// Channel whose health check always succeeds.
pub fn engine_up() -> MockChannel {
    let mock = MockChannel::new();
    mock.respond_always(paths::CHECK, &HealthCheckResponse { status: 0 });
    mock
}

/// Client on a current engine over `mock`.
pub fn sherlock(mock: &MockChannel) -> Sherlock<MockChannel> {
    Sherlock::new(mock.clone(), EngineVersion::Build(252))
}

pub fn names(items: &[&str]) -> NameListResponse {
    NameListResponse {
        return_code: Some(ReturnCode::ok("")),
        names: items.iter().map(|s| (*s).to_owned()).collect(),
    }
}

pub fn accepted() -> ReturnCodeWithErrors {
    ReturnCodeWithErrors {
        return_code: Some(ReturnCode::ok("")),
        errors: Vec::new(),
    }
}

pub fn ok_status() -> StatusResponse {
    StatusResponse::new(0, "")
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}
