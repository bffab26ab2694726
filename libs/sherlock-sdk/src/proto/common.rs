//! `SherlockCommonService` messages.

use super::ReturnCode;

pub mod paths {
    pub const CHECK: &str = "/SherlockCommonService/check";
    pub const EXIT: &str = "/SherlockCommonService/exit";
    pub const LIST_UNITS: &str = "/SherlockCommonService/listUnits";
    pub const GET_SHERLOCK_INFO: &str = "/SherlockCommonService/getSherlockInfo";
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HealthCheckRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HealthCheckResponse {
    #[prost(int32, tag = "1")]
    pub status: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExitRequest {
    #[prost(bool, tag = "1")]
    pub close_sherlock_client: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExitResponse {
    #[prost(string, tag = "1")]
    pub message: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListUnitsRequest {
    /// Ordinal of the unit family, see `UnitType`.
    #[prost(int32, tag = "1")]
    pub unit_type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListUnitsResponse {
    #[prost(message, optional, tag = "1")]
    pub return_code: Option<ReturnCode>,
    #[prost(string, repeated, tag = "2")]
    pub units: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSherlockInfoRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSherlockInfoResponse {
    #[prost(message, optional, tag = "1")]
    pub return_code: Option<ReturnCode>,
    /// Release label such as `2025 R1`.
    #[prost(string, tag = "2")]
    pub release_version: String,
    #[prost(string, tag = "3")]
    pub default_projects_dir: String,
    #[prost(bool, tag = "4")]
    pub is_single_project_mode: bool,
}
