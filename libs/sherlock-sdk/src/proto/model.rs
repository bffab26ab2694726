//! `SherlockModelService` messages.

pub mod paths {
    pub const EXPORT_TRACE_REINFORCEMENT_MODEL: &str =
        "/SherlockModelService/exportTraceReinforcementModel";
    pub const EXPORT_AEDB: &str = "/SherlockModelService/exportAEDB";
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportTraceReinforcementModelRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(string, tag = "3")]
    pub export_file: String,
    #[prost(bool, tag = "4")]
    pub overwrite: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportAedbRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(string, tag = "3")]
    pub export_file: String,
    #[prost(bool, tag = "4")]
    pub overwrite_existing_file: bool,
    #[prost(bool, tag = "5")]
    pub display_model_in_viewer: bool,
}
