//! `SherlockProjectService` messages.

use super::ReturnCode;

pub mod paths {
    pub const DELETE_PROJECT: &str = "/SherlockProjectService/deleteProject";
    pub const ADD_PROJECT: &str = "/SherlockProjectService/addProject";
    pub const IMPORT_ODB_ARCHIVE: &str = "/SherlockProjectService/importODBArchive";
    pub const IMPORT_IPC2581_ARCHIVE: &str = "/SherlockProjectService/importIPC2581Archive";
    pub const GENERATE_PROJECT_REPORT: &str = "/SherlockProjectService/generateProjectReport";
    pub const LIST_CCAS: &str = "/SherlockProjectService/listCCAs";
    pub const ADD_CCA: &str = "/SherlockProjectService/addCCA";
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteProjectRequest {
    #[prost(string, tag = "1")]
    pub project: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddProjectRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub category: String,
    #[prost(string, tag = "3")]
    pub description: String,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImportOdbRequest {
    #[prost(string, tag = "1")]
    pub archive_file: String,
    #[prost(bool, tag = "2")]
    pub process_layer_thickness: bool,
    #[prost(bool, tag = "3")]
    pub include_other_layers: bool,
    #[prost(bool, tag = "4")]
    pub process_cutout_file: bool,
    #[prost(bool, tag = "5")]
    pub guess_part_properties: bool,
    #[prost(string, tag = "6")]
    pub project: String,
    #[prost(string, tag = "7")]
    pub cca_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImportIpc2581Request {
    #[prost(string, tag = "1")]
    pub archive_file: String,
    #[prost(bool, tag = "2")]
    pub include_other_layers: bool,
    #[prost(bool, tag = "3")]
    pub guess_part_properties: bool,
    #[prost(string, tag = "4")]
    pub project: String,
    #[prost(string, tag = "5")]
    pub cca_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenerateProjectReportRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub author: String,
    #[prost(string, tag = "3")]
    pub company: String,
    #[prost(string, tag = "4")]
    pub report_file: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListCcasRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, repeated, tag = "2")]
    pub cca_names: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CcaInfo {
    #[prost(string, tag = "1")]
    pub cca_name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(string, tag = "3")]
    pub default_solder_type: String,
    #[prost(double, tag = "4")]
    pub default_stencil_thickness: f64,
    #[prost(string, tag = "5")]
    pub default_stencil_thickness_units: String,
    #[prost(double, tag = "6")]
    pub default_part_temp_rise: f64,
    #[prost(string, tag = "7")]
    pub default_part_temp_rise_units: String,
    #[prost(bool, tag = "8")]
    pub guess_part_properties: bool,
    #[prost(message, repeated, tag = "9")]
    pub sub_ccas: Vec<CcaInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListCcasResponse {
    #[prost(message, optional, tag = "1")]
    pub return_code: Option<ReturnCode>,
    #[prost(string, repeated, tag = "2")]
    pub error_message: Vec<String>,
    #[prost(message, repeated, tag = "3")]
    pub ccas: Vec<CcaInfo>,
}

/// CCA to create; unset properties take the engine defaults.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CcaProperties {
    #[prost(string, tag = "1")]
    pub cca_name: String,
    #[prost(string, optional, tag = "2")]
    pub description: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub default_solder_type: Option<String>,
    #[prost(double, optional, tag = "4")]
    pub default_stencil_thickness: Option<f64>,
    #[prost(string, optional, tag = "5")]
    pub default_stencil_thickness_units: Option<String>,
    #[prost(double, optional, tag = "6")]
    pub default_part_temp_rise: Option<f64>,
    #[prost(string, optional, tag = "7")]
    pub default_part_temp_rise_units: Option<String>,
    #[prost(bool, optional, tag = "8")]
    pub guess_part_properties: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddCcaRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(message, repeated, tag = "2")]
    pub ccas: Vec<CcaProperties>,
}

pub type AddCcaResponse = super::ReturnCodeWithErrors;
