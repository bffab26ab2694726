//! `SherlockPartsService` messages.

use super::{EmptyRequest, NameListResponse, ReturnCode};

pub mod paths {
    pub const GET_PART_LOCATION_UNITS: &str = "/SherlockPartsService/getPartLocationUnits";
    pub const GET_BOARD_SIDES: &str = "/SherlockPartsService/getBoardSides";
    pub const UPDATE_PARTS_LIST: &str = "/SherlockPartsService/updatePartsList";
    pub const UPDATE_PARTS_LOCATIONS: &str = "/SherlockPartsService/updatePartsLocations";
    pub const UPDATE_PARTS_LOCATIONS_BY_FILE: &str =
        "/SherlockPartsService/updatePartsLocationsByFile";
    pub const GET_PART_LOCATION: &str = "/SherlockPartsService/getPartLocation";
    pub const IMPORT_PARTS_LIST: &str = "/SherlockPartsService/importPartsList";
    pub const EXPORT_PARTS_LIST: &str = "/SherlockPartsService/exportPartsList";
    pub const ENABLE_LEAD_MODELING: &str = "/SherlockPartsService/enableLeadModeling";
    pub const GET_PARTS_LIST_PROPERTIES: &str = "/SherlockPartsService/getPartsListProperties";
}

pub type ListRequest = EmptyRequest;
pub type ListResponse = NameListResponse;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdatePartsListRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(string, tag = "3")]
    pub part_library: String,
    /// `Both = 0`, `Part = 1`.
    #[prost(int32, tag = "4")]
    pub matching: i32,
    /// `First = 0`, `Error = 1`, `Ignore = 2`.
    #[prost(int32, tag = "5")]
    pub duplication: i32,
}

/// Response of the parts and mount point update methods.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateResponse {
    #[prost(message, optional, tag = "1")]
    pub return_code: Option<ReturnCode>,
    #[prost(string, repeated, tag = "2")]
    pub update_error: Vec<String>,
}

/// Part placement as the engine exchanges it; every field is text and an
/// empty string means "leave unchanged".
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PartLocation {
    #[prost(string, tag = "1")]
    pub ref_des: String,
    #[prost(string, tag = "2")]
    pub x: String,
    #[prost(string, tag = "3")]
    pub y: String,
    #[prost(string, tag = "4")]
    pub rotation: String,
    #[prost(string, tag = "5")]
    pub location_units: String,
    #[prost(string, tag = "6")]
    pub board_side: String,
    #[prost(string, tag = "7")]
    pub mirrored: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdatePartsLocationsRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(message, repeated, tag = "3")]
    pub part_loc: Vec<PartLocation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdatePartsLocationsByFileRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(string, tag = "3")]
    pub file_path: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImportPartsListRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(string, tag = "3")]
    pub import_file: String,
    /// Validate the list against the part libraries after import.
    #[prost(bool, tag = "4")]
    pub validate: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPartLocationRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(string, tag = "3")]
    pub ref_des: String,
    #[prost(string, tag = "4")]
    pub location_units: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPartLocationResponse {
    #[prost(message, optional, tag = "1")]
    pub return_code: Option<ReturnCode>,
    #[prost(message, repeated, tag = "2")]
    pub locations: Vec<PartLocation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportPartsListRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(string, tag = "3")]
    pub export_file: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnableLeadModelingRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPartsListPropertiesRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    /// Every part when empty.
    #[prost(string, repeated, tag = "3")]
    pub ref_des: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PartProperty {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PartProperties {
    #[prost(message, optional, tag = "1")]
    pub return_code: Option<ReturnCode>,
    #[prost(string, tag = "2")]
    pub ref_des: String,
    #[prost(message, repeated, tag = "3")]
    pub properties: Vec<PartProperty>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPartsListPropertiesResponse {
    #[prost(message, repeated, tag = "1")]
    pub parts: Vec<PartProperties>,
}
