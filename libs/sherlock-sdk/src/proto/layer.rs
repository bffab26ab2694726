//! `SherlockLayerService` messages.

use super::ReturnCode;

pub mod paths {
    pub const UPDATE_MOUNT_POINTS_BY_FILE: &str = "/SherlockLayerService/updateMountPoints";
    pub const DELETE_ALL_MOUNT_POINTS: &str = "/SherlockLayerService/deleteAllMountPoints";
    pub const DELETE_ALL_ICT_FIXTURES: &str = "/SherlockLayerService/deleteAllICTFixtures";
    pub const DELETE_ALL_TEST_POINTS: &str = "/SherlockLayerService/deleteAllTestPoints";
    pub const EXPORT_ALL_MOUNT_POINTS: &str = "/SherlockLayerService/exportAllMountPoints";
    pub const EXPORT_ALL_TEST_POINTS: &str = "/SherlockLayerService/exportAllTestPoints";
    pub const EXPORT_ALL_TEST_FIXTURES: &str = "/SherlockLayerService/exportAllTestFixtures";
    pub const LIST_LAYERS: &str = "/SherlockLayerService/listLayers";
    pub const ADD_POTTING_REGION: &str = "/SherlockLayerService/addPottingRegion";
    pub const UPDATE_POTTING_REGION: &str = "/SherlockLayerService/updatePottingRegion";
    pub const COPY_POTTING_REGION: &str = "/SherlockLayerService/copyPottingRegion";
    pub const DELETE_POTTING_REGION: &str = "/SherlockLayerService/deletePottingRegion";
}

/// Request naming a single CCA of a project.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CcaRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
}

pub type DeleteAllMountPointsRequest = CcaRequest;
pub type DeleteAllIctFixturesRequest = CcaRequest;
pub type DeleteAllTestPointsRequest = CcaRequest;
pub type ListLayersRequest = CcaRequest;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateMountPointsByFileRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(string, tag = "3")]
    pub file_path: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateMountPointsByFileResponse {
    #[prost(message, optional, tag = "1")]
    pub return_code: Option<ReturnCode>,
    #[prost(string, repeated, tag = "2")]
    pub update_error: Vec<String>,
}

/// Export of every mount point, test point or test fixture of a CCA.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportLayerItemsRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(string, tag = "3")]
    pub file_path: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Layer {
    #[prost(string, tag = "1")]
    pub layer_id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub layer_type: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListLayersResponse {
    #[prost(message, optional, tag = "1")]
    pub return_code: Option<ReturnCode>,
    #[prost(message, repeated, tag = "2")]
    pub layers: Vec<Layer>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Point {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PolygonalShape {
    #[prost(message, repeated, tag = "1")]
    pub points: Vec<Point>,
    #[prost(double, tag = "2")]
    pub rotation: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RectangularShape {
    #[prost(double, tag = "1")]
    pub length: f64,
    #[prost(double, tag = "2")]
    pub width: f64,
    #[prost(double, tag = "3")]
    pub center_x: f64,
    #[prost(double, tag = "4")]
    pub center_y: f64,
    #[prost(double, tag = "5")]
    pub rotation: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CircularShape {
    #[prost(double, tag = "1")]
    pub diameter: f64,
    #[prost(double, tag = "2")]
    pub center_x: f64,
    #[prost(double, tag = "3")]
    pub center_y: f64,
    #[prost(double, tag = "4")]
    pub rotation: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PottingRegion {
    #[prost(string, tag = "1")]
    pub cca_name: String,
    #[prost(string, tag = "2")]
    pub potting_id: String,
    #[prost(string, tag = "3")]
    pub potting_side: String,
    #[prost(string, tag = "4")]
    pub potting_material: String,
    #[prost(string, tag = "5")]
    pub potting_units: String,
    #[prost(double, tag = "6")]
    pub potting_thickness: f64,
    #[prost(double, tag = "7")]
    pub potting_standoff: f64,
    #[prost(oneof = "potting_region::Shape", tags = "10, 11, 12")]
    pub shape: Option<potting_region::Shape>,
}

pub mod potting_region {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Shape {
        #[prost(message, tag = "10")]
        Polygonal(super::PolygonalShape),
        #[prost(message, tag = "11")]
        Rectangular(super::RectangularShape),
        #[prost(message, tag = "12")]
        Circular(super::CircularShape),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddPottingRegionRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(message, repeated, tag = "2")]
    pub potting_regions: Vec<PottingRegion>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PottingRegionUpdateData {
    #[prost(string, tag = "1")]
    pub potting_region_id_to_update: String,
    #[prost(message, optional, tag = "2")]
    pub potting_region: Option<PottingRegion>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdatePottingRegionRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(message, repeated, tag = "2")]
    pub update_potting_regions: Vec<PottingRegionUpdateData>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PottingRegionCopyData {
    #[prost(string, tag = "1")]
    pub cca_name: String,
    #[prost(string, tag = "2")]
    pub potting_id: String,
    #[prost(string, tag = "3")]
    pub copy_potting_id: String,
    #[prost(double, tag = "4")]
    pub center_x: f64,
    #[prost(double, tag = "5")]
    pub center_y: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CopyPottingRegionRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(message, repeated, tag = "2")]
    pub potting_region_copy_data: Vec<PottingRegionCopyData>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PottingRegionDeleteData {
    #[prost(string, tag = "1")]
    pub cca_name: String,
    #[prost(string, tag = "2")]
    pub potting_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeletePottingRegionRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(message, repeated, tag = "2")]
    pub potting_region_delete_data: Vec<PottingRegionDeleteData>,
}

/// One status per region of an update, copy or delete request, in order.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PottingRegionResponses {
    #[prost(message, repeated, tag = "1")]
    pub return_codes: Vec<ReturnCode>,
}
