//! `SherlockStackupService` messages.

use super::{EmptyRequest, NameListResponse, ReturnCode};

pub mod paths {
    pub const LIST_LAMINATE_THICKNESS_UNITS: &str =
        "/SherlockStackupService/listLaminateThicknessUnits";
    pub const LIST_LAMINATE_MATERIALS_MANUFACTURERS: &str =
        "/SherlockStackupService/listLaminateMaterialsManufacturers";
    pub const LIST_CONDUCTOR_MATERIALS: &str = "/SherlockStackupService/listConductorMaterials";
    pub const LIST_CONSTRUCTION_STYLES: &str = "/SherlockStackupService/listConstructionStyles";
    pub const LIST_FIBER_MATERIALS: &str = "/SherlockStackupService/listFiberMaterials";
    pub const LIST_LAMINATE_MATERIALS: &str = "/SherlockStackupService/listLaminateMaterials";
    pub const GEN_STACKUP: &str = "/SherlockStackupService/genStackup";
    pub const UPDATE_CONDUCTOR_LAYER: &str = "/SherlockStackupService/updateConductorLayer";
    pub const UPDATE_LAMINATE: &str = "/SherlockStackupService/updateLaminate";
    pub const GET_LAYER_COUNT: &str = "/SherlockStackupService/getLayerCount";
    pub const GET_TOTAL_CONDUCTOR_THICKNESS: &str =
        "/SherlockStackupService/getTotalConductorThickness";
    pub const LIST_CONDUCTOR_LAYERS: &str = "/SherlockStackupService/listConductorLayers";
    pub const LIST_LAMINATE_LAYERS: &str = "/SherlockStackupService/listLaminateLayers";
    pub const GET_STACKUP_PROPS: &str = "/SherlockStackupService/getStackupProps";
}

pub type ListRequest = EmptyRequest;
pub type ListResponse = NameListResponse;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListLaminateMaterialsRequest {
    #[prost(string, tag = "1")]
    pub manufacturer: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GradeMaterial {
    #[prost(string, tag = "1")]
    pub grade: String,
    #[prost(string, repeated, tag = "2")]
    pub laminate_material: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ManufacturerMaterials {
    #[prost(string, tag = "1")]
    pub manufacturer: String,
    #[prost(message, repeated, tag = "2")]
    pub grade_materials: Vec<GradeMaterial>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListLaminateMaterialsResponse {
    #[prost(message, optional, tag = "1")]
    pub return_code: Option<ReturnCode>,
    #[prost(message, repeated, tag = "2")]
    pub manufacturer_materials: Vec<ManufacturerMaterials>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenStackupRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(double, tag = "3")]
    pub board_thickness: f64,
    #[prost(string, tag = "4")]
    pub board_thickness_unit: String,
    #[prost(string, tag = "5")]
    pub pcb_material_manufacturer: String,
    #[prost(string, tag = "6")]
    pub pcb_material_grade: String,
    #[prost(string, tag = "7")]
    pub pcb_material: String,
    #[prost(int32, tag = "8")]
    pub conductor_layers_cnt: i32,
    #[prost(double, tag = "9")]
    pub signal_layer_thickness: f64,
    #[prost(string, tag = "10")]
    pub signal_layer_thickness_unit: String,
    #[prost(double, tag = "11")]
    pub min_laminate_thickness: f64,
    #[prost(string, tag = "12")]
    pub min_laminate_thickness_unit: String,
    #[prost(bool, tag = "13")]
    pub maintain_symmetry: bool,
    #[prost(double, tag = "14")]
    pub power_layer_thickness: f64,
    #[prost(string, tag = "15")]
    pub power_layer_thickness_unit: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateConductorLayerRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(string, tag = "3")]
    pub layer: String,
    /// `SIGNAL = 0`, `POWER = 1`, `SUBSTRATE = 2`.
    #[prost(int32, tag = "4")]
    pub r#type: i32,
    #[prost(string, tag = "5")]
    pub material: String,
    #[prost(double, tag = "6")]
    pub thickness: f64,
    #[prost(string, tag = "7")]
    pub thickness_unit: String,
    #[prost(string, tag = "8")]
    pub conductor_percent: String,
    #[prost(string, tag = "9")]
    pub resin_material: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GlassConstruction {
    #[prost(string, tag = "1")]
    pub style: String,
    #[prost(double, tag = "2")]
    pub resin_percentage: f64,
    #[prost(double, tag = "3")]
    pub thickness: f64,
    #[prost(string, tag = "4")]
    pub thickness_unit: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateLaminateRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(string, tag = "3")]
    pub layer: String,
    #[prost(string, tag = "4")]
    pub manufacturer: String,
    #[prost(string, tag = "5")]
    pub grade: String,
    #[prost(string, tag = "6")]
    pub material: String,
    #[prost(double, tag = "7")]
    pub thickness: f64,
    #[prost(string, tag = "8")]
    pub thickness_unit: String,
    #[prost(string, tag = "9")]
    pub construction_style: String,
    #[prost(message, repeated, tag = "10")]
    pub glass_construction: Vec<GlassConstruction>,
    #[prost(string, tag = "11")]
    pub fiber_material: String,
    #[prost(string, tag = "12")]
    pub conductor_material: String,
    #[prost(string, tag = "13")]
    pub conductor_percent: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLayerCountRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTotalConductorThicknessRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(string, tag = "3")]
    pub thickness_unit: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTotalConductorThicknessResponse {
    #[prost(message, optional, tag = "1")]
    pub return_code: Option<ReturnCode>,
    #[prost(double, tag = "2")]
    pub total_thickness: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListConductorLayersRequest {
    #[prost(string, tag = "1")]
    pub project: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConductorLayerProps {
    #[prost(string, tag = "1")]
    pub layer: String,
    #[prost(int32, tag = "2")]
    pub r#type: i32,
    #[prost(string, tag = "3")]
    pub material: String,
    #[prost(double, tag = "4")]
    pub thickness: f64,
    #[prost(string, tag = "5")]
    pub thickness_unit: String,
    #[prost(string, tag = "6")]
    pub conductor_percent: String,
    #[prost(string, tag = "7")]
    pub resin_material: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CcaConductorLayers {
    #[prost(string, tag = "1")]
    pub cca_name: String,
    #[prost(message, repeated, tag = "2")]
    pub conductor_layers: Vec<ConductorLayerProps>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListConductorLayersResponse {
    #[prost(message, optional, tag = "1")]
    pub return_code: Option<ReturnCode>,
    #[prost(message, repeated, tag = "2")]
    pub cca_conductor_layers: Vec<CcaConductorLayers>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListLaminateLayersRequest {
    #[prost(string, tag = "1")]
    pub project: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LaminateProps {
    #[prost(string, tag = "1")]
    pub layer: String,
    #[prost(string, tag = "2")]
    pub manufacturer: String,
    #[prost(string, tag = "3")]
    pub grade: String,
    #[prost(string, tag = "4")]
    pub material: String,
    #[prost(double, tag = "5")]
    pub thickness: f64,
    #[prost(string, tag = "6")]
    pub thickness_unit: String,
    #[prost(string, tag = "7")]
    pub construction_style: String,
    #[prost(message, repeated, tag = "8")]
    pub glass_construction: Vec<GlassConstruction>,
    #[prost(string, tag = "9")]
    pub fiber_material: String,
    #[prost(string, tag = "10")]
    pub conductor_material: String,
    #[prost(string, tag = "11")]
    pub conductor_percent: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CcaLaminateLayers {
    #[prost(string, tag = "1")]
    pub cca_name: String,
    #[prost(message, repeated, tag = "2")]
    pub laminate_props: Vec<LaminateProps>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListLaminateLayersResponse {
    #[prost(message, optional, tag = "1")]
    pub return_code: Option<ReturnCode>,
    #[prost(message, repeated, tag = "2")]
    pub cca_laminate_layers: Vec<CcaLaminateLayers>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetStackupPropsRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
}

/// Display strings as the engine renders them, e.g. `"2.0264 g/cc"`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetStackupPropsResponse {
    #[prost(message, optional, tag = "1")]
    pub return_code: Option<ReturnCode>,
    #[prost(string, tag = "2")]
    pub board_dimension: String,
    #[prost(string, tag = "3")]
    pub board_thickness: String,
    #[prost(string, tag = "4")]
    pub density: String,
    #[prost(string, tag = "5")]
    pub conductor_layers_cnt: String,
    #[prost(string, tag = "6")]
    pub ct_exy: String,
    #[prost(string, tag = "7")]
    pub ct_ez: String,
    #[prost(string, tag = "8")]
    pub exy: String,
    #[prost(string, tag = "9")]
    pub ez: String,
}
