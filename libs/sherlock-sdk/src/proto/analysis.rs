//! `SherlockAnalysisService` messages.

pub mod paths {
    pub const RUN_ANALYSIS: &str = "/SherlockAnalysisService/runAnalysis";
    pub const GET_RANDOM_VIBE_INPUT_FIELDS: &str =
        "/SherlockAnalysisService/getRandomVibeInputFields";
    pub const UPDATE_RANDOM_VIBE_PROPS: &str = "/SherlockAnalysisService/updateRandomVibeProps";
    pub const UPDATE_NATURAL_FREQUENCY_PROPS: &str =
        "/SherlockAnalysisService/updateNaturalFrequencyProps";
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Event {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Phase {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub events: Vec<Event>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Analysis {
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    #[prost(message, repeated, tag = "2")]
    pub phases: Vec<Phase>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RunAnalysisRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(message, repeated, tag = "3")]
    pub analyses: Vec<Analysis>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRandomVibeInputFieldsRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRandomVibeInputFieldsResponse {
    #[prost(int32, tag = "1")]
    pub value: i32,
    #[prost(string, tag = "2")]
    pub message: String,
    /// Engine-side (camelCase) property names.
    #[prost(string, repeated, tag = "3")]
    pub field_name: Vec<String>,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateRandomVibePropsRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(string, tag = "3")]
    pub random_vibe_damping: String,
    #[prost(double, optional, tag = "4")]
    pub natural_freq_min: Option<f64>,
    #[prost(string, tag = "5")]
    pub natural_freq_min_units: String,
    #[prost(double, optional, tag = "6")]
    pub natural_freq_max: Option<f64>,
    #[prost(string, tag = "7")]
    pub natural_freq_max_units: String,
    #[prost(double, optional, tag = "8")]
    pub analysis_temp: Option<f64>,
    #[prost(string, tag = "9")]
    pub analysis_temp_units: String,
    #[prost(bool, tag = "10")]
    pub part_validation_enabled: bool,
    #[prost(bool, tag = "11")]
    pub force_model_rebuild: bool,
    #[prost(bool, tag = "12")]
    pub reuse_modal_analysis: bool,
    #[prost(bool, tag = "13")]
    pub perform_nf_freq_range_check: bool,
    #[prost(bool, tag = "14")]
    pub require_material_assignment_enabled: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateNaturalFrequencyPropsRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub cca_name: String,
    #[prost(int32, optional, tag = "3")]
    pub natural_freq_count: Option<i32>,
    #[prost(double, optional, tag = "4")]
    pub natural_freq_min: Option<f64>,
    #[prost(string, tag = "5")]
    pub natural_freq_min_units: String,
    #[prost(double, optional, tag = "6")]
    pub natural_freq_max: Option<f64>,
    #[prost(string, tag = "7")]
    pub natural_freq_max_units: String,
    #[prost(bool, tag = "8")]
    pub part_validation_enabled: bool,
    #[prost(bool, tag = "9")]
    pub require_material_assignment_enabled: bool,
    #[prost(double, optional, tag = "10")]
    pub analysis_temp: Option<f64>,
    #[prost(string, tag = "11")]
    pub analysis_temp_units: String,
}
