//! `SherlockLifeCycleService` messages.

use super::{EmptyRequest, NameListResponse, ReturnCodeWithErrors};

pub mod paths {
    pub const LIST_DURATION_UNITS: &str = "/SherlockLifeCycleService/listDurationUnits";
    pub const LIST_LIFE_CYCLE_TYPES: &str = "/SherlockLifeCycleService/listLifeCycleTypes";
    pub const LIST_RANDOM_PROFILE_TYPES: &str = "/SherlockLifeCycleService/listRandomProfileTypes";
    pub const LIST_HARMONIC_PROFILE_TYPES: &str =
        "/SherlockLifeCycleService/listHarmonicProfileTypes";
    pub const LIST_FREQ_UNITS: &str = "/SherlockLifeCycleService/listFreqUnits";
    pub const LIST_AMPL_UNITS: &str = "/SherlockLifeCycleService/listAmplUnits";
    pub const LIST_LIFE_CYCLE_STATES: &str = "/SherlockLifeCycleService/listLifeCycleStates";
    pub const LIST_TEMP_UNITS: &str = "/SherlockLifeCycleService/listTempUnits";
    pub const LIST_SHOCK_LOAD_UNITS: &str = "/SherlockLifeCycleService/listShockLoadUnits";
    pub const LIST_SHOCK_PULSES: &str = "/SherlockLifeCycleService/listShockPulses";

    pub const CREATE_LIFE_PHASE: &str = "/SherlockLifeCycleService/createLifePhase";
    pub const ADD_RANDOM_VIBE_EVENT: &str = "/SherlockLifeCycleService/addRandomVibeEvent";
    pub const ADD_RANDOM_VIBE_PROFILES: &str = "/SherlockLifeCycleService/addRandomVibeProfiles";
    pub const ADD_THERMAL_EVENT: &str = "/SherlockLifeCycleService/addThermalEvent";
    pub const ADD_THERMAL_PROFILES: &str = "/SherlockLifeCycleService/addThermalProfiles";
    pub const ADD_HARMONIC_EVENT: &str = "/SherlockLifeCycleService/addHarmonicEvent";
    pub const ADD_HARMONIC_VIBE_PROFILES: &str =
        "/SherlockLifeCycleService/addHarmonicVibeProfiles";
    pub const ADD_SHOCK_EVENT: &str = "/SherlockLifeCycleService/addShockEvent";
    pub const ADD_SHOCK_PROFILES: &str = "/SherlockLifeCycleService/addShockProfiles";

    pub const LOAD_RANDOM_VIBE_PROFILE: &str = "/SherlockLifeCycleService/loadRandomVibeProfile";
    pub const LOAD_HARMONIC_PROFILE: &str = "/SherlockLifeCycleService/loadHarmonicProfile";
    pub const LOAD_THERMAL_PROFILE: &str = "/SherlockLifeCycleService/loadThermalProfile";
    pub const LOAD_SHOCK_PROFILE_DATASET: &str =
        "/SherlockLifeCycleService/loadShockProfileDataset";
    pub const LOAD_SHOCK_PROFILE_PULSES: &str = "/SherlockLifeCycleService/loadShockProfilePulses";
}

pub type ListRequest = EmptyRequest;
pub type ListResponse = NameListResponse;
pub type LifeCycleResponse = ReturnCodeWithErrors;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateLifePhaseRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub phase_name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(double, tag = "4")]
    pub duration: f64,
    #[prost(string, tag = "5")]
    pub duration_units: String,
    #[prost(double, tag = "6")]
    pub num_of_cycles: f64,
    #[prost(string, tag = "7")]
    pub cycle_type: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddRandomVibeEventRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub phase_name: String,
    #[prost(string, tag = "3")]
    pub event_name: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(double, tag = "5")]
    pub duration: f64,
    #[prost(string, tag = "6")]
    pub duration_units: String,
    #[prost(double, tag = "7")]
    pub num_of_cycles: f64,
    #[prost(string, tag = "8")]
    pub cycle_type: String,
    #[prost(string, tag = "9")]
    pub orientation: String,
    #[prost(string, tag = "10")]
    pub profile_type: String,
    #[prost(string, tag = "11")]
    pub load_direction: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddThermalEventRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub phase_name: String,
    #[prost(string, tag = "3")]
    pub event_name: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(double, tag = "5")]
    pub num_of_cycles: f64,
    #[prost(string, tag = "6")]
    pub cycle_type: String,
    #[prost(string, tag = "7")]
    pub cycle_state: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddHarmonicEventRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub phase_name: String,
    #[prost(string, tag = "3")]
    pub event_name: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(double, tag = "5")]
    pub duration: f64,
    #[prost(string, tag = "6")]
    pub duration_units: String,
    #[prost(double, tag = "7")]
    pub num_of_cycles: f64,
    #[prost(string, tag = "8")]
    pub cycle_type: String,
    #[prost(double, tag = "9")]
    pub sweep_rate: f64,
    #[prost(string, tag = "10")]
    pub orientation: String,
    #[prost(string, tag = "11")]
    pub profile_type: String,
    #[prost(string, tag = "12")]
    pub load_direction: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddShockEventRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub phase_name: String,
    #[prost(string, tag = "3")]
    pub event_name: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(double, tag = "5")]
    pub duration: f64,
    #[prost(string, tag = "6")]
    pub duration_units: String,
    #[prost(double, tag = "7")]
    pub num_of_cycles: f64,
    #[prost(string, tag = "8")]
    pub cycle_type: String,
    #[prost(string, tag = "9")]
    pub orientation: String,
    #[prost(string, tag = "10")]
    pub load_direction: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RandomVibeProfileEntry {
    #[prost(double, tag = "1")]
    pub freq: f64,
    #[prost(double, tag = "2")]
    pub ampl: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RandomVibeProfile {
    #[prost(string, tag = "1")]
    pub phase_name: String,
    #[prost(string, tag = "2")]
    pub event_name: String,
    #[prost(string, tag = "3")]
    pub profile_name: String,
    #[prost(string, tag = "4")]
    pub freq_units: String,
    #[prost(string, tag = "5")]
    pub ampl_units: String,
    #[prost(message, repeated, tag = "6")]
    pub random_vibe_profile_entries: Vec<RandomVibeProfileEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddRandomVibeProfilesRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(message, repeated, tag = "2")]
    pub random_vibe_profiles: Vec<RandomVibeProfile>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ThermalProfileEntry {
    #[prost(string, tag = "1")]
    pub step: String,
    /// `RAMP` or `HOLD`.
    #[prost(string, tag = "2")]
    pub r#type: String,
    #[prost(double, tag = "3")]
    pub time: f64,
    #[prost(double, tag = "4")]
    pub temp: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ThermalProfile {
    #[prost(string, tag = "1")]
    pub phase_name: String,
    #[prost(string, tag = "2")]
    pub event_name: String,
    #[prost(string, tag = "3")]
    pub profile_name: String,
    #[prost(string, tag = "4")]
    pub time_units: String,
    #[prost(string, tag = "5")]
    pub temp_units: String,
    #[prost(message, repeated, tag = "6")]
    pub thermal_profile_entries: Vec<ThermalProfileEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddThermalProfilesRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(message, repeated, tag = "2")]
    pub thermal_profiles: Vec<ThermalProfile>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HarmonicProfileEntry {
    #[prost(double, tag = "1")]
    pub freq: f64,
    #[prost(double, tag = "2")]
    pub load: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HarmonicVibeProfile {
    #[prost(string, tag = "1")]
    pub phase_name: String,
    #[prost(string, tag = "2")]
    pub event_name: String,
    #[prost(string, tag = "3")]
    pub profile_name: String,
    #[prost(string, tag = "4")]
    pub freq_units: String,
    #[prost(string, tag = "5")]
    pub load_units: String,
    #[prost(message, repeated, tag = "6")]
    pub harmonic_profile_entries: Vec<HarmonicProfileEntry>,
    /// Only meaningful for triaxial profiles.
    #[prost(string, optional, tag = "7")]
    pub triaxial_axis: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddHarmonicVibeProfilesRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(message, repeated, tag = "2")]
    pub harmonic_vibe_profiles: Vec<HarmonicVibeProfile>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ShockProfileEntry {
    #[prost(string, tag = "1")]
    pub shape: String,
    #[prost(double, tag = "2")]
    pub load: f64,
    #[prost(double, tag = "3")]
    pub freq: f64,
    #[prost(double, tag = "4")]
    pub decay: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ShockProfile {
    #[prost(string, tag = "1")]
    pub phase_name: String,
    #[prost(string, tag = "2")]
    pub event_name: String,
    #[prost(string, tag = "3")]
    pub profile_name: String,
    #[prost(double, tag = "4")]
    pub duration: f64,
    #[prost(string, tag = "5")]
    pub duration_units: String,
    #[prost(double, tag = "6")]
    pub sample_rate: f64,
    #[prost(string, tag = "7")]
    pub sample_rate_units: String,
    #[prost(string, tag = "8")]
    pub load_units: String,
    #[prost(string, tag = "9")]
    pub freq_units: String,
    #[prost(message, repeated, tag = "10")]
    pub shock_profile_entries: Vec<ShockProfileEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddShockProfilesRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(message, repeated, tag = "2")]
    pub shock_profiles: Vec<ShockProfile>,
}

/// Request shared by every `load*Profile*` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoadProfileRequest {
    #[prost(string, tag = "1")]
    pub project: String,
    #[prost(string, tag = "2")]
    pub phase_name: String,
    #[prost(string, tag = "3")]
    pub event_name: String,
    #[prost(string, tag = "4")]
    pub file_path: String,
}
