//! Analysis runs and analysis properties.

use std::fmt;
use std::str::FromStr;

use heck::ToSnakeCase;
use sherlock_transport_grpc::RpcChannel;

use crate::cache::EnumCache;
use crate::contract::interpret;
use crate::errors::{
    Failure, GetRandomVibeInputFieldsError, RunAnalysisError, UpdateNaturalFrequencyPropsError,
    UpdateRandomVibePropsError,
};
use crate::proto::StatusResponse;
use crate::proto::analysis::{
    self as wire, GetRandomVibeInputFieldsRequest, GetRandomVibeInputFieldsResponse,
    RunAnalysisRequest, UpdateNaturalFrequencyPropsRequest, UpdateRandomVibePropsRequest, paths,
};
use crate::proto::lifecycle::paths as lifecycle_paths;
use crate::stub::ServiceStub;
use crate::validate::{ensure, non_empty};
use crate::version::{EngineVersion, VersionGate};

top_reply!(GetRandomVibeInputFieldsResponse);

macro_rules! analysis_types {
    ($($variant:ident => $name:literal,)+) => {
        /// Analyses the engine can run, in wire order.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum AnalysisType {
            #[default]
            $($variant,)+
        }

        impl AnalysisType {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

analysis_types! {
    Unknown => "UNKNOWN",
    NaturalFreq => "NATURALFREQ",
    HarmonicVibe => "HARMONICVIBE",
    IctAnalysis => "ICTANALYSIS",
    MechanicalShock => "MECHANICALSHOCK",
    RandomVibe => "RANDOMVIBE",
    ComponentFailureMode => "COMPONENTFAILUREMODE",
    DfmeaModule => "DFMEAMODULE",
    PthFatigue => "PTHFATIGUE",
    PartValidation => "PARTVALIDATION",
    SemiconductorWearout => "SEMICONDUCTORWEAROUT",
    SolderJointFatigue => "SOLDERJOINTFATIGUE",
    ThermalDerating => "THERMALDERATING",
    ThermalMech => "THERMALMECH",
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid analysis type '{s}'"))
    }
}

/// Life phase to analyse, restricted to the listed events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseSelection {
    pub name: String,
    pub events: Vec<String>,
}

/// One analysis of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisRun {
    pub analysis_type: AnalysisType,
    pub phases: Vec<PhaseSelection>,
}

impl AnalysisRun {
    fn check(&self) -> Result<(), String> {
        for (j, phase) in self.phases.iter().enumerate() {
            if phase.name.is_empty() {
                return Err(format!("Invalid phase {j}: Phase name is invalid."));
            }
            if phase.events.iter().any(String::is_empty) {
                return Err(format!("Invalid phase {j}: Event name is invalid."));
            }
        }
        Ok(())
    }

    fn to_wire(&self) -> wire::Analysis {
        wire::Analysis {
            r#type: self.analysis_type as i32,
            phases: self
                .phases
                .iter()
                .map(|phase| wire::Phase {
                    name: phase.name.clone(),
                    events: phase
                        .events
                        .iter()
                        .map(|name| wire::Event { name: name.clone() })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Random vibration analysis properties. Unset values are left unchanged.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RandomVibeProps {
    pub project: String,
    pub cca_name: String,
    /// Comma separated damping ratios, e.g. `0.01, 0.05`.
    pub random_vibe_damping: Option<String>,
    pub natural_freq_min: Option<f64>,
    pub natural_freq_min_units: String,
    pub natural_freq_max: Option<f64>,
    pub natural_freq_max_units: String,
    pub analysis_temp: Option<f64>,
    pub analysis_temp_units: String,
    pub part_validation_enabled: bool,
    pub force_model_rebuild: bool,
    pub reuse_modal_analysis: bool,
    pub perform_nf_freq_range_check: bool,
    pub require_material_assignment_enabled: bool,
}

/// Natural frequency analysis properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NaturalFrequencyProps {
    pub project: String,
    pub cca_name: String,
    pub natural_freq_count: Option<i32>,
    pub natural_freq_min: Option<f64>,
    pub natural_freq_min_units: String,
    pub natural_freq_max: Option<f64>,
    pub natural_freq_max_units: String,
    pub part_validation_enabled: bool,
    pub require_material_assignment_enabled: bool,
    pub analysis_temp: Option<f64>,
    pub analysis_temp_units: String,
}

fn check_damping(damping: Option<&str>) -> Result<(), Failure> {
    let valid = damping.is_none_or(|values| {
        values
            .split(',')
            .all(|v| v.trim().parse::<f64>().is_ok_and(f64::is_finite))
    });
    ensure(valid, "Random vibe damping value is invalid.")
}

fn check_frequency_range(min: Option<f64>, max: Option<f64>) -> Result<(), Failure> {
    let in_range = |v: Option<f64>| v.is_none_or(|v| v.is_finite() && v >= 0.0);
    let ordered = match (min, max) {
        (Some(min), Some(max)) => min <= max,
        _ => true,
    };
    ensure(
        in_range(min) && in_range(max) && ordered,
        "Natural frequencies are invalid.",
    )
}

/// `SherlockAnalysisService` client.
#[derive(Debug)]
pub struct Analysis<C> {
    stub: ServiceStub<C>,
    freq_units: EnumCache,
    temp_units: EnumCache,
}

impl<C: RpcChannel> Analysis<C> {
    #[must_use]
    pub fn new(channel: C, version: EngineVersion) -> Self {
        Self {
            stub: ServiceStub::new(channel, version),
            freq_units: EnumCache::new(),
            temp_units: EnumCache::new(),
        }
    }

    async fn check_freq_units(&self, units: &str) -> Result<(), Failure> {
        if units.is_empty() {
            return Ok(());
        }
        ensure(
            self.stub
                .allowed(&self.freq_units, lifecycle_paths::LIST_FREQ_UNITS, units)
                .await,
            format!("Natural frequency units {units} are invalid."),
        )
    }

    async fn check_temp_units(&self, units: &str) -> Result<(), Failure> {
        if units.is_empty() {
            return Ok(());
        }
        ensure(
            self.stub
                .allowed(&self.temp_units, lifecycle_paths::LIST_TEMP_UNITS, units)
                .await,
            format!("Analysis temperature units {units} are invalid."),
        )
    }

    /// Frequency units, then the range they bound, then temperature units.
    async fn check_ranges(
        &self,
        (min, min_units): (Option<f64>, &str),
        (max, max_units): (Option<f64>, &str),
        temp_units: &str,
    ) -> Result<(), Failure> {
        self.check_freq_units(min_units).await?;
        self.check_freq_units(max_units).await?;
        check_frequency_range(min, max)?;
        self.check_temp_units(temp_units).await
    }

    /// Run one or more analyses on a CCA.
    ///
    /// # Errors
    /// Returns [`RunAnalysisError`] naming the first invalid analysis, an
    /// engine rejection, or a transport failure.
    pub async fn run_analysis(
        &self,
        project: &str,
        cca_name: &str,
        analyses: &[AnalysisRun],
    ) -> Result<Option<i32>, RunAnalysisError> {
        self.stub.require(VersionGate::SUPPORTED, "run_analysis")?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;
        ensure(!analyses.is_empty(), "One or more analyses are missing.")?;
        for (i, analysis) in analyses.iter().enumerate() {
            analysis
                .check()
                .map_err(|m| Failure::Invalid(format!("Invalid analysis {i}: {m}")))?;
        }

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = RunAnalysisRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
            analyses: analyses.iter().map(AnalysisRun::to_wire).collect(),
        };
        let response: StatusResponse = self.stub.call(paths::RUN_ANALYSIS, request).await?;
        Ok(Some(interpret(&response)?))
    }

    /// Property names [`Analysis::update_random_vibe_props`] honours under
    /// the current engine configuration, in `snake_case`.
    ///
    /// # Errors
    /// Returns [`GetRandomVibeInputFieldsError`] on an engine rejection or a
    /// transport failure.
    pub async fn get_random_vibe_input_fields(
        &self,
    ) -> Result<Option<Vec<String>>, GetRandomVibeInputFieldsError> {
        self.stub
            .require(VersionGate::SUPPORTED, "get_random_vibe_input_fields")?;
        if !self.stub.connected().await {
            return Ok(None);
        }

        let response: GetRandomVibeInputFieldsResponse = self
            .stub
            .call(
                paths::GET_RANDOM_VIBE_INPUT_FIELDS,
                GetRandomVibeInputFieldsRequest {},
            )
            .await?;
        interpret(&response)?;
        Ok(Some(
            response
                .field_name
                .iter()
                .map(|name| name.to_snake_case())
                .collect(),
        ))
    }

    /// # Errors
    /// Returns [`UpdateRandomVibePropsError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn update_random_vibe_props(
        &self,
        props: RandomVibeProps,
    ) -> Result<Option<i32>, UpdateRandomVibePropsError> {
        self.stub
            .require(VersionGate::SUPPORTED, "update_random_vibe_props")?;
        non_empty(&props.project, "Project name is invalid.")?;
        non_empty(&props.cca_name, "CCA name is invalid.")?;
        check_damping(props.random_vibe_damping.as_deref())?;
        self.check_ranges(
            (props.natural_freq_min, &props.natural_freq_min_units),
            (props.natural_freq_max, &props.natural_freq_max_units),
            &props.analysis_temp_units,
        )
        .await?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = UpdateRandomVibePropsRequest {
            project: props.project,
            cca_name: props.cca_name,
            random_vibe_damping: props.random_vibe_damping.unwrap_or_default(),
            natural_freq_min: props.natural_freq_min,
            natural_freq_min_units: props.natural_freq_min_units,
            natural_freq_max: props.natural_freq_max,
            natural_freq_max_units: props.natural_freq_max_units,
            analysis_temp: props.analysis_temp,
            analysis_temp_units: props.analysis_temp_units,
            part_validation_enabled: props.part_validation_enabled,
            force_model_rebuild: props.force_model_rebuild,
            reuse_modal_analysis: props.reuse_modal_analysis,
            perform_nf_freq_range_check: props.perform_nf_freq_range_check,
            require_material_assignment_enabled: props.require_material_assignment_enabled,
        };
        let response: StatusResponse = self
            .stub
            .call(paths::UPDATE_RANDOM_VIBE_PROPS, request)
            .await?;
        Ok(Some(interpret(&response)?))
    }

    /// # Errors
    /// Returns [`UpdateNaturalFrequencyPropsError`] on invalid arguments, an
    /// engine rejection, or a transport failure.
    pub async fn update_natural_frequency_props(
        &self,
        props: NaturalFrequencyProps,
    ) -> Result<Option<i32>, UpdateNaturalFrequencyPropsError> {
        self.stub
            .require(VersionGate::SUPPORTED, "update_natural_frequency_props")?;
        non_empty(&props.project, "Project name is invalid.")?;
        non_empty(&props.cca_name, "CCA name is invalid.")?;
        self.check_ranges(
            (props.natural_freq_min, &props.natural_freq_min_units),
            (props.natural_freq_max, &props.natural_freq_max_units),
            &props.analysis_temp_units,
        )
        .await?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = UpdateNaturalFrequencyPropsRequest {
            project: props.project,
            cca_name: props.cca_name,
            natural_freq_count: props.natural_freq_count,
            natural_freq_min: props.natural_freq_min,
            natural_freq_min_units: props.natural_freq_min_units,
            natural_freq_max: props.natural_freq_max,
            natural_freq_max_units: props.natural_freq_max_units,
            part_validation_enabled: props.part_validation_enabled,
            require_material_assignment_enabled: props.require_material_assignment_enabled,
            analysis_temp: props.analysis_temp,
            analysis_temp_units: props.analysis_temp_units,
        };
        let response: StatusResponse = self
            .stub
            .call(paths::UPDATE_NATURAL_FREQUENCY_PROPS, request)
            .await?;
        Ok(Some(interpret(&response)?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn analysis_types_follow_wire_order() {
        assert_eq!(AnalysisType::ALL.len(), 14);
        assert_eq!(AnalysisType::NaturalFreq as i32, 1);
        assert_eq!(AnalysisType::ThermalMech as i32, 13);
        assert_eq!(
            "solderjointfatigue".parse::<AnalysisType>().unwrap(),
            AnalysisType::SolderJointFatigue
        );
        assert!("FEA".parse::<AnalysisType>().is_err());
    }

    #[test]
    fn phase_and_event_names_are_checked() {
        let run = AnalysisRun {
            analysis_type: AnalysisType::RandomVibe,
            phases: vec![
                PhaseSelection {
                    name: "Transport".to_owned(),
                    events: vec!["Truck".to_owned()],
                },
                PhaseSelection {
                    name: "Field".to_owned(),
                    events: vec![String::new()],
                },
            ],
        };
        assert_eq!(
            run.check().unwrap_err(),
            "Invalid phase 1: Event name is invalid."
        );
    }

    #[test]
    fn damping_must_be_numbers() {
        assert!(check_damping(None).is_ok());
        assert!(check_damping(Some("0.01, 0.05")).is_ok());
        assert_eq!(
            check_damping(Some("0.01,x")).unwrap_err(),
            Failure::Invalid("Random vibe damping value is invalid.".to_owned())
        );
    }

    #[test]
    fn frequency_range_is_ordered_and_non_negative() {
        assert!(check_frequency_range(Some(10.0), Some(1000.0)).is_ok());
        assert!(check_frequency_range(None, Some(5.0)).is_ok());
        assert!(check_frequency_range(Some(20.0), Some(10.0)).is_err());
        assert!(check_frequency_range(Some(-1.0), None).is_err());
    }

    #[test]
    fn engine_field_names_become_snake_case() {
        assert_eq!(
            "performNFFreqRangeCheck".to_snake_case(),
            "perform_nf_freq_range_check"
        );
        assert_eq!("naturalFreqMinUnits".to_snake_case(), "natural_freq_min_units");
    }
}
