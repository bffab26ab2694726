//! Life cycle definition: phases, events and their load profiles.
//!
//! Units, cycle types, cycle states, profile types and shock pulse shapes are
//! checked against lists fetched from the engine on first use. When a list
//! cannot be fetched the corresponding check is skipped.

use std::fmt;
use std::str::FromStr;

use sherlock_transport_grpc::RpcChannel;

use crate::cache::EnumCache;
use crate::contract::interpret;
use crate::errors::{
    AddHarmonicEventError, AddHarmonicVibeProfilesError, AddRandomVibeEventError,
    AddRandomVibeProfilesError, AddShockEventError, AddShockProfilesError, AddThermalEventError,
    AddThermalProfilesError, CreateLifePhaseError, Failure, LoadHarmonicProfileError,
    LoadRandomVibeProfileError, LoadShockProfileDatasetError, LoadShockProfilePulsesError,
    LoadThermalProfileError,
};
use crate::proto::StatusResponse;
use crate::proto::lifecycle::{self as wire, LifeCycleResponse, paths};
use crate::stub::ServiceStub;
use crate::validate::{
    check_load_direction, check_orientation, ensure, listed, non_empty, positive,
};
use crate::version::{EngineVersion, VersionGate};

/// Life phase to create in a project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifePhase {
    pub project: String,
    pub phase_name: String,
    pub duration: f64,
    pub duration_units: String,
    pub num_of_cycles: f64,
    pub cycle_type: String,
    pub description: Option<String>,
}

/// Random vibration event in an existing life phase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RandomVibeEvent {
    pub project: String,
    pub phase_name: String,
    pub event_name: String,
    pub duration: f64,
    pub duration_units: String,
    pub num_of_cycles: f64,
    pub cycle_type: String,
    /// `azimuth,elevation` in degrees.
    pub orientation: String,
    pub profile_type: String,
    /// `x,y,z`.
    pub load_direction: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThermalEvent {
    pub project: String,
    pub phase_name: String,
    pub event_name: String,
    pub num_of_cycles: f64,
    pub cycle_type: String,
    pub cycle_state: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarmonicEvent {
    pub project: String,
    pub phase_name: String,
    pub event_name: String,
    pub duration: f64,
    pub duration_units: String,
    pub num_of_cycles: f64,
    pub cycle_type: String,
    pub sweep_rate: f64,
    pub orientation: String,
    pub profile_type: String,
    pub load_direction: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShockEvent {
    pub project: String,
    pub phase_name: String,
    pub event_name: String,
    pub duration: f64,
    pub duration_units: String,
    pub num_of_cycles: f64,
    pub cycle_type: String,
    pub orientation: String,
    pub load_direction: String,
    pub description: Option<String>,
}

/// Random vibration profile; entries are `(frequency, amplitude)` pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RandomVibeProfile {
    pub phase_name: String,
    pub event_name: String,
    pub profile_name: String,
    pub freq_units: String,
    pub ampl_units: String,
    pub entries: Vec<(f64, f64)>,
}

/// Kind of a thermal profile step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepType {
    Ramp,
    Hold,
}

impl StepType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ramp => "RAMP",
            Self::Hold => "HOLD",
        }
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RAMP" => Ok(Self::Ramp),
            "HOLD" => Ok(Self::Hold),
            _ => Err(format!("Invalid step type '{s}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThermalProfileEntry {
    pub step: String,
    pub step_type: StepType,
    pub time: f64,
    pub temperature: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThermalProfile {
    pub phase_name: String,
    pub event_name: String,
    pub profile_name: String,
    pub time_units: String,
    pub temp_units: String,
    pub entries: Vec<ThermalProfileEntry>,
}

/// Harmonic vibration profile; entries are `(frequency, load)` pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarmonicVibeProfile {
    pub phase_name: String,
    pub event_name: String,
    pub profile_name: String,
    pub freq_units: String,
    pub load_units: String,
    pub entries: Vec<(f64, f64)>,
    /// Axis for triaxial profiles; left unset otherwise.
    pub triaxial_axis: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShockProfileEntry {
    /// Pulse shape name, e.g. `HalfSine`.
    pub shape: String,
    pub load: f64,
    pub freq: f64,
    pub decay: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShockProfile {
    pub phase_name: String,
    pub event_name: String,
    pub profile_name: String,
    pub duration: f64,
    pub duration_units: String,
    pub sample_rate: f64,
    pub sample_rate_units: String,
    pub load_units: String,
    pub freq_units: String,
    pub entries: Vec<ShockProfileEntry>,
}

#[derive(Debug, Default)]
struct Caches {
    duration_units: EnumCache,
    cycle_types: EnumCache,
    random_profile_types: EnumCache,
    harmonic_profile_types: EnumCache,
    freq_units: EnumCache,
    ampl_units: EnumCache,
    cycle_states: EnumCache,
    temp_units: EnumCache,
    shock_load_units: EnumCache,
    shock_pulses: EnumCache,
}

/// Batch profile calls arrived with 2025 R1.
const PROFILE_BATCHES: VersionGate = VersionGate::since(251);

fn check_names(project: &str, phase_name: &str, event_name: Option<&str>) -> Result<(), Failure> {
    non_empty(project, "Project name is invalid.")?;
    non_empty(phase_name, "Phase name is invalid.")?;
    if let Some(event_name) = event_name {
        non_empty(event_name, "Event name is invalid.")?;
    }
    Ok(())
}

fn load_direction(value: &str) -> Result<(), Failure> {
    check_load_direction(value).map_err(|m| Failure::Invalid(m.to_owned()))
}

fn orientation(value: &str) -> Result<(), Failure> {
    check_orientation(value).map_err(|m| Failure::Invalid(m.to_owned()))
}

fn check_profile_names(
    phase_name: &str,
    event_name: &str,
    profile_name: &str,
    suffix: &str,
) -> Result<(), Failure> {
    non_empty(phase_name, &format!("Phase name is invalid {suffix}"))?;
    non_empty(event_name, &format!("Event name is invalid {suffix}"))?;
    non_empty(profile_name, &format!("Profile name is invalid {suffix}"))
}

fn check_units(names: Option<&[String]>, units: &str, what: &str, suffix: &str) -> Result<(), Failure> {
    ensure(
        listed(names, units),
        format!("{what} units {units} are invalid {suffix}"),
    )
}

fn check_pair_entries(
    entries: &[(f64, f64)],
    second: (&str, &str),
    suffix: &str,
) -> Result<(), Failure> {
    let (name, positive_message) = second;
    for (j, &(freq, value)) in entries.iter().enumerate() {
        ensure(
            freq.is_finite() && value.is_finite(),
            format!("Invalid entry {j}: Frequency or {name} is invalid {suffix}"),
        )?;
        ensure(
            freq > 0.0,
            format!("Invalid entry {j}: Frequencies must be greater than 0 {suffix}"),
        )?;
        ensure(
            value > 0.0,
            format!("Invalid entry {j}: {positive_message} must be greater than 0 {suffix}"),
        )?;
    }
    Ok(())
}

fn check_thermal_entries(entries: &[ThermalProfileEntry], suffix: &str) -> Result<(), Failure> {
    for (j, entry) in entries.iter().enumerate() {
        non_empty(
            &entry.step,
            &format!("Invalid entry {j}: Step name is invalid {suffix}"),
        )?;
        ensure(
            entry.time.is_finite(),
            format!("Invalid entry {j}: Time is invalid {suffix}"),
        )?;
        ensure(
            entry.time > 0.0,
            format!("Invalid entry {j}: Time must be greater than 0 {suffix}"),
        )?;
        ensure(
            entry.temperature.is_finite(),
            format!("Invalid entry {j}: Temperature is invalid {suffix}"),
        )?;
    }
    Ok(())
}

impl From<&RandomVibeProfile> for wire::RandomVibeProfile {
    fn from(profile: &RandomVibeProfile) -> Self {
        Self {
            phase_name: profile.phase_name.clone(),
            event_name: profile.event_name.clone(),
            profile_name: profile.profile_name.clone(),
            freq_units: profile.freq_units.clone(),
            ampl_units: profile.ampl_units.clone(),
            random_vibe_profile_entries: profile
                .entries
                .iter()
                .map(|&(freq, ampl)| wire::RandomVibeProfileEntry { freq, ampl })
                .collect(),
        }
    }
}

impl From<&ThermalProfile> for wire::ThermalProfile {
    fn from(profile: &ThermalProfile) -> Self {
        Self {
            phase_name: profile.phase_name.clone(),
            event_name: profile.event_name.clone(),
            profile_name: profile.profile_name.clone(),
            time_units: profile.time_units.clone(),
            temp_units: profile.temp_units.clone(),
            thermal_profile_entries: profile
                .entries
                .iter()
                .map(|entry| wire::ThermalProfileEntry {
                    step: entry.step.clone(),
                    r#type: entry.step_type.as_str().to_owned(),
                    time: entry.time,
                    temp: entry.temperature,
                })
                .collect(),
        }
    }
}

impl From<&HarmonicVibeProfile> for wire::HarmonicVibeProfile {
    fn from(profile: &HarmonicVibeProfile) -> Self {
        Self {
            phase_name: profile.phase_name.clone(),
            event_name: profile.event_name.clone(),
            profile_name: profile.profile_name.clone(),
            freq_units: profile.freq_units.clone(),
            load_units: profile.load_units.clone(),
            harmonic_profile_entries: profile
                .entries
                .iter()
                .map(|&(freq, load)| wire::HarmonicProfileEntry { freq, load })
                .collect(),
            triaxial_axis: profile.triaxial_axis.clone(),
        }
    }
}

impl From<&ShockProfile> for wire::ShockProfile {
    fn from(profile: &ShockProfile) -> Self {
        Self {
            phase_name: profile.phase_name.clone(),
            event_name: profile.event_name.clone(),
            profile_name: profile.profile_name.clone(),
            duration: profile.duration,
            duration_units: profile.duration_units.clone(),
            sample_rate: profile.sample_rate,
            sample_rate_units: profile.sample_rate_units.clone(),
            load_units: profile.load_units.clone(),
            freq_units: profile.freq_units.clone(),
            shock_profile_entries: profile
                .entries
                .iter()
                .map(|entry| wire::ShockProfileEntry {
                    shape: entry.shape.clone(),
                    load: entry.load,
                    freq: entry.freq,
                    decay: entry.decay,
                })
                .collect(),
        }
    }
}

/// `SherlockLifeCycleService` client.
///
/// Arguments are checked in declaration order. A field backed by an engine
/// list fetches that list when its turn comes, so a failing earlier field
/// leaves later lists unfetched.
#[derive(Debug)]
pub struct Lifecycle<C> {
    stub: ServiceStub<C>,
    caches: Caches,
}

impl<C: RpcChannel> Lifecycle<C> {
    #[must_use]
    pub fn new(channel: C, version: EngineVersion) -> Self {
        Self {
            stub: ServiceStub::new(channel, version),
            caches: Caches::default(),
        }
    }

    async fn check_listed(
        &self,
        cache: &EnumCache,
        path: &'static str,
        value: &str,
        message: &str,
    ) -> Result<(), Failure> {
        ensure(self.stub.allowed(cache, path, value).await, message)
    }

    async fn list<'a>(&'a self, cache: &'a EnumCache, path: &'static str) -> Option<&'a [String]> {
        cache.load(|| self.stub.fetch_names(path)).await
    }

    async fn check_duration_units(&self, duration_units: &str) -> Result<(), Failure> {
        self.check_listed(
            &self.caches.duration_units,
            paths::LIST_DURATION_UNITS,
            duration_units,
            "Duration unit is invalid.",
        )
        .await
    }

    async fn check_cycle_type(&self, cycle_type: &str) -> Result<(), Failure> {
        self.check_listed(
            &self.caches.cycle_types,
            paths::LIST_LIFE_CYCLE_TYPES,
            cycle_type,
            "Cycle type is invalid.",
        )
        .await
    }

    /// Duration unit, duration, cycle type, cycle count.
    async fn check_timing(
        &self,
        duration: f64,
        duration_units: &str,
        num_of_cycles: f64,
        cycle_type: &str,
    ) -> Result<(), Failure> {
        self.check_duration_units(duration_units).await?;
        positive(duration, "Duration must be greater than 0.")?;
        self.check_cycle_type(cycle_type).await?;
        positive(num_of_cycles, "Number of cycles must be greater than 0.")
    }

    /// Create a life phase.
    ///
    /// # Errors
    /// Returns [`CreateLifePhaseError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn create_life_phase(
        &self,
        phase: LifePhase,
    ) -> Result<Option<i32>, CreateLifePhaseError> {
        self.stub
            .require(VersionGate::SUPPORTED, "create_life_phase")?;
        check_names(&phase.project, &phase.phase_name, None)?;
        self.check_timing(
            phase.duration,
            &phase.duration_units,
            phase.num_of_cycles,
            &phase.cycle_type,
        )
        .await?;

        if !self.stub.connected().await {
            return Ok(None);
        }
        let request = wire::CreateLifePhaseRequest {
            project: phase.project,
            phase_name: phase.phase_name,
            description: phase.description.unwrap_or_default(),
            duration: phase.duration,
            duration_units: phase.duration_units,
            num_of_cycles: phase.num_of_cycles,
            cycle_type: phase.cycle_type,
        };
        let response: LifeCycleResponse =
            self.stub.call(paths::CREATE_LIFE_PHASE, request).await?;
        Ok(Some(interpret(&response)?))
    }

    /// Add a random vibration event to a life phase.
    ///
    /// # Errors
    /// Returns [`AddRandomVibeEventError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn add_random_vibe_event(
        &self,
        event: RandomVibeEvent,
    ) -> Result<Option<i32>, AddRandomVibeEventError> {
        self.stub
            .require(VersionGate::SUPPORTED, "add_random_vibe_event")?;
        check_names(&event.project, &event.phase_name, Some(&event.event_name))?;
        self.check_timing(
            event.duration,
            &event.duration_units,
            event.num_of_cycles,
            &event.cycle_type,
        )
        .await?;
        load_direction(&event.load_direction)?;
        self.check_listed(
            &self.caches.random_profile_types,
            paths::LIST_RANDOM_PROFILE_TYPES,
            &event.profile_type,
            "Profile type is invalid.",
        )
        .await?;
        orientation(&event.orientation)?;

        if !self.stub.connected().await {
            return Ok(None);
        }
        let request = wire::AddRandomVibeEventRequest {
            project: event.project,
            phase_name: event.phase_name,
            event_name: event.event_name,
            description: event.description.unwrap_or_default(),
            duration: event.duration,
            duration_units: event.duration_units,
            num_of_cycles: event.num_of_cycles,
            cycle_type: event.cycle_type,
            orientation: event.orientation,
            profile_type: event.profile_type,
            load_direction: event.load_direction,
        };
        let response: LifeCycleResponse =
            self.stub.call(paths::ADD_RANDOM_VIBE_EVENT, request).await?;
        Ok(Some(interpret(&response)?))
    }

    async fn check_random_vibe_profile(
        &self,
        i: usize,
        profile: &RandomVibeProfile,
    ) -> Result<(), Failure> {
        let suffix = format!("for random vibe profile {i}.");
        check_profile_names(
            &profile.phase_name,
            &profile.event_name,
            &profile.profile_name,
            &suffix,
        )?;
        let freq_units = self
            .list(&self.caches.freq_units, paths::LIST_FREQ_UNITS)
            .await;
        check_units(freq_units, &profile.freq_units, "Frequency", &suffix)?;
        let ampl_units = self
            .list(&self.caches.ampl_units, paths::LIST_AMPL_UNITS)
            .await;
        check_units(ampl_units, &profile.ampl_units, "Amplitude", &suffix)?;
        check_pair_entries(&profile.entries, ("amplitude", "Amplitudes"), &suffix)
    }

    /// Add random vibration profiles, in order, to existing events.
    ///
    /// # Errors
    /// Returns [`AddRandomVibeProfilesError`] naming the first invalid
    /// profile or entry, an engine rejection, or a transport failure.
    pub async fn add_random_vibe_profiles(
        &self,
        project: &str,
        profiles: &[RandomVibeProfile],
    ) -> Result<Option<i32>, AddRandomVibeProfilesError> {
        self.stub
            .require(PROFILE_BATCHES, "add_random_vibe_profiles")?;
        non_empty(project, "Project name is invalid.")?;
        ensure(
            !profiles.is_empty(),
            "One or more random vibe profiles are required.",
        )?;
        for (i, profile) in profiles.iter().enumerate() {
            self.check_random_vibe_profile(i, profile).await?;
        }

        if !self.stub.connected().await {
            return Ok(None);
        }
        let request = wire::AddRandomVibeProfilesRequest {
            project: project.to_owned(),
            random_vibe_profiles: profiles.iter().map(Into::into).collect(),
        };
        let response: LifeCycleResponse = self
            .stub
            .call(paths::ADD_RANDOM_VIBE_PROFILES, request)
            .await?;
        Ok(Some(interpret(&response)?))
    }

    /// Add a thermal event to a life phase.
    ///
    /// # Errors
    /// Returns [`AddThermalEventError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn add_thermal_event(
        &self,
        event: ThermalEvent,
    ) -> Result<Option<i32>, AddThermalEventError> {
        self.stub
            .require(VersionGate::SUPPORTED, "add_thermal_event")?;
        check_names(&event.project, &event.phase_name, Some(&event.event_name))?;
        self.check_cycle_type(&event.cycle_type).await?;
        positive(event.num_of_cycles, "Number of cycles must be greater than 0.")?;
        self.check_listed(
            &self.caches.cycle_states,
            paths::LIST_LIFE_CYCLE_STATES,
            &event.cycle_state,
            "Cycle state is invalid.",
        )
        .await?;

        if !self.stub.connected().await {
            return Ok(None);
        }
        let request = wire::AddThermalEventRequest {
            project: event.project,
            phase_name: event.phase_name,
            event_name: event.event_name,
            description: event.description.unwrap_or_default(),
            num_of_cycles: event.num_of_cycles,
            cycle_type: event.cycle_type,
            cycle_state: event.cycle_state,
        };
        let response: LifeCycleResponse =
            self.stub.call(paths::ADD_THERMAL_EVENT, request).await?;
        Ok(Some(interpret(&response)?))
    }

    async fn check_thermal_profile(&self, i: usize, profile: &ThermalProfile) -> Result<(), Failure> {
        let suffix = format!("for thermal profile {i}.");
        check_profile_names(
            &profile.phase_name,
            &profile.event_name,
            &profile.profile_name,
            &suffix,
        )?;
        let time_units = self
            .list(&self.caches.duration_units, paths::LIST_DURATION_UNITS)
            .await;
        check_units(time_units, &profile.time_units, "Time", &suffix)?;
        let temp_units = self
            .list(&self.caches.temp_units, paths::LIST_TEMP_UNITS)
            .await;
        check_units(temp_units, &profile.temp_units, "Temperature", &suffix)?;
        check_thermal_entries(&profile.entries, &suffix)
    }

    /// Add thermal profiles, in order, to existing events.
    ///
    /// # Errors
    /// Returns [`AddThermalProfilesError`] naming the first invalid profile
    /// or entry, an engine rejection, or a transport failure.
    pub async fn add_thermal_profiles(
        &self,
        project: &str,
        profiles: &[ThermalProfile],
    ) -> Result<Option<i32>, AddThermalProfilesError> {
        self.stub.require(PROFILE_BATCHES, "add_thermal_profiles")?;
        non_empty(project, "Project name is invalid.")?;
        ensure(
            !profiles.is_empty(),
            "One or more thermal profiles are required.",
        )?;
        for (i, profile) in profiles.iter().enumerate() {
            self.check_thermal_profile(i, profile).await?;
        }

        if !self.stub.connected().await {
            return Ok(None);
        }
        let request = wire::AddThermalProfilesRequest {
            project: project.to_owned(),
            thermal_profiles: profiles.iter().map(Into::into).collect(),
        };
        let response: LifeCycleResponse = self
            .stub
            .call(paths::ADD_THERMAL_PROFILES, request)
            .await?;
        Ok(Some(interpret(&response)?))
    }

    /// Add a harmonic vibration event to a life phase.
    ///
    /// # Errors
    /// Returns [`AddHarmonicEventError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn add_harmonic_event(
        &self,
        event: HarmonicEvent,
    ) -> Result<Option<i32>, AddHarmonicEventError> {
        self.stub
            .require(VersionGate::SUPPORTED, "add_harmonic_event")?;
        check_names(&event.project, &event.phase_name, Some(&event.event_name))?;
        self.check_timing(
            event.duration,
            &event.duration_units,
            event.num_of_cycles,
            &event.cycle_type,
        )
        .await?;
        positive(event.sweep_rate, "Sweep rate must be greater than 0.")?;
        load_direction(&event.load_direction)?;
        orientation(&event.orientation)?;
        self.check_listed(
            &self.caches.harmonic_profile_types,
            paths::LIST_HARMONIC_PROFILE_TYPES,
            &event.profile_type,
            "Profile type is invalid.",
        )
        .await?;

        if !self.stub.connected().await {
            return Ok(None);
        }
        let request = wire::AddHarmonicEventRequest {
            project: event.project,
            phase_name: event.phase_name,
            event_name: event.event_name,
            description: event.description.unwrap_or_default(),
            duration: event.duration,
            duration_units: event.duration_units,
            num_of_cycles: event.num_of_cycles,
            cycle_type: event.cycle_type,
            sweep_rate: event.sweep_rate,
            orientation: event.orientation,
            profile_type: event.profile_type,
            load_direction: event.load_direction,
        };
        let response: LifeCycleResponse =
            self.stub.call(paths::ADD_HARMONIC_EVENT, request).await?;
        Ok(Some(interpret(&response)?))
    }

    async fn check_harmonic_profile(
        &self,
        i: usize,
        profile: &HarmonicVibeProfile,
    ) -> Result<(), Failure> {
        let suffix = format!("for harmonic vibe profile {i}.");
        check_profile_names(
            &profile.phase_name,
            &profile.event_name,
            &profile.profile_name,
            &suffix,
        )?;
        let freq_units = self
            .list(&self.caches.freq_units, paths::LIST_FREQ_UNITS)
            .await;
        check_units(freq_units, &profile.freq_units, "Frequency", &suffix)?;
        let load_units = self
            .list(&self.caches.shock_load_units, paths::LIST_SHOCK_LOAD_UNITS)
            .await;
        check_units(load_units, &profile.load_units, "Load", &suffix)?;
        check_pair_entries(&profile.entries, ("load", "Load"), &suffix)
    }

    /// Add harmonic vibration profiles, in order, to existing events.
    ///
    /// # Errors
    /// Returns [`AddHarmonicVibeProfilesError`] naming the first invalid
    /// profile or entry, an engine rejection, or a transport failure.
    pub async fn add_harmonic_vibe_profiles(
        &self,
        project: &str,
        profiles: &[HarmonicVibeProfile],
    ) -> Result<Option<i32>, AddHarmonicVibeProfilesError> {
        self.stub
            .require(PROFILE_BATCHES, "add_harmonic_vibe_profiles")?;
        non_empty(project, "Project name is invalid.")?;
        ensure(
            !profiles.is_empty(),
            "One or more harmonic vibe profiles are required.",
        )?;
        for (i, profile) in profiles.iter().enumerate() {
            self.check_harmonic_profile(i, profile).await?;
        }

        if !self.stub.connected().await {
            return Ok(None);
        }
        let request = wire::AddHarmonicVibeProfilesRequest {
            project: project.to_owned(),
            harmonic_vibe_profiles: profiles.iter().map(Into::into).collect(),
        };
        let response: LifeCycleResponse = self
            .stub
            .call(paths::ADD_HARMONIC_VIBE_PROFILES, request)
            .await?;
        Ok(Some(interpret(&response)?))
    }

    /// Add a mechanical shock event to a life phase.
    ///
    /// # Errors
    /// Returns [`AddShockEventError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn add_shock_event(
        &self,
        event: ShockEvent,
    ) -> Result<Option<i32>, AddShockEventError> {
        self.stub.require(VersionGate::SUPPORTED, "add_shock_event")?;
        check_names(&event.project, &event.phase_name, Some(&event.event_name))?;
        self.check_timing(
            event.duration,
            &event.duration_units,
            event.num_of_cycles,
            &event.cycle_type,
        )
        .await?;
        load_direction(&event.load_direction)?;
        orientation(&event.orientation)?;

        if !self.stub.connected().await {
            return Ok(None);
        }
        let request = wire::AddShockEventRequest {
            project: event.project,
            phase_name: event.phase_name,
            event_name: event.event_name,
            description: event.description.unwrap_or_default(),
            duration: event.duration,
            duration_units: event.duration_units,
            num_of_cycles: event.num_of_cycles,
            cycle_type: event.cycle_type,
            orientation: event.orientation,
            load_direction: event.load_direction,
        };
        let response: LifeCycleResponse =
            self.stub.call(paths::ADD_SHOCK_EVENT, request).await?;
        Ok(Some(interpret(&response)?))
    }

    async fn check_shock_profile(&self, i: usize, profile: &ShockProfile) -> Result<(), Failure> {
        let suffix = format!("for shock profile {i}.");
        check_profile_names(
            &profile.phase_name,
            &profile.event_name,
            &profile.profile_name,
            &suffix,
        )?;
        positive(
            profile.duration,
            &format!("Duration must be greater than 0 {suffix}"),
        )?;
        let duration_units = self
            .list(&self.caches.duration_units, paths::LIST_DURATION_UNITS)
            .await;
        check_units(duration_units, &profile.duration_units, "Duration", &suffix)?;
        positive(
            profile.sample_rate,
            &format!("Sample rate must be greater than 0 {suffix}"),
        )?;
        check_units(
            duration_units,
            &profile.sample_rate_units,
            "Sample rate",
            &suffix,
        )?;
        let load_units = self
            .list(&self.caches.shock_load_units, paths::LIST_SHOCK_LOAD_UNITS)
            .await;
        check_units(load_units, &profile.load_units, "Load", &suffix)?;
        let freq_units = self
            .list(&self.caches.freq_units, paths::LIST_FREQ_UNITS)
            .await;
        check_units(freq_units, &profile.freq_units, "Frequency", &suffix)?;
        self.check_shock_entries(&profile.entries, &suffix).await
    }

    async fn check_shock_entries(
        &self,
        entries: &[ShockProfileEntry],
        suffix: &str,
    ) -> Result<(), Failure> {
        for (j, entry) in entries.iter().enumerate() {
            let shape_message = format!("Invalid entry {j}: Shape name is invalid {suffix}");
            non_empty(&entry.shape, &shape_message)?;
            let shapes = self
                .list(&self.caches.shock_pulses, paths::LIST_SHOCK_PULSES)
                .await;
            ensure(listed(shapes, &entry.shape), shape_message)?;
            positive(
                entry.load,
                &format!("Invalid entry {j}: Load must be greater than 0 {suffix}"),
            )?;
            positive(
                entry.freq,
                &format!("Invalid entry {j}: Frequency must be greater than 0 {suffix}"),
            )?;
            ensure(
                entry.decay >= 0.0,
                format!("Invalid entry {j}: Decay must be non-negative {suffix}"),
            )?;
        }
        Ok(())
    }

    /// Add shock profiles, in order, to existing events.
    ///
    /// # Errors
    /// Returns [`AddShockProfilesError`] naming the first invalid profile or
    /// entry, an engine rejection, or a transport failure.
    pub async fn add_shock_profiles(
        &self,
        project: &str,
        profiles: &[ShockProfile],
    ) -> Result<Option<i32>, AddShockProfilesError> {
        self.stub.require(PROFILE_BATCHES, "add_shock_profiles")?;
        non_empty(project, "Project name is invalid.")?;
        ensure(
            !profiles.is_empty(),
            "One or more shock profiles are required.",
        )?;
        for (i, profile) in profiles.iter().enumerate() {
            self.check_shock_profile(i, profile).await?;
        }

        if !self.stub.connected().await {
            return Ok(None);
        }
        let request = wire::AddShockProfilesRequest {
            project: project.to_owned(),
            shock_profiles: profiles.iter().map(Into::into).collect(),
        };
        let response: LifeCycleResponse =
            self.stub.call(paths::ADD_SHOCK_PROFILES, request).await?;
        Ok(Some(interpret(&response)?))
    }

    /// Load a random vibration profile from a file into an event.
    ///
    /// # Errors
    /// Returns [`LoadRandomVibeProfileError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn load_random_vibe_profile(
        &self,
        project: &str,
        phase_name: &str,
        event_name: &str,
        file_path: &str,
    ) -> Result<Option<i32>, LoadRandomVibeProfileError> {
        Ok(self
            .load_profile(
                (paths::LOAD_RANDOM_VIBE_PROFILE, "load_random_vibe_profile"),
                [project, phase_name, event_name, file_path],
                "File path is invalid.",
            )
            .await?)
    }

    /// Load a harmonic profile from a file into an event.
    ///
    /// # Errors
    /// Returns [`LoadHarmonicProfileError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn load_harmonic_profile(
        &self,
        project: &str,
        phase_name: &str,
        event_name: &str,
        file_path: &str,
    ) -> Result<Option<i32>, LoadHarmonicProfileError> {
        Ok(self
            .load_profile(
                (paths::LOAD_HARMONIC_PROFILE, "load_harmonic_profile"),
                [project, phase_name, event_name, file_path],
                "File name is invalid.",
            )
            .await?)
    }

    /// Load a thermal profile from a file into an event.
    ///
    /// # Errors
    /// Returns [`LoadThermalProfileError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn load_thermal_profile(
        &self,
        project: &str,
        phase_name: &str,
        event_name: &str,
        file_path: &str,
    ) -> Result<Option<i32>, LoadThermalProfileError> {
        Ok(self
            .load_profile(
                (paths::LOAD_THERMAL_PROFILE, "load_thermal_profile"),
                [project, phase_name, event_name, file_path],
                "File path is invalid.",
            )
            .await?)
    }

    /// Load a shock profile dataset from a file into an event.
    ///
    /// # Errors
    /// Returns [`LoadShockProfileDatasetError`] on invalid arguments, an
    /// engine rejection, or a transport failure.
    pub async fn load_shock_profile_dataset(
        &self,
        project: &str,
        phase_name: &str,
        event_name: &str,
        file_path: &str,
    ) -> Result<Option<i32>, LoadShockProfileDatasetError> {
        Ok(self
            .load_profile(
                (paths::LOAD_SHOCK_PROFILE_DATASET, "load_shock_profile_dataset"),
                [project, phase_name, event_name, file_path],
                "File path is invalid.",
            )
            .await?)
    }

    /// Load shock profile pulses from a file into an event.
    ///
    /// # Errors
    /// Returns [`LoadShockProfilePulsesError`] on invalid arguments, an
    /// engine rejection, or a transport failure.
    pub async fn load_shock_profile_pulses(
        &self,
        project: &str,
        phase_name: &str,
        event_name: &str,
        file_path: &str,
    ) -> Result<Option<i32>, LoadShockProfilePulsesError> {
        Ok(self
            .load_profile(
                (paths::LOAD_SHOCK_PROFILE_PULSES, "load_shock_profile_pulses"),
                [project, phase_name, event_name, file_path],
                "File path is invalid.",
            )
            .await?)
    }

    async fn load_profile(
        &self,
        (path, function): (&'static str, &'static str),
        [project, phase_name, event_name, file_path]: [&str; 4],
        file_message: &str,
    ) -> Result<Option<i32>, Failure> {
        self.stub.require(VersionGate::SUPPORTED, function)?;
        check_names(project, phase_name, Some(event_name))?;
        non_empty(file_path, file_message)?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = wire::LoadProfileRequest {
            project: project.to_owned(),
            phase_name: phase_name.to_owned(),
            event_name: event_name.to_owned(),
            file_path: file_path.to_owned(),
        };
        let response: StatusResponse = self.stub.call(path, request).await?;
        interpret(&response).map(Some)
    }
}
