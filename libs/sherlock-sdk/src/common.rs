//! Engine-wide calls: health check, shutdown, unit lists and engine info.

use std::fmt;
use std::str::FromStr;

use sherlock_transport_grpc::RpcChannel;

use crate::contract::interpret;
use crate::errors::CommonServiceError;
use crate::proto::common::{
    ExitRequest, ExitResponse, GetSherlockInfoRequest, GetSherlockInfoResponse, ListUnitsRequest,
    ListUnitsResponse, paths,
};
use crate::stub::ServiceStub;
use crate::version::{EngineVersion, VersionGate};

nested_reply!(ListUnitsResponse);
nested_reply!(GetSherlockInfoResponse);

const GET_SHERLOCK_INFO: VersionGate = VersionGate::since(251);

macro_rules! unit_types {
    ($($variant:ident => $name:literal,)+) => {
        /// Unit families understood by [`Common::list_units`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum UnitType {
            $($variant,)+
        }

        impl UnitType {
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

unit_types! {
    AccelDensity => "ACCEL_DENSITY",
    Acceleration => "ACCELERATION",
    Area => "AREA",
    Bandwidth => "BANDWIDTH",
    Capacitance => "CAPACITANCE",
    Cte => "CTE",
    Current => "CURRENT",
    Density => "DENSITY",
    DispDensity => "DISP_DENSITY",
    Force => "FORCE",
    Frequency => "FREQUENCY",
    Inductance => "INDUCTANCE",
    Length => "LENGTH",
    Power => "POWER",
    Resistance => "RESISTANCE",
    Size => "SIZE",
    SpecificHeat => "SPECIFIC_HEAT",
    Strain => "STRAIN",
    Stress => "STRESS",
    Temperature => "TEMPERATURE",
    ThermalConductivity => "THERMAL_CONDUCTIVITY",
    ThermalResistance => "THERMAL_RESISTANCE",
    Time => "TIME",
    Velocity => "VELOCITY",
    VelocityDensity => "VELOCITY_DENSITY",
    Voltage => "VOLTAGE",
    Volume => "VOLUME",
    Weight => "WEIGHT",
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid unit type '{s}' specified"))
    }
}

/// What the engine reports about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SherlockInfo {
    /// Release label, e.g. `2025 R1`.
    pub release_version: String,
    pub default_projects_dir: String,
    pub is_single_project_mode: bool,
}

impl SherlockInfo {
    /// Server build number derived from the release label, if it parses.
    #[must_use]
    pub fn engine_version(&self) -> Option<EngineVersion> {
        EngineVersion::from_release(&self.release_version).ok()
    }
}

/// `SherlockCommonService` client.
#[derive(Debug, Clone)]
pub struct Common<C> {
    stub: ServiceStub<C>,
}

impl<C: RpcChannel> Common<C> {
    #[must_use]
    pub const fn new(channel: C, version: EngineVersion) -> Self {
        Self {
            stub: ServiceStub::new(channel, version),
        }
    }

    pub async fn is_connection_up(&self) -> bool {
        self.stub.is_connection_up().await
    }

    /// Log whether the engine answers the health check.
    pub async fn check(&self) {
        if self.stub.is_connection_up().await {
            tracing::info!("Connection is up.");
        } else {
            tracing::error!("Health check failed.");
        }
    }

    /// Ask the engine to shut down, optionally closing its client window.
    ///
    /// # Errors
    /// Returns [`CommonServiceError`] when the RPC fails.
    pub async fn exit(&self, close_sherlock_client: bool) -> Result<Option<()>, CommonServiceError> {
        if !self.stub.connected().await {
            return Ok(None);
        }
        let response: ExitResponse = self
            .stub
            .call(
                paths::EXIT,
                ExitRequest {
                    close_sherlock_client,
                },
            )
            .await?;
        tracing::info!("{}", response.message);
        Ok(Some(()))
    }

    /// Units the engine accepts for `unit_type`.
    ///
    /// # Errors
    /// Returns [`CommonServiceError`] when the engine rejects the request or
    /// the RPC fails.
    pub async fn list_units(
        &self,
        unit_type: UnitType,
    ) -> Result<Option<Vec<String>>, CommonServiceError> {
        if !self.stub.connected().await {
            return Ok(None);
        }
        let response: ListUnitsResponse = self
            .stub
            .call(
                paths::LIST_UNITS,
                ListUnitsRequest {
                    unit_type: unit_type as i32,
                },
            )
            .await?;
        interpret(&response)?;
        Ok(Some(response.units))
    }

    /// Release and session details of the engine. Needs 2025 R1 or newer.
    ///
    /// # Errors
    /// Returns [`CommonServiceError`] when the engine is too old, rejects the
    /// request, or the RPC fails.
    pub async fn get_sherlock_info(&self) -> Result<Option<SherlockInfo>, CommonServiceError> {
        self.stub.require(GET_SHERLOCK_INFO, "get_sherlock_info")?;
        if !self.stub.connected().await {
            return Ok(None);
        }
        let response: GetSherlockInfoResponse = self
            .stub
            .call(paths::GET_SHERLOCK_INFO, GetSherlockInfoRequest {})
            .await?;
        interpret(&response)?;
        Ok(Some(SherlockInfo {
            release_version: response.release_version,
            default_projects_dir: response.default_projects_dir,
            is_single_project_mode: response.is_single_project_mode,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn unit_type_has_every_family() {
        assert_eq!(UnitType::ALL.len(), 28);
        assert_eq!(UnitType::AccelDensity as i32, 0);
        assert_eq!(UnitType::Weight as i32, 27);
    }

    #[test]
    fn unit_type_parses_case_insensitively() {
        assert_eq!(
            "thermal_conductivity".parse::<UnitType>().unwrap(),
            UnitType::ThermalConductivity
        );
        assert_eq!("LENGTH".parse::<UnitType>().unwrap(), UnitType::Length);
    }

    #[test]
    fn unknown_unit_type_is_named() {
        assert_eq!(
            "FURLONG".parse::<UnitType>().unwrap_err(),
            "Invalid unit type 'FURLONG' specified"
        );
    }

    #[test]
    fn info_maps_release_to_build() {
        let info = SherlockInfo {
            release_version: "2025 R1".to_owned(),
            default_projects_dir: String::new(),
            is_single_project_mode: false,
        };
        assert_eq!(info.engine_version(), Some(EngineVersion::Build(251)));
    }
}
