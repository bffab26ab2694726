//! Launcher and logging configuration.
//!
//! [`LauncherConfig::load`] layers serialized defaults, an optional YAML file
//! and `SHERLOCK_`-prefixed environment variables, in that order. Durations are
//! written the `humantime` way (`90s`, `2m`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use sherlock_transport_grpc::GrpcClientConfig;

use crate::errors::LaunchError;
use crate::launcher::{LOCALHOST, SHERLOCK_DEFAULT_PORT, extract_version_year};

/// Prefix of the environment variables read by [`LauncherConfig::load`].
pub const ENV_PREFIX: &str = "SHERLOCK_";

/// `serde(with)` adapter for [`Duration`] fields.
pub mod humantime_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer, de};

    /// # Errors
    /// Fails when the value is not a `humantime` duration.
    pub fn deserialize<'de, D>(d: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(d)?;
        humantime::parse_duration(&text)
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(&text), &"a duration"))
    }

    /// # Errors
    /// Propagates serializer failures.
    pub fn serialize<S>(d: &Duration, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&humantime::format_duration(*d).to_string())
    }
}

/// How to start or reach the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub host: String,
    pub port: u16,
    /// Extra engine command-line arguments.
    pub args: Vec<String>,
    /// Open the engine on this project only.
    pub single_project_path: Option<PathBuf>,
    /// Release to launch, e.g. `2024`; the newest installation when unset.
    pub year: Option<u32>,
    /// `1` or `2`; required together with `year`.
    pub release_number: Option<u32>,
    /// How long to wait for the engine to answer its health check.
    #[serde(with = "humantime_serde")]
    pub startup_timeout: Duration,
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,
    #[serde(with = "humantime_serde")]
    pub rpc_timeout: Duration,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            host: LOCALHOST.to_owned(),
            port: SHERLOCK_DEFAULT_PORT,
            args: Vec::new(),
            single_project_path: None,
            year: None,
            release_number: None,
            startup_timeout: Duration::from_secs(120),
            poll_interval: Duration::from_secs(1),
            connect_timeout: Duration::from_secs(10),
            rpc_timeout: Duration::from_secs(30),
        }
    }
}

impl LauncherConfig {
    /// Defaults, then `path` if given, then the environment.
    ///
    /// # Errors
    /// Returns [`LaunchError::Config`] when a layer cannot be read or a value
    /// has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, LaunchError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| LaunchError::Config(Box::new(e)))
    }

    /// Server build number asked for by `year` and `release_number`
    /// (`2024`, `1` is `241`), or `None` for the newest installation.
    ///
    /// # Errors
    /// Returns [`LaunchError::InvalidYear`] or
    /// [`LaunchError::InvalidReleaseNumber`] for malformed values, and
    /// [`LaunchError::InvalidReleaseVersion`] when only one of the two is set.
    pub fn requested_version(&self) -> Result<Option<u32>, LaunchError> {
        match (self.year, self.release_number) {
            (None, None) => Ok(None),
            (Some(year), Some(release)) => {
                let short_year = extract_version_year(year)?;
                if !matches!(release, 1 | 2) {
                    return Err(LaunchError::InvalidReleaseNumber);
                }
                Ok(Some(short_year * 10 + release))
            }
            _ => Err(LaunchError::InvalidReleaseVersion(
                "year and release number must be given together".to_owned(),
            )),
        }
    }

    /// Transport settings for channels opened from this configuration.
    #[must_use]
    pub fn grpc_client_config(&self) -> GrpcClientConfig {
        GrpcClientConfig::new("sherlock")
            .with_connect_timeout(self.connect_timeout)
            .with_rpc_timeout(self.rpc_timeout)
    }
}

/// Subscriber settings for [`crate::logging::init_logging`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub default_directive: String,
    /// Emit one JSON object per line instead of text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_directive: "warn".to_owned(),
            json: false,
        }
    }
}
