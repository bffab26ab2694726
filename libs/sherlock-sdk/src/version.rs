//! Engine version marker and per-method version gates.

use std::fmt;

use crate::errors::VersionError;

/// Version of the engine a client is talking to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineVersion {
    /// Not detected; gated methods refuse to run.
    #[default]
    Unknown,
    /// Bypass every gate.
    Skip,
    /// Server build number, e.g. `251` for 2025 R1.
    Build(u32),
}

impl EngineVersion {
    /// Parse a release label such as `2024 R1`.
    ///
    /// # Errors
    /// Returns the offending label when it is not `<4-digit year> R<digit>`.
    pub fn from_release(label: &str) -> Result<Self, String> {
        convert_to_server_version(label).map(Self::Build)
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown"),
            Self::Skip => f.write_str("skip"),
            Self::Build(v) => write!(f, "{v}"),
        }
    }
}

/// Map a release label (`2024 R1`) to the server build number (`241`).
///
/// # Errors
/// Returns the label back when it does not have the expected shape.
pub fn convert_to_server_version(label: &str) -> Result<u32, String> {
    let invalid = || label.to_owned();
    let (year, release) = label.trim().split_once(' ').ok_or_else(invalid)?;
    let release = release.trim().strip_prefix('R').ok_or_else(invalid)?;
    if year.len() != 4 || release.len() != 1 {
        return Err(invalid());
    }
    let year: u32 = year.parse().map_err(|_| invalid())?;
    let release: u32 = release.parse().map_err(|_| invalid())?;
    Ok((year % 100) * 10 + release)
}

/// Oldest server build the SDK supports (2021 R1).
pub const EARLIEST_SUPPORTED_VERSION: u32 = 211;

/// Inclusive version bounds for one method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionGate {
    min: u32,
    max: Option<u32>,
}

impl VersionGate {
    /// Gate of every method that predates version tracking.
    pub const SUPPORTED: Self = Self::since(EARLIEST_SUPPORTED_VERSION);

    #[must_use]
    pub const fn since(min: u32) -> Self {
        Self { min, max: None }
    }

    /// # Errors
    /// Returns [`VersionError::InvertedBounds`] when `min > max`.
    pub fn between(min: u32, max: u32) -> Result<Self, VersionError> {
        if min > max {
            return Err(VersionError::InvertedBounds { min, max });
        }
        Ok(Self {
            min,
            max: Some(max),
        })
    }

    /// # Errors
    /// Returns why `function` may not run against `version`.
    pub fn check(&self, version: EngineVersion, function: &'static str) -> Result<(), VersionError> {
        let current = match version {
            EngineVersion::Skip => return Ok(()),
            EngineVersion::Unknown => return Err(VersionError::Unknown),
            EngineVersion::Build(v) => v,
        };
        if current < self.min {
            return Err(VersionError::TooOld {
                current,
                function,
                min: self.min,
            });
        }
        if let Some(max) = self.max
            && current > max
        {
            return Err(VersionError::TooNew {
                current,
                function,
                max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const GATE: VersionGate = VersionGate::since(251);

    #[test]
    fn below_min_is_refused() {
        let err = GATE
            .check(EngineVersion::Build(242), "get_sherlock_info")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Sherlock version 242 too old to use function get_sherlock_info update server to at least version 251"
        );
    }

    #[test]
    fn min_and_above_run() {
        assert!(GATE.check(EngineVersion::Build(251), "f").is_ok());
        assert!(GATE.check(EngineVersion::Build(252), "f").is_ok());
    }

    #[test]
    fn skip_always_runs() {
        assert!(GATE.check(EngineVersion::Skip, "f").is_ok());
        let bounded = VersionGate::between(300, 301).unwrap();
        assert!(bounded.check(EngineVersion::Skip, "f").is_ok());
    }

    #[test]
    fn unknown_is_refused() {
        assert_eq!(
            GATE.check(EngineVersion::Unknown, "f").unwrap_err(),
            VersionError::Unknown
        );
    }

    #[test]
    fn above_max_is_deprecated() {
        let gate = VersionGate::between(231, 242).unwrap();
        assert!(gate.check(EngineVersion::Build(242), "old_fn").is_ok());
        let err = gate.check(EngineVersion::Build(251), "old_fn").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Sherlock version 251 is too new. This function old_fn deprecated after version 242"
        );
    }

    #[test]
    fn inverted_bounds_fail_at_declaration() {
        assert_eq!(
            VersionGate::between(252, 251).unwrap_err(),
            VersionError::InvertedBounds { min: 252, max: 251 }
        );
    }

    #[test]
    fn supported_gate_starts_at_earliest_build() {
        let gate = VersionGate::SUPPORTED;
        assert!(gate.check(EngineVersion::Build(211), "f").is_ok());
        assert_eq!(
            gate.check(EngineVersion::Build(202), "f").unwrap_err(),
            VersionError::TooOld {
                current: 202,
                function: "f",
                min: 211
            }
        );
        assert_eq!(
            gate.check(EngineVersion::Unknown, "f").unwrap_err(),
            VersionError::Unknown
        );
    }

    #[test]
    fn release_labels() {
        assert_eq!(convert_to_server_version("2024 R1").unwrap(), 241);
        assert_eq!(convert_to_server_version("2025 R2").unwrap(), 252);
        assert_eq!(
            EngineVersion::from_release("2023 R2").unwrap(),
            EngineVersion::Build(232)
        );
        assert!(convert_to_server_version("24R1").is_err());
        assert!(convert_to_server_version("2024 X1").is_err());
        assert!(convert_to_server_version("224 R1").is_err());
    }
}
