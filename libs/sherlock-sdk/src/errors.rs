//! Error types.
//!
//! Every engine operation has its own error type (`CreateLifePhaseError`,
//! `UpdatePartsListError`, ...). They all wrap a [`Failure`] and render as
//! `"<Operation> error: <message>"`. Local validation failures and engine
//! rejections of the same operation share one type; [`OperationError::kind`]
//! tells them apart. Converting a [`Failure`] into an operation error logs
//! its lines at error level.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Version gate failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Unable to detect which version of sherlock was launched.")]
    Unknown,

    #[error(
        "Sherlock version {current} too old to use function {function} update server to at least version {min}"
    )]
    TooOld {
        current: u32,
        function: &'static str,
        min: u32,
    },

    #[error(
        "Sherlock version {current} is too new. This function {function} deprecated after version {max}"
    )]
    TooNew {
        current: u32,
        function: &'static str,
        max: u32,
    },

    /// A gate was declared with `min > max`.
    #[error("Minimum version {min} cannot be greater than maximum version {max}")]
    InvertedBounds { min: u32, max: u32 },
}

/// Broad classification of an operation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// An argument failed a check before anything was sent.
    LocalValidation,
    /// The engine answered with `value == -1`.
    RemoteRejected,
    /// The RPC itself failed.
    Transport,
    /// The connected engine is too old or too new for the method.
    Version,
}

/// What went wrong in an operation, without the operation label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    Rejected(String),

    /// Per-item messages reported by the engine for a batch request.
    #[error("{}", .0.join("\n"))]
    RejectedItems(Vec<String>),

    #[error("{0}")]
    Transport(String),

    #[error(transparent)]
    Version(#[from] VersionError),
}

impl Failure {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Invalid(_) => FailureKind::LocalValidation,
            Self::Rejected(_) | Self::RejectedItems(_) => FailureKind::RemoteRejected,
            Self::Transport(_) => FailureKind::Transport,
            Self::Version(_) => FailureKind::Version,
        }
    }

    /// The bare messages, one per item.
    #[must_use]
    pub fn items(&self) -> Vec<String> {
        match self {
            Self::RejectedItems(items) => items.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl From<tonic::Status> for Failure {
    fn from(status: tonic::Status) -> Self {
        Self::Transport(format!("{} ({})", status.message(), status.code()))
    }
}

/// Common surface of the per-operation error types.
pub trait OperationError: std::error::Error + Send + Sync + Sized + 'static {
    /// Prefix used when rendering, e.g. `Create life phase`.
    const LABEL: &'static str;

    fn failure(&self) -> &Failure;

    fn kind(&self) -> FailureKind {
        self.failure().kind()
    }

    /// One labelled line per message; batch rejections yield one line per
    /// rejected item.
    fn messages(&self) -> Vec<String> {
        self.failure()
            .items()
            .into_iter()
            .map(|item| format!("{} error: {item}", Self::LABEL))
            .collect()
    }
}

fn render(label: &str, failure: &Failure, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match failure {
        Failure::RejectedItems(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    writeln!(f)?;
                }
                write!(f, "{label} error: {item}")?;
            }
            Ok(())
        }
        other => write!(f, "{label} error: {other}"),
    }
}

macro_rules! operation_errors {
    ($($name:ident => $label:literal,)+) => {
        $(
            #[doc = concat!("Failure of a `", $label, "` call.")]
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct $name(Failure);

            impl OperationError for $name {
                const LABEL: &'static str = $label;

                fn failure(&self) -> &Failure {
                    &self.0
                }
            }

            impl From<Failure> for $name {
                /// Every failure is logged once, at error level, when it
                /// becomes an operation error.
                fn from(failure: Failure) -> Self {
                    let err = Self(failure);
                    for line in err.messages() {
                        tracing::error!("{line}");
                    }
                    err
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    render(Self::LABEL, &self.0, f)
                }
            }

            impl std::error::Error for $name {
                fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                    Some(&self.0)
                }
            }
        )+
    };
}

operation_errors! {
    // common
    CommonServiceError => "Sherlock common service",
    // model
    ExportTraceReinforcementModelError => "Model service",
    ExportAedbError => "Export AEDB",
    // layer
    UpdateMountPointsByFileError => "Update mount points by file",
    DeleteMountPointsError => "Delete mount points",
    DeleteIctFixturesError => "Delete ict fixtures",
    DeleteTestPointsError => "Delete test points",
    ExportMountPointsError => "Export mount points",
    ExportTestPointsError => "Export test points",
    ExportTestFixturesError => "Export test fixtures",
    ListLayersError => "List layers",
    AddPottingRegionError => "Add potting region",
    UpdatePottingRegionError => "Update potting region",
    CopyPottingRegionsError => "Copy potting regions",
    DeletePottingRegionsError => "Delete potting regions",
    // lifecycle
    CreateLifePhaseError => "Create life phase",
    AddRandomVibeEventError => "Add random vibe event",
    AddRandomVibeProfilesError => "Add random vibe profiles",
    AddThermalEventError => "Add thermal event",
    AddThermalProfilesError => "Add thermal profiles",
    AddHarmonicEventError => "Add harmonic event",
    AddHarmonicVibeProfilesError => "Add harmonic vibe profiles",
    AddShockEventError => "Add shock event",
    AddShockProfilesError => "Add shock profiles",
    LoadRandomVibeProfileError => "Load random vibe profile",
    LoadHarmonicProfileError => "Load harmonic profile",
    LoadThermalProfileError => "Load thermal profile",
    LoadShockProfileDatasetError => "Load shock profile dataset",
    LoadShockProfilePulsesError => "Load shock profile pulses",
    // parts
    UpdatePartsListError => "Update parts list",
    UpdatePartsLocationsError => "Update parts locations",
    UpdatePartsLocationsByFileError => "Update parts locations by file",
    GetPartLocationError => "Get part location",
    ExportPartsListError => "Export parts list",
    ImportPartsListError => "Import parts list",
    EnableLeadModelingError => "Enable lead modeling",
    GetPartsListPropertiesError => "Get parts list properties",
    // stackup
    GenStackupError => "Generate stackup",
    UpdateConductorLayerError => "Update conductor layer",
    UpdateLaminateLayerError => "Update laminate layer",
    GetLayerCountError => "Get layer count",
    GetTotalConductorThicknessError => "Get total conductor thickness",
    ListConductorLayerError => "List conductor layer",
    ListLaminateLayersError => "List laminate layer",
    GetStackupPropsError => "Get stackup prop",
    // analysis
    RunAnalysisError => "Run analysis",
    GetRandomVibeInputFieldsError => "Get random vibe input fields",
    UpdateRandomVibePropsError => "Update random vibe properties",
    UpdateNaturalFrequencyPropsError => "Update natural frequency properties",
    // project
    DeleteProjectError => "Delete project",
    AddProjectError => "Add project",
    ImportOdbError => "Import ODB",
    ImportIpc2581Error => "Import IPC2581",
    GenerateProjectReportError => "Generate project report",
    ListCcasError => "List CCAs",
    AddCcaError => "Add CCA",
}

/// Failures while starting or attaching to an engine process.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Specified gRPC port {port} cannot be used: {reason}")]
    PortUnavailable { port: u16, reason: String },

    #[error("{0}")]
    InstallationNotFound(String),

    #[error("Year must be a 4-digit integer.")]
    InvalidYear,

    #[error("Release number must be 1 or 2.")]
    InvalidReleaseNumber,

    #[error("Invalid release version '{0}'")]
    InvalidReleaseVersion(String),

    #[error("failed to spawn process: {}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Sherlock did not answer the health check within {}", humantime::format_duration(*.0))]
    StartupTimeout(Duration),

    #[error("failed to connect to Sherlock: {0:#}")]
    Connect(anyhow::Error),

    #[error("invalid launcher configuration: {0}")]
    Config(Box<figment::Error>),
}
