//! Starting a local engine process and attaching to a running one.
//!
//! Installations are discovered through `AWP_ROOT<version>` environment
//! variables (`AWP_ROOT251=C:\Program Files\ANSYS Inc\v251`). The engine is
//! started with its gRPC port on the command line and is considered up once it
//! answers the health check.

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use sherlock_transport_grpc::{RpcChannel, connect_lazy, engine_uri};
use tokio::process::{Child, Command};
use tokio::time::Instant;
use tonic::transport::Channel;

use crate::common::Common;
use crate::config::LauncherConfig;
use crate::errors::LaunchError;
use crate::sherlock::Sherlock;
pub use crate::version::EARLIEST_SUPPORTED_VERSION;
use crate::version::EngineVersion;

pub const LOCALHOST: &str = "127.0.0.1";
pub const SHERLOCK_DEFAULT_PORT: u16 = 9090;

const AWP_ROOT: &str = "AWP_ROOT";

/// Fail when `host:port` cannot be bound.
///
/// # Errors
/// Returns [`LaunchError::PortUnavailable`] with `Port is already in use` when
/// something listens there, or the OS error text otherwise.
pub fn check_port_available(host: &str, port: u16) -> Result<(), LaunchError> {
    match TcpListener::bind((host, port)) {
        Ok(_) => Ok(()),
        Err(e) => {
            let reason = if e.kind() == ErrorKind::AddrInUse {
                "Port is already in use".to_owned()
            } else {
                e.to_string()
            };
            Err(LaunchError::PortUnavailable { port, reason })
        }
    }
}

/// `AWP_ROOT223` is `223`; anything else is `0`.
#[must_use]
pub fn ansys_version_from_awp_root(key: &str) -> u32 {
    key.strip_prefix(AWP_ROOT)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

/// Two-digit year of a four-digit release year (`2024` is `24`).
///
/// # Errors
/// Returns [`LaunchError::InvalidYear`] unless `year` has four digits.
pub fn extract_version_year(year: u32) -> Result<u32, LaunchError> {
    if (1000..=9999).contains(&year) {
        Ok(year % 100)
    } else {
        Err(LaunchError::InvalidYear)
    }
}

/// An engine installation found on this machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    pub root: PathBuf,
    /// Server build number, e.g. `251`.
    pub version: u32,
}

/// Pick an installation from `AWP_ROOT*` variables.
///
/// Only existing directories of supported versions count. Without `requested`
/// the newest one wins; otherwise exactly that build must be present. Keys that
/// are not valid Unicode are skipped.
///
/// # Errors
/// Returns [`LaunchError::InstallationNotFound`] when nothing qualifies.
pub fn find_installation<I, K, V>(env: I, requested: Option<u32>) -> Result<Installation, LaunchError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<OsStr>,
    V: Into<PathBuf>,
{
    let mut found: Vec<Installation> = env
        .into_iter()
        .filter_map(|(key, root)| {
            let key = key.as_ref().to_str()?;
            key.starts_with(AWP_ROOT).then(|| Installation {
                version: ansys_version_from_awp_root(key),
                root: root.into(),
            })
        })
        .filter(|i| i.version >= EARLIEST_SUPPORTED_VERSION && i.root.is_dir())
        .collect();
    found.sort_by(|a, b| b.version.cmp(&a.version));

    let picked = match requested {
        Some(version) => found.into_iter().find(|i| i.version == version),
        None => found.into_iter().next(),
    };
    picked.ok_or_else(|| {
        LaunchError::InstallationNotFound(match requested {
            Some(version) => format!("Sherlock version {version} is not installed."),
            None => "No supported Sherlock installation was found.".to_owned(),
        })
    })
}

#[must_use]
pub fn sherlock_exe_path(root: &Path) -> PathBuf {
    root.join("sherlock").join("SherlockClient.exe")
}

/// Command line of the engine process.
#[must_use]
pub fn engine_args(config: &LauncherConfig) -> Vec<String> {
    let mut args = vec![format!("-grpcPort={}", config.port)];
    args.extend(config.args.iter().cloned());
    if let Some(path) = &config.single_project_path {
        args.push("-singleProject".to_owned());
        args.push(path.to_string_lossy().into_owned());
    }
    args
}

/// Version reported by the engine when `version` is not known yet.
///
/// Engines older than 2025 R1 cannot report it; the marker then stays
/// [`EngineVersion::Unknown`].
pub async fn resolve_version<C: RpcChannel>(channel: &C, version: EngineVersion) -> EngineVersion {
    if version != EngineVersion::Unknown {
        return version;
    }
    let common = Common::new(channel.clone(), EngineVersion::Skip);
    match common.get_sherlock_info().await {
        Ok(Some(info)) => info.engine_version().unwrap_or_else(|| {
            tracing::warn!(
                release = %info.release_version,
                "unrecognised release label, engine version stays unknown"
            );
            EngineVersion::Unknown
        }),
        Ok(None) | Err(_) => EngineVersion::Unknown,
    }
}

/// Poll the health check until the engine answers, then build the client.
///
/// # Errors
/// Returns [`LaunchError::StartupTimeout`] when the engine is still down after
/// `startup_timeout`.
pub async fn wait_for_engine<C: RpcChannel>(
    channel: C,
    version: EngineVersion,
    startup_timeout: Duration,
    poll_interval: Duration,
) -> Result<Sherlock<C>, LaunchError> {
    let health = Common::new(channel.clone(), EngineVersion::Skip);
    let deadline = Instant::now() + startup_timeout;
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        if health.is_connection_up().await {
            tracing::info!(attempt, "Sherlock is up");
            break;
        }
        if Instant::now() + poll_interval > deadline {
            return Err(LaunchError::StartupTimeout(startup_timeout));
        }
        tracing::debug!(attempt, "Sherlock not answering yet");
        tokio::time::sleep(poll_interval).await;
    }

    let version = resolve_version(&channel, version).await;
    tracing::info!(%version, "connected to Sherlock");
    Ok(Sherlock::new(channel, version))
}

/// Open a lazy channel to `config.host:config.port` and wait for the engine.
///
/// # Errors
/// Returns [`LaunchError::Connect`] for an unusable address and
/// [`LaunchError::StartupTimeout`] when the engine never answers.
pub async fn connect(
    config: &LauncherConfig,
    version: EngineVersion,
) -> Result<Sherlock<Channel>, LaunchError> {
    let channel = connect_lazy(
        engine_uri(&config.host, config.port),
        &config.grpc_client_config(),
    )
    .map_err(LaunchError::Connect)?;
    wait_for_engine(channel, version, config.startup_timeout, config.poll_interval).await
}

/// Attach to an engine that is already running, without waiting for it.
///
/// The version is asked from the engine when it answers; otherwise it stays
/// unknown and version-gated methods refuse to run.
///
/// # Errors
/// Returns [`LaunchError::Connect`] for an unusable address.
pub async fn connect_grpc_channel(config: &LauncherConfig) -> Result<Sherlock<Channel>, LaunchError> {
    let channel = connect_lazy(
        engine_uri(&config.host, config.port),
        &config.grpc_client_config(),
    )
    .map_err(LaunchError::Connect)?;
    let common = Common::new(channel.clone(), EngineVersion::Skip);
    let version = if common.is_connection_up().await {
        resolve_version(&channel, EngineVersion::Unknown).await
    } else {
        tracing::warn!(host = %config.host, port = config.port, "Sherlock is not answering");
        EngineVersion::Unknown
    };
    Ok(Sherlock::new(channel, version))
}

/// A started engine process and the client connected to it.
#[derive(Debug)]
pub struct LaunchedSherlock {
    pub sherlock: Sherlock<Channel>,
    /// The engine keeps running when this is dropped; call `exit` on the
    /// client or kill the process to stop it.
    pub process: Child,
}

/// Start the newest (or the configured) installation and connect to it.
///
/// # Errors
/// Returns [`LaunchError`] when the port is taken, no installation matches,
/// the process cannot be spawned, or the engine never answers.
pub async fn launch_sherlock(config: &LauncherConfig) -> Result<LaunchedSherlock, LaunchError> {
    check_port_available(&config.host, config.port)?;
    let installation = find_installation(std::env::vars_os(), config.requested_version()?)?;
    let exe = sherlock_exe_path(&installation.root);
    let args = engine_args(config);

    tracing::info!(
        path = %exe.display(),
        version = installation.version,
        port = config.port,
        "starting Sherlock"
    );
    let mut process = Command::new(&exe)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            path: exe.clone(),
            source,
        })?;
    tracing::debug!(pid = process.id(), "Sherlock process spawned");

    match connect(config, EngineVersion::Build(installation.version)).await {
        Ok(sherlock) => Ok(LaunchedSherlock { sherlock, process }),
        Err(e) => {
            tracing::error!(error = %e, "Sherlock did not come up, stopping the process");
            if let Err(kill) = process.start_kill() {
                tracing::warn!(error = %kill, "failed to kill Sherlock process");
            }
            Err(e)
        }
    }
}
