#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

//! Client SDK for the Sherlock electronics reliability engine.
//!
//! The engine exposes one gRPC service per concern. [`Sherlock`] bundles a
//! client for each of them over a single channel:
//!
//! - [`common`]: health check, unit lists, engine info, shutdown
//! - [`project`]: projects, CCAs, ODB/IPC-2581 import, reports
//! - [`lifecycle`]: life phases, events and their load profiles
//! - [`stackup`], [`layer`], [`parts`], [`model`]: board definition and exports
//! - [`analysis`]: analysis runs and their properties
//!
//! Every operation validates its arguments locally, then checks that the
//! engine answers before sending anything. `Ok(None)` means the engine was
//! not reachable; failures come back as a per-operation error type whose
//! text reads `"<Operation> error: <message>"`.
//!
//! ```no_run
//! use sherlock_sdk::config::LauncherConfig;
//! use sherlock_sdk::launcher::launch_sherlock;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = LauncherConfig::load(None)?;
//! let launched = launch_sherlock(&config).await?;
//! let sherlock = &launched.sherlock;
//! sherlock
//!     .project
//!     .add_project("Tutorial", "Demos", "Created from the SDK")
//!     .await?;
//! sherlock.common.exit(true).await?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod contract;

mod cache;
mod stub;
mod validate;

pub mod errors;
pub mod proto;
pub mod version;

pub mod analysis;
pub mod common;
pub mod layer;
pub mod lifecycle;
pub mod model;
pub mod parts;
pub mod project;
pub mod stackup;

pub mod config;
pub mod launcher;
pub mod logging;
mod sherlock;

pub use config::{LauncherConfig, LoggingConfig};
pub use errors::{Failure, FailureKind, LaunchError, OperationError, VersionError};
pub use launcher::{LaunchedSherlock, connect, connect_grpc_channel, launch_sherlock};
pub use logging::init_logging;
pub use sherlock::Sherlock;
pub use sherlock_transport_grpc::{GrpcClientConfig, MockChannel, RpcChannel};
pub use version::EngineVersion;
