//! Model exports.

use std::path::Path;

use sherlock_transport_grpc::RpcChannel;

use crate::contract::interpret;
use crate::errors::{ExportAedbError, ExportTraceReinforcementModelError};
use crate::proto::StatusResponse;
use crate::proto::model::{ExportAedbRequest, ExportTraceReinforcementModelRequest, paths};
use crate::stub::ServiceStub;
use crate::validate::{ensure, non_empty};
use crate::version::{EngineVersion, VersionGate};

/// AEDB export arrived with 2025 R1.
const AEDB_EXPORT: VersionGate = VersionGate::since(251);

/// `SherlockModelService` client.
#[derive(Debug, Clone)]
pub struct Model<C> {
    stub: ServiceStub<C>,
}

impl<C: RpcChannel> Model<C> {
    #[must_use]
    pub const fn new(channel: C, version: EngineVersion) -> Self {
        Self {
            stub: ServiceStub::new(channel, version),
        }
    }

    /// Export the trace reinforcement model of a CCA to `export_file`.
    ///
    /// The directory of `export_file` must already exist.
    ///
    /// # Errors
    /// Returns [`ExportTraceReinforcementModelError`] on invalid arguments, an
    /// engine rejection, or a transport failure.
    pub async fn export_trace_reinforcement_model(
        &self,
        project: &str,
        cca_name: &str,
        export_file: &str,
        overwrite: bool,
    ) -> Result<Option<i32>, ExportTraceReinforcementModelError> {
        self.stub
            .require(VersionGate::SUPPORTED, "export_trace_reinforcement_model")?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;
        non_empty(export_file, "Export file path is invalid.")?;
        if let Some(dir) = Path::new(export_file).parent()
            && !dir.as_os_str().is_empty()
        {
            ensure(
                dir.exists(),
                format!("Export file directory \"{}\" does not exist.", dir.display()),
            )?;
        }

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = ExportTraceReinforcementModelRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
            export_file: export_file.to_owned(),
            overwrite,
        };
        let response: StatusResponse = self
            .stub
            .call(paths::EXPORT_TRACE_REINFORCEMENT_MODEL, request)
            .await?;
        Ok(Some(interpret(&response)?))
    }

    /// Export a CCA as an AEDB archive.
    ///
    /// # Errors
    /// Returns [`ExportAedbError`] on invalid arguments, an engine rejection,
    /// or a transport failure.
    pub async fn export_aedb(
        &self,
        project: &str,
        cca_name: &str,
        export_file: &str,
        overwrite_existing_file: bool,
        display_model_in_viewer: bool,
    ) -> Result<Option<i32>, ExportAedbError> {
        self.stub.require(AEDB_EXPORT, "export_aedb")?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;
        non_empty(export_file, "Export filepath is required.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = ExportAedbRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
            export_file: export_file.to_owned(),
            overwrite_existing_file,
            display_model_in_viewer,
        };
        let response: StatusResponse = self.stub.call(paths::EXPORT_AEDB, request).await?;
        Ok(Some(interpret(&response)?))
    }
}
