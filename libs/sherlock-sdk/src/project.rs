//! Projects, archive imports, reports and CCAs.

use sherlock_transport_grpc::RpcChannel;

use crate::contract::{interpret, invalid};
use crate::errors::{
    AddCcaError, AddProjectError, DeleteProjectError, GenerateProjectReportError, ImportIpc2581Error,
    ImportOdbError, ListCcasError,
};
use crate::proto::StatusResponse;
use crate::proto::project::{
    self as wire, AddCcaRequest, AddCcaResponse, AddProjectRequest, DeleteProjectRequest,
    GenerateProjectReportRequest, ImportIpc2581Request, ImportOdbRequest, ListCcasRequest,
    ListCcasResponse, paths,
};
use crate::stub::ServiceStub;
use crate::validate::{ensure, non_empty};
use crate::version::{EngineVersion, VersionGate};

nested_reply!(ListCcasResponse, error_message);

/// CCA listing and creation arrived with 2025 R1.
const CCA_CALLS: VersionGate = VersionGate::since(251);

/// ODB++ archive import options.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OdbImport {
    pub archive_file: String,
    pub process_layer_thickness: bool,
    pub include_other_layers: bool,
    pub process_cutout_file: bool,
    pub guess_part_properties: bool,
    /// Defaults to the archive name.
    pub project: Option<String>,
    /// Defaults to the design name in the archive.
    pub cca_name: Option<String>,
}

impl OdbImport {
    /// Import of `archive_file` with every processing option enabled.
    #[must_use]
    pub fn new(archive_file: impl Into<String>) -> Self {
        Self {
            archive_file: archive_file.into(),
            process_layer_thickness: true,
            include_other_layers: true,
            process_cutout_file: true,
            guess_part_properties: true,
            project: None,
            cca_name: None,
        }
    }
}

/// IPC-2581 archive import options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipc2581Import {
    pub archive_file: String,
    pub include_other_layers: bool,
    pub guess_part_properties: bool,
    pub project: Option<String>,
    pub cca_name: Option<String>,
}

impl Ipc2581Import {
    #[must_use]
    pub fn new(archive_file: impl Into<String>) -> Self {
        Self {
            archive_file: archive_file.into(),
            include_other_layers: true,
            guess_part_properties: true,
            project: None,
            cca_name: None,
        }
    }
}

/// A CCA as listed by the engine, with its nested sub-assemblies.
#[derive(Debug, Clone, PartialEq)]
pub struct CcaInfo {
    pub cca_name: String,
    pub description: String,
    pub default_solder_type: String,
    pub default_stencil_thickness: f64,
    pub default_stencil_thickness_units: String,
    pub default_part_temp_rise: f64,
    pub default_part_temp_rise_units: String,
    pub guess_part_properties: bool,
    pub sub_ccas: Vec<CcaInfo>,
}

impl From<wire::CcaInfo> for CcaInfo {
    fn from(info: wire::CcaInfo) -> Self {
        Self {
            cca_name: info.cca_name,
            description: info.description,
            default_solder_type: info.default_solder_type,
            default_stencil_thickness: info.default_stencil_thickness,
            default_stencil_thickness_units: info.default_stencil_thickness_units,
            default_part_temp_rise: info.default_part_temp_rise,
            default_part_temp_rise_units: info.default_part_temp_rise_units,
            guess_part_properties: info.guess_part_properties,
            sub_ccas: info.sub_ccas.into_iter().map(Self::from).collect(),
        }
    }
}

/// CCA to add; unset properties take the engine defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CcaProperties {
    pub cca_name: String,
    pub description: Option<String>,
    pub default_solder_type: Option<String>,
    pub default_stencil_thickness: Option<f64>,
    pub default_stencil_thickness_units: Option<String>,
    pub default_part_temp_rise: Option<f64>,
    pub default_part_temp_rise_units: Option<String>,
    pub guess_part_properties: Option<bool>,
}

impl CcaProperties {
    fn check(&self, i: usize) -> Result<(), String> {
        if self.cca_name.is_empty() {
            return Err(format!("CCA name is invalid for CCA {i}."));
        }
        if self.default_stencil_thickness.is_some_and(|t| !t.is_finite()) {
            return Err(format!("Default stencil thickness is invalid for CCA {i}."));
        }
        if self.default_part_temp_rise.is_some_and(|t| !t.is_finite()) {
            return Err(format!(
                "Default part temperature rise is invalid for CCA {i}."
            ));
        }
        Ok(())
    }

    fn to_wire(&self) -> wire::CcaProperties {
        wire::CcaProperties {
            cca_name: self.cca_name.clone(),
            description: self.description.clone(),
            default_solder_type: self.default_solder_type.clone(),
            default_stencil_thickness: self.default_stencil_thickness,
            default_stencil_thickness_units: self.default_stencil_thickness_units.clone(),
            default_part_temp_rise: self.default_part_temp_rise,
            default_part_temp_rise_units: self.default_part_temp_rise_units.clone(),
            guess_part_properties: self.guess_part_properties,
        }
    }
}

/// `SherlockProjectService` client.
#[derive(Debug, Clone)]
pub struct Project<C> {
    stub: ServiceStub<C>,
}

impl<C: RpcChannel> Project<C> {
    #[must_use]
    pub const fn new(channel: C, version: EngineVersion) -> Self {
        Self {
            stub: ServiceStub::new(channel, version),
        }
    }

    /// # Errors
    /// Returns [`DeleteProjectError`] on a blank name, an engine rejection,
    /// or a transport failure.
    pub async fn delete_project(&self, project: &str) -> Result<Option<i32>, DeleteProjectError> {
        self.stub.require(VersionGate::SUPPORTED, "delete_project")?;
        non_empty(project, "Project name is blank. Specify a project name.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = DeleteProjectRequest {
            project: project.to_owned(),
        };
        let response: StatusResponse = self.stub.call(paths::DELETE_PROJECT, request).await?;
        Ok(Some(interpret(&response)?))
    }

    /// Create an empty project.
    ///
    /// # Errors
    /// Returns [`AddProjectError`] on a blank name, an engine rejection, or a
    /// transport failure.
    pub async fn add_project(
        &self,
        project: &str,
        category: &str,
        description: &str,
    ) -> Result<Option<i32>, AddProjectError> {
        self.stub.require(VersionGate::SUPPORTED, "add_project")?;
        non_empty(project, "Project name cannot be blank")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = AddProjectRequest {
            project: project.to_owned(),
            category: category.to_owned(),
            description: description.to_owned(),
        };
        let response: StatusResponse = self.stub.call(paths::ADD_PROJECT, request).await?;
        Ok(Some(interpret(&response)?))
    }

    /// Import an ODB++ archive into a new or existing project.
    ///
    /// # Errors
    /// Returns [`ImportOdbError`] without an archive path, on an engine
    /// rejection, or on a transport failure.
    pub async fn import_odb_archive(
        &self,
        import: OdbImport,
    ) -> Result<Option<i32>, ImportOdbError> {
        self.stub
            .require(VersionGate::SUPPORTED, "import_odb_archive")?;
        non_empty(&import.archive_file, "Archive path is required.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = ImportOdbRequest {
            archive_file: import.archive_file,
            process_layer_thickness: import.process_layer_thickness,
            include_other_layers: import.include_other_layers,
            process_cutout_file: import.process_cutout_file,
            guess_part_properties: import.guess_part_properties,
            project: import.project.unwrap_or_default(),
            cca_name: import.cca_name.unwrap_or_default(),
        };
        let response: StatusResponse = self.stub.call(paths::IMPORT_ODB_ARCHIVE, request).await?;
        Ok(Some(interpret(&response)?))
    }

    /// Import an IPC-2581 archive into a new or existing project.
    ///
    /// # Errors
    /// Returns [`ImportIpc2581Error`] without an archive path, on an engine
    /// rejection, or on a transport failure.
    pub async fn import_ipc2581_archive(
        &self,
        import: Ipc2581Import,
    ) -> Result<Option<i32>, ImportIpc2581Error> {
        self.stub
            .require(VersionGate::SUPPORTED, "import_ipc2581_archive")?;
        non_empty(&import.archive_file, "Archive file path is required.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = ImportIpc2581Request {
            archive_file: import.archive_file,
            include_other_layers: import.include_other_layers,
            guess_part_properties: import.guess_part_properties,
            project: import.project.unwrap_or_default(),
            cca_name: import.cca_name.unwrap_or_default(),
        };
        let response: StatusResponse = self
            .stub
            .call(paths::IMPORT_IPC2581_ARCHIVE, request)
            .await?;
        Ok(Some(interpret(&response)?))
    }

    /// Write a project report to `report_file` on the engine host.
    ///
    /// # Errors
    /// Returns [`GenerateProjectReportError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn generate_project_report(
        &self,
        project: &str,
        author: &str,
        company: &str,
        report_file: &str,
    ) -> Result<Option<i32>, GenerateProjectReportError> {
        self.stub
            .require(VersionGate::SUPPORTED, "generate_project_report")?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(author, "Author name is invalid.")?;
        non_empty(company, "Company name is invalid.")?;
        non_empty(report_file, "Report path is required.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = GenerateProjectReportRequest {
            project: project.to_owned(),
            author: author.to_owned(),
            company: company.to_owned(),
            report_file: report_file.to_owned(),
        };
        let response: StatusResponse = self
            .stub
            .call(paths::GENERATE_PROJECT_REPORT, request)
            .await?;
        Ok(Some(interpret(&response)?))
    }

    /// CCAs of a project; all of them when `cca_names` is empty.
    ///
    /// # Errors
    /// Returns [`ListCcasError`] on invalid arguments, an engine rejection
    /// (one message per failing CCA when given), or a transport failure.
    pub async fn list_ccas(
        &self,
        project: &str,
        cca_names: &[&str],
    ) -> Result<Option<Vec<CcaInfo>>, ListCcasError> {
        self.stub.require(CCA_CALLS, "list_ccas")?;
        non_empty(project, "Project name is invalid.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = ListCcasRequest {
            project: project.to_owned(),
            cca_names: cca_names.iter().map(|&name| name.to_owned()).collect(),
        };
        let response: ListCcasResponse = self.stub.call(paths::LIST_CCAS, request).await?;
        interpret(&response)?;
        Ok(Some(response.ccas.into_iter().map(CcaInfo::from).collect()))
    }

    /// Add CCAs to a project.
    ///
    /// # Errors
    /// Returns [`AddCcaError`] naming the first invalid CCA, an engine
    /// rejection, or a transport failure.
    pub async fn add_cca(
        &self,
        project: &str,
        ccas: &[CcaProperties],
    ) -> Result<Option<i32>, AddCcaError> {
        self.stub.require(CCA_CALLS, "add_cca")?;
        non_empty(project, "Project name is invalid.")?;
        ensure(!ccas.is_empty(), "One or more CCAs are required.")?;
        for (i, cca) in ccas.iter().enumerate() {
            cca.check(i).map_err(invalid)?;
        }

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = AddCcaRequest {
            project: project.to_owned(),
            ccas: ccas.iter().map(CcaProperties::to_wire).collect(),
        };
        let response: AddCcaResponse = self.stub.call(paths::ADD_CCA, request).await?;
        Ok(Some(interpret(&response)?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn cca_checks_name_the_index() {
        let cca = CcaProperties {
            cca_name: "Main Board".to_owned(),
            default_part_temp_rise: Some(f64::INFINITY),
            ..CcaProperties::default()
        };
        assert_eq!(
            cca.check(3).unwrap_err(),
            "Default part temperature rise is invalid for CCA 3."
        );
        assert_eq!(
            CcaProperties::default().check(0).unwrap_err(),
            "CCA name is invalid for CCA 0."
        );
    }

    #[test]
    fn unset_cca_properties_stay_unset_on_the_wire() {
        let wire = CcaProperties {
            cca_name: "Card".to_owned(),
            default_stencil_thickness: Some(5.0),
            ..CcaProperties::default()
        }
        .to_wire();
        assert_eq!(wire.description, None);
        assert_eq!(wire.guess_part_properties, None);
        assert!(wire.default_stencil_thickness.is_some());
    }

    #[test]
    fn listed_ccas_keep_their_nesting() {
        let info = CcaInfo::from(wire::CcaInfo {
            cca_name: "Main".to_owned(),
            sub_ccas: vec![wire::CcaInfo {
                cca_name: "Daughter".to_owned(),
                ..wire::CcaInfo::default()
            }],
            ..wire::CcaInfo::default()
        });
        assert_eq!(info.sub_ccas.len(), 1);
        assert_eq!(info.sub_ccas[0].cca_name, "Daughter");
    }

    #[test]
    fn imports_enable_processing_by_default() {
        let import = OdbImport::new("Tutorial.tgz");
        assert!(import.process_layer_thickness && import.guess_part_properties);
        assert_eq!(import.project, None);
        assert!(Ipc2581Import::new("board.zip").include_other_layers);
    }
}
