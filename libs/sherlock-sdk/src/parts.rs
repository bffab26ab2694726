//! Parts lists and part placement.

use sherlock_transport_grpc::RpcChannel;

use crate::cache::EnumCache;
use crate::contract::interpret;
use crate::errors::{
    EnableLeadModelingError, ExportPartsListError, Failure, GetPartLocationError,
    GetPartsListPropertiesError, ImportPartsListError, UpdatePartsListError, UpdatePartsLocationsByFileError,
    UpdatePartsLocationsError,
};
use crate::proto::parts::{
    self as wire, EnableLeadModelingRequest, ExportPartsListRequest, GetPartLocationRequest,
    GetPartLocationResponse, GetPartsListPropertiesRequest, GetPartsListPropertiesResponse,
    ImportPartsListRequest, UpdatePartsListRequest, UpdatePartsLocationsByFileRequest, UpdatePartsLocationsRequest,
    UpdateResponse, paths,
};
use crate::proto::{ReturnCode, ReturnCodeResponse, StatusResponse};
use crate::stub::ServiceStub;
use crate::validate::{ensure, non_empty};
use crate::version::{EngineVersion, VersionGate};

nested_reply!(UpdateResponse, update_error);
nested_reply!(GetPartLocationResponse);

/// How library parts are matched against the parts list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MatchingMode {
    /// Match on part number and manufacturer.
    #[default]
    Both = 0,
    /// Match on part number only.
    Part = 1,
}

/// What to do with duplicate part numbers in the library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum DuplicationMode {
    #[default]
    First = 0,
    Error = 1,
    Ignore = 2,
}

/// Placement of one part. `None` fields are left unchanged by the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartLocation {
    pub ref_des: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// Degrees, within `[-360, 360]`.
    pub rotation: Option<f64>,
    /// Required whenever `x` or `y` is set.
    pub location_units: Option<String>,
    pub board_side: Option<String>,
    pub mirrored: Option<bool>,
}

impl PartLocation {
    fn units(&self) -> Option<&str> {
        self.location_units.as_deref().filter(|u| !u.is_empty())
    }

    /// Coordinates, then rotation. Units must already be known to be listed.
    fn check_placement(&self) -> Result<(), &'static str> {
        for (value, message) in [
            (self.x, "Location X coordinate is invalid."),
            (self.y, "Location Y coordinate is invalid."),
        ] {
            let Some(value) = value else { continue };
            if self.units().is_none() {
                return Err("Location units are missing.");
            }
            if !value.is_finite() {
                return Err(message);
            }
        }
        if self
            .rotation
            .is_some_and(|r| !r.is_finite() || !(-360.0..=360.0).contains(&r))
        {
            return Err("Location rotation is invalid.");
        }
        Ok(())
    }

    fn to_wire(&self) -> wire::PartLocation {
        fn number(value: Option<f64>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }
        wire::PartLocation {
            ref_des: self.ref_des.clone(),
            x: number(self.x),
            y: number(self.y),
            rotation: number(self.rotation),
            location_units: self.location_units.clone().unwrap_or_default(),
            board_side: self.board_side.clone().unwrap_or_default(),
            mirrored: self
                .mirrored
                .map(|m| if m { "True" } else { "False" }.to_owned())
                .unwrap_or_default(),
        }
    }

    fn from_wire(location: wire::PartLocation) -> Self {
        fn text(value: String) -> Option<String> {
            (!value.is_empty()).then_some(value)
        }
        fn number(value: &str) -> Option<f64> {
            value.trim().parse().ok()
        }
        Self {
            x: number(&location.x),
            y: number(&location.y),
            rotation: number(&location.rotation),
            mirrored: match location.mirrored.to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            ref_des: location.ref_des,
            location_units: text(location.location_units),
            board_side: text(location.board_side),
        }
    }
}

/// Properties of one part, or the engine's reason for not reporting them.
#[derive(Debug, Clone, PartialEq)]
pub struct PartProperties {
    pub ref_des: String,
    pub return_code: ReturnCode,
    /// `(name, value)` in engine order.
    pub properties: Vec<(String, String)>,
}

impl From<wire::PartProperties> for PartProperties {
    fn from(part: wire::PartProperties) -> Self {
        Self {
            ref_des: part.ref_des,
            return_code: part.return_code.unwrap_or_else(|| ReturnCode::ok("")),
            properties: part
                .properties
                .into_iter()
                .map(|p| (p.name, p.value))
                .collect(),
        }
    }
}

/// Parts list properties arrived with 2025 R1.
const PARTS_LIST_PROPERTIES: VersionGate = VersionGate::since(251);

/// `SherlockPartsService` client.
#[derive(Debug)]
pub struct Parts<C> {
    stub: ServiceStub<C>,
    location_units: EnumCache,
    board_sides: EnumCache,
}

impl<C: RpcChannel> Parts<C> {
    #[must_use]
    pub fn new(channel: C, version: EngineVersion) -> Self {
        Self {
            stub: ServiceStub::new(channel, version),
            location_units: EnumCache::new(),
            board_sides: EnumCache::new(),
        }
    }

    /// Update the parts list of a CCA from a part library.
    ///
    /// # Errors
    /// Returns [`UpdatePartsListError`] on invalid arguments, an engine
    /// rejection (with per-part messages when given), or a transport failure.
    pub async fn update_parts_list(
        &self,
        project: &str,
        cca_name: &str,
        part_library: &str,
        matching: MatchingMode,
        duplication: DuplicationMode,
    ) -> Result<Option<i32>, UpdatePartsListError> {
        self.stub.require(VersionGate::SUPPORTED, "update_parts_list")?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;
        non_empty(part_library, "Parts library is invalid.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = UpdatePartsListRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
            part_library: part_library.to_owned(),
            matching: matching as i32,
            duplication: duplication as i32,
        };
        let response: UpdateResponse = self.stub.call(paths::UPDATE_PARTS_LIST, request).await?;
        Ok(Some(interpret(&response)?))
    }

    /// Update the placement of parts of a CCA.
    ///
    /// # Errors
    /// Returns [`UpdatePartsLocationsError`] naming the first invalid
    /// location, an engine rejection, or a transport failure.
    pub async fn update_parts_locations(
        &self,
        project: &str,
        cca_name: &str,
        locations: &[PartLocation],
    ) -> Result<Option<i32>, UpdatePartsLocationsError> {
        self.stub
            .require(VersionGate::SUPPORTED, "update_parts_locations")?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;
        ensure(
            !locations.is_empty(),
            "Part location properties are missing.",
        )?;
        for (i, location) in locations.iter().enumerate() {
            self.check_location(location)
                .await
                .map_err(|m| Failure::Invalid(format!("Invalid part location {i}: {m}")))?;
        }

        if !self.stub.connected().await {
            return Ok(None);
        }
        let request = UpdatePartsLocationsRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
            part_loc: locations.iter().map(PartLocation::to_wire).collect(),
        };
        let response: UpdateResponse = self
            .stub
            .call(paths::UPDATE_PARTS_LOCATIONS, request)
            .await?;
        Ok(Some(interpret(&response)?))
    }

    /// Every field of one location, units and board side included.
    async fn check_location(&self, location: &PartLocation) -> Result<(), &'static str> {
        if location.ref_des.is_empty() {
            return Err("Reference designator is missing.");
        }
        if let Some(units) = location.units()
            && !self
                .stub
                .allowed(&self.location_units, paths::GET_PART_LOCATION_UNITS, units)
                .await
        {
            return Err("Location units are invalid.");
        }
        location.check_placement()?;
        if let Some(side) = location.board_side.as_deref().filter(|s| !s.is_empty())
            && !self
                .stub
                .allowed(&self.board_sides, paths::GET_BOARD_SIDES, side)
                .await
        {
            return Err("Location board side is invalid.");
        }
        Ok(())
    }

    /// Update part placement from a CSV file on the engine host.
    ///
    /// # Errors
    /// Returns [`UpdatePartsLocationsByFileError`] on invalid arguments, an
    /// engine rejection, or a transport failure.
    pub async fn update_parts_locations_by_file(
        &self,
        project: &str,
        cca_name: &str,
        file_path: &str,
    ) -> Result<Option<i32>, UpdatePartsLocationsByFileError> {
        self.stub.require(VersionGate::SUPPORTED, "update_parts_locations_by_file")?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;
        non_empty(file_path, "File path is required.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = UpdatePartsLocationsByFileRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
            file_path: file_path.to_owned(),
        };
        let response: UpdateResponse = self
            .stub
            .call(paths::UPDATE_PARTS_LOCATIONS_BY_FILE, request)
            .await?;
        Ok(Some(interpret(&response)?))
    }

    /// Import a parts list file into a CCA, optionally validating it
    /// against the part libraries.
    ///
    /// # Errors
    /// Returns [`ImportPartsListError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn import_parts_list(
        &self,
        project: &str,
        cca_name: &str,
        import_file: &str,
        validate: bool,
    ) -> Result<Option<i32>, ImportPartsListError> {
        self.stub.require(VersionGate::SUPPORTED, "import_parts_list")?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;
        non_empty(import_file, "File path is required.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = ImportPartsListRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
            import_file: import_file.to_owned(),
            validate,
        };
        let response: ReturnCodeResponse =
            self.stub.call(paths::IMPORT_PARTS_LIST, request).await?;
        Ok(Some(interpret(&response)?))
    }

    /// Current placement of the parts named in `ref_des` (comma separated).
    ///
    /// # Errors
    /// Returns [`GetPartLocationError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn get_part_location(
        &self,
        project: &str,
        cca_name: &str,
        ref_des: &str,
        location_units: &str,
    ) -> Result<Option<Vec<PartLocation>>, GetPartLocationError> {
        self.stub.require(VersionGate::SUPPORTED, "get_part_location")?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;
        non_empty(ref_des, "Ref Des is invalid.")?;
        non_empty(location_units, "Location unit is invalid.")?;
        ensure(
            self.stub
                .allowed(
                    &self.location_units,
                    paths::GET_PART_LOCATION_UNITS,
                    location_units,
                )
                .await,
            "Location unit is invalid.",
        )?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = GetPartLocationRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
            ref_des: ref_des.to_owned(),
            location_units: location_units.to_owned(),
        };
        let response: GetPartLocationResponse =
            self.stub.call(paths::GET_PART_LOCATION, request).await?;
        interpret(&response)?;
        Ok(Some(
            response
                .locations
                .into_iter()
                .map(PartLocation::from_wire)
                .collect(),
        ))
    }

    /// Export the parts list of a CCA to `export_file`.
    ///
    /// # Errors
    /// Returns [`ExportPartsListError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn export_parts_list(
        &self,
        project: &str,
        cca_name: &str,
        export_file: &str,
    ) -> Result<Option<i32>, ExportPartsListError> {
        self.stub.require(VersionGate::SUPPORTED, "export_parts_list")?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;
        non_empty(export_file, "Export filepath is required.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = ExportPartsListRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
            export_file: export_file.to_owned(),
        };
        let response: StatusResponse = self.stub.call(paths::EXPORT_PARTS_LIST, request).await?;
        Ok(Some(interpret(&response)?))
    }

    /// # Errors
    /// Returns [`EnableLeadModelingError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn enable_lead_modeling(
        &self,
        project: &str,
        cca_name: &str,
    ) -> Result<Option<i32>, EnableLeadModelingError> {
        self.stub.require(VersionGate::SUPPORTED, "enable_lead_modeling")?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = EnableLeadModelingRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
        };
        let response: StatusResponse = self
            .stub
            .call(paths::ENABLE_LEAD_MODELING, request)
            .await?;
        Ok(Some(interpret(&response)?))
    }

    /// Properties of the parts named in `ref_des`, or of every part when it
    /// is empty. A part the engine cannot report on carries a failing
    /// `return_code` instead of failing the call.
    ///
    /// # Errors
    /// Returns [`GetPartsListPropertiesError`] on invalid arguments or a
    /// transport failure.
    pub async fn get_parts_list_properties(
        &self,
        project: &str,
        cca_name: &str,
        ref_des: &[String],
    ) -> Result<Option<Vec<PartProperties>>, GetPartsListPropertiesError> {
        self.stub
            .require(PARTS_LIST_PROPERTIES, "get_parts_list_properties")?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;
        for (i, name) in ref_des.iter().enumerate() {
            non_empty(name, &format!("Reference designator {i} is invalid."))?;
        }

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = GetPartsListPropertiesRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
            ref_des: ref_des.to_vec(),
        };
        let response: GetPartsListPropertiesResponse = self
            .stub
            .call(paths::GET_PARTS_LIST_PROPERTIES, request)
            .await?;
        Ok(Some(response.parts.into_iter().map(Into::into).collect()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use sherlock_transport_grpc::MockChannel;

    use super::*;
    use crate::proto::NameListResponse;

    fn names(list: &[&str]) -> NameListResponse {
        NameListResponse {
            return_code: Some(ReturnCode::ok("")),
            names: list.iter().map(|&n| n.to_owned()).collect(),
        }
    }

    fn placed(ref_des: &str) -> PartLocation {
        PartLocation {
            ref_des: ref_des.to_owned(),
            x: Some(1.5),
            y: Some(-2.0),
            rotation: Some(90.0),
            location_units: Some("in".to_owned()),
            board_side: Some("TOP".to_owned()),
            mirrored: Some(false),
        }
    }

    #[test]
    fn placement_checks_run_in_field_order() {
        let mut location = placed("C1");
        location.location_units = None;
        location.y = Some(f64::NAN);
        assert_eq!(location.check_placement(), Err("Location units are missing."));

        let mut location = placed("C1");
        location.x = Some(f64::INFINITY);
        location.rotation = Some(361.0);
        assert_eq!(location.check_placement(), Err("Location X coordinate is invalid."));

        let mut location = placed("C1");
        location.y = Some(f64::NAN);
        assert_eq!(location.check_placement(), Err("Location Y coordinate is invalid."));

        let mut location = placed("C1");
        location.rotation = Some(361.0);
        assert_eq!(location.check_placement(), Err("Location rotation is invalid."));
    }

    #[test]
    fn rotation_alone_needs_no_units() {
        let location = PartLocation {
            ref_des: "U3".to_owned(),
            rotation: Some(-360.0),
            location_units: Some(String::new()),
            ..PartLocation::default()
        };
        assert!(location.check_placement().is_ok());
        assert_eq!(location.units(), None);
    }

    #[tokio::test]
    async fn units_are_looked_up_before_coordinates() {
        let mock = MockChannel::new();
        mock.respond_always(paths::GET_PART_LOCATION_UNITS, &names(&["in", "mm"]));
        let parts = Parts::new(mock, EngineVersion::Skip);

        let mut location = placed("C1");
        location.location_units = Some("furlong".to_owned());
        location.x = Some(f64::NAN);
        assert_eq!(
            parts.check_location(&location).await,
            Err("Location units are invalid.")
        );
        assert_eq!(
            parts.check_location(&PartLocation::default()).await,
            Err("Reference designator is missing.")
        );
    }

    #[tokio::test]
    async fn board_side_comes_after_rotation() {
        let mock = MockChannel::new();
        mock.respond_always(paths::GET_BOARD_SIDES, &names(&["TOP", "BOTTOM"]));
        let parts = Parts::new(mock, EngineVersion::Skip);

        let mut location = placed("C1");
        location.board_side = Some("MIDDLE".to_owned());
        location.rotation = Some(400.0);
        assert_eq!(
            parts.check_location(&location).await,
            Err("Location rotation is invalid.")
        );

        location.rotation = Some(0.0);
        assert_eq!(
            parts.check_location(&location).await,
            Err("Location board side is invalid.")
        );
    }

    #[test]
    fn wire_form_leaves_unset_fields_empty() {
        let location = PartLocation {
            ref_des: "R7".to_owned(),
            mirrored: Some(true),
            ..PartLocation::default()
        };
        let wire = location.to_wire();
        assert_eq!(wire.ref_des, "R7");
        assert!(wire.x.is_empty() && wire.location_units.is_empty());
        assert_eq!(wire.mirrored, "True");
    }

    #[test]
    fn engine_locations_are_parsed_back() {
        let parsed = PartLocation::from_wire(placed("C1").to_wire());
        assert_eq!(parsed, placed("C1"));

        let sparse = PartLocation::from_wire(wire::PartLocation {
            ref_des: "C2".to_owned(),
            ..wire::PartLocation::default()
        });
        assert_eq!(sparse.x, None);
        assert_eq!(sparse.board_side, None);
        assert_eq!(sparse.mirrored, None);
    }
}
