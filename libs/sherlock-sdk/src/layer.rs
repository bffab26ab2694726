//! Board layers: mount points, fixtures, test points and potting regions.

use std::path::Path;

use sherlock_transport_grpc::RpcChannel;

use crate::contract::interpret;
use crate::errors::{
    AddPottingRegionError, CopyPottingRegionsError, DeleteIctFixturesError,
    DeleteMountPointsError, DeletePottingRegionsError, DeleteTestPointsError,
    ExportMountPointsError, ExportTestFixturesError, ExportTestPointsError, Failure,
    ListLayersError, UpdateMountPointsByFileError, UpdatePottingRegionError,
};
use crate::proto::layer::{
    self as wire, AddPottingRegionRequest, CcaRequest, CopyPottingRegionRequest,
    DeletePottingRegionRequest, ExportLayerItemsRequest, ListLayersResponse,
    PottingRegionResponses, UpdateMountPointsByFileRequest, UpdateMountPointsByFileResponse,
    UpdatePottingRegionRequest, paths, potting_region,
};
use crate::proto::{ReturnCode, ReturnCodeWithErrors, StatusResponse};
use crate::stub::ServiceStub;
use crate::validate::{ensure, non_empty};
use crate::version::{EngineVersion, VersionGate};

nested_reply!(UpdateMountPointsByFileResponse, update_error);
nested_reply!(ListLayersResponse);

/// One layer of a CCA as listed by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerInfo {
    pub layer_id: String,
    pub name: String,
    pub layer_type: String,
}

/// Outline of a potting region. Angles are in degrees.
#[derive(Debug, Clone, PartialEq)]
pub enum PottingShape {
    Polygon {
        points: Vec<(f64, f64)>,
        rotation: f64,
    },
    Rectangle {
        length: f64,
        width: f64,
        center_x: f64,
        center_y: f64,
        rotation: f64,
    },
    Circle {
        diameter: f64,
        center_x: f64,
        center_y: f64,
        rotation: f64,
    },
}

impl PottingShape {
    fn is_valid(&self) -> bool {
        match self {
            Self::Polygon { points, rotation } => {
                points.len() >= 3
                    && rotation.is_finite()
                    && points.iter().all(|(x, y)| x.is_finite() && y.is_finite())
            }
            Self::Rectangle {
                length,
                width,
                center_x,
                center_y,
                rotation,
            } => {
                *length > 0.0
                    && *width > 0.0
                    && length.is_finite()
                    && width.is_finite()
                    && center_x.is_finite()
                    && center_y.is_finite()
                    && rotation.is_finite()
            }
            Self::Circle {
                diameter,
                center_x,
                center_y,
                rotation,
            } => {
                *diameter > 0.0
                    && diameter.is_finite()
                    && center_x.is_finite()
                    && center_y.is_finite()
                    && rotation.is_finite()
            }
        }
    }

    fn to_wire(&self) -> potting_region::Shape {
        match self {
            Self::Polygon { points, rotation } => {
                potting_region::Shape::Polygonal(wire::PolygonalShape {
                    points: points
                        .iter()
                        .map(|&(x, y)| wire::Point { x, y })
                        .collect(),
                    rotation: *rotation,
                })
            }
            Self::Rectangle {
                length,
                width,
                center_x,
                center_y,
                rotation,
            } => potting_region::Shape::Rectangular(wire::RectangularShape {
                length: *length,
                width: *width,
                center_x: *center_x,
                center_y: *center_y,
                rotation: *rotation,
            }),
            Self::Circle {
                diameter,
                center_x,
                center_y,
                rotation,
            } => potting_region::Shape::Circular(wire::CircularShape {
                diameter: *diameter,
                center_x: *center_x,
                center_y: *center_y,
                rotation: *rotation,
            }),
        }
    }
}

/// Potting region to add to a CCA.
#[derive(Debug, Clone, PartialEq)]
pub struct PottingRegion {
    pub cca_name: String,
    pub potting_id: String,
    pub potting_side: String,
    pub potting_material: String,
    pub potting_units: String,
    pub potting_thickness: f64,
    pub potting_standoff: f64,
    pub shape: PottingShape,
}

impl PottingRegion {
    fn check(&self, i: usize) -> Result<(), Failure> {
        non_empty(
            &self.cca_name,
            &format!("CCA name is invalid for potting region {i}."),
        )?;
        non_empty(
            &self.potting_id,
            &format!("Potting ID is invalid for potting region {i}."),
        )?;
        ensure(
            self.shape.is_valid(),
            format!("Shape invalid for potting region {i}."),
        )
    }

    fn to_wire(&self) -> wire::PottingRegion {
        wire::PottingRegion {
            cca_name: self.cca_name.clone(),
            potting_id: self.potting_id.clone(),
            potting_side: self.potting_side.clone(),
            potting_material: self.potting_material.clone(),
            potting_units: self.potting_units.clone(),
            potting_thickness: self.potting_thickness,
            potting_standoff: self.potting_standoff,
            shape: Some(self.shape.to_wire()),
        }
    }
}

/// New contents for the region currently named `potting_region_id_to_update`.
#[derive(Debug, Clone, PartialEq)]
pub struct PottingRegionUpdate {
    pub potting_region_id_to_update: String,
    pub potting_region: PottingRegion,
}

impl PottingRegionUpdate {
    fn check(&self, i: usize) -> Result<(), Failure> {
        non_empty(
            &self.potting_region_id_to_update,
            &format!("Potting region ID to update is invalid for potting region {i}."),
        )?;
        self.potting_region.check(i)
    }
}

/// Copy of an existing region, centred on `(center_x, center_y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PottingRegionCopy {
    pub cca_name: String,
    pub potting_id: String,
    pub copy_potting_id: String,
    pub center_x: f64,
    pub center_y: f64,
}

impl PottingRegionCopy {
    fn check(&self, i: usize) -> Result<(), Failure> {
        non_empty(
            &self.cca_name,
            &format!("CCA name is invalid for potting region copy {i}."),
        )?;
        non_empty(
            &self.potting_id,
            &format!("Potting ID is invalid for potting region copy {i}."),
        )?;
        non_empty(
            &self.copy_potting_id,
            &format!("Copy potting ID is invalid for potting region copy {i}."),
        )?;
        ensure(
            self.potting_id != self.copy_potting_id,
            format!("Copy potting ID must differ from potting ID for potting region copy {i}."),
        )?;
        ensure(
            self.center_x.is_finite() && self.center_y.is_finite(),
            format!("Center is invalid for potting region copy {i}."),
        )
    }
}

/// Region to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PottingRegionDelete {
    pub cca_name: String,
    pub potting_id: String,
}

/// Potting regions arrived with 2024 R2; editing them with 2025 R1.
const POTTING_REGIONS: VersionGate = VersionGate::since(242);
const POTTING_EDITS: VersionGate = VersionGate::since(251);
/// Layer listing arrived with 2025 R1.
const LAYER_LISTING: VersionGate = VersionGate::since(251);

/// `SherlockLayerService` client.
#[derive(Debug, Clone)]
pub struct Layer<C> {
    stub: ServiceStub<C>,
}

impl<C: RpcChannel> Layer<C> {
    #[must_use]
    pub const fn new(channel: C, version: EngineVersion) -> Self {
        Self {
            stub: ServiceStub::new(channel, version),
        }
    }

    /// Replace the mount points of a CCA with the ones in `file_path`.
    ///
    /// # Errors
    /// Returns [`UpdateMountPointsByFileError`] on invalid arguments, an
    /// engine rejection (possibly one message per rejected row), or a
    /// transport failure.
    pub async fn update_mount_points_by_file(
        &self,
        project: &str,
        cca_name: &str,
        file_path: &str,
    ) -> Result<Option<i32>, UpdateMountPointsByFileError> {
        self.stub
            .require(VersionGate::SUPPORTED, "update_mount_points_by_file")?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;
        non_empty(file_path, "File path is required.")?;
        ensure(Path::new(file_path).exists(), "File path is invalid.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = UpdateMountPointsByFileRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
            file_path: file_path.to_owned(),
        };
        let response: UpdateMountPointsByFileResponse = self
            .stub
            .call(paths::UPDATE_MOUNT_POINTS_BY_FILE, request)
            .await?;
        Ok(Some(interpret(&response)?))
    }

    /// # Errors
    /// Returns [`DeleteMountPointsError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn delete_all_mount_points(
        &self,
        project: &str,
        cca_name: &str,
    ) -> Result<Option<i32>, DeleteMountPointsError> {
        Ok(self
            .delete_all((paths::DELETE_ALL_MOUNT_POINTS, "delete_all_mount_points"), project, cca_name)
            .await?)
    }

    /// # Errors
    /// Returns [`DeleteIctFixturesError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn delete_all_ict_fixtures(
        &self,
        project: &str,
        cca_name: &str,
    ) -> Result<Option<i32>, DeleteIctFixturesError> {
        Ok(self
            .delete_all((paths::DELETE_ALL_ICT_FIXTURES, "delete_all_ict_fixtures"), project, cca_name)
            .await?)
    }

    /// # Errors
    /// Returns [`DeleteTestPointsError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn delete_all_test_points(
        &self,
        project: &str,
        cca_name: &str,
    ) -> Result<Option<i32>, DeleteTestPointsError> {
        Ok(self
            .delete_all((paths::DELETE_ALL_TEST_POINTS, "delete_all_test_points"), project, cca_name)
            .await?)
    }

    async fn delete_all(
        &self,
        (path, function): (&'static str, &'static str),
        project: &str,
        cca_name: &str,
    ) -> Result<Option<i32>, Failure> {
        self.stub.require(VersionGate::SUPPORTED, function)?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = CcaRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
        };
        let response: StatusResponse = self.stub.call(path, request).await?;
        interpret(&response).map(Some)
    }

    /// Write every mount point of a CCA to `export_file`.
    ///
    /// # Errors
    /// Returns [`ExportMountPointsError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn export_all_mount_points(
        &self,
        project: &str,
        cca_name: &str,
        export_file: &str,
    ) -> Result<Option<i32>, ExportMountPointsError> {
        Ok(self
            .export_all(
                (paths::EXPORT_ALL_MOUNT_POINTS, "export_all_mount_points"),
                project,
                cca_name,
                export_file,
            )
            .await?)
    }

    /// Write every test point of a CCA to `export_file`.
    ///
    /// # Errors
    /// Returns [`ExportTestPointsError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn export_all_test_points(
        &self,
        project: &str,
        cca_name: &str,
        export_file: &str,
    ) -> Result<Option<i32>, ExportTestPointsError> {
        Ok(self
            .export_all(
                (paths::EXPORT_ALL_TEST_POINTS, "export_all_test_points"),
                project,
                cca_name,
                export_file,
            )
            .await?)
    }

    /// # Errors
    /// Returns [`ExportTestFixturesError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn export_all_test_fixtures(
        &self,
        project: &str,
        cca_name: &str,
        export_file: &str,
    ) -> Result<Option<i32>, ExportTestFixturesError> {
        Ok(self
            .export_all(
                (paths::EXPORT_ALL_TEST_FIXTURES, "export_all_test_fixtures"),
                project,
                cca_name,
                export_file,
            )
            .await?)
    }

    async fn export_all(
        &self,
        (path, function): (&'static str, &'static str),
        project: &str,
        cca_name: &str,
        export_file: &str,
    ) -> Result<Option<i32>, Failure> {
        self.stub.require(VersionGate::SUPPORTED, function)?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;
        non_empty(export_file, "File path is required.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = ExportLayerItemsRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
            file_path: export_file.to_owned(),
        };
        let response: StatusResponse = self.stub.call(path, request).await?;
        interpret(&response).map(Some)
    }

    /// # Errors
    /// Returns [`ListLayersError`] on invalid arguments, an engine rejection,
    /// or a transport failure.
    pub async fn list_layers(
        &self,
        project: &str,
        cca_name: &str,
    ) -> Result<Option<Vec<LayerInfo>>, ListLayersError> {
        self.stub.require(LAYER_LISTING, "list_layers")?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = CcaRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
        };
        let response: ListLayersResponse = self.stub.call(paths::LIST_LAYERS, request).await?;
        interpret(&response)?;
        Ok(Some(
            response
                .layers
                .into_iter()
                .map(|layer| LayerInfo {
                    layer_id: layer.layer_id,
                    name: layer.name,
                    layer_type: layer.layer_type,
                })
                .collect(),
        ))
    }

    /// Add potting regions, in order, to the CCAs they name.
    ///
    /// # Errors
    /// Returns [`AddPottingRegionError`] naming the first invalid region, an
    /// engine rejection (possibly per region), or a transport failure.
    pub async fn add_potting_region(
        &self,
        project: &str,
        regions: &[PottingRegion],
    ) -> Result<Option<i32>, AddPottingRegionError> {
        self.stub.require(POTTING_REGIONS, "add_potting_region")?;
        non_empty(project, "Project name is invalid.")?;
        ensure(
            !regions.is_empty(),
            "One or more potting regions are required.",
        )?;
        for (i, region) in regions.iter().enumerate() {
            region.check(i)?;
        }

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = AddPottingRegionRequest {
            project: project.to_owned(),
            potting_regions: regions.iter().map(PottingRegion::to_wire).collect(),
        };
        let response: ReturnCodeWithErrors =
            self.stub.call(paths::ADD_POTTING_REGION, request).await?;
        Ok(Some(interpret(&response)?))
    }

    /// Replace existing potting regions.
    ///
    /// The engine answers with one status per update, in request order; a
    /// failing entry does not fail the call.
    ///
    /// # Errors
    /// Returns [`UpdatePottingRegionError`] naming the first invalid update,
    /// or a transport failure.
    pub async fn update_potting_region(
        &self,
        project: &str,
        updates: &[PottingRegionUpdate],
    ) -> Result<Option<Vec<ReturnCode>>, UpdatePottingRegionError> {
        self.stub.require(POTTING_EDITS, "update_potting_region")?;
        non_empty(project, "Project name is invalid.")?;
        ensure(
            !updates.is_empty(),
            "One or more potting regions are required.",
        )?;
        for (i, update) in updates.iter().enumerate() {
            update.check(i)?;
        }

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = UpdatePottingRegionRequest {
            project: project.to_owned(),
            update_potting_regions: updates
                .iter()
                .map(|update| wire::PottingRegionUpdateData {
                    potting_region_id_to_update: update.potting_region_id_to_update.clone(),
                    potting_region: Some(update.potting_region.to_wire()),
                })
                .collect(),
        };
        let response: PottingRegionResponses = self
            .stub
            .call(paths::UPDATE_POTTING_REGION, request)
            .await?;
        Ok(Some(response.return_codes))
    }

    /// Copy potting regions under new IDs; one status per copy.
    ///
    /// # Errors
    /// Returns [`CopyPottingRegionsError`] naming the first invalid copy, or a
    /// transport failure.
    pub async fn copy_potting_regions(
        &self,
        project: &str,
        copies: &[PottingRegionCopy],
    ) -> Result<Option<Vec<ReturnCode>>, CopyPottingRegionsError> {
        self.stub.require(POTTING_EDITS, "copy_potting_regions")?;
        non_empty(project, "Project name is invalid.")?;
        ensure(
            !copies.is_empty(),
            "One or more potting regions are required.",
        )?;
        for (i, copy) in copies.iter().enumerate() {
            copy.check(i)?;
        }

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = CopyPottingRegionRequest {
            project: project.to_owned(),
            potting_region_copy_data: copies
                .iter()
                .map(|copy| wire::PottingRegionCopyData {
                    cca_name: copy.cca_name.clone(),
                    potting_id: copy.potting_id.clone(),
                    copy_potting_id: copy.copy_potting_id.clone(),
                    center_x: copy.center_x,
                    center_y: copy.center_y,
                })
                .collect(),
        };
        let response: PottingRegionResponses = self
            .stub
            .call(paths::COPY_POTTING_REGION, request)
            .await?;
        Ok(Some(response.return_codes))
    }

    /// Delete potting regions; one status per region.
    ///
    /// # Errors
    /// Returns [`DeletePottingRegionsError`] naming the first invalid entry,
    /// or a transport failure.
    pub async fn delete_potting_regions(
        &self,
        project: &str,
        regions: &[PottingRegionDelete],
    ) -> Result<Option<Vec<ReturnCode>>, DeletePottingRegionsError> {
        self.stub.require(POTTING_EDITS, "delete_potting_regions")?;
        non_empty(project, "Project name is invalid.")?;
        ensure(
            !regions.is_empty(),
            "One or more potting regions are required.",
        )?;
        for (i, region) in regions.iter().enumerate() {
            non_empty(
                &region.cca_name,
                &format!("CCA name is invalid for potting region {i}."),
            )?;
            non_empty(
                &region.potting_id,
                &format!("Potting ID is invalid for potting region {i}."),
            )?;
        }

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = DeletePottingRegionRequest {
            project: project.to_owned(),
            potting_region_delete_data: regions
                .iter()
                .map(|region| wire::PottingRegionDeleteData {
                    cca_name: region.cca_name.clone(),
                    potting_id: region.potting_id.clone(),
                })
                .collect(),
        };
        let response: PottingRegionResponses = self
            .stub
            .call(paths::DELETE_POTTING_REGION, request)
            .await?;
        Ok(Some(response.return_codes))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn rectangle(length: f64) -> PottingShape {
        PottingShape::Rectangle {
            length,
            width: 2.0,
            center_x: 0.0,
            center_y: 0.0,
            rotation: 0.0,
        }
    }

    #[test]
    fn shapes() {
        assert!(rectangle(1.0).is_valid());
        assert!(!rectangle(0.0).is_valid());
        assert!(!rectangle(f64::NAN).is_valid());

        let triangle = PottingShape::Polygon {
            points: vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)],
            rotation: 0.0,
        };
        assert!(triangle.is_valid());

        let segment = PottingShape::Polygon {
            points: vec![(0.0, 0.0), (1.0, 0.0)],
            rotation: 0.0,
        };
        assert!(!segment.is_valid());

        let circle = PottingShape::Circle {
            diameter: -1.0,
            center_x: 0.0,
            center_y: 0.0,
            rotation: 0.0,
        };
        assert!(!circle.is_valid());
    }

    #[test]
    fn copies_need_distinct_ids() {
        let copy = PottingRegionCopy {
            cca_name: "Main Board".to_owned(),
            potting_id: "same_id".to_owned(),
            copy_potting_id: "same_id".to_owned(),
            center_x: 0.0,
            center_y: 0.0,
        };
        assert_eq!(
            copy.check(3).unwrap_err(),
            Failure::Invalid(
                "Copy potting ID must differ from potting ID for potting region copy 3."
                    .to_owned()
            )
        );

        let blank = PottingRegionCopy {
            copy_potting_id: String::new(),
            ..copy
        };
        assert_eq!(
            blank.check(0).unwrap_err(),
            Failure::Invalid("Copy potting ID is invalid for potting region copy 0.".to_owned())
        );
    }

    #[test]
    fn update_needs_the_id_it_replaces() {
        let update = PottingRegionUpdate {
            potting_region_id_to_update: String::new(),
            potting_region: PottingRegion {
                cca_name: String::new(),
                potting_id: "Region".to_owned(),
                potting_side: "TOP".to_owned(),
                potting_material: "epoxyencapsulant".to_owned(),
                potting_units: "mm".to_owned(),
                potting_thickness: 0.1,
                potting_standoff: 0.2,
                shape: rectangle(1.0),
            },
        };
        assert_eq!(
            update.check(0).unwrap_err(),
            Failure::Invalid(
                "Potting region ID to update is invalid for potting region 0.".to_owned()
            )
        );
    }

    #[test]
    fn polygon_points_keep_order_on_the_wire() {
        let shape = PottingShape::Polygon {
            points: vec![(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)],
            rotation: 45.0,
        };
        let potting_region::Shape::Polygonal(polygon) = shape.to_wire() else {
            panic!("polygon expected");
        };
        assert_eq!(
            polygon.points,
            vec![
                wire::Point { x: 1.0, y: 2.0 },
                wire::Point { x: 3.0, y: 4.0 },
                wire::Point { x: 5.0, y: 6.0 },
            ]
        );
    }
}
