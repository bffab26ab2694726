//! PCB stackup generation and layer updates.
//!
//! Thickness units, manufacturers, conductor materials, construction styles
//! and fiber materials come from engine lists fetched once. Laminate grades
//! and materials depend on the manufacturer and are looked up on every call.

use std::fmt;
use std::str::FromStr;

use sherlock_transport_grpc::RpcChannel;

use crate::cache::EnumCache;
use crate::contract::interpret;
use crate::errors::{
    Failure, GenStackupError, GetLayerCountError, GetStackupPropsError,
    GetTotalConductorThicknessError, ListConductorLayerError, ListLaminateLayersError,
    UpdateConductorLayerError, UpdateLaminateLayerError,
};
use crate::proto::StatusResponse;
use crate::proto::stackup::{
    self as wire, GenStackupRequest, GetLayerCountRequest, GetStackupPropsRequest,
    GetStackupPropsResponse, GetTotalConductorThicknessRequest,
    GetTotalConductorThicknessResponse, ListConductorLayersRequest, ListConductorLayersResponse,
    ListLaminateLayersRequest, ListLaminateLayersResponse, ListLaminateMaterialsRequest,
    ListLaminateMaterialsResponse, UpdateConductorLayerRequest, UpdateLaminateRequest, paths,
};
use crate::stub::ServiceStub;
use crate::validate::{ensure, non_empty};
use crate::version::{EngineVersion, VersionGate};

nested_reply!(ListLaminateMaterialsResponse);
nested_reply!(GetTotalConductorThicknessResponse);
nested_reply!(ListConductorLayersResponse);
nested_reply!(ListLaminateLayersResponse);
nested_reply!(GetStackupPropsResponse);

/// Laminate listing and stackup properties arrived with 2024 R2.
const LAYER_QUERIES: VersionGate = VersionGate::since(242);

/// Ounces per square foot; valid for conductor and power layer thickness
/// whatever the engine lists.
const OUNCES: &str = "oz";

/// Role of a conductor layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum LayerType {
    #[default]
    Signal = 0,
    Power = 1,
    Substrate = 2,
}

impl LayerType {
    pub const ALL: &'static [Self] = &[Self::Signal, Self::Power, Self::Substrate];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Signal => "SIGNAL",
            Self::Power => "POWER",
            Self::Substrate => "SUBSTRATE",
        }
    }

    fn from_wire(value: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| *t as i32 == value)
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid layer type '{s}'"))
    }
}

/// Inputs of [`Stackup::gen_stackup`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackupParams {
    pub project: String,
    pub cca_name: String,
    pub board_thickness: f64,
    pub board_thickness_unit: String,
    pub pcb_material_manufacturer: String,
    pub pcb_material_grade: String,
    pub pcb_material: String,
    pub conductor_layers_cnt: i32,
    pub signal_layer_thickness: f64,
    pub signal_layer_thickness_unit: String,
    pub min_laminate_thickness: f64,
    pub min_laminate_thickness_unit: String,
    pub maintain_symmetry: bool,
    pub power_layer_thickness: f64,
    pub power_layer_thickness_unit: String,
}

/// Inputs of [`Stackup::update_conductor_layer`]. Empty strings leave the
/// engine value unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConductorLayer {
    pub project: String,
    pub cca_name: String,
    /// Numeric layer ID, e.g. `"005"`.
    pub layer: String,
    pub layer_type: LayerType,
    pub material: String,
    pub thickness: f64,
    pub thickness_unit: String,
    /// Percent in `[0, 100]`.
    pub conductor_percent: Option<f64>,
    pub resin_material: String,
}

/// One glass ply of a laminate construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlassLayer {
    pub style: String,
    pub resin_percentage: f64,
    pub thickness: f64,
    pub thickness_unit: String,
}

/// Inputs of [`Stackup::update_laminate_layer`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaminateLayer {
    pub project: String,
    pub cca_name: String,
    pub layer: String,
    pub manufacturer: String,
    pub grade: String,
    pub material: String,
    pub thickness: f64,
    pub thickness_unit: String,
    pub construction_style: String,
    pub glass_construction: Vec<GlassLayer>,
    pub fiber_material: String,
    pub conductor_material: String,
    pub conductor_percent: Option<f64>,
}

/// A conductor layer as listed by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ConductorLayerInfo {
    pub layer: String,
    pub layer_type: Option<LayerType>,
    pub material: String,
    pub thickness: f64,
    pub thickness_unit: String,
    pub conductor_percent: String,
    pub resin_material: String,
}

/// Conductor layers of one CCA.
#[derive(Debug, Clone, PartialEq)]
pub struct ConductorLayers {
    pub cca_name: String,
    pub layers: Vec<ConductorLayerInfo>,
}

/// A laminate layer as listed by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct LaminateLayerInfo {
    pub layer: String,
    pub manufacturer: String,
    pub grade: String,
    pub material: String,
    pub thickness: f64,
    pub thickness_unit: String,
    pub construction_style: String,
    pub glass_construction: Vec<GlassLayer>,
    pub fiber_material: String,
    pub conductor_material: String,
    pub conductor_percent: String,
}

impl From<wire::LaminateProps> for LaminateLayerInfo {
    fn from(props: wire::LaminateProps) -> Self {
        Self {
            layer: props.layer,
            manufacturer: props.manufacturer,
            grade: props.grade,
            material: props.material,
            thickness: props.thickness,
            thickness_unit: props.thickness_unit,
            construction_style: props.construction_style,
            glass_construction: props
                .glass_construction
                .into_iter()
                .map(|glass| GlassLayer {
                    style: glass.style,
                    resin_percentage: glass.resin_percentage,
                    thickness: glass.thickness,
                    thickness_unit: glass.thickness_unit,
                })
                .collect(),
            fiber_material: props.fiber_material,
            conductor_material: props.conductor_material,
            conductor_percent: props.conductor_percent,
        }
    }
}

/// Laminate layers of one CCA.
#[derive(Debug, Clone, PartialEq)]
pub struct LaminateLayers {
    pub cca_name: String,
    pub layers: Vec<LaminateLayerInfo>,
}

/// Board properties as display strings (`"2.091 mm  [82.3 mil]"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackupProperties {
    pub board_dimension: String,
    pub board_thickness: String,
    pub density: String,
    pub conductor_layers_cnt: String,
    pub ctexy: String,
    pub ctez: String,
    pub exy: String,
    pub ez: String,
}

fn check_layer_id(layer: &str, kind: &str) -> Result<(), Failure> {
    non_empty(layer, &format!("{kind} layer ID is missing."))?;
    ensure(
        layer.bytes().all(|b| b.is_ascii_digit()),
        format!("{kind} layer ID is invalid."),
    )
}

fn percent(value: Option<f64>, message: &str) -> Result<(), Failure> {
    ensure(
        value.is_none_or(|p| (0.0..=100.0).contains(&p)),
        message,
    )
}

fn thickness(value: f64, message: &str) -> Result<(), Failure> {
    ensure(value.is_finite() && value >= 0.0, message)
}

fn percent_text(value: Option<f64>) -> String {
    value.map(|p| p.to_string()).unwrap_or_default()
}

#[derive(Debug, Default)]
struct Caches {
    thickness_units: EnumCache,
    manufacturers: EnumCache,
    conductor_materials: EnumCache,
    construction_styles: EnumCache,
    fiber_materials: EnumCache,
}

/// `SherlockStackupService` client.
///
/// Arguments are checked in declaration order; a thickness is followed by its
/// unit before the next field is looked at.
#[derive(Debug)]
pub struct Stackup<C> {
    stub: ServiceStub<C>,
    caches: Caches,
}

impl<C: RpcChannel> Stackup<C> {
    #[must_use]
    pub fn new(channel: C, version: EngineVersion) -> Self {
        Self {
            stub: ServiceStub::new(channel, version),
            caches: Caches::default(),
        }
    }

    /// Unit check for a positive thickness; zero means "not given".
    async fn check_thickness_unit(
        &self,
        value: f64,
        unit: &str,
        ounces_allowed: bool,
        message: &str,
    ) -> Result<(), Failure> {
        if value <= 0.0 || (ounces_allowed && unit == OUNCES) {
            return Ok(());
        }
        ensure(
            self.stub
                .allowed(
                    &self.caches.thickness_units,
                    paths::LIST_LAMINATE_THICKNESS_UNITS,
                    unit,
                )
                .await,
            message,
        )
    }

    /// Value, then unit.
    async fn check_thickness(
        &self,
        (value, unit): (f64, &str),
        ounces_allowed: bool,
        [value_message, unit_message]: [&str; 2],
    ) -> Result<(), Failure> {
        thickness(value, value_message)?;
        self.check_thickness_unit(value, unit, ounces_allowed, unit_message)
            .await
    }

    async fn check_listed(
        &self,
        cache: &EnumCache,
        path: &'static str,
        value: &str,
        message: &str,
    ) -> Result<(), Failure> {
        if value.is_empty() {
            return Ok(());
        }
        ensure(self.stub.allowed(cache, path, value).await, message)
    }

    async fn check_pcb_material(
        &self,
        manufacturer: &str,
        grade: &str,
        material: &str,
    ) -> Result<(), Failure> {
        ensure(
            self.stub
                .allowed(
                    &self.caches.manufacturers,
                    paths::LIST_LAMINATE_MATERIALS_MANUFACTURERS,
                    manufacturer,
                )
                .await,
            "Laminate manufacturer is invalid.",
        )?;

        let request = ListLaminateMaterialsRequest {
            manufacturer: manufacturer.to_owned(),
        };
        let response: ListLaminateMaterialsResponse =
            match self.stub.call(paths::LIST_LAMINATE_MATERIALS, request).await {
                Ok(response) => response,
                Err(err) => {
                    tracing::warn!(manufacturer, error = %err, "laminate materials unavailable");
                    return Ok(());
                }
            };
        if response.return_code.as_ref().is_some_and(|rc| rc.value != 0) {
            tracing::warn!(manufacturer, "laminate materials unavailable");
            return Ok(());
        }
        let mut grades = response
            .manufacturer_materials
            .iter()
            .filter(|m| m.manufacturer == manufacturer)
            .flat_map(|m| &m.grade_materials);
        let Some(grade_materials) = grades.find(|g| g.grade == grade) else {
            return Err(Failure::Invalid("Laminate grade is invalid.".to_owned()));
        };
        ensure(
            grade_materials.laminate_material.iter().any(|m| m == material),
            "Laminate material is invalid.",
        )
    }

    async fn check_stackup_params(&self, params: &StackupParams) -> Result<(), Failure> {
        non_empty(&params.project, "Project name is invalid.")?;
        non_empty(&params.cca_name, "CCA name is invalid.")?;
        self.check_thickness(
            (params.board_thickness, &params.board_thickness_unit),
            false,
            ["Board thickness is invalid.", "Board thickness unit is invalid."],
        )
        .await?;
        self.check_pcb_material(
            &params.pcb_material_manufacturer,
            &params.pcb_material_grade,
            &params.pcb_material,
        )
        .await?;
        ensure(
            params.conductor_layers_cnt > 1,
            "Number of conductor layers must be greater than 1.",
        )?;
        self.check_thickness(
            (params.signal_layer_thickness, &params.signal_layer_thickness_unit),
            true,
            ["Conductor thickness is invalid.", "Conductor thickness unit is invalid."],
        )
        .await?;
        self.check_thickness(
            (params.min_laminate_thickness, &params.min_laminate_thickness_unit),
            false,
            ["Laminate thickness is invalid.", "Laminate thickness unit is invalid."],
        )
        .await?;
        self.check_thickness(
            (params.power_layer_thickness, &params.power_layer_thickness_unit),
            true,
            ["Power layer thickness is invalid.", "Power layer thickness unit is invalid."],
        )
        .await
    }

    /// Generate a fresh stackup for a CCA.
    ///
    /// # Errors
    /// Returns [`GenStackupError`] on invalid arguments, an engine rejection,
    /// or a transport failure.
    pub async fn gen_stackup(
        &self,
        params: StackupParams,
    ) -> Result<Option<i32>, GenStackupError> {
        self.stub.require(VersionGate::SUPPORTED, "gen_stackup")?;
        self.check_stackup_params(&params).await?;

        if !self.stub.connected().await {
            return Ok(None);
        }
        let request = GenStackupRequest {
            project: params.project,
            cca_name: params.cca_name,
            board_thickness: params.board_thickness,
            board_thickness_unit: params.board_thickness_unit,
            pcb_material_manufacturer: params.pcb_material_manufacturer,
            pcb_material_grade: params.pcb_material_grade,
            pcb_material: params.pcb_material,
            conductor_layers_cnt: params.conductor_layers_cnt,
            signal_layer_thickness: params.signal_layer_thickness,
            signal_layer_thickness_unit: params.signal_layer_thickness_unit,
            min_laminate_thickness: params.min_laminate_thickness,
            min_laminate_thickness_unit: params.min_laminate_thickness_unit,
            maintain_symmetry: params.maintain_symmetry,
            power_layer_thickness: params.power_layer_thickness,
            power_layer_thickness_unit: params.power_layer_thickness_unit,
        };
        let response: StatusResponse = self.stub.call(paths::GEN_STACKUP, request).await?;
        Ok(Some(interpret(&response)?))
    }

    /// Update the properties of one conductor layer.
    ///
    /// # Errors
    /// Returns [`UpdateConductorLayerError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn update_conductor_layer(
        &self,
        layer: ConductorLayer,
    ) -> Result<Option<i32>, UpdateConductorLayerError> {
        self.stub
            .require(VersionGate::SUPPORTED, "update_conductor_layer")?;
        non_empty(&layer.project, "Project name is invalid.")?;
        non_empty(&layer.cca_name, "CCA name is invalid.")?;
        check_layer_id(&layer.layer, "Conductor")?;
        self.check_listed(
            &self.caches.conductor_materials,
            paths::LIST_CONDUCTOR_MATERIALS,
            &layer.material,
            "Conductor material is invalid.",
        )
        .await?;
        self.check_thickness(
            (layer.thickness, &layer.thickness_unit),
            true,
            ["Conductor thickness is invalid.", "Conductor thickness unit is invalid."],
        )
        .await?;
        percent(layer.conductor_percent, "Conductor percent is invalid.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }
        let request = UpdateConductorLayerRequest {
            project: layer.project,
            cca_name: layer.cca_name,
            layer: layer.layer,
            r#type: layer.layer_type as i32,
            material: layer.material,
            thickness: layer.thickness,
            thickness_unit: layer.thickness_unit,
            conductor_percent: percent_text(layer.conductor_percent),
            resin_material: layer.resin_material,
        };
        let response: StatusResponse = self
            .stub
            .call(paths::UPDATE_CONDUCTOR_LAYER, request)
            .await?;
        Ok(Some(interpret(&response)?))
    }

    async fn check_laminate_layer(&self, layer: &LaminateLayer) -> Result<(), Failure> {
        non_empty(&layer.project, "Project name is invalid.")?;
        non_empty(&layer.cca_name, "CCA name is invalid.")?;
        check_layer_id(&layer.layer, "Laminate")?;
        if !layer.manufacturer.is_empty() {
            self.check_pcb_material(&layer.manufacturer, &layer.grade, &layer.material)
                .await?;
        }
        self.check_thickness(
            (layer.thickness, &layer.thickness_unit),
            false,
            ["Laminate thickness is invalid.", "Laminate thickness unit is invalid."],
        )
        .await?;
        self.check_listed(
            &self.caches.construction_styles,
            paths::LIST_CONSTRUCTION_STYLES,
            &layer.construction_style,
            "Construction style is invalid.",
        )
        .await?;
        for (i, glass) in layer.glass_construction.iter().enumerate() {
            percent(
                Some(glass.resin_percentage),
                &format!("Invalid layer {i}: Resin percentage is invalid."),
            )?;
            let value_message = format!("Invalid layer {i}: Thickness is invalid.");
            let unit_message = format!("Invalid layer {i}: Thickness unit is invalid.");
            self.check_thickness(
                (glass.thickness, &glass.thickness_unit),
                false,
                [value_message.as_str(), unit_message.as_str()],
            )
            .await?;
        }
        self.check_listed(
            &self.caches.fiber_materials,
            paths::LIST_FIBER_MATERIALS,
            &layer.fiber_material,
            "Fiber material is invalid.",
        )
        .await?;
        self.check_listed(
            &self.caches.conductor_materials,
            paths::LIST_CONDUCTOR_MATERIALS,
            &layer.conductor_material,
            "Conductor material is invalid.",
        )
        .await?;
        percent(layer.conductor_percent, "Conductor percent is invalid.")
    }

    /// Update the properties of one laminate layer.
    ///
    /// # Errors
    /// Returns [`UpdateLaminateLayerError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn update_laminate_layer(
        &self,
        layer: LaminateLayer,
    ) -> Result<Option<i32>, UpdateLaminateLayerError> {
        self.stub
            .require(VersionGate::SUPPORTED, "update_laminate_layer")?;
        self.check_laminate_layer(&layer).await?;

        if !self.stub.connected().await {
            return Ok(None);
        }
        let request = UpdateLaminateRequest {
            project: layer.project,
            cca_name: layer.cca_name,
            layer: layer.layer,
            manufacturer: layer.manufacturer,
            grade: layer.grade,
            material: layer.material,
            thickness: layer.thickness,
            thickness_unit: layer.thickness_unit,
            construction_style: layer.construction_style,
            glass_construction: layer
                .glass_construction
                .into_iter()
                .map(|glass| wire::GlassConstruction {
                    style: glass.style,
                    resin_percentage: glass.resin_percentage,
                    thickness: glass.thickness,
                    thickness_unit: glass.thickness_unit,
                })
                .collect(),
            fiber_material: layer.fiber_material,
            conductor_material: layer.conductor_material,
            conductor_percent: percent_text(layer.conductor_percent),
        };
        let response: StatusResponse = self.stub.call(paths::UPDATE_LAMINATE, request).await?;
        Ok(Some(interpret(&response)?))
    }

    /// Number of layers in the stackup of a CCA.
    ///
    /// # Errors
    /// Returns [`GetLayerCountError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn get_layer_count(
        &self,
        project: &str,
        cca_name: &str,
    ) -> Result<Option<i32>, GetLayerCountError> {
        self.stub.require(VersionGate::SUPPORTED, "get_layer_count")?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = GetLayerCountRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
        };
        let response: StatusResponse = self.stub.call(paths::GET_LAYER_COUNT, request).await?;
        Ok(Some(interpret(&response)?))
    }

    /// Sum of all conductor layer thicknesses, in `thickness_unit`.
    ///
    /// # Errors
    /// Returns [`GetTotalConductorThicknessError`] on invalid arguments, an
    /// engine rejection, or a transport failure.
    pub async fn get_total_conductor_thickness(
        &self,
        project: &str,
        cca_name: &str,
        thickness_unit: &str,
    ) -> Result<Option<f64>, GetTotalConductorThicknessError> {
        self.stub
            .require(VersionGate::SUPPORTED, "get_total_conductor_thickness")?;
        non_empty(project, "Invalid project name")?;
        non_empty(cca_name, "Invalid CCA name")?;
        non_empty(thickness_unit, "Invalid thickness unit")?;
        self.check_thickness_unit(1.0, thickness_unit, true, "Invalid thickness unit")
            .await?;

        if !self.stub.connected().await {
            return Ok(None);
        }
        let request = GetTotalConductorThicknessRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
            thickness_unit: thickness_unit.to_owned(),
        };
        let response: GetTotalConductorThicknessResponse = self
            .stub
            .call(paths::GET_TOTAL_CONDUCTOR_THICKNESS, request)
            .await?;
        interpret(&response)?;
        Ok(Some(response.total_thickness))
    }

    /// Conductor layers of every CCA in a project.
    ///
    /// # Errors
    /// Returns [`ListConductorLayerError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn list_conductor_layers(
        &self,
        project: &str,
    ) -> Result<Option<Vec<ConductorLayers>>, ListConductorLayerError> {
        self.stub
            .require(VersionGate::SUPPORTED, "list_conductor_layers")?;
        non_empty(project, "Project name is invalid.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = ListConductorLayersRequest {
            project: project.to_owned(),
        };
        let response: ListConductorLayersResponse = self
            .stub
            .call(paths::LIST_CONDUCTOR_LAYERS, request)
            .await?;
        interpret(&response)?;
        Ok(Some(
            response
                .cca_conductor_layers
                .into_iter()
                .map(|cca| ConductorLayers {
                    cca_name: cca.cca_name,
                    layers: cca
                        .conductor_layers
                        .into_iter()
                        .map(|props| ConductorLayerInfo {
                            layer: props.layer,
                            layer_type: LayerType::from_wire(props.r#type),
                            material: props.material,
                            thickness: props.thickness,
                            thickness_unit: props.thickness_unit,
                            conductor_percent: props.conductor_percent,
                            resin_material: props.resin_material,
                        })
                        .collect(),
                })
                .collect(),
        ))
    }

    /// Laminate layers of every CCA in a project.
    ///
    /// # Errors
    /// Returns [`ListLaminateLayersError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn list_laminate_layers(
        &self,
        project: &str,
    ) -> Result<Option<Vec<LaminateLayers>>, ListLaminateLayersError> {
        self.stub.require(LAYER_QUERIES, "list_laminate_layers")?;
        non_empty(project, "Project name is invalid.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = ListLaminateLayersRequest {
            project: project.to_owned(),
        };
        let response: ListLaminateLayersResponse = self
            .stub
            .call(paths::LIST_LAMINATE_LAYERS, request)
            .await?;
        interpret(&response)?;
        Ok(Some(
            response
                .cca_laminate_layers
                .into_iter()
                .map(|cca| LaminateLayers {
                    cca_name: cca.cca_name,
                    layers: cca.laminate_props.into_iter().map(Into::into).collect(),
                })
                .collect(),
        ))
    }

    /// Board-level properties of a CCA stackup.
    ///
    /// # Errors
    /// Returns [`GetStackupPropsError`] on invalid arguments, an engine
    /// rejection, or a transport failure.
    pub async fn get_stackup_props(
        &self,
        project: &str,
        cca_name: &str,
    ) -> Result<Option<StackupProperties>, GetStackupPropsError> {
        self.stub.require(LAYER_QUERIES, "get_stackup_props")?;
        non_empty(project, "Project name is invalid.")?;
        non_empty(cca_name, "CCA name is invalid.")?;

        if !self.stub.connected().await {
            return Ok(None);
        }

        let request = GetStackupPropsRequest {
            project: project.to_owned(),
            cca_name: cca_name.to_owned(),
        };
        let response: GetStackupPropsResponse =
            self.stub.call(paths::GET_STACKUP_PROPS, request).await?;
        interpret(&response)?;
        Ok(Some(StackupProperties {
            board_dimension: response.board_dimension,
            board_thickness: response.board_thickness,
            density: response.density,
            conductor_layers_cnt: response.conductor_layers_cnt,
            ctexy: response.ct_exy,
            ctez: response.ct_ez,
            exy: response.exy,
            ez: response.ez,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn layer_type_text_and_wire_values() {
        assert_eq!("power".parse::<LayerType>().unwrap(), LayerType::Power);
        assert_eq!(LayerType::Substrate.to_string(), "SUBSTRATE");
        assert_eq!(LayerType::from_wire(2), Some(LayerType::Substrate));
        assert_eq!(LayerType::from_wire(7), None);
    }

    #[test]
    fn layer_ids_must_be_numeric() {
        assert!(check_layer_id("005", "Conductor").is_ok());
        assert_eq!(
            check_layer_id("", "Conductor").unwrap_err(),
            Failure::Invalid("Conductor layer ID is missing.".to_owned())
        );
        assert_eq!(
            check_layer_id("-1", "Laminate").unwrap_err(),
            Failure::Invalid("Laminate layer ID is invalid.".to_owned())
        );
    }

    #[test]
    fn percent_bounds_are_inclusive() {
        assert!(percent(None, "bad").is_ok());
        assert!(percent(Some(0.0), "bad").is_ok());
        assert!(percent(Some(100.0), "bad").is_ok());
        assert!(percent(Some(100.5), "bad").is_err());
        assert!(percent(Some(f64::NAN), "bad").is_err());
    }

    #[test]
    fn negative_thickness_is_rejected() {
        assert!(thickness(0.0, "bad").is_ok());
        assert!(thickness(-0.1, "bad").is_err());
        assert!(thickness(f64::INFINITY, "bad").is_err());
    }
}
