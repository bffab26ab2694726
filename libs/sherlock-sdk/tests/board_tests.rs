#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Board definition calls: stackup, layers, parts and model exports.

mod common;

use common::{engine_up, names, ok_status, sherlock, strings};
use sherlock_sdk::layer::{
    PottingRegion, PottingRegionCopy, PottingRegionDelete, PottingRegionUpdate, PottingShape,
};
use sherlock_sdk::proto::common::paths as health;
use sherlock_sdk::proto::layer::{
    self as layer_wire, AddPottingRegionRequest, CcaRequest, CopyPottingRegionRequest,
    DeletePottingRegionRequest, ExportLayerItemsRequest, ListLayersResponse, PottingRegionResponses,
    UpdatePottingRegionRequest, paths as layer_paths, potting_region,
};
use sherlock_sdk::proto::model::{
    ExportAedbRequest, ExportTraceReinforcementModelRequest, paths as model_paths,
};
use sherlock_sdk::proto::parts::{
    self as parts_wire, GetPartsListPropertiesRequest, GetPartsListPropertiesResponse,
    ImportPartsListRequest, paths as parts_paths,
};
use sherlock_sdk::proto::stackup::{
    self as stackup_wire, GenStackupRequest, GetStackupPropsRequest, GetStackupPropsResponse,
    ListLaminateLayersRequest, ListLaminateLayersResponse, UpdateConductorLayerRequest,
    UpdateLaminateRequest, paths as stackup_paths,
};
use sherlock_sdk::proto::{ReturnCode, ReturnCodeResponse, ReturnCodeWithErrors};
use sherlock_sdk::stackup::{ConductorLayer, GlassLayer, LaminateLayer, LayerType, StackupParams};
use sherlock_sdk::{EngineVersion, FailureKind, OperationError, Sherlock};

fn stackup_params() -> StackupParams {
    StackupParams {
        project: "Tutorial".to_owned(),
        cca_name: "Main Board".to_owned(),
        board_thickness: 82.3,
        board_thickness_unit: "mil".to_owned(),
        pcb_material_manufacturer: "Generic".to_owned(),
        pcb_material_grade: "FR-4".to_owned(),
        pcb_material: "Generic FR-4".to_owned(),
        conductor_layers_cnt: 6,
        signal_layer_thickness: 0.5,
        signal_layer_thickness_unit: "oz".to_owned(),
        min_laminate_thickness: 1.0,
        min_laminate_thickness_unit: "mil".to_owned(),
        maintain_symmetry: true,
        power_layer_thickness: 1.0,
        power_layer_thickness_unit: "oz".to_owned(),
    }
}

fn laminate_layer() -> LaminateLayer {
    LaminateLayer {
        project: "Tutorial".to_owned(),
        cca_name: "Main Board".to_owned(),
        layer: "005".to_owned(),
        manufacturer: "Generic".to_owned(),
        grade: "FR-4".to_owned(),
        material: "Generic FR-4".to_owned(),
        thickness: 0.015,
        thickness_unit: "in".to_owned(),
        construction_style: "2x1080".to_owned(),
        glass_construction: vec![GlassLayer {
            style: "106".to_owned(),
            resin_percentage: 68.0,
            thickness: 0.00172,
            thickness_unit: "in".to_owned(),
        }],
        fiber_material: "E-GLASS".to_owned(),
        conductor_material: "COPPER".to_owned(),
        conductor_percent: Some(0.0),
    }
}

fn region(cca_name: &str, potting_id: &str) -> PottingRegion {
    PottingRegion {
        cca_name: cca_name.to_owned(),
        potting_id: potting_id.to_owned(),
        potting_side: "TOP".to_owned(),
        potting_material: "epoxyencapsulant".to_owned(),
        potting_units: "in".to_owned(),
        potting_thickness: 0.1,
        potting_standoff: 0.2,
        shape: PottingShape::Circle {
            diameter: 3.0,
            center_x: 1.0,
            center_y: 2.0,
            rotation: 0.0,
        },
    }
}

fn statuses(codes: &[(i32, &str)]) -> PottingRegionResponses {
    PottingRegionResponses {
        return_codes: codes
            .iter()
            .map(|&(value, message)| ReturnCode {
                value,
                message: message.to_owned(),
            })
            .collect(),
    }
}

#[tokio::test]
async fn gen_stackup_is_sent_field_for_field() {
    let mock = engine_up();
    mock.respond(stackup_paths::GEN_STACKUP, &ok_status());
    let client = sherlock(&mock);

    client.stackup.gen_stackup(stackup_params()).await.unwrap();

    let sent: GenStackupRequest = mock.last_request(stackup_paths::GEN_STACKUP).unwrap();
    assert_eq!(sent.project, "Tutorial");
    assert_eq!(sent.cca_name, "Main Board");
    assert_eq!(sent.board_thickness.to_bits(), 82.3_f64.to_bits());
    assert_eq!(sent.board_thickness_unit, "mil");
    assert_eq!(sent.pcb_material_manufacturer, "Generic");
    assert_eq!(sent.pcb_material_grade, "FR-4");
    assert_eq!(sent.pcb_material, "Generic FR-4");
    assert_eq!(sent.conductor_layers_cnt, 6);
    assert_eq!(sent.signal_layer_thickness.to_bits(), 0.5_f64.to_bits());
    assert_eq!(sent.signal_layer_thickness_unit, "oz");
    assert_eq!(sent.min_laminate_thickness_unit, "mil");
    assert!(sent.maintain_symmetry);
    assert_eq!(sent.power_layer_thickness_unit, "oz");
}

#[tokio::test]
async fn gen_stackup_reports_the_first_bad_field() {
    let mock = engine_up();
    mock.respond_always(
        stackup_paths::LIST_LAMINATE_THICKNESS_UNITS,
        &names(&["mil", "in", "mm"]),
    )
    .respond(stackup_paths::LIST_LAMINATE_MATERIALS_MANUFACTURERS, &names(&["Generic"]));
    let client = sherlock(&mock);

    let err = client
        .stackup
        .gen_stackup(StackupParams {
            board_thickness_unit: "furlong".to_owned(),
            pcb_material_manufacturer: "Nobody".to_owned(),
            conductor_layers_cnt: 1,
            ..stackup_params()
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Generate stackup error: Board thickness unit is invalid."
    );
    assert!(
        mock.calls_to(stackup_paths::LIST_LAMINATE_MATERIALS_MANUFACTURERS)
            .is_empty()
    );

    let err = client
        .stackup
        .gen_stackup(StackupParams {
            pcb_material_manufacturer: "Nobody".to_owned(),
            conductor_layers_cnt: 1,
            ..stackup_params()
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Generate stackup error: Laminate manufacturer is invalid."
    );
    assert!(mock.calls_to(health::CHECK).is_empty());
}

#[tokio::test]
async fn conductor_layer_is_sent_field_for_field() {
    let mock = engine_up();
    mock.respond(stackup_paths::UPDATE_CONDUCTOR_LAYER, &ok_status());
    let client = sherlock(&mock);

    client
        .stackup
        .update_conductor_layer(ConductorLayer {
            project: "Tutorial".to_owned(),
            cca_name: "Main Board".to_owned(),
            layer: "001".to_owned(),
            layer_type: LayerType::Power,
            material: "COPPER".to_owned(),
            thickness: 0.1,
            thickness_unit: "mil".to_owned(),
            conductor_percent: Some(56.0),
            resin_material: "Generic FR-4 Generic FR-4".to_owned(),
        })
        .await
        .unwrap();

    let sent: UpdateConductorLayerRequest =
        mock.last_request(stackup_paths::UPDATE_CONDUCTOR_LAYER).unwrap();
    assert_eq!(sent.layer, "001");
    assert_eq!(sent.r#type, LayerType::Power as i32);
    assert_eq!(sent.material, "COPPER");
    assert_eq!(sent.thickness.to_bits(), 0.1_f64.to_bits());
    assert_eq!(sent.thickness_unit, "mil");
    assert_eq!(sent.conductor_percent, "56");
    assert_eq!(sent.resin_material, "Generic FR-4 Generic FR-4");
}

#[tokio::test]
async fn conductor_layer_reports_the_first_bad_field() {
    let mock = engine_up();
    mock.respond(stackup_paths::LIST_CONDUCTOR_MATERIALS, &names(&["COPPER", "ALUMINUM"]));
    let client = sherlock(&mock);

    let layer = ConductorLayer {
        project: "Tutorial".to_owned(),
        cca_name: "Main Board".to_owned(),
        layer: "001".to_owned(),
        layer_type: LayerType::Signal,
        material: "GOLD".to_owned(),
        thickness: -1.0,
        thickness_unit: "mil".to_owned(),
        conductor_percent: Some(150.0),
        resin_material: String::new(),
    };

    let err = client
        .stackup
        .update_conductor_layer(ConductorLayer {
            layer: "L1".to_owned(),
            ..layer.clone()
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Update conductor layer error: Conductor layer ID is invalid."
    );
    assert!(mock.calls_to(stackup_paths::LIST_CONDUCTOR_MATERIALS).is_empty());

    let err = client
        .stackup
        .update_conductor_layer(layer)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Update conductor layer error: Conductor material is invalid."
    );
}

#[tokio::test]
async fn laminate_layer_is_sent_field_for_field() {
    let mock = engine_up();
    mock.respond(stackup_paths::UPDATE_LAMINATE, &ok_status());
    let client = sherlock(&mock);

    client
        .stackup
        .update_laminate_layer(laminate_layer())
        .await
        .unwrap();

    let sent: UpdateLaminateRequest = mock.last_request(stackup_paths::UPDATE_LAMINATE).unwrap();
    assert_eq!(sent.layer, "005");
    assert_eq!(sent.manufacturer, "Generic");
    assert_eq!(sent.grade, "FR-4");
    assert_eq!(sent.material, "Generic FR-4");
    assert_eq!(sent.thickness.to_bits(), 0.015_f64.to_bits());
    assert_eq!(sent.thickness_unit, "in");
    assert_eq!(sent.construction_style, "2x1080");
    assert_eq!(sent.glass_construction.len(), 1);
    assert_eq!(sent.glass_construction[0].style, "106");
    assert_eq!(
        sent.glass_construction[0].resin_percentage.to_bits(),
        68.0_f64.to_bits()
    );
    assert_eq!(sent.fiber_material, "E-GLASS");
    assert_eq!(sent.conductor_material, "COPPER");
    assert_eq!(sent.conductor_percent, "0");
}

#[tokio::test]
async fn laminate_layer_reports_the_first_bad_field() {
    let mock = engine_up();
    mock.respond(stackup_paths::LIST_FIBER_MATERIALS, &names(&["E-GLASS"]));
    let client = sherlock(&mock);

    let err = client
        .stackup
        .update_laminate_layer(LaminateLayer {
            glass_construction: vec![GlassLayer {
                style: "106".to_owned(),
                resin_percentage: 150.0,
                thickness: -1.0,
                thickness_unit: "in".to_owned(),
            }],
            fiber_material: "WOOD".to_owned(),
            conductor_percent: Some(200.0),
            ..laminate_layer()
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Update laminate layer error: Invalid layer 0: Resin percentage is invalid."
    );
    assert!(mock.calls_to(stackup_paths::LIST_FIBER_MATERIALS).is_empty());

    let err = client
        .stackup
        .update_laminate_layer(LaminateLayer {
            fiber_material: "WOOD".to_owned(),
            conductor_percent: Some(200.0),
            ..laminate_layer()
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Update laminate layer error: Fiber material is invalid."
    );
}

#[tokio::test]
async fn laminate_layers_are_listed_per_cca() {
    let mock = engine_up();
    mock.respond(
        stackup_paths::LIST_LAMINATE_LAYERS,
        &ListLaminateLayersResponse {
            return_code: Some(ReturnCode::ok("")),
            cca_laminate_layers: vec![stackup_wire::CcaLaminateLayers {
                cca_name: "Main Board".to_owned(),
                laminate_props: vec![stackup_wire::LaminateProps {
                    layer: "2".to_owned(),
                    manufacturer: "Generic".to_owned(),
                    thickness: 2.0,
                    thickness_unit: "mil".to_owned(),
                    glass_construction: vec![stackup_wire::GlassConstruction {
                        style: "106".to_owned(),
                        resin_percentage: 71.0,
                        thickness: 1.0,
                        thickness_unit: "mil".to_owned(),
                    }],
                    ..stackup_wire::LaminateProps::default()
                }],
            }],
        },
    );
    let client = sherlock(&mock);

    let ccas = client
        .stackup
        .list_laminate_layers("Tutorial")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(ccas.len(), 1);
    assert_eq!(ccas[0].cca_name, "Main Board");
    let layer = &ccas[0].layers[0];
    assert_eq!(layer.layer, "2");
    assert_eq!(layer.manufacturer, "Generic");
    assert_eq!(layer.glass_construction[0].style, "106");
    let sent: ListLaminateLayersRequest =
        mock.last_request(stackup_paths::LIST_LAMINATE_LAYERS).unwrap();
    assert_eq!(sent.project, "Tutorial");
}

#[tokio::test]
async fn laminate_listing_checks_project_and_version() {
    let mock = engine_up();
    let client = sherlock(&mock);
    let err = client.stackup.list_laminate_layers("").await.unwrap_err();
    assert_eq!(err.to_string(), "List laminate layer error: Project name is invalid.");

    let old = Sherlock::new(mock.clone(), EngineVersion::Build(241));
    let err = old.stackup.list_laminate_layers("Tutorial").await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Version);
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn stackup_props_come_back_as_display_text() {
    let mock = engine_up();
    mock.respond(
        stackup_paths::GET_STACKUP_PROPS,
        &GetStackupPropsResponse {
            return_code: Some(ReturnCode::ok("")),
            board_dimension: "8.0 x 6.0 in".to_owned(),
            board_thickness: "2.091 mm  [82.3 mil]".to_owned(),
            density: "2.0 g/cc".to_owned(),
            conductor_layers_cnt: "6".to_owned(),
            ct_exy: "13.6 ppm/C".to_owned(),
            ct_ez: "56.0 ppm/C".to_owned(),
            exy: "23.4 GPa".to_owned(),
            ez: "10.3 GPa".to_owned(),
        },
    );
    let client = sherlock(&mock);

    let props = client
        .stackup
        .get_stackup_props("Tutorial", "Main Board")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(props.board_thickness, "2.091 mm  [82.3 mil]");
    assert_eq!(props.conductor_layers_cnt, "6");
    assert_eq!(props.ctexy, "13.6 ppm/C");
    assert_eq!(props.ctez, "56.0 ppm/C");
    assert_eq!(props.ez, "10.3 GPa");
    let sent: GetStackupPropsRequest = mock.last_request(stackup_paths::GET_STACKUP_PROPS).unwrap();
    assert_eq!(sent.cca_name, "Main Board");

    let err = client
        .stackup
        .get_stackup_props("Tutorial", "")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Get stackup prop error: CCA name is invalid.");
}

#[tokio::test]
async fn potting_regions_are_sent_field_for_field() {
    let mock = engine_up();
    mock.respond(
        layer_paths::ADD_POTTING_REGION,
        &ReturnCodeWithErrors {
            return_code: Some(ReturnCode::ok("")),
            errors: Vec::new(),
        },
    );
    let client = sherlock(&mock);

    client
        .layer
        .add_potting_region("Tutorial", &[region("Main Board", "Region 1")])
        .await
        .unwrap();

    let sent: AddPottingRegionRequest = mock.last_request(layer_paths::ADD_POTTING_REGION).unwrap();
    assert_eq!(sent.project, "Tutorial");
    let region = &sent.potting_regions[0];
    assert_eq!(region.cca_name, "Main Board");
    assert_eq!(region.potting_id, "Region 1");
    assert_eq!(region.potting_side, "TOP");
    assert_eq!(region.potting_material, "epoxyencapsulant");
    assert_eq!(region.potting_units, "in");
    assert_eq!(region.potting_thickness.to_bits(), 0.1_f64.to_bits());
    assert_eq!(region.potting_standoff.to_bits(), 0.2_f64.to_bits());
    let Some(potting_region::Shape::Circular(circle)) = &region.shape else {
        panic!("expected a circular shape");
    };
    assert_eq!(circle.diameter.to_bits(), 3.0_f64.to_bits());
    assert_eq!(circle.center_y.to_bits(), 2.0_f64.to_bits());
}

#[tokio::test]
async fn potting_batch_reports_the_first_bad_region() {
    let mock = engine_up();
    let client = sherlock(&mock);

    let err = client
        .layer
        .add_potting_region("Tutorial", &[region("Main Board", ""), region("", "Region 2")])
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Add potting region error: Potting ID is invalid for potting region 0."
    );

    let err = client.layer.add_potting_region("Tutorial", &[]).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Add potting region error: One or more potting regions are required."
    );
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn potting_updates_return_one_status_per_region() {
    let mock = engine_up();
    mock.respond(
        layer_paths::UPDATE_POTTING_REGION,
        &statuses(&[(0, ""), (-1, "Potting region Region 9 was not found.")]),
    );
    let client = sherlock(&mock);

    let codes = client
        .layer
        .update_potting_region(
            "Tutorial",
            &[
                PottingRegionUpdate {
                    potting_region_id_to_update: "Region 1".to_owned(),
                    potting_region: region("Main Board", "Region 1b"),
                },
                PottingRegionUpdate {
                    potting_region_id_to_update: "Region 9".to_owned(),
                    potting_region: region("Main Board", "Region 9"),
                },
            ],
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(codes.len(), 2);
    assert_eq!(codes[0].value, 0);
    assert_eq!(codes[1].message, "Potting region Region 9 was not found.");
    let sent: UpdatePottingRegionRequest =
        mock.last_request(layer_paths::UPDATE_POTTING_REGION).unwrap();
    assert_eq!(sent.update_potting_regions[0].potting_region_id_to_update, "Region 1");
    let replacement = sent.update_potting_regions[0].potting_region.as_ref().unwrap();
    assert_eq!(replacement.potting_id, "Region 1b");
}

#[tokio::test]
async fn potting_updates_check_each_update_in_turn() {
    let mock = engine_up();
    let client = sherlock(&mock);

    let err = client
        .layer
        .update_potting_region(
            "Tutorial",
            &[
                PottingRegionUpdate {
                    potting_region_id_to_update: "Region 1".to_owned(),
                    potting_region: region("", "Region 1"),
                },
                PottingRegionUpdate {
                    potting_region_id_to_update: String::new(),
                    potting_region: region("Main Board", "Region 2"),
                },
            ],
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Update potting region error: CCA name is invalid for potting region 0."
    );
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn potting_copies_are_sent_field_for_field() {
    let mock = engine_up();
    mock.respond(layer_paths::COPY_POTTING_REGION, &statuses(&[(0, "")]));
    let client = sherlock(&mock);

    let copy = PottingRegionCopy {
        cca_name: "Main Board".to_owned(),
        potting_id: "Region 1".to_owned(),
        copy_potting_id: "Region 1 copy".to_owned(),
        center_x: 4.0,
        center_y: -1.0,
    };
    let codes = client
        .layer
        .copy_potting_regions("Tutorial", std::slice::from_ref(&copy))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(codes[0].value, 0);

    let sent: CopyPottingRegionRequest =
        mock.last_request(layer_paths::COPY_POTTING_REGION).unwrap();
    let data = &sent.potting_region_copy_data[0];
    assert_eq!(data.cca_name, "Main Board");
    assert_eq!(data.potting_id, "Region 1");
    assert_eq!(data.copy_potting_id, "Region 1 copy");
    assert_eq!(data.center_x.to_bits(), 4.0_f64.to_bits());
    assert_eq!(data.center_y.to_bits(), (-1.0_f64).to_bits());

    let err = client
        .layer
        .copy_potting_regions(
            "Tutorial",
            &[PottingRegionCopy {
                copy_potting_id: "Region 1".to_owned(),
                ..copy
            }],
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Copy potting regions error: Copy potting ID must differ from potting ID for potting region copy 0."
    );
}

#[tokio::test]
async fn potting_deletes_are_sent_in_order() {
    let mock = engine_up();
    mock.respond(layer_paths::DELETE_POTTING_REGION, &statuses(&[(0, ""), (0, "")]));
    let client = sherlock(&mock);

    let regions = [
        PottingRegionDelete {
            cca_name: "Main Board".to_owned(),
            potting_id: "Region 1".to_owned(),
        },
        PottingRegionDelete {
            cca_name: "Main Board".to_owned(),
            potting_id: "Region 2".to_owned(),
        },
    ];
    let codes = client
        .layer
        .delete_potting_regions("Tutorial", &regions)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(codes.len(), 2);

    let sent: DeletePottingRegionRequest =
        mock.last_request(layer_paths::DELETE_POTTING_REGION).unwrap();
    let ids: Vec<&str> = sent
        .potting_region_delete_data
        .iter()
        .map(|data| data.potting_id.as_str())
        .collect();
    assert_eq!(ids, vec!["Region 1", "Region 2"]);

    let err = client
        .layer
        .delete_potting_regions(
            "Tutorial",
            &[PottingRegionDelete {
                cca_name: String::new(),
                potting_id: String::new(),
            }],
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Delete potting regions error: CCA name is invalid for potting region 0."
    );
}

#[tokio::test]
async fn potting_edits_need_a_2025_engine() {
    let mock = engine_up();
    let client = Sherlock::new(mock.clone(), EngineVersion::Build(242));

    let err = client
        .layer
        .delete_potting_regions(
            "Tutorial",
            &[PottingRegionDelete {
                cca_name: "Main Board".to_owned(),
                potting_id: "Region 1".to_owned(),
            }],
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::Version);
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn layers_are_listed_for_one_cca() {
    let mock = engine_up();
    mock.respond(
        layer_paths::LIST_LAYERS,
        &ListLayersResponse {
            return_code: Some(ReturnCode::ok("")),
            layers: vec![layer_wire::Layer {
                layer_id: "1".to_owned(),
                name: "Top Copper".to_owned(),
                layer_type: "SIGNAL".to_owned(),
            }],
        },
    );
    let client = sherlock(&mock);

    let layers = client
        .layer
        .list_layers("Tutorial", "Main Board")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(layers[0].name, "Top Copper");
    assert_eq!(layers[0].layer_type, "SIGNAL");
    let sent: CcaRequest = mock.last_request(layer_paths::LIST_LAYERS).unwrap();
    assert_eq!(sent.project, "Tutorial");
    assert_eq!(sent.cca_name, "Main Board");

    let err = client.layer.list_layers("", "").await.unwrap_err();
    assert_eq!(err.to_string(), "List layers error: Project name is invalid.");
}

#[tokio::test]
async fn parts_properties_keep_per_part_status() {
    let mock = engine_up();
    mock.respond(
        parts_paths::GET_PARTS_LIST_PROPERTIES,
        &GetPartsListPropertiesResponse {
            parts: vec![
                parts_wire::PartProperties {
                    return_code: Some(ReturnCode::ok("")),
                    ref_des: "C1".to_owned(),
                    properties: vec![parts_wire::PartProperty {
                        name: "part_type".to_owned(),
                        value: "CAPACITOR".to_owned(),
                    }],
                },
                parts_wire::PartProperties {
                    return_code: Some(ReturnCode::failed("Part U99 was not found.")),
                    ref_des: "U99".to_owned(),
                    properties: Vec::new(),
                },
            ],
        },
    );
    let client = sherlock(&mock);

    let parts = client
        .parts
        .get_parts_list_properties("Tutorial", "Main Board", &strings(&["C1", "U99"]))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(parts[0].ref_des, "C1");
    assert_eq!(
        parts[0].properties,
        vec![("part_type".to_owned(), "CAPACITOR".to_owned())]
    );
    assert_eq!(parts[1].return_code.value, -1);
    let sent: GetPartsListPropertiesRequest =
        mock.last_request(parts_paths::GET_PARTS_LIST_PROPERTIES).unwrap();
    assert_eq!(sent.ref_des, strings(&["C1", "U99"]));

    let err = client
        .parts
        .get_parts_list_properties("Tutorial", "Main Board", &strings(&["C1", ""]))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Get parts list properties error: Reference designator 1 is invalid."
    );
}

#[tokio::test]
async fn layer_exports_go_to_their_own_method() {
    let mock = engine_up();
    for path in [
        layer_paths::EXPORT_ALL_MOUNT_POINTS,
        layer_paths::EXPORT_ALL_TEST_POINTS,
        layer_paths::EXPORT_ALL_TEST_FIXTURES,
    ] {
        mock.respond(path, &ok_status());
    }
    let client = sherlock(&mock);

    client
        .layer
        .export_all_mount_points("Tutorial", "Main Board", "mount.csv")
        .await
        .unwrap();
    client
        .layer
        .export_all_test_points("Tutorial", "Main Board", "points.csv")
        .await
        .unwrap();
    client
        .layer
        .export_all_test_fixtures("Tutorial", "Main Board", "fixtures.csv")
        .await
        .unwrap();

    for (path, file) in [
        (layer_paths::EXPORT_ALL_MOUNT_POINTS, "mount.csv"),
        (layer_paths::EXPORT_ALL_TEST_POINTS, "points.csv"),
        (layer_paths::EXPORT_ALL_TEST_FIXTURES, "fixtures.csv"),
    ] {
        let sent: ExportLayerItemsRequest = mock.last_request(path).unwrap();
        assert_eq!(sent.project, "Tutorial");
        assert_eq!(sent.cca_name, "Main Board");
        assert_eq!(sent.file_path, file);
    }
}

#[tokio::test]
async fn layer_exports_report_the_first_blank_argument() {
    let mock = engine_up();
    let client = sherlock(&mock);

    let err = client
        .layer
        .export_all_test_points("", "", "")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Export test points error: Project name is invalid.");

    let err = client
        .layer
        .export_all_test_fixtures("Tutorial", "", "fixtures.csv")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Export test fixtures error: CCA name is invalid.");

    let err = client
        .layer
        .export_all_mount_points("Tutorial", "Main Board", "")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Export mount points error: File path is required.");
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn parts_list_import_is_sent_field_for_field() {
    let mock = engine_up();
    mock.respond(
        parts_paths::IMPORT_PARTS_LIST,
        &ReturnCodeResponse {
            return_code: Some(ReturnCode::ok("Parts list imported.")),
        },
    );
    let client = sherlock(&mock);

    let status = client
        .parts
        .import_parts_list("Test", "Card", "partslist.csv", true)
        .await
        .unwrap();

    assert_eq!(status, Some(0));
    let sent: ImportPartsListRequest = mock.last_request(parts_paths::IMPORT_PARTS_LIST).unwrap();
    assert_eq!(sent.project, "Test");
    assert_eq!(sent.cca_name, "Card");
    assert_eq!(sent.import_file, "partslist.csv");
    assert!(sent.validate);
}

#[tokio::test]
async fn parts_list_import_reports_blank_names_and_rejections() {
    let mock = engine_up();
    let client = sherlock(&mock);

    let err = client
        .parts
        .import_parts_list("", "Card", "partslist.csv", false)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Import parts list error: Project name is invalid.");
    let err = client
        .parts
        .import_parts_list("Test", "", "partslist.csv", false)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Import parts list error: CCA name is invalid.");
    assert!(mock.calls().is_empty());

    mock.respond(
        parts_paths::IMPORT_PARTS_LIST,
        &ReturnCodeResponse {
            return_code: Some(ReturnCode::failed("Invalid file path")),
        },
    );
    let err = client
        .parts
        .import_parts_list("Test", "Card", "missing.csv", false)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::RemoteRejected);
    assert_eq!(err.to_string(), "Import parts list error: Invalid file path");
}

#[tokio::test]
async fn aedb_export_is_sent_field_for_field() {
    let mock = engine_up();
    mock.respond(model_paths::EXPORT_AEDB, &ok_status());
    let client = sherlock(&mock);

    client
        .model
        .export_aedb("Tutorial", "Main Board", "C:/exports/board.aedb", true, false)
        .await
        .unwrap();

    let sent: ExportAedbRequest = mock.last_request(model_paths::EXPORT_AEDB).unwrap();
    assert_eq!(sent.project, "Tutorial");
    assert_eq!(sent.cca_name, "Main Board");
    assert_eq!(sent.export_file, "C:/exports/board.aedb");
    assert!(sent.overwrite_existing_file);
    assert!(!sent.display_model_in_viewer);

    let err = client
        .model
        .export_aedb("Tutorial", "", "", true, false)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Export AEDB error: CCA name is invalid.");

    let old = Sherlock::new(mock.clone(), EngineVersion::Build(242));
    let err = old
        .model
        .export_aedb("Tutorial", "Main Board", "board.aedb", true, false)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::Version);
}

#[tokio::test]
async fn trace_model_export_is_sent_field_for_field() {
    let dir = tempfile::tempdir().unwrap();
    let export_file = dir.path().join("trace.csv");
    let export_file = export_file.to_str().unwrap();
    let mock = engine_up();
    mock.respond(model_paths::EXPORT_TRACE_REINFORCEMENT_MODEL, &ok_status());
    let client = sherlock(&mock);

    client
        .model
        .export_trace_reinforcement_model("Tutorial", "Main Board", export_file, true)
        .await
        .unwrap();

    let sent: ExportTraceReinforcementModelRequest = mock
        .last_request(model_paths::EXPORT_TRACE_REINFORCEMENT_MODEL)
        .unwrap();
    assert_eq!(sent.cca_name, "Main Board");
    assert_eq!(sent.export_file, export_file);
    assert!(sent.overwrite);
}

#[tokio::test]
async fn trace_model_export_reports_the_first_bad_field() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing").join("trace.csv");
    let missing = missing.to_str().unwrap();
    let mock = engine_up();
    let client = sherlock(&mock);

    let err = client
        .model
        .export_trace_reinforcement_model("Tutorial", "", missing, true)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Model service error: CCA name is invalid.");

    let err = client
        .model
        .export_trace_reinforcement_model("Tutorial", "Main Board", missing, true)
        .await
        .unwrap_err();
    assert!(
        err.to_string()
            .starts_with("Model service error: Export file directory \"")
    );
    assert!(err.to_string().ends_with("\" does not exist."));
    assert!(mock.calls().is_empty());
}
