//! Testing utilities for the AVEAS OpenLABEL workspace
//!
//! Shared fixtures and the tracing bootstrap used by integration tests.

#![allow(missing_docs)]
#![allow(clippy::missing_panics_doc)]

use aveas_attribute::{
    Attribute, AttributeKind as K, FocussedObject, Gender, HandInteractionArea, LightingCondition,
    RoadClassification, RoadCondition,
};
use aveas_conformance::{AttributeContainer, Classification};
use aveas_openlabel::{
    AcquisitionMethod, Context, CoordinateSystem, Document, Event, EventType, Frame,
    FrameInterval, Metadata, Object, ObjectInFrame, Ontology, RightOfUse, Stream,
};
use indexmap::IndexMap;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a test-friendly subscriber once; later calls are no-ops.
///
/// Honors `RUST_LOG`, defaulting to `debug` for the workspace crates.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,aveas_openlabel=debug,aveas_conformance=debug")
    });

    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(false)
        .try_init();
}

pub fn container(attributes: impl IntoIterator<Item = Attribute>) -> AttributeContainer {
    AttributeContainer::from_attributes(attributes).unwrap()
}

fn one_hot(index: usize) -> Vec<f64> {
    let mut weights = vec![0.0; Classification::ALL.len()];
    weights[index] = 1.0;
    weights
}

fn summary(speed: (f64, f64), accel: (f64, f64)) -> Vec<Attribute> {
    vec![
        Attribute::float(K::SummarySpeedMax, speed.1).unwrap(),
        Attribute::float(K::SummarySpeedMin, speed.0).unwrap(),
        Attribute::float(K::SummaryAccelMax, accel.1).unwrap(),
        Attribute::float(K::SummaryAccelMin, accel.0).unwrap(),
    ]
}

fn steering(min: f64, max: f64) -> Vec<Attribute> {
    vec![
        Attribute::float(K::SummarySteeringAngleMax, max).unwrap(),
        Attribute::float(K::SummarySteeringAngleMin, min).unwrap(),
    ]
}

fn motion(x: f64, speed: f64) -> Vec<Attribute> {
    vec![
        Attribute::cuboid([x, 0.0, 0.0, 0.0, 0.0, 0.0, 4.5, 1.8, 1.5]).unwrap(),
        Attribute::floats(K::Velocity, vec![speed, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap(),
        Attribute::floats(K::Acceleration, vec![0.0; 6]).unwrap(),
        Attribute::floats(K::OpenDriveLocalRoadCoordinates, vec![x, -1.75]).unwrap(),
    ]
}

fn road(left: i64, right: i64) -> Vec<Attribute> {
    vec![
        Attribute::choice(K::RoadClassification, RoadClassification::Straight).unwrap(),
        Attribute::integer(K::RoadNumberLanesLeftLegal, left).unwrap(),
        Attribute::integer(K::RoadNumberLanesLeftPhysical, left).unwrap(),
        Attribute::integer(K::RoadNumberLanesRightLegal, right).unwrap(),
        Attribute::integer(K::RoadNumberLanesRightPhysical, right).unwrap(),
    ]
}

/// Static data of the recording car, conforming for [`Classification::Car`]
pub fn car_static() -> AttributeContainer {
    let mut attributes = vec![
        Attribute::flag(K::IsRecorder, true).unwrap(),
        Attribute::floats(K::DimensionsSize, vec![4.5, 1.8, 1.5]).unwrap(),
        Attribute::floats(K::ClassificationUncertainties, one_hot(Classification::Car.column()))
            .unwrap(),
        Attribute::integer(K::OperatorAge, 41).unwrap(),
        Attribute::choice(K::OperatorGender, Gender::Female).unwrap(),
    ];
    attributes.extend(summary((0.0, 27.5), (-3.0, 2.0)));
    attributes.extend(steering(-0.4, 0.4));
    container(attributes)
}

/// Static data of a truck, conforming for [`Classification::Truck`]
pub fn truck_static() -> AttributeContainer {
    let mut attributes = vec![
        Attribute::flag(K::IsRecorder, false).unwrap(),
        Attribute::floats(K::DimensionsSize, vec![12.0, 2.5, 3.8]).unwrap(),
    ];
    attributes.extend(summary((0.0, 22.0), (-2.0, 1.2)));
    attributes.extend(steering(-0.3, 0.3));
    container(attributes)
}

/// Static data of a pedestrian, conforming for [`Classification::HumanPedestrian`]
pub fn pedestrian_static() -> AttributeContainer {
    let mut attributes = vec![
        Attribute::flag(K::IsRecorder, false).unwrap(),
        Attribute::floats(K::DimensionsSize, vec![0.5, 0.6, 1.8]).unwrap(),
    ];
    attributes.extend(summary((0.0, 1.6), (-0.5, 0.5)));
    container(attributes)
}

/// Per-frame data of the recording car, including the automated-control pair
pub fn car_dynamic(x: f64) -> AttributeContainer {
    let mut attributes = motion(x, 13.9);
    attributes.extend(road(1, 1));
    attributes.extend([
        Attribute::flag(K::LightsBrake, false).unwrap(),
        Attribute::flag(K::InteriorAutomatedControlLongitudinal, true).unwrap(),
        Attribute::flag(K::InteriorAutomatedControlLateral, false).unwrap(),
        Attribute::float(K::InteriorBrakePedal, 0.0).unwrap(),
        Attribute::float(K::InteriorAcceleratorPedal, 0.35).unwrap(),
        Attribute::float(K::TrafficDensity, 18.5).unwrap(),
        Attribute::text(K::OpenDriveRoadId, "12").unwrap(),
        Attribute::choice(K::OperatorFocussedObject, FocussedObject::LeadingVehicle).unwrap(),
        Attribute::choices(
            K::OperatorHandInteractionArea,
            [HandInteractionArea::SteeringWheel, HandInteractionArea::Armrest],
        )
        .unwrap(),
    ]);
    container(attributes)
}

/// Per-frame data of a truck
pub fn truck_dynamic(x: f64) -> AttributeContainer {
    let mut attributes = motion(x, 11.0);
    attributes.extend(road(1, 1));
    container(attributes)
}

/// Per-frame data of a pedestrian
pub fn pedestrian_dynamic(x: f64) -> AttributeContainer {
    let mut attributes = motion(x, 1.2);
    attributes.push(Attribute::float(K::OperatorHeadRotation, 0.1).unwrap());
    container(attributes)
}

pub fn scenario_context() -> Context {
    Context::scenario(container([
        Attribute::flag(K::ScenarioIsStaged, false).unwrap(),
        Attribute::flag(K::ScenarioContainsUrban, true).unwrap(),
        Attribute::integer(K::ScenarioWeekdayNumber, 3).unwrap(),
        Attribute::float(K::ScenarioMinimumVehicleSpeed, 0.0).unwrap(),
        Attribute::text(K::ScenarioStartLocation, "Aachen").unwrap(),
        Attribute::text(K::ScenarioEndLocation, "Aachen").unwrap(),
        Attribute::texts(K::ScenarioCourse, ["urban", "rural"]).unwrap(),
        Attribute::floats(K::ScenarioStartCoordinates, vec![50.77, 6.08, 170.0]).unwrap(),
    ]))
}

pub fn environment_context() -> Context {
    Context::environment(container([
        Attribute::choice(K::EnvironmentLightingConditions, LightingCondition::Day).unwrap(),
        Attribute::floats(K::EnvironmentLightingConditionsUncertainties, vec![0.0, 0.0, 0.25, 0.75])
            .unwrap(),
        Attribute::choice(K::EnvironmentRoadCondition, RoadCondition::Dry).unwrap(),
        Attribute::integer(K::EnvironmentTemperature, 14).unwrap(),
        Attribute::float(K::EnvironmentWindHeading, 270.0).unwrap(),
        Attribute::integer(K::EnvironmentCloudCover, 6).unwrap(),
    ]))
}

pub fn overtaking_event(role_a: &str, role_b: &[&str], frames: FrameInterval) -> Event {
    Event::with_participants(
        format!("overtaking {role_a}"),
        EventType::Overtaking,
        role_a,
        role_b.iter().copied(),
        vec![frames],
    )
    .unwrap()
}

pub fn minimum_metadata() -> Metadata {
    Document::minimum_example().metadata
}

pub fn minimum_document() -> Document {
    Document::minimum_example()
}

/// Conforming document that uses every top-level section
pub fn full_document() -> Document {
    let metadata = Metadata::builder()
        .right_of_use(RightOfUse::Commercial)
        .acquisition_method(AcquisitionMethod::InVehicle)
        .acquisition_partner("foo bar institute")
        .acquisition_date("2024-05-17T09:30:00.000+0200")
        .projection_string("+proj=utm +zone=32 +ellps=GRS80 +units=m +no_defs")
        .annotator("annotation team 3")
        .file_version("2")
        .name("drive_0042")
        .thresholds(3.0, 1.5, 1.0)
        .build()
        .unwrap();

    let frames = (0..3u64).map(|i| {
        #[allow(clippy::cast_precision_loss)]
        let x = i as f64;
        let frame = Frame::new()
            .with_timestamp(i * 40)
            .with_object("0", ObjectInFrame::new(car_dynamic(10.0 + x)))
            .with_object("1", ObjectInFrame::new(truck_dynamic(25.0 + x)))
            .with_object("2", ObjectInFrame::new(pedestrian_dynamic(5.0)));
        (i.to_string(), frame)
    });

    let mut document = Document::new(metadata)
        .with_frame_intervals(vec![FrameInterval::new(0, 2).unwrap()])
        .with_object(
            "0",
            Object::new("ego", Classification::Car, car_static())
                .with_frame_intervals(vec![FrameInterval::new(0, 2).unwrap()]),
        )
        .with_object("1", Object::new("truck", Classification::Truck, truck_static()))
        .with_object(
            "2",
            Object::new("pedestrian", Classification::HumanPedestrian, pedestrian_static()),
        )
        .with_context("0", scenario_context())
        .with_context("1", environment_context())
        .with_event("0", overtaking_event("0", &["1"], FrameInterval::new(1, 2).unwrap()));

    for (fid, frame) in frames {
        document = document.with_frame(fid, frame);
    }

    document.coordinate_systems = Some(IndexMap::from([
        (
            "odom".to_string(),
            CoordinateSystem {
                cs_type: "scene_cs".to_string(),
                parent: String::new(),
                children: vec!["vehicle-iso8855".to_string()],
            },
        ),
        (
            "vehicle-iso8855".to_string(),
            CoordinateSystem {
                cs_type: "local_cs".to_string(),
                parent: "odom".to_string(),
                children: Vec::new(),
            },
        ),
    ]));
    document.streams = Some(IndexMap::from([(
        "front_camera".to_string(),
        Stream {
            stream_type: "camera".to_string(),
            uri: Some("recordings/front.mp4".to_string()),
            description: None,
        },
    )]));
    document.ontologies = Some(IndexMap::from([
        ("0".to_string(), Ontology::Uri("https://openlabel.asam.net/V1-0-0/ontologies/".to_string())),
        (
            "1".to_string(),
            Ontology::Detailed {
                uri: "https://example.org/aveas".to_string(),
                boundary_list: Some(vec!["vehicle".to_string()]),
                boundary_mode: Some("include".to_string()),
            },
        ),
    ]));
    document.resources = Some(IndexMap::from([(
        "0".to_string(),
        "drive_0042.xodr".to_string(),
    )]));

    document
}
