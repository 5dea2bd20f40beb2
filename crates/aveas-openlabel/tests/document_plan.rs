//! Functional tests for whole documents.
//!
//! These scenarios follow a document from construction through the codec
//! and the conformance check:
//! - A fully populated document survives encode and decode unchanged.
//! - Conformance failures name the entity that caused them.
//! - The codec configuration, loaded from text, decides what is enforced.

use aveas_attribute::{Attribute, AttributeKind};
use aveas_conformance::{Classification, ConformanceError};
use aveas_openlabel::{
    ConformanceMode, Document, DocumentConfig, DocumentError, Frame, FrameInterval, Object,
    ObjectInFrame,
};
use aveas_test_utils::{
    car_dynamic, car_static, container, full_document, init_tracing, minimum_document,
    overtaking_event, truck_static,
};
use pretty_assertions::assert_eq;
use serde_json::Value as JsonValue;

/// Tenet: the fully populated document conforms.
#[test]
fn full_document_conforms() {
    init_tracing();
    full_document().check_conformance().unwrap();
}

/// Tenet: encoding then decoding yields the same document.
#[test]
fn full_document_round_trips() {
    init_tracing();
    let document = full_document();
    let json = document.to_json().unwrap();
    let decoded = Document::from_json(&json).unwrap();
    assert_eq!(decoded, document);
}

/// Tenet: the encoded form is stable across a second round trip.
#[test]
fn encoding_is_stable() {
    let first = full_document().to_json().unwrap();
    let second = Document::from_json(&first).unwrap().to_json().unwrap();
    assert_eq!(first, second);
}

/// Tenet: keyed collections keep insertion order on the wire.
#[test]
fn insertion_order_is_preserved() {
    let document = minimum_document()
        .with_object("b", Object::new("b", Classification::Truck, truck_static()))
        .with_object("a", Object::new("a", Classification::Car, car_static()));
    let value: JsonValue = serde_json::from_str(&document.to_json().unwrap()).unwrap();
    let keys: Vec<_> = value["openlabel"]["objects"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, vec!["b".to_string(), "a".to_string()]);

    let decoded = Document::from_json(&document.to_json().unwrap()).unwrap();
    let uids: Vec<_> = decoded.objects.unwrap().keys().cloned().collect();
    assert_eq!(uids, vec!["b".to_string(), "a".to_string()]);
}

/// Tenet: the automated-control pair shares one wire name but both
/// attributes come back.
#[test]
fn shared_wire_name_pair_round_trips() {
    let value = serde_json::to_value(car_dynamic(0.0)).unwrap();
    let names: Vec<_> = value["boolean"]
        .as_array()
        .unwrap()
        .iter()
        .map(|attribute| attribute["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names
            .iter()
            .filter(|name| *name == "interior/automated_control/longitudinal")
            .count(),
        2
    );

    let decoded: aveas_conformance::AttributeContainer = serde_json::from_value(value).unwrap();
    assert!(decoded.contains(AttributeKind::InteriorAutomatedControlLongitudinal));
    assert!(decoded.contains(AttributeKind::InteriorAutomatedControlLateral));
    assert_eq!(decoded, car_dynamic(0.0));
}

/// Tenet: per-frame data is checked against the contract of the object's
/// classification, not the frame's neighbours.
#[test]
fn frame_entry_is_checked_against_its_object() {
    init_tracing();
    let mut document = full_document();
    document.objects.as_mut().unwrap()["1"].classification = Classification::Trailer;

    let err = document.check_conformance().unwrap_err();
    // Trailers carry neither a recorder flag nor steering summaries.
    assert_eq!(err.path(), Some("objects/1"));
    assert!(matches!(
        err,
        DocumentError::Conformance {
            source: ConformanceError::Forbidden(_),
            ..
        }
    ));
}

/// Tenet: a frame entry with a forbidden attribute reports the frame path.
#[test]
fn forbidden_frame_attribute_reports_frame_path() {
    let mut attributes: Vec<Attribute> = car_dynamic(0.0).attributes().cloned().collect();
    attributes.push(Attribute::flag(AttributeKind::InteriorHasRider, false).unwrap());

    let document = minimum_document()
        .with_object("0", Object::new("ego", Classification::Car, car_static()))
        .with_frame("7", Frame::new().with_object("0", ObjectInFrame::new(container(attributes))));

    let err = document.check_conformance().unwrap_err();
    assert_eq!(err.path(), Some("frames/7/objects/0"));
    assert!(err.to_string().contains("interior/has_rider"));
}

/// Tenet: an empty role-B list still satisfies the event contract.
#[test]
fn event_with_empty_role_b_conforms() {
    let document = minimum_document().with_event(
        "0",
        overtaking_event("0", &[], FrameInterval::single(0)),
    );
    assert!(document.check_conformance().is_ok());
}

/// Tenet: a configuration loaded from YAML or TOML switches enforcement on.
#[test]
fn enforcement_from_loaded_config() {
    let broken = minimum_document().with_object(
        "0",
        Object::new("ego", Classification::Car, aveas_conformance::AttributeContainer::empty()),
    );
    let json = broken.to_json().unwrap();

    let from_yaml = DocumentConfig::from_yaml_str("conformance: enforce\n").unwrap();
    let from_toml = DocumentConfig::from_toml_str("conformance = \"enforce\"\n").unwrap();
    assert_eq!(from_yaml, from_toml);
    assert_eq!(from_yaml.conformance, ConformanceMode::Enforce);

    assert!(Document::from_json_with(&json, &from_yaml).is_err());
    assert!(broken.to_json_with(&from_toml).is_err());
    assert!(Document::from_json_with(&json, &DocumentConfig::new()).is_ok());
}

/// Tenet: a decode failure inside an attribute surfaces as a JSON error
/// naming the problem.
#[test]
fn out_of_range_pedal_fails_decode() {
    let mut value: JsonValue = serde_json::from_str(&full_document().to_json().unwrap()).unwrap();
    let numbers = value["openlabel"]["frames"]["0"]["objects"]["0"]["object_data"]["num"]
        .as_array_mut()
        .unwrap();
    for attribute in numbers.iter_mut() {
        if attribute["name"] == "interior/brake_pedal" {
            attribute["val"] = serde_json::json!(1.5);
        }
    }

    let err = Document::from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, DocumentError::Json(_)));
    assert!(err.to_string().contains("InteriorBrakePedal"));
}

#[cfg(feature = "parallel")]
mod parallel {
    use super::*;
    use aveas_openlabel::check_documents;

    /// Tenet: bulk checking agrees with checking one by one.
    #[test]
    fn bulk_matches_sequential() {
        let mut broken = full_document();
        broken.objects.as_mut().unwrap().shift_remove("2");
        let documents = vec![full_document(), broken, minimum_document()];

        let bulk: Vec<bool> = check_documents(&documents).iter().map(Result::is_ok).collect();
        let sequential: Vec<bool> = documents
            .iter()
            .map(|d| d.check_conformance().is_ok())
            .collect();
        assert_eq!(bulk, sequential);
        assert_eq!(bulk, vec![true, false, true]);
    }
}
