use aveas_attribute::{Attribute, AttributeKind};
use aveas_conformance::{AttributeContainer, Classification};
use aveas_openlabel::{Document, Frame, FrameInterval, Object, ObjectInFrame};
use aveas_test_utils::{car_dynamic, car_static, minimum_document};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_interval_accepts_ordered_bounds(start in 0u64..10_000, end in 0u64..10_000) {
        let result = FrameInterval::new(start, end);
        prop_assert_eq!(result.is_ok(), start <= end);
        if let Ok(interval) = result {
            prop_assert!(interval.contains(start) && interval.contains(end));
        }
    }

    #[test]
    fn prop_object_uids_round_trip_in_order(uids in proptest::collection::vec("[a-z0-9]{1,8}", 1..12)) {
        let mut document = minimum_document();
        for uid in &uids {
            document = document.with_object(uid.clone(), Object::new(uid.clone(), Classification::Car, car_static()));
        }
        let decoded = Document::from_json(&document.to_json().unwrap()).unwrap();
        prop_assert_eq!(&decoded, &document);
        prop_assert!(decoded.check_conformance().is_ok());
    }

    #[test]
    fn prop_pedal_positions_survive_the_codec(pedal in 0.0f64..=1.0, x in -1e6f64..1e6) {
        let mut attributes: Vec<Attribute> = car_dynamic(x)
            .attributes()
            .filter(|a| a.kind() != AttributeKind::InteriorBrakePedal)
            .cloned()
            .collect();
        attributes.push(Attribute::float(AttributeKind::InteriorBrakePedal, pedal).unwrap());
        let data = AttributeContainer::from_attributes(attributes).unwrap();

        let document = minimum_document()
            .with_object("0", Object::new("ego", Classification::Car, car_static()))
            .with_frame("0", Frame::new().with_object("0", ObjectInFrame::new(data)));
        let decoded = Document::from_json(&document.to_json().unwrap()).unwrap();
        prop_assert_eq!(decoded, document);
    }
}
