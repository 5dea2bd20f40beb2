//! Events
//!
//! An event is an instantaneous situation, such as a lane change, involving
//! a role-A participant and any number of role-B participants. Both roles
//! are attributes of the event data.

use serde::{Deserialize, Serialize};

use aveas_attribute::{Attribute, AttributeKind, AttributeValue};
use aveas_conformance::{AttributeContainer, ContainerError};

use crate::frame::FrameInterval;

aveas_attribute::wire_enum! {
    /// Kind of manoeuvre an event records
    pub enum EventType {
        /// Lane change; role A changes lanes
        LaneChange => "lane change",
        /// Parking; role A parks
        Parking => "parking",
        /// Turning or crossing; role A turns
        Turning => "turning",
        /// Overtaking; role A overtakes
        Overtaking => "overtaking",
        /// Following; role A follows
        Following => "following",
    }
}

/// Event entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Event {
    /// Participant attributes
    pub event_data: AttributeContainer,
    /// Event type followed by the event id
    pub name: String,
    /// Frames in which the event takes place
    pub frame_intervals: Vec<FrameInterval>,
    /// Kind of event
    #[serde(rename = "type")]
    pub event_type: EventType,
}

impl Event {
    /// Event with explicit data
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        event_type: EventType,
        event_data: AttributeContainer,
        frame_intervals: Vec<FrameInterval>,
    ) -> Self {
        Self {
            event_data,
            name: name.into(),
            frame_intervals,
            event_type,
        }
    }

    /// Event whose data holds exactly the two participant roles
    ///
    /// # Errors
    /// Returns [`ContainerError`] if a participant id list cannot be built
    pub fn with_participants<I, T>(
        name: impl Into<String>,
        event_type: EventType,
        role_a: impl Into<String>,
        role_b: I,
        frame_intervals: Vec<FrameInterval>,
    ) -> Result<Self, ContainerError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let event_data = AttributeContainer::from_attributes([
            Attribute::text(AttributeKind::RoleAParticipantId, role_a)?,
            Attribute::texts(AttributeKind::RoleBParticipantIds, role_b)?,
        ])?;
        Ok(Self::new(name, event_type, event_data, frame_intervals))
    }

    /// Role-A participant id, if present
    #[must_use]
    pub fn role_a(&self) -> Option<&str> {
        match self.event_data.get(AttributeKind::RoleAParticipantId)?.value() {
            AttributeValue::Text(id) => Some(id.as_str()),
            _ => None,
        }
    }

    /// Role-B participant ids, empty if absent
    #[must_use]
    pub fn role_b(&self) -> &[String] {
        match self.event_data.get(AttributeKind::RoleBParticipantIds).map(Attribute::value) {
            Some(AttributeValue::Texts(ids)) => ids.as_slice(),
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn lane_change() -> Event {
        Event::with_participants(
            "lane change 0",
            EventType::LaneChange,
            "3",
            Vec::<String>::new(),
            vec![FrameInterval::single(12)],
        )
        .unwrap()
    }

    #[test]
    fn participants_are_accessible() {
        let event = Event::with_participants(
            "overtaking 1",
            EventType::Overtaking,
            "0",
            ["4", "5"],
            vec![FrameInterval::new(10, 30).unwrap()],
        )
        .unwrap();
        assert_eq!(event.role_a(), Some("0"));
        assert_eq!(event.role_b(), ["4".to_string(), "5".to_string()]);
    }

    #[test]
    fn wire_form_carries_type_tags() {
        let value = serde_json::to_value(lane_change()).unwrap();
        assert_eq!(
            value,
            json!({
                "event_data": {
                    "text": [{"name": "event_participant/role_a_id", "val": "3", "type": "value"}],
                    "vec": [{"name": "event_participants/role_b_ids", "val": [], "type": "values"}]
                },
                "name": "lane change 0",
                "frame_intervals": [{"frame_start": 12, "frame_end": 12}],
                "type": "lane change"
            })
        );
    }

    #[test]
    fn decodes_what_it_encodes() {
        let event = lane_change();
        let decoded: Event = serde_json::from_value(serde_json::to_value(&event).unwrap()).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn unknown_event_type_is_rejected() {
        let mut value = serde_json::to_value(lane_change()).unwrap();
        value["type"] = json!("lane_change");
        assert!(serde_json::from_value::<Event>(value).is_err());
    }
}
