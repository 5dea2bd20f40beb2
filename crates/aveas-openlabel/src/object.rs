//! Static object records

use serde::{Deserialize, Serialize};

use aveas_conformance::{AttributeContainer, Classification, Profile};

use crate::frame::FrameInterval;

/// Static record of one scene object
///
/// Per-frame data of the same object lives under the same uid in each
/// frame's `objects` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Object {
    /// Human-readable name
    pub name: String,
    /// Classification, which selects the object's contracts
    #[serde(rename = "type")]
    pub classification: Classification,
    /// Static attributes
    pub object_data: AttributeContainer,
    /// Frames in which the object appears
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_intervals: Option<Vec<FrameInterval>>,
}

impl Object {
    /// Object with static data and no frame intervals
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        classification: Classification,
        object_data: AttributeContainer,
    ) -> Self {
        Self {
            name: name.into(),
            classification,
            object_data,
            frame_intervals: None,
        }
    }

    /// Set the frame intervals
    #[must_use]
    pub fn with_frame_intervals(mut self, intervals: Vec<FrameInterval>) -> Self {
        self.frame_intervals = Some(intervals);
        self
    }

    /// Profile of the static data
    #[inline]
    #[must_use]
    pub const fn static_profile(&self) -> Profile {
        Profile::Object(self.classification)
    }

    /// Profile of this object's per-frame data
    #[inline]
    #[must_use]
    pub const fn dynamic_profile(&self) -> Profile {
        Profile::ObjectInFrame(self.classification)
    }
}
