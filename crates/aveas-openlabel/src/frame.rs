//! Frames and frame intervals
//!
//! A [`Frame`] carries the dynamic, per-timestep data of the objects seen in
//! it. [`FrameInterval`] is the inclusive frame range used by the document,
//! its objects and its events.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use aveas_conformance::AttributeContainer;

use crate::error::DocumentError;

/// Inclusive range of frame numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFrameInterval")]
pub struct FrameInterval {
    frame_start: u64,
    frame_end: u64,
}

impl FrameInterval {
    /// Interval from `start` to `end`, both included
    ///
    /// # Errors
    /// Returns [`DocumentError::InvalidFrameInterval`] if `start > end`
    pub fn new(start: u64, end: u64) -> Result<Self, DocumentError> {
        if start > end {
            return Err(DocumentError::InvalidFrameInterval { start, end });
        }
        Ok(Self {
            frame_start: start,
            frame_end: end,
        })
    }

    /// Interval covering a single frame
    #[inline]
    #[must_use]
    pub const fn single(frame: u64) -> Self {
        Self {
            frame_start: frame,
            frame_end: frame,
        }
    }

    /// First frame
    #[inline]
    #[must_use]
    pub const fn start(&self) -> u64 {
        self.frame_start
    }

    /// Last frame
    #[inline]
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.frame_end
    }

    /// Whether a frame lies inside the interval
    #[inline]
    #[must_use]
    pub const fn contains(&self, frame: u64) -> bool {
        self.frame_start <= frame && frame <= self.frame_end
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFrameInterval {
    frame_start: u64,
    frame_end: u64,
}

impl TryFrom<RawFrameInterval> for FrameInterval {
    type Error = DocumentError;

    fn try_from(raw: RawFrameInterval) -> Result<Self, Self::Error> {
        Self::new(raw.frame_start, raw.frame_end)
    }
}

/// Dynamic data of one object in one frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectInFrame {
    /// Per-frame attributes
    pub object_data: AttributeContainer,
}

impl ObjectInFrame {
    /// Entry holding the given attributes
    #[inline]
    #[must_use]
    pub fn new(object_data: AttributeContainer) -> Self {
        Self { object_data }
    }
}

/// Frame timestamp, either text or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Numeric timestamp, kept exactly as written
    Number(serde_json::Number),
    /// Textual timestamp
    Text(String),
}

impl From<&str> for Timestamp {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }
}

impl From<u64> for Timestamp {
    fn from(raw: u64) -> Self {
        Self::Number(raw.into())
    }
}

/// Metadata of a frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameProperties {
    /// Time instant of the frame
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

/// Dynamic data of one timestep
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Frame {
    /// Frame metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_properties: Option<FrameProperties>,
    /// Objects seen in this frame, keyed by object uid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<IndexMap<String, ObjectInFrame>>,
}

impl Frame {
    /// Empty frame
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<Timestamp>) -> Self {
        self.frame_properties = Some(FrameProperties {
            timestamp: Some(timestamp.into()),
        });
        self
    }

    /// Add or replace an object entry
    #[must_use]
    pub fn with_object(mut self, uid: impl Into<String>, object: ObjectInFrame) -> Self {
        self.objects
            .get_or_insert_with(IndexMap::new)
            .insert(uid.into(), object);
        self
    }

    /// Object entries, empty if none
    pub fn object_entries(&self) -> impl Iterator<Item = (&str, &ObjectInFrame)> {
        self.objects
            .iter()
            .flatten()
            .map(|(uid, object)| (uid.as_str(), object))
    }
}
