//! AVEAS OpenLABEL documents
//!
//! Typed document tree for AVEAS scenario annotations, a JSON codec for it,
//! and document-wide conformance checking.
//!
//! # Core Concepts
//!
//! - [`Document`]: root of an annotation file
//! - [`Object`] and [`Frame`]: static and per-frame object data
//! - [`Context`] and [`Event`]: scenario, environment and manoeuvre data
//! - [`DocumentConfig`]: envelope, pretty-printing and conformance
//!   enforcement for the codec
//!
//! # Example
//!
//! ```rust
//! use aveas_openlabel::{Document, DocumentError};
//!
//! let document = Document::minimum_example();
//! let json = document.to_json()?;
//! assert!(json.starts_with(r#"{"openlabel":"#));
//!
//! let decoded = Document::from_json(&json)?;
//! assert_eq!(decoded, document);
//! decoded.check_conformance()?;
//! # Ok::<(), DocumentError>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: `check_documents` validates many documents on the rayon
//!   thread pool

#![warn(unreachable_pub)]

mod config;
mod context;
mod document;
mod error;
mod event;
mod frame;
mod metadata;
mod object;
#[cfg(feature = "parallel")]
mod parallel;

pub use config::{ConformanceMode, DocumentConfig};
pub use context::{Context, ContextKind};
pub use document::{CoordinateSystem, Document, Ontology, Stream};
pub use error::{ConfigError, DocumentError};
pub use event::{Event, EventType};
pub use frame::{Frame, FrameInterval, FrameProperties, ObjectInFrame, Timestamp};
pub use metadata::{
    AcquisitionMethod, AveasSchemaVersion, Metadata, MetadataBuilder, RightOfUse,
    AVEAS_SCHEMA_VERSION, SCHEMA_VERSION,
};
pub use object::Object;
#[cfg(feature = "parallel")]
pub use parallel::{check_documents, failing_documents};

/// Prelude for common imports
pub mod prelude {
    pub use super::{
        Context, Document, DocumentConfig, DocumentError, Event, EventType, Frame, FrameInterval,
        Metadata, Object, ObjectInFrame,
    };
    pub use aveas_attribute::prelude::*;
    pub use aveas_conformance::prelude::*;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
