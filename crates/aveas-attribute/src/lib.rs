//! AVEAS OpenLABEL attribute catalog
//!
//! Typed attributes for scenario annotations.
//!
//! # Core Concepts
//!
//! - [`AttributeKind`]: every attribute the format knows, with its wire name,
//!   bucket and value shape
//! - [`Attribute`]: a kind plus a value, validated on construction
//! - [`ValueKind`]: the container bucket (`boolean`, `num`, `text`, `vec`,
//!   `cuboid`) an attribute lives in
//! - [`Choice`]: values of the closed wire enumerations
//!
//! # Example
//!
//! ```rust
//! use aveas_attribute::{Attribute, AttributeError, AttributeKind};
//!
//! let pedal = Attribute::float(AttributeKind::InteriorBrakePedal, 0.25)?;
//! assert_eq!(pedal.name(), "interior/brake_pedal");
//!
//! let too_far = Attribute::float(AttributeKind::InteriorBrakePedal, 1.5);
//! assert!(matches!(too_far, Err(AttributeError::Range { .. })));
//! # Ok::<(), AttributeError>(())
//! ```

#![warn(unreachable_pub)]

mod attribute;
mod choice;
mod error;
mod kind;
mod value;

pub use attribute::{Attribute, WireAttribute};
pub use choice::{
    Choice, ChoiceSet, FocussedObject, Gender, HandInteractionArea, LightingCondition,
    ReferencePointSide, RoadClassification, RoadCondition,
};
pub use error::{AttributeError, UnknownWireValue};
pub use kind::{AttributeGroup, AttributeKind};
pub use value::{AttributeValue, ValueConstraint, ValueKind, ValueShape, PROBABILITY_EPSILON};

/// Support for [`wire_enum!`] expansions in other crates.
#[doc(hidden)]
pub mod __private {
    pub use serde;
}

/// Prelude for common imports
pub mod prelude {
    pub use super::{
        Attribute, AttributeError, AttributeKind, AttributeValue, Choice, ValueKind, ValueShape,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
