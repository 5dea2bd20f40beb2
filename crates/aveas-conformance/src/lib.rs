//! AVEAS OpenLABEL conformance engine
//!
//! Typed attribute containers and the rules they must satisfy.
//!
//! # Core Concepts
//!
//! - [`AttributeContainer`]: attributes of one entity grouped into
//!   `boolean` / `num` / `text` / `vec` / `cuboid` buckets
//! - [`UniquenessEnforcer`]: each attribute kind at most once per container,
//!   enforced when the container is built
//! - [`ConformanceContract`]: required and optional kinds; everything else
//!   is forbidden
//! - [`ContractRegistry`]: the contract of every [`Profile`], built from the
//!   per-classification tables
//! - [`validate_dict_shape`]: key and value-type check for plain JSON objects
//!
//! # Example
//!
//! ```rust
//! use aveas_attribute::{Attribute, AttributeKind};
//! use aveas_conformance::{AttributeContainer, ConformanceError, ContractRegistry, Profile};
//!
//! let event_data = AttributeContainer::from_attributes([
//!     Attribute::text(AttributeKind::RoleAParticipantId, "0")?,
//! ])?;
//!
//! let result = ContractRegistry::standard().check(Profile::Event, &event_data);
//! assert!(matches!(result, Err(ConformanceError::Missing(_))));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(unreachable_pub)]

mod bucket;
mod classification;
mod container;
mod contract;
mod dict_shape;
mod error;
mod registry;
mod uniqueness;

pub use bucket::Bucket;
pub use classification::{
    presence, table, Classification, ContainerRole, Presence, TableRow, DYNAMIC_TABLE, STATIC_TABLE,
};
pub use container::{AttributeContainer, ContainerBuilder};
pub use contract::{ConformanceContract, ConformanceReport};
pub use dict_shape::{validate_dict_shape, JsonType, ShapeTemplate, TypeMismatch};
pub use error::{
    ConformanceError, ContainerError, DictShapeValidationError, DuplicateAttributeKindError,
    ForbiddenAttributeError, MissingRequiredAttributeError,
};
pub use registry::{ContractRegistry, Profile};
pub use uniqueness::UniquenessEnforcer;

/// Prelude for common imports
pub mod prelude {
    pub use super::{
        AttributeContainer, Bucket, Classification, ConformanceContract, ConformanceError,
        ContainerError, ContractRegistry, Profile,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
