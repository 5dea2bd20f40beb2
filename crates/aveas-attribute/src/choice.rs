//! Closed wire enumerations
//!
//! Enumerated attribute values are closed sets of exact wire strings.
//! [`wire_enum!`] generates such an enumeration together with its string
//! table, [`std::str::FromStr`], [`std::fmt::Display`] and serde support.
//!
//! - [`ChoiceSet`]: which enumeration an attribute value is drawn from
//! - [`Choice`]: one value of any of those enumerations

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::UnknownWireValue;

/// Declare a closed enumeration with an exact wire string per variant
///
/// ```rust
/// aveas_attribute::wire_enum! {
///     /// Traffic light state
///     pub enum Signal {
///         /// Stop
///         Red => "red",
///         /// Go
///         Green => "green",
///     }
/// }
///
/// assert_eq!(Signal::Red.as_str(), "red");
/// assert_eq!("green".parse::<Signal>().ok(), Some(Signal::Green));
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Every wire string in declaration order
            pub const WIRE_VALUES: &'static [&'static str] = &[$($wire),+];

            /// Exact wire string of this value
            #[inline]
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            /// Look up a value by its wire string
            #[must_use]
            pub fn from_wire(raw: &str) -> ::std::option::Option<Self> {
                match raw {
                    $($wire => ::std::option::Option::Some(Self::$variant),)+
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::UnknownWireValue;

            fn from_str(raw: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_wire(raw).ok_or_else(|| $crate::UnknownWireValue {
                    enumeration: stringify!($name),
                    value: raw.to_string(),
                })
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Self::from_wire(&raw).ok_or_else(|| {
                    <D::Error as $crate::__private::serde::de::Error>::unknown_variant(
                        &raw,
                        Self::WIRE_VALUES,
                    )
                })
            }
        }
    };
}

wire_enum! {
    /// Side of an object used as its most exact reference point
    pub enum ReferencePointSide {
        /// Left side
        Left => "left",
        /// Right side
        Right => "right",
        /// Front
        Front => "front",
        /// Back
        Back => "back",
        /// Geometric centre
        Centre => "centre",
    }
}

wire_enum! {
    /// What the operator is looking at
    pub enum FocussedObject {
        /// Vehicle directly ahead
        LeadingVehicle => "leading_vehicle",
        /// Vehicle involved in a collision
        CollidingVehicle => "colliding_vehicle",
        /// Any other vehicle
        GenericVehicle => "generic_vehicle",
        /// Traffic signal or sign
        Signal => "signal",
        /// Center display
        CenterDisplay => "center_display",
        /// Instrument cluster
        InstrumentCluster => "instrument_cluster",
        /// Head-up display
        Hud => "hud",
        /// Other display
        OtherDisplay => "other_display",
        /// Left mirror
        LeftMirror => "left_mirror",
        /// Right mirror
        RightMirror => "right_mirror",
        /// Other point inside the vehicle
        OtherInterior => "other_interior",
        /// Other point outside the vehicle
        OtherExterior => "other_exterior",
    }
}

wire_enum! {
    /// Area the operator's hands interact with
    pub enum HandInteractionArea {
        /// Steering wheel
        SteeringWheel => "steering_wheel",
        /// Center display
        CenterDisplay => "center_display",
        /// Armrest
        Armrest => "armrest",
        /// Anything else
        Other => "other",
    }
}

wire_enum! {
    /// Operator gender
    pub enum Gender {
        /// Male
        Male => "male",
        /// Female
        Female => "female",
        /// Diverse
        Diverse => "diverse",
    }
}

wire_enum! {
    /// Road layout at the object's position
    pub enum RoadClassification {
        /// Straight road
        Straight => "straight",
        /// Curve
        Curve => "curve",
        /// T-shaped intersection
        TIntersection => "t_intersection",
        /// Crossroads
        XIntersection => "x_intersection",
        /// Roundabout
        Roundabout => "roundabout",
        /// Parking area
        ParkingArea => "parking_area",
        /// Property entrance
        PropertyEntrance => "property_entrance",
    }
}

wire_enum! {
    /// Ambient lighting
    pub enum LightingCondition {
        /// Darkness
        Darkness => "darkness",
        /// Artificial light only
        Artificial => "artificial",
        /// Civil twilight
        CivilTwilight => "civil_twilight",
        /// Daylight
        Day => "day",
    }
}

wire_enum! {
    /// Road surface condition
    pub enum RoadCondition {
        /// Dry
        Dry => "dry",
        /// Wet
        Wet => "wet",
        /// Slippery
        Slippery => "slippery",
    }
}

/// Enumeration an enumerated attribute value is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChoiceSet {
    /// [`ReferencePointSide`]
    ReferencePointSide,
    /// [`FocussedObject`]
    FocussedObject,
    /// [`HandInteractionArea`]
    HandInteractionArea,
    /// [`Gender`]
    Gender,
    /// [`RoadClassification`]
    RoadClassification,
    /// [`LightingCondition`]
    LightingCondition,
    /// [`RoadCondition`]
    RoadCondition,
}

impl ChoiceSet {
    /// Enumeration name used in diagnostics
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ReferencePointSide => "ReferencePointSide",
            Self::FocussedObject => "FocussedObject",
            Self::HandInteractionArea => "HandInteractionArea",
            Self::Gender => "Gender",
            Self::RoadClassification => "RoadClassification",
            Self::LightingCondition => "LightingCondition",
            Self::RoadCondition => "RoadCondition",
        }
    }

    /// All wire strings accepted by this enumeration
    #[must_use]
    pub const fn wire_values(self) -> &'static [&'static str] {
        match self {
            Self::ReferencePointSide => ReferencePointSide::WIRE_VALUES,
            Self::FocussedObject => FocussedObject::WIRE_VALUES,
            Self::HandInteractionArea => HandInteractionArea::WIRE_VALUES,
            Self::Gender => Gender::WIRE_VALUES,
            Self::RoadClassification => RoadClassification::WIRE_VALUES,
            Self::LightingCondition => LightingCondition::WIRE_VALUES,
            Self::RoadCondition => RoadCondition::WIRE_VALUES,
        }
    }

    /// Parse a wire string as a member of this enumeration
    ///
    /// # Errors
    /// Returns [`UnknownWireValue`] if `raw` is not one of [`Self::wire_values`]
    pub fn parse(self, raw: &str) -> Result<Choice, UnknownWireValue> {
        match self {
            Self::ReferencePointSide => raw.parse().map(Choice::ReferencePointSide),
            Self::FocussedObject => raw.parse().map(Choice::FocussedObject),
            Self::HandInteractionArea => raw.parse().map(Choice::HandInteractionArea),
            Self::Gender => raw.parse().map(Choice::Gender),
            Self::RoadClassification => raw.parse().map(Choice::RoadClassification),
            Self::LightingCondition => raw.parse().map(Choice::LightingCondition),
            Self::RoadCondition => raw.parse().map(Choice::RoadCondition),
        }
    }
}

impl fmt::Display for ChoiceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value of an enumerated attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    /// Reference point side
    ReferencePointSide(ReferencePointSide),
    /// Focussed object
    FocussedObject(FocussedObject),
    /// Hand interaction area
    HandInteractionArea(HandInteractionArea),
    /// Gender
    Gender(Gender),
    /// Road classification
    RoadClassification(RoadClassification),
    /// Lighting condition
    LightingCondition(LightingCondition),
    /// Road condition
    RoadCondition(RoadCondition),
}

impl Choice {
    /// Enumeration this value belongs to
    #[inline]
    #[must_use]
    pub const fn set(self) -> ChoiceSet {
        match self {
            Self::ReferencePointSide(_) => ChoiceSet::ReferencePointSide,
            Self::FocussedObject(_) => ChoiceSet::FocussedObject,
            Self::HandInteractionArea(_) => ChoiceSet::HandInteractionArea,
            Self::Gender(_) => ChoiceSet::Gender,
            Self::RoadClassification(_) => ChoiceSet::RoadClassification,
            Self::LightingCondition(_) => ChoiceSet::LightingCondition,
            Self::RoadCondition(_) => ChoiceSet::RoadCondition,
        }
    }

    /// Exact wire string
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReferencePointSide(v) => v.as_str(),
            Self::FocussedObject(v) => v.as_str(),
            Self::HandInteractionArea(v) => v.as_str(),
            Self::Gender(v) => v.as_str(),
            Self::RoadClassification(v) => v.as_str(),
            Self::LightingCondition(v) => v.as_str(),
            Self::RoadCondition(v) => v.as_str(),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Choice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

macro_rules! choice_from {
    ($($ty:ident),+) => {
        $(
            impl From<$ty> for Choice {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$ty(value)
                }
            }
        )+
    };
}

choice_from!(
    ReferencePointSide,
    FocussedObject,
    HandInteractionArea,
    Gender,
    RoadClassification,
    LightingCondition,
    RoadCondition
);
