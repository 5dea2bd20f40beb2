//! Classifications and their attribute tables
//!
//! Each object carries one of thirteen classifications. For every
//! classification the tables below say, per attribute kind, whether the kind
//! is mandatory (`M`), optional (`O`) or forbidden (`F`), separately for the
//! static object record and the per-frame record. Kinds without a row are
//! forbidden for every classification.

use std::fmt;

use aveas_attribute::AttributeKind as K;

aveas_attribute::wire_enum! {
    /// Taxonomy tag of a scene object
    pub enum Classification {
        /// Animal
        Animal => "animal",
        /// Bicycle
        Bicycle => "vehicle/bicycle",
        /// Bus
        Bus => "vehicle/bus",
        /// Passenger car
        Car => "vehicle/car",
        /// Pedestrian
        HumanPedestrian => "human/pedestrian",
        /// Mobility device (wheelchair, scooter, ...)
        MobilityDevice => "vehicle/mobility_device",
        /// Motorcycle
        Motorcycle => "vehicle/motorcycle",
        /// Anything else that moves
        OtherObject => "other",
        /// Pushed or pulled object (pram, handcart, ...)
        PushablePullable => "pushable_pullable",
        /// Rail vehicle
        RailVehicle => "vehicle/railvehicle",
        /// Trailer
        Trailer => "vehicle/trailer",
        /// Truck
        Truck => "vehicle/truck",
        /// Van
        Van => "vehicle/van",
    }
}

impl Classification {
    /// Column of this classification in the attribute tables
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self as usize
    }
}

/// Whether a kind must, may or must not appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// Required
    Mandatory,
    /// Permitted
    Optional,
    /// Not permitted
    Forbidden,
}

/// Static object record or per-frame record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerRole {
    /// `objects/<uid>/object_data`
    Static,
    /// `frames/<fid>/objects/<uid>/object_data`
    Dynamic,
}

impl fmt::Display for ContainerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => f.write_str("static"),
            Self::Dynamic => f.write_str("dynamic"),
        }
    }
}

/// One table row: presence per classification, in column order
pub type TableRow = (K, [Presence; 13]);

const M: Presence = Presence::Mandatory;
const O: Presence = Presence::Optional;
const F: Presence = Presence::Forbidden;

/// Static attributes per classification
pub const STATIC_TABLE: &[TableRow] = &[
    (K::IsRecorder, [F, M, M, M, M, M, M, M, F, M, F, M, M]),
    (K::AttachedTo, [F, F, F, F, F, F, F, O, O, O, O, F, F]),
    (K::ImpactPoint, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::ImpactPointUStdDev, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::ImpactVelocity, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::ImpactVelocityUStdDev, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::ImpactFrame, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::ClassificationUncertainties, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::DimensionsSize, [M, M, M, M, M, M, M, M, M, M, M, M, M]),
    (K::DimensionsSizeUStdDev, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::DimensionsCenterOfGravity, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::DimensionsCenterOfGravityUStdDev, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::SummarySpeedMax, [M, M, M, M, M, M, M, M, M, M, M, M, M]),
    (K::SummarySpeedMaxUStdDev, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::SummarySpeedMin, [M, M, M, M, M, M, M, M, M, M, M, M, M]),
    (K::SummarySpeedMinUStdDev, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::SummaryAccelMax, [M, M, M, M, M, M, M, M, M, M, M, M, M]),
    (K::SummaryAccelMaxUStdDev, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::SummaryAccelMin, [M, M, M, M, M, M, M, M, M, M, M, M, M]),
    (K::SummaryAccelMinUStdDev, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::SummarySteeringWheelAngleMax, [F, O, O, O, F, O, O, O, F, F, F, O, O]),
    (K::SummarySteeringWheelAngleMaxUStdDev, [F, O, O, O, F, O, O, O, F, F, F, O, O]),
    (K::SummarySteeringWheelAngleMin, [F, O, O, O, F, O, O, O, F, F, F, O, O]),
    (K::SummarySteeringWheelAngleMinUStdDev, [F, O, O, O, F, O, O, O, F, F, F, O, O]),
    (K::SummarySteeringAngleMax, [F, M, M, M, F, M, M, M, F, F, F, M, M]),
    (K::SummarySteeringAngleMaxUStdDev, [F, O, O, O, F, O, O, O, F, F, F, O, O]),
    (K::SummarySteeringAngleMin, [F, M, M, M, F, M, M, M, F, F, F, M, M]),
    (K::SummarySteeringAngleMinUStdDev, [F, O, O, O, F, O, O, O, F, F, F, O, O]),
    (K::SummaryCoordinatesScenarioStart, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::SummaryCoordinatesScenarioStartUStdDev, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::SummaryCoordinatesScenarioEnd, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::SummaryCoordinatesScenarioEndUStdDev, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::OperatorAge, [F, O, O, O, O, O, O, O, F, O, F, O, O]),
    (K::OperatorGender, [F, O, O, O, O, O, O, O, F, O, F, O, O]),
    (K::OperatorPersonality, [F, O, O, O, O, O, O, O, F, O, F, O, O]),
    (K::OperatorBodyHeight, [F, O, O, O, O, O, O, O, F, O, F, O, O]),
];

/// Dynamic attributes per classification
pub const DYNAMIC_TABLE: &[TableRow] = &[
    (K::BoundingBox, [M, M, M, M, M, M, M, M, M, M, M, M, M]),
    (K::BoundingBoxUStdDev, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::Velocity, [M, M, M, M, M, M, M, M, M, M, M, M, M]),
    (K::VelocityUStdDev, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::Acceleration, [M, M, M, M, M, M, M, M, M, M, M, M, M]),
    (K::AccelerationUStdDev, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::InteriorHasRider, [F, M, F, F, F, M, M, M, F, F, F, F, F]),
    (K::InteriorSteeringAngle, [F, O, O, O, F, O, O, O, F, F, F, O, O]),
    (K::InteriorSteeringAngleUStdDev, [F, O, O, O, F, O, O, O, F, F, F, O, O]),
    (K::InteriorAutomatedControlLongitudinal, [F, O, O, O, F, O, O, O, F, O, F, O, O]),
    (K::InteriorAutomatedControlLateral, [F, O, O, O, F, O, O, O, F, F, F, O, O]),
    (K::InteriorWiper, [F, O, O, O, F, O, O, O, F, O, F, O, O]),
    (K::InteriorGear, [F, O, O, O, F, O, O, O, F, O, F, O, O]),
    (K::InteriorAcceleratorPedal, [F, O, O, O, F, O, O, O, F, O, F, O, O]),
    (K::InteriorBrakePedal, [F, O, O, O, F, O, O, O, F, O, F, O, O]),
    (K::LightsBrake, [F, O, O, O, F, O, O, O, F, O, O, O, O]),
    (K::LightsIndicatorLeft, [F, O, O, O, F, O, O, O, F, O, O, O, O]),
    (K::LightsIndicatorRight, [F, O, O, O, F, O, O, O, F, O, O, O, O]),
    (K::LightsFront, [F, O, O, O, F, O, O, O, F, O, O, O, O]),
    (K::LightsDaytime, [F, O, O, O, F, O, O, O, F, O, O, O, O]),
    (K::LightsHighBeam, [F, O, O, O, F, O, O, O, F, O, O, O, O]),
    (K::OpenDriveRoadId, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::OpenDriveLocalRoadCoordinates, [M, M, M, M, M, M, M, M, M, M, M, M, M]),
    (K::OpenDriveLocalRoadCoordinatesUStdDev, [O, O, O, O, O, O, O, O, O, O, O, O, O]),
    (K::TrafficDensity, [F, O, O, O, F, O, O, O, F, O, F, O, O]),
    (K::TrafficDensityUStdDev, [F, O, O, O, F, O, O, O, F, O, F, O, O]),
    (K::TrafficVolume, [F, O, O, O, F, O, O, O, F, O, F, O, O]),
    (K::TrafficVolumeUStdDev, [F, O, O, O, F, O, O, O, F, O, F, O, O]),
    (K::RoadSpeedLimit, [F, O, O, O, F, O, O, O, F, O, F, O, O]),
    (K::RoadClassification, [F, M, M, M, F, M, M, M, F, M, M, M, M]),
    (K::RoadNumberLanesLeftLegal, [F, M, M, M, F, M, M, M, F, M, M, M, M]),
    (K::RoadNumberLanesLeftPhysical, [F, M, M, M, F, M, M, M, F, M, M, M, M]),
    (K::RoadNumberLanesRightLegal, [F, M, M, M, F, M, M, M, F, M, M, M, M]),
    (K::RoadNumberLanesRightPhysical, [F, M, M, M, F, M, M, M, F, M, M, M, M]),
    (K::OperatorHeadRotation, [F, O, O, O, O, O, O, O, F, O, F, O, O]),
    (K::OperatorHeadRotationUStdDev, [F, O, O, O, O, O, O, O, F, O, F, O, O]),
    (K::OperatorFocussedPoint, [F, O, O, O, O, O, O, O, F, O, F, O, O]),
    (K::OperatorFocussedPointUStdDev, [F, O, O, O, O, O, O, O, F, O, F, O, O]),
    (K::OperatorViewingAngle, [F, O, O, O, O, O, O, O, F, O, F, O, O]),
    (K::OperatorFocussedObject, [F, O, O, O, O, O, O, O, F, O, F, O, O]),
    (K::OperatorFocussedObjectUncertainties, [F, O, O, O, O, O, O, O, F, O, F, O, O]),
    (K::OperatorFocussedObjectId, [F, O, O, O, O, O, O, O, F, O, F, O, O]),
    (K::OperatorPupil, [F, O, O, O, O, O, O, O, F, O, F, O, O]),
    (K::OperatorPupilUStdDev, [F, O, O, O, O, O, O, O, F, O, F, O, O]),
    (K::OperatorHandInteractionArea, [F, O, O, O, O, O, O, O, F, O, F, O, O]),
    (K::OperatorSixDofRotationAndAcceleration, [F, O, O, O, O, O, O, O, F, O, F, O, O]),
    (K::HmiFeedbackVisual, [F, O, O, O, F, O, O, O, F, O, F, O, O]),
    (K::HmiFeedbackAcoustic, [F, O, O, O, F, O, O, O, F, O, F, O, O]),
    (K::HmiFeedbackOther, [F, O, O, O, F, O, O, O, F, O, F, O, O]),
];

/// Table for a container role
#[inline]
#[must_use]
pub const fn table(role: ContainerRole) -> &'static [TableRow] {
    match role {
        ContainerRole::Static => STATIC_TABLE,
        ContainerRole::Dynamic => DYNAMIC_TABLE,
    }
}

/// Presence of a kind for a classification and role
#[must_use]
pub fn presence(role: ContainerRole, classification: Classification, kind: K) -> Presence {
    table(role)
        .iter()
        .find(|(row_kind, _)| *row_kind == kind)
        .map_or(Presence::Forbidden, |(_, cells)| cells[classification.column()])
}
