//! Attribute catalog
//!
//! [`AttributeKind`] enumerates every attribute the format knows. Each kind
//! fixes, once and for all:
//!
//! - its wire `name` literal ([`AttributeKind::name`])
//! - the bucket it is stored in ([`AttributeKind::value_kind`])
//! - the shape of its `val` ([`AttributeKind::shape`])
//! - an optional local invariant ([`AttributeKind::constraint`])
//! - an optional fixed `type` tag ([`AttributeKind::type_tag`])
//!
//! Wire literals are authoritative. A handful of them differ from the name
//! the format documents for the attribute; those kinds are reported by
//! [`AttributeKind::wire_name_anomalies`] and keep their literal unchanged.

use std::fmt;

use crate::choice::ChoiceSet as C;
use crate::value::{ValueConstraint, ValueKind, ValueShape as S};

/// Thematic group of attribute kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeGroup {
    /// Pose, motion and identity of an object
    General,
    /// Object dimensions
    Dimensions,
    /// Human-machine interface feedback
    HmiFeedback,
    /// Impact and criticality measures
    Impact,
    /// Vehicle interior state
    Interior,
    /// Vehicle lights
    Lights,
    /// OpenDRIVE map references
    OpenDrive,
    /// Operator (driver/rider) state
    Operator,
    /// Road layout
    Road,
    /// Per-scenario summaries of an object
    Summary,
    /// Traffic measures
    Traffic,
    /// Scenario context data
    Scenario,
    /// Environment context data
    Environment,
    /// Event participants
    Event,
}

macro_rules! attribute_catalog {
    (
        $(
            $group:ident {
                $( $variant:ident => $wire:literal, $bucket:ident, $shape:expr; )+
            }
        )+
    ) => {
        /// Kind of an attribute, one per catalog entry
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum AttributeKind {
            $($(
                #[doc = concat!("Wire name `", $wire, "`.")]
                $variant,
            )+)+
        }

        impl AttributeKind {
            /// Every kind in catalog order
            pub const ALL: &'static [Self] = &[$($(Self::$variant,)+)+];

            /// Wire `name` literal
            #[inline]
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $($(Self::$variant => $wire,)+)+
                }
            }

            /// Stable identifier, unique per kind even where wire names collide
            #[inline]
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $($(Self::$variant => stringify!($variant),)+)+
                }
            }

            /// Bucket the kind is stored in
            #[inline]
            #[must_use]
            pub const fn value_kind(self) -> ValueKind {
                match self {
                    $($(Self::$variant => ValueKind::$bucket,)+)+
                }
            }

            /// Wire shape of the kind's value
            #[inline]
            #[must_use]
            pub const fn shape(self) -> S {
                match self {
                    $($(Self::$variant => $shape,)+)+
                }
            }

            /// Thematic group
            #[inline]
            #[must_use]
            pub const fn group(self) -> AttributeGroup {
                match self {
                    $($(Self::$variant => AttributeGroup::$group,)+)+
                }
            }
        }
    };
}

attribute_catalog! {
    General {
        BoundingBox => "bounding_box", Cuboid, S::Floats(9);
        BoundingBoxUStdDev => "bounding_box/ustddev", Vector, S::Floats(9);
        Velocity => "velocity", Vector, S::Floats(6);
        VelocityUStdDev => "velocity/ustddev", Vector, S::Floats(6);
        Acceleration => "acceleration", Vector, S::Floats(6);
        AccelerationUStdDev => "acceleration/ustddev", Vector, S::Floats(6);
        ClassificationUncertainties => "classification/uncertainties", Vector, S::Floats(13);
        IsRecorder => "is_recorder", Boolean, S::Boolean;
        AttachedTo => "attached_to", Text, S::Text;
        ExactestReferencePointType => "general/exactest_reference_point_type", Text, S::Choice(C::ReferencePointSide);
        ExactestReferencePoint => "general/exactest_reference_point", Vector, S::Floats(2);
    }
    Dimensions {
        DimensionsSize => "dimensions/size", Vector, S::Floats(3);
        DimensionsSizeUStdDev => "dimensions/size/ustddev", Vector, S::Floats(3);
        DimensionsCenterOfGravity => "dimensions/center_of_gravity", Vector, S::Floats(3);
        DimensionsCenterOfGravityUStdDev => "dimensions/center_of_gravity/ustddev", Vector, S::Floats(3);
    }
    HmiFeedback {
        HmiFeedbackVisual => "hmi_feedback/visual", Number, S::Integer;
        HmiFeedbackAcoustic => "hmi_feedback/acoustic", Number, S::Integer;
        HmiFeedbackOther => "hmi_feedback/other", Number, S::Integer;
    }
    Impact {
        ImpactPoint => "impact/point", Vector, S::Floats(2);
        ImpactPointUStdDev => "impact/point/ustddev", Vector, S::Floats(2);
        ImpactVelocity => "impact/velocity", Vector, S::Floats(2);
        ImpactVelocityUStdDev => "impact/velocity/ustddev", Vector, S::Floats(2);
        ImpactFrame => "impact/frame", Text, S::Text;
        ImpactGttcObjectIds => "impact/gttc/object_ids", Vector, S::TextSeq;
        ImpactGttcValues => "impact/gttc/values", Vector, S::FloatSeq;
        ImpactPretObjectIds => "impact/pret/object_ids", Vector, S::TextSeq;
        ImpactPretValues => "impact/pret/values", Vector, S::FloatSeq;
        ImpactThwObjectIds => "impact/thw/object_ids", Vector, S::TextSeq;
        ImpactThwValues => "impact/thw/values", Vector, S::FloatSeq;
    }
    Interior {
        InteriorHasRider => "interior/has_rider", Boolean, S::Boolean;
        InteriorSteeringAngle => "interior/steering_angle", Number, S::Float;
        InteriorSteeringAngleUStdDev => "interior/steering_angle/ustddev", Number, S::Float;
        InteriorAutomatedControlLongitudinal => "interior/automated_control/longitudinal", Boolean, S::Boolean;
        InteriorAutomatedControlLateral => "interior/automated_control/longitudinal", Boolean, S::Boolean;
        InteriorBrakePedal => "interior/brake_pedal", Number, S::Float;
        InteriorAcceleratorPedal => "interior/accelerator_pedal", Number, S::Float;
        InteriorGear => "interior/gear", Number, S::Integer;
        InteriorWiper => "interior/wiper", Boolean, S::Boolean;
    }
    Lights {
        LightsBrake => "lights/brake", Boolean, S::Boolean;
        LightsIndicatorLeft => "lights/indicator/left", Boolean, S::Boolean;
        LightsIndicatorRight => "lights/indicator/right", Boolean, S::Boolean;
        LightsFront => "lights/front", Boolean, S::Boolean;
        LightsDaytime => "lights/daytime", Boolean, S::Boolean;
        LightsHighBeam => "lights/high_beam", Boolean, S::Boolean;
    }
    OpenDrive {
        OpenDriveRoadId => "used_road_link", Text, S::Text;
        OpenDriveLaneId => "open_drive/lane_id", Text, S::Text;
        OpenDriveLanePosition => "open_drive/lane_position", Number, S::Float;
        OpenDriveLocalRoadCoordinates => "open_drive/local_road_coordinates", Vector, S::Floats(2);
        OpenDriveLocalRoadCoordinatesUStdDev => "open_drive/local_road_coordinates/ustddev", Vector, S::Floats(2);
    }
    Operator {
        OperatorHeadRotation => "operator/head_rotation", Number, S::Float;
        OperatorHeadRotationUStdDev => "operator/head_rotation/ustddev", Number, S::Float;
        OperatorFocussedPoint => "operator/focussed_point", Vector, S::Floats(3);
        OperatorFocussedPointUStdDev => "operator/focussed_point/ustddev", Vector, S::Floats(3);
        OperatorViewingAngle => "operator/viewing_angle", Number, S::Float;
        OperatorFocussedObject => "operator/focussed_object", Text, S::Choice(C::FocussedObject);
        OperatorFocussedObjectUncertainties => "operator/focussed_object/uncertainties", Vector, S::Floats(13);
        OperatorFocussedObjectId => "operator/focussed_object/id", Text, S::Text;
        OperatorPupil => "operator/pupil", Vector, S::Floats(7);
        OperatorPupilUStdDev => "operator/pupil/ustddev", Vector, S::Floats(7);
        OperatorHandInteractionArea => "operator/hand_interaction_area", Vector, S::Choices(C::HandInteractionArea, 2);
        OperatorSixDofRotationAndAcceleration => "operator/six_dof_rotation_and_acceleration", Vector, S::Floats(6);
        OperatorAge => "operator/age", Number, S::Integer;
        OperatorGender => "operator/gender", Text, S::Choice(C::Gender);
        OperatorPersonality => "operator/personality", Vector, S::Floats(10);
        OperatorBodyHeight => "operator/body_height", Number, S::Float;
    }
    Road {
        RoadSpeedLimit => "road/speed_limit", Number, S::Float;
        RoadClassification => "road/classification", Text, S::Choice(C::RoadClassification);
        RoadNumberLanesLeftLegal => "road/number_lanes/left/legal", Number, S::Integer;
        RoadNumberLanesLeftPhysical => "road/number_lanes/left/physical", Number, S::Integer;
        RoadNumberLanesRightLegal => "road/number_lanes/right/legal", Number, S::Integer;
        RoadNumberLanesRightPhysical => "road/number_lanes/right/physical", Number, S::Integer;
    }
    Summary {
        SummarySpeedMax => "summary/speed/max", Number, S::Float;
        SummarySpeedMaxUStdDev => "summary/speed/max/ustddev", Number, S::Float;
        SummarySpeedMin => "summary/speed/min", Number, S::Float;
        SummarySpeedMinUStdDev => "summary/speed/min/ustddev", Number, S::Float;
        SummaryAccelMax => "summary/accel/max", Number, S::Float;
        SummaryAccelMaxUStdDev => "summary/accel/max/ustddev", Number, S::Float;
        SummaryAccelMin => "summary/accel/min", Number, S::Float;
        SummaryAccelMinUStdDev => "summary/accel/min/ustddev", Number, S::Float;
        SummarySteeringWheelAngleMax => "summary/steering_wheel_angle/max", Number, S::Float;
        SummarySteeringWheelAngleMaxUStdDev => "summary/steering_wheel_angle/max/ustddev", Number, S::Float;
        SummarySteeringWheelAngleMin => "summary/steering_wheel_angle/min", Number, S::Float;
        SummarySteeringWheelAngleMinUStdDev => "summary/steering_wheel_angle/min/ustddev", Number, S::Float;
        SummarySteeringAngleMax => "summary/steering_angle/max", Number, S::Float;
        SummarySteeringAngleMaxUStdDev => "summary/steering_angle/max/ustddev", Number, S::Float;
        SummarySteeringAngleMin => "summary/steering_angle/min", Number, S::Float;
        SummarySteeringAngleMinUStdDev => "summary/steering_angle/min/ustddev", Number, S::Float;
        SummaryCoordinatesScenarioStart => "summary/coordinates/scenario_start", Vector, S::Floats(3);
        SummaryCoordinatesScenarioStartUStdDev => "summary/coordinates/scenario_start/ustddev", Vector, S::Floats(3);
        SummaryCoordinatesScenarioEnd => "summary/coordinates/scenario_end", Vector, S::Floats(3);
        SummaryCoordinatesScenarioEndUStdDev => "summary/coordinates/scenario_end/ustddev", Vector, S::Floats(3);
    }
    Traffic {
        TrafficDensity => "traffic/density", Number, S::Float;
        TrafficDensityUStdDev => "traffic/density/ustddev", Number, S::Float;
        TrafficVolume => "traffic/volume", Number, S::Float;
        TrafficVolumeUStdDev => "traffic/volume/ustddev", Number, S::Float;
    }
    Scenario {
        ScenarioIsStaged => "scenario/is_staged", Boolean, S::Boolean;
        ScenarioIsBiased => "scenario/is_biased", Boolean, S::Boolean;
        ScenarioIsSampled => "scenario/is_sampled", Boolean, S::Boolean;
        ScenarioIsSampledReferenceToSourceScenario => "scenario/is_sampled/reference_to_source_scenario", Text, S::Text;
        ScenarioMinimumVehicleDistanceS => "scenario/minimum_vehicle_distance_s", Number, S::Float;
        ScenarioMinimumVehicleDistanceSUStdDev => "scenario/minimum_vehicle_distance_s/ustddev", Number, S::Float;
        ScenarioMinimumVehicleDistanceSFrame => "scenario/minimum_vehicle_distance_s/frame", Text, S::Text;
        ScenarioContainsHighway => "scenario/contains_highway", Boolean, S::Boolean;
        ScenarioContainsUrban => "scenario/contains_urban", Boolean, S::Boolean;
        ScenarioContainsRural => "scenario/contains_rural", Boolean, S::Boolean;
        ScenarioCourse => "scenario/course", Vector, S::TextSeq;
        ScenarioMinimumVehicleSpeed => "scenario/minimum_vehicle_speed", Number, S::Float;
        ScenarioMinimumVehicleSpeedUStdDev => "scenario/minimum_vehicle_speed/ustddev", Number, S::Float;
        ScenarioMinimumVehicleSpeedFrame => "scenario/minimum_vehicle_speed/frame", Text, S::Text;
        ScenarioMaximumVehicleSpeed => "scenario/maximum_vehicle_speed", Number, S::Float;
        ScenarioMaximumVehicleSpeedUStdDev => "scenario/maximum_vehicle_speed/ustddev", Number, S::Float;
        ScenarioMaximumVehicleSpeedFrame => "scenario/maximum_vehicle_speed/frame", Text, S::Text;
        ScenarioStartLocation => "scenario/start/location", Text, S::Text;
        ScenarioStartCoordinates => "scenario/start/coordinates", Vector, S::Floats(3);
        ScenarioEndLocation => "scenario_end/location", Text, S::Text;
        ScenarioEndCoordinates => "scenario/end/coordinates", Vector, S::Floats(3);
        ScenarioRatioAverageSpeedToSpeedLimit => "scenario/ratio_average_speed_to_speed_limit", Number, S::Float;
        ScenarioRatioAverageSpeedToSpeedLimitUStdDev => "scenario/ratio_average_speed_to_speed_limit/ustddev", Number, S::Float;
        ScenarioWeekdayNumber => "scenario/weekday_number", Number, S::Integer;
    }
    Environment {
        EnvironmentLightingConditions => "lighting_conditions", Text, S::Choice(C::LightingCondition);
        EnvironmentLightingConditionsUncertainties => "environment/lighting_conditions/uncertainties", Vector, S::Floats(4);
        EnvironmentRoadCondition => "road_condition", Text, S::Choice(C::RoadCondition);
        EnvironmentRoadConditionUncertainties => "environment/road_condition/uncertainties", Vector, S::Floats(3);
        EnvironmentVisibilityRange => "environment/visibility_range", Number, S::Integer;
        EnvironmentVisibilityRangeUStdDev => "environment/visibility_range/ustddev", Number, S::Float;
        EnvironmentPrecipitationIntensity => "environment/precipitation_intensity", Number, S::Integer;
        EnvironmentPrecipitationIntensityUStdDev => "environment/precipitation_intensity/ustddev", Number, S::Float;
        EnvironmentTemperature => "environment/temperature_celsius", Number, S::Integer;
        EnvironmentTemperatureUStdDev => "environment/temperature/ustddev", Number, S::Float;
        EnvironmentWindBeaufortForce => "environment/wind/beaufort_force", Number, S::Integer;
        EnvironmentWindBeaufortForceURadius => "environment/wind/beaufort_force/uradius", Number, S::Float;
        EnvironmentWindHeading => "environment/wind/heading", Number, S::Float;
        EnvironmentWindHeadingUStdDev => "environment/wind/heading/ustddev", Number, S::Float;
        EnvironmentCloudCover => "environment/cloud_cover", Number, S::Integer;
        EnvironmentCloudCoverURadius => "environment/cloud_cover/uradius", Number, S::Float;
    }
    Event {
        RoleAParticipantId => "event_participant/role_a_id", Text, S::Text;
        RoleBParticipantIds => "event_participants/role_b_ids", Vector, S::TextSeq;
    }
}

const UNIT_INTERVAL: ValueConstraint = ValueConstraint::Range { min: 0.0, max: 1.0 };

impl AttributeKind {
    /// Local invariant checked whenever an attribute of this kind is built
    #[must_use]
    pub const fn constraint(self) -> Option<ValueConstraint> {
        match self {
            Self::ClassificationUncertainties
            | Self::OperatorFocussedObjectUncertainties
            | Self::EnvironmentLightingConditionsUncertainties
            | Self::EnvironmentRoadConditionUncertainties => Some(ValueConstraint::ProbabilitySum),
            Self::InteriorBrakePedal | Self::InteriorAcceleratorPedal => Some(UNIT_INTERVAL),
            Self::OpenDriveLanePosition => Some(ValueConstraint::Range { min: -0.5, max: 0.5 }),
            _ => None,
        }
    }

    /// Fixed wire `type` tag, emitted next to `name` and `val`
    #[must_use]
    pub const fn type_tag(self) -> Option<&'static str> {
        match self {
            Self::SummaryAccelMax
            | Self::SummaryAccelMin
            | Self::TrafficDensity
            | Self::TrafficVolume
            | Self::RoleAParticipantId => Some("value"),
            Self::RoleBParticipantIds => Some("values"),
            _ => None,
        }
    }

    /// Name the format documents for this kind
    ///
    /// Equal to [`Self::name`] except for the kinds listed by
    /// [`Self::wire_name_anomalies`].
    #[must_use]
    pub const fn documented_name(self) -> &'static str {
        match self {
            Self::OpenDriveRoadId => "open_drive/road_id",
            Self::InteriorAutomatedControlLateral => "interior/automated_control/lateral",
            Self::ScenarioEndLocation => "scenario/end/location",
            _ => self.name(),
        }
    }

    /// Kinds whose wire literal differs from their documented name
    pub fn wire_name_anomalies() -> impl Iterator<Item = Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|kind| kind.name() != kind.documented_name())
    }

    /// Kinds using `name` as their wire literal, in catalog order
    ///
    /// Usually zero or one kind; more than one where literals collide.
    pub fn candidates_for_name(name: &str) -> impl Iterator<Item = Self> + '_ {
        Self::ALL.iter().copied().filter(move |kind| kind.name() == name)
    }

    /// Every kind of a group, in catalog order
    pub fn in_group(group: AttributeGroup) -> impl Iterator<Item = Self> {
        Self::ALL.iter().copied().filter(move |kind| kind.group() == group)
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_unique() {
        let labels: HashSet<_> = AttributeKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels.len(), AttributeKind::ALL.len());
    }

    #[test]
    fn wire_names_collide_only_for_lateral_control() {
        let mut seen = HashSet::new();
        let collisions: Vec<_> = AttributeKind::ALL
            .iter()
            .filter(|k| !seen.insert(k.name()))
            .copied()
            .collect();
        assert_eq!(collisions, vec![AttributeKind::InteriorAutomatedControlLateral]);
    }

    #[test]
    fn anomalies_keep_wire_literal() {
        let anomalies: Vec<_> = AttributeKind::wire_name_anomalies().collect();
        assert_eq!(
            anomalies,
            vec![
                AttributeKind::InteriorAutomatedControlLateral,
                AttributeKind::OpenDriveRoadId,
                AttributeKind::ScenarioEndLocation,
            ]
        );
        assert_eq!(AttributeKind::OpenDriveRoadId.name(), "used_road_link");
        assert_eq!(AttributeKind::ScenarioEndLocation.name(), "scenario_end/location");
    }

    #[test]
    fn candidates_follow_catalog_order() {
        let found: Vec<_> =
            AttributeKind::candidates_for_name("interior/automated_control/longitudinal").collect();
        assert_eq!(
            found,
            vec![
                AttributeKind::InteriorAutomatedControlLongitudinal,
                AttributeKind::InteriorAutomatedControlLateral,
            ]
        );
        assert_eq!(AttributeKind::candidates_for_name("nope").count(), 0);
    }

    #[test]
    fn cuboid_bucket_holds_only_bounding_box() {
        let cuboids: Vec<_> = AttributeKind::ALL
            .iter()
            .filter(|k| k.value_kind() == ValueKind::Cuboid)
            .copied()
            .collect();
        assert_eq!(cuboids, vec![AttributeKind::BoundingBox]);
    }

    #[test]
    fn constrained_kinds() {
        assert_eq!(
            AttributeKind::ClassificationUncertainties.constraint(),
            Some(ValueConstraint::ProbabilitySum)
        );
        assert_eq!(
            AttributeKind::OpenDriveLanePosition.constraint(),
            Some(ValueConstraint::Range { min: -0.5, max: 0.5 })
        );
        assert_eq!(AttributeKind::Velocity.constraint(), None);
    }

    #[test]
    fn context_groups_are_populated() {
        assert_eq!(AttributeKind::in_group(AttributeGroup::Scenario).count(), 24);
        assert_eq!(AttributeKind::in_group(AttributeGroup::Environment).count(), 16);
        assert_eq!(AttributeKind::in_group(AttributeGroup::Event).count(), 2);
    }
}
