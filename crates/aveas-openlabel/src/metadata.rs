//! Annotation file metadata
//!
//! [`Metadata`] describes the file itself: who recorded the data, how, when,
//! under which usage rights and in which geographic projection.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DocumentError;

/// OpenLABEL schema version written by default
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Version of the AVEAS profile this crate produces and accepts
pub const AVEAS_SCHEMA_VERSION: &str = "0.4.10";

aveas_attribute::wire_enum! {
    /// Usage rights of the recorded data
    pub enum RightOfUse {
        /// Commercial use allowed, research included
        Commercial => "commercial",
        /// Research use only
        ResearchOnly => "research_only",
    }
}

aveas_attribute::wire_enum! {
    /// How the data was acquired
    pub enum AcquisitionMethod {
        /// From an aircraft
        Aerial => "aerial",
        /// From fixed infrastructure sensors
        Stationary => "stationary",
        /// From a moving recording vehicle
        InVehicle => "in-vehicle",
    }
}

/// Fixed `aveas_schema_version` field
///
/// Always encodes as [`AVEAS_SCHEMA_VERSION`]; decoding any other value fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AveasSchemaVersion;

impl AveasSchemaVersion {
    /// Version string
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        AVEAS_SCHEMA_VERSION
    }
}

impl fmt::Display for AveasSchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(AVEAS_SCHEMA_VERSION)
    }
}

impl Serialize for AveasSchemaVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(AVEAS_SCHEMA_VERSION)
    }
}

impl<'de> Deserialize<'de> for AveasSchemaVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == AVEAS_SCHEMA_VERSION {
            Ok(Self)
        } else {
            Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(&raw),
                &AVEAS_SCHEMA_VERSION,
            ))
        }
    }
}

fn default_schema_version() -> String {
    SCHEMA_VERSION.to_string()
}

/// Metadata about the annotation file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metadata {
    /// OpenLABEL schema version
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    /// AVEAS profile version
    #[serde(default)]
    pub aveas_schema_version: AveasSchemaVersion,
    /// Usage rights
    pub right_of_use: RightOfUse,
    /// Acquisition method
    pub acquisition_method: AcquisitionMethod,
    /// Institution or company that recorded the data; may carry copyright
    pub acquisition_partner: String,
    /// Acquisition date as `yyyy-MM-ddTHH:mm:ss.FFFZ`
    pub acquisition_date: String,
    /// Geographic reference system as an EPSG proj-string
    pub projection_string: String,
    /// Annotator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotator: Option<String>,
    /// Free-text comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Version of this file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_version: Option<String>,
    /// Name of this file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// gTTC threshold used for the `impact/gttc/*` attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_gttc: Option<f64>,
    /// PrET threshold used for the `impact/pret/*` attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_pret: Option<f64>,
    /// THW threshold used for the `impact/thw/*` attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_thw: Option<f64>,
}

impl Metadata {
    /// Start building metadata
    #[inline]
    #[must_use]
    pub fn builder() -> MetadataBuilder {
        MetadataBuilder::default()
    }
}

/// Builder for [`Metadata`]
#[derive(Debug, Clone, Default)]
pub struct MetadataBuilder {
    schema_version: Option<String>,
    right_of_use: Option<RightOfUse>,
    acquisition_method: Option<AcquisitionMethod>,
    acquisition_partner: Option<String>,
    acquisition_date: Option<String>,
    projection_string: Option<String>,
    annotator: Option<String>,
    comment: Option<String>,
    file_version: Option<String>,
    name: Option<String>,
    threshold_gttc: Option<f64>,
    threshold_pret: Option<f64>,
    threshold_thw: Option<f64>,
}

impl MetadataBuilder {
    /// Override the OpenLABEL schema version
    #[must_use]
    pub fn schema_version(mut self, version: impl Into<String>) -> Self {
        self.schema_version = Some(version.into());
        self
    }

    /// Set usage rights
    #[must_use]
    pub fn right_of_use(mut self, right_of_use: RightOfUse) -> Self {
        self.right_of_use = Some(right_of_use);
        self
    }

    /// Set acquisition method
    #[must_use]
    pub fn acquisition_method(mut self, method: AcquisitionMethod) -> Self {
        self.acquisition_method = Some(method);
        self
    }

    /// Set acquisition partner
    #[must_use]
    pub fn acquisition_partner(mut self, partner: impl Into<String>) -> Self {
        self.acquisition_partner = Some(partner.into());
        self
    }

    /// Set acquisition date
    #[must_use]
    pub fn acquisition_date(mut self, date: impl Into<String>) -> Self {
        self.acquisition_date = Some(date.into());
        self
    }

    /// Set projection string
    #[must_use]
    pub fn projection_string(mut self, projection: impl Into<String>) -> Self {
        self.projection_string = Some(projection.into());
        self
    }

    /// Set annotator
    #[must_use]
    pub fn annotator(mut self, annotator: impl Into<String>) -> Self {
        self.annotator = Some(annotator.into());
        self
    }

    /// Set comment
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Set file version
    #[must_use]
    pub fn file_version(mut self, version: impl Into<String>) -> Self {
        self.file_version = Some(version.into());
        self
    }

    /// Set file name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set gTTC, PrET and THW thresholds
    #[must_use]
    pub fn thresholds(mut self, gttc: f64, pret: f64, thw: f64) -> Self {
        self.threshold_gttc = Some(gttc);
        self.threshold_pret = Some(pret);
        self.threshold_thw = Some(thw);
        self
    }

    /// Produce the metadata
    ///
    /// # Errors
    /// Returns [`DocumentError::MissingField`] naming the first required
    /// field that was not set
    pub fn build(self) -> Result<Metadata, DocumentError> {
        Ok(Metadata {
            schema_version: self.schema_version.unwrap_or_else(default_schema_version),
            aveas_schema_version: AveasSchemaVersion,
            right_of_use: self
                .right_of_use
                .ok_or(DocumentError::MissingField("Metadata.right_of_use"))?,
            acquisition_method: self
                .acquisition_method
                .ok_or(DocumentError::MissingField("Metadata.acquisition_method"))?,
            acquisition_partner: self
                .acquisition_partner
                .ok_or(DocumentError::MissingField("Metadata.acquisition_partner"))?,
            acquisition_date: self
                .acquisition_date
                .ok_or(DocumentError::MissingField("Metadata.acquisition_date"))?,
            projection_string: self
                .projection_string
                .ok_or(DocumentError::MissingField("Metadata.projection_string"))?,
            annotator: self.annotator,
            comment: self.comment,
            file_version: self.file_version,
            name: self.name,
            threshold_gttc: self.threshold_gttc,
            threshold_pret: self.threshold_pret,
            threshold_thw: self.threshold_thw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn complete() -> MetadataBuilder {
        Metadata::builder()
            .right_of_use(RightOfUse::ResearchOnly)
            .acquisition_method(AcquisitionMethod::InVehicle)
            .acquisition_partner("foo bar institute")
            .acquisition_date("2000-01-01T01:01:01.001Z")
            .projection_string("example projection string")
    }

    #[test]
    fn builds_with_fixed_versions() {
        let metadata = complete().build().unwrap();
        assert_eq!(metadata.schema_version, "1.0.0");
        assert_eq!(metadata.aveas_schema_version.as_str(), "0.4.10");
    }

    #[test]
    fn missing_field_is_named() {
        let result = Metadata::builder()
            .right_of_use(RightOfUse::Commercial)
            .acquisition_method(AcquisitionMethod::Aerial)
            .build();
        assert!(matches!(
            result,
            Err(DocumentError::MissingField("Metadata.acquisition_partner"))
        ));
    }

    #[test]
    fn first_missing_field_wins() {
        let result = Metadata::builder().build();
        assert!(matches!(result, Err(DocumentError::MissingField("Metadata.right_of_use"))));
    }

    #[test]
    fn encodes_wire_strings_and_omits_absent_optionals() {
        let value = serde_json::to_value(complete().build().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "schema_version": "1.0.0",
                "aveas_schema_version": "0.4.10",
                "right_of_use": "research_only",
                "acquisition_method": "in-vehicle",
                "acquisition_partner": "foo bar institute",
                "acquisition_date": "2000-01-01T01:01:01.001Z",
                "projection_string": "example projection string",
            })
        );
    }

    #[test]
    fn thresholds_round_trip() {
        let metadata = complete().thresholds(1.5, 2.0, 0.8).name("drive 12").build().unwrap();
        let decoded: Metadata = serde_json::from_value(serde_json::to_value(&metadata).unwrap()).unwrap();
        assert_eq!(decoded, metadata);
    }

    #[test]
    fn foreign_profile_version_is_rejected() {
        let mut value = serde_json::to_value(complete().build().unwrap()).unwrap();
        value["aveas_schema_version"] = json!("0.3.0");
        assert!(serde_json::from_value::<Metadata>(value).is_err());
    }

    #[test]
    fn unknown_acquisition_method_is_rejected() {
        let mut value = serde_json::to_value(complete().build().unwrap()).unwrap();
        value["acquisition_method"] = json!("in_vehicle");
        assert!(serde_json::from_value::<Metadata>(value).is_err());
    }
}
