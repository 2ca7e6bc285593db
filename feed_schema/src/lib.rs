//! Shared data model for the raw region feed.
//!
//! The engine consumes a GeoJSON-like feature collection produced by an
//! external ingestion step. Only the properties relevant to enrichment are
//! modelled here: the prioritized candidate name fields, the water/land
//! indicators, and an optional embedded baseline reading. Geometry is an
//! external collaborator's concern and is ignored entirely.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error produced when decoding a raw feature collection.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to parse feature collection: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Baseline pollution reading embedded in a feed record.
///
/// Feeds that carry pre-computed readings supply one of these per feature;
/// feeds that do not leave it absent and the engine draws a baseline from
/// its configured source instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBaseline {
    pub air: u32,
    pub water: u32,
    pub soil: u32,
}

/// Properties of a single raw region record.
///
/// Field names mirror the upstream feed verbatim, including its inconsistent
/// casing. `Ward_No` may arrive as a string or a bare number, so it is kept
/// as a loose JSON value until id resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRegionRecord {
    #[serde(rename = "Ward_Name", default, skip_serializing_if = "Option::is_none")]
    pub ward_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "NAME", default, skip_serializing_if = "Option::is_none")]
    pub name_upper: Option<String>,
    #[serde(rename = "Ward_No", default, skip_serializing_if = "Option::is_none")]
    pub ward_no: Option<Value>,
    #[serde(rename = "isRiver", default)]
    pub is_river: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natural: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<RawBaseline>,
}

impl RawRegionRecord {
    /// Whether the feed marks this record as a water body.
    pub fn is_water(&self) -> bool {
        self.is_river || self.natural.as_deref() == Some("water")
    }

    /// Resolve the display id from the prioritized candidate fields.
    ///
    /// Returns `None` when no candidate is present or usable; callers
    /// substitute their placeholder sentinel.
    pub fn resolve_id(&self) -> Option<String> {
        if let Some(name) = non_empty(&self.ward_name) {
            return Some(name);
        }
        if let Some(name) = non_empty(&self.name) {
            return Some(name);
        }
        if let Some(name) = non_empty(&self.name_upper) {
            return Some(name);
        }
        match &self.ward_no {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// A single feature in the raw collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFeature {
    #[serde(default)]
    pub properties: RawRegionRecord,
}

/// The raw feature collection as fetched from the external feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFeatureSet {
    #[serde(default)]
    pub features: Vec<RawFeature>,
}

/// Decode a raw feature collection from its JSON text.
pub fn parse_feature_set(json: &str) -> Result<RawFeatureSet, FeedError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawRegionRecord {
        serde_json::from_value(value).expect("record should deserialize")
    }

    #[test]
    fn id_resolution_priority() {
        let rec = record(json!({
            "Ward_Name": "Karol Bagh",
            "name": "fallback",
            "NAME": "FALLBACK",
            "Ward_No": 12
        }));
        assert_eq!(rec.resolve_id().as_deref(), Some("Karol Bagh"));

        let rec = record(json!({ "name": "Okhla", "Ward_No": 12 }));
        assert_eq!(rec.resolve_id().as_deref(), Some("Okhla"));

        let rec = record(json!({ "NAME": "NAJAFGARH" }));
        assert_eq!(rec.resolve_id().as_deref(), Some("NAJAFGARH"));

        let rec = record(json!({ "Ward_No": 47 }));
        assert_eq!(rec.resolve_id().as_deref(), Some("47"));

        let rec = record(json!({}));
        assert_eq!(rec.resolve_id(), None);
    }

    #[test]
    fn blank_names_are_skipped() {
        let rec = record(json!({ "Ward_Name": "  ", "name": "Dwarka" }));
        assert_eq!(rec.resolve_id().as_deref(), Some("Dwarka"));
    }

    #[test]
    fn water_detection() {
        assert!(record(json!({ "isRiver": true })).is_water());
        assert!(record(json!({ "natural": "water" })).is_water());
        assert!(!record(json!({ "natural": "scrub" })).is_water());
        assert!(!record(json!({})).is_water());
    }

    #[test]
    fn feature_set_parses_with_embedded_baseline() {
        let set = parse_feature_set(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "properties": {
                            "Ward_Name": "Rohini",
                            "baseline": { "air": 180, "water": 40, "soil": 120 }
                        },
                        "geometry": null
                    }
                ]
            }"#,
        )
        .expect("collection should parse");
        assert_eq!(set.features.len(), 1);
        let baseline = set.features[0]
            .properties
            .baseline
            .expect("baseline should be present");
        assert_eq!(baseline.air, 180);
        assert_eq!(baseline.water, 40);
        assert_eq!(baseline.soil, 120);
    }

    #[test]
    fn unknown_properties_are_ignored() {
        let set = parse_feature_set(
            r#"{ "features": [ { "properties": { "shape_area": 1.5, "name": "Saket" } } ] }"#,
        )
        .expect("collection should parse");
        assert_eq!(
            set.features[0].properties.resolve_id().as_deref(),
            Some("Saket")
        );
    }
}
