//! Core types for mass estimation

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Deserialize a field leniently: null or wrong-typed values become `None`
/// instead of failing the detection.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserialize an opaque identifier: strings pass through, numbers are
/// rendered as text, anything else is absent.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// One polygon vertex in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One detected object instance from the inference output.
///
/// Every field is optional: detectors differ in what they emit, and a
/// missing or wrong-typed field degrades to absent rather than failing
/// the run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Detection {
    /// Opaque detection identifier
    #[serde(default, deserialize_with = "lenient_id")]
    pub detection_id: Option<String>,

    /// Class label (e.g. "bottle", "net")
    #[serde(default, deserialize_with = "lenient")]
    pub class: Option<String>,

    /// Numeric class id
    #[serde(default, deserialize_with = "lenient")]
    pub class_id: Option<i64>,

    /// Detector confidence (0.0 - 1.0)
    #[serde(default, deserialize_with = "lenient")]
    pub confidence: Option<f64>,

    /// Bounding box x
    #[serde(default, deserialize_with = "lenient")]
    pub x: Option<f64>,

    /// Bounding box y
    #[serde(default, deserialize_with = "lenient")]
    pub y: Option<f64>,

    /// Bounding box width
    #[serde(default, deserialize_with = "lenient")]
    pub width: Option<f64>,

    /// Bounding box height
    #[serde(default, deserialize_with = "lenient")]
    pub height: Option<f64>,

    /// Polygon outline vertices; fewer than 3 means zero area
    #[serde(default, deserialize_with = "lenient")]
    pub points: Option<Vec<Point>>,
}

impl Detection {
    /// Build from a raw prediction value. Non-mapping values degrade to
    /// an empty detection rather than failing the pipeline.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

/// One report row, derived from a [`Detection`].
/// Created once per detection, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct MassRow {
    pub detection_id: Option<String>,
    pub class: Option<String>,
    pub class_id: Option<i64>,
    pub confidence: Option<f64>,
    pub bbox_x: Option<f64>,
    pub bbox_y: Option<f64>,
    pub bbox_width: Option<f64>,
    pub bbox_height: Option<f64>,
    pub num_points: usize,
    pub area_px2: f64,
    pub mass_low_kg: f64,
    pub mass_mod_kg: f64,
    pub mass_high_kg: f64,
}

/// Column sums across all report rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MassTotals {
    pub area_px2: f64,
    pub mass_low_kg: f64,
    pub mass_mod_kg: f64,
    pub mass_high_kg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_detection_decodes() {
        let detection = Detection::from_value(&json!({
            "detection_id": "a1",
            "class": "bottle",
            "class_id": 3,
            "confidence": 0.87,
            "x": 10.0,
            "y": 20.0,
            "width": 30.0,
            "height": 40.0,
            "points": [{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 1, "y": 1}]
        }));

        assert_eq!(detection.detection_id.as_deref(), Some("a1"));
        assert_eq!(detection.class.as_deref(), Some("bottle"));
        assert_eq!(detection.class_id, Some(3));
        assert_eq!(detection.confidence, Some(0.87));
        assert_eq!(detection.x, Some(10.0));
        assert_eq!(detection.height, Some(40.0));
        assert_eq!(detection.points.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let detection = Detection::from_value(&json!({"class": "net"}));
        assert_eq!(detection.class.as_deref(), Some("net"));
        assert!(detection.detection_id.is_none());
        assert!(detection.confidence.is_none());
        assert!(detection.points.is_none());
    }

    #[test]
    fn test_wrong_typed_fields_degrade_to_absent() {
        let detection = Detection::from_value(&json!({
            "confidence": "high",
            "class_id": "three",
            "points": "not-a-list"
        }));
        assert!(detection.confidence.is_none());
        assert!(detection.class_id.is_none());
        assert!(detection.points.is_none());
    }

    #[test]
    fn test_numeric_id_rendered_as_text() {
        let detection = Detection::from_value(&json!({"detection_id": 42}));
        assert_eq!(detection.detection_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_non_mapping_value_is_empty_detection() {
        let detection = Detection::from_value(&json!("garbage"));
        assert!(detection.detection_id.is_none());
        assert!(detection.points.is_none());
    }

    #[test]
    fn test_integer_coordinates_decode_as_floats() {
        let detection = Detection::from_value(&json!({
            "points": [{"x": 0, "y": 0}, {"x": 10, "y": 0}, {"x": 10, "y": 10}]
        }));
        let points = detection.points.unwrap();
        assert_eq!(points[1], Point { x: 10.0, y: 0.0 });
    }
}
