//! Prediction extraction from arbitrarily shaped JSON documents.
//!
//! Inference producers wrap their prediction lists in a handful of
//! container shapes: a single `{"predictions": [...]}` object, a list of
//! such objects, or an `{"outputs": [...]}` batch wrapper. [`predictions`]
//! walks whatever arrives and yields the individual prediction objects in
//! discovery order. Malformed or unrecognized shapes yield nothing; no
//! input shape is an error.

use serde_json::{Map, Value};
use std::collections::VecDeque;

/// Structural classification of one JSON value. First match wins: a
/// mapping with both recognized keys is treated as a predictions wrapper
/// and its other keys are not explored.
enum Shape<'a> {
    /// Mapping with a `"predictions"` sequence
    PredictionsWrapper(&'a [Value]),
    /// Mapping with an `"outputs"` sequence of prediction wrappers
    OutputsWrapper(&'a [Value]),
    /// Any other mapping; may hold wrappers nested under arbitrary keys
    GenericContainer(&'a Map<String, Value>),
    /// Sequence outside of a recognized wrapper key
    Sequence(&'a [Value]),
    /// Scalar or null; never holds predictions
    Scalar,
}

impl<'a> Shape<'a> {
    fn of(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => {
                if let Some(Value::Array(items)) = map.get("predictions") {
                    Shape::PredictionsWrapper(items)
                } else if let Some(Value::Array(items)) = map.get("outputs") {
                    Shape::OutputsWrapper(items)
                } else {
                    Shape::GenericContainer(map)
                }
            }
            Value::Array(items) => Shape::Sequence(items),
            _ => Shape::Scalar,
        }
    }
}

/// Iterate over the individual prediction objects in a parsed document.
pub fn predictions(document: &Value) -> Predictions<'_> {
    Predictions {
        ready: VecDeque::new(),
        stack: vec![document],
    }
}

/// Lazy, single-pass iterator over prediction objects.
///
/// Containers are classified depth-first in insertion order; prediction
/// sequences are drained before the traversal continues, so yielded order
/// matches source order.
pub struct Predictions<'a> {
    /// Prediction slices discovered but not yet yielded, in source order
    ready: VecDeque<std::slice::Iter<'a, Value>>,
    /// Containers still to classify; top of stack is visited next
    stack: Vec<&'a Value>,
}

impl<'a> Iterator for Predictions<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        loop {
            if let Some(front) = self.ready.front_mut() {
                match front.next() {
                    Some(item) => return Some(item),
                    None => {
                        self.ready.pop_front();
                        continue;
                    }
                }
            }

            let value = self.stack.pop()?;
            match Shape::of(value) {
                Shape::PredictionsWrapper(items) => {
                    self.ready.push_back(items.iter());
                }
                Shape::OutputsWrapper(outputs) => {
                    // Only mapping elements carrying a predictions
                    // sequence contribute; everything else is skipped.
                    for output in outputs {
                        if let Some(Value::Array(items)) =
                            output.as_object().and_then(|map| map.get("predictions"))
                        {
                            self.ready.push_back(items.iter());
                        }
                    }
                }
                Shape::GenericContainer(map) => {
                    for child in map.values().rev() {
                        if child.is_object() || child.is_array() {
                            self.stack.push(child);
                        }
                    }
                }
                Shape::Sequence(items) => {
                    for child in items.iter().rev() {
                        self.stack.push(child);
                    }
                }
                Shape::Scalar => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(document: &Value) -> Vec<String> {
        predictions(document)
            .map(|p| p["detection_id"].as_str().unwrap_or("?").to_string())
            .collect()
    }

    fn pred(id: &str) -> Value {
        json!({"detection_id": id})
    }

    #[test]
    fn test_single_predictions_wrapper() {
        let document = json!({"predictions": [pred("p1"), pred("p2")]});
        assert_eq!(ids(&document), ["p1", "p2"]);
    }

    #[test]
    fn test_list_of_wrappers() {
        let document = json!([
            {"predictions": [pred("p1")]},
            {"predictions": [pred("p2"), pred("p3")]}
        ]);
        assert_eq!(ids(&document), ["p1", "p2", "p3"]);
    }

    #[test]
    fn test_outputs_wrapper() {
        let document = json!({"outputs": [{"predictions": [pred("p1")]}]});
        assert_eq!(ids(&document), ["p1"]);
    }

    #[test]
    fn test_outputs_skips_elements_without_predictions() {
        let document = json!({"outputs": [
            {"meta": "x"},
            {"predictions": [pred("p1")]},
            7,
            {"predictions": [pred("p2")]}
        ]});
        assert_eq!(ids(&document), ["p1", "p2"]);
    }

    #[test]
    fn test_empty_mapping_yields_nothing() {
        assert_eq!(ids(&json!({})), Vec::<String>::new());
        assert_eq!(ids(&json!([])), Vec::<String>::new());
    }

    #[test]
    fn test_nested_fallback() {
        let document = json!({"foo": {"predictions": [pred("p1")]}});
        assert_eq!(ids(&document), ["p1"]);
    }

    #[test]
    fn test_deeply_nested_wrappers_in_source_order() {
        let document = json!({
            "alpha": {"inner": {"predictions": [pred("p1")]}},
            "beta": [{"predictions": [pred("p2")]}],
            "gamma": {"predictions": [pred("p3")]}
        });
        assert_eq!(ids(&document), ["p1", "p2", "p3"]);
    }

    #[test]
    fn test_first_match_wins_over_outputs() {
        // "predictions" takes priority; sibling "outputs" is not explored
        let document = json!({
            "predictions": [pred("p1")],
            "outputs": [{"predictions": [pred("p2")]}]
        });
        assert_eq!(ids(&document), ["p1"]);
    }

    #[test]
    fn test_non_sequence_predictions_falls_through() {
        // "predictions" holding a scalar is not a wrapper; the nested
        // mapping under another key is still found.
        let document = json!({
            "predictions": "nope",
            "other": {"predictions": [pred("p1")]}
        });
        assert_eq!(ids(&document), ["p1"]);
    }

    #[test]
    fn test_scalars_and_nulls_yield_nothing() {
        assert_eq!(ids(&json!(42)), Vec::<String>::new());
        assert_eq!(ids(&json!(null)), Vec::<String>::new());
        assert_eq!(ids(&json!([1, "two", null])), Vec::<String>::new());
    }

    #[test]
    fn test_mixed_list_with_scalars() {
        let document = json!([
            1,
            {"predictions": [pred("p1")]},
            "noise",
            {"wrapped": {"predictions": [pred("p2")]}}
        ]);
        assert_eq!(ids(&document), ["p1", "p2"]);
    }

    #[test]
    fn test_extraction_is_lazy() {
        let document = json!({"predictions": [pred("p1"), pred("p2"), pred("p3")]});
        let first = predictions(&document).next().unwrap();
        assert_eq!(first["detection_id"], "p1");
    }
}
