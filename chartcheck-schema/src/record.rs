//! Borrowed views over JSON elements whose required keys are known to be
//! present. Key values are left untyped; only their presence is part of the
//! schema.

use serde_json::Value;

use crate::error::SchemaViolation;

pub const LABEL_KEY: &str = "label";
pub const COUNT_KEY: &str = "count";
pub const PARTS_KEY: &str = "parts";

/// A single-series element with both `label` and `count` present
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleSeriesRecord<'a> {
    pub label: &'a Value,
    pub count: &'a Value,
}

impl<'a> SingleSeriesRecord<'a> {
    pub fn from_value(element: &'a Value, data_label: &str) -> Result<Self, SchemaViolation> {
        Ok(Self {
            label: required_key(element, LABEL_KEY, data_label)?,
            count: required_key(element, COUNT_KEY, data_label)?,
        })
    }
}

/// A multi-series element with a `label` and an array of `parts`. The parts
/// themselves have not been checked yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiSeriesShell<'a> {
    pub label: &'a Value,
    pub parts: &'a [Value],
}

impl<'a> MultiSeriesShell<'a> {
    pub fn from_value(element: &'a Value, data_label: &str) -> Result<Self, SchemaViolation> {
        let label = required_key(element, LABEL_KEY, data_label)?;
        let parts = required_key(element, PARTS_KEY, data_label)?
            .as_array()
            .ok_or_else(|| SchemaViolation::PartsNotAnArray {
                element: element.to_string(),
            })?;
        Ok(Self { label, parts })
    }
}

/// A multi-series element whose parts are all valid single-series records
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSeriesRecord<'a> {
    pub label: &'a Value,
    pub parts: Vec<SingleSeriesRecord<'a>>,
}

fn required_key<'a>(
    element: &'a Value,
    key: &'static str,
    data_label: &str,
) -> Result<&'a Value, SchemaViolation> {
    element
        .as_object()
        .and_then(|object| object.get(key))
        .ok_or_else(|| SchemaViolation::MissingKey {
            data_label: data_label.to_string(),
            key,
            element: element.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_keeps_untyped_values() {
        let element = json!({"label": 7, "count": "many", "extra": true});
        let record = SingleSeriesRecord::from_value(&element, "data").unwrap();
        assert_eq!(record.label, &json!(7));
        assert_eq!(record.count, &json!("many"));
    }

    #[test]
    fn test_label_checked_before_count() {
        let element = json!({});
        let err = SingleSeriesRecord::from_value(&element, "data").unwrap_err();
        assert!(matches!(err, SchemaViolation::MissingKey { key: LABEL_KEY, .. }));
    }

    #[test]
    fn test_non_object_element_lacks_keys() {
        let element = json!(["label", "count"]);
        let err = SingleSeriesRecord::from_value(&element, "points").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Every element of points must be an object with a LABEL key. This element doesn't comply: [\"label\",\"count\"]"
        );
    }

    #[test]
    fn test_parts_must_be_array() {
        let element = json!({"label": "S1", "parts": {"label": "A", "count": 1}});
        let err = MultiSeriesShell::from_value(&element, "data").unwrap_err();
        assert!(matches!(err, SchemaViolation::PartsNotAnArray { .. }));
    }
}
