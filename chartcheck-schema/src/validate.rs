use serde_json::Value;

use crate::config::ValidationConfig;
use crate::error::SchemaViolation;
use crate::record::{MultiSeriesRecord, MultiSeriesShell, SingleSeriesRecord};
use crate::types::{FrequencyDataset, Schema};

/// Label used in diagnostics for the parts of a multi-series element
pub const PARTS_DATA_LABEL: &str = "parts array";

/// Checks candidate datasets against the chart input schemas.
///
/// The `parse_*` methods return the first violation found. The `is_*`
/// methods log that violation at error level and return `false`. Candidates
/// are never modified.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn parse_single_series<'a>(
        &self,
        data: &'a Value,
        data_label: Option<&str>,
    ) -> Result<Vec<SingleSeriesRecord<'a>>, SchemaViolation> {
        let data_label = self.data_label(data_label);
        let elements = as_array(data, Schema::SingleSeries, data_label)?;
        if elements.is_empty() {
            return Err(empty(data_label));
        }
        elements
            .iter()
            .map(|element| SingleSeriesRecord::from_value(element, data_label))
            .collect()
    }

    pub fn parse_multi_series<'a>(
        &self,
        data: &'a Value,
        data_label: Option<&str>,
    ) -> Result<Vec<MultiSeriesRecord<'a>>, SchemaViolation> {
        let data_label = self.data_label(data_label);
        let elements = as_array(data, Schema::MultiSeries, data_label)?;
        if elements.is_empty() && !self.config.allow_empty_multi_series {
            return Err(empty(data_label));
        }
        elements
            .iter()
            .map(|element| {
                let shell = MultiSeriesShell::from_value(element, data_label)?;
                if shell.parts.is_empty() {
                    return Err(empty(PARTS_DATA_LABEL));
                }
                let parts = shell
                    .parts
                    .iter()
                    .map(|part| SingleSeriesRecord::from_value(part, PARTS_DATA_LABEL))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(MultiSeriesRecord {
                    label: shell.label,
                    parts,
                })
            })
            .collect()
    }

    pub fn parse_frequency_data(
        &self,
        data: &Value,
        data_label: Option<&str>,
    ) -> Result<FrequencyDataset, SchemaViolation> {
        let data_label = self.data_label(data_label);
        let elements = as_array(data, Schema::Frequency, data_label)?;
        if elements.is_empty() {
            return Err(empty(data_label));
        }
        elements
            .iter()
            .map(|element| {
                element
                    .as_f64()
                    .ok_or_else(|| SchemaViolation::NonNumeric {
                        data_label: data_label.to_string(),
                        element: element.to_string(),
                    })
            })
            .collect()
    }

    pub fn is_single_series_compliant(&self, data: &Value, data_label: Option<&str>) -> bool {
        report(self.parse_single_series(data, data_label))
    }

    pub fn is_multi_series_compliant(&self, data: &Value, data_label: Option<&str>) -> bool {
        report(self.parse_multi_series(data, data_label))
    }

    pub fn is_frequency_data_compliant(&self, data: &Value, data_label: Option<&str>) -> bool {
        report(self.parse_frequency_data(data, data_label))
    }

    /// Check `data` against whichever schema is named
    pub fn check(
        &self,
        schema: Schema,
        data: &Value,
        data_label: Option<&str>,
    ) -> Result<(), SchemaViolation> {
        match schema {
            Schema::SingleSeries => self.parse_single_series(data, data_label).map(|_| ()),
            Schema::MultiSeries => self.parse_multi_series(data, data_label).map(|_| ()),
            Schema::Frequency => self.parse_frequency_data(data, data_label).map(|_| ()),
        }
    }

    pub fn is_compliant(&self, schema: Schema, data: &Value, data_label: Option<&str>) -> bool {
        report(self.check(schema, data, data_label))
    }

    /// An absent or empty label falls back to the configured default
    fn data_label<'a>(&'a self, data_label: Option<&'a str>) -> &'a str {
        data_label
            .filter(|label| !label.is_empty())
            .unwrap_or(self.config.default_data_label.as_str())
    }
}

pub fn is_single_series_compliant(data: &Value, data_label: Option<&str>) -> bool {
    Validator::default().is_single_series_compliant(data, data_label)
}

pub fn is_multi_series_compliant(data: &Value, data_label: Option<&str>) -> bool {
    Validator::default().is_multi_series_compliant(data, data_label)
}

pub fn is_frequency_data_compliant(data: &Value, data_label: Option<&str>) -> bool {
    Validator::default().is_frequency_data_compliant(data, data_label)
}

pub fn is_compliant(schema: Schema, data: &Value, data_label: Option<&str>) -> bool {
    Validator::default().is_compliant(schema, data, data_label)
}

fn as_array<'a>(
    data: &'a Value,
    schema: Schema,
    data_label: &str,
) -> Result<&'a [Value], SchemaViolation> {
    data.as_array().map(Vec::as_slice).ok_or_else(|| SchemaViolation::NotAnArray {
        schema,
        data_label: data_label.to_string(),
    })
}

fn empty(data_label: &str) -> SchemaViolation {
    SchemaViolation::Empty {
        data_label: data_label.to_string(),
    }
}

fn report<T>(result: Result<T, SchemaViolation>) -> bool {
    match result {
        Ok(_) => true,
        Err(violation) => {
            log::error!("{violation}");
            false
        }
    }
}
