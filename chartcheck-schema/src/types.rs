use serde::{Deserialize, Serialize};

/// The dataset shapes accepted by the chart components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Schema {
    /// Labeled counts, used by pie, donut and bar charts
    SingleSeries,
    /// Named series, each made of labeled counts
    MultiSeries,
    /// Bare numeric observations
    Frequency,
}

impl Schema {
    /// Shape of one element, as worded in diagnostics
    pub fn element_shape(&self) -> &'static str {
        match self {
            Schema::SingleSeries => "each element has a label and a count",
            Schema::MultiSeries => "each element has a series label and a parts array",
            Schema::Frequency => "each element is a number",
        }
    }
}

/// One category of a single-series dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleSeriesElement {
    pub label: String,
    pub count: i64,
}

impl SingleSeriesElement {
    pub fn new(label: impl Into<String>, count: i64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// One named series of a multi-series dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSeriesElement {
    pub label: String,
    pub parts: SingleSeriesDataset,
}

pub type SingleSeriesDataset = Vec<SingleSeriesElement>;
pub type MultiSeriesDataset = Vec<MultiSeriesElement>;
pub type FrequencyDataset = Vec<f64>;
