use serde::Deserialize;

pub const DEFAULT_DATA_LABEL: &str = "data";

/// Validator configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Name used for the dataset in diagnostics when the caller gives none
    pub default_data_label: String,

    /// Whether an empty multi-series dataset is compliant. Single-series and
    /// frequency datasets are never allowed to be empty.
    pub allow_empty_multi_series: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            default_data_label: DEFAULT_DATA_LABEL.to_string(),
            allow_empty_multi_series: true,
        }
    }
}

impl ValidationConfig {
    pub fn with_allow_empty_multi_series(mut self, allow: bool) -> Self {
        self.allow_empty_multi_series = allow;
        self
    }

    pub fn with_default_data_label(mut self, data_label: impl Into<String>) -> Self {
        self.default_data_label = data_label.into();
        self
    }
}
