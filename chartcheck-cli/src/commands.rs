use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use chartcheck_fixtures::{FixtureGenerator, SeriesOptions};
use chartcheck_schema::config::ValidationConfig;
use chartcheck_schema::types::Schema;
use chartcheck_schema::Validator;
use log::{error, info};
use serde::Serialize;
use serde_json::Value;

/// Parameters of the `generate` command
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub schema: Schema,
    pub options: SeriesOptions,
    pub series: usize,
    pub seed: Option<u64>,
    pub pretty: bool,
}

/// Generate a random dataset for `request.schema`, serialized as JSON
pub fn generate(request: &GenerateRequest) -> Result<String> {
    let mut generator = match request.seed {
        Some(seed) => FixtureGenerator::seeded(seed),
        None => FixtureGenerator::from_entropy(),
    };
    let options = &request.options;
    match request.schema {
        Schema::SingleSeries => to_json(&generator.single_series(options)?, request.pretty),
        Schema::MultiSeries => {
            to_json(&generator.multi_series(request.series, options)?, request.pretty)
        }
        Schema::Frequency => to_json(
            &generator.frequency_data(options.number, options.max_count, options.min_count)?,
            request.pretty,
        ),
    }
}

/// Validate a JSON document. Violations are logged; the return value says
/// whether the document is compliant.
pub fn validate(
    schema: Schema,
    document: &str,
    data_label: Option<&str>,
    config: ValidationConfig,
) -> Result<bool> {
    let data: Value = serde_json::from_str(document).context("Input is not valid JSON")?;
    let validator = Validator::new(config);
    if schema != Schema::MultiSeries {
        return Ok(validator.is_compliant(schema, &data, data_label));
    }
    match validator.parse_multi_series(&data, data_label) {
        Ok(series) => {
            for record in &series {
                info!("Series {} has {} parts", record.label, record.parts.len());
            }
            Ok(true)
        }
        Err(violation) => {
            error!("{violation}");
            Ok(false)
        }
    }
}

/// Read the document at `path`, or stdin when no path is given
pub fn read_document(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut document = String::new();
            io::stdin()
                .read_to_string(&mut document)
                .context("Failed to read stdin")?;
            Ok(document)
        }
    }
}

fn to_json<T: Serialize>(dataset: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(dataset)?
    } else {
        serde_json::to_string(dataset)?
    };
    Ok(json)
}
