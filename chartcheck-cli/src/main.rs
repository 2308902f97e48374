mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use chartcheck_fixtures::generator::{DEFAULT_MAX_COUNT, DEFAULT_MIN_COUNT, DEFAULT_NUMBER};
use chartcheck_fixtures::SeriesOptions;
use chartcheck_schema::config::ValidationConfig;
use chartcheck_schema::types::Schema;
use clap::{Parser, Subcommand};
use log::{error, info};

use crate::commands::GenerateRequest;

/// Generate and validate chart input datasets
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a random dataset as JSON
    Generate {
        /// Dataset shape: single-series, multi-series or frequency
        #[arg(short, long, default_value = "single-series")]
        schema: Schema,

        /// Number of categories (or observations for frequency data)
        #[arg(short, long, default_value_t = DEFAULT_NUMBER)]
        number: usize,

        /// Exclusive upper bound of generated counts
        #[arg(long, default_value_t = DEFAULT_MAX_COUNT, allow_negative_numbers = true)]
        max_count: i64,

        /// Inclusive lower bound of generated counts
        #[arg(long, default_value_t = DEFAULT_MIN_COUNT, allow_negative_numbers = true)]
        min_count: i64,

        /// Number of series for multi-series data
        #[arg(long, default_value_t = 3)]
        series: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Pretty print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Check a JSON dataset against a schema, exiting with status 1 if it does not comply
    Validate {
        /// Dataset shape: single-series, multi-series or frequency
        #[arg(short, long, default_value = "single-series")]
        schema: Schema,

        /// JSON file to check (defaults to stdin)
        file_path: Option<PathBuf>,

        /// Name of the dataset in diagnostics
        #[arg(short, long)]
        label: Option<String>,

        /// Treat an empty multi-series dataset as non-compliant
        #[arg(long)]
        reject_empty_multi_series: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            schema,
            number,
            max_count,
            min_count,
            series,
            seed,
            pretty,
        } => {
            let json = commands::generate(&GenerateRequest {
                schema,
                options: SeriesOptions::new(number, max_count, min_count),
                series,
                seed,
                pretty,
            })?;
            println!("{json}");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate {
            schema,
            file_path,
            label,
            reject_empty_multi_series,
        } => {
            let document = commands::read_document(file_path.as_deref())?;
            let config =
                ValidationConfig::default().with_allow_empty_multi_series(!reject_empty_multi_series);
            if commands::validate(schema, &document, label.as_deref(), config)? {
                info!("Dataset complies with the {schema} schema");
                Ok(ExitCode::SUCCESS)
            } else {
                error!("Dataset does not comply with the {schema} schema");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
