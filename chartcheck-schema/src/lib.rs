pub mod config;
pub mod error;
pub mod record;
pub mod types;
pub mod validate;

pub use validate::{
    is_compliant, is_frequency_data_compliant, is_multi_series_compliant,
    is_single_series_compliant, Validator,
};
