use crate::types::Schema;

/// A structural reason a candidate dataset does not match its schema.
///
/// Offending elements are carried in their serialized JSON form so the
/// diagnostic can be logged as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaViolation {
    #[error("The {data_label} should be an ARRAY where {}.", .schema.element_shape())]
    NotAnArray { schema: Schema, data_label: String },

    #[error("The {data_label} must not be empty.")]
    Empty { data_label: String },

    #[error(
        "Every element of {data_label} must be an object with a {} key. This element doesn't comply: {element}",
        .key.to_uppercase()
    )]
    MissingKey {
        data_label: String,
        key: &'static str,
        element: String,
    },

    #[error("The value of the PARTS key should be an ARRAY. This element doesn't comply: {element}")]
    PartsNotAnArray { element: String },

    #[error("Every element of {data_label} must be a NUMBER. This element doesn't comply: {element}")]
    NonNumeric { data_label: String, element: String },
}
