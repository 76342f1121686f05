//! Feature Extraction Error Types

use thiserror::Error;

/// Errors during feature extraction
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Key column absent from the input frame
    #[error("Column '{0}' not found in input frame")]
    MissingColumn(String),

    /// Feature name not in the calculator catalogue
    #[error("Unknown feature calculator: {0}")]
    UnknownFeature(String),

    /// Output column name without exactly one '__' separator
    #[error("Malformed feature column '{0}': expected '<column>__<calculator>'")]
    MalformedColumnName(String),

    /// Error from the underlying dataframe engine
    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),
}
