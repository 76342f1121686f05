//! Grouped Time-Series Feature Extraction
//!
//! Computes a tsfresh-style minimal set of summary statistics per entity over
//! a long-format polars frame, one output row per entity and one output
//! column per `<source_column>__<calculator>` pair.

mod error;
mod extract;
mod features;
mod settings;

pub use error::FeatureError;
pub use extract::extract_features;
pub use features::{minimal_feature_set, qualified_name, split_qualified, Feature, SEPARATOR};
pub use settings::FcParameters;
