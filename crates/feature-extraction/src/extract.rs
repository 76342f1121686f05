//! Grouped Feature Extraction
//!
//! Orchestrates the pipeline: validate key columns, stable-sort by the sort
//! key, resolve the calculator selection, and evaluate every aggregation
//! expression in a single grouped pass.

use polars::prelude::*;
use tracing::debug;

use crate::error::FeatureError;
use crate::settings::FcParameters;

/// Extract features from a long-format frame, one output row per
/// `column_id` group.
///
/// The frame is sorted by `column_sort` (ascending, stable), grouped by
/// `column_id`, and every selected calculator is evaluated in one
/// aggregation pass. The output keeps the id column first, followed by one
/// `<column>__<calculator>` column per selected pair in selection order.
/// Cross-group row order is unspecified.
///
/// With `parameters` set to `None`, the minimal calculator set runs against
/// every non-key column. The input frame is never mutated.
pub fn extract_features(
    df: &DataFrame,
    column_id: &str,
    column_sort: &str,
    parameters: Option<&FcParameters>,
) -> Result<DataFrame, FeatureError> {
    for key in [column_id, column_sort] {
        if df.column(key).is_err() {
            return Err(FeatureError::MissingColumn(key.to_string()));
        }
    }

    let default_parameters = FcParameters::minimal();
    let parameters = parameters.unwrap_or(&default_parameters);

    let columns = df.get_column_names_str();
    let selection = parameters.resolve(&columns, column_id, column_sort);

    let mut exprs = Vec::new();
    for (column, features) in &selection {
        for feature in features {
            exprs.push(feature.expr(column));
        }
    }

    debug!(
        "Aggregating {} expressions over '{}' groups of {} rows",
        exprs.len(),
        column_id,
        df.height()
    );

    let out = df
        .clone()
        .lazy()
        .sort(
            [column_sort],
            SortMultipleOptions::new().with_maintain_order(true),
        )
        .group_by([col(column_id)])
        .agg(exprs)
        .collect()?;

    Ok(out)
}
