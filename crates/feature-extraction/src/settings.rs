//! Feature Calculator Selection
//!
//! Decides which calculators run against which value columns, either one
//! list for every column or an explicit per-column selection.

use serde::{Deserialize, Serialize};

use crate::error::FeatureError;
use crate::features::{split_qualified, Feature};

/// Selection of feature calculators per value column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FcParameters {
    /// One calculator list applied to every non-key column
    AllColumns(Vec<Feature>),
    /// Explicit (column, calculators) pairs, in declaration order
    PerColumn(Vec<(String, Vec<Feature>)>),
}

impl Default for FcParameters {
    fn default() -> Self {
        Self::minimal()
    }
}

impl FcParameters {
    /// The minimal calculator set applied to every value column
    pub fn minimal() -> Self {
        FcParameters::AllColumns(Feature::MINIMAL.to_vec())
    }

    /// Rebuild a per-column selection from qualified output column names.
    ///
    /// `["open__mean", "close__median"]` selects `mean` for `open` and
    /// `median` for `close`. Declaration order is preserved and repeated
    /// names are deduplicated.
    pub fn from_columns<S>(columns: impl IntoIterator<Item = S>) -> Result<Self, FeatureError>
    where
        S: AsRef<str>,
    {
        let mut per_column: Vec<(String, Vec<Feature>)> = Vec::new();
        for name in columns {
            let (column, feature) = split_qualified(name.as_ref())?;
            match per_column.iter_mut().find(|(known, _)| known.as_str() == column) {
                Some((_, features)) => {
                    if !features.contains(&feature) {
                        features.push(feature);
                    }
                }
                None => per_column.push((column.to_string(), vec![feature])),
            }
        }
        Ok(FcParameters::PerColumn(per_column))
    }

    /// Resolve this selection against the columns of an input frame.
    ///
    /// Key columns never receive calculators. Per-column selections naming
    /// columns absent from the frame are skipped.
    pub fn resolve(
        &self,
        columns: &[&str],
        column_id: &str,
        column_sort: &str,
    ) -> Vec<(String, Vec<Feature>)> {
        let is_value_column = |column: &str| {
            column != column_id && column != column_sort
        };

        match self {
            FcParameters::AllColumns(features) => columns
                .iter()
                .filter(|column| is_value_column(column))
                .map(|column| (column.to_string(), features.clone()))
                .collect(),
            FcParameters::PerColumn(per_column) => per_column
                .iter()
                .filter(|(column, _)| {
                    is_value_column(column) && columns.contains(&column.as_str())
                })
                .cloned()
                .collect(),
        }
    }
}
