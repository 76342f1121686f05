//! Feature Calculator Catalogue
//!
//! One aggregation-expression builder per calculator in the minimal set,
//! plus the codec for qualified output column names.

use std::fmt;
use std::str::FromStr;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::FeatureError;

/// Separator between source column and calculator in output column names
pub const SEPARATOR: &str = "__";

/// A feature calculator from the minimal set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Mean,
    Median,
    Variance,
    StandardDeviation,
    /// Row count of the group, nulls included
    Length,
    Maximum,
    Minimum,
    AbsoluteMaximum,
    RootMeanSquare,
    SumValues,
}

impl Feature {
    /// The minimal calculator set in canonical order
    pub const MINIMAL: [Feature; 10] = [
        Feature::Mean,
        Feature::Median,
        Feature::Variance,
        Feature::StandardDeviation,
        Feature::Length,
        Feature::Maximum,
        Feature::Minimum,
        Feature::AbsoluteMaximum,
        Feature::RootMeanSquare,
        Feature::SumValues,
    ];

    /// Calculator name as it appears in output column names
    pub fn name(self) -> &'static str {
        match self {
            Feature::Mean => "mean",
            Feature::Median => "median",
            Feature::Variance => "variance",
            Feature::StandardDeviation => "standard_deviation",
            Feature::Length => "length",
            Feature::Maximum => "maximum",
            Feature::Minimum => "minimum",
            Feature::AbsoluteMaximum => "absolute_maximum",
            Feature::RootMeanSquare => "root_mean_square",
            Feature::SumValues => "sum_values",
        }
    }

    /// Aggregation expression for this calculator over `column`, aliased to
    /// the qualified output name.
    ///
    /// Variance and standard deviation are population statistics (ddof 0).
    /// `Length` counts every row of the group; the other calculators follow
    /// polars aggregation semantics and skip nulls.
    pub fn expr(self, column: &str) -> Expr {
        let source = col(column);
        let agg = match self {
            Feature::Mean => source.mean(),
            Feature::Median => source.median(),
            Feature::Variance => source.var(0),
            Feature::StandardDeviation => source.std(0),
            Feature::Length => source.len(),
            Feature::Maximum => source.max(),
            Feature::Minimum => source.min(),
            Feature::AbsoluteMaximum => source.abs().max(),
            Feature::RootMeanSquare => source.pow(lit(2)).mean().sqrt(),
            Feature::SumValues => source.sum(),
        };
        agg.alias(qualified_name(column, self))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = FeatureError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Feature::MINIMAL
            .into_iter()
            .find(|feature| feature.name() == name)
            .ok_or_else(|| FeatureError::UnknownFeature(name.to_string()))
    }
}

/// All minimal-set expressions for one column, in canonical order
pub fn minimal_feature_set(column: &str) -> Vec<Expr> {
    Feature::MINIMAL
        .iter()
        .map(|feature| feature.expr(column))
        .collect()
}

/// Qualified output column name for a (column, calculator) pair
pub fn qualified_name(column: &str, feature: Feature) -> String {
    format!("{column}{SEPARATOR}{feature}")
}

/// Split a qualified output column name into its source column and
/// calculator.
///
/// Fails with [`FeatureError::MalformedColumnName`] unless the name contains
/// exactly one `__` separator, and with [`FeatureError::UnknownFeature`] when
/// the calculator part is not in the catalogue.
pub fn split_qualified(name: &str) -> Result<(&str, Feature), FeatureError> {
    let (column, calculator) = name
        .split_once(SEPARATOR)
        .ok_or_else(|| FeatureError::MalformedColumnName(name.to_string()))?;
    if calculator.contains(SEPARATOR) {
        return Err(FeatureError::MalformedColumnName(name.to_string()));
    }
    Ok((column, calculator.parse()?))
}
