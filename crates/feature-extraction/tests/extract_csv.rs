//! CSV-driven extraction tests over a small OHLC fixture.

use std::path::PathBuf;

use feature_extraction::{extract_features, FcParameters, Feature};
use polars::prelude::*;

fn load_fixture() -> DataFrame {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/ohlc.csv");
    CsvReadOptions::default()
        .try_into_reader_with_file_path(Some(path))
        .unwrap()
        .finish()
        .unwrap()
}

fn group_row(df: &DataFrame, symbol: &str) -> DataFrame {
    df.clone()
        .lazy()
        .filter(col("symbol").eq(lit(symbol)))
        .collect()
        .unwrap()
}

fn scalar(df: &DataFrame, name: &str) -> f64 {
    df.column(name).unwrap().f64().unwrap().get(0).unwrap()
}

#[test]
fn default_extraction_over_csv() {
    let df = load_fixture();
    let out = extract_features(&df, "symbol", "date", None).unwrap();

    // Two symbols, two value columns with ten calculators each
    assert_eq!(out.height(), 2);
    assert_eq!(out.width(), 1 + 2 * Feature::MINIMAL.len());

    let alpha = group_row(&out, "alpha");
    assert!((scalar(&alpha, "close__mean") - 3.0).abs() < 1e-10);
    assert!((scalar(&alpha, "close__median") - 3.0).abs() < 1e-10);
    assert!((scalar(&alpha, "close__variance") - 2.0).abs() < 1e-10);
    assert!((scalar(&alpha, "close__sum_values") - 15.0).abs() < 1e-10);
    assert!((scalar(&alpha, "open__mean") - 6.0).abs() < 1e-10);
    assert!((scalar(&alpha, "open__maximum") - 10.0).abs() < 1e-10);

    let beta = group_row(&out, "beta");
    assert!((scalar(&beta, "close__mean") - 20.0).abs() < 1e-10);
    assert!((scalar(&beta, "close__median") - 20.0).abs() < 1e-10);
    assert!((scalar(&beta, "open__minimum") - 5.0).abs() < 1e-10);

    let beta_length = beta
        .column("close__length")
        .unwrap()
        .u32()
        .unwrap()
        .get(0)
        .unwrap();
    assert_eq!(beta_length, 3);
}

#[test]
fn from_columns_extraction_over_csv() {
    let df = load_fixture();
    let parameters = FcParameters::from_columns(["open__mean", "close__median"]).unwrap();
    let out = extract_features(&df, "symbol", "date", Some(&parameters)).unwrap();

    assert_eq!(
        out.get_column_names_str(),
        vec!["symbol", "open__mean", "close__median"]
    );

    let alpha = group_row(&out, "alpha");
    assert!((scalar(&alpha, "open__mean") - 6.0).abs() < 1e-10);
    assert!((scalar(&alpha, "close__median") - 3.0).abs() < 1e-10);

    let beta = group_row(&out, "beta");
    assert!((scalar(&beta, "open__mean") - 15.0).abs() < 1e-10);
    assert!((scalar(&beta, "close__median") - 20.0).abs() < 1e-10);
}
