//! Missing value scanning.
//!
//! This module counts missing markers per column. Presentation of the
//! counts is left to the caller; the scan only returns data.

use std::collections::BTreeMap;

use crate::dataset::Dataset;

/// Scans a dataset for missing values.
///
/// Returns a per-column count of missing markers, keyed by column name.
/// Every column appears in the result, including fully populated ones with
/// a count of zero. A present `Float(NaN)` is a (malformed) present value,
/// not a missing marker, and is not counted here.
pub fn scan_missing(dataset: &Dataset) -> BTreeMap<String, usize> {
    dataset
        .columns()
        .iter()
        .map(|column| (column.name().to_string(), column.missing_count()))
        .collect()
}
