//! Duplicate row scanning.
//!
//! This module counts rows identical to an earlier row using a set of
//! normalized row keys, one pass over the data.

use std::collections::HashSet;

use crate::dataset::{CellValue, Dataset};

/// Largest integer magnitude an f64 can represent exactly.
const MAX_EXACT_INT_IN_F64: f64 = 9_007_199_254_740_992.0; // 2^53

/// Hashable normalized form of a cell for row comparison.
///
/// Numeric cells normalize by value, so `Int(2)` and `Float(2.0)` share a
/// key. Floats that are not exactly representable as integers compare by
/// bit pattern: exact equality with no tolerance, with `-0.0` folded into
/// `0.0`. Missing markers compare equal to each other only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CellKey {
    Int(i64),
    FloatBits(u64),
    Bool(bool),
    Text(String),
    Missing,
}

fn cell_key(value: &CellValue) -> CellKey {
    match value {
        CellValue::Int(v) => CellKey::Int(*v),
        CellValue::Float(v) => float_key(*v),
        CellValue::Bool(b) => CellKey::Bool(*b),
        CellValue::Text(s) => CellKey::Text(s.clone()),
        CellValue::Missing => CellKey::Missing,
    }
}

fn float_key(value: f64) -> CellKey {
    // Integral floats inside the exact range unify with integer cells;
    // this also folds -0.0 into 0. NaN and infinities fall through to the
    // bit-pattern key (their fract() is NaN).
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INT_IN_F64 {
        return CellKey::Int(value as i64);
    }
    CellKey::FloatBits(value.to_bits())
}

/// Scans a dataset for duplicate rows.
///
/// A row is a duplicate when an earlier row (by index) holds an identical
/// value in every column; missing markers compare equal to missing markers
/// and unequal to any present value. Returns the count of flagged rows,
/// i.e. total rows minus distinct first occurrences.
pub fn scan_duplicates(dataset: &Dataset) -> usize {
    if dataset.row_count() == 0 {
        return 0;
    }

    let mut seen: HashSet<Vec<CellKey>> = HashSet::with_capacity(dataset.row_count());
    let mut duplicates = 0;

    for index in 0..dataset.row_count() {
        let key: Vec<CellKey> = dataset
            .columns()
            .iter()
            .map(|column| cell_key(&column.values()[index]))
            .collect();

        if !seen.insert(key) {
            duplicates += 1;
        }
    }

    duplicates
}
