//! Statistical outlier detection over numeric columns.
//!
//! This module flags cells whose z-score against the column mean and
//! population standard deviation exceeds a threshold. Missing values are
//! excluded from the statistics so they cannot poison the z-scores of the
//! present values; their own flags are always `false`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dataset::{Column, Dataset};
use crate::error::{AuditError, Result};

use super::config::validate_threshold;

/// Statistical summary of a numeric column's present values.
///
/// The `mean` and `std_dev` fields are aggregates, not data values; a
/// reporting collaborator can show them next to the outlier flags without
/// echoing dataset contents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Mean of the present values
    pub mean: f64,
    /// Population standard deviation of the present values
    pub std_dev: f64,
    /// Number of present (non-missing) values
    pub present_count: usize,
}

impl ColumnStats {
    /// Computes mean and population standard deviation for a column.
    ///
    /// Missing cells are excluded. Fewer than 2 present values leave the
    /// standard deviation undefined, reported as zero. Population standard
    /// deviation divides by n, not n-1.
    ///
    /// # Errors
    /// Fails with [`AuditError::UnexpectedFailure`] when a present value is
    /// non-numeric or non-finite; malformed data is surfaced, never dropped.
    pub fn compute(column: &Column) -> Result<ColumnStats> {
        let mut values: Vec<f64> = Vec::with_capacity(column.len());

        for cell in column.values() {
            if cell.is_missing() {
                continue;
            }
            let value = cell.as_f64().ok_or_else(|| {
                AuditError::unexpected(format!(
                    "non-numeric value in column '{}'",
                    column.name()
                ))
            })?;
            if !value.is_finite() {
                return Err(AuditError::unexpected(format!(
                    "non-finite value {} in column '{}'",
                    value,
                    column.name()
                )));
            }
            values.push(value);
        }

        let present_count = values.len();
        if present_count < 2 {
            let mean = values.first().copied().unwrap_or(0.0);
            return Ok(ColumnStats {
                mean,
                std_dev: 0.0,
                present_count,
            });
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Ok(ColumnStats {
            mean,
            std_dev: variance.sqrt(),
            present_count,
        })
    }
}

/// Detects statistical outliers in the numeric columns of a dataset.
///
/// For each numeric column independently, computes per-cell z-scores
/// against the column's [`ColumnStats`] and returns a boolean mask aligned
/// to row order: `true` where the absolute z-score strictly exceeds
/// `z_threshold`. Missing cells are flagged `false`. A constant or
/// under-populated column has zero standard deviation and flags nothing.
/// Non-numeric columns are absent from the result, which is not an error.
///
/// Pure function of its inputs: identical dataset and threshold always
/// produce identical masks.
///
/// # Errors
/// - [`AuditError::InvalidThreshold`] when `z_threshold` is zero, negative,
///   NaN, or infinite
/// - [`AuditError::UnexpectedFailure`] when a numeric column holds a
///   non-finite present value
pub fn detect_anomalies(
    dataset: &Dataset,
    z_threshold: f64,
) -> Result<BTreeMap<String, Vec<bool>>> {
    validate_threshold(z_threshold)?;

    let mut masks: BTreeMap<String, Vec<bool>> = BTreeMap::new();

    for column in dataset.numeric_columns() {
        let stats = ColumnStats::compute(column)?;

        let mask: Vec<bool> = if stats.std_dev > 0.0 {
            column
                .values()
                .iter()
                .map(|cell| match cell.as_f64() {
                    Some(value) => (value - stats.mean).abs() / stats.std_dev > z_threshold,
                    None => false,
                })
                .collect()
        } else {
            // Zero deviation: no cell is evaluable, nothing to flag
            vec![false; column.len()]
        };

        let flagged = mask.iter().filter(|&&f| f).count();
        if flagged > 0 {
            tracing::debug!(
                "column '{}': {} of {} present values exceed z-score {}",
                column.name(),
                flagged,
                stats.present_count,
                z_threshold
            );
        }

        masks.insert(column.name().to_string(), mask);
    }

    Ok(masks)
}
