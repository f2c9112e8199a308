//! Audit report model.
//!
//! This module defines the structure handed to reporting collaborators.
//! Reports carry counts and flags only, never copies of the audited data.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete audit results for one dataset.
///
/// Holds the three scanner results keyed by column name: per-column missing
/// value counts (every column), the duplicate row count, and per-column
/// outlier masks (numeric columns only, one flag per row). Created fresh on
/// each audit invocation and never partial: a failed scan fails the whole
/// audit instead of leaving a hole in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Number of rows audited
    pub row_count: usize,
    /// Per-column count of missing values
    pub missing_values: BTreeMap<String, usize>,
    /// Count of rows identical to an earlier row
    pub duplicate_rows: usize,
    /// Per-numeric-column outlier flags, aligned to row order
    pub anomalies: BTreeMap<String, Vec<bool>>,
    /// Timestamp when the audit was performed
    pub audited_at: DateTime<Utc>,
}

impl AuditReport {
    /// Creates a new empty report for the given row count.
    pub fn new(row_count: usize) -> Self {
        Self {
            row_count,
            missing_values: BTreeMap::new(),
            duplicate_rows: 0,
            anomalies: BTreeMap::new(),
            audited_at: Utc::now(),
        }
    }

    /// Sets the per-column missing value counts.
    pub fn with_missing_values(mut self, missing_values: BTreeMap<String, usize>) -> Self {
        self.missing_values = missing_values;
        self
    }

    /// Sets the duplicate row count.
    pub fn with_duplicate_rows(mut self, duplicate_rows: usize) -> Self {
        self.duplicate_rows = duplicate_rows;
        self
    }

    /// Sets the per-column anomaly masks.
    pub fn with_anomalies(mut self, anomalies: BTreeMap<String, Vec<bool>>) -> Self {
        self.anomalies = anomalies;
        self
    }

    /// Returns the total number of missing values across all columns.
    pub fn total_missing(&self) -> usize {
        self.missing_values.values().sum()
    }

    /// Returns the total number of flagged outlier cells across all columns.
    pub fn total_anomalies(&self) -> usize {
        self.anomalies
            .values()
            .map(|mask| mask.iter().filter(|&&flag| flag).count())
            .sum()
    }

    /// Returns true if no scanner found an issue.
    pub fn is_clean(&self) -> bool {
        self.total_missing() == 0 && self.duplicate_rows == 0 && self.total_anomalies() == 0
    }
}
