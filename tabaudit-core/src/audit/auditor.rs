//! Audit facade.
//!
//! This module provides the `Auditor` that runs all three scans over one
//! immutable dataset and packages the results into an `AuditReport`.

use crate::dataset::Dataset;
use crate::error::Result;

use super::anomaly::detect_anomalies;
use super::config::AuditConfig;
use super::duplicates::scan_duplicates;
use super::missing::scan_missing;
use super::report::AuditReport;

/// Audit orchestrator for tabular datasets.
///
/// The auditor holds the configuration and runs the missing value scan,
/// duplicate row scan, and anomaly detection over a borrowed dataset; the
/// scans are independent and share nothing but the read-only input.
///
/// # Example
///
/// ```rust
/// use tabaudit_core::{Auditor, CellValue, Dataset};
///
/// let dataset = Dataset::from_columns([
///     ("score", vec![CellValue::Int(10), CellValue::Missing, CellValue::Int(12)]),
/// ])?;
///
/// let report = Auditor::with_defaults().audit(&dataset)?;
/// assert_eq!(report.missing_values["score"], 1);
/// assert_eq!(report.duplicate_rows, 0);
/// # Ok::<(), tabaudit_core::AuditError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Auditor {
    config: AuditConfig,
}

impl Auditor {
    /// Creates a new auditor with the given configuration.
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Creates a new auditor with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(AuditConfig::default())
    }

    /// Returns a reference to the auditor configuration.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Audits a dataset and returns the complete report.
    ///
    /// Runs all three scans:
    /// - Missing values (per-column counts)
    /// - Duplicate rows (count of repeats of earlier rows)
    /// - Anomaly detection (per-cell outlier flags for numeric columns)
    ///
    /// The only failures are the anomaly detector's: an invalid threshold
    /// or malformed numeric data. Either aborts the audit, so the caller
    /// never sees a partial report.
    pub fn audit(&self, dataset: &Dataset) -> Result<AuditReport> {
        let missing_values = scan_missing(dataset);
        let duplicate_rows = scan_duplicates(dataset);
        let anomalies = detect_anomalies(dataset, self.config.z_threshold)?;

        let report = AuditReport::new(dataset.row_count())
            .with_missing_values(missing_values)
            .with_duplicate_rows(duplicate_rows)
            .with_anomalies(anomalies);

        tracing::debug!(
            "audited {} rows across {} columns: {} missing values, {} duplicate rows, {} outlier cells",
            report.row_count,
            dataset.column_count(),
            report.total_missing(),
            report.duplicate_rows,
            report.total_anomalies()
        );

        Ok(report)
    }

    /// Audits multiple datasets and returns a report for each success.
    ///
    /// Datasets that fail to audit are logged and skipped rather than
    /// aborting the entire batch, so partial results remain available when
    /// an individual dataset has problems.
    pub fn audit_all(&self, datasets: &[Dataset]) -> Result<Vec<AuditReport>> {
        let mut results = Vec::with_capacity(datasets.len());
        for (index, dataset) in datasets.iter().enumerate() {
            match self.audit(dataset) {
                Ok(report) => results.push(report),
                Err(e) => {
                    tracing::warn!("Audit failed for dataset {}: {}", index, e);
                }
            }
        }
        Ok(results)
    }
}
