//! Data-quality audit module.
//!
//! This module provides the three audit scans and their orchestrator:
//! - **Missing values**: count missing markers per column
//! - **Duplicate rows**: count rows identical to an earlier row
//! - **Anomaly detection**: flag numeric cells by z-score threshold
//!
//! The scans are pure functions over an immutable [`crate::Dataset`]; all
//! presentation and persistence of the resulting [`AuditReport`] belongs to
//! the caller. Reports contain counts and flags only, never data values.
//!
//! # Example
//! ```rust
//! use tabaudit_core::{AuditConfig, Auditor, CellValue, Dataset};
//!
//! let dataset = Dataset::from_columns([
//!     ("value", vec![CellValue::Int(1), CellValue::Int(1), CellValue::Missing]),
//! ])?;
//!
//! let auditor = Auditor::new(AuditConfig::new().with_z_threshold(2.5));
//! let report = auditor.audit(&dataset)?;
//!
//! assert_eq!(report.missing_values["value"], 1);
//! assert_eq!(report.duplicate_rows, 1);
//! # Ok::<(), tabaudit_core::AuditError>(())
//! ```

mod anomaly;
mod auditor;
mod config;
mod duplicates;
mod missing;
mod report;

// Re-export public API
pub use anomaly::{ColumnStats, detect_anomalies};
pub use auditor::Auditor;
pub use config::{AuditConfig, DEFAULT_Z_THRESHOLD};
pub use duplicates::scan_duplicates;
pub use missing::scan_missing;
pub use report::AuditReport;
