//! Core dataset model and quality-audit scanners for tabaudit.
//!
//! This crate audits in-memory tabular datasets for three classes of
//! data-quality issues: missing values, duplicate rows, and statistical
//! outliers in numeric columns. It is a pre-processing diagnostic for data
//! preparation pipelines, not a schema-enforcement engine.
//!
//! # Guarantees
//! - A [`Dataset`] is validated and immutable once constructed; scanners
//!   never mutate their input
//! - An audit yields either a complete [`AuditReport`] or a typed error,
//!   never a partial result
//! - Reports and logs carry counts and flags only, never data values
//!
//! # Architecture
//! The crate follows these patterns:
//! - Column kind (numeric vs. other) is inferred once at dataset
//!   construction, not probed at scan time
//! - Scanners are free functions over a borrowed dataset; the [`Auditor`]
//!   facade composes them and owns the configuration
//! - All failures surface through the [`AuditError`] taxonomy

pub mod audit;
pub mod dataset;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use audit::{
    AuditConfig, AuditReport, Auditor, ColumnStats, DEFAULT_Z_THRESHOLD, detect_anomalies,
    scan_duplicates, scan_missing,
};
pub use dataset::{CellValue, Column, ColumnKind, Dataset};
pub use error::{AuditError, Result};
