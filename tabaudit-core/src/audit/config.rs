//! Audit configuration.
//!
//! This module provides configuration for dataset audits, currently the
//! z-score threshold used by the anomaly detector.

use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};

/// Default z-score threshold for outlier flagging.
pub const DEFAULT_Z_THRESHOLD: f64 = 3.0;

/// Audit configuration.
///
/// Controls how many standard deviations from the column mean a value must
/// be before the anomaly detector flags it. The threshold is not clamped by
/// the builder; out-of-range values surface as [`AuditError::InvalidThreshold`]
/// when the detector runs or when [`AuditConfig::validate`] is called.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Absolute z-score above which a present numeric cell is flagged
    pub z_threshold: f64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            z_threshold: DEFAULT_Z_THRESHOLD,
        }
    }
}

impl AuditConfig {
    /// Creates a new audit config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the z-score threshold.
    pub fn with_z_threshold(mut self, z_threshold: f64) -> Self {
        self.z_threshold = z_threshold;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns an error if the threshold is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.z_threshold)
    }
}

/// Checks that a z-score threshold is positive and finite.
///
/// Rejects zero, negative values, NaN, and infinities.
pub(crate) fn validate_threshold(z_threshold: f64) -> Result<()> {
    if !z_threshold.is_finite() || z_threshold <= 0.0 {
        return Err(AuditError::invalid_threshold(z_threshold));
    }
    Ok(())
}
