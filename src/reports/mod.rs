//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::core::SequenceSummary;
use crate::detector::CycleDetector;
use crate::error::LoopedListError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from the detector's last result on `sequence`
    fn generate_report(
        &self,
        sequence: &SequenceSummary,
        detector: &CycleDetector,
    ) -> Result<String, LoopedListError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
