//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::core::SequenceSummary;
use crate::detector::CycleDetector;
use crate::error::LoopedListError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(
        &self,
        sequence: &SequenceSummary,
        detector: &CycleDetector,
    ) -> Result<String, LoopedListError> {
        let report = json!({
            "sequence": sequence,
            "has_cycle": detector.has_cycle(),
            "rounds": detector.rounds(),
        });

        let mut output = serde_json::to_string_pretty(&report).map_err(LoopedListError::Json)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::core::{LoopSpec, SequenceVariant};
    use crate::detector::Detection;

    fn looped_summary() -> SequenceSummary {
        SequenceSummary {
            variant: SequenceVariant::Shared,
            len: 8,
            loop_spec: Some(LoopSpec { from: 6, to: 2 }),
        }
    }

    #[test]
    fn test_json_report_with_cycle() {
        let mut detector = CycleDetector::new();
        detector.record(Detection {
            has_cycle: true,
            rounds: 6,
        });

        let report = JsonReportGenerator::new()
            .generate_report(&looped_summary(), &detector)
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycle"], true);
        assert_eq!(json["rounds"], 6);
        assert_eq!(json["sequence"]["variant"], "shared");
        assert_eq!(json["sequence"]["len"], 8);
        assert_eq!(json["sequence"]["loop"]["from"], 6);
        assert_eq!(json["sequence"]["loop"]["to"], 2);
    }

    #[test]
    fn test_json_report_before_detection() {
        let detector = CycleDetector::new();

        let report = JsonReportGenerator::new()
            .generate_report(&looped_summary(), &detector)
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycle"], false);
        assert_eq!(json["rounds"], 0);
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let detector = CycleDetector::new();
        let report = JsonReportGenerator::new()
            .generate_report(&looped_summary(), &detector)
            .unwrap();

        // Pretty formatted JSON should have newlines and indentation
        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }

    #[test]
    fn test_json_report_default_trait() {
        let detector = CycleDetector::new();
        let report1 = JsonReportGenerator
            .generate_report(&looped_summary(), &detector)
            .unwrap();
        let report2 = JsonReportGenerator::default()
            .generate_report(&looped_summary(), &detector)
            .unwrap();

        assert_eq!(report1, report2);
    }
}
