//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::core::{SequenceSummary, Unit};
use crate::detector::CycleDetector;
use crate::error::LoopedListError;

#[derive(Default)]
pub struct HumanReportGenerator;

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(
        &self,
        sequence: &SequenceSummary,
        detector: &CycleDetector,
    ) -> Result<String, LoopedListError> {
        let mut output = String::new();

        writeln!(
            output,
            "\n{} Sequence: {} list, {} {}",
            style("📦").blue(),
            style(sequence.variant).bold(),
            style(sequence.len).yellow(),
            Unit::Element.label(sequence.len)
        )?;
        match sequence.loop_spec {
            Some(spec) => writeln!(
                output,
                "  {} successor of #{} wired to #{}",
                style("→").dim(),
                style(spec.from).yellow(),
                style(spec.to).yellow()
            )?,
            None => writeln!(output, "  {} no loop wiring", style("→").dim())?,
        }

        let rounds = detector.rounds();
        if detector.has_cycle() {
            writeln!(
                output,
                "\n{} Cycle detected: tortoise and hare met after {} {}",
                style("❌").red().bold(),
                style(rounds).red().bold(),
                Unit::Round.label(rounds)
            )?;
            writeln!(
                output,
                "\n{} Following the successor links from the first element never reaches the \
                 end.",
                style("💡").yellow()
            )?;
        } else {
            writeln!(
                output,
                "\n{} No cycle detected: the hare reached the end after {} {}",
                style("✅").green().bold(),
                style(rounds).green(),
                Unit::Round.label(rounds)
            )?;
        }

        Ok(output)
    }
}
