//! Inspect command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::InspectConfig;
use crate::core::Unit;
use crate::detector::CycleDetector;
use crate::executors::{AnySequence, CommandExecutor};
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct InspectExecutor;

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Building {} list of {} {}...",
            style("🔗").cyan(),
            style(config.variant).bold(),
            style(config.values.len()).yellow(),
            Unit::Element.label(config.values.len())
        );
        if let Some(spec) = config.loop_spec {
            eprintln!(
                "  {} Wiring successor of #{} to #{}",
                style("→").dim(),
                style(spec.from).yellow(),
                style(spec.to).yellow()
            );
        }

        let sequence = AnySequence::build(config.values, config.variant, config.loop_spec)
            .wrap_err("Failed to build the sequence")?;

        eprintln!("\n{} Running tortoise and hare...", style("🔄").yellow());

        let mut detector = CycleDetector::new();
        sequence.detect(&mut detector);

        let summary = sequence.summary();
        let report_result = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&summary, &detector),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&summary, &detector),
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        // Exit with error code if a cycle was found and requested
        if config.error_on_cycles && detector.has_cycle() {
            std::process::exit(1);
        }

        Ok(())
    }
}
