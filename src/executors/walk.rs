//! Walk command executor

use std::io::Write;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::WalkConfig;
use crate::executors::{AnySequence, CommandExecutor};

pub struct WalkExecutor;

impl WalkExecutor {
    /// Write `values` on one line, separated by spaces
    pub fn write_values<W: Write>(values: &[i64], out: &mut W) -> std::io::Result<()> {
        for value in values {
            write!(out, "{value} ")?;
        }
        writeln!(out)
    }
}

impl CommandExecutor for WalkExecutor {
    type Config = WalkConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let sequence = AnySequence::build(config.values, config.variant, config.loop_spec)
            .wrap_err("Failed to build the sequence")?;

        let values = sequence.walk(config.limit);
        let stdout = std::io::stdout();
        Self::write_values(&values, &mut stdout.lock())
            .into_diagnostic()
            .wrap_err("Failed to write walked values")?;

        if values.len() == config.limit && sequence.summary().len < config.limit {
            eprintln!(
                "{} Stopped after {} elements, the list keeps going",
                style("ℹ").blue(),
                style(config.limit).yellow()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_values() {
        let mut out = Vec::new();
        WalkExecutor::write_values(&[12, 14, 16], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "12 14 16 \n");
    }

    #[test]
    fn test_write_no_values() {
        let mut out = Vec::new();
        WalkExecutor::write_values(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\n");
    }
}
