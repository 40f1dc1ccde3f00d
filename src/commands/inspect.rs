//! Inspect command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::InspectConfig;
use crate::error::LoopedListError;

impl FromCommand for InspectConfig {
    fn from_command(command: Commands) -> Result<Self, LoopedListError> {
        match command {
            Commands::Inspect {
                sequence,
                format,
                error_on_cycles,
            } => InspectConfig::builder()
                .with_values(sequence.values)
                .with_variant(sequence.variant)
                .with_loop_from(sequence.loop_from)
                .with_loop_to(sequence.loop_to)
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .build(),
            _ => Err(LoopedListError::ConfigurationError {
                message: "Invalid command type for InspectConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(InspectConfig);

/// Execute the inspect command for detecting a cycle
pub fn execute_inspect_command(command: Commands) -> Result<()> {
    let config = InspectConfig::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::inspect::InspectExecutor;
    InspectExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;
    use crate::core::LoopSpec;

    #[test]
    fn test_try_from_inspect_command() {
        let cli = Cli::try_parse_from([
            "looped-list",
            "inspect",
            "--values",
            "1,2,3",
            "--loop-from",
            "2",
            "--loop-to",
            "0",
        ])
        .unwrap();

        let config = InspectConfig::try_from(cli.command).unwrap();
        assert_eq!(config.loop_spec, Some(LoopSpec { from: 2, to: 0 }));
    }

    #[test]
    fn test_wrong_command_type() {
        let cli = Cli::try_parse_from(["looped-list", "walk", "--values", "1"]).unwrap();

        let err = InspectConfig::try_from(cli.command).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid command type for InspectConfig"
        );
    }
}
