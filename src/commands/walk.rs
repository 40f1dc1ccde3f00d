//! Walk command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::WalkConfig;
use crate::error::LoopedListError;

impl FromCommand for WalkConfig {
    fn from_command(command: Commands) -> Result<Self, LoopedListError> {
        match command {
            Commands::Walk { sequence, limit } => WalkConfig::builder()
                .with_values(sequence.values)
                .with_variant(sequence.variant)
                .with_loop_from(sequence.loop_from)
                .with_loop_to(sequence.loop_to)
                .with_limit(limit)
                .build(),
            _ => Err(LoopedListError::ConfigurationError {
                message: "Invalid command type for WalkConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(WalkConfig);

/// Execute the walk command, printing the elements met
pub fn execute_walk_command(command: Commands) -> Result<()> {
    let config =
        WalkConfig::from_command(command).wrap_err("Failed to parse walk command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::walk::WalkExecutor;
    WalkExecutor::execute(config)
}
