//! Common functionality shared across commands

use clap::Args;

use crate::core::{LoopSpec, SequenceVariant};

/// Arguments describing the sequence to build
#[derive(Args, Debug, Clone)]
pub struct SequenceArgs {
    /// Comma separated element values, in order
    #[arg(
        long,
        value_name = "VALUES",
        value_delimiter = ',',
        required = true,
        env = "LOOPED_LIST_VALUES"
    )]
    pub values: Vec<i64>,

    /// Zero-based index whose successor is rewired
    #[arg(long, env = "LOOPED_LIST_LOOP_FROM")]
    pub loop_from: Option<usize>,

    /// Zero-based index the rewired successor points to
    #[arg(long, env = "LOOPED_LIST_LOOP_TO")]
    pub loop_to: Option<usize>,

    /// Sequence representation
    #[arg(long, value_enum, default_value = crate::constants::sequence::DEFAULT_VARIANT, env = "LOOPED_LIST_VARIANT")]
    pub variant: SequenceVariant,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "LOOPED_LIST_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Check that the loop arguments fit the variant: looped variants need both
/// ends, the plain variant takes neither.
pub fn validate_loop_args(
    variant: SequenceVariant,
    loop_from: Option<usize>,
    loop_to: Option<usize>,
) -> Result<Option<LoopSpec>, crate::error::LoopedListError> {
    match (variant.is_looped(), loop_from, loop_to) {
        (true, Some(from), Some(to)) => Ok(Some(LoopSpec { from, to })),
        (true, None, _) => Err(crate::error::LoopedListError::ConfigurationError {
            message: format!("The {variant} variant requires --loop-from"),
        }),
        (true, _, None) => Err(crate::error::LoopedListError::ConfigurationError {
            message: format!("The {variant} variant requires --loop-to"),
        }),
        (false, None, None) => Ok(None),
        (false, _, _) => Err(crate::error::LoopedListError::ConfigurationError {
            message: "The plain variant does not take --loop-from or --loop-to".to_string(),
        }),
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::LoopedListError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::LoopedListError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::LoopedListError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_looped_variant() {
        let spec = validate_loop_args(SequenceVariant::Indexed, Some(6), Some(2)).unwrap();
        assert_eq!(spec, Some(LoopSpec { from: 6, to: 2 }));

        let err = validate_loop_args(SequenceVariant::Shared, None, Some(2)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: The shared variant requires --loop-from"
        );

        let err = validate_loop_args(SequenceVariant::Indexed, Some(1), None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: The indexed variant requires --loop-to"
        );
    }

    #[test]
    fn test_validate_plain_variant() {
        assert_eq!(validate_loop_args(SequenceVariant::Plain, None, None).unwrap(), None);
        assert!(validate_loop_args(SequenceVariant::Plain, Some(1), None).is_err());
    }
}
