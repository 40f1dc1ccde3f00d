use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, SequenceArgs};

#[derive(Parser)]
#[command(
    name = "looped-list",
    about = "Detect cycles in looped singly-linked lists",
    long_about = "looped-list builds a singly-linked list from the given values, optionally \
                  rewires the successor of one element to point back (or forward) to another, \
                  and runs Floyd's tortoise and hare walk to tell whether traversal would loop \
                  forever.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether a looped list contains a cycle
    ///
    /// Builds the requested sequence variant and walks it with two cursors,
    /// one advancing twice as fast as the other. Reports whether they met.
    #[command(
        long_about = "Build a sequence from --values, wire the successor of --loop-from to \
                      --loop-to and run the tortoise and hare cycle detector over it. Both the \
                      shared-node and the indexed variant must give the same answer; the plain \
                      variant ignores the loop arguments and never has a cycle."
    )]
    Inspect {
        #[command(flatten)]
        sequence: SequenceArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Exit with error code if a cycle is found
        #[arg(long, env = "LOOPED_LIST_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Print the elements met while following the list
    ///
    /// Looped lists never reach their end, so output stops after --limit
    /// elements.
    #[command(
        long_about = "Follow the successor links from the first element and print every value \
                      met, separated by spaces. A looped list repeats forever, so at most \
                      --limit values are printed."
    )]
    Walk {
        #[command(flatten)]
        sequence: SequenceArgs,

        /// Maximum number of elements to print
        #[arg(
            long,
            default_value_t = crate::constants::walk::DEFAULT_LIMIT,
            env = "LOOPED_LIST_LIMIT"
        )]
        limit: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::core::SequenceVariant;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_inspect() {
        let cli = Cli::try_parse_from([
            "looped-list",
            "inspect",
            "--values",
            "12,14,16",
            "--loop-from",
            "2",
            "--loop-to",
            "0",
            "--variant",
            "indexed",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Inspect {
                sequence,
                format,
                error_on_cycles,
            } => {
                assert_eq!(sequence.values, vec![12, 14, 16]);
                assert_eq!(sequence.loop_from, Some(2));
                assert_eq!(sequence.loop_to, Some(0));
                assert_eq!(sequence.variant, SequenceVariant::Indexed);
                assert_eq!(format.format, OutputFormat::Json);
                assert!(!error_on_cycles);
            }
            _ => panic!("Expected Inspect command"),
        }
    }

    #[test]
    fn test_parse_walk_defaults() {
        let cli = Cli::try_parse_from(["looped-list", "walk", "--values", "1,2"]).unwrap();

        match cli.command {
            Commands::Walk { sequence, limit } => {
                assert_eq!(limit, 200);
                assert_eq!(sequence.variant, SequenceVariant::Shared);
                assert_eq!(sequence.loop_from, None);
            }
            _ => panic!("Expected Walk command"),
        }
    }

    #[test]
    fn test_negative_values_parse() {
        let cli = Cli::try_parse_from(["looped-list", "walk", "--values=-3,4"]).unwrap();

        match cli.command {
            Commands::Walk { sequence, .. } => assert_eq!(sequence.values, vec![-3, 4]),
            _ => panic!("Expected Walk command"),
        }
    }
}
