//! # Looped List - Tortoise and Hare Cycle Detection
//!
//! Looped List builds singly-linked sequences whose successor at one position
//! is deliberately rewired to another position, and detects the resulting
//! cycles with Floyd's two-pointer walk.
//!
//! ## Main Components
//!
//! - **Sequence**: the forward-iteration contract and the list
//!   representations implementing it
//! - **Detector**: the tortoise and hare walk, generic over any sequence
//! - **Reports**: human-readable and JSON output for the command line tool
//!
//! ## Usage
//!
//! ### Example: Detecting a Loop
//!
//! ```
//! use looped_list::detector::has_cycle;
//! use looped_list::sequence::{ForwardList, IndexedLoopedList, SharedLoopedList};
//!
//! # fn main() -> miette::Result<()> {
//! let values = [12, 14, 16, 18, 20, 22, 24, 26];
//!
//! // The element at index 6 is followed by the element at index 2 again
//! let shared = SharedLoopedList::new(values, 6, 2)?;
//! let indexed = IndexedLoopedList::new(values, 6, 2)?;
//! assert!(has_cycle(&shared));
//! assert!(has_cycle(&indexed));
//!
//! // Wiring forward only skips elements, the list still ends
//! assert!(!has_cycle(&SharedLoopedList::new(values, 2, 6)?));
//!
//! // Plain sequences never loop
//! let plain: ForwardList<i32> = values.into_iter().collect();
//! assert!(!has_cycle(&plain));
//! assert!(!has_cycle(&values[..]));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Walking a Looped List
//!
//! ```
//! use looped_list::sequence::{Sequence, SharedLoopedList};
//!
//! # fn main() -> miette::Result<()> {
//! let list = SharedLoopedList::new([1, 2, 3, 4], 3, 1)?;
//!
//! // A looped walk never ends on its own
//! let first: Vec<i32> = list.walk().take(8).collect();
//! assert_eq!(first, vec![1, 2, 3, 4, 2, 3, 4, 2]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Invalid Loop Positions
//!
//! ```
//! use looped_list::error::LoopedListError;
//! use looped_list::sequence::IndexedLoopedList;
//!
//! let err = IndexedLoopedList::new([1, 2, 3], 1, 3).unwrap_err();
//! assert!(matches!(err, LoopedListError::InvalidLoopTo { index: 3, len: 3 }));
//! ```

// Private modules
mod constants;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod reports;
pub mod sequence;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
