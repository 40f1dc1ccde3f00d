//! # Configuration Module
//!
//! Configuration structures for the looped-list commands. Each command has
//! its own config module with a builder that validates the loop arguments
//! against the requested sequence variant.
//!
//! ## Command Configurations
//!
//! - **InspectConfig**: Configuration for the `inspect` command
//! - **WalkConfig**: Configuration for the `walk` command
//!
//! ## Example
//!
//! ```
//! use looped_list::cli::OutputFormat;
//! use looped_list::common::ConfigBuilder;
//! use looped_list::config::InspectConfig;
//! use looped_list::core::SequenceVariant;
//!
//! let config = InspectConfig::builder()
//!     .with_values(vec![12, 14, 16, 18])
//!     .with_variant(SequenceVariant::Indexed)
//!     .with_loop_from(Some(3))
//!     .with_loop_to(Some(1))
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_cycles(false)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.loop_spec.is_some());
//! ```

pub mod inspect;
pub mod walk;

pub use inspect::InspectConfig;
pub use walk::WalkConfig;
