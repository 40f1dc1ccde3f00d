//! Inspect command configuration

use crate::cli::OutputFormat;
use crate::common::validate_loop_args;
use crate::core::{LoopSpec, SequenceVariant};

/// Configuration for the inspect command
///
/// This struct contains all options for building a sequence and reporting
/// whether it contains a cycle.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Element values, in order
    pub values: Vec<i64>,
    /// Sequence representation to build
    pub variant: SequenceVariant,
    /// Loop wiring (None for the plain variant)
    pub loop_spec: Option<LoopSpec>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if a cycle is found
    pub error_on_cycles: bool,
}

impl InspectConfig {
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct InspectConfigBuilder {
    values: Option<Vec<i64>>,
    variant: Option<SequenceVariant>,
    loop_from: Option<usize>,
    loop_to: Option<usize>,
    format: Option<OutputFormat>,
    error_on_cycles: Option<bool>,
}

impl InspectConfigBuilder {
    pub fn new() -> Self {
        Self {
            values: None,
            variant: None,
            loop_from: None,
            loop_to: None,
            format: None,
            error_on_cycles: None,
        }
    }

    pub fn with_values(mut self, values: Vec<i64>) -> Self {
        self.values = Some(values);
        self
    }

    pub fn with_variant(mut self, variant: SequenceVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn with_loop_from(mut self, loop_from: Option<usize>) -> Self {
        self.loop_from = loop_from;
        self
    }

    pub fn with_loop_to(mut self, loop_to: Option<usize>) -> Self {
        self.loop_to = loop_to;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for InspectConfigBuilder {
    type Config = InspectConfig;

    fn build(self) -> Result<Self::Config, crate::error::LoopedListError> {
        let variant = self.variant.ok_or_else(|| {
            crate::error::LoopedListError::ConfigurationError {
                message: "Missing required field: variant".to_string(),
            }
        })?;

        Ok(InspectConfig {
            values: self.values.ok_or_else(|| {
                crate::error::LoopedListError::ConfigurationError {
                    message: "Missing required field: values".to_string(),
                }
            })?,
            variant,
            loop_spec: validate_loop_args(variant, self.loop_from, self.loop_to)?,
            format: self.format.ok_or_else(|| {
                crate::error::LoopedListError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
            error_on_cycles: self.error_on_cycles.ok_or_else(|| {
                crate::error::LoopedListError::ConfigurationError {
                    message: "Missing required field: error_on_cycles".to_string(),
                }
            })?,
        })
    }
}
