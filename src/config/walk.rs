//! Walk command configuration

use crate::common::validate_loop_args;
use crate::core::{LoopSpec, SequenceVariant};

/// Configuration for the walk command
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Element values, in order
    pub values: Vec<i64>,
    /// Sequence representation to build
    pub variant: SequenceVariant,
    /// Loop wiring (None for the plain variant)
    pub loop_spec: Option<LoopSpec>,
    /// Maximum number of elements to print
    pub limit: usize,
}

impl WalkConfig {
    pub fn builder() -> WalkConfigBuilder {
        WalkConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct WalkConfigBuilder {
    values: Option<Vec<i64>>,
    variant: Option<SequenceVariant>,
    loop_from: Option<usize>,
    loop_to: Option<usize>,
    limit: Option<usize>,
}

impl WalkConfigBuilder {
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

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl crate::common::ConfigBuilder for WalkConfigBuilder {
    type Config = WalkConfig;

    fn build(self) -> Result<Self::Config, crate::error::LoopedListError> {
        let variant = self.variant.ok_or_else(|| {
            crate::error::LoopedListError::ConfigurationError {
                message: "Missing required field: variant".to_string(),
            }
        })?;

        Ok(WalkConfig {
            values: self.values.ok_or_else(|| {
                crate::error::LoopedListError::ConfigurationError {
                    message: "Missing required field: values".to_string(),
                }
            })?,
            variant,
            loop_spec: validate_loop_args(variant, self.loop_from, self.loop_to)?,
            limit: self.limit.unwrap_or(crate::constants::walk::DEFAULT_LIMIT),
        })
    }
}
