//! Command executors that handle the actual logic for each command

pub mod inspect;
pub mod walk;

use miette::Result;

use crate::core::{LoopSpec, SequenceSummary, SequenceVariant};
use crate::detector::CycleDetector;
use crate::error::LoopedListError;
use crate::sequence::{ForwardList, IndexedLoopedList, Sequence, SharedLoopedList};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// A sequence of any supported variant, built from command line values
pub enum AnySequence {
    Shared(SharedLoopedList<i64>),
    Indexed(IndexedLoopedList<i64>),
    Plain(ForwardList<i64>),
}

impl AnySequence {
    pub fn build(
        values: Vec<i64>,
        variant: SequenceVariant,
        loop_spec: Option<LoopSpec>,
    ) -> Result<Self, LoopedListError> {
        match (variant, loop_spec) {
            (SequenceVariant::Plain, _) => Ok(Self::Plain(values.into_iter().collect())),
            (SequenceVariant::Shared, Some(spec)) => Ok(Self::Shared(SharedLoopedList::new(
                values, spec.from, spec.to,
            )?)),
            (SequenceVariant::Indexed, Some(spec)) => Ok(Self::Indexed(IndexedLoopedList::new(
                values, spec.from, spec.to,
            )?)),
            (variant, None) => Err(LoopedListError::ConfigurationError {
                message: format!("The {variant} variant requires a loop"),
            }),
        }
    }

    pub fn summary(&self) -> SequenceSummary {
        match self {
            Self::Shared(list) => SequenceSummary {
                variant: SequenceVariant::Shared,
                len: list.len(),
                loop_spec: Some(LoopSpec {
                    from: list.loop_from(),
                    to: list.loop_to(),
                }),
            },
            Self::Indexed(list) => SequenceSummary {
                variant: SequenceVariant::Indexed,
                len: list.len(),
                loop_spec: Some(LoopSpec {
                    from: list.loop_from(),
                    to: list.loop_to(),
                }),
            },
            Self::Plain(list) => SequenceSummary {
                variant: SequenceVariant::Plain,
                len: list.len(),
                loop_spec: None,
            },
        }
    }

    /// Run `detector` over the underlying sequence
    pub fn detect(&self, detector: &mut CycleDetector) -> bool {
        match self {
            Self::Shared(list) => detector.detect(list),
            Self::Indexed(list) => detector.detect(list),
            Self::Plain(list) => detector.detect(list),
        }
    }

    /// Values met from the first element, at most `limit` of them
    pub fn walk(&self, limit: usize) -> Vec<i64> {
        match self {
            Self::Shared(list) => list.walk().take(limit).collect(),
            Self::Indexed(list) => list.walk().take(limit).collect(),
            Self::Plain(list) => list.walk().take(limit).collect(),
        }
    }
}
