//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use serde::Serialize;

/// Which sequence representation to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SequenceVariant {
    /// Shared `Rc` nodes with the loop wired in place
    Shared,
    /// Index view over a vector with a virtual loop link
    Indexed,
    /// Plain singly-linked list without a loop
    Plain,
}

impl SequenceVariant {
    /// Whether this variant takes `loop_from` / `loop_to`
    pub fn is_looped(self) -> bool {
        !matches!(self, SequenceVariant::Plain)
    }
}

impl std::fmt::Display for SequenceVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceVariant::Shared => write!(f, "shared"),
            SequenceVariant::Indexed => write!(f, "indexed"),
            SequenceVariant::Plain => write!(f, "plain"),
        }
    }
}

/// Loop wiring: the successor of `from` becomes `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoopSpec {
    pub from: usize,
    pub to: usize,
}

/// Units that status lines and reports count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Element,
    Round,
}

impl Unit {
    /// Singular or plural label for `count` of this unit
    pub fn label(self, count: usize) -> &'static str {
        match (self, count == 1) {
            (Unit::Element, true) => "element",
            (Unit::Element, false) => "elements",
            (Unit::Round, true) => "round",
            (Unit::Round, false) => "rounds",
        }
    }
}

/// What was inspected, for reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceSummary {
    pub variant: SequenceVariant,
    pub len: usize,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub loop_spec: Option<LoopSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_display() {
        assert_eq!(SequenceVariant::Shared.to_string(), "shared");
        assert_eq!(SequenceVariant::Indexed.to_string(), "indexed");
        assert_eq!(SequenceVariant::Plain.to_string(), "plain");
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(Unit::Element.label(0), "elements");
        assert_eq!(Unit::Element.label(1), "element");
        assert_eq!(Unit::Round.label(1), "round");
        assert_eq!(Unit::Round.label(7), "rounds");
    }

    #[test]
    fn test_variant_is_looped() {
        assert!(SequenceVariant::Shared.is_looped());
        assert!(SequenceVariant::Indexed.is_looped());
        assert!(!SequenceVariant::Plain.is_looped());
    }

    #[test]
    fn test_summary_serialization_skips_missing_loop() {
        let summary = SequenceSummary {
            variant: SequenceVariant::Plain,
            len: 3,
            loop_spec: None,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["variant"], "plain");
        assert!(json.get("loop").is_none());
    }
}
