use serde::Serialize;

use crate::sequence::{Cursor, Sequence};

/// Outcome of one tortoise and hare walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detection {
    /// Whether the walk found a revisited position
    pub has_cycle: bool,
    /// Number of rounds (tortoise steps) taken before the verdict
    pub rounds: usize,
}

/// Check whether `sequence` loops back on itself.
///
/// The sequence is only read; calling this twice on the same sequence gives
/// the same answer.
pub fn has_cycle<S>(sequence: &S) -> bool
where
    S: Sequence + ?Sized,
{
    tortoise_and_hare(sequence).has_cycle
}

fn tortoise_and_hare<S>(sequence: &S) -> Detection
where
    S: Sequence + ?Sized,
{
    let end = sequence.end();
    let begin = sequence.begin();

    // Fewer than two reachable positions: nothing to chase
    if begin == end || begin.successor() == end {
        return Detection {
            has_cycle: false,
            rounds: 0,
        };
    }

    let mut slow = begin.clone();
    let mut fast = begin;
    let mut rounds = 0;

    while fast != end && fast.successor() != end {
        slow.advance();
        fast.advance();
        fast.advance();
        rounds += 1;

        if slow == fast {
            return Detection {
                has_cycle: true,
                rounds,
            };
        }
    }

    Detection {
        has_cycle: false,
        rounds,
    }
}

/// Detector that remembers its last result
///
/// Useful when the verdict has to be handed to a report generator after the
/// sequence itself is gone.
#[derive(Debug, Default)]
pub struct CycleDetector {
    detection: Option<Detection>,
}

impl CycleDetector {
    /// Create a detector that has not inspected anything yet
    pub fn new() -> Self {
        Self { detection: None }
    }

    /// Run the tortoise and hare walk over `sequence` and keep the outcome
    pub fn detect<S>(&mut self, sequence: &S) -> bool
    where
        S: Sequence + ?Sized,
    {
        let detection = tortoise_and_hare(sequence);
        self.detection = Some(detection);
        detection.has_cycle
    }

    /// Seed a canned outcome for report tests
    #[cfg(test)]
    pub(crate) fn record(&mut self, detection: Detection) {
        self.detection = Some(detection);
    }

    pub fn detection(&self) -> Option<&Detection> {
        self.detection.as_ref()
    }

    /// Whether the last inspected sequence loops. False before any
    /// detection.
    pub fn has_cycle(&self) -> bool {
        self.detection.is_some_and(|d| d.has_cycle)
    }

    /// Rounds taken by the last detection, zero before any detection
    pub fn rounds(&self) -> usize {
        self.detection.map_or(0, |d| d.rounds)
    }
}
