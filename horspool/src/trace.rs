use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The symbols at the cursor agreed; the comparison moves left.
    Pending,
    /// The whole window agreed.
    Match,
    Mismatch,
    /// The scan ran out of alignments.
    NotFound,
}

/// One comparison event of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanStep {
    pub alignment_start: usize,
    /// Pattern index under comparison, `-1` once the full window matched.
    pub compare_index: isize,
    pub outcome: StepOutcome,
}

impl ScanStep {
    pub(crate) fn new(alignment_start: usize, compare_index: isize, outcome: StepOutcome) -> Self {
        Self {
            alignment_start,
            compare_index,
            outcome,
        }
    }

    /// Text position the cursor points at, if it points inside the window.
    pub fn text_index(&self) -> Option<usize> {
        usize::try_from(self.compare_index)
            .ok()
            .map(|i| self.alignment_start + i)
    }
}

impl fmt::Display for ScanStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "start = {}, i = {}, result = ", self.alignment_start, self.compare_index)?;
        match self.outcome {
            StepOutcome::Pending | StepOutcome::Mismatch => f.write_str("?"),
            StepOutcome::Match => write!(f, "{}", self.alignment_start),
            StepOutcome::NotFound => f.write_str("-1"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Found { index: usize },
    NotFound,
}

impl MatchOutcome {
    pub fn index(&self) -> Option<usize> {
        match *self {
            MatchOutcome::Found { index } => Some(index),
            MatchOutcome::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, MatchOutcome::Found { .. })
    }
}

impl From<Option<usize>> for MatchOutcome {
    fn from(value: Option<usize>) -> Self {
        match value {
            Some(index) => MatchOutcome::Found { index },
            None => MatchOutcome::NotFound,
        }
    }
}

/// Every step of one scan, in the order it happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<ScanStep>,
}

impl Trace {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, step: ScanStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[ScanStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<ScanStep> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&ScanStep> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScanStep> {
        self.steps.iter()
    }

    /// Distinct alignment starts, in the order they were visited.
    pub fn alignments(&self) -> Vec<usize> {
        let mut out: Vec<usize> = Vec::new();
        for step in &self.steps {
            if matches!(step.outcome, StepOutcome::NotFound) {
                continue;
            }
            if out.last() != Some(&step.alignment_start) {
                out.push(step.alignment_start);
            }
        }
        out
    }

    /// Number of symbol comparisons performed.
    pub fn comparisons(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, StepOutcome::Pending | StepOutcome::Mismatch))
            .count()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a ScanStep;
    type IntoIter = std::slice::Iter<'a, ScanStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl IntoIterator for Trace {
    type Item = ScanStep;
    type IntoIter = std::vec::IntoIter<ScanStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
