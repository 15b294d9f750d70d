use coreutils_domain::Counts;
use coreutils_shared_kernel::{Source, SourceReadError};

/// Result of counting one source.
#[derive(Debug)]
pub enum SourceOutcome {
    Counted { source: Source, counts: Counts },
    Failed(SourceReadError),
}

impl SourceOutcome {
    pub fn counts(&self) -> Option<Counts> {
        match self {
            Self::Counted { counts, .. } => Some(*counts),
            Self::Failed(_) => None,
        }
    }
}

/// Everything one run produced, in the order sources were requested.
#[derive(Debug)]
pub struct RunReport {
    pub outcomes: Vec<SourceOutcome>,
    /// Field-wise sum over successful sources; present only for multi-source
    /// runs with at least one success.
    pub total: Option<Counts>,
}

impl RunReport {
    pub fn failures(&self) -> impl Iterator<Item = &SourceReadError> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            SourceOutcome::Failed(err) => Some(err),
            SourceOutcome::Counted { .. } => None,
        })
    }

    pub fn counted(&self) -> impl Iterator<Item = (&Source, Counts)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            SourceOutcome::Counted { source, counts } => Some((source, *counts)),
            SourceOutcome::Failed(_) => None,
        })
    }
}
