use coreutils_domain::{Counts, count_bytes};
use coreutils_ports::SourceReader;
use coreutils_shared_kernel::Source;

use crate::dto::{RunReport, SourceOutcome};

/// Whether a run reports a total, decided once from the requested sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    SingleSource,
    MultiSource,
}

impl RunMode {
    pub fn for_sources(sources: &[Source]) -> Self {
        if sources.len() > 1 { Self::MultiSource } else { Self::SingleSource }
    }
}

/// Counts every requested source independently and accumulates a total.
pub struct CountSources<'a> {
    reader: &'a dyn SourceReader,
}

impl<'a> CountSources<'a> {
    pub fn new(reader: &'a dyn SourceReader) -> Self {
        Self { reader }
    }

    /// Count `sources` in order; an empty slice means standard input.
    ///
    /// Read failures are recorded in the report and excluded from the total;
    /// they never stop the remaining sources.
    pub fn run(&self, sources: &[Source]) -> RunReport {
        let stdin = [Source::Stdin];
        let sources = if sources.is_empty() { &stdin[..] } else { sources };
        let mode = RunMode::for_sources(sources);

        let mut total = Counts::ZERO;
        let mut successes = 0usize;
        let mut outcomes = Vec::with_capacity(sources.len());

        for source in sources {
            let outcome = self.count_one(source);
            if let Some(counts) = outcome.counts() {
                total += counts;
                successes += 1;
            }
            outcomes.push(outcome);
        }

        let total = (mode == RunMode::MultiSource && successes > 0).then_some(total);
        RunReport { outcomes, total }
    }

    fn count_one(&self, source: &Source) -> SourceOutcome {
        match self.reader.read(source) {
            Ok(bytes) => {
                let counts = count_bytes(&bytes);
                log::debug!(
                    "counted {source}: lines={} words={} bytes={}",
                    counts.lines,
                    counts.words,
                    counts.bytes
                );
                SourceOutcome::Counted { source: source.clone(), counts }
            }
            Err(err) => {
                log::debug!("skipping {source}: {}", err.cause);
                SourceOutcome::Failed(err)
            }
        }
    }
}
