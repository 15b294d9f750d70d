// crates/cli/src/presentation.rs
use coreutils_domain::{ActiveFlags, Counts};

/// Label of the summary line of a multi-source run.
pub const TOTAL_LABEL: &str = "total";

const FIELD_WIDTH: usize = 7;

/// Renders one report line: the selected fields in lines, words, bytes order,
/// each right-aligned after a single space, then the label if any.
#[derive(Debug, Clone, Copy)]
pub struct ReportFormatter {
    flags: ActiveFlags,
}

impl ReportFormatter {
    pub const fn new(flags: ActiveFlags) -> Self {
        Self { flags }
    }

    pub fn format(&self, counts: &Counts, label: &str) -> String {
        let fields = [
            (self.flags.lines(), counts.lines.value()),
            (self.flags.words(), counts.words.value()),
            (self.flags.bytes(), counts.bytes.value()),
        ];

        let mut line: String = fields
            .into_iter()
            .filter(|&(selected, _)| selected)
            .map(|(_, value)| format!(" {value:>width$}", width = FIELD_WIDTH))
            .collect();

        if !label.is_empty() {
            line.push(' ');
            line.push_str(label);
        }
        line
    }
}
