// crates/cli/src/commands/wc.rs
use std::{ffi::OsString, io::Write};

use clap::CommandFactory;
use coreutils_ports::SourceReader;
use coreutils_usecase::{CountSources, SourceOutcome};

use crate::{
    args::{WC_DESCRIPTION, WC_NAME, WcArgs},
    command::Command,
    config::WcConfig,
    console::{Console, exit},
    error::Result,
    presentation::{ReportFormatter, TOTAL_LABEL},
};

/// `wc`: newline, word and byte counts per source, plus a total for several sources.
pub struct WcCommand {
    reader: Box<dyn SourceReader>,
}

impl WcCommand {
    pub fn new(reader: Box<dyn SourceReader>) -> Self {
        Self { reader }
    }

    /// Count and print. Per-source read failures go to the error channel and
    /// do not affect the result; only console write failures do.
    pub fn run(&self, config: &WcConfig, console: &mut Console<'_>) -> Result<()> {
        let report = CountSources::new(self.reader.as_ref()).run(&config.sources);
        let formatter = ReportFormatter::new(config.flags);

        for outcome in &report.outcomes {
            match outcome {
                SourceOutcome::Counted { source, counts } => {
                    writeln!(console.out(), "{}", formatter.format(counts, &source.report_label()))?;
                }
                SourceOutcome::Failed(err) => {
                    writeln!(console.err(), "{WC_NAME}: {err}")?;
                }
            }
        }

        if let Some(total) = report.total {
            writeln!(console.out(), "{}", formatter.format(&total, TOTAL_LABEL))?;
        }

        Ok(())
    }
}

impl Command for WcCommand {
    fn execute(&self, args: &[OsString], console: &mut Console<'_>) -> u8 {
        let args = match WcArgs::try_parse_args(args) {
            Ok(args) => args,
            Err(err) => return report_parse_outcome(&err, console),
        };

        match self.run(&WcConfig::from(args), console) {
            Ok(()) => exit::SUCCESS,
            Err(err) => {
                log::debug!("{WC_NAME} aborted: {err}");
                let _ = writeln!(console.err(), "{WC_NAME}: {err}");
                exit::FAILURE
            }
        }
    }

    fn describe(&self) -> &str {
        WC_DESCRIPTION
    }

    fn usage(&self) -> String {
        WcArgs::command().render_long_help().to_string()
    }
}

/// Help goes to the output channel with success; genuine parse errors go to
/// the error channel with clap's usage exit code.
fn report_parse_outcome(err: &clap::Error, console: &mut Console<'_>) -> u8 {
    let rendered = err.render().to_string();
    let written = if err.use_stderr() {
        console.err().write_all(rendered.as_bytes())
    } else {
        console.out().write_all(rendered.as_bytes())
    };

    if written.is_err() {
        return exit::FAILURE;
    }
    u8::try_from(err.exit_code()).unwrap_or(exit::USAGE)
}
