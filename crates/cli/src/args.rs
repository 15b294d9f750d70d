// crates/cli/src/args.rs
use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

pub const WC_NAME: &str = "wc";
pub const WC_DESCRIPTION: &str = "Print newline, word, and byte counts for each file";

#[derive(Parser, Debug)]
#[command(name = WC_NAME, about = WC_DESCRIPTION)]
#[allow(clippy::struct_excessive_bools)]
pub struct WcArgs {
    /// Print the newline counts
    #[arg(short = 'l', long)]
    pub lines: bool,

    /// Print the word counts
    #[arg(short = 'w', long)]
    pub words: bool,

    /// Print the byte counts
    #[arg(short = 'c', long)]
    pub bytes: bool,

    /// Print the character counts (counted as bytes)
    #[arg(short = 'm', long)]
    pub chars: bool,

    /// Files to process; standard input is read when none are given
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl WcArgs {
    /// Parse the arguments that follow the command name.
    pub fn try_parse_args(args: &[OsString]) -> Result<Self, clap::Error> {
        Self::try_parse_from(std::iter::once(OsString::from(WC_NAME)).chain(args.iter().cloned()))
    }
}
