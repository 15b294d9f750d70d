// crates/cli/src/config.rs
use coreutils_domain::ActiveFlags;
use coreutils_shared_kernel::Source;

use crate::args::WcArgs;

/// Resolved settings for one `wc` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WcConfig {
    pub flags: ActiveFlags,
    /// Empty means standard input.
    pub sources: Vec<Source>,
}

impl From<WcArgs> for WcConfig {
    fn from(args: WcArgs) -> Self {
        // -m is reported as raw bytes, same as -c
        let flags = ActiveFlags::from_requested(args.lines, args.words, args.bytes || args.chars);
        let sources = args.files.into_iter().map(Source::from).collect();
        Self { flags, sources }
    }
}
