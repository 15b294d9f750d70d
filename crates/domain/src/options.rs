// crates/domain/src/options.rs

/// Which statistics to print. Never selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveFlags {
    lines: bool,
    words: bool,
    bytes: bool,
}

impl ActiveFlags {
    pub const ALL: Self = Self { lines: true, words: true, bytes: true };

    /// Build the selection from what the user asked for; an empty request selects all three.
    #[must_use]
    pub const fn from_requested(lines: bool, words: bool, bytes: bool) -> Self {
        if !lines && !words && !bytes {
            Self::ALL
        } else {
            Self { lines, words, bytes }
        }
    }

    #[inline]
    pub const fn lines(self) -> bool {
        self.lines
    }

    #[inline]
    pub const fn words(self) -> bool {
        self.words
    }

    #[inline]
    pub const fn bytes(self) -> bool {
        self.bytes
    }
}

impl Default for ActiveFlags {
    fn default() -> Self {
        Self::ALL
    }
}
