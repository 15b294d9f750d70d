// crates/domain/src/model/counts.rs
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use coreutils_shared_kernel::{ByteCount, LineCount, WordCount};

/// Line, word and byte statistics for one source, or the field-wise sum of several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Counts {
    pub lines: LineCount,
    pub words: WordCount,
    pub bytes: ByteCount,
}

impl Counts {
    pub const ZERO: Self = Self {
        lines: LineCount::ZERO,
        words: WordCount::ZERO,
        bytes: ByteCount::ZERO,
    };

    pub const fn new(lines: usize, words: usize, bytes: usize) -> Self {
        Self {
            lines: LineCount::new(lines),
            words: WordCount::new(words),
            bytes: ByteCount::new(bytes),
        }
    }
}

impl Add for Counts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            lines: self.lines + rhs.lines,
            words: self.words + rhs.words,
            bytes: self.bytes + rhs.bytes,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Counts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Counts> for Counts {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
