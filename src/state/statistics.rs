// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters collected by one run of the traversal. They are returned with the
//! outcome and never shared between searches.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, Display, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Visited cells.
    #[strum(serialize = "iterations")]
    Iterations,
    /// Probes that addressed a real cell and were compared with the needle.
    #[strum(serialize = "comparisons")]
    Comparisons,
    /// Probes that fell in the padding beyond the haystack.
    #[strum(serialize = "padding")]
    PaddingSkipped,
    /// Comparisons that matched the needle.
    #[strum(serialize = "matches")]
    Matches,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, counter) in Counters::iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", counter, self.get(counter))?;
        }
        Ok(())
    }
}
