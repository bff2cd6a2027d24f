// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The four symmetries of the square used by the search.
//!
//! A square of side `base` is invariant under the Klein four-group generated
//! by the two mid-line reflections. Each visited cell is probed together with
//! its images under the three non-trivial elements:
//!
//! - `Horizontal`: same row, column reflected across the vertical mid-line
//! - `Vertical`: same column, row reflected across the horizontal mid-line
//! - `Descending`: both reflected, i.e. the point reflection through the centre
//!
//! All three images lie inside the `base * base` square but may fall in the
//! padding beyond the haystack, so callers must bounds-check them.

use super::square::{cell_index, column_index, diametric_opposite, row_index};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

/// One of the four symmetries, in the order the search probes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter, Display)]
#[repr(u8)]
pub enum Mirror {
    /// The visited cell itself.
    #[strum(serialize = "self")]
    Identity,
    #[strum(serialize = "horizontal")]
    Horizontal,
    #[strum(serialize = "vertical")]
    Vertical,
    #[strum(serialize = "descending")]
    Descending,
}

/// Probe order within one iteration. First-match semantics depend on it.
pub const PROBE_ORDER: [Mirror; 4] = [
    Mirror::Identity,
    Mirror::Horizontal,
    Mirror::Vertical,
    Mirror::Descending,
];

impl Mirror {
    /// Image of cell `n` under this symmetry, in a square of side `base`.
    pub fn apply(self, n: usize, base: usize) -> usize {
        match self {
            Mirror::Identity => n,
            Mirror::Horizontal => horizontal_opposite(n, base),
            Mirror::Vertical => vertical_opposite(n, base),
            Mirror::Descending => descending_opposite(n, base),
        }
    }
}

/// Mirror of cell `n` within its row.
pub fn horizontal_opposite(n: usize, base: usize) -> usize {
    let r = row_index(n, base);
    let c = diametric_opposite(column_index(n, base), base);
    cell_index(r, c, base)
}

/// Mirror of cell `n` within its column.
pub fn vertical_opposite(n: usize, base: usize) -> usize {
    let r = diametric_opposite(row_index(n, base), base);
    let c = column_index(n, base);
    cell_index(r, c, base)
}

/// Point reflection of cell `n` through the centre of the square.
///
/// Row and column are each reflected from their original values; this is not
/// `vertical_opposite(horizontal_opposite(n))`, although the two agree.
pub fn descending_opposite(n: usize, base: usize) -> usize {
    let r = diametric_opposite(row_index(n, base), base);
    let c = diametric_opposite(column_index(n, base), base);
    cell_index(r, c, base)
}
