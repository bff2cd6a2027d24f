// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The implied square over a haystack, and the order in which it is walked.
//!
//! Only the upper-left quadrant, plus the median row and column when `base`
//! is odd, is visited. Every other cell of the square is the image of a
//! visited cell under one of the [`Mirror`] symmetries, so probing the four
//! images of each visited cell covers the whole haystack.
//!
//! For `len = 23` (`base = 5`, `median = 3`) the visited cells are:
//!
//! ```text
//!  1  2  3  .  .
//!  6  7  8  .  .
//! 11 12 13  .  .
//!  .  .  .  .  .
//!  .  .  .  .
//! ```

use super::mirror::{Mirror, PROBE_ORDER};
use super::square::{column_index, find_nearest_sqrt, row_index};
use strum::EnumCount;

/// A cell index produced by one of the four symmetries of a visited cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub mirror: Mirror,
    /// 1-based cell index, possibly beyond the haystack.
    pub index: usize,
    /// Whether `index` addresses a real haystack cell.
    pub in_bounds: bool,
}

/// Square layout of a haystack of `len` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareGrid {
    len: usize,
    base: usize,
    median: usize,
    last_cell: usize,
}

impl SquareGrid {
    /// Lay out `len` cells in the smallest square that holds them.
    pub fn new(len: usize) -> Self {
        let base = find_nearest_sqrt(len);
        let median = (base + 1) / 2;
        let last_cell = median + median * base - base;
        Self {
            len,
            base,
            median,
            last_cell,
        }
    }

    /// Number of real cells.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Side of the square.
    pub fn base(&self) -> usize {
        self.base
    }

    /// `floor((base + 1) / 2)`, the row and column that bisect the square.
    pub fn median(&self) -> usize {
        self.median
    }

    /// Last visited cell: column `median` of row `median`.
    pub fn last_cell(&self) -> usize {
        self.last_cell
    }

    /// Number of cells the traversal visits, `median * median`.
    pub fn visit_count(&self) -> usize {
        self.median * self.median
    }

    pub fn row(&self, n: usize) -> usize {
        row_index(n, self.base)
    }

    pub fn column(&self, n: usize) -> usize {
        column_index(n, self.base)
    }

    /// Whether a 1-based index addresses a real haystack cell.
    pub fn contains(&self, index: usize) -> bool {
        index >= 1 && index <= self.len
    }

    /// The four probes of `cell`, in probe order.
    pub fn probes(&self, cell: usize) -> [Probe; Mirror::COUNT] {
        PROBE_ORDER.map(|mirror| {
            let index = mirror.apply(cell, self.base);
            Probe {
                mirror,
                index,
                in_bounds: self.contains(index),
            }
        })
    }

    /// The visited cell after `cell`.
    ///
    /// Steps right until the median column, then jumps to column 1 of the
    /// next row; the cells right of the median are horizontal images of
    /// cells already visited.
    pub fn next_cell(&self, cell: usize) -> usize {
        if self.column(cell) != self.median {
            cell + 1
        } else {
            cell + self.base - self.median + 1
        }
    }

    /// Iterator over the visited cells, from 1 to [`last_cell`](Self::last_cell).
    pub fn cells(&self) -> Cells {
        Cells {
            grid: *self,
            next: 1,
        }
    }
}

/// Iterator returned by [`SquareGrid::cells`].
#[derive(Debug, Clone)]
pub struct Cells {
    grid: SquareGrid,
    next: usize,
}

impl Iterator for Cells {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next > self.grid.last_cell {
            return None;
        }
        let cell = self.next;
        self.next = self.grid.next_cell(cell);
        Some(cell)
    }
}
