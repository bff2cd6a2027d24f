// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometry of the implied square over a haystack.
//!
//! This module contains pure, stateless index arithmetic:
//! - square: linear index to row/column, reflection of a single coordinate
//! - mirror: the three non-trivial symmetries of the square
//! - grid: the square for a given haystack length and its traversal order

pub mod grid;
pub mod mirror;
pub mod square;

// Re-export for convenience
pub use grid::{Cells, Probe, SquareGrid};
pub use mirror::{
    descending_opposite, horizontal_opposite, vertical_opposite, Mirror, PROBE_ORDER,
};
pub use square::{cell_index, column_index, diametric_opposite, find_nearest_sqrt, row_index};
