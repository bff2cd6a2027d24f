// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Square search: scan an array four cells per iteration.
//!
//! The haystack's cells are numbered from 1 and laid out row by row in the
//! smallest square of side `base` that holds them. A square is symmetric
//! under reflection across its two mid-lines, so every cell belongs to a
//! class of at most four mirror images. The search visits one representative
//! per class and compares the needle with all four images at once.
//!
//! # Architecture
//!
//! ## Geometry (pure)
//!
//! - `geometry::square`: linear index to row/column and back
//! - `geometry::mirror`: horizontal, vertical and descending (point) reflections
//! - `geometry::grid`: the square for a haystack length and its traversal order
//!
//! ## Traversal
//!
//! - `engine`: the single traversal loop, parameterized by a `MatchPolicy`
//!   (first match wins, or last match wins) and a `SearchObserver`
//! - `state`: counters collected during one traversal
//!
//! ## Entry points
//!
//! - `search`: `square_search`, its debug variant, sized `try_` variants,
//!   structured reports and multi-needle search
//!
//! # Search Algorithm
//!
//! For `len` cells:
//!
//! 1. `base` is the smallest integer with `base * base >= len`
//! 2. `median = (base + 1) / 2` bisects the square
//! 3. Cells with row and column both at most `median` are visited in order,
//!    ending at `last_cell = median + median * base - base`
//! 4. Each visited cell is probed as itself, then its horizontal, vertical and
//!    descending images; images beyond `len` are padding and are skipped
//!
//! That is `median * median` iterations, roughly a quarter of a linear scan.
//!
//! ```
//! use square_search::{square_search, SAMPLE_HAYSTACK};
//!
//! assert_eq!(square_search(&SAMPLE_HAYSTACK, &99), 20);
//! assert_eq!(square_search(&SAMPLE_HAYSTACK, &1000), 0);
//! ```

pub mod engine;
pub mod errors;
pub mod geometry;
pub mod sample;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use engine::{MatchPolicy, Outcome, SearchObserver, SquareEngine, NOT_FOUND};
pub use errors::SearchError;
pub use geometry::SquareGrid;
pub use sample::{DEFAULT_NEEDLE, SAMPLE_HAYSTACK};
pub use search::{
    search_many, square_search, square_search_debug, square_search_debug_with,
    square_search_report, try_square_search, try_square_search_debug, SearchReport,
};
