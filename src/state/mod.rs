// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-search state.
//!
//! A search owns all of its state; nothing here outlives a single traversal.

pub mod statistics;

pub use statistics::{Counters, Statistics};
