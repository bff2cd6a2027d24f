// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The traversal core shared by every search entry point.
//!
//! The engine walks the visited cells of the haystack's [`SquareGrid`] and,
//! for each one, compares the needle with the four probes in probe order
//! (self, horizontal, vertical, descending). Probes in the padding are never
//! dereferenced.
//!
//! # Match policies
//!
//! - `FirstMatch` returns as soon as a probe matches. Among duplicates the
//!   winner is the first in traversal order, which is not necessarily the
//!   lowest index.
//! - `LastMatch` visits every cell. Each match overwrites the previous one, so
//!   the last matching probe of the last matching iteration wins.
//!
//! Both policies share the same loop and the same stopping boundary, the
//! grid's `last_cell`.
//!
//! # Example
//!
//! ```
//! use square_search::engine::{MatchPolicy, NoopObserver, SquareEngine};
//!
//! let haystack = [3, 1, 4, 1, 5, 9, 2, 6, 5];
//! let engine = SquareEngine::new(&haystack);
//!
//! let first = engine.run(&5, MatchPolicy::FirstMatch, &mut NoopObserver);
//! let last = engine.run(&5, MatchPolicy::LastMatch, &mut NoopObserver);
//! // Cell 9 is the descending image of cell 1, so it is probed first.
//! assert_eq!(first.cell(), 9);
//! assert_eq!(last.cell(), 5);
//! ```

pub mod observer;

pub use observer::{NoopObserver, ProbeValue, SearchObserver, Step, TracingObserver};

use crate::errors::SearchError;
use crate::geometry::{Mirror, SquareGrid};
use crate::state::statistics::{Counters, Statistics};

/// Returned in place of a cell index when the needle is absent.
///
/// Cells are numbered from 1, so the sentinel never collides with a real cell.
pub const NOT_FOUND: usize = 0;

/// When the traversal stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Stop at the first matching probe.
    FirstMatch,
    /// Visit every cell; later matches replace earlier ones.
    LastMatch,
}

/// Where the needle was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// 1-based cell index.
    pub cell: usize,
    /// 1-based iteration in which the cell was probed.
    pub iteration: usize,
    /// Which probe of that iteration matched.
    pub mirror: Mirror,
}

/// Result of one traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub found: Option<Match>,
    /// Number of cells visited.
    pub iterations: usize,
    pub statistics: Statistics,
}

impl Outcome {
    /// Matching cell, or [`NOT_FOUND`].
    pub fn cell(&self) -> usize {
        self.found.map_or(NOT_FOUND, |found| found.cell)
    }
}

/// Traversal over one read-only haystack.
///
/// The grid is computed once, so an engine can be reused for any number of
/// needles, including from several threads at once.
#[derive(Debug)]
pub struct SquareEngine<'h, T> {
    haystack: &'h [T],
    grid: SquareGrid,
}

impl<T> Clone for SquareEngine<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SquareEngine<'_, T> {}

impl<'h, T: PartialEq> SquareEngine<'h, T> {
    pub fn new(haystack: &'h [T]) -> Self {
        Self {
            haystack,
            grid: SquareGrid::new(haystack.len()),
        }
    }

    /// Create an engine for a caller that tracks the haystack size separately.
    ///
    /// Fails before any probing if `size` is not the haystack's length.
    pub fn with_size(haystack: &'h [T], size: usize) -> Result<Self, SearchError> {
        if size != haystack.len() {
            return Err(SearchError::SizeMismatch {
                size,
                len: haystack.len(),
            });
        }
        Ok(Self::new(haystack))
    }

    pub fn grid(&self) -> &SquareGrid {
        &self.grid
    }

    pub fn haystack(&self) -> &'h [T] {
        self.haystack
    }

    /// Value at a 1-based cell index, `None` for padding.
    fn value_at(&self, index: usize) -> Option<&'h T> {
        if self.grid.contains(index) {
            self.haystack.get(index - 1)
        } else {
            None
        }
    }

    /// Walk the grid looking for `needle`.
    pub fn run<O>(&self, needle: &T, policy: MatchPolicy, observer: &mut O) -> Outcome
    where
        O: SearchObserver<T> + ?Sized,
    {
        observer.on_start(needle, &self.grid);

        let mut statistics = Statistics::new();
        let mut found = None;
        let mut iterations = 0;

        for cell in self.grid.cells() {
            iterations += 1;
            statistics.increment_counter(Counters::Iterations);

            let mut step_match = None;
            let probes = self.grid.probes(cell).map(|probe| {
                let value = self.value_at(probe.index);
                if value.is_none() {
                    statistics.increment_counter(Counters::PaddingSkipped);
                }
                // After a first match the remaining probes are read for the
                // observer but not compared.
                let compare = policy == MatchPolicy::LastMatch || step_match.is_none();
                let matched = match value {
                    Some(value) if compare => {
                        statistics.increment_counter(Counters::Comparisons);
                        value == needle
                    }
                    _ => false,
                };
                if matched {
                    statistics.increment_counter(Counters::Matches);
                    step_match = Some(Match {
                        cell: probe.index,
                        iteration: iterations,
                        mirror: probe.mirror,
                    });
                }
                ProbeValue {
                    probe,
                    value,
                    matched,
                }
            });

            observer.on_iteration(&Step {
                iteration: iterations,
                cell,
                probes,
            });

            if step_match.is_some() {
                found = step_match;
                if policy == MatchPolicy::FirstMatch {
                    break;
                }
            }
        }

        let outcome = Outcome {
            found,
            iterations,
            statistics,
        };
        observer.on_finish(needle, &outcome);
        outcome
    }
}
