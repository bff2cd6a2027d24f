// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Observer trait for the traversal.
//!
//! The engine reports each visited cell to an observer. The observer is a
//! side channel: it sees everything the search does but cannot change which
//! cells are visited or when the search stops.
//!
//! # Example
//!
//! ```
//! use square_search::engine::{MatchPolicy, SearchObserver, SquareEngine, Step};
//!
//! #[derive(Default)]
//! struct CountPadding(usize);
//!
//! impl SearchObserver<i32> for CountPadding {
//!     fn on_iteration(&mut self, step: &Step<'_, i32>) {
//!         self.0 += step.probes.iter().filter(|p| p.value.is_none()).count();
//!     }
//! }
//!
//! let haystack = [5, 8, 13];
//! let mut padding = CountPadding::default();
//! let outcome = SquareEngine::new(&haystack).run(&21, MatchPolicy::LastMatch, &mut padding);
//! assert_eq!(outcome.cell(), 0);
//! assert_eq!(padding.0, 1);
//! ```

use std::fmt;

use tracing::{debug, info, trace};

use super::Outcome;
use crate::geometry::{Mirror, Probe, SquareGrid};
use strum::EnumCount;

/// One probe of a visited cell, with the value it read.
#[derive(Debug)]
pub struct ProbeValue<'h, T> {
    pub probe: Probe,
    /// `None` when the probe fell in the padding.
    pub value: Option<&'h T>,
    /// Whether this probe was compared with the needle and matched it.
    pub matched: bool,
}

/// Everything the engine did for one visited cell.
#[derive(Debug)]
pub struct Step<'h, T> {
    /// 1-based iteration number.
    pub iteration: usize,
    pub cell: usize,
    /// The four probes, in probe order.
    pub probes: [ProbeValue<'h, T>; Mirror::COUNT],
}

/// Receives the events of one traversal.
///
/// # Lifecycle
///
/// 1. `on_start` once, before the first cell is visited
/// 2. `on_iteration` once per visited cell, including the one that ends a
///    first-match search
/// 3. `on_finish` once, with the outcome the engine is about to return
pub trait SearchObserver<T> {
    fn on_start(&mut self, _needle: &T, _grid: &SquareGrid) {}

    fn on_iteration(&mut self, _step: &Step<'_, T>) {}

    fn on_finish(&mut self, _needle: &T, _outcome: &Outcome) {}

    /// Optional: Get a name for this observer (for debugging).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<T> SearchObserver<T> for NoopObserver {}

/// Observer that writes the diagnostic report as `tracing` events.
///
/// Start and finish are logged at `info`, each iteration at `debug`, and
/// each individual probe at `trace`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

/// `index: value`, or `index: padding` for probes beyond the haystack.
struct ShownProbe<'a, 'h, T>(&'a ProbeValue<'h, T>);

impl<T: fmt::Debug> fmt::Display for ShownProbe<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.value {
            Some(value) => write!(f, "{}: {:?}", self.0.probe.index, value),
            None => write!(f, "{}: padding", self.0.probe.index),
        }
    }
}

impl<T: fmt::Debug> SearchObserver<T> for TracingObserver {
    fn on_start(&mut self, needle: &T, grid: &SquareGrid) {
        info!(
            needle = ?needle,
            len = grid.len(),
            base = grid.base(),
            median = grid.median(),
            last_cell = grid.last_cell(),
            "square search started"
        );
    }

    fn on_iteration(&mut self, step: &Step<'_, T>) {
        let [current, horizontal, vertical, descending] = &step.probes;
        debug!(
            iteration = step.iteration,
            cell = step.cell,
            current = %ShownProbe(current),
            horizontal = %ShownProbe(horizontal),
            vertical = %ShownProbe(vertical),
            descending = %ShownProbe(descending),
            "visited cell"
        );
        for probe in step.probes.iter().filter(|p| p.matched) {
            trace!(
                iteration = step.iteration,
                mirror = %probe.probe.mirror,
                index = probe.probe.index,
                "needle matched"
            );
        }
    }

    fn on_finish(&mut self, needle: &T, outcome: &Outcome) {
        match outcome.found {
            Some(found) => info!(
                needle = ?needle,
                iterations = outcome.iterations,
                found_iteration = found.iteration,
                found_cell = found.cell,
                "needle found"
            ),
            None => info!(
                needle = ?needle,
                iterations = outcome.iterations,
                "needle not found"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{MatchPolicy, SquareEngine};

    #[derive(Default)]
    struct EventLog {
        started: usize,
        cells: Vec<usize>,
        finished: usize,
    }

    impl SearchObserver<u8> for EventLog {
        fn on_start(&mut self, _needle: &u8, _grid: &SquareGrid) {
            self.started += 1;
        }

        fn on_iteration(&mut self, step: &Step<'_, u8>) {
            self.cells.push(step.cell);
        }

        fn on_finish(&mut self, _needle: &u8, _outcome: &Outcome) {
            self.finished += 1;
        }
    }

    #[test]
    fn test_lifecycle_order() {
        let haystack: Vec<u8> = (1..=10).collect();
        let mut log = EventLog::default();
        SquareEngine::new(&haystack).run(&0, MatchPolicy::LastMatch, &mut log);
        assert_eq!(log.started, 1);
        assert_eq!(log.finished, 1);
        // len 10: base 4, median 2
        assert_eq!(log.cells, vec![1, 2, 5, 6]);
    }

    #[test]
    fn test_first_match_reports_matching_iteration() {
        let haystack: Vec<u8> = (1..=10).collect();
        let mut log = EventLog::default();
        let outcome = SquareEngine::new(&haystack).run(&2, MatchPolicy::FirstMatch, &mut log);
        assert_eq!(outcome.cell(), 2);
        assert_eq!(log.cells, vec![1, 2]);
        assert_eq!(log.finished, 1);
    }

    #[test]
    fn test_shown_probe() {
        let value = 42;
        let probe = Probe {
            mirror: Mirror::Horizontal,
            index: 5,
            in_bounds: true,
        };
        let shown = ProbeValue {
            probe,
            value: Some(&value),
            matched: false,
        };
        assert_eq!(ShownProbe(&shown).to_string(), "5: 42");

        let padding: ProbeValue<'_, i32> = ProbeValue {
            probe: Probe {
                in_bounds: false,
                index: 25,
                ..probe
            },
            value: None,
            matched: false,
        };
        assert_eq!(ShownProbe(&padding).to_string(), "25: padding");
    }

    #[test]
    fn test_default_name_is_type_name() {
        let observer = NoopObserver;
        let name = SearchObserver::<i32>::name(&observer);
        assert!(name.ends_with("NoopObserver"));
    }
}
