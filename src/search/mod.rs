// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Public search entry points.
//!
//! Each function folds the haystack into a square and returns a 1-based cell
//! index, or [`NOT_FOUND`](crate::engine::NOT_FOUND) (0) when the needle is absent:
//!
//! | Function | Stops | Diagnostics |
//! |----------|-------|-------------|
//! | [`square_search`] | first match | none |
//! | [`square_search_debug`] | never | `tracing` events |
//! | [`square_search_debug_with`] | never | caller's observer |
//! | [`square_search_report`] | never | returned [`SearchReport`] |
//!
//! The `try_` variants take the haystack size separately and reject a size
//! that does not match the haystack.

pub mod report;

pub use report::{IterationRecord, ProbeRecord, RecordingObserver, SearchReport};

use std::fmt::Debug;

use tracing::{debug, trace};

use crate::engine::{MatchPolicy, NoopObserver, SearchObserver, SquareEngine, TracingObserver};
use crate::errors::SearchError;

/// Find `needle`, stopping at the first match in traversal order.
///
/// # Example
///
/// ```
/// use square_search::square_search;
///
/// let haystack = [69, 49, 4, 50, 47, 95, 60, 31, 32, 77, 67, 41];
/// assert_eq!(square_search(&haystack, &4), 3);
/// assert_eq!(square_search(&haystack, &1000), 0);
/// ```
pub fn square_search<T: PartialEq>(haystack: &[T], needle: &T) -> usize {
    let outcome =
        SquareEngine::new(haystack).run(needle, MatchPolicy::FirstMatch, &mut NoopObserver);
    trace!(
        len = haystack.len(),
        iterations = outcome.iterations,
        cell = outcome.cell(),
        "square search finished"
    );
    outcome.cell()
}

/// [`square_search`] for callers that carry the haystack size separately.
pub fn try_square_search<T: PartialEq>(
    haystack: &[T],
    size: usize,
    needle: &T,
) -> Result<usize, SearchError> {
    let engine = checked_engine(haystack, size)?;
    Ok(engine
        .run(needle, MatchPolicy::FirstMatch, &mut NoopObserver)
        .cell())
}

/// Visit every cell and return the last match, logging the traversal.
///
/// Emits the needle and grid shape, each iteration's probes and values, and
/// the final status through `tracing` (see [`TracingObserver`]).
pub fn square_search_debug<T: PartialEq + Debug>(haystack: &[T], needle: &T) -> usize {
    square_search_debug_with(haystack, needle, &mut TracingObserver)
}

/// [`square_search_debug`] with a caller-supplied diagnostic sink.
pub fn square_search_debug_with<T, O>(haystack: &[T], needle: &T, observer: &mut O) -> usize
where
    T: PartialEq,
    O: SearchObserver<T> + ?Sized,
{
    SquareEngine::new(haystack)
        .run(needle, MatchPolicy::LastMatch, observer)
        .cell()
}

/// [`square_search_debug`] for callers that carry the haystack size separately.
pub fn try_square_search_debug<T: PartialEq + Debug>(
    haystack: &[T],
    size: usize,
    needle: &T,
) -> Result<usize, SearchError> {
    let engine = checked_engine(haystack, size)?;
    Ok(engine
        .run(needle, MatchPolicy::LastMatch, &mut TracingObserver)
        .cell())
}

/// Run the tracing variant and return its report instead of logging it.
pub fn square_search_report<T: PartialEq + Clone>(haystack: &[T], needle: &T) -> SearchReport<T> {
    let engine = SquareEngine::new(haystack);
    let mut recorder = RecordingObserver::new();
    let outcome = engine.run(needle, MatchPolicy::LastMatch, &mut recorder);
    SearchReport {
        needle: needle.clone(),
        grid: *engine.grid(),
        iterations: recorder.into_records(),
        outcome,
    }
}

/// First-match search for each needle against one shared haystack.
///
/// Results are in needle order. With the `parallel` feature the needles are
/// searched on the rayon pool.
pub fn search_many<T: PartialEq + Sync>(haystack: &[T], needles: &[T]) -> Vec<usize> {
    let engine = SquareEngine::new(haystack);
    let find = |needle: &T| {
        engine
            .run(needle, MatchPolicy::FirstMatch, &mut NoopObserver)
            .cell()
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        needles.par_iter().map(find).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        needles.iter().map(find).collect()
    }
}

fn checked_engine<T: PartialEq>(
    haystack: &[T],
    size: usize,
) -> Result<SquareEngine<'_, T>, SearchError> {
    let engine = SquareEngine::with_size(haystack, size);
    if let Err(err) = &engine {
        debug!(size, len = haystack.len(), "rejecting haystack: {}", err);
    }
    engine
}
