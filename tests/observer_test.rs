// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The diagnostic side channel of the debug variant.

use square_search::engine::{MatchPolicy, SearchObserver, SquareEngine, Step};
use square_search::geometry::{Mirror, SquareGrid};
use square_search::{
    square_search_debug, square_search_debug_with, square_search_report, Outcome,
    SAMPLE_HAYSTACK,
};

/// Observer that keeps the data items a diagnostic report must carry.
#[derive(Default)]
struct Collected {
    needle: Option<i64>,
    base: Option<usize>,
    rows: Vec<(usize, usize, Vec<(usize, Option<i64>)>)>,
    status: Option<Option<(usize, usize)>>,
}

impl SearchObserver<i64> for Collected {
    fn on_start(&mut self, needle: &i64, grid: &SquareGrid) {
        self.needle = Some(*needle);
        self.base = Some(grid.base());
    }

    fn on_iteration(&mut self, step: &Step<'_, i64>) {
        let probes = step
            .probes
            .iter()
            .map(|p| (p.probe.index, p.value.copied()))
            .collect();
        self.rows.push((step.iteration, step.cell, probes));
    }

    fn on_finish(&mut self, _needle: &i64, outcome: &Outcome) {
        self.status = Some(outcome.found.map(|m| (m.iteration, m.cell)));
    }
}

#[test]
fn test_custom_sink_sees_every_data_item() {
    let mut sink = Collected::default();
    let cell = square_search_debug_with(&SAMPLE_HAYSTACK, &99, &mut sink);
    assert_eq!(cell, 20);
    assert_eq!(sink.needle, Some(99));
    assert_eq!(sink.base, Some(5));
    assert_eq!(sink.rows.len(), 9);
    assert_eq!(sink.status, Some(Some((4, 20))));

    let (iteration, cell, probes) = &sink.rows[0];
    assert_eq!((*iteration, *cell), (1, 1));
    assert_eq!(
        probes,
        &vec![(1, Some(69)), (5, Some(47)), (21, Some(27)), (25, None)]
    );
}

#[test]
fn test_sink_reports_not_found() {
    let mut sink = Collected::default();
    assert_eq!(square_search_debug_with(&SAMPLE_HAYSTACK, &-1, &mut sink), 0);
    assert_eq!(sink.status, Some(None));
    assert_eq!(sink.rows.len(), 9);
}

#[test]
fn test_dyn_observer() {
    let mut sink = Collected::default();
    let observer: &mut dyn SearchObserver<i64> = &mut sink;
    let outcome = SquareEngine::new(&SAMPLE_HAYSTACK).run(&4, MatchPolicy::FirstMatch, observer);
    assert_eq!(outcome.cell(), 3);
    assert_eq!(sink.rows.len(), 3);
}

#[test]
fn test_report_marks_matching_probe() {
    let haystack = [2, 9, 9, 2];
    let report = square_search_report(&haystack, &9);
    // base 2: a single iteration probes cells 1, 2, 3, 4.
    assert_eq!(report.iterations.len(), 1);
    let matched: Vec<Mirror> = report.iterations[0]
        .probes
        .iter()
        .filter(|p| p.matched)
        .map(|p| p.mirror)
        .collect();
    assert_eq!(matched, vec![Mirror::Horizontal, Mirror::Vertical]);
    assert_eq!(report.cell(), 3);
}

#[test]
fn test_debug_variant_under_a_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let cell = tracing::subscriber::with_default(subscriber, || {
        square_search_debug(&SAMPLE_HAYSTACK, &4)
    });
    assert_eq!(cell, 3);
}
