// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structured diagnostic report of a full traversal.

use std::fmt;

use crate::engine::{Match, Outcome, SearchObserver, Step};
use crate::geometry::{Mirror, SquareGrid};
use strum::EnumCount;

/// One probe as it was seen during the traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRecord<T> {
    pub mirror: Mirror,
    pub index: usize,
    /// `None` for padding.
    pub value: Option<T>,
    pub matched: bool,
}

/// One visited cell and its four probes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationRecord<T> {
    pub iteration: usize,
    pub cell: usize,
    pub probes: [ProbeRecord<T>; Mirror::COUNT],
}

/// Observer that keeps an owned copy of every iteration.
#[derive(Debug, Clone)]
pub struct RecordingObserver<T> {
    records: Vec<IterationRecord<T>>,
}

impl<T> Default for RecordingObserver<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> RecordingObserver<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[IterationRecord<T>] {
        &self.records
    }

    pub fn into_records(self) -> Vec<IterationRecord<T>> {
        self.records
    }
}

impl<T: Clone> SearchObserver<T> for RecordingObserver<T> {
    fn on_start(&mut self, _needle: &T, grid: &SquareGrid) {
        self.records.clear();
        self.records.reserve(grid.visit_count());
    }

    fn on_iteration(&mut self, step: &Step<'_, T>) {
        let probes = std::array::from_fn(|i| {
            let seen = &step.probes[i];
            ProbeRecord {
                mirror: seen.probe.mirror,
                index: seen.probe.index,
                value: seen.value.cloned(),
                matched: seen.matched,
            }
        });
        self.records.push(IterationRecord {
            iteration: step.iteration,
            cell: step.cell,
            probes,
        });
    }
}

/// Everything the tracing variant learned about one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport<T> {
    pub needle: T,
    pub grid: SquareGrid,
    pub iterations: Vec<IterationRecord<T>>,
    pub outcome: Outcome,
}

impl<T> SearchReport<T> {
    /// Last matching cell, or 0.
    pub fn cell(&self) -> usize {
        self.outcome.cell()
    }

    pub fn found(&self) -> Option<Match> {
        self.outcome.found
    }
}

fn probe_label(mirror: Mirror) -> &'static str {
    match mirror {
        Mirror::Identity => "Current cell",
        Mirror::Horizontal => "Horizontal opposite",
        Mirror::Vertical => "Vertical opposite",
        Mirror::Descending => "Descending opposite",
    }
}

impl<T: fmt::Debug> fmt::Display for SearchReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Needle = {:?}", self.needle)?;
        writeln!(f, "Base = {}", self.grid.base())?;

        for record in &self.iterations {
            writeln!(f)?;
            writeln!(f, "Iteration {} (cell {})", record.iteration, record.cell)?;
            for probe in &record.probes {
                write!(f, "{} index and value: {}: ", probe_label(probe.mirror), probe.index)?;
                match &probe.value {
                    Some(value) => write!(f, "{:?}", value)?,
                    None => write!(f, "padding")?,
                }
                if probe.matched {
                    write!(f, " <- match")?;
                }
                writeln!(f)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Needle: {:?}", self.needle)?;
        writeln!(f, "Iterations: {}", self.outcome.iterations)?;
        match self.outcome.found {
            Some(found) => {
                writeln!(f, "Needle found on iteration {}", found.iteration)?;
                write!(f, "Needle found on cell {}", found.cell)
            }
            None => write!(f, "Needle not found"),
        }
    }
}
