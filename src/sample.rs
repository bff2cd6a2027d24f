// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Built-in demo data.
//!
//! 23 values is deliberately not a perfect square: the implied square has
//! side 5 and two padding cells, so the demo exercises the bounds checks.

/// Demo haystack used when none is supplied.
pub const SAMPLE_HAYSTACK: [i64; 23] = [
    69, 49, 4, 50, 47, 95, 60, 31, 32, 77, 67, 41, 33, 98, 16, 13, 68, 90, 42, 99, 27, 7, 52,
];

/// Demo needle used when none is supplied.
pub const DEFAULT_NEEDLE: i64 = 99;
