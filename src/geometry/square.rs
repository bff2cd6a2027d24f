// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Scalar conversions between a linear cell index and an implied square.
//!
//! A haystack of `len` cells is laid out row by row in a square whose side
//! `base` is the smallest integer with `base * base >= len`. Cells are
//! numbered from 1, rows and columns are numbered from 1 as well:
//!
//! ```text
//! base = 5, len = 23
//!
//!  1  2  3  4  5
//!  6  7  8  9 10
//! 11 12 13 14 15
//! 16 17 18 19 20
//! 21 22 23 .. ..     <- cells 24 and 25 are padding
//! ```

/// Side of the smallest square holding `n` cells.
///
/// Returns the smallest `b >= 1` with `b * b >= n`, so `find_nearest_sqrt(0)`
/// and `find_nearest_sqrt(1)` are both 1, and `find_nearest_sqrt(23)` is 5.
pub fn find_nearest_sqrt(n: usize) -> usize {
    // Seed from the float root, then correct in both directions: the float
    // may be off by one either way for large n.
    let mut b = ((n as f64).sqrt() as usize).max(1);
    while b.saturating_mul(b) < n {
        b += 1;
    }
    while b > 1 && (b - 1) * (b - 1) >= n {
        b -= 1;
    }
    b
}

/// Row (1-based) of cell `n` in a square of side `base`: `ceil(n / base)`.
pub fn row_index(n: usize, base: usize) -> usize {
    debug_assert!(base >= 1, "square base must be at least 1");
    n.div_ceil(base)
}

/// Column (1-based) of cell `n` in a square of side `base`.
///
/// Equal to `n - base * ceil(n / base) + base`, always in `1..=base` for `n >= 1`.
pub fn column_index(n: usize, base: usize) -> usize {
    n + base - base * row_index(n, base)
}

/// Reflect a row or column index across the middle of `1..=base`.
///
/// `diametric_opposite(2, 5) == 4`, `diametric_opposite(3, 5) == 3`.
pub fn diametric_opposite(n: usize, base: usize) -> usize {
    debug_assert!(n <= base + 1, "index {} outside base {}", n, base);
    (base + 1) - n
}

/// Linear cell index of the 1-based `(row, column)` pair.
pub fn cell_index(row: usize, column: usize, base: usize) -> usize {
    column + base * row - base
}
