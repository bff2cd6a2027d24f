// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! The reference models here work directly on (row, column) pairs so that
//! they do not share any index arithmetic with the crate under test.

#![allow(dead_code)]

/// Side of the smallest square holding `len` cells, by exhaustive search.
pub fn naive_base(len: usize) -> usize {
    let mut b = 1;
    while b * b < len {
        b += 1;
    }
    b
}

/// 1-based positions of `needle` in `haystack`, lowest first.
pub fn linear_positions<T: PartialEq>(haystack: &[T], needle: &T) -> Vec<usize> {
    haystack
        .iter()
        .enumerate()
        .filter(|(_, value)| *value == needle)
        .map(|(i, _)| i + 1)
        .collect()
}

/// Every in-bounds probe of a traversal of `len` cells, in probe order.
///
/// Each entry is `(iteration, index)`. An index appears more than once when a
/// visited cell lies on a mid-line of an odd square.
pub fn reference_probes(len: usize) -> Vec<(usize, usize)> {
    let b = naive_base(len);
    let m = (b + 1) / 2;
    let at = |r: usize, c: usize| (r - 1) * b + c;

    let mut probes = Vec::new();
    let mut iteration = 0;
    for r in 1..=m {
        for c in 1..=m {
            iteration += 1;
            let (rr, cc) = (b + 1 - r, b + 1 - c);
            for index in [at(r, c), at(r, cc), at(rr, c), at(rr, cc)] {
                if index >= 1 && index <= len {
                    probes.push((iteration, index));
                }
            }
        }
    }
    probes
}

/// First-match result predicted by the reference traversal.
pub fn reference_first<T: PartialEq>(haystack: &[T], needle: &T) -> usize {
    reference_probes(haystack.len())
        .into_iter()
        .find(|&(_, index)| haystack[index - 1] == *needle)
        .map_or(0, |(_, index)| index)
}

/// Last-match result predicted by the reference traversal.
pub fn reference_last<T: PartialEq>(haystack: &[T], needle: &T) -> usize {
    reference_probes(haystack.len())
        .into_iter()
        .filter(|&(_, index)| haystack[index - 1] == *needle)
        .last()
        .map_or(0, |(_, index)| index)
}
