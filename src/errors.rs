// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the search entry points.
//!
//! Not finding the needle is not an error, and neither is a mirror image that
//! falls in the padding of the square. The only failure is being handed a
//! size that does not describe the haystack.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The caller's size disagrees with the haystack it passed.
    #[error("haystack size {size} does not match its length {len}")]
    SizeMismatch { size: usize, len: usize },
}
