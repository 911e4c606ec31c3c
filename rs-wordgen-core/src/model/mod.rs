//! Top-level module for the word synthesis model.
//!
//! This module groups the two halves of the system:
//! - `NGramModel`: corpus analysis and the word generation algorithm
//! - `FrequencyTable`: per-m-gram character frequencies and sampling

/// Fixed-order n-gram model (`n >= 2`).
///
/// Handles corpus tokenization, n-gram extraction, the m-gram frequency
/// index, and generation of new words by outward growth.
pub mod ngram_model;

/// Frequency data for a single m-gram.
///
/// Tracks the characters observed immediately before and after the
/// m-gram and supports weighted random sampling from either side.
pub mod frequency_table;
