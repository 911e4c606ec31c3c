//! Character-level word synthesis library.
//!
//! This crate builds a statistical model of character transitions from a
//! corpus of text and uses it to generate new, plausible-looking words:
//! - Fixed-order n-gram extraction over whitespace-separated words
//! - Per-m-gram frequency tables of preceding/following characters
//! - Outward word growth driven by weighted random sampling
//! - An injectable random source for reproducible generation
//!
//! The model is built once from the corpus and is read-only afterward;
//! only the random source is consulted during generation.

/// Core n-gram model and frequency tables.
///
/// Exposes the model construction, the generation algorithm and the
/// per-m-gram frequency data used by both.
pub mod model;

/// Error kinds reported by model construction and generation.
pub mod error;

/// Random number abstraction (production and deterministic sources).
///
/// Generation is only as random as the source plugged into the model,
/// which is what makes its output reproducible in tests.
pub mod random;
