//! `oa-levenshtein` — Levenshtein edit distance for OpenAcosmi.
//!
//! Computes the minimum number of single-character insertions, deletions,
//! and substitutions needed to transform one string into another, using a
//! single-row dynamic programming algorithm that keeps one row of the cost
//! matrix instead of the full grid.
//!
//! Comparison operates on Unicode code points (`char`), never bytes: an
//! accented letter or emoji counts as one unit of length and one unit of
//! edit cost regardless of its UTF-8 width.
//!
//! # API
//!
//! - [`distance`] — one-off distance between two strings
//! - [`DistanceCalculator`] — reusable calculator; amortizes scratch
//!   allocation across many calls
//! - [`within`] — bounded yes/no check with early exit, for match filtering
//! - [`similarity`] — normalized similarity ratio in `[0.0, 1.0]`

pub mod distance;

pub use distance::{DistanceCalculator, distance, similarity, within};
