//! # provenant-confidence
//!
//! Pure scoring functions: text-similarity confidence, synthesis confidence
//! aggregation, and temporal / transformation decay. No state beyond the
//! tuning constants captured at construction, so a single calculator can be
//! shared across threads without locking.

pub mod calculator;
pub mod decay;
pub mod synthesis;
pub mod text;

pub use calculator::ConfidenceCalculator;
pub use synthesis::{SourceConfidence, SynthesisStrategy};
pub use text::MatchKind;
