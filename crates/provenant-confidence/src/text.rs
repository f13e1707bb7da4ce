//! Text-similarity heuristics: exact, normalized, substring, and token overlap.
//!
//! ```text
//! both empty              → 1.0
//! exactly one empty       → 0.0
//! byte-equal              → 1.0
//! equal after normalizing → normalized_match_score
//! substring (either way)  → substring_floor + substring_span × (shorter / longer)
//! otherwise               → min(overlap_floor + overlap_span × jaccard, overlap_cap)
//! ```
//!
//! Result is clamped to [0.0, 1.0].

use std::collections::HashSet;

use provenant_core::confidence::clamp_unit;
use provenant_core::config::ConfidenceConfig;
use serde::{Deserialize, Serialize};

/// How two texts were related when scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Byte-equal (including both empty).
    Exact,
    /// Equal after trim, whitespace-collapse, and case-fold.
    Normalized,
    /// One text is a contiguous substring of the other.
    Substring,
    /// No containment; scored by shared tokens.
    TokenOverlap,
    /// Exactly one side is empty.
    Empty,
}

/// Trim, collapse internal whitespace runs to one space, and case-fold.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out.to_lowercase()
}

/// Case-folded, punctuation-stripped whitespace tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Distinct tokens of `text`.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

/// Jaccard similarity |A∩B| / |A∪B|. Two empty sets score 0.0.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// If one text contains the other, the shorter/longer length ratio in chars.
///
/// Callers compare for equality first; for distinct texts the ratio is < 1.0.
pub fn containment_ratio(a: &str, b: &str) -> Option<f64> {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if !longer.contains(shorter) {
        return None;
    }
    let longer_chars = longer.chars().count();
    if longer_chars == 0 {
        return Some(1.0);
    }
    Some(shorter.chars().count() as f64 / longer_chars as f64)
}

/// Classify the relation between two texts without scoring it.
pub fn classify(a: &str, b: &str) -> MatchKind {
    compare(a, b).0
}

/// Score `query` against `source` with the configured bands.
pub fn text_confidence(source: &str, query: &str, config: &ConfidenceConfig) -> f64 {
    let (kind, raw) = compare(source, query);
    let score = match kind {
        MatchKind::Exact => 1.0,
        MatchKind::Empty => 0.0,
        MatchKind::Normalized => config.normalized_match_score,
        MatchKind::Substring => config.substring_floor + config.substring_span * raw,
        MatchKind::TokenOverlap => {
            (config.overlap_floor + config.overlap_span * raw).min(config.overlap_cap)
        }
    };
    clamp_unit(score)
}

/// Returns the match kind plus its raw measure: the length ratio for
/// substrings, the Jaccard similarity for token overlap, 1.0 or 0.0 otherwise.
fn compare(a: &str, b: &str) -> (MatchKind, f64) {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return (MatchKind::Exact, 1.0),
        (true, false) | (false, true) => return (MatchKind::Empty, 0.0),
        (false, false) => {}
    }
    if a == b {
        return (MatchKind::Exact, 1.0);
    }

    let na = normalize(a);
    let nb = normalize(b);
    if na == nb {
        return (MatchKind::Normalized, 1.0);
    }
    if let Some(ratio) = containment_ratio(a, b) {
        return (MatchKind::Substring, ratio);
    }
    // Whitespace-only text has nothing left to compare against.
    if na.is_empty() || nb.is_empty() {
        return (MatchKind::Empty, 0.0);
    }
    if let Some(ratio) = containment_ratio(&na, &nb) {
        return (MatchKind::Substring, ratio);
    }

    (MatchKind::TokenOverlap, jaccard(&token_set(&na), &token_set(&nb)))
}
