//! Structured log events for tracking operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

pub fn contribution_tracked(id: &str, source: &str, confidence: f64, text_len: usize) {
    tracing::debug!(
        event = "contribution_tracked",
        contribution_id = %id,
        source = %source,
        confidence = confidence,
        text_len = text_len,
        "contribution tracked"
    );
}

pub fn synthesis_tracked(id: &str, synthesis_type: &str, sources: usize, confidence: f64) {
    tracing::debug!(
        event = "synthesis_tracked",
        contribution_id = %id,
        synthesis_type = %synthesis_type,
        sources = sources,
        confidence = confidence,
        "synthesis tracked"
    );
}

/// A synthesis referenced ids that were never tracked.
pub fn unknown_sources(synthesis_id: &str, unknown: &[&str]) {
    tracing::debug!(
        event = "unknown_sources",
        contribution_id = %synthesis_id,
        unknown = ?unknown,
        "synthesis references untracked sources"
    );
}

pub fn interaction_tracked(id: &str, source_a: &str, source_b: &str, interaction_type: &str) {
    tracing::debug!(
        event = "interaction_tracked",
        interaction_id = %id,
        source_a = %source_a,
        source_b = %source_b,
        interaction_type = %interaction_type,
        "interaction tracked"
    );
}

pub fn attribution_completed(query_len: usize, candidates: usize, returned: usize) {
    tracing::debug!(
        event = "attribution_completed",
        query_len = query_len,
        candidates = candidates,
        returned = returned,
        "attribution completed"
    );
}

pub fn tracking_exported(contributions: usize, interactions: usize, edges: usize) {
    tracing::info!(
        event = "tracking_exported",
        contributions = contributions,
        interactions = interactions,
        edges = edges,
        "tracking exported"
    );
}

/// A graph operation failed and the caller got a default result.
pub fn degraded(operation: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(
        event = "degraded",
        operation = %operation,
        error = %error,
        "operation degraded to default result"
    );
}
