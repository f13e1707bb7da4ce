//! Test fixtures for the Provenant workspace: JSON scenario loading plus
//! deterministic graph shapes and text corpora shared by tests and benches.
//!
//! Builders return plain data (ids and edge lists) so every crate can use
//! them without this crate depending back on the workspace.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a tracking scenario from `scenarios/<name>.json`.
pub fn load_scenario(name: &str) -> Scenario {
    load_fixture(&format!("scenarios/{name}.json"))
}

// ---------------------------------------------------------------------------
// Scenario model
// ---------------------------------------------------------------------------

/// A scripted tracking session: contributions, syntheses over them, interactions,
/// and attribution queries with their expected best source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub contributions: Vec<ScenarioContribution>,
    #[serde(default)]
    pub syntheses: Vec<ScenarioSynthesis>,
    #[serde(default)]
    pub interactions: Vec<ScenarioInteraction>,
    #[serde(default)]
    pub queries: Vec<ScenarioQuery>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioContribution {
    /// Scenario-local handle used by syntheses to refer to this contribution.
    pub key: String,
    pub source: String,
    pub text: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSynthesis {
    pub key: String,
    /// Keys of earlier contributions or syntheses.
    pub sources: Vec<String>,
    pub text: String,
    pub synthesis_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioInteraction {
    pub source_a: String,
    pub source_b: String,
    pub interaction_type: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioQuery {
    pub query: String,
    #[serde(default)]
    pub expected_top_source: Option<String>,
}

// ---------------------------------------------------------------------------
// Graph shapes
// ---------------------------------------------------------------------------

/// Directed edge as (from, to) ids.
pub type Edge = (String, String);

/// Linear chain `n0 → n1 → … → n{depth}`: `depth + 1` nodes, `depth` edges.
pub fn chain_edges(depth: usize) -> Vec<Edge> {
    (0..depth)
        .map(|i| (format!("n{i}"), format!("n{}", i + 1)))
        .collect()
}

/// Id of the last node of [`chain_edges`].
pub fn chain_tip(depth: usize) -> String {
    format!("n{depth}")
}

/// Layered DAG: every one of `leaves` feeds every one of `mids`, every mid feeds `"sink"`.
///
/// The ancestry of `"sink"` holds exactly `leaves + mids + 1` distinct nodes,
/// though most leaves are reachable by `mids` different paths.
pub fn wide_dag_edges(leaves: usize, mids: usize) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(leaves * mids + mids);
    for m in 0..mids {
        for l in 0..leaves {
            edges.push((format!("leaf{l}"), format!("mid{m}")));
        }
        edges.push((format!("mid{m}"), "sink".to_string()));
    }
    edges
}

/// Ring `{prefix}0 → {prefix}1 → … → {prefix}0` of `len` nodes.
pub fn cycle_edges(prefix: &str, len: usize) -> Vec<Edge> {
    (0..len)
        .map(|i| (format!("{prefix}{i}"), format!("{prefix}{}", (i + 1) % len)))
        .collect()
}

// ---------------------------------------------------------------------------
// Text corpora
// ---------------------------------------------------------------------------

const VOCABULARY: &[&str] = &[
    "analysis", "approach", "budget", "calm", "context", "cortisol", "decision", "evidence",
    "forecast", "growth", "hypothesis", "insight", "measure", "outcome", "phase", "plan",
    "reduce", "review", "risk", "signal", "strategy", "stress", "structure", "timeline",
];

/// Named reasoning personalities with a characteristic statement each.
pub fn personality_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("analyst", "Reduce stress through structured phases and measurable checkpoints"),
        ("skeptic", "The evidence for lower cortisol levels is weak without a control group"),
        ("strategist", "Align the budget timeline with the growth forecast before committing"),
        ("empath", "Take a calm approach and check in with the team every week"),
        ("pragmatist", "Ship the smallest plan that reduces risk, then review the outcome"),
    ]
}

/// Deterministic pseudo-sentence number `i`, roughly 60 to 80 characters.
pub fn corpus_text(i: usize) -> String {
    let words: Vec<&str> = (0..8)
        .map(|j| VOCABULARY[(i.wrapping_mul(7) + j * 5 + i / VOCABULARY.len()) % VOCABULARY.len()])
        .collect();
    format!("{} item {i}", words.join(" "))
}
