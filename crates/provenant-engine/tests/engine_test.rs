//! Integration tests for the tracking engine: tracking, synthesis confidence,
//! attribution, lineage, interactions, export, and scenario fixtures.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use provenant_core::config::TrackerConfig;
use provenant_core::models::{EdgeRelation, ExportStats, TrackingExport};
use provenant_core::traits::ITextScorer;
use provenant_engine::{ContributionOptions, Direction, LineageQuery, TrackingEngine};
use test_fixtures::{load_scenario, Scenario};

fn opts(confidence: f64) -> ContributionOptions {
    ContributionOptions::new().with_confidence(confidence)
}

/// Track every contribution and synthesis in a scenario; returns key → id.
fn replay(engine: &TrackingEngine, scenario: &Scenario) -> HashMap<String, String> {
    let mut ids = HashMap::new();
    for c in &scenario.contributions {
        let options = ContributionOptions {
            confidence: c.confidence,
            ..Default::default()
        };
        let id = engine.track_contribution(&c.source, &c.text, options);
        ids.insert(c.key.clone(), id);
    }
    for s in &scenario.syntheses {
        let sources: Vec<String> = s.sources.iter().map(|k| ids[k].clone()).collect();
        let id = engine.track_synthesis(&sources, &s.text, &s.synthesis_type, Default::default());
        ids.insert(s.key.clone(), id);
    }
    for i in &scenario.interactions {
        engine.track_interaction(&i.source_a, &i.source_b, &i.interaction_type, &i.description);
    }
    ids
}

// =============================================================================
// End to end
// =============================================================================

#[test]
fn three_sources_into_one_synthesis() {
    let engine = TrackingEngine::new();
    let a = engine.track_contribution("A", "Reduce stress through structured phases", opts(0.9));
    let b = engine.track_contribution("B", "Evidence for lower cortisol is limited", opts(0.6));
    let c = engine.track_contribution("C", "Take a calm approach", opts(0.75));

    let sources = vec![a.clone(), b.clone(), c.clone()];
    let s = engine.track_synthesis(&sources, "A calm, phased plan", "consensus", Default::default());

    let synthesis = engine.get_contribution(&s).unwrap();
    assert_eq!(synthesis.source_ids(), sources.as_slice());
    assert!(synthesis.is_synthesis());
    assert!((synthesis.confidence.value() - 0.75).abs() < 1e-12);
    assert_eq!(engine.contribution_count(), 4);

    let lineage = engine.get_lineage(&s);
    assert_eq!(lineage.len(), 4);
    assert_eq!(lineage[0].id, s);
    assert_eq!(lineage[0].depth, 0);
    assert!(lineage[1..].iter().all(|e| e.depth == 1));
}

#[test]
fn wide_synthesis_dag_lineage_is_deduplicated() {
    let engine = TrackingEngine::new();
    let leaves: Vec<String> = (0..69)
        .map(|i| engine.track_contribution(&format!("agent-{i}"), &format!("idea {i}"), Default::default()))
        .collect();
    let mids: Vec<String> = (0..4)
        .map(|i| engine.track_synthesis(&leaves, &format!("merge {i}"), "consensus", Default::default()))
        .collect();
    let sink = engine.track_synthesis(&mids, "final answer", "consensus", Default::default());

    assert_eq!(engine.contribution_count(), 74);
    let lineage = engine.get_lineage(&sink);
    assert_eq!(lineage.len(), 74);

    let ids: std::collections::HashSet<&str> = lineage.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), 74);
    assert_eq!(lineage[0].id, sink);
    assert_eq!(lineage.iter().filter(|e| e.depth == 1).count(), 4);
    assert_eq!(lineage.iter().filter(|e| e.depth == 2).count(), 69);
    assert!(lineage.windows(2).all(|w| w[0].depth <= w[1].depth));
}

#[test]
fn end_to_end_scenario_fixture() {
    let scenario = load_scenario("end_to_end");
    let engine = TrackingEngine::new();
    let ids = replay(&engine, &scenario);

    assert_eq!(engine.contribution_count(), 4);
    assert_eq!(engine.interaction_count(), 2);
    assert_eq!(engine.get_lineage(&ids["S"]).len(), 4);

    for q in &scenario.queries {
        let top = engine.get_attribution(Some(&q.query));
        assert_eq!(
            top.first().map(|a| a.source.as_str()),
            q.expected_top_source.as_deref(),
            "query {:?}",
            q.query
        );
    }
}

#[test]
fn personalities_scenario_fixture() {
    let scenario = load_scenario("personalities");
    let engine = TrackingEngine::new();
    let ids = replay(&engine, &scenario);

    let lineage = engine.get_lineage(&ids["final"]);
    assert_eq!(lineage.len(), 8);
    assert_eq!(lineage.iter().map(|e| e.depth).max(), Some(2));

    for q in &scenario.queries {
        let top = engine.get_attribution(Some(&q.query));
        assert_eq!(
            top.first().map(|a| a.source.as_str()),
            q.expected_top_source.as_deref(),
            "query {:?}",
            q.query
        );
    }
}

// =============================================================================
// Contribution confidence
// =============================================================================

#[test]
fn confidence_defaults_and_clamps() {
    let engine = TrackingEngine::new();
    let plain = engine.track_contribution("a", "text", Default::default());
    let high = engine.track_contribution("a", "text", opts(7.5));
    let low = engine.track_contribution("a", "text", opts(-2.0));
    let nan = engine.track_contribution("a", "text", opts(f64::NAN));

    let confidence = |id: &str| engine.get_contribution(id).unwrap().confidence.value();
    assert_eq!(confidence(&plain), 0.5);
    assert_eq!(confidence(&high), 1.0);
    assert_eq!(confidence(&low), 0.0);
    assert_eq!(confidence(&nan), 0.0);
}

#[test]
fn metadata_is_kept_verbatim() {
    let engine = TrackingEngine::new();
    let options = ContributionOptions::new()
        .with_metadata("step", 3)
        .with_metadata("model", "reasoner-v2");
    let id = engine.track_contribution("a", "text", options);
    let stored = engine.get_contribution(&id).unwrap();
    assert_eq!(stored.metadata["step"], 3);
    assert_eq!(stored.metadata["model"], "reasoner-v2");
}

#[test]
fn empty_text_is_tracked_but_never_attributed() {
    let engine = TrackingEngine::new();
    let id = engine.track_contribution("quiet", "", Default::default());
    assert_eq!(engine.contribution_count(), 1);
    assert_eq!(engine.get_contribution(&id).unwrap().text, "");
    assert!(engine.get_attribution(Some("anything")).is_empty());
    assert_eq!(engine.get_lineage(&id).len(), 1);
}

// =============================================================================
// Synthesis confidence
// =============================================================================

#[test]
fn synthesis_strategies_aggregate_sources() {
    let engine = TrackingEngine::new();
    let ids = vec![
        engine.track_contribution("a", "one", opts(0.9)),
        engine.track_contribution("b", "two", opts(0.6)),
        engine.track_contribution("c", "three", opts(0.75)),
    ];
    let confidence = |tag: &str| {
        let id = engine.track_synthesis(&ids, "merged", tag, Default::default());
        engine.get_contribution(&id).unwrap().confidence.value()
    };

    let consensus = confidence("consensus");
    let conflict = confidence("conflict_resolution");
    assert!((consensus - 0.75).abs() < 1e-12);
    assert!((conflict - 0.75 * 0.9 * 0.85).abs() < 1e-12);
    assert!(conflict <= consensus);
    assert!((confidence("build_on") - 0.9 * 0.95).abs() < 1e-12);
    assert!((confidence("weighted_merge") - 0.75).abs() < 1e-12);
    assert!((confidence("simple_concatenation") - 0.75).abs() < 1e-12);
}

#[test]
fn weight_metadata_drives_weighted_merge() {
    let engine = TrackingEngine::new();
    let heavy = engine.track_contribution(
        "a",
        "heavy",
        ContributionOptions::new().with_confidence(0.9).with_metadata("weight", 3.0),
    );
    let light = engine.track_contribution("b", "light", opts(0.3));

    let merged = engine.track_synthesis(&[heavy, light], "merged", "weighted_merge", Default::default());
    let value = engine.get_contribution(&merged).unwrap().confidence.value();
    assert!((value - 0.75).abs() < 1e-12);
}

#[test]
fn zero_and_unknown_sources_use_the_unknown_default() {
    let engine = TrackingEngine::new();
    let empty = engine.track_synthesis(&[], "from nothing", "consensus", Default::default());
    assert_eq!(engine.get_contribution(&empty).unwrap().confidence.value(), 0.5);

    let ghosts = vec!["ghost-1".to_string(), "ghost-2".to_string()];
    let orphan = engine.track_synthesis(&ghosts, "from ghosts", "consensus", Default::default());
    assert_eq!(engine.get_contribution(&orphan).unwrap().confidence.value(), 0.5);
    // Placeholders still appear in lineage.
    assert_eq!(engine.get_lineage(&orphan).len(), 3);
}

#[test]
fn unknown_sources_are_skipped_in_the_aggregate() {
    let engine = TrackingEngine::new();
    let known = engine.track_contribution("a", "known", opts(0.8));
    let sources = vec![known, "missing".to_string()];
    let id = engine.track_synthesis(&sources, "partial", "consensus", Default::default());
    assert!((engine.get_contribution(&id).unwrap().confidence.value() - 0.8).abs() < 1e-12);
}

#[test]
fn explicit_synthesis_confidence_wins() {
    let engine = TrackingEngine::new();
    let a = engine.track_contribution("a", "one", opts(0.9));
    let id = engine.track_synthesis(&[a], "merged", "consensus", opts(1.4));
    assert_eq!(engine.get_contribution(&id).unwrap().confidence.value(), 1.0);
}

#[test]
fn repeated_source_ids_add_repeated_edges() {
    let engine = TrackingEngine::new();
    let a = engine.track_contribution("a", "one", opts(0.9));
    let s = engine.track_synthesis(&[a.clone(), a.clone()], "twice", "consensus", Default::default());

    assert_eq!(engine.stats().edges, 2);
    assert_eq!(engine.get_lineage(&s).len(), 2);
}

// =============================================================================
// Attribution
// =============================================================================

#[test]
fn missing_or_blank_queries_return_nothing() {
    let engine = TrackingEngine::new();
    engine.track_contribution("a", "Take a calm approach", Default::default());
    assert!(engine.get_attribution(None).is_empty());
    assert!(engine.get_attribution(Some("")).is_empty());
    assert!(engine.get_attribution(Some("  \n\t ")).is_empty());
}

#[test]
fn attribution_ranks_by_text_confidence() {
    let engine = TrackingEngine::new();
    let long = engine.track_contribution("long", "stay calm and carry on", Default::default());
    let exact = engine.track_contribution("exact", "calm", Default::default());
    engine.track_contribution("unrelated", "quarterly revenue", Default::default());

    let results = engine.get_attribution(Some("calm"));
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].contribution_id, exact);
    assert_eq!(results[0].confidence, 1.0);
    assert_eq!(results[1].contribution_id, long);
    assert!(results[1].confidence > 0.8 && results[1].confidence < 1.0);
    assert_eq!(results[1].segment, "stay calm and carry on");
}

#[test]
fn attribution_preserves_raw_text() {
    let engine = TrackingEngine::new();
    let raw = "你好世界 Hello World <b>&amp;</b> 🎉";
    let id = engine.track_contribution("intl", raw, Default::default());

    let results = engine.get_attribution(Some("你好"));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].contribution_id, id);
    assert_eq!(results[0].segment.as_bytes(), raw.as_bytes());
}

#[test]
fn attribution_is_truncated_to_the_configured_maximum() {
    let mut config = TrackerConfig::default();
    config.attribution.max_attributions = 3;
    let engine = TrackingEngine::with_config(config);
    for i in 0..10 {
        engine.track_contribution("bulk", &format!("shared phrase {i}"), Default::default());
    }
    assert_eq!(engine.get_attribution(Some("shared phrase")).len(), 3);
}

#[test]
fn zero_maximum_returns_every_attribution() {
    let mut config = TrackerConfig::default();
    config.attribution.max_attributions = 0;
    let engine = TrackingEngine::with_config(config);
    engine.track_contribution("empath", "Be calm", Default::default());
    for i in 0..150 {
        engine.track_contribution("bulk", &format!("shared phrase {i}"), Default::default());
    }

    let calm = engine.get_attribution(Some("Be calm"));
    assert_eq!(calm.len(), 1);
    assert_eq!(calm[0].source, "empath");
    assert_eq!(engine.get_attribution(Some("shared phrase")).len(), 150);
}

#[test]
fn bounded_candidate_pool_keeps_the_best_match() {
    let mut config = TrackerConfig::default();
    config.attribution.max_attributions = 2;
    config.attribution.candidate_pool_factor = 1;
    let engine = TrackingEngine::with_config(config);
    for i in 0..20 {
        engine.track_contribution("bulk", &format!("shared phrase number {i}"), Default::default());
    }
    let exact = engine.track_contribution("exact", "shared phrase", Default::default());

    let results = engine.get_attribution(Some("shared phrase"));
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].contribution_id, exact);
    assert_eq!(results[0].confidence, 1.0);
}

struct LongestTextScorer;

impl ITextScorer for LongestTextScorer {
    fn score(&self, source_text: &str, _query_text: &str) -> f64 {
        source_text.len() as f64 / 100.0
    }

    fn name(&self) -> &str {
        "longest"
    }
}

#[test]
fn custom_scorer_changes_ranking() {
    let engine = TrackingEngine::new().with_scorer(Arc::new(LongestTextScorer));
    engine.track_contribution("exact", "calm", Default::default());
    engine.track_contribution("long", "stay calm and carry on", Default::default());

    let results = engine.get_attribution(Some("calm"));
    assert_eq!(results[0].source, "long");
    assert!((results[0].confidence - 0.22).abs() < 1e-12);
}

// =============================================================================
// Lineage
// =============================================================================

#[test]
fn unknown_lineage_is_empty() {
    let engine = TrackingEngine::new();
    assert!(engine.get_lineage("never-tracked").is_empty());
}

#[test]
fn lineage_queries_respect_depth_and_direction() {
    let engine = TrackingEngine::new();
    let root = engine.track_contribution("a", "root", Default::default());
    let mid = engine.track_synthesis(&[root.clone()], "mid", "build_on", Default::default());
    let top = engine.track_synthesis(&[mid.clone()], "top", "build_on", Default::default());

    assert_eq!(engine.get_lineage(&top).len(), 3);

    let shallow = LineageQuery::backward().with_max_depth(1);
    let ids: Vec<String> = engine
        .get_lineage_with(&top, &shallow)
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![top.clone(), mid.clone()]);

    let forward = LineageQuery {
        max_depth: None,
        direction: Direction::Forward,
    };
    let descendants = engine.get_lineage_with(&root, &forward);
    assert_eq!(descendants.len(), 3);
    assert_eq!(descendants[2].id, top);
}

#[test]
fn configured_default_depth_limits_get_lineage() {
    let mut config = TrackerConfig::default();
    config.lineage.default_max_depth = Some(1);
    let engine = TrackingEngine::with_config(config);

    let root = engine.track_contribution("a", "root", Default::default());
    let mid = engine.track_synthesis(&[root], "mid", "build_on", Default::default());
    let top = engine.track_synthesis(&[mid], "top", "build_on", Default::default());
    assert_eq!(engine.get_lineage(&top).len(), 2);
}

#[test]
fn manual_edges_can_close_cycles() {
    let engine = TrackingEngine::new();
    let a = engine.track_contribution("a", "one", Default::default());
    let b = engine.track_synthesis(&[a.clone()], "two", "build_on", Default::default());
    let c = engine.track_synthesis(&[b.clone()], "three", "build_on", Default::default());
    assert!(engine.detect_cycles().is_empty());

    engine.add_lineage_edge(&c, &a);
    let cycles = engine.detect_cycles();
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].len(), 3);

    // Still terminates, each node once.
    assert_eq!(engine.get_lineage(&a).len(), 3);

    let export = engine.export_tracking();
    assert_eq!(export.lineage.last().map(|e| e.relation), Some(EdgeRelation::Linked));
}

// =============================================================================
// Interactions
// =============================================================================

#[test]
fn interactions_are_logged_without_touching_lineage() {
    let engine = TrackingEngine::new();
    let a = engine.track_contribution("analyst", "one", Default::default());

    let first = engine.track_interaction("skeptic", "analyst", "challenges", "asks for data");
    let second = engine.track_interaction("analyst", "skeptic", "agrees", "");
    engine.track_interaction("empath", "analyst", "builds_on", "adds pacing");
    assert_ne!(first, second);

    assert_eq!(engine.interaction_count(), 3);
    assert_eq!(engine.interactions_between("analyst", "skeptic").len(), 2);
    assert_eq!(engine.interactions_of_type("builds_on").len(), 1);
    assert!(engine.interactions_of_type("clarifies").is_empty());

    assert_eq!(engine.get_lineage(&a).len(), 1);
    assert_eq!(engine.stats().edges, 0);
}

#[test]
fn interaction_metadata_is_kept() {
    let engine = TrackingEngine::new();
    let mut metadata = provenant_core::models::Metadata::new();
    metadata.insert("round".to_string(), serde_json::json!(2));
    engine.track_interaction_with_metadata("a", "b", "clarifies", "", metadata);

    let logged = engine.interactions_of_type("clarifies");
    assert_eq!(logged[0].metadata["round"], 2);
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn export_is_insertion_ordered_and_complete() {
    let engine = TrackingEngine::new();
    let a = engine.track_contribution("a", "one", Default::default());
    let b = engine.track_contribution("b", "two", Default::default());
    let s = engine.track_synthesis(&[a.clone(), b.clone()], "both", "consensus", Default::default());
    engine.track_interaction("a", "b", "agrees", "");

    let export = engine.export_tracking();
    let ids: Vec<&str> = export.contributions.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec![a.as_str(), b.as_str(), s.as_str()]);
    assert_eq!(export.interactions.len(), 1);
    assert_eq!(export.lineage.len(), 2);
    assert_eq!(export.lineage[0].from_id, a);
    assert_eq!(export.lineage[1].from_id, b);
    assert!(export.lineage.iter().all(|e| e.to_id == s));

    assert_eq!(export.stats.contributions, 3);
    assert_eq!(export.stats.syntheses, 1);
    assert_eq!(export.stats.interactions, 1);
    assert_eq!(export.stats.edges, 2);
    assert_eq!(engine.stats(), export.stats);

    let again = engine.export_tracking();
    assert_eq!(again.contributions, export.contributions);
    assert_eq!(again.interactions, export.interactions);
    assert_eq!(again.lineage, export.lineage);
}

#[test]
fn export_json_parses_back() {
    let engine = TrackingEngine::new();
    let a = engine.track_contribution("a", "one", opts(0.9));
    engine.track_synthesis(&[a], "merged", "consensus", Default::default());
    engine.track_interaction("a", "b", "agrees", "same view");

    let json = engine.export_json().unwrap();
    assert!(json.contains("\"contributed_to\""));
    assert!(json.contains("\"type\":\"agrees\""));

    let parsed: TrackingExport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.contributions.len(), 2);
    assert_eq!(parsed.contributions[1].source_ids().len(), 1);
    assert_eq!(parsed.stats.edges, 1);
}

#[test]
fn empty_engine_exports_cleanly() {
    let engine = TrackingEngine::default();
    let export = engine.export_tracking();
    assert!(export.contributions.is_empty());
    assert!(export.interactions.is_empty());
    assert!(export.lineage.is_empty());
    assert_eq!(export.stats, ExportStats::default());
}

// =============================================================================
// Decay
// =============================================================================

#[test]
fn decayed_confidence_follows_age() {
    let engine = TrackingEngine::new();
    let id = engine.track_contribution("a", "aging", opts(0.9));
    let created = engine.get_contribution(&id).unwrap().created_at;

    assert_eq!(engine.decayed_confidence(&id, created), Some(0.9));
    assert_eq!(engine.decayed_confidence(&id, created - Duration::hours(1)), Some(0.9));

    let day_later = engine.decayed_confidence(&id, created + Duration::hours(24)).unwrap();
    assert!(day_later < 0.9 && day_later > 0.85);
    let week_later = engine.decayed_confidence(&id, created + Duration::days(7)).unwrap();
    assert!(week_later < day_later);

    assert_eq!(engine.decayed_confidence("missing", created), None);
}
