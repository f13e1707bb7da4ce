//! Property tests for provenant-engine: id uniqueness, confidence bounds, attribution ordering.

use std::collections::HashSet;

use proptest::prelude::*;

use provenant_engine::{ContributionOptions, TrackingEngine};

fn any_confidence() -> impl Strategy<Value = f64> {
    prop_oneof![
        -5.0_f64..5.0,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

// =============================================================================
// N tracks → N distinct ids, store size N
// =============================================================================
proptest! {
    #[test]
    fn ids_are_unique(texts in prop::collection::vec(".{0,30}", 1..60)) {
        let engine = TrackingEngine::new();
        let ids: HashSet<String> = texts
            .iter()
            .map(|t| engine.track_contribution("p", t, Default::default()))
            .collect();
        prop_assert_eq!(ids.len(), texts.len());
        prop_assert_eq!(engine.contribution_count(), texts.len());
    }
}

// =============================================================================
// Stored confidence always in [0, 1]
// =============================================================================
proptest! {
    #[test]
    fn confidence_is_always_clamped(
        inputs in prop::collection::vec(any_confidence(), 0..8),
        tag in prop_oneof![
            Just("consensus"),
            Just("conflict_resolution"),
            Just("weighted_merge"),
            Just("build_on"),
            Just("whatever"),
        ],
    ) {
        let engine = TrackingEngine::new();
        let ids: Vec<String> = inputs
            .iter()
            .map(|&c| engine.track_contribution("p", "text", ContributionOptions::new().with_confidence(c)))
            .collect();
        let synthesis = engine.track_synthesis(&ids, "merged", tag, Default::default());

        for id in ids.iter().chain(std::iter::once(&synthesis)) {
            let value = engine.get_contribution(id).unwrap().confidence.value();
            prop_assert!((0.0..=1.0).contains(&value), "{} out of range", value);
        }
    }
}

// =============================================================================
// Attribution: bounded, sorted, never from blank queries
// =============================================================================
proptest! {
    #[test]
    fn attribution_is_sorted_and_bounded(
        texts in prop::collection::vec("[a-z ]{0,24}", 0..25),
        query in "[a-z ]{0,12}",
    ) {
        let engine = TrackingEngine::new();
        for text in &texts {
            engine.track_contribution("p", text, Default::default());
        }
        let results = engine.get_attribution(Some(&query));
        if query.trim().is_empty() {
            prop_assert!(results.is_empty());
        }
        prop_assert!(results.len() <= engine.config().attribution.max_attributions);
        for r in &results {
            prop_assert!((0.0..=1.0).contains(&r.confidence));
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
        }
    }
}
