//! Property tests for the confidence calculator.

use proptest::prelude::*;

use provenant_confidence::{ConfidenceCalculator, SourceConfidence, SynthesisStrategy};

fn arb_strategy() -> impl Strategy<Value = SynthesisStrategy> {
    prop_oneof![
        Just(SynthesisStrategy::Consensus),
        Just(SynthesisStrategy::WeightedMerge),
        Just(SynthesisStrategy::ConflictResolution),
        Just(SynthesisStrategy::BuildOn),
        Just(SynthesisStrategy::Average),
    ]
}

fn arb_sources() -> impl Strategy<Value = Vec<SourceConfidence>> {
    prop::collection::vec(
        (-1.0_f64..2.0, prop::option::of(-1.0_f64..5.0)).prop_map(|(confidence, weight)| {
            SourceConfidence { confidence, weight }
        }),
        0..12,
    )
}

// =============================================================================
// Text confidence
// =============================================================================
proptest! {
    #[test]
    fn self_similarity_is_one(s in ".*") {
        let calc = ConfidenceCalculator::new();
        prop_assert_eq!(calc.calculate_text_confidence(&s, &s), 1.0);
    }

    #[test]
    fn text_confidence_in_unit_range(a in ".{0,40}", b in ".{0,40}") {
        let calc = ConfidenceCalculator::new();
        let score = calc.calculate_text_confidence(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn strict_substring_scores_in_upper_band(
        prefix in "[a-z ]{0,20}",
        needle in "[a-z]{1,20}",
        suffix in "[a-z ]{0,20}",
    ) {
        prop_assume!(!prefix.is_empty() || !suffix.is_empty());
        let haystack = format!("{prefix}{needle}{suffix}");
        let calc = ConfidenceCalculator::new();
        let score = calc.calculate_text_confidence(&haystack, &needle);
        prop_assert!(score > 0.8 && score < 1.0, "score {} for {:?} in {:?}", score, needle, haystack);
    }
}

// =============================================================================
// Synthesis confidence
// =============================================================================
proptest! {
    #[test]
    fn synthesis_confidence_in_unit_range(s in arb_sources(), strategy in arb_strategy()) {
        let calc = ConfidenceCalculator::new();
        let c = calc.calculate_synthesis_confidence(&s, strategy);
        prop_assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn conflict_never_exceeds_consensus(s in arb_sources()) {
        let calc = ConfidenceCalculator::new();
        let consensus = calc.calculate_synthesis_confidence(&s, SynthesisStrategy::Consensus);
        let conflict = calc.calculate_synthesis_confidence(&s, SynthesisStrategy::ConflictResolution);
        if s.is_empty() {
            prop_assert_eq!(conflict, consensus);
        } else {
            prop_assert!(conflict <= consensus + f64::EPSILON);
        }
    }
}

// =============================================================================
// Temporal decay
// =============================================================================
proptest! {
    #[test]
    fn decay_is_non_increasing(c in 0.0_f64..=1.0, a in 0_u64..10_000_000_000, b in 0_u64..10_000_000_000) {
        let calc = ConfidenceCalculator::new();
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        let d_early = calc.apply_temporal_decay(c, early);
        let d_late = calc.apply_temporal_decay(c, late);
        prop_assert!(d_late <= d_early);
        prop_assert!(d_early <= c);
        prop_assert!(d_late >= 0.0);
    }

    #[test]
    fn zero_elapsed_is_identity(c in 0.0_f64..=1.0) {
        let calc = ConfidenceCalculator::new();
        prop_assert_eq!(calc.apply_temporal_decay(c, 0), c);
    }
}
