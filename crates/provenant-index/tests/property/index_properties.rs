//! Property tests for provenant-index.

use proptest::prelude::*;

use provenant_index::SegmentIndex;

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!]{0,40}"
}

// =============================================================================
// Every indexed non-blank text finds itself at 1.0
// =============================================================================
proptest! {
    #[test]
    fn indexed_text_finds_itself(texts in prop::collection::vec(text_strategy(), 1..20)) {
        let mut index = SegmentIndex::new();
        for (i, text) in texts.iter().enumerate() {
            index.index(text, i);
        }
        for (i, text) in texts.iter().enumerate() {
            if text.trim().is_empty() {
                continue;
            }
            let hits = index.search(text);
            prop_assert!(hits.iter().any(|h| h.data == i && h.similarity == 1.0));
        }
    }
}

// =============================================================================
// Results are in (0, 1], sorted, and never include blank segments
// =============================================================================
proptest! {
    #[test]
    fn results_are_bounded_and_sorted(
        texts in prop::collection::vec(text_strategy(), 0..30),
        query in text_strategy(),
    ) {
        let mut index = SegmentIndex::new();
        for (i, text) in texts.iter().enumerate() {
            index.index(text, i);
        }
        let hits = index.search(&query);
        if query.trim().is_empty() {
            prop_assert!(hits.is_empty());
        }
        for hit in &hits {
            prop_assert!(hit.similarity > 0.0 && hit.similarity <= 1.0);
            prop_assert!(!hit.segment.trim().is_empty());
        }
        for pair in hits.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
            if pair[0].similarity == pair[1].similarity {
                prop_assert!(pair[0].position < pair[1].position);
            }
        }
        let mut positions: Vec<usize> = hits.iter().map(|h| h.position).collect();
        positions.sort_unstable();
        positions.dedup();
        prop_assert_eq!(positions.len(), hits.len());
    }
}
