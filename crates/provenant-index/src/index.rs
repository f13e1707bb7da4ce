//! SegmentIndex: exact-text map, inverted token index, and substring scan.
//!
//! Segments sharing the same normalized text are grouped, so each distinct
//! text is scored once per query no matter how many times it was indexed.
//!
//! Similarity bands:
//! - exact (normalized) match   → 1.0
//! - substring, either way      → floor + (1 − floor) × (shorter / longer), in (floor, 1.0)
//! - token overlap only         → scale × jaccard, omitted when no token is shared

use std::collections::{HashMap, HashSet};

use provenant_confidence::text::{containment_ratio, jaccard, normalize, token_set};
use provenant_confidence::MatchKind;
use provenant_core::config::IndexConfig;

use crate::segment::{Segment, SegmentMatch};

/// Segments with identical normalized text.
#[derive(Debug, Clone)]
struct SegmentGroup {
    normalized: String,
    tokens: HashSet<String>,
    positions: Vec<usize>,
}

/// Append-only searchable collection of text segments.
#[derive(Debug, Clone)]
pub struct SegmentIndex<T> {
    config: IndexConfig,
    segments: Vec<Segment<T>>,
    groups: Vec<SegmentGroup>,
    /// normalized text → group.
    group_of: HashMap<String, usize>,
    /// token → groups containing it, in first-seen order.
    token_index: HashMap<String, Vec<usize>>,
}

impl<T: Clone> SegmentIndex<T> {
    /// Create an empty index with default scoring.
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Create an empty index with custom scoring.
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            config,
            segments: Vec::new(),
            groups: Vec::new(),
            group_of: HashMap::new(),
            token_index: HashMap::new(),
        }
    }

    /// Index `text` with its associated data. Returns the segment position.
    ///
    /// Empty text is stored like any other segment but never matches a query.
    pub fn index(&mut self, text: &str, data: T) -> usize {
        let position = self.segments.len();
        let normalized = normalize(text);

        let group = match self.group_of.get(&normalized) {
            Some(&g) => g,
            None => {
                let g = self.groups.len();
                let tokens = token_set(&normalized);
                for token in &tokens {
                    self.token_index.entry(token.clone()).or_default().push(g);
                }
                self.groups.push(SegmentGroup {
                    normalized: normalized.clone(),
                    tokens,
                    positions: Vec::new(),
                });
                self.group_of.insert(normalized.clone(), g);
                g
            }
        };
        self.groups[group].positions.push(position);

        self.segments.push(Segment {
            position,
            raw: text.to_string(),
            normalized,
            data,
        });
        position
    }

    /// All matches for `query`, best first. Ties keep insertion order.
    pub fn search(&self, query: &str) -> Vec<SegmentMatch<T>> {
        self.search_top(query, 0)
    }

    /// The best `limit` matches for `query`. A `limit` of 0 returns all matches.
    pub fn search_top(&self, query: &str, limit: usize) -> Vec<SegmentMatch<T>> {
        let normalized_query = normalize(query);
        if normalized_query.is_empty() {
            return Vec::new();
        }

        let scored = self.score_groups(&normalized_query);

        // Rank positions first; only the kept hits clone their text and data.
        let mut ranked: Vec<(usize, usize)> = Vec::new();
        for (slot, &(group, _, _)) in scored.iter().enumerate() {
            ranked.extend(self.groups[group].positions.iter().map(|&p| (p, slot)));
        }
        ranked.sort_by(|&(pos_a, slot_a), &(pos_b, slot_b)| {
            scored[slot_b]
                .1
                .total_cmp(&scored[slot_a].1)
                .then(pos_a.cmp(&pos_b))
        });
        if limit > 0 {
            ranked.truncate(limit);
        }

        let matches: Vec<SegmentMatch<T>> = ranked
            .into_iter()
            .map(|(position, slot)| {
                let (_, similarity, kind) = scored[slot];
                let segment = &self.segments[position];
                SegmentMatch {
                    position,
                    segment: segment.raw.clone(),
                    data: segment.data.clone(),
                    similarity,
                    kind,
                }
            })
            .collect();

        tracing::trace!(
            query_len = normalized_query.len(),
            matches = matches.len(),
            "segment search"
        );
        matches
    }

    /// Score every group related to the query. Each group appears at most once.
    fn score_groups(&self, query: &str) -> Vec<(usize, f64, MatchKind)> {
        let mut scored = Vec::new();
        let mut seen: HashSet<usize> = HashSet::new();

        if let Some(&g) = self.group_of.get(query) {
            seen.insert(g);
            scored.push((g, 1.0, MatchKind::Exact));
        }

        let query_tokens = token_set(query);
        let mut token_candidates: Vec<usize> = Vec::new();
        let mut candidate_set: HashSet<usize> = HashSet::new();
        for token in &query_tokens {
            if let Some(groups) = self.token_index.get(token) {
                for &g in groups {
                    if candidate_set.insert(g) {
                        token_candidates.push(g);
                    }
                }
            }
        }

        // Substring relations. A full scan catches fragments that share no
        // whole token with the query (e.g. CJK text without spaces).
        let substring_pool: Box<dyn Iterator<Item = usize> + '_> = if self.config.substring_scan {
            Box::new(0..self.groups.len())
        } else {
            Box::new(token_candidates.iter().copied())
        };
        for g in substring_pool {
            if seen.contains(&g) {
                continue;
            }
            let group = &self.groups[g];
            if group.normalized.is_empty() {
                continue;
            }
            if let Some(ratio) = containment_ratio(&group.normalized, query) {
                seen.insert(g);
                scored.push((g, self.substring_similarity(ratio), MatchKind::Substring));
            }
        }

        for g in token_candidates {
            if seen.contains(&g) {
                continue;
            }
            let overlap = jaccard(&self.groups[g].tokens, &query_tokens);
            if overlap > 0.0 {
                seen.insert(g);
                scored.push((
                    g,
                    self.config.token_overlap_scale * overlap,
                    MatchKind::TokenOverlap,
                ));
            }
        }

        scored
    }

    fn substring_similarity(&self, ratio: f64) -> f64 {
        let floor = self.config.substring_floor;
        (floor + (1.0 - floor) * ratio).clamp(0.0, 1.0)
    }

    /// Segment at `position`, if any.
    pub fn get(&self, position: usize) -> Option<&Segment<T>> {
        self.segments.get(position)
    }

    /// Iterate segments in insertion order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment<T>> {
        self.segments.iter()
    }

    /// Number of indexed segments (including empty ones).
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of distinct normalized texts.
    pub fn distinct_len(&self) -> usize {
        self.groups.len()
    }

    /// Number of distinct tokens in the inverted index.
    pub fn vocabulary_len(&self) -> usize {
        self.token_index.len()
    }
}

impl<T: Clone> Default for SegmentIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}
