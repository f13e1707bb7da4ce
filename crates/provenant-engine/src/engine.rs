//! TrackingEngine: owns the store, index, graph, and interaction log, and
//! coordinates confidence scoring across them.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use provenant_confidence::{ConfidenceCalculator, SourceConfidence, SynthesisStrategy};
use provenant_core::constants::{SYNTHESIS_SOURCE, WEIGHT_METADATA_KEY};
use provenant_core::errors::TrackerResult;
use provenant_core::models::{
    AncestryEntry, Attribution, Contribution, EdgeRelation, ExportStats, Interaction, Metadata,
    NodeKind, SynthesisInfo, TrackingExport,
};
use provenant_core::traits::ITextScorer;
use provenant_core::{Confidence, TrackerConfig};
use provenant_index::SegmentIndex;
use provenant_lineage::{GraphManager, LineageQuery};

use crate::interactions::InteractionLog;
use crate::options::ContributionOptions;
use crate::store::ContributionStore;
use crate::tracing_setup::events;

/// The main attribution and lineage tracking engine.
pub struct TrackingEngine {
    config: TrackerConfig,
    calculator: ConfidenceCalculator,
    /// Re-scores attribution matches; the heuristic calculator unless replaced.
    scorer: Arc<dyn ITextScorer>,
    store: ContributionStore,
    /// Segment data is the contribution id.
    index: RwLock<SegmentIndex<String>>,
    graph: GraphManager,
    interactions: InteractionLog,
}

impl TrackingEngine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrackerConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(config: TrackerConfig) -> Self {
        let calculator = ConfidenceCalculator::with_config(config.confidence.clone());
        Self {
            scorer: Arc::new(calculator.clone()),
            calculator,
            store: ContributionStore::new(),
            index: RwLock::new(SegmentIndex::with_config(config.index.clone())),
            graph: GraphManager::new(),
            interactions: InteractionLog::new(),
            config,
        }
    }

    /// Replace the text scorer used to rank attributions.
    pub fn with_scorer(mut self, scorer: Arc<dyn ITextScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn calculator(&self) -> &ConfidenceCalculator {
        &self.calculator
    }

    /// Get a reference to the graph manager.
    pub fn graph(&self) -> &GraphManager {
        &self.graph
    }

    // --- Tracking ---

    /// Record text from `source`. Returns the new contribution id.
    pub fn track_contribution(
        &self,
        source: &str,
        text: &str,
        options: ContributionOptions,
    ) -> String {
        let confidence = options
            .confidence
            .unwrap_or(self.config.confidence.default_confidence);
        let contribution = Contribution {
            id: new_id(),
            source: source.to_string(),
            text: text.to_string(),
            confidence: Confidence::new(confidence),
            metadata: options.metadata,
            created_at: Utc::now(),
            synthesis: None,
        };
        let stored = self.store.insert(contribution);

        if let Err(e) = self.graph.add_node(&stored.id, NodeKind::Contribution, source) {
            events::degraded("track_contribution", &e);
        }
        self.write_index().index(text, stored.id.clone());

        events::contribution_tracked(&stored.id, source, stored.confidence.value(), text.len());
        stored.id.clone()
    }

    /// Record text derived from `source_ids`. Returns the new synthesis id.
    ///
    /// Unknown source ids still get an edge (to a placeholder node) but are
    /// left out of the confidence aggregate.
    pub fn track_synthesis(
        &self,
        source_ids: &[String],
        text: &str,
        synthesis_type: &str,
        options: ContributionOptions,
    ) -> String {
        let id = new_id();
        let confidence = match options.confidence {
            Some(explicit) => explicit,
            None => self.aggregate_sources(&id, source_ids, synthesis_type),
        };

        let contribution = Contribution {
            id,
            source: SYNTHESIS_SOURCE.to_string(),
            text: text.to_string(),
            confidence: Confidence::new(confidence),
            metadata: options.metadata,
            created_at: Utc::now(),
            synthesis: Some(SynthesisInfo {
                source_ids: source_ids.to_vec(),
                synthesis_type: synthesis_type.to_string(),
            }),
        };
        let stored = self.store.insert(contribution);

        if let Err(e) = self.graph.add_derived_node(
            &stored.id,
            NodeKind::Synthesis,
            SYNTHESIS_SOURCE,
            source_ids,
            EdgeRelation::ContributedTo,
        ) {
            events::degraded("track_synthesis", &e);
        }
        self.write_index().index(text, stored.id.clone());

        events::synthesis_tracked(
            &stored.id,
            synthesis_type,
            source_ids.len(),
            stored.confidence.value(),
        );
        stored.id.clone()
    }

    fn aggregate_sources(
        &self,
        synthesis_id: &str,
        source_ids: &[String],
        synthesis_type: &str,
    ) -> f64 {
        let mut sources = Vec::with_capacity(source_ids.len());
        let mut unknown = Vec::new();
        for source_id in source_ids {
            match self.store.get(source_id) {
                Some(source) => {
                    let weight = source
                        .metadata
                        .get(WEIGHT_METADATA_KEY)
                        .and_then(serde_json::Value::as_f64);
                    sources.push(SourceConfidence {
                        confidence: source.confidence.value(),
                        weight,
                    });
                }
                None => unknown.push(source_id.as_str()),
            }
        }
        if !unknown.is_empty() {
            events::unknown_sources(synthesis_id, &unknown);
        }

        let strategy = SynthesisStrategy::from_tag(synthesis_type);
        self.calculator.calculate_synthesis_confidence(&sources, strategy)
    }

    /// Record an interaction between two sources. Returns the interaction id.
    pub fn track_interaction(
        &self,
        source_a: &str,
        source_b: &str,
        interaction_type: &str,
        description: &str,
    ) -> String {
        self.track_interaction_with_metadata(
            source_a,
            source_b,
            interaction_type,
            description,
            Metadata::new(),
        )
    }

    /// Record an interaction carrying extra metadata.
    pub fn track_interaction_with_metadata(
        &self,
        source_a: &str,
        source_b: &str,
        interaction_type: &str,
        description: &str,
        metadata: Metadata,
    ) -> String {
        let interaction = Interaction {
            id: new_id(),
            source_a: source_a.to_string(),
            source_b: source_b.to_string(),
            interaction_type: interaction_type.to_string(),
            description: description.to_string(),
            timestamp: Utc::now(),
            metadata,
        };
        let id = interaction.id.clone();
        self.interactions.append(interaction);
        events::interaction_tracked(&id, source_a, source_b, interaction_type);
        id
    }

    // --- Queries ---

    /// Contributions whose text relates to `query`, best first.
    ///
    /// The best index matches (a pool sized by `attribution.candidate_pool`)
    /// are re-scored with the text scorer against the full contribution text.
    /// Ties fall back to index similarity, then insertion order. `None`, empty,
    /// and whitespace-only queries return nothing.
    pub fn get_attribution(&self, query: Option<&str>) -> Vec<Attribution> {
        let Some(query) = query.filter(|q| !q.trim().is_empty()) else {
            return Vec::new();
        };
        let _span = tracing::info_span!(
            "get_attribution",
            query_len = query.len(),
            scorer = self.scorer.name()
        )
        .entered();

        let attribution = &self.config.attribution;
        let matches = self
            .read_index()
            .search_top(query, attribution.candidate_pool());
        let candidates = matches.len();

        let mut ranked: Vec<(usize, Attribution)> = matches
            .into_iter()
            .filter_map(|m| {
                let contribution = self.store.get(&m.data)?;
                let confidence = Confidence::new(self.scorer.score(&contribution.text, query));
                Some((
                    m.position,
                    Attribution {
                        contribution_id: contribution.id.clone(),
                        source: contribution.source.clone(),
                        confidence: confidence.value(),
                        segment: m.segment,
                        similarity: m.similarity,
                    },
                ))
            })
            .collect();

        ranked.sort_by(|(pos_a, a), (pos_b, b)| {
            b.confidence
                .total_cmp(&a.confidence)
                .then(b.similarity.total_cmp(&a.similarity))
                .then(pos_a.cmp(pos_b))
        });
        if attribution.max_attributions > 0 {
            ranked.truncate(attribution.max_attributions);
        }

        let attributions: Vec<Attribution> = ranked.into_iter().map(|(_, a)| a).collect();
        events::attribution_completed(query.len(), candidates, attributions.len());
        attributions
    }

    /// Ancestry of `id`, ascending by depth, starting with `id` itself at depth 0.
    ///
    /// Uses the configured default depth limit. Unknown id → empty.
    pub fn get_lineage(&self, id: &str) -> Vec<AncestryEntry> {
        let query = LineageQuery {
            max_depth: self.config.lineage.default_max_depth,
            ..LineageQuery::backward()
        };
        self.get_lineage_with(id, &query)
    }

    /// Lineage walk with an explicit depth limit and direction.
    pub fn get_lineage_with(&self, id: &str, query: &LineageQuery) -> Vec<AncestryEntry> {
        self.graph.trace(id, query).unwrap_or_else(|e| {
            events::degraded("get_lineage", &e);
            Vec::new()
        })
    }

    /// Every cycle in the derivation graph, one per back edge.
    pub fn detect_cycles(&self) -> Vec<Vec<String>> {
        self.graph.detect_cycles().unwrap_or_else(|e| {
            events::degraded("detect_cycles", &e);
            Vec::new()
        })
    }

    /// Link two ids directly. Either may be untracked; cycles are allowed.
    pub fn add_lineage_edge(&self, from_id: &str, to_id: &str) {
        if let Err(e) = self.graph.add_edge(from_id, to_id, EdgeRelation::Linked) {
            events::degraded("add_lineage_edge", &e);
        }
    }

    pub fn get_contribution(&self, id: &str) -> Option<Contribution> {
        self.store.get(id).map(|c| c.as_ref().clone())
    }

    /// Confidence of `id` after temporal decay from its creation until `now`.
    pub fn decayed_confidence(&self, id: &str, now: DateTime<Utc>) -> Option<f64> {
        let contribution = self.store.get(id)?;
        let elapsed = (now - contribution.created_at).num_milliseconds();
        // A `now` earlier than creation counts as no time elapsed.
        let elapsed_ms = u64::try_from(elapsed).unwrap_or(0);
        Some(
            self.calculator
                .apply_temporal_decay(contribution.confidence.value(), elapsed_ms),
        )
    }

    pub fn interactions_between(&self, source_a: &str, source_b: &str) -> Vec<Interaction> {
        self.interactions.between(source_a, source_b)
    }

    pub fn interactions_of_type(&self, interaction_type: &str) -> Vec<Interaction> {
        self.interactions.of_type(interaction_type)
    }

    pub fn contribution_count(&self) -> usize {
        self.store.len()
    }

    pub fn interaction_count(&self) -> usize {
        self.interactions.len()
    }

    pub fn stats(&self) -> ExportStats {
        ExportStats {
            contributions: self.store.len(),
            syntheses: self.store.synthesis_count(),
            interactions: self.interactions.len(),
            edges: self.graph.edge_count().unwrap_or_else(|e| {
                events::degraded("stats", &e);
                0
            }),
        }
    }

    // --- Export ---

    /// Insertion-ordered snapshot of contributions, interactions, and lineage edges.
    pub fn export_tracking(&self) -> TrackingExport {
        let _span = tracing::info_span!("export_tracking").entered();

        let contributions = self.store.snapshot();
        let interactions = self.interactions.snapshot();
        let lineage = self.graph.edges().unwrap_or_else(|e| {
            events::degraded("export_tracking", &e);
            Vec::new()
        });

        let syntheses = contributions.iter().filter(|c| c.is_synthesis()).count();
        let stats = ExportStats {
            contributions: contributions.len(),
            syntheses,
            interactions: interactions.len(),
            edges: lineage.len(),
        };
        events::tracking_exported(stats.contributions, stats.interactions, stats.edges);

        TrackingExport {
            exported_at: Utc::now(),
            contributions,
            interactions,
            lineage,
            stats,
        }
    }

    /// The export as a JSON string.
    pub fn export_json(&self) -> TrackerResult<String> {
        Ok(serde_json::to_string(&self.export_tracking())?)
    }

    // --- Locks ---

    fn read_index(&self) -> RwLockReadGuard<'_, SegmentIndex<String>> {
        self.index.read().unwrap_or_else(|poisoned| {
            tracing::warn!(component = "segment_index", "recovering poisoned lock");
            poisoned.into_inner()
        })
    }

    fn write_index(&self) -> RwLockWriteGuard<'_, SegmentIndex<String>> {
        self.index.write().unwrap_or_else(|poisoned| {
            tracing::warn!(component = "segment_index", "recovering poisoned lock");
            poisoned.into_inner()
        })
    }
}

impl Default for TrackingEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}
