//! The query session: the engine-facing object the UI layer talks to.
//!
//! Two states only. `Idle` (query trims to empty): authored order,
//! nothing highlighted, match count 0. `Filtered`: ranked order, partial
//! highlighting. Every query change supersedes the previous one by
//! recomputing from scratch; nothing is cached across renders.

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::models::{CatalogRecord, QueryOutcome, ScoredRecord, SessionState};
use crate::query_log::QueryLogEntry;
use crate::rank::rank;
use crate::relevance::relevance;

/// Rotating search-box suggestions, indexed by a caller-supplied tick so
/// the engine stays clock-free.
pub const PLACEHOLDER_HINTS: [&str; 5] = [
    "try: agents",
    "try: founder",
    "try: open source",
    "try: hackathon",
    "try: systems",
];

const QUERY_LOG_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
pub struct CatalogSession {
    catalog: Catalog,
    config: SearchConfig,
    query: String,
    log: Vec<QueryLogEntry>,
}

impl CatalogSession {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(catalog: Catalog, config: SearchConfig) -> Self {
        Self {
            catalog,
            config,
            query: String::new(),
            log: Vec::new(),
        }
    }

    /// Replace the query wholesale and re-rank. Returns the outcome of
    /// this change and records it in the session log.
    pub fn on_query_change(&mut self, new_query: &str) -> QueryOutcome {
        let started = Instant::now();
        self.query = new_query.to_string();
        let match_count = self.match_count();

        let outcome = QueryOutcome {
            trace_id: Uuid::new_v4().to_string(),
            state: self.state(),
            match_count,
            latency_ms: started.elapsed().as_millis(),
        };

        if self.log.len() == QUERY_LOG_CAPACITY {
            self.log.remove(0);
        }
        self.log.push(QueryLogEntry {
            trace_id: outcome.trace_id.clone(),
            query: self.query.clone(),
            state: outcome.state.as_str().to_string(),
            match_count,
            latency_ms: outcome.latency_ms,
            created_at: Utc::now().to_rfc3339(),
        });

        outcome
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.query.trim().is_empty() {
            SessionState::Idle
        } else {
            SessionState::Filtered
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn query_log(&self) -> &[QueryLogEntry] {
        &self.log
    }

    /// Current display order: authored order in `Idle`, ranked order in
    /// `Filtered`. Always the full catalog.
    #[must_use]
    pub fn ordered_records(&self) -> Vec<ScoredRecord<'_>> {
        rank(&self.catalog, &self.query, &self.config.weights)
    }

    /// Records scoring above zero for the active query; 0 in `Idle`
    /// because no filtering is active.
    #[must_use]
    pub fn match_count(&self) -> usize {
        if self.state() == SessionState::Idle {
            return 0;
        }
        self.ordered_records()
            .iter()
            .filter(|scored| scored.score > 0)
            .count()
    }

    /// Drives de-emphasis, never removal: non-highlighted records stay
    /// visible, only their order and rendering change.
    #[must_use]
    pub fn is_highlighted(&self, record: &CatalogRecord) -> bool {
        self.state() == SessionState::Filtered
            && relevance(record, &self.query, &self.config.weights) > 0
    }

    /// Per-tag highlight: the lowercased tag contains the whole
    /// lowercased query.
    #[must_use]
    pub fn is_tag_match(&self, tag: &str) -> bool {
        self.state() == SessionState::Filtered
            && tag
                .to_lowercase()
                .contains(&self.query.trim().to_lowercase())
    }

    /// Width percent of the relevance bar under a matched card.
    #[must_use]
    pub fn relevance_meter(score: u32) -> u8 {
        (score / 2).min(100) as u8
    }

    #[must_use]
    pub fn placeholder_hint(tick: usize) -> &'static str {
        PLACEHOLDER_HINTS[tick % PLACEHOLDER_HINTS.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> CatalogSession {
        CatalogSession::new(Catalog::builtin())
    }

    #[test]
    fn fresh_session_is_idle_with_authored_order() {
        let session = session();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.match_count(), 0);
        let ordered = session.ordered_records();
        assert_eq!(ordered[0].record.id, "identity");
        assert_eq!(ordered.len(), session.catalog().len());
    }

    #[test]
    fn non_whitespace_input_transitions_to_filtered() {
        let mut session = session();
        let outcome = session.on_query_change("agents");
        assert_eq!(outcome.state, SessionState::Filtered);
        // thesis, heycontext, vector-native on tags; hackathons on content.
        assert_eq!(outcome.match_count, 4);
        assert_eq!(session.match_count(), 4);
    }

    #[test]
    fn whitespace_input_stays_idle() {
        let mut session = session();
        let outcome = session.on_query_change("   ");
        assert_eq!(outcome.state, SessionState::Idle);
        assert_eq!(outcome.match_count, 0);
    }

    #[test]
    fn clearing_the_query_restores_authored_order() {
        let mut session = session();
        session.on_query_change("agents");
        assert_ne!(session.ordered_records()[0].record.id, "identity");

        session.on_query_change("");
        assert_eq!(session.state(), SessionState::Idle);
        let ordered = session.ordered_records();
        let ids: Vec<_> = ordered.iter().map(|s| s.record.id.as_str()).collect();
        let authored: Vec<_> = session
            .catalog()
            .records()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, authored);
    }

    #[test]
    fn unmatched_query_keeps_all_records_visible() {
        let mut session = session();
        session.on_query_change("xyzxyz");
        assert_eq!(session.match_count(), 0);
        let ordered = session.ordered_records();
        assert_eq!(ordered.len(), session.catalog().len());
        assert_eq!(ordered[0].record.id, "identity");
    }

    #[test]
    fn highlighting_follows_score_and_state() {
        let mut session = session();
        session.on_query_change("agents");
        let thesis = session.catalog().get("thesis").expect("thesis").clone();
        let convergence = session
            .catalog()
            .get("convergence")
            .expect("convergence")
            .clone();
        assert!(session.is_highlighted(&thesis));
        assert!(!session.is_highlighted(&convergence));

        session.on_query_change("");
        assert!(!session.is_highlighted(&thesis));
    }

    #[test]
    fn tag_match_requires_the_whole_query_as_substring() {
        let mut session = session();
        session.on_query_change("agent");
        assert!(session.is_tag_match("agents"));
        assert!(session.is_tag_match("multi-agent"));
        assert!(!session.is_tag_match("hackathon"));
    }

    #[test]
    fn relevance_meter_halves_the_score_and_caps_at_100() {
        assert_eq!(CatalogSession::relevance_meter(0), 0);
        assert_eq!(CatalogSession::relevance_meter(145), 72);
        assert_eq!(CatalogSession::relevance_meter(400), 100);
    }

    #[test]
    fn placeholder_hints_rotate_by_tick() {
        assert_eq!(CatalogSession::placeholder_hint(0), "try: agents");
        assert_eq!(
            CatalogSession::placeholder_hint(PLACEHOLDER_HINTS.len()),
            "try: agents"
        );
        assert_ne!(
            CatalogSession::placeholder_hint(1),
            CatalogSession::placeholder_hint(2)
        );
    }

    #[test]
    fn query_log_records_each_change_with_state_and_count() {
        let mut session = session();
        session.on_query_change("agents");
        session.on_query_change("");
        let log = session.query_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].query, "agents");
        assert_eq!(log[0].state, "filtered");
        assert_eq!(log[0].match_count, 4);
        assert_eq!(log[1].state, "idle");
        assert_eq!(log[1].match_count, 0);
        assert_ne!(log[0].trace_id, log[1].trace_id);
    }
}
