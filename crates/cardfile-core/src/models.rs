use serde::{Deserialize, Serialize};

use crate::style::Accent;

/// One card in the catalog. Created at startup, never mutated afterwards;
/// only derived order and score change per query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: String,
    pub category: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub accent: Accent,
}

impl CatalogRecord {
    /// Records without a navigation target are inert display cards.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        self.link.is_some()
    }
}

/// A record paired with its relevance score for the current query.
/// Recomputed on every query change and discarded after rendering.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredRecord<'a> {
    pub record: &'a CatalogRecord,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Filtered,
}

impl SessionState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Filtered => "filtered",
        }
    }
}

/// Result of applying one query change to a session.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome {
    pub trace_id: String,
    pub state: SessionState,
    pub match_count: usize,
    pub latency_ms: u128,
}
