//! Full-catalog reordering.

use crate::catalog::Catalog;
use crate::models::ScoredRecord;
use crate::relevance::{ScoreWeights, relevance};

/// Produce the display order for the whole catalog: same cardinality as
/// the input, no omissions. An empty (or whitespace-only) query returns
/// the authored order untouched; otherwise records sort by descending
/// score, with equal scores keeping their authored order (`sort_by` is
/// stable).
#[must_use]
pub fn rank<'a>(catalog: &'a Catalog, query: &str, weights: &ScoreWeights) -> Vec<ScoredRecord<'a>> {
    let mut scored: Vec<ScoredRecord<'a>> = catalog
        .records()
        .iter()
        .map(|record| ScoredRecord {
            record,
            score: relevance(record, query, weights),
        })
        .collect();

    if query.trim().is_empty() {
        return scored;
    }

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}
