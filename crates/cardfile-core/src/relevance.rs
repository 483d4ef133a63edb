//! Weighted substring relevance.
//!
//! Scoring is case-insensitive exact-substring matching only: lowercasing
//! is the sole normalization. No stemming, no fuzzy matching, no Unicode
//! folding. Contributions accumulate across every rule that fires.

use crate::models::CatalogRecord;

/// Tuning constants for the scorer. The defaults reproduce the authored
/// weights; all of them can be overridden through [`crate::SearchConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Whole query contained in the title.
    pub title_phrase: u32,
    /// One query word contained in the title.
    pub title_word: u32,
    /// Whole query contained in the category label.
    pub category_phrase: u32,
    /// One query word contained in the category label.
    pub category_word: u32,
    /// One query word contained in the description.
    pub content_word: u32,
    /// A tag exactly equal to the whole query.
    pub tag_exact_phrase: u32,
    /// A tag containing one query word.
    pub tag_word_contains: u32,
    /// A tag exactly equal to one query word.
    pub tag_word_exact: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title_phrase: 100,
            title_word: 30,
            category_phrase: 50,
            category_word: 20,
            content_word: 15,
            tag_exact_phrase: 80,
            tag_word_contains: 25,
            tag_word_exact: 40,
        }
    }
}

/// Lowercased, whitespace-split, deduplicated query words in first-seen
/// order.
#[must_use]
pub fn query_words(query: &str) -> Vec<String> {
    let mut words = Vec::new();
    for word in query.to_lowercase().split_whitespace() {
        if !words.iter().any(|seen| seen == word) {
            words.push(word.to_string());
        }
    }
    words
}

/// Score one record against a query. Pure and deterministic; a query that
/// trims to empty scores 0 for every record (the unranked state).
#[must_use]
pub fn relevance(record: &CatalogRecord, query: &str, weights: &ScoreWeights) -> u32 {
    let phrase = query.trim().to_lowercase();
    if phrase.is_empty() {
        return 0;
    }
    let words = query_words(&phrase);

    let title = record.title.to_lowercase();
    let category = record.category.to_lowercase();
    let content = record.content.to_lowercase();

    let mut score = 0u32;

    if title.contains(&phrase) {
        score += weights.title_phrase;
    }
    for word in &words {
        if title.contains(word.as_str()) {
            score += weights.title_word;
        }
    }

    if category.contains(&phrase) {
        score += weights.category_phrase;
    }
    for word in &words {
        if category.contains(word.as_str()) {
            score += weights.category_word;
        }
    }

    for word in &words {
        if content.contains(word.as_str()) {
            score += weights.content_word;
        }
    }

    for tag in &record.tags {
        let tag = tag.to_lowercase();
        if tag == phrase {
            score += weights.tag_exact_phrase;
        }
        for word in &words {
            if tag.contains(word.as_str()) {
                score += weights.tag_word_contains;
            }
            if tag == *word {
                score += weights.tag_word_exact;
            }
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Accent;

    fn record(title: &str, category: &str, content: &str, tags: &[&str]) -> CatalogRecord {
        CatalogRecord {
            id: title.to_lowercase(),
            category: category.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
            link: None,
            accent: Accent::default(),
        }
    }

    #[test]
    fn whitespace_only_query_scores_zero() {
        let card = record("HeyContext", "SYSTEM", "Agent platform.", &["agents"]);
        let weights = ScoreWeights::default();
        assert_eq!(relevance(&card, "", &weights), 0);
        assert_eq!(relevance(&card, "   \t ", &weights), 0);
    }

    #[test]
    fn title_substring_scores_at_least_the_phrase_weight() {
        let card = record("HeyContext", "SYSTEM", "Agent platform.", &[]);
        let weights = ScoreWeights::default();
        assert!(relevance(&card, "context", &weights) >= 100);
        assert!(relevance(&card, "HEYCONTEXT", &weights) >= 100);
    }

    #[test]
    fn exact_tag_accumulates_phrase_contains_and_word_rules() {
        let card = record("HeyContext", "SYSTEM", "Orchestration workspace.", &["agents", "platform"]);
        // tag == query: 80 (exact phrase) + 25 (contains word) + 40 (exact word).
        assert_eq!(relevance(&card, "agents", &ScoreWeights::default()), 145);
    }

    #[test]
    fn contributions_accumulate_across_all_fields() {
        let card = record("Agents Everywhere", "AGENTS", "agents all the way down", &["agents"]);
        // title: 100 + 30, category: 50 + 20, content: 15, tag: 80 + 25 + 40.
        assert_eq!(relevance(&card, "agents", &ScoreWeights::default()), 360);
    }

    #[test]
    fn multi_word_queries_score_each_word_without_phrase_bonus() {
        let card = record("Vector Native Protocol", "OPEN SOURCE", "Symbolic communication.", &[]);
        // "vector protocol" is not a title substring, but both words are: 30 + 30.
        assert_eq!(
            relevance(&card, "vector protocol", &ScoreWeights::default()),
            60
        );
    }

    #[test]
    fn repeated_query_words_count_once() {
        let card = record("HeyContext", "SYSTEM", "Agent platform.", &["agents"]);
        let weights = ScoreWeights::default();
        assert_eq!(
            relevance(&card, "agents agents", &weights),
            relevance(&card, "agents", &weights)
        );
    }

    #[test]
    fn surrounding_whitespace_does_not_change_the_score() {
        let card = record("HeyContext", "SYSTEM", "Agent platform.", &["agents"]);
        let weights = ScoreWeights::default();
        assert_eq!(
            relevance(&card, "  agents  ", &weights),
            relevance(&card, "agents", &weights)
        );
    }

    #[test]
    fn scores_respect_custom_weights() {
        let card = record("HeyContext", "SYSTEM", "Agent platform.", &["agents"]);
        let weights = ScoreWeights {
            tag_exact_phrase: 1,
            tag_word_contains: 1,
            tag_word_exact: 1,
            ..ScoreWeights::default()
        };
        assert_eq!(relevance(&card, "agents", &weights), 3);
    }
}
