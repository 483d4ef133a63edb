use crate::relevance::ScoreWeights;

use super::env::read_env_u32;

const ENV_WEIGHT_TITLE_PHRASE: &str = "CARDFILE_WEIGHT_TITLE_PHRASE";
const ENV_WEIGHT_TITLE_WORD: &str = "CARDFILE_WEIGHT_TITLE_WORD";
const ENV_WEIGHT_CATEGORY_PHRASE: &str = "CARDFILE_WEIGHT_CATEGORY_PHRASE";
const ENV_WEIGHT_CATEGORY_WORD: &str = "CARDFILE_WEIGHT_CATEGORY_WORD";
const ENV_WEIGHT_CONTENT_WORD: &str = "CARDFILE_WEIGHT_CONTENT_WORD";
const ENV_WEIGHT_TAG_PHRASE: &str = "CARDFILE_WEIGHT_TAG_PHRASE";
const ENV_WEIGHT_TAG_WORD_CONTAINS: &str = "CARDFILE_WEIGHT_TAG_WORD_CONTAINS";
const ENV_WEIGHT_TAG_WORD_EXACT: &str = "CARDFILE_WEIGHT_TAG_WORD_EXACT";

/// Engine tuning resolved once at session construction. The scoring
/// weights are authored constants; each can be overridden individually
/// through its `CARDFILE_WEIGHT_*` variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub weights: ScoreWeights,
}

impl SearchConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = ScoreWeights::default();
        Self {
            weights: ScoreWeights {
                title_phrase: read_env_u32(ENV_WEIGHT_TITLE_PHRASE, defaults.title_phrase),
                title_word: read_env_u32(ENV_WEIGHT_TITLE_WORD, defaults.title_word),
                category_phrase: read_env_u32(ENV_WEIGHT_CATEGORY_PHRASE, defaults.category_phrase),
                category_word: read_env_u32(ENV_WEIGHT_CATEGORY_WORD, defaults.category_word),
                content_word: read_env_u32(ENV_WEIGHT_CONTENT_WORD, defaults.content_word),
                tag_exact_phrase: read_env_u32(ENV_WEIGHT_TAG_PHRASE, defaults.tag_exact_phrase),
                tag_word_contains: read_env_u32(
                    ENV_WEIGHT_TAG_WORD_CONTAINS,
                    defaults.tag_word_contains,
                ),
                tag_word_exact: read_env_u32(ENV_WEIGHT_TAG_WORD_EXACT, defaults.tag_word_exact),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_the_authored_weights() {
        let config = SearchConfig::default();
        assert_eq!(config.weights.title_phrase, 100);
        assert_eq!(config.weights.title_word, 30);
        assert_eq!(config.weights.category_phrase, 50);
        assert_eq!(config.weights.category_word, 20);
        assert_eq!(config.weights.content_word, 15);
        assert_eq!(config.weights.tag_exact_phrase, 80);
        assert_eq!(config.weights.tag_word_contains, 25);
        assert_eq!(config.weights.tag_word_exact, 40);
    }
}
