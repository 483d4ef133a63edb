use std::collections::HashSet;

use crate::error::{CardfileError, Result};
use crate::models::CatalogRecord;
use crate::style::Accent;

/// Immutable, ordered record store. Construction is the only fallible
/// step in the engine: duplicate ids are rejected, everything after that
/// is pure computation over a fixed list.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn new(records: Vec<CatalogRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CardfileError::Validation(format!(
                    "duplicate record id: {}",
                    record.id
                )));
            }
        }
        Ok(Self { records })
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let records = serde_json::from_str::<Vec<CatalogRecord>>(raw)?;
        Self::new(records)
    }

    #[must_use]
    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// The authored portfolio cards. Ids are static and known-unique, so
    /// construction bypasses the duplicate check.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            records: vec![
                card(
                    "identity",
                    "ENTITY",
                    "Aria Han",
                    "AI Systems Engineer. Building infrastructure for the agentic era.",
                    &["founder", "engineer", "ai", "systems", "builder", "san francisco"],
                    None,
                    Accent::Cognition,
                ),
                card(
                    "thesis",
                    "THESIS",
                    "Work With AI's Nature",
                    "Systems that embrace emergence over explicit programming. Coordination > capability.",
                    &["philosophy", "emergence", "coordination", "agents", "architecture"],
                    None,
                    Accent::Emergence,
                ),
                card(
                    "heycontext",
                    "SYSTEM",
                    "HeyContext",
                    "Agent orchestration platform. Adaptive routing. Live in beta.",
                    &["agents", "orchestration", "production", "live", "multi-agent", "platform"],
                    Some("/systems"),
                    Accent::Cognition,
                ),
                card(
                    "hackathons",
                    "EVIDENCE",
                    "6 Competition Wins",
                    "AWS, Weavehacks, Multimodal AI, Vertical AI, GPT-4o vs Gemini, AI Agents 2.0.",
                    &["hackathon", "winner", "competition", "aws", "google", "evidence"],
                    Some("/evidence"),
                    Accent::Memory,
                ),
                card(
                    "vector-native",
                    "OPEN SOURCE",
                    "Vector Native Protocol",
                    "Symbolic communication for LLMs. ~3.2x compression. Agent-to-agent lingua franca.",
                    &["protocol", "compression", "agents", "communication", "open source", "python"],
                    Some("/open-source"),
                    Accent::Emergence,
                ),
                card(
                    "convergence",
                    "OPEN SOURCE",
                    "The Convergence",
                    "RL framework. Evolutionary selection. Published to PyPI. Production deployed.",
                    &["reinforcement learning", "evolution", "framework", "pypi", "open source"],
                    Some("/open-source"),
                    Accent::Data,
                ),
                card(
                    "companies",
                    "TRAJECTORY",
                    "3 Companies Founded",
                    "PersistOS → HeyContext. Divertissement → HeyContent. Brink Labs → Brink Mind.",
                    &["founder", "ceo", "startup", "company", "entrepreneur"],
                    Some("/timeline"),
                    Accent::Memory,
                ),
                card(
                    "writing",
                    "WRITING",
                    "Technical Articles",
                    "Agent coordination. Self-learning systems. Building meaningful technology.",
                    &["medium", "writing", "articles", "technical", "blog"],
                    Some("/writing"),
                    Accent::Data,
                ),
            ],
        }
    }
}

fn card(
    id: &str,
    category: &str,
    title: &str,
    content: &str,
    tags: &[&str],
    link: Option<&str>,
    accent: Accent,
) -> CatalogRecord {
    CatalogRecord {
        id: id.to_string(),
        category: category.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
        link: link.map(ToString::to_string),
        accent,
    }
}
