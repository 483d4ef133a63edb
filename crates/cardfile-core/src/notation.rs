//! Parsing and highlighting for the card-catalog notation document.
//!
//! The notation is a line-oriented format: `●BLOCK` headers, `|key:`
//! fields, `[a,b,c]` lists, and box-drawing glyphs for tree structure.
//! The scanner is lossless: the concatenated token texts of a line equal
//! the line itself, so rendering only ever inserts styling around spans.

use crate::style::{self, Accent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Field,
    Subfield,
    Divider,
}

#[derive(Debug, Clone)]
pub struct NotationLine {
    pub text: String,
    pub kind: LineKind,
    pub indent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `●UPPER_SNAKE` block marker.
    Block,
    /// `|lower_snake:` field key.
    Key,
    /// `[comma,separated]` list literal.
    List,
    /// Box-drawing tree glyphs.
    Tree,
    /// Plain span containing a link host.
    Link,
    Text,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl TokenKind {
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Block => Accent::Emergence.style().fg,
            Self::Key => Accent::Cognition.style().fg,
            Self::List => Accent::Memory.style().fg,
            Self::Tree => style::TREE,
            Self::Link => Accent::Data.style().fg,
            Self::Text => "",
        }
    }
}

#[must_use]
pub fn classify_line(line: &str) -> (LineKind, u8) {
    let trimmed = line.trim();

    let mut indent = 0u8;
    if line.starts_with('├') || line.starts_with('│') || line.starts_with('└') {
        indent = 1;
        if line.contains("│  ") {
            indent = 2;
        }
    }

    let kind = if trimmed.starts_with('●') {
        LineKind::Header
    } else if trimmed.is_empty() {
        LineKind::Divider
    } else if trimmed.starts_with('|') || trimmed.starts_with('├') || trimmed.starts_with('└') {
        LineKind::Subfield
    } else {
        LineKind::Field
    };

    (kind, indent)
}

#[must_use]
pub fn parse_document(doc: &str) -> Vec<NotationLine> {
    doc.lines()
        .map(|line| {
            let (kind, indent) = classify_line(line);
            NotationLine {
                text: line.to_string(),
                kind,
                indent,
            }
        })
        .collect()
}

/// Split one line into classified spans.
#[must_use]
pub fn scan_line(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text_start = 0usize;
    let mut i = 0usize;

    while i < line.len() {
        if let Some((kind, len)) = marker_at(&line[i..]) {
            if text_start < i {
                tokens.push(text_token(&line[text_start..i]));
            }
            tokens.push(Token {
                kind,
                text: line[i..i + len].to_string(),
            });
            i += len;
            text_start = i;
        } else {
            i += line[i..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if text_start < line.len() {
        tokens.push(text_token(&line[text_start..]));
    }

    tokens
}

/// Render a whole document with ANSI styling per token kind.
#[must_use]
pub fn render_ansi(doc: &str) -> String {
    let mut out = String::new();
    for line in parse_document(doc) {
        if line.kind != LineKind::Divider {
            for token in scan_line(&line.text) {
                let ansi = token.kind.ansi();
                if ansi.is_empty() {
                    out.push_str(&token.text);
                } else {
                    out.push_str(ansi);
                    out.push_str(&token.text);
                    out.push_str(style::RESET);
                }
            }
        }
        out.push('\n');
    }
    out
}

fn marker_at(rest: &str) -> Option<(TokenKind, usize)> {
    if rest.starts_with("├──") || rest.starts_with("└──") {
        return Some((TokenKind::Tree, "├──".len()));
    }
    if rest.starts_with('│') {
        return Some((TokenKind::Tree, '│'.len_utf8()));
    }

    if let Some(tail) = rest.strip_prefix('●') {
        let run: usize = tail
            .chars()
            .take_while(|c| c.is_ascii_alphabetic() || *c == '_')
            .count();
        if run > 0 {
            // Only an all-uppercase run is a block marker; lowercase
            // `●system`-style entries read as plain text.
            let name = &tail[..run];
            let kind = if name.chars().all(|c| c.is_ascii_uppercase() || c == '_') {
                TokenKind::Block
            } else {
                TokenKind::Text
            };
            return Some((kind, '●'.len_utf8() + run));
        }
    }

    if let Some(tail) = rest.strip_prefix('|') {
        let run: usize = tail
            .chars()
            .take_while(|c| c.is_ascii_alphabetic() || *c == '_')
            .count();
        if run > 0 && tail[run..].starts_with(':') {
            return Some((TokenKind::Key, 1 + run + 1));
        }
    }

    if let Some(tail) = rest.strip_prefix('[') {
        if let Some(end) = tail.find(']') {
            if end > 0 {
                return Some((TokenKind::List, 1 + end + 1));
            }
        }
    }

    None
}

fn text_token(text: &str) -> Token {
    let kind = if text.contains(".co") {
        TokenKind::Link
    } else {
        TokenKind::Text
    };
    Token {
        kind,
        text: text.to_string(),
    }
}

/// The authored portfolio document rendered by the `document` command.
#[must_use]
pub fn builtin_document() -> &'static str {
    PORTFOLIO_DOCUMENT
}

const PORTFOLIO_DOCUMENT: &str = "\
●ENTITY|type:human|name:aria_han
├──role:3x_ceo·ai_systems_architect
├──location:san_francisco
└──domain:multi_agent_systems·coordination_protocols


●THESIS
|core:coordination_>_capability
|method:theory→architecture→implementation
|output:production_systems·open_source·writing


●SYSTEM_BLOCK|type:production|count:3

├──●system|name:heycontext|status:live_production
│  |role:ceo·lead_architect·lead_engineer
│  |timeline:sept_2024→present
│  |desc:multi_agent_orchestration_workspace
│  |capability:agents_coordinate·learn·improve_through_experience
│  |tech:[fastapi,redis,convex,agno,nextjs]
│  └──insight:why_multi_agent_systems_fail=information_degradation

├──●system|name:heycontent|status:integrated
│  |role:ceo·lead_developer
│  |timeline:mar_2025→sept_2025
│  |desc:cross_platform_memory_architecture
│  |platforms:[instagram,youtube,gmail,notes]
│  └──insight:what_breaks_when_synthesizing_multiple_sources

└──●system|name:brink_mind|status:testflight_phase
   |role:ceo·lead_architect·swiftui_developer
   |timeline:nov_2024→mar_2025
   |desc:voice_ai_mental_health·biometric_fusion
   |platform:[ios,watchos,healthkit]
   └──insight:theory_vs_real_humans


●EVIDENCE_BLOCK|type:hackathons|count:6|outcome:5_wins_1_finalist

├──●entry|name:darwin|year:2025
│  |event:aws_ai_agents_hackathon
│  |award:best_use_of_semgrep
│  |desc:evolutionary_code_generation·models_compete·strong_code_survives
│  └──url:devpost.com/software/darwin-cmfysv

├──●entry|name:the_convergence|year:2025
│  |event:weavehacks_2_self_improving_agents_google_cloud
│  |award:reinforcement_learning_track_winner
│  |desc:self_improving_agents·rl_framework·published_pypi
│  └──url:devpost.com/software/the-convergence

├──●entry|name:content_creator_connector|year:2025
│  |event:multimodal_ai_agents
│  |award:best_use_of_agno
│  |desc:automated_creator_outreach·personalized_emails
│  └──url:devpost.com/software/content-creator-connector

├──●entry|name:theravoice|year:2024
│  |event:vertical_specific_ai_agents_hackathon
│  |award:best_use_of_ai_ml_api
│  |desc:voice_ai_therapy·aixplain·nlp·tts
│  └──url:devpost.com/software/draft_name

├──●entry|name:hotagents|year:2024
│  |event:gpt4o_vs_gemini_hackathon
│  |award:best_use_of_wordware
│  |desc:hotkey_triggered_agents·condense_llm_use_cases
│  └──url:github.com/ariaxhan/hotagents

└──●entry|name:freetime|year:2024
   |event:ai_agents_2.0_hackathon
   |outcome:finalist
   |desc:ai_social_planner·coordinates_gatherings·shared_interests
   └──url:github.com/ariaxhan/freetime


●OPEN_SOURCE_BLOCK

├──●project|name:vector_native
│  |status:active_development
│  |license:mit
│  |language:python
│  |desc:a2a_communication_protocol·3x_semantic_density
│  |method:meaning_density_>_token_count
│  └──url:github.com/persist-os/vector-native

└──●project|name:the_convergence
   |status:published_pypi·production_deployed
   |desc:self_improving_agent_framework·evolutionary_pressure
   |method:multi_armed_bandit·adaptive_selection
   |distribution:pypi·github
   └──url:github.com/persist-os/the-convergence


●WRITING_BLOCK|platform:medium|handle:@ariaxhan
|philosophy:systems_thinking+technical_depth+clarity

├──●article
│  |title:latency_&_logic:why_we_need_vector_aligned_syntax
│  |thesis:token_as_unit_wrong·meaning_density_right
│  |category:systems
│  └──url:medium.com/@ariaxhan/latency-logic-6b7f832603b9

├──●article
│  |title:what_happens_when_agents_start_talking_to_each_other
│  |thesis:unexpected_protocols_emerge_without_human_prompts
│  |category:agents
│  └──url:medium.com/@ariaxhan/agents-talking-1ff00ce8f36c

└──●article
   |title:part_2_beyond_rag_building_living_context
   |thesis:rag_insufficient·production_needs_evolving_context
   |category:systems
   └──url:medium.com/@ariaxhan/beyond-rag-ab7b270fb6aa


●TIMELINE_BLOCK|period:2024→2025

├──●event|date:sept_2024→present|type:company
│  |name:persistos/heycontext
│  └──desc:exploring_frontier_ai_concepts·live_with_hundreds_of_users

├──●event|date:nov_2024→mar_2025|type:company
│  |name:brink_labs/brink_mind
│  └──desc:voice_ai·apple_watch_biometric·privacy_first_mental_health

└──●event|date:2024→2025|type:achievement
   |names:[darwin,convergence,ccc,theravoice,hotagents,freetime]
   └──desc:6_hackathons·each_built_in_24_48_hours


●CONTACT_BLOCK

├──github:github.com/ariaxhan
├──medium:medium.com/@ariaxhan
└──x:x.com/aria__han


●META
|format:vn_1.0
|semiotic_density:~3.2x
|primary_use:a2a_communication
|thesis:zip_file_for_meaning


●END_DOCUMENT";
