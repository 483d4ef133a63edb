//! Query-log entries and their jsonl form.
//!
//! The session keeps a bounded in-memory log; the CLI persists it as one
//! JSON object per line and reads files back tolerantly, skipping lines
//! that no longer parse instead of failing the whole file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryLogEntry {
    pub trace_id: String,
    pub query: String,
    pub state: String,
    pub match_count: usize,
    pub latency_ms: u128,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct QueryLogParseOutcome {
    pub entries: Vec<QueryLogEntry>,
    pub skipped_lines: usize,
    pub first_error: Option<(usize, String)>,
}

pub fn parse_query_log(raw: &str) -> QueryLogParseOutcome {
    let mut entries = Vec::new();
    let mut skipped_lines = 0usize;
    let mut first_error = None::<(usize, String)>;

    for (line_no, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<QueryLogEntry>(line) {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                skipped_lines += 1;
                if first_error.is_none() {
                    first_error = Some((line_no + 1, err.to_string()));
                }
            }
        }
    }

    QueryLogParseOutcome {
        entries,
        skipped_lines,
        first_error,
    }
}

/// Render entries as jsonl, one compact object per line with a trailing
/// newline, ready to append to a log file.
pub fn to_jsonl(entries: &[QueryLogEntry]) -> crate::error::Result<String> {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&serde_json::to_string(entry)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(query: &str, match_count: usize) -> QueryLogEntry {
        QueryLogEntry {
            trace_id: format!("trace-{query}"),
            query: query.to_string(),
            state: "filtered".to_string(),
            match_count,
            latency_ms: 0,
            created_at: "2025-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn jsonl_round_trips_entries() {
        let rendered =
            to_jsonl(&[entry("agents", 3), entry("founder", 2)]).expect("render jsonl");
        let outcome = parse_query_log(&rendered);
        assert_eq!(outcome.entries.len(), 2);
        assert_eq!(outcome.skipped_lines, 0);
        assert_eq!(outcome.entries[0].query, "agents");
        assert_eq!(outcome.entries[1].match_count, 2);
    }

    #[test]
    fn parse_skips_invalid_lines_and_reports_the_first() {
        let rendered = to_jsonl(&[entry("agents", 3)]).expect("render jsonl");
        let raw = format!("{rendered}not json\n\n{{\"also\": \"bad\"}}\n");
        let outcome = parse_query_log(&raw);
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.skipped_lines, 2);
        let (line_no, _) = outcome.first_error.expect("first error recorded");
        assert_eq!(line_no, 2);
    }

    #[test]
    fn blank_lines_are_ignored_not_counted_as_skipped() {
        let outcome = parse_query_log("\n\n  \n");
        assert!(outcome.entries.is_empty());
        assert_eq!(outcome.skipped_lines, 0);
        assert!(outcome.first_error.is_none());
    }
}
