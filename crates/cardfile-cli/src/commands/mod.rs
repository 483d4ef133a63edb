use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use cardfile_core::notation;
use cardfile_core::query_log::{parse_query_log, to_jsonl};
use cardfile_core::style;
use cardfile_core::{Catalog, CatalogSession, ScoredRecord, SearchConfig, SessionState};
use serde::Serialize;

use crate::cli::{Cli, Commands, DocumentArgs, LogArgs, QueryArgs, SessionArgs};

pub(crate) fn run(cli: Cli) -> Result<()> {
    let catalog = load_catalog(cli.catalog.as_deref())?;
    let mut session = CatalogSession::with_config(catalog, SearchConfig::from_env());

    match cli.command {
        Commands::Catalog => print_json(&session.catalog().records()),
        Commands::Query(args) => run_query(&mut session, &args),
        Commands::Session(args) => run_session(&mut session, &args),
        Commands::Log(args) => run_log(&args),
        Commands::Document(args) => {
            run_document(&args);
            Ok(())
        }
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    Catalog::from_json_str(&raw)
        .with_context(|| format!("failed to parse catalog file {}", path.display()))
}

#[derive(Serialize)]
struct QueryReport<'a> {
    query: &'a str,
    state: &'static str,
    match_count: usize,
    records: Vec<RecordView<'a>>,
}

#[derive(Serialize)]
struct RecordView<'a> {
    id: &'a str,
    category: &'a str,
    title: &'a str,
    content: &'a str,
    tags: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<&'a str>,
    accent: &'static str,
    score: u32,
    highlighted: bool,
    meter: u8,
}

fn run_query(session: &mut CatalogSession, args: &QueryArgs) -> Result<()> {
    session.on_query_change(&args.query);
    let ordered = session.ordered_records();
    let shown = args.limit.unwrap_or(ordered.len());
    let records = ordered
        .iter()
        .take(shown)
        .map(|scored| record_view(session, scored))
        .collect();

    print_json(&QueryReport {
        query: session.query(),
        state: session.state().as_str(),
        match_count: session.match_count(),
        records,
    })
}

fn record_view<'a>(session: &CatalogSession, scored: &ScoredRecord<'a>) -> RecordView<'a> {
    let record = scored.record;
    RecordView {
        id: &record.id,
        category: &record.category,
        title: &record.title,
        content: &record.content,
        tags: &record.tags,
        link: record.link.as_deref(),
        accent: record.accent.as_str(),
        score: scored.score,
        highlighted: session.is_highlighted(record),
        meter: CatalogSession::relevance_meter(scored.score),
    }
}

fn run_session(session: &mut CatalogSession, args: &SessionArgs) -> Result<()> {
    println!("cardfile session · type to reorganize · blank line restores authored order");
    render_view(session, args.plain);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let outcome = session.on_query_change(&line);
        render_view(session, args.plain);
        match outcome.state {
            SessionState::Filtered => println!("{} matches", outcome.match_count),
            SessionState::Idle => println!("{}", CatalogSession::placeholder_hint(
                session.query_log().len(),
            )),
        }
    }

    if let Some(path) = &args.log {
        let rendered = to_jsonl(session.query_log())?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open query log {}", path.display()))?;
        file.write_all(rendered.as_bytes())
            .with_context(|| format!("failed to append query log {}", path.display()))?;
    }
    Ok(())
}

fn render_view(session: &CatalogSession, plain: bool) {
    for scored in session.ordered_records() {
        let record = scored.record;
        let accent = record.accent.style();
        let highlighted = session.is_highlighted(record);
        let tags = record
            .tags
            .iter()
            .map(|tag| {
                if !plain && session.is_tag_match(tag) {
                    format!("{}{tag}{}", accent.fg, style::RESET)
                } else {
                    tag.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        if plain {
            println!(
                "{:>4}  {:<12} {:<24} {tags}",
                scored.score, record.category, record.title
            );
        } else if highlighted || session.state() == SessionState::Idle {
            println!(
                "{:>4}  {}{:<12}{} {:<24} {tags}",
                scored.score, accent.fg, record.category, style::RESET, record.title
            );
        } else {
            println!(
                "{}{:>4}  {:<12} {:<24} {tags}{}",
                style::DIM,
                scored.score,
                record.category,
                record.title,
                style::RESET
            );
        }
    }
}

#[derive(Serialize)]
struct LogReport<'a> {
    file: String,
    entries: usize,
    skipped_lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_error: Option<String>,
    queries: Vec<LogQuerySummary<'a>>,
}

#[derive(Serialize)]
struct LogQuerySummary<'a> {
    query: &'a str,
    state: &'a str,
    match_count: usize,
}

fn run_log(args: &LogArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read query log {}", args.file.display()))?;
    let outcome = parse_query_log(&raw);

    let queries = outcome
        .entries
        .iter()
        .map(|entry| LogQuerySummary {
            query: &entry.query,
            state: &entry.state,
            match_count: entry.match_count,
        })
        .collect();

    print_json(&LogReport {
        file: args.file.display().to_string(),
        entries: outcome.entries.len(),
        skipped_lines: outcome.skipped_lines,
        first_error: outcome
            .first_error
            .as_ref()
            .map(|(line_no, message)| format!("line {line_no}: {message}")),
        queries,
    })
}

fn run_document(args: &DocumentArgs) {
    let doc = notation::builtin_document();
    if args.plain {
        println!("{doc}");
    } else {
        print!("{}", notation::render_ansi(doc));
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
