use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct QueryArgs {
    #[arg(allow_hyphen_values = true)]
    pub query: String,
    /// Keep only the top N records in the output (all records by default).
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Append the session's query log to this jsonl file on exit.
    #[arg(long)]
    pub log: Option<PathBuf>,
    /// Disable ANSI styling.
    #[arg(long, default_value_t = false)]
    pub plain: bool,
}

#[derive(Debug, Args)]
pub struct LogArgs {
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct DocumentArgs {
    /// Print the raw document without ANSI styling.
    #[arg(long, default_value_t = false)]
    pub plain: bool,
}
