use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;


pub use args::{DocumentArgs, LogArgs, QueryArgs, SessionArgs};

#[derive(Debug, Parser)]
#[command(name = "cardfile")]
#[command(about = "Catalog relevance search from the terminal", version)]
pub struct Cli {
    /// Catalog JSON file to load instead of the builtin cards.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the active catalog as JSON.
    Catalog,
    /// Rank the catalog against a query and print the ordered records.
    Query(QueryArgs),
    /// Re-rank interactively: each stdin line replaces the query.
    Session(SessionArgs),
    /// Summarize a query log written by `session --log`.
    Log(LogArgs),
    /// Render the builtin notation document.
    Document(DocumentArgs),
}
