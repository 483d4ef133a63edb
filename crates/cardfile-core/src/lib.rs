// Public fallible APIs in this crate share one concrete error contract (`CardfileError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod notation;
pub mod query_log;
pub mod rank;
pub mod relevance;
pub mod session;
pub mod style;

pub use catalog::Catalog;
pub use config::SearchConfig;
pub use error::{CardfileError, Result};
pub use models::{CatalogRecord, QueryOutcome, ScoredRecord, SessionState};
pub use relevance::ScoreWeights;
pub use session::CatalogSession;
pub use style::Accent;
