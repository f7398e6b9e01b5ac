//! Minimal client for the QuestDB HTTP query API.
//!
//! Two endpoints are covered: `/exec` (SQL execution, JSON response) and
//! `/exp` (raw delimited-text export). Nothing retention-specific lives
//! here; callers bring their own SQL.

pub mod client;
pub mod error;
pub mod response;

pub use client::{ExecOptions, QdbClient};
pub use error::ClientError;
pub use response::{Column, ExecResponse};

/// Escape a string value for safe use inside a QuestDB single-quoted
/// literal. QuestDB escapes a quote by doubling it.
pub fn escape_literal(s: &str) -> String {
    s.replace('\'', "''")
}
