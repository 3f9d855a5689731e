//! Statement execution channel.
//!
//! The core produces statement text; something else owns the wire. This
//! module defines the seam between the two: a channel accepts text and
//! returns metadata rows, and its failures are opaque to everything above
//! it.

use std::collections::HashMap;

use async_trait::async_trait;

/// One row of metadata returned by an introspection statement.
///
/// Values are kept as text; everything the schema layer reads back from
/// the engine's catalogs (constraint names, types, referenced tables) is
/// textual.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    columns: HashMap<String, String>,
}

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column value, builder-style.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.columns.insert(column.into(), value.into());
        self
    }

    /// Sets a column value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.columns.insert(column.into(), value.into());
    }

    /// Reads a column value.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }
}

/// An opaque failure reported by the execution channel.
///
/// Surfaced verbatim: the schema layer never inspects, reclassifies, or
/// retries these. Suppression policies belong to callers.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ExecutionError(pub String);

impl ExecutionError {
    /// Wraps an engine-reported message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Submits statement text to a live session and returns metadata rows.
///
/// One implementation maps to one session: orchestrated sequences rely on
/// session state (e.g. the client delimiter) persisting between
/// consecutive `submit` calls.
#[async_trait]
pub trait StatementChannel: Send + Sync {
    /// Submits one statement and returns whatever rows the engine sends back.
    async fn submit(&self, sql: &str) -> Result<Vec<Row>, ExecutionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_round_trip() {
        let row = Row::new().with("constraint_name", "PRIMARY");
        assert_eq!(row.get("constraint_name"), Some("PRIMARY"));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn test_execution_error_message() {
        let error = ExecutionError::new("ER_DUP_ENTRY: Duplicate entry");
        assert_eq!(error.to_string(), "ER_DUP_ENTRY: Duplicate entry");
    }
}
