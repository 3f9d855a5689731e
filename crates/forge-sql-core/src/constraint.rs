//! Constraint descriptors.
//!
//! Descriptors are produced from introspection rows only, never
//! hand-constructed, and never cached: every schema operation re-derives
//! them from a fresh catalog query so they cannot go stale.

use crate::channel::Row;
use crate::table::TableRef;

/// The kind of a table constraint as reported by the engine's catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintKind {
    /// PRIMARY KEY constraint.
    PrimaryKey,
    /// FOREIGN KEY constraint.
    ForeignKey,
    /// UNIQUE constraint.
    Unique,
    /// CHECK constraint.
    Check,
    /// Any other constraint type the engine reports.
    Other(String),
}

impl ConstraintKind {
    /// Parses the catalog's textual constraint type.
    #[must_use]
    pub fn parse(kind: &str) -> Self {
        match kind {
            "PRIMARY KEY" => Self::PrimaryKey,
            "FOREIGN KEY" => Self::ForeignKey,
            "UNIQUE" => Self::Unique,
            "CHECK" => Self::Check,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the SQL spelling of the kind.
    #[must_use]
    pub fn as_sql(&self) -> &str {
        match self {
            Self::PrimaryKey => "PRIMARY KEY",
            Self::ForeignKey => "FOREIGN KEY",
            Self::Unique => "UNIQUE",
            Self::Check => "CHECK",
            Self::Other(kind) => kind,
        }
    }
}

/// One constraint row read back from the engine's metadata catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintDescriptor {
    /// Constraint name.
    pub name: String,
    /// Constraint kind.
    pub kind: ConstraintKind,
    /// Owning table, schema-qualified when the catalog reports one.
    pub table: TableRef,
}

impl ConstraintDescriptor {
    /// Builds a descriptor from one introspection row.
    ///
    /// Returns `None` when the row lacks a constraint name or type, which
    /// callers treat the same as the constraint not existing.
    #[must_use]
    pub fn from_row(row: &Row) -> Option<Self> {
        let name = row.get("constraint_name")?;
        let kind = ConstraintKind::parse(row.get("constraint_type")?);
        let table_name = row.get("table_name")?;
        let table = match row.get("table_schema") {
            Some(schema) => TableRef::with_schema(schema, table_name),
            None => TableRef::new(table_name),
        };
        Some(Self {
            name: name.to_string(),
            kind,
            table,
        })
    }
}
