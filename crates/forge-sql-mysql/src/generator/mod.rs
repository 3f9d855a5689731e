//! MySQL statement generation.
//!
//! One pure function per statement kind: each takes dialect-neutral
//! descriptors and returns SQL text, or a [`QueryError`](crate::error::QueryError)
//! before any text is produced. No I/O, no side effects, deterministic
//! given identical inputs.

mod ddl;
mod dml;
mod introspect;
mod json;
mod routines;

pub use ddl::CreateTableOptions;
pub use dml::{DeleteOptions, InsertOptions};
pub use introspect::ShowConstraintsOptions;

use forge_sql_core::dialect::Dialect;
use forge_sql_core::table::TableRef;

use crate::dialect::MysqlDialect;

/// Generates MySQL statement text from dialect-neutral descriptors.
///
/// Stateless and `Copy`; safe for unlimited concurrent use.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryGenerator {
    dialect: MysqlDialect,
}

impl QueryGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dialect: MysqlDialect::new(),
        }
    }

    /// Returns the dialect this generator targets.
    #[must_use]
    pub const fn dialect(&self) -> &MysqlDialect {
        &self.dialect
    }

    pub(crate) fn quote(&self, identifier: &str) -> String {
        self.dialect.quote_identifier(identifier)
    }

    pub(crate) fn quote_table(&self, table: &TableRef) -> String {
        table.quoted(&self.dialect)
    }

    pub(crate) fn quote_all(&self, identifiers: &[String]) -> String {
        identifiers
            .iter()
            .map(|identifier| self.quote(identifier))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
