//! # forge-sql-mysql
//!
//! MySQL statement generation and schema orchestration.
//!
//! Two layers, strictly separated:
//!
//! - **[`generator::QueryGenerator`]** — pure functions from
//!   dialect-neutral schema descriptions to MySQL statement text: DDL,
//!   DML, catalog introspection, stored routines, and JSON path
//!   accessors. No I/O, deterministic, fail-fast validation.
//! - **[`schema::SchemaEditor`]** — async sequences of generated
//!   statements for the operations MySQL cannot express atomically:
//!   dropping a column that foreign keys hang off, dropping a constraint
//!   by introspected kind, and defining a stored function around the
//!   client delimiter conflict.
//!
//! The generator works around MySQL's structural quirks so callers don't
//! have to: inline `REFERENCES` is never combined with `PRIMARY KEY`
//! (both are re-emitted as trailing table clauses), and routine renames
//! are refused outright since the engine has no syntax for them.
//!
//! # Example
//!
//! ```rust
//! use forge_sql_core::TableRef;
//! use forge_sql_mysql::generator::{CreateTableOptions, QueryGenerator};
//!
//! let generator = QueryGenerator::new();
//! let sql = generator.create_table_query(
//!     &TableRef::new("owners"),
//!     &[
//!         ("id".to_string(), "INTEGER auto_increment PRIMARY KEY".to_string()),
//!         ("name".to_string(), "VARCHAR(255) NOT NULL".to_string()),
//!     ],
//!     &CreateTableOptions::default(),
//! );
//! assert!(sql.contains("PRIMARY KEY (`id`)"));
//! assert!(sql.ends_with("ENGINE=InnoDB"));
//! ```

pub mod dialect;
pub mod error;
pub mod generator;
pub mod schema;
pub mod tokenizer;

pub use dialect::MysqlDialect;
pub use error::{QueryError, SchemaError};
pub use generator::QueryGenerator;
pub use schema::SchemaEditor;
