//! # forge-sql-core
//!
//! Shared primitives for dialect-specific SQL statement generation.
//!
//! This crate holds everything a dialect crate consumes but does not own:
//! - Value objects describing tables, columns, indexes, constraints, and
//!   stored routines. All of them are transient: constructed per call,
//!   discarded once the statements they describe have been produced.
//! - Identifier quoting behind the [`Dialect`] trait and inline literal
//!   escaping via [`SqlValue`].
//! - A small WHERE-condition tree ([`Cond`]) with its text compiler.
//! - The [`StatementChannel`] abstraction that schema orchestration runs
//!   on. The network/session layer implementing it lives elsewhere.
//!
//! Dialect crates (e.g. `forge-sql-mysql`) build on these to translate
//! dialect-neutral schema descriptions into syntactically exact SQL text.

pub mod channel;
pub mod column;
pub mod condition;
pub mod constraint;
pub mod dialect;
pub mod index;
pub mod names;
pub mod routine;
pub mod table;
pub mod value;

pub use channel::{ExecutionError, Row, StatementChannel};
pub use column::{ColumnDefinition, ColumnPosition, ForeignReference, ReferentialAction};
pub use condition::{Cond, col};
pub use constraint::{ConstraintDescriptor, ConstraintKind};
pub use dialect::Dialect;
pub use index::IndexSpec;
pub use routine::{ParamDirection, RoutineDefinition, RoutineParam};
pub use table::TableRef;
pub use value::SqlValue;
