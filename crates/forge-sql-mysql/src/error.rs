//! Error types for MySQL statement generation and schema orchestration.
//!
//! The split keeps "fix your call" apart from "the engine rejected this"
//! apart from "introspection found nothing": [`QueryError`] is raised
//! synchronously before any statement is sent, while [`SchemaError`] is
//! what the async schema operations resolve to.

use forge_sql_core::channel::ExecutionError;

/// Validation failures raised by the query generator.
///
/// All of these are detected before any text is produced; there is no
/// partial output and no statement is ever sent once one is raised.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A required argument was not supplied.
    #[error("{name} required")]
    MissingParameter {
        /// Name of the missing argument.
        name: &'static str,
    },

    /// An operation is missing one or more of its required arguments;
    /// names the full expected set.
    #[error("{operation} missing some parameters; expected {expected}")]
    MissingParameters {
        /// The operation that was called.
        operation: &'static str,
        /// The complete set of required arguments.
        expected: &'static str,
    },

    /// A routine parameter was declared without a type.
    #[error("function parameter {parameter} has no type")]
    UntypedParameter {
        /// Parameter name, or its 1-based position when unnamed.
        parameter: String,
    },

    /// The dialect cannot express the requested operation.
    #[error("the mysql dialect has no native support for {operation}")]
    UnsupportedOperation {
        /// The refused operation.
        operation: &'static str,
    },

    /// A JSON construct appeared inside a malformed expression.
    #[error("invalid json expression: {expression}")]
    InvalidJsonExpression {
        /// The offending text.
        expression: String,
    },
}

/// Failures surfaced by multi-statement schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The generator rejected its arguments before anything was sent.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Introspection found no constraint of the requested name on the
    /// requested table.
    #[error("constraint {constraint} on table {table} does not exist")]
    UnknownConstraint {
        /// The requested constraint name.
        constraint: String,
        /// The table it was looked up on.
        table: String,
    },

    /// The execution channel reported a failure; surfaced verbatim,
    /// never reclassified or retried.
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}
