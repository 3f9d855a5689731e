//! Multi-statement schema operations.
//!
//! Some schema operations have no atomic MySQL equivalent; this module
//! sequences the generator's statements over one session to implement
//! them. Statements execute strictly in order, each awaited before the
//! next is issued, because later statements depend on state the earlier
//! ones establish. Nothing here caches introspection results, catches
//! execution errors, or retries.

use forge_sql_core::channel::StatementChannel;
use forge_sql_core::constraint::{ConstraintDescriptor, ConstraintKind};
use forge_sql_core::index::IndexSpec;
use forge_sql_core::routine::RoutineDefinition;
use forge_sql_core::table::TableRef;
use tracing::{debug, info, warn};

use crate::error::SchemaError;
use crate::generator::{QueryGenerator, ShowConstraintsOptions};

/// Name of the implicit constraint MySQL attaches to every primary key.
const PRIMARY_KEY_CONSTRAINT: &str = "PRIMARY";

/// Sentinel delimiter used while a routine body is submitted.
const DELIMITER_SENTINEL: &str = "$$";

/// Sequences generator-produced statements over one session.
///
/// Each operation is scoped to its channel for its whole duration.
/// Concurrent operations against different targets are safe; two
/// operations racing on the same target surface as execution-channel
/// errors from the engine, not as a failure mode of this layer.
#[derive(Debug)]
pub struct SchemaEditor<'a, C: StatementChannel> {
    channel: &'a C,
    generator: QueryGenerator,
}

impl<'a, C: StatementChannel> SchemaEditor<'a, C> {
    /// Creates an editor over one session.
    #[must_use]
    pub const fn new(channel: &'a C) -> Self {
        Self {
            channel,
            generator: QueryGenerator::new(),
        }
    }

    /// Returns the underlying statement generator.
    #[must_use]
    pub const fn generator(&self) -> &QueryGenerator {
        &self.generator
    }

    /// Drops a column, first dropping every foreign key that involves it.
    ///
    /// MySQL refuses to drop a column that a foreign key hangs off, so
    /// the involved constraints are looked up fresh and dropped one by
    /// one; the column drop is issued only after every drop succeeded.
    pub async fn remove_column(
        &self,
        table: &TableRef,
        column: &str,
    ) -> Result<(), SchemaError> {
        let lookup = self.generator.get_foreign_key_query(table, column);
        debug!(sql = %lookup, "Looking up foreign keys before column drop");
        let rows = self.channel.submit(&lookup).await?;

        for row in &rows {
            let Some(constraint) = row.get("constraint_name") else {
                continue;
            };
            if constraint == PRIMARY_KEY_CONSTRAINT {
                continue;
            }
            let sql = self.generator.drop_foreign_key_query(table, constraint);
            debug!(sql = %sql, "Dropping foreign key");
            self.channel.submit(&sql).await?;
        }

        let sql = self.generator.remove_column_query(table, column);
        debug!(sql = %sql, "Dropping column");
        self.channel.submit(&sql).await?;

        info!(table = %table.name, column, "Column removed");
        Ok(())
    }

    /// Drops a named constraint, choosing the statement by its
    /// introspected kind: foreign keys need DROP FOREIGN KEY, everything
    /// else drops as an index.
    pub async fn remove_constraint(
        &self,
        table: &TableRef,
        constraint_name: &str,
    ) -> Result<(), SchemaError> {
        let options = ShowConstraintsOptions {
            constraint_name: Some(constraint_name.to_string()),
            schema: None,
        };
        let lookup = self.generator.show_constraints_query(table, &options);
        debug!(sql = %lookup, "Looking up constraint");
        let rows = self.channel.submit(&lookup).await?;

        let Some(constraint) = rows.first().and_then(ConstraintDescriptor::from_row) else {
            return Err(SchemaError::UnknownConstraint {
                constraint: constraint_name.to_string(),
                table: table.name.clone(),
            });
        };

        let sql = if constraint.kind == ConstraintKind::ForeignKey {
            self.generator
                .drop_foreign_key_query(table, constraint_name)
        } else {
            self.generator
                .remove_index_query(&constraint.table, &IndexSpec::named(&constraint.name))
        };
        debug!(sql = %sql, kind = constraint.kind.as_sql(), "Dropping constraint");
        self.channel.submit(&sql).await?;

        info!(table = %table.name, constraint = constraint_name, "Constraint removed");
        Ok(())
    }

    /// Defines a stored function.
    ///
    /// The session statement delimiter (semicolon) conflicts with the
    /// semicolons inside a routine body, so this is a fixed three-step
    /// sequence on one session: switch the delimiter to a sentinel,
    /// submit the definition terminated by the sentinel, restore the
    /// delimiter. A failure aborts the remaining steps without rollback:
    /// the delimiter is session state, and a failure after the switch
    /// leaves the session in a non-default delimiter state the caller
    /// must recover.
    pub async fn create_function(
        &self,
        routine: &RoutineDefinition,
    ) -> Result<(), SchemaError> {
        let definition = self.generator.create_function_query(routine)?;
        if definition.is_empty() {
            warn!(function = %routine.name, "Generator produced no text, skipping");
            return Ok(());
        }

        let switch = format!("DELIMITER {DELIMITER_SENTINEL}");
        debug!(sql = %switch, "Switching session delimiter");
        self.channel.submit(&switch).await?;

        let body = format!("{definition}{DELIMITER_SENTINEL}");
        debug!(sql = %body, "Submitting function definition");
        self.channel.submit(&body).await?;

        debug!("Restoring session delimiter");
        self.channel.submit("DELIMITER ;").await?;

        info!(function = %routine.name, "Function created");
        Ok(())
    }
}
