//! Catalog introspection and index statements.
//!
//! Introspection queries read the engine's metadata catalogs
//! (`INFORMATION_SCHEMA`) rather than user data. Their output feeds the
//! schema orchestration layer, which re-derives constraint state from a
//! fresh query on every operation.

use forge_sql_core::index::IndexSpec;
use forge_sql_core::table::TableRef;
use forge_sql_core::value::escape_string;

use super::QueryGenerator;

/// Optional filters for `show_constraints_query`.
#[derive(Debug, Clone, Default)]
pub struct ShowConstraintsOptions {
    /// Restrict to one constraint name.
    pub constraint_name: Option<String>,
    /// Restrict to one schema; falls back to the table's own qualifier.
    pub schema: Option<String>,
}

impl QueryGenerator {
    /// Generates SHOW TABLES.
    #[must_use]
    pub fn show_tables_query(&self) -> String {
        String::from("SHOW TABLES")
    }

    /// Generates SHOW FULL COLUMNS for a table, schema-qualified when the
    /// reference carries a schema.
    #[must_use]
    pub fn describe_table_query(&self, table: &TableRef) -> String {
        format!("SHOW FULL COLUMNS FROM {}", self.quote_table(table))
    }

    /// Generates SHOW INDEX for a table.
    #[must_use]
    pub fn show_indexes_query(&self, table: &TableRef) -> String {
        format!("SHOW INDEX FROM {}", self.quote_table(table))
    }

    /// Generates the constraint metadata query, filtered by table name and
    /// optionally by constraint name and/or schema.
    #[must_use]
    pub fn show_constraints_query(
        &self,
        table: &TableRef,
        options: &ShowConstraintsOptions,
    ) -> String {
        let mut sql = format!(
            "SELECT CONSTRAINT_CATALOG AS constraint_catalog, \
             CONSTRAINT_NAME AS constraint_name, \
             CONSTRAINT_SCHEMA AS constraint_schema, \
             CONSTRAINT_TYPE AS constraint_type, \
             TABLE_NAME AS table_name, \
             TABLE_SCHEMA AS table_schema \
             FROM INFORMATION_SCHEMA.TABLE_CONSTRAINTS \
             WHERE TABLE_NAME = '{}'",
            escape_string(&table.name)
        );
        if let Some(name) = &options.constraint_name {
            sql.push_str(&format!(" AND CONSTRAINT_NAME = '{}'", escape_string(name)));
        }
        if let Some(schema) = options.schema.as_deref().or(table.schema.as_deref()) {
            sql.push_str(&format!(" AND TABLE_SCHEMA = '{}'", escape_string(schema)));
        }
        sql
    }

    /// Generates the query listing every foreign key on a table, excluding
    /// the implicit primary-key constraint and requiring a non-null
    /// referenced table.
    #[must_use]
    pub fn get_foreign_keys_query(&self, table: &TableRef) -> String {
        let mut sql = format!(
            "SELECT CONSTRAINT_NAME AS constraint_name, \
             CONSTRAINT_SCHEMA AS constraint_schema, \
             TABLE_NAME AS table_name, \
             TABLE_SCHEMA AS table_schema, \
             COLUMN_NAME AS column_name, \
             REFERENCED_TABLE_SCHEMA AS referenced_table_schema, \
             REFERENCED_TABLE_NAME AS referenced_table_name, \
             REFERENCED_COLUMN_NAME AS referenced_column_name \
             FROM INFORMATION_SCHEMA.KEY_COLUMN_USAGE \
             WHERE TABLE_NAME = '{}'",
            escape_string(&table.name)
        );
        if let Some(schema) = &table.schema {
            sql.push_str(&format!(" AND TABLE_SCHEMA = '{}'", escape_string(schema)));
        }
        sql.push_str(" AND CONSTRAINT_NAME != 'PRIMARY' AND REFERENCED_TABLE_NAME IS NOT NULL");
        sql
    }

    /// Generates the query finding foreign keys that involve one column,
    /// on either the referencing or the referenced side.
    #[must_use]
    pub fn get_foreign_key_query(&self, table: &TableRef, column: &str) -> String {
        let table_name = escape_string(&table.name);
        let column_name = escape_string(column);
        let schema_filter = |qualifier: &str| {
            table.schema.as_deref().map_or_else(String::new, |schema| {
                format!(" AND {qualifier} = '{}'", escape_string(schema))
            })
        };
        format!(
            "SELECT CONSTRAINT_NAME AS constraint_name \
             FROM INFORMATION_SCHEMA.KEY_COLUMN_USAGE \
             WHERE (REFERENCED_TABLE_NAME = '{table_name}'{} \
             AND REFERENCED_COLUMN_NAME = '{column_name}') \
             OR (TABLE_NAME = '{table_name}'{} \
             AND COLUMN_NAME = '{column_name}' \
             AND REFERENCED_TABLE_NAME IS NOT NULL)",
            schema_filter("REFERENCED_TABLE_SCHEMA"),
            schema_filter("TABLE_SCHEMA"),
        )
    }

    /// Generates ALTER TABLE .. DROP FOREIGN KEY.
    #[must_use]
    pub fn drop_foreign_key_query(&self, table: &TableRef, constraint: &str) -> String {
        format!(
            "ALTER TABLE {} DROP FOREIGN KEY {}",
            self.quote_table(table),
            self.quote(constraint)
        )
    }

    /// Generates CREATE INDEX, deriving the index name from the table and
    /// column names when none is given.
    #[must_use]
    pub fn add_index_query(&self, table: &TableRef, index: &IndexSpec) -> String {
        format!(
            "CREATE {}INDEX {} ON {} ({})",
            if index.unique { "UNIQUE " } else { "" },
            self.quote(&index.name_for(&table.name)),
            self.quote_table(table),
            self.quote_all(&index.columns)
        )
    }

    /// Generates DROP INDEX, accepting either an explicit name or a column
    /// list to derive one from.
    #[must_use]
    pub fn remove_index_query(&self, table: &TableRef, index: &IndexSpec) -> String {
        format!(
            "DROP INDEX {} ON {}",
            self.quote(&index.name_for(&table.name)),
            self.quote_table(table)
        )
    }
}
