//! DDL statement generation.
//!
//! MySQL rejects inline `REFERENCES` combined with `PRIMARY KEY`, so
//! `create_table_query` walks the column map once, strips both keywords
//! out of the inline fragments, and re-emits them as trailing table
//! clauses: unique keys first, then one `PRIMARY KEY (...)` clause, then
//! one `FOREIGN KEY` clause per recorded reference in column-encounter
//! order.

use forge_sql_core::column::{ColumnDefinition, ColumnPosition};
use forge_sql_core::index::IndexSpec;
use forge_sql_core::table::TableRef;
use forge_sql_core::value::SqlValue;

use super::QueryGenerator;

/// Native type families that cannot carry a DEFAULT clause.
const NO_DEFAULT_TYPES: &[&str] = &[
    "BLOB",
    "TINYBLOB",
    "MEDIUMBLOB",
    "LONGBLOB",
    "TEXT",
    "TINYTEXT",
    "MEDIUMTEXT",
    "LONGTEXT",
    "GEOMETRY",
    "POINT",
    "LINESTRING",
    "POLYGON",
    "MULTIPOINT",
    "MULTILINESTRING",
    "MULTIPOLYGON",
    "GEOMETRYCOLLECTION",
    "JSON",
];

/// Table-level options for `create_table_query`.
///
/// Defaults: engine `InnoDB`, everything else absent.
#[derive(Debug, Clone)]
pub struct CreateTableOptions {
    /// Storage engine.
    pub engine: String,
    /// Default character set.
    pub charset: Option<String>,
    /// Default collation.
    pub collate: Option<String>,
    /// Initial auto-increment value.
    pub auto_increment_start: Option<u64>,
    /// Row format.
    pub row_format: Option<String>,
    /// Table comment.
    pub comment: Option<String>,
    /// Unique keys emitted as trailing clauses.
    pub unique_keys: Vec<IndexSpec>,
}

impl Default for CreateTableOptions {
    fn default() -> Self {
        Self {
            engine: String::from("InnoDB"),
            charset: None,
            collate: None,
            auto_increment_start: None,
            row_format: None,
            comment: None,
            unique_keys: Vec::new(),
        }
    }
}

impl QueryGenerator {
    /// Generates CREATE TABLE from an ordered (column, fragment) map.
    ///
    /// Fragments are the output of [`attribute_to_sql`](Self::attribute_to_sql)
    /// or equivalent text; `PRIMARY KEY` and `REFERENCES` are extracted
    /// from them here.
    #[must_use]
    pub fn create_table_query(
        &self,
        table: &TableRef,
        columns: &[(String, String)],
        options: &CreateTableOptions,
    ) -> String {
        let mut primary_keys: Vec<&str> = Vec::new();
        let mut foreign_keys: Vec<(&str, String)> = Vec::new();
        let mut clauses: Vec<String> = Vec::new();

        for (name, definition) in columns {
            let mut inline = definition.clone();
            // a column can be both a key and a reference; check each
            // independently
            if let Some(idx) = inline.find("REFERENCES") {
                let reference = inline.split_off(idx);
                foreign_keys.push((name.as_str(), reference));
            }
            if inline.contains("PRIMARY KEY") {
                primary_keys.push(name.as_str());
                inline = strip_keyword(&inline, "PRIMARY KEY");
            }
            clauses.push(format!("{} {}", self.quote(name), inline.trim_end()));
        }

        for key in &options.unique_keys {
            let name = key
                .name
                .clone()
                .unwrap_or_else(|| format!("uniq_{}_{}", table.name, key.columns.join("_")));
            clauses.push(format!(
                "UNIQUE {} ({})",
                self.quote(&name),
                self.quote_all(&key.columns)
            ));
        }

        if !primary_keys.is_empty() {
            let quoted: Vec<String> = primary_keys.iter().map(|pk| self.quote(pk)).collect();
            clauses.push(format!("PRIMARY KEY ({})", quoted.join(", ")));
        }

        for (column, reference) in foreign_keys {
            clauses.push(format!("FOREIGN KEY ({}) {}", self.quote(column), reference));
        }

        let mut sql = format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.quote_table(table),
            clauses.join(", ")
        );
        sql.push_str(&format!(" ENGINE={}", options.engine));
        if let Some(charset) = &options.charset {
            sql.push_str(&format!(" DEFAULT CHARSET={charset}"));
        }
        if let Some(collate) = &options.collate {
            sql.push_str(&format!(" COLLATE {collate}"));
        }
        if let Some(start) = options.auto_increment_start {
            sql.push_str(&format!(" AUTO_INCREMENT={start}"));
        }
        if let Some(row_format) = &options.row_format {
            sql.push_str(&format!(" ROW_FORMAT={row_format}"));
        }
        if let Some(comment) = &options.comment {
            sql.push_str(&format!(
                " COMMENT {}",
                SqlValue::Text(comment.clone()).to_sql_inline()
            ));
        }
        sql
    }

    /// Generates DROP TABLE.
    #[must_use]
    pub fn drop_table_query(&self, table: &TableRef) -> String {
        format!("DROP TABLE IF EXISTS {}", self.quote_table(table))
    }

    /// Generates RENAME TABLE.
    #[must_use]
    pub fn rename_table_query(&self, before: &TableRef, after: &TableRef) -> String {
        format!(
            "RENAME TABLE {} TO {}",
            self.quote_table(before),
            self.quote_table(after)
        )
    }

    /// Generates TRUNCATE TABLE.
    #[must_use]
    pub fn truncate_table_query(&self, table: &TableRef) -> String {
        format!("TRUNCATE TABLE {}", self.quote_table(table))
    }

    /// Generates ALTER TABLE .. ADD for one column.
    #[must_use]
    pub fn add_column_query(
        &self,
        table: &TableRef,
        column_name: &str,
        column: &ColumnDefinition,
    ) -> String {
        format!(
            "ALTER TABLE {} ADD {} {}",
            self.quote_table(table),
            self.quote(column_name),
            self.attribute_fragment(column, Some((table, column_name)))
        )
    }

    /// Generates ALTER TABLE .. DROP COLUMN.
    #[must_use]
    pub fn remove_column_query(&self, table: &TableRef, column: &str) -> String {
        format!(
            "ALTER TABLE {} DROP COLUMN {}",
            self.quote_table(table),
            self.quote(column)
        )
    }

    /// Generates one ALTER TABLE changing existing columns.
    ///
    /// Attributes whose definition references another table become
    /// `ADD CONSTRAINT <table>_<column>_foreign_idx FOREIGN KEY` clauses;
    /// the rest become CHANGE clauses. CHANGE clauses come first.
    #[must_use]
    pub fn change_column_query(
        &self,
        table: &TableRef,
        attributes: &[(String, String)],
    ) -> String {
        let mut changes: Vec<String> = Vec::new();
        let mut constraints: Vec<String> = Vec::new();

        for (name, definition) in attributes {
            if let Some(idx) = definition.find("REFERENCES") {
                let reference = &definition[idx..];
                let constraint = format!("{}_{}_foreign_idx", table.name, name);
                constraints.push(format!(
                    "ADD CONSTRAINT {} FOREIGN KEY ({}) {}",
                    self.quote(&constraint),
                    self.quote(name),
                    reference
                ));
            } else {
                let quoted = self.quote(name);
                changes.push(format!("CHANGE {quoted} {quoted} {definition}"));
            }
        }

        changes.extend(constraints);
        format!(
            "ALTER TABLE {} {}",
            self.quote_table(table),
            changes.join(", ")
        )
    }

    /// Generates one ALTER TABLE renaming columns.
    ///
    /// Each entry is (previous name, new name, full definition).
    #[must_use]
    pub fn rename_column_query(
        &self,
        table: &TableRef,
        renames: &[(String, String, String)],
    ) -> String {
        let clauses: Vec<String> = renames
            .iter()
            .map(|(before, after, definition)| {
                format!(
                    "CHANGE {} {} {}",
                    self.quote(before),
                    self.quote(after),
                    definition
                )
            })
            .collect();
        format!(
            "ALTER TABLE {} {}",
            self.quote_table(table),
            clauses.join(", ")
        )
    }

    /// Compiles a column definition into one inline SQL fragment.
    #[must_use]
    pub fn attribute_to_sql(&self, column: &ColumnDefinition) -> String {
        self.attribute_fragment(column, None)
    }

    /// Fragment composition in fixed order: type, NOT NULL, auto_increment,
    /// DEFAULT, UNIQUE, PRIMARY KEY, COMMENT, position, REFERENCES. In an
    /// add-column context the REFERENCES clause also needs its own
    /// `ADD CONSTRAINT` prefix, since it lands inside an ALTER TABLE.
    fn attribute_fragment(
        &self,
        column: &ColumnDefinition,
        add_column_fk: Option<(&TableRef, &str)>,
    ) -> String {
        let mut sql = column.native_type.clone();

        if !column.allow_null {
            sql.push_str(" NOT NULL");
        }
        if column.auto_increment {
            sql.push_str(" auto_increment");
        }
        if let Some(default) = &column.default_value {
            if type_allows_default(&column.native_type) {
                sql.push_str(&format!(" DEFAULT {}", default.to_sql_inline()));
            }
        }
        if column.unique {
            sql.push_str(" UNIQUE");
        }
        if column.primary_key {
            sql.push_str(" PRIMARY KEY");
        }
        if let Some(comment) = &column.comment {
            sql.push_str(&format!(
                " COMMENT {}",
                SqlValue::Text(comment.clone()).to_sql_inline()
            ));
        }
        match &column.position {
            Some(ColumnPosition::First) => sql.push_str(" FIRST"),
            Some(ColumnPosition::After(other)) => {
                sql.push_str(&format!(" AFTER {}", self.quote(other)));
            }
            None => {}
        }

        if let Some(reference) = &column.references {
            if let Some((table, column_name)) = add_column_fk {
                let constraint = format!("{}_{}_foreign_idx", table.name, column_name);
                sql.push_str(&format!(
                    ", ADD CONSTRAINT {} FOREIGN KEY ({})",
                    self.quote(&constraint),
                    self.quote(column_name)
                ));
            }
            sql.push_str(&format!(
                " REFERENCES {} ({})",
                self.quote(&reference.table),
                self.quote(reference.key_or_default())
            ));
            if let Some(action) = reference.on_delete {
                sql.push_str(&format!(" ON DELETE {}", action.as_sql()));
            }
            if let Some(action) = reference.on_update {
                sql.push_str(&format!(" ON UPDATE {}", action.as_sql()));
            }
        }

        sql
    }
}

/// Returns whether the native type may carry a DEFAULT clause.
fn type_allows_default(native_type: &str) -> bool {
    let upper = native_type.to_uppercase();
    !NO_DEFAULT_TYPES
        .iter()
        .any(|family| upper.starts_with(family))
}

/// Removes one occurrence of a keyword, collapsing the surrounding space.
fn strip_keyword(definition: &str, keyword: &str) -> String {
    definition.find(keyword).map_or_else(
        || definition.to_string(),
        |idx| {
            let before = definition[..idx].trim_end();
            let after = definition[idx + keyword.len()..].trim_start();
            if before.is_empty() || after.is_empty() {
                format!("{before}{after}")
            } else {
                format!("{before} {after}")
            }
        },
    )
}
