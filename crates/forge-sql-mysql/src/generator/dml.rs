//! DML statement generation.

use forge_sql_core::condition::Cond;
use forge_sql_core::table::TableRef;
use forge_sql_core::value::SqlValue;

use super::QueryGenerator;

/// Options for `insert_query`.
#[derive(Debug, Clone, Default)]
pub struct InsertOptions {
    /// Emit `INSERT IGNORE`.
    pub ignore: bool,
    /// Pre-built `ON DUPLICATE KEY UPDATE` fragment.
    pub on_duplicate: Option<String>,
}

/// Options for `delete_query`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteOptions {
    /// Cap on the number of deleted rows.
    pub limit: Option<u64>,
}

impl QueryGenerator {
    /// Generates INSERT for one row of (column, value) pairs.
    #[must_use]
    pub fn insert_query(
        &self,
        table: &TableRef,
        row: &[(String, SqlValue)],
        options: &InsertOptions,
    ) -> String {
        let columns: Vec<String> = row.iter().map(|(column, _)| self.quote(column)).collect();
        let values: Vec<String> = row
            .iter()
            .map(|(_, value)| value.to_sql_inline())
            .collect();
        let mut sql = format!(
            "INSERT {}INTO {} ({}) VALUES ({})",
            if options.ignore { "IGNORE " } else { "" },
            self.quote_table(table),
            columns.join(", "),
            values.join(", ")
        );
        if let Some(update) = &options.on_duplicate {
            sql.push_str(&format!(" ON DUPLICATE KEY UPDATE {update}"));
        }
        sql
    }

    /// Generates an upsert: INSERT with an `ON DUPLICATE KEY UPDATE`
    /// fragment built from the update column list as `col=VALUES(col)`
    /// pairs.
    #[must_use]
    pub fn upsert_query(
        &self,
        table: &TableRef,
        insert_row: &[(String, SqlValue)],
        update_columns: &[String],
    ) -> String {
        let pairs: Vec<String> = update_columns
            .iter()
            .map(|column| {
                let quoted = self.quote(column);
                format!("{quoted}=VALUES({quoted})")
            })
            .collect();
        let options = InsertOptions {
            ignore: false,
            on_duplicate: Some(pairs.join(",")),
        };
        self.insert_query(table, insert_row, &options)
    }

    /// Generates DELETE with an optional WHERE condition and LIMIT.
    #[must_use]
    pub fn delete_query(
        &self,
        table: &TableRef,
        condition: Option<&Cond>,
        options: DeleteOptions,
    ) -> String {
        let mut sql = format!("DELETE FROM {}", self.quote_table(table));
        if let Some(condition) = condition {
            sql.push_str(&format!(" WHERE {}", condition.to_sql(self.dialect())));
        }
        if let Some(limit) = options.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        sql
    }
}

#[cfg(test)]
mod tests {
    use forge_sql_core::condition::col;

    use super::*;

    fn generator() -> QueryGenerator {
        QueryGenerator::new()
    }

    #[test]
    fn test_insert() {
        let sql = generator().insert_query(
            &TableRef::new("users"),
            &[
                ("name".to_string(), SqlValue::Text("alice".into())),
                ("age".to_string(), SqlValue::Int(30)),
            ],
            &InsertOptions::default(),
        );
        assert_eq!(
            sql,
            "INSERT INTO `users` (`name`, `age`) VALUES ('alice', 30)"
        );
    }

    #[test]
    fn test_insert_ignore() {
        let sql = generator().insert_query(
            &TableRef::new("users"),
            &[("name".to_string(), SqlValue::Text("alice".into()))],
            &InsertOptions {
                ignore: true,
                on_duplicate: None,
            },
        );
        assert!(sql.starts_with("INSERT IGNORE INTO"));
    }

    #[test]
    fn test_upsert_builds_values_pairs() {
        let sql = generator().upsert_query(
            &TableRef::new("users"),
            &[
                ("id".to_string(), SqlValue::Int(1)),
                ("name".to_string(), SqlValue::Text("alice".into())),
            ],
            &["name".to_string(), "updated_at".to_string()],
        );
        assert_eq!(
            sql,
            "INSERT INTO `users` (`id`, `name`) VALUES (1, 'alice') \
             ON DUPLICATE KEY UPDATE `name`=VALUES(`name`),`updated_at`=VALUES(`updated_at`)"
        );
    }

    #[test]
    fn test_delete_plain() {
        let sql = generator().delete_query(
            &TableRef::new("sessions"),
            None,
            DeleteOptions::default(),
        );
        assert_eq!(sql, "DELETE FROM `sessions`");
    }

    #[test]
    fn test_delete_with_condition_and_limit() {
        let condition = col("expired").eq(true);
        let sql = generator().delete_query(
            &TableRef::new("sessions"),
            Some(&condition),
            DeleteOptions { limit: Some(10) },
        );
        assert_eq!(
            sql,
            "DELETE FROM `sessions` WHERE `expired` = TRUE LIMIT 10"
        );
    }
}
