//! Structured-value accessor compilation.
//!
//! MySQL stores structured values as JSON and extracts sub-values with
//! `column->>'$.path'`. The compiler accepts either a condition tree
//! (sub-path to value) or a single dotted path; paths that the tokenizer
//! classifies as already-compiled JSON expressions are used verbatim.

use forge_sql_core::value::SqlValue;

use super::QueryGenerator;
use crate::error::QueryError;
use crate::tokenizer;

impl QueryGenerator {
    /// Compiles a condition tree into an AND-joined extraction predicate.
    ///
    /// Each entry's path starts with the column name; the rest of the path
    /// selects into the stored document:
    /// `` `col`->>'$.sub.path' = 'value' ``.
    #[must_use]
    pub fn json_condition_query(&self, conditions: &[(String, SqlValue)]) -> String {
        conditions
            .iter()
            .map(|(path, value)| {
                let (column, sub_path) = path
                    .split_once('.')
                    .unwrap_or((path.as_str(), ""));
                format!(
                    "{}->>'$.{}' = '{}'",
                    self.quote(column),
                    sub_path,
                    value.to_plain_text()
                )
            })
            .collect::<Vec<_>>()
            .join(" and ")
    }

    /// Compiles a single path expression, optionally comparing the
    /// extracted value.
    ///
    /// Already-compiled JSON expressions pass through verbatim. Plain
    /// paths get their numeric steps normalized to bracket indexes
    /// (`a.0.b` becomes `a[0].b`), the leading segment becomes the column,
    /// and the rest becomes the `$` path.
    pub fn json_path_query(
        &self,
        path: &str,
        value: Option<&SqlValue>,
    ) -> Result<String, QueryError> {
        let mut sql = if tokenizer::is_json_expression(path)? {
            path.to_string()
        } else {
            let normalized = normalize_indexes(path);
            let mut segments: Vec<String> =
                normalized.split('.').map(String::from).collect();
            let mut column = segments.remove(0);
            let mut starts_with_dot = true;
            if let Some(idx) = column.find('[') {
                // a leading segment ending in [N] is column-plus-index
                segments.insert(0, column[idx..].to_string());
                column.truncate(idx);
                starts_with_dot = false;
            }
            let sub_path = segments.join(".");
            if sub_path.is_empty() {
                format!("{}->>'$'", self.quote(&column))
            } else {
                format!(
                    "{}->>'${}{}'",
                    self.quote(&column),
                    if starts_with_dot { "." } else { "" },
                    sub_path
                )
            }
        };

        if let Some(value) = value {
            sql.push_str(&format!(" = {}", value.to_sql_inline()));
        }
        Ok(sql)
    }

    /// Remaps a requested cast target type to one MySQL accepts.
    ///
    /// Booleans cannot be cast directly inside a JSON value, so they go
    /// through `char` there and `decimal` elsewhere.
    #[must_use]
    pub fn cast_type(&self, requested: &str, within_json: bool) -> String {
        let lower = requested.to_lowercase();
        if lower.contains("timestamp") {
            String::from("datetime")
        } else if within_json && lower.contains("boolean") {
            String::from("char")
        } else if lower.contains("double precision")
            || lower.contains("boolean")
            || lower.contains("integer")
        {
            String::from("decimal")
        } else if lower.contains("text") {
            String::from("char")
        } else {
            requested.to_string()
        }
    }
}

/// Converts `.N.` steps to `[N].` and a trailing `.N` to `[N]`.
fn normalize_indexes(path: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    for (position, segment) in path.split('.').enumerate() {
        let numeric = !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit());
        match out.last_mut() {
            Some(last) if numeric && position > 0 => {
                last.push('[');
                last.push_str(segment);
                last.push(']');
            }
            _ => out.push(segment.to_string()),
        }
    }
    out.join(".")
}
