//! Stored routine statement generation.
//!
//! All validation happens before any text is produced. Routine renames
//! are refused outright: MySQL has no native rename syntax, and renaming
//! through the system catalogs would require grant-table edits this
//! generator will not attempt.

use forge_sql_core::routine::{ParamDirection, RoutineDefinition, RoutineParam};

use super::QueryGenerator;
use crate::error::QueryError;

impl QueryGenerator {
    /// Generates CREATE FUNCTION.
    ///
    /// Requires name, return type, language, and body; the error names
    /// the full expected set when any of them is missing.
    pub fn create_function_query(
        &self,
        routine: &RoutineDefinition,
    ) -> Result<String, QueryError> {
        if routine.name.is_empty()
            || routine.returns.is_empty()
            || routine.language.is_empty()
            || routine.body.is_empty()
        {
            return Err(QueryError::MissingParameters {
                operation: "createFunction",
                expected: "functionName, returnType, language and body",
            });
        }
        let params = self.expand_function_param_list(&routine.params)?;

        let mut sql = format!(
            "CREATE FUNCTION {}({}) RETURNS {}",
            self.quote(&routine.name),
            params,
            routine.returns
        );
        for option in &routine.options {
            sql.push('\n');
            sql.push_str(option);
        }
        sql.push_str("\nBEGIN\n");
        for line in routine.body.lines() {
            sql.push_str("    ");
            sql.push_str(line);
            sql.push('\n');
        }
        sql.push_str("END");
        Ok(sql)
    }

    /// Generates DROP FUNCTION IF EXISTS.
    pub fn drop_function_query(&self, function_name: &str) -> Result<String, QueryError> {
        if function_name.is_empty() {
            return Err(QueryError::MissingParameter {
                name: "functionName",
            });
        }
        Ok(format!(
            "DROP FUNCTION IF EXISTS {}",
            self.quote(function_name)
        ))
    }

    /// Always fails: the dialect has no native routine rename.
    pub fn rename_function_query(
        &self,
        _old_name: &str,
        _new_name: &str,
    ) -> Result<String, QueryError> {
        Err(QueryError::UnsupportedOperation {
            operation: "renameFunction",
        })
    }

    /// Compiles a routine parameter list.
    ///
    /// Every parameter must carry a type. The direction appears only when
    /// it is not IN (the implicit default); the name appears when present.
    pub fn expand_function_param_list(
        &self,
        params: &[RoutineParam],
    ) -> Result<String, QueryError> {
        let mut rendered: Vec<String> = Vec::with_capacity(params.len());
        for (position, param) in params.iter().enumerate() {
            let Some(native_type) = &param.native_type else {
                return Err(QueryError::UntypedParameter {
                    parameter: param
                        .name
                        .clone()
                        .unwrap_or_else(|| format!("#{}", position + 1)),
                });
            };
            let mut fragment = String::new();
            if param.direction != ParamDirection::In {
                fragment.push_str(param.direction.as_sql());
                fragment.push(' ');
            }
            if let Some(name) = &param.name {
                fragment.push_str(name);
                fragment.push(' ');
            }
            fragment.push_str(native_type);
            rendered.push(fragment);
        }
        Ok(rendered.join(", "))
    }
}
