//! Table references.

use crate::dialect::Dialect;

/// A possibly schema-qualified table reference.
///
/// Identity is the (schema, name) pair. References are immutable value
/// objects constructed per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    /// Table name.
    pub name: String,
    /// Optional schema qualifier.
    pub schema: Option<String>,
    /// Overrides the dialect's schema delimiter when set.
    pub schema_delimiter: Option<String>,
}

impl TableRef {
    /// Creates an unqualified table reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            schema_delimiter: None,
        }
    }

    /// Creates a schema-qualified table reference.
    #[must_use]
    pub fn with_schema(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: Some(schema.into()),
            schema_delimiter: None,
        }
    }

    /// Overrides the schema delimiter.
    #[must_use]
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.schema_delimiter = Some(delimiter.into());
        self
    }

    /// Renders the quoted, qualified form for the given dialect.
    #[must_use]
    pub fn quoted(&self, dialect: &dyn Dialect) -> String {
        match &self.schema {
            Some(schema) => {
                let delimiter = self
                    .schema_delimiter
                    .as_deref()
                    .unwrap_or_else(|| dialect.schema_delimiter());
                format!(
                    "{}{}{}",
                    dialect.quote_identifier(schema),
                    delimiter,
                    dialect.quote_identifier(&self.name)
                )
            }
            None => dialect.quote_identifier(&self.name),
        }
    }
}

impl From<&str> for TableRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TableRef {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
