//! Column definitions.
//!
//! A [`ColumnDefinition`] is the dialect-neutral description a generator
//! compiles into one column fragment of a DDL statement. The native type
//! is carried as already-compiled SQL text; mapping abstract types to it
//! belongs to the type compiler bound in by the caller.

use crate::value::SqlValue;

/// Foreign key referential action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    /// No action.
    NoAction,
    /// Restrict deletion/update.
    Restrict,
    /// Cascade the operation.
    Cascade,
    /// Set to NULL.
    SetNull,
    /// Set to default value.
    SetDefault,
}

impl ReferentialAction {
    /// Returns the SQL representation of the action.
    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
        }
    }
}

/// A reference to a key in another table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignReference {
    /// The referenced table name.
    pub table: String,
    /// The referenced key; `None` falls back to `id`.
    pub key: Option<String>,
    /// Action on delete.
    pub on_delete: Option<ReferentialAction>,
    /// Action on update.
    pub on_update: Option<ReferentialAction>,
}

impl ForeignReference {
    /// Creates a reference to the given table's default key.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            key: None,
            on_delete: None,
            on_update: None,
        }
    }

    /// Sets the referenced key.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the ON DELETE action.
    #[must_use]
    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    /// Sets the ON UPDATE action.
    #[must_use]
    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = Some(action);
        self
    }

    /// The referenced key, defaulting to `id`.
    #[must_use]
    pub fn key_or_default(&self) -> &str {
        self.key.as_deref().unwrap_or("id")
    }
}

/// Positional placement of a column within its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnPosition {
    /// Place the column first.
    First,
    /// Place the column after the named column.
    After(String),
}

/// A complete, dialect-neutral column description.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    /// Already-compiled native SQL type text (e.g. `VARCHAR(255)`).
    pub native_type: String,
    /// Whether the column accepts NULL.
    pub allow_null: bool,
    /// Whether the column auto-increments.
    pub auto_increment: bool,
    /// Default value, if any.
    pub default_value: Option<SqlValue>,
    /// Whether the column is unique.
    pub unique: bool,
    /// Whether the column is part of the primary key.
    pub primary_key: bool,
    /// Column comment.
    pub comment: Option<String>,
    /// Positional hint.
    pub position: Option<ColumnPosition>,
    /// Foreign key reference, if any.
    pub references: Option<ForeignReference>,
}

impl ColumnDefinition {
    /// Creates a nullable column of the given native type.
    #[must_use]
    pub fn new(native_type: impl Into<String>) -> Self {
        Self {
            native_type: native_type.into(),
            allow_null: true,
            auto_increment: false,
            default_value: None,
            unique: false,
            primary_key: false,
            comment: None,
            position: None,
            references: None,
        }
    }

    /// Marks the column as NOT NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.allow_null = false;
        self
    }

    /// Marks the column as auto-incrementing.
    #[must_use]
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<SqlValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Marks the column as unique.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Marks the column as a primary key.
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Sets the column comment.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Places the column first in the table.
    #[must_use]
    pub fn first(mut self) -> Self {
        self.position = Some(ColumnPosition::First);
        self
    }

    /// Places the column after the named column.
    #[must_use]
    pub fn after(mut self, column: impl Into<String>) -> Self {
        self.position = Some(ColumnPosition::After(column.into()));
        self
    }

    /// Attaches a foreign key reference.
    #[must_use]
    pub fn references(mut self, reference: ForeignReference) -> Self {
        self.references = Some(reference);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let column = ColumnDefinition::new("INTEGER");
        assert!(column.allow_null);
        assert!(!column.primary_key);
        assert!(column.references.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let column = ColumnDefinition::new("VARCHAR(255)")
            .not_null()
            .unique()
            .default_value("anonymous")
            .after("id");
        assert!(!column.allow_null);
        assert!(column.unique);
        assert_eq!(
            column.default_value,
            Some(SqlValue::Text("anonymous".into()))
        );
        assert_eq!(column.position, Some(ColumnPosition::After("id".into())));
    }

    #[test]
    fn test_reference_key_default() {
        let reference = ForeignReference::new("owners");
        assert_eq!(reference.key_or_default(), "id");
        let reference = reference.key("uuid");
        assert_eq!(reference.key_or_default(), "uuid");
    }
}
