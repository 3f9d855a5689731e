//! Index specifications.

use crate::names::underscored;

/// An index over one or more columns.
///
/// The name may be left out, in which case dialects derive it from the
/// table and column names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSpec {
    /// Explicit index name.
    pub name: Option<String>,
    /// Indexed columns, in order.
    pub columns: Vec<String>,
    /// Whether the index enforces uniqueness.
    pub unique: bool,
}

impl IndexSpec {
    /// Creates an unnamed index over the given columns.
    #[must_use]
    pub fn on<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            columns: columns.into_iter().map(Into::into).collect(),
            unique: false,
        }
    }

    /// Creates an index referred to by name alone.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            columns: Vec::new(),
            unique: false,
        }
    }

    /// Sets an explicit name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Marks the index as unique.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// The explicit name, or the underscored join of table and columns.
    #[must_use]
    pub fn name_for(&self, table: &str) -> String {
        self.name.clone().unwrap_or_else(|| {
            underscored(std::iter::once(table).chain(self.columns.iter().map(String::as_str)))
        })
    }
}
