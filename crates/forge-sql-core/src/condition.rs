//! WHERE-condition trees.
//!
//! A small owned condition tree compiled to inline SQL text. Statement
//! generators delegate their WHERE clauses here so predicate assembly and
//! quoting stay in one place.

use crate::dialect::Dialect;
use crate::value::SqlValue;

/// A compiled WHERE condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Cond {
    /// `column = value`
    Eq(String, SqlValue),
    /// `column != value`
    Ne(String, SqlValue),
    /// `column > value`
    Gt(String, SqlValue),
    /// `column >= value`
    Gte(String, SqlValue),
    /// `column < value`
    Lt(String, SqlValue),
    /// `column <= value`
    Lte(String, SqlValue),
    /// `column LIKE pattern`
    Like(String, String),
    /// `column IN (values...)`
    In(String, Vec<SqlValue>),
    /// `column IS NULL`
    IsNull(String),
    /// `column IS NOT NULL`
    NotNull(String),
    /// All sub-conditions hold.
    And(Vec<Cond>),
    /// Any sub-condition holds.
    Or(Vec<Cond>),
}

/// Entry point for building conditions: `col("active").eq(true)`.
#[must_use]
pub fn col(name: impl Into<String>) -> ColumnExpr {
    ColumnExpr(name.into())
}

/// A column awaiting a comparison.
#[derive(Debug, Clone)]
pub struct ColumnExpr(String);

impl ColumnExpr {
    /// `column = value`
    #[must_use]
    pub fn eq(self, value: impl Into<SqlValue>) -> Cond {
        Cond::Eq(self.0, value.into())
    }

    /// `column != value`
    #[must_use]
    pub fn ne(self, value: impl Into<SqlValue>) -> Cond {
        Cond::Ne(self.0, value.into())
    }

    /// `column > value`
    #[must_use]
    pub fn gt(self, value: impl Into<SqlValue>) -> Cond {
        Cond::Gt(self.0, value.into())
    }

    /// `column >= value`
    #[must_use]
    pub fn gte(self, value: impl Into<SqlValue>) -> Cond {
        Cond::Gte(self.0, value.into())
    }

    /// `column < value`
    #[must_use]
    pub fn lt(self, value: impl Into<SqlValue>) -> Cond {
        Cond::Lt(self.0, value.into())
    }

    /// `column <= value`
    #[must_use]
    pub fn lte(self, value: impl Into<SqlValue>) -> Cond {
        Cond::Lte(self.0, value.into())
    }

    /// `column LIKE pattern`
    #[must_use]
    pub fn like(self, pattern: impl Into<String>) -> Cond {
        Cond::Like(self.0, pattern.into())
    }

    /// `column IN (values...)`
    #[must_use]
    pub fn is_in<I, V>(self, values: I) -> Cond
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlValue>,
    {
        Cond::In(self.0, values.into_iter().map(Into::into).collect())
    }

    /// `column IS NULL`
    #[must_use]
    pub fn is_null(self) -> Cond {
        Cond::IsNull(self.0)
    }

    /// `column IS NOT NULL`
    #[must_use]
    pub fn not_null(self) -> Cond {
        Cond::NotNull(self.0)
    }
}

impl Cond {
    /// Combines with another condition under AND.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::And(mut conditions) => {
                conditions.push(other);
                Self::And(conditions)
            }
            _ => Self::And(vec![self, other]),
        }
    }

    /// Combines with another condition under OR.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Or(mut conditions) => {
                conditions.push(other);
                Self::Or(conditions)
            }
            _ => Self::Or(vec![self, other]),
        }
    }

    /// Compiles the condition to SQL text using the dialect's quoting.
    #[must_use]
    pub fn to_sql(&self, dialect: &dyn Dialect) -> String {
        match self {
            Self::Eq(column, value) => {
                format!(
                    "{} = {}",
                    dialect.quote_identifier(column),
                    value.to_sql_inline()
                )
            }
            Self::Ne(column, value) => {
                format!(
                    "{} != {}",
                    dialect.quote_identifier(column),
                    value.to_sql_inline()
                )
            }
            Self::Gt(column, value) => {
                format!(
                    "{} > {}",
                    dialect.quote_identifier(column),
                    value.to_sql_inline()
                )
            }
            Self::Gte(column, value) => {
                format!(
                    "{} >= {}",
                    dialect.quote_identifier(column),
                    value.to_sql_inline()
                )
            }
            Self::Lt(column, value) => {
                format!(
                    "{} < {}",
                    dialect.quote_identifier(column),
                    value.to_sql_inline()
                )
            }
            Self::Lte(column, value) => {
                format!(
                    "{} <= {}",
                    dialect.quote_identifier(column),
                    value.to_sql_inline()
                )
            }
            Self::Like(column, pattern) => {
                format!(
                    "{} LIKE {}",
                    dialect.quote_identifier(column),
                    SqlValue::Text(pattern.clone()).to_sql_inline()
                )
            }
            Self::In(column, values) => {
                let rendered: Vec<String> =
                    values.iter().map(SqlValue::to_sql_inline).collect();
                format!(
                    "{} IN ({})",
                    dialect.quote_identifier(column),
                    rendered.join(", ")
                )
            }
            Self::IsNull(column) => {
                format!("{} IS NULL", dialect.quote_identifier(column))
            }
            Self::NotNull(column) => {
                format!("{} IS NOT NULL", dialect.quote_identifier(column))
            }
            Self::And(conditions) => Self::join(conditions, " AND ", dialect),
            Self::Or(conditions) => Self::join(conditions, " OR ", dialect),
        }
    }

    fn join(conditions: &[Self], separator: &str, dialect: &dyn Dialect) -> String {
        conditions
            .iter()
            .map(|condition| match condition {
                Self::And(_) | Self::Or(_) => format!("({})", condition.to_sql(dialect)),
                _ => condition.to_sql(dialect),
            })
            .collect::<Vec<_>>()
            .join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AnsiDialect;

    impl Dialect for AnsiDialect {
        fn name(&self) -> &'static str {
            "ansi"
        }
    }

    #[test]
    fn test_simple_comparison() {
        let condition = col("active").eq(true);
        assert_eq!(condition.to_sql(&AnsiDialect), "\"active\" = TRUE");
    }

    #[test]
    fn test_and_chain() {
        let condition = col("active").eq(true).and(col("age").gte(18));
        assert_eq!(
            condition.to_sql(&AnsiDialect),
            "\"active\" = TRUE AND \"age\" >= 18"
        );
    }

    #[test]
    fn test_nested_or_is_parenthesized() {
        let condition = col("a")
            .eq(1)
            .and(col("b").eq(2).or(col("c").eq(3)));
        assert_eq!(
            condition.to_sql(&AnsiDialect),
            "\"a\" = 1 AND (\"b\" = 2 OR \"c\" = 3)"
        );
    }

    #[test]
    fn test_in_list() {
        let condition = col("id").is_in([1, 2, 3]);
        assert_eq!(condition.to_sql(&AnsiDialect), "\"id\" IN (1, 2, 3)");
    }

    #[test]
    fn test_text_values_are_escaped() {
        let condition = col("name").eq("O'Brien");
        assert_eq!(condition.to_sql(&AnsiDialect), "\"name\" = 'O''Brien'");
    }
}
