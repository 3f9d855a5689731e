//! SQL dialect behavior.
//!
//! Different databases have slightly different quoting and naming rules.
//! The supported dialect set is closed; a dialect is chosen once at
//! construction and carries no runtime extension point.

/// Trait for SQL dialect-specific quoting and naming behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns the token separating a schema qualifier from a table name.
    fn schema_delimiter(&self) -> &'static str {
        "."
    }

    /// Quotes an identifier, doubling any embedded quote characters.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        let mut quoted = String::with_capacity(name.len() + 2);
        quoted.push(quote);
        for c in name.chars() {
            if c == quote {
                quoted.push(quote);
            }
            quoted.push(c);
        }
        quoted.push(quote);
        quoted
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
    fn test_quote_identifier() {
        let dialect = AnsiDialect;
        assert_eq!(dialect.quote_identifier("users"), "\"users\"");
    }

    #[test]
    fn test_quote_identifier_doubles_embedded_quotes() {
        let dialect = AnsiDialect;
        assert_eq!(dialect.quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }
}
