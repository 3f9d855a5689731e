//! JSON expression classification.
//!
//! Decides whether a path argument is already a compiled JSON expression
//! (and must be used verbatim by the accessor compiler) or a plain dotted
//! path, and rejects malformed expressions.
//!
//! The scanner walks the input left to right, trying at each position, in
//! priority order: a JSON function name, a JSON operator, then a generic
//! token (quoted run, word run, or one allowed punctuation character).
//! Parenthesis counts are tracked across generic tokens; a semicolon
//! invalidates the expression and stops the scan. The balance rule is a
//! deliberately conservative heuristic, not a full expression grammar:
//! it fails closed on some valid nested constructs.

use crate::error::QueryError;

/// JSON operator tokens, longest first so prefixes don't shadow them.
const JSON_OPERATORS: &[&str] = &["->>", "->", "@>", "<@", "?|", "?&", "?", "||", "#-"];

/// Punctuation accepted as a generic token.
const PUNCTUATION: &[char] = &['(', ')', '.', ',', ';', '+', '-'];

/// Classifies an expression string.
///
/// Returns `Ok(true)` when the input contains a JSON function or operator
/// (use it verbatim), `Ok(false)` when it is a plain path, and
/// `Err(QueryError::InvalidJsonExpression)` when a JSON construct appears
/// inside a malformed expression (unbalanced parentheses or an embedded
/// semicolon).
pub fn is_json_expression(input: &str) -> Result<bool, QueryError> {
    let mut scanner = Scanner::new(input);
    scanner.run();

    let malformed =
        scanner.open_parens != scanner.close_parens || scanner.saw_semicolon;
    if malformed {
        if scanner.has_json_construct {
            return Err(QueryError::InvalidJsonExpression {
                expression: input.to_string(),
            });
        }
        return Ok(false);
    }
    Ok(scanner.has_json_construct)
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    open_parens: usize,
    close_parens: usize,
    has_json_construct: bool,
    saw_semicolon: bool,
}

impl<'a> Scanner<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            open_parens: 0,
            close_parens: 0,
            has_json_construct: false,
            saw_semicolon: false,
        }
    }

    fn run(&mut self) {
        loop {
            self.skip_whitespace();
            if self.pos >= self.input.len() {
                break;
            }
            if self.scan_json_function() {
                continue;
            }
            if self.scan_json_operator() {
                continue;
            }
            if !self.scan_generic_token() {
                // nothing recognizable at this position
                break;
            }
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Matches a JSON function name: up to two `lower_`-style prefixes, the
    /// root token `json` or `jsonb`, up to two `_lower` suffixes, followed
    /// immediately by `(`. On match the cursor advances to the opening
    /// parenthesis so the generic token rule still counts it.
    fn scan_json_function(&mut self) -> bool {
        let rest = self.remaining();
        let name_len = rest
            .find(|c: char| !(c.is_ascii_alphabetic() || c == '_'))
            .unwrap_or(rest.len());
        if name_len == 0 || rest[name_len..].chars().next() != Some('(') {
            return false;
        }

        let name = &rest[..name_len];
        let parts: Vec<&str> = name.split('_').collect();
        if parts.iter().any(|part| part.is_empty()) {
            return false;
        }
        let root = parts.iter().position(|part| {
            let lower = part.to_ascii_lowercase();
            lower == "json" || lower == "jsonb"
        });
        let Some(root) = root else {
            return false;
        };
        if root > 2 || parts.len() - root - 1 > 2 {
            return false;
        }

        self.pos += name_len;
        self.has_json_construct = true;
        true
    }

    fn scan_json_operator(&mut self) -> bool {
        let rest = self.remaining();
        for operator in JSON_OPERATORS {
            if rest.starts_with(operator) {
                self.pos += operator.len();
                self.has_json_construct = true;
                return true;
            }
        }
        false
    }

    /// Consumes one generic token: a quoted run, a word/digit/space run, or
    /// one allowed punctuation character. Returns `false` when scanning
    /// must stop.
    fn scan_generic_token(&mut self) -> bool {
        let Some(first) = self.peek() else {
            return false;
        };
        match first {
            '\'' | '"' | '`' => self.scan_quoted_run(first),
            c if c.is_alphanumeric() || c == '_' || c.is_whitespace() => {
                while let Some(c) = self.peek() {
                    if !(c.is_alphanumeric() || c == '_' || c.is_whitespace()) {
                        break;
                    }
                    self.pos += c.len_utf8();
                }
                true
            }
            c if PUNCTUATION.contains(&c) => {
                match c {
                    '(' => self.open_parens += 1,
                    ')' => self.close_parens += 1,
                    ';' => {
                        self.saw_semicolon = true;
                        return false;
                    }
                    _ => {}
                }
                self.pos += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Consumes a quoted run with doubled-quote escaping. An unterminated
    /// run stops the scan.
    fn scan_quoted_run(&mut self, quote: char) -> bool {
        let start = self.pos;
        self.pos += quote.len_utf8();
        while let Some(c) = self.peek() {
            self.pos += c.len_utf8();
            if c == quote {
                if self.peek() == Some(quote) {
                    self.pos += quote.len_utf8();
                } else {
                    return true;
                }
            }
        }
        self.pos = start;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_is_not_json() {
        assert!(!is_json_expression("profile.id").unwrap());
        assert!(!is_json_expression("data.employment.0").unwrap());
    }

    #[test]
    fn test_json_function_detected() {
        assert!(is_json_expression("json_extract(data, '$.id')").unwrap());
        assert!(is_json_expression("JSON_UNQUOTE(json_extract(data, '$.id'))").unwrap());
        assert!(is_json_expression("jsonb_typeof(col)").unwrap());
    }

    #[test]
    fn test_json_operator_detected() {
        assert!(is_json_expression("data->>'$.id'").unwrap());
        assert!(is_json_expression("data->'$.id'").unwrap());
        assert!(is_json_expression("data @> '{\"a\": 1}'").unwrap());
    }

    #[test]
    fn test_non_json_function_is_plain() {
        assert!(!is_json_expression("lower(name)").unwrap());
        // more than two prefixes in front of the root token
        assert!(!is_json_expression("a_b_c_json_extract(data)").unwrap());
    }

    #[test]
    fn test_semicolon_with_json_construct_fails() {
        let result = is_json_expression("json_extract(data, '$.id'); DROP TABLE users");
        assert!(matches!(
            result,
            Err(QueryError::InvalidJsonExpression { .. })
        ));
    }

    #[test]
    fn test_unbalanced_parens_with_json_construct_fails() {
        let result = is_json_expression("json_extract(data, '$.id'");
        assert!(matches!(
            result,
            Err(QueryError::InvalidJsonExpression { .. })
        ));
    }

    #[test]
    fn test_malformed_without_json_construct_is_plain() {
        assert!(!is_json_expression("lower(name").unwrap());
    }

    #[test]
    fn test_quoted_semicolon_is_harmless() {
        assert!(is_json_expression("json_extract(data, '$.a;b')").unwrap());
    }

    #[test]
    fn test_doubled_quotes_inside_run() {
        assert!(is_json_expression("json_extract(data, 'it''s')").unwrap());
    }
}
