//! Derived-name helpers.

/// Snake-cases each part and joins them with underscores.
///
/// Used for index and constraint names derived from table/column names,
/// e.g. `("Users", "firstName")` becomes `users_first_name`.
#[must_use]
pub fn underscored<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .map(|part| snake_case(part.as_ref()))
        .collect::<Vec<_>>()
        .join("_")
}

fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_lower = false;
    for c in name.chars() {
        if c.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    out
}
