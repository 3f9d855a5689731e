//! Stored routine definitions.

/// Direction of a routine parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParamDirection {
    /// Input parameter (the implicit default).
    #[default]
    In,
    /// Output parameter.
    Out,
    /// Input/output parameter.
    InOut,
}

impl ParamDirection {
    /// Returns the SQL spelling of the direction.
    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
            Self::InOut => "INOUT",
        }
    }
}

/// One routine parameter.
///
/// The type is deliberately optional at the data-model level so that a
/// missing type is representable; generators reject it as a validation
/// failure rather than defaulting it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutineParam {
    /// Parameter name, if any.
    pub name: Option<String>,
    /// Native SQL type text. Required by validation.
    pub native_type: Option<String>,
    /// Parameter direction; IN when unspecified.
    pub direction: ParamDirection,
}

impl RoutineParam {
    /// Creates an unnamed IN parameter of the given type.
    #[must_use]
    pub fn new(native_type: impl Into<String>) -> Self {
        Self {
            name: None,
            native_type: Some(native_type.into()),
            direction: ParamDirection::In,
        }
    }

    /// Sets the parameter name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the parameter direction.
    #[must_use]
    pub fn direction(mut self, direction: ParamDirection) -> Self {
        self.direction = direction;
        self
    }
}

/// A complete stored routine description.
///
/// Empty required fields model absent arguments; generators validate them
/// before producing any text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutineDefinition {
    /// Routine name.
    pub name: String,
    /// Ordered parameter list.
    pub params: Vec<RoutineParam>,
    /// Return type text.
    pub returns: String,
    /// Implementation language.
    pub language: String,
    /// Routine body text.
    pub body: String,
    /// Dialect-specific option lines (e.g. `DETERMINISTIC`).
    pub options: Vec<String>,
}

impl RoutineDefinition {
    /// Creates a routine definition with the required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        returns: impl Into<String>,
        language: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: returns.into(),
            language: language.into(),
            body: body.into(),
            options: Vec::new(),
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn param(mut self, param: RoutineParam) -> Self {
        self.params.push(param);
        self
    }

    /// Appends a dialect-specific option line.
    #[must_use]
    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_default_is_in() {
        assert_eq!(RoutineParam::new("INTEGER").direction, ParamDirection::In);
    }

    #[test]
    fn test_builder() {
        let routine = RoutineDefinition::new("add_one", "INTEGER", "sql", "RETURN n + 1;")
            .param(RoutineParam::new("INTEGER").named("n"))
            .option("DETERMINISTIC");
        assert_eq!(routine.params.len(), 1);
        assert_eq!(routine.options, vec!["DETERMINISTIC".to_string()]);
    }
}
