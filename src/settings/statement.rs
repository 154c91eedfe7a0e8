use thiserror::Error;

/// Why a piece of settings text could not be read as a `key=value` statement.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Error)]
pub enum StatementError {
    /// The candidate contains no `=`.
    #[error("statement has no '='")]
    MissingEquals,
    /// The candidate contains more than one `=`.
    #[error("statement has more than one '='")]
    ExtraEquals,
    /// Nothing precedes the `=`.
    #[error("statement has an empty variable")]
    EmptyVariable,
    /// Nothing follows the `=`.
    #[error("statement has an empty value")]
    EmptyValue,
}

/// One `key=value` assertion read from settings text.
#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct Statement {
    target_variable: String,
    target_value: String,
}

impl Statement {
    /// Creates a statement, failing if either side is empty.
    pub fn new<V: Into<String>, W: Into<String>>(
        target_variable: V,
        target_value: W,
    ) -> Result<Self, StatementError> {
        let target_variable = target_variable.into();
        let target_value = target_value.into();
        if target_variable.is_empty() {
            return Err(StatementError::EmptyVariable);
        }
        if target_value.is_empty() {
            return Err(StatementError::EmptyValue);
        }
        Ok(Self {
            target_variable,
            target_value,
        })
    }

    /// Splits a candidate on its only `=` into a statement.
    pub fn parse(candidate: &str) -> Result<Self, StatementError> {
        let (variable, value) = candidate.split_once('=').ok_or(StatementError::MissingEquals)?;
        if value.contains('=') {
            return Err(StatementError::ExtraEquals);
        }
        Self::new(variable, value)
    }

    /// The name of the field this statement assigns.
    pub fn target_variable(&self) -> &str {
        &self.target_variable
    }

    /// The token assigned to the field.
    pub fn target_value(&self) -> &str {
        &self.target_value
    }
}
