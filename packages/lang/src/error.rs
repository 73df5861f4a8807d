use thiserror::Error;

/// A malformed construct in the script language.
///
/// Every variant embeds the offending text so the caller can report it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Not a proper variable name: {0}")]
    VariableName(String),

    #[error("Not a valid expression: {0}")]
    Expression(String),

    #[error("Unterminated command substitution: {0}")]
    UnterminatedSubstitution(String),

    #[error("For loop call must be in form 'for $var in expression', got: {0}")]
    ForHeader(String),

    #[error("Can't expand {type_name} to two control variables: {expression}")]
    Destructure {
        type_name: &'static str,
        expression: String,
    },

    #[error("Max two variables allowed on left side, got: {0}")]
    TooManyTargets(String),

    #[error("Not an if clause: {0}")]
    IfHeader(String),
}

pub type SyntaxResult<T> = Result<T, SyntaxError>;
