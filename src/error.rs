//! Error types shared by the expression and statement builders.

/// Errors raised while building an expression or statement.
///
/// Every check happens at construction time, so a tree that was built
/// successfully always renders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A required piece of text was empty or whitespace only
    #[error("{what} must not be empty")]
    Empty { what: &'static str },

    /// Relation alias is not a valid Pig Latin identifier
    #[error("invalid relation alias: {0:?}")]
    InvalidAlias(String),

    /// Field reference is neither an identifier nor a positional `$N`
    #[error("invalid field name: {0:?}")]
    InvalidFieldName(String),

    /// Function name is not a valid (optionally package-qualified) identifier
    #[error("invalid function name: {0:?}")]
    InvalidFunctionName(String),

    /// Binary operator outside the supported set
    #[error("unknown binary operator: {0:?}")]
    InvalidOperator(String),

    /// Type tag outside the supported set
    #[error("unknown field type: {0}")]
    UnknownType(String),
}

/// Errors raised by a storage function resolver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No storage function is registered under this name
    #[error("unresolved storage function: {0}")]
    Unresolved(String),
}
