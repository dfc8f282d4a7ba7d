use std::sync::LazyLock;

use regex::Regex;

use crate::error::BuildError;

use super::{Field, FieldType};

/// `name`, `relation::name`, or positional `$0`.
static FIELD_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\$\d+|[A-Za-z][A-Za-z0-9_]*(?:::[A-Za-z][A-Za-z0-9_]*)*)$")
        .expect("field name pattern is valid")
});

/// Reference to a field of the current relation.
///
/// A simple expression: it is never parenthesized when nested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    name: String,
    field_type: FieldType,
}

impl Reference {
    /// Untyped reference; fields with no declared schema are `bytearray`.
    pub fn new(name: impl Into<String>) -> Result<Self, BuildError> {
        Self::typed(name, FieldType::Bytearray)
    }

    pub fn typed(name: impl Into<String>, field_type: FieldType) -> Result<Self, BuildError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BuildError::Empty { what: "field name" });
        }
        if !FIELD_NAME.is_match(&name) {
            return Err(BuildError::InvalidFieldName(name));
        }
        Ok(Reference { name, field_type })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Field for Reference {
    fn render(&self) -> String {
        self.name.clone()
    }

    fn field_type(&self) -> FieldType {
        self.field_type
    }

    fn is_simple(&self) -> bool {
        true
    }
}
