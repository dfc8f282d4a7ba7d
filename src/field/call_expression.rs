use std::sync::LazyLock;

use regex::Regex;

use crate::error::BuildError;

use super::{Field, FieldOptions, FieldType};

/// Built-in (`COUNT`) or package-qualified UDF (`com.example.Upper`) name.
static FUNCTION_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("function name pattern is valid")
});

/// Function application: `FUNC(arg1, arg2)`.
///
/// Arguments are comma-delimited, so they are rendered bare.
#[derive(Debug)]
pub struct CallExpression {
    function: String,
    args: Vec<Box<dyn Field>>,
    field_type: FieldType,
}

impl CallExpression {
    /// The call takes the type of its first argument (or `bytearray` for a
    /// nullary call) unless `options` overrides it.
    pub fn new(
        function: impl Into<String>,
        args: Vec<Box<dyn Field>>,
        options: FieldOptions,
    ) -> Result<Self, BuildError> {
        let function = function.into();
        if function.trim().is_empty() {
            return Err(BuildError::Empty { what: "function name" });
        }
        if !FUNCTION_NAME.is_match(&function) {
            return Err(BuildError::InvalidFunctionName(function));
        }
        let field_type = options.field_type.unwrap_or_else(|| {
            args.first()
                .map(|arg| arg.field_type())
                .unwrap_or(FieldType::Bytearray)
        });
        Ok(CallExpression {
            function,
            args,
            field_type,
        })
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn args(&self) -> &[Box<dyn Field>] {
        &self.args
    }
}

impl Field for CallExpression {
    fn render(&self) -> String {
        let args: Vec<String> = self.args.iter().map(|arg| arg.render()).collect();
        format!("{}({})", self.function, args.join(", "))
    }

    fn field_type(&self) -> FieldType {
        self.field_type
    }

    fn is_simple(&self) -> bool {
        false
    }
}
