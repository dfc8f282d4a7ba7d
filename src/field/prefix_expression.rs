use crate::error::BuildError;

use super::{Field, FieldOptions, FieldType, required};

/// Compound expression whose operator precedes its operand: `NOT x`, `-x`,
/// `(int)x`.
///
/// Word operators are separated from the operand by one space; symbolic
/// operators such as `-` or a cast are written directly against it.
#[derive(Debug)]
pub struct PrefixExpression {
    operator: String,
    operand: Box<dyn Field>,
    field_type: FieldType,
}

impl PrefixExpression {
    pub fn new(
        operator: impl Into<String>,
        operand: impl Field + 'static,
        options: FieldOptions,
    ) -> Result<Self, BuildError> {
        let operator = required(operator, "prefix operator")?;
        Ok(Self::from_parts(operator, Box::new(operand), options.field_type))
    }

    pub(crate) fn from_parts(
        operator: String,
        operand: Box<dyn Field>,
        field_type: Option<FieldType>,
    ) -> Self {
        let field_type = field_type.unwrap_or_else(|| operand.field_type());
        PrefixExpression {
            operator,
            operand,
            field_type,
        }
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn operand(&self) -> &dyn Field {
        self.operand.as_ref()
    }
}

impl Field for PrefixExpression {
    fn render(&self) -> String {
        let spaced = self
            .operator
            .chars()
            .last()
            .is_some_and(|c| c.is_alphanumeric());
        if spaced {
            format!("{} {}", self.operator, self.operand.parenthesize())
        } else {
            format!("{}{}", self.operator, self.operand.parenthesize())
        }
    }

    fn field_type(&self) -> FieldType {
        self.field_type
    }

    fn is_simple(&self) -> bool {
        false
    }
}
