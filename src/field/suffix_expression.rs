use crate::error::BuildError;

use super::{Field, FieldOptions, FieldType, required};

/// Compound expression whose operator trails its operand.
///
/// Renders as `<operand> <operator>`, for example `age IS NULL` or
/// `(a + b) DESC`.
///
/// ```
/// use piglet::field::{Field, FieldOptions, Reference, SuffixExpression};
///
/// let age = Reference::new("age").unwrap();
/// let expr = SuffixExpression::new("IS NULL", age, FieldOptions::default()).unwrap();
///
/// assert_eq!(expr.render(), "age IS NULL");
/// ```
#[derive(Debug)]
pub struct SuffixExpression {
    operator: String,
    operand: Box<dyn Field>,
    field_type: FieldType,
}

impl SuffixExpression {
    /// Wraps `operand` with a trailing `operator`.
    ///
    /// Fails with [`BuildError::Empty`] if the operator is blank.
    pub fn new(
        operator: impl Into<String>,
        operand: impl Field + 'static,
        options: FieldOptions,
    ) -> Result<Self, BuildError> {
        let operator = required(operator, "suffix operator")?;
        Ok(Self::from_parts(operator, Box::new(operand), options.field_type))
    }

    pub(crate) fn from_parts(
        operator: impl Into<String>,
        operand: Box<dyn Field>,
        field_type: Option<FieldType>,
    ) -> Self {
        let field_type = field_type.unwrap_or_else(|| operand.field_type());
        SuffixExpression {
            operator: operator.into(),
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

impl Field for SuffixExpression {
    fn render(&self) -> String {
        format!("{} {}", self.operand.parenthesize(), self.operator)
    }

    fn field_type(&self) -> FieldType {
        self.field_type
    }

    fn is_simple(&self) -> bool {
        false
    }
}
