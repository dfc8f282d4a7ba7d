use std::{fmt, str::FromStr};

use crate::error::BuildError;

use super::{Field, FieldOptions, FieldType};

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Arithmetic
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Modulo (`%`)
    Modulo,

    // Comparison
    /// Equal (`==`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
    /// Less than (`<`)
    LessThan,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Regular expression match (`matches`)
    Matches,

    // Logical
    /// Logical AND (`AND`)
    And,
    /// Logical OR (`OR`)
    Or,
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Matches => "matches",
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
        }
    }

    /// Whether the operator yields a boolean rather than a value of its
    /// operands' type.
    pub fn is_predicate(self) -> bool {
        !matches!(
            self,
            BinaryOperator::Add
                | BinaryOperator::Subtract
                | BinaryOperator::Multiply
                | BinaryOperator::Divide
                | BinaryOperator::Modulo
        )
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOperator {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim().to_ascii_lowercase().as_str() {
            "+" => BinaryOperator::Add,
            "-" => BinaryOperator::Subtract,
            "*" => BinaryOperator::Multiply,
            "/" => BinaryOperator::Divide,
            "%" => BinaryOperator::Modulo,
            "==" => BinaryOperator::Equal,
            "!=" => BinaryOperator::NotEqual,
            "<" => BinaryOperator::LessThan,
            ">" => BinaryOperator::GreaterThan,
            "<=" => BinaryOperator::LessEqual,
            ">=" => BinaryOperator::GreaterEqual,
            "matches" => BinaryOperator::Matches,
            "and" => BinaryOperator::And,
            "or" => BinaryOperator::Or,
            "" => return Err(BuildError::Empty { what: "binary operator" }),
            _ => return Err(BuildError::InvalidOperator(s.to_string())),
        };
        Ok(op)
    }
}

/// Infix expression: `<left> <op> <right>`.
///
/// Arithmetic takes the type of its left operand; comparisons and logical
/// connectives are boolean. Either can be overridden with [`FieldOptions`].
#[derive(Debug)]
pub struct BinaryExpression {
    left: Box<dyn Field>,
    op: BinaryOperator,
    right: Box<dyn Field>,
    field_type: FieldType,
}

impl BinaryExpression {
    pub fn new(
        left: impl Field + 'static,
        op: BinaryOperator,
        right: impl Field + 'static,
        options: FieldOptions,
    ) -> Self {
        let field_type = match options.field_type {
            Some(t) => t,
            None if op.is_predicate() => FieldType::Boolean,
            None => left.field_type(),
        };
        BinaryExpression {
            left: Box::new(left),
            op,
            right: Box::new(right),
            field_type,
        }
    }

    pub fn op(&self) -> BinaryOperator {
        self.op
    }
}

impl Field for BinaryExpression {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.left.parenthesize(),
            self.op,
            self.right.parenthesize()
        )
    }

    fn field_type(&self) -> FieldType {
        self.field_type
    }

    fn is_simple(&self) -> bool {
        false
    }
}
