//! # Field expressions
//!
//! Every value-producing construct in a generated Pig Latin script is a
//! node implementing [`Field`]. Trees are built bottom-up, are immutable once
//! built, and render to text with [`Field::render`].
//!
//! ## Parenthesization
//!
//! Nodes are either *simple* (field references, non-negative literals) or *compound*
//! (arithmetic, prefix and suffix operators, function calls). A compound
//! node embeds each child through [`Field::parenthesize`], which wraps the
//! child in parentheses only when the child itself is compound. Because the
//! rule lives in one place, every rendered tree re-parses to the same shape.
//!
//! ```
//! use piglet::field::{Field, FieldExt, Reference};
//!
//! let a = Reference::new("a").unwrap();
//! let b = Reference::new("b").unwrap();
//!
//! assert_eq!(a.plus(b).desc().render(), "(a + b) DESC");
//! ```
//!
//! ## Types
//!
//! Each node reports a [`FieldType`]. Compound nodes infer it from their
//! children unless a type is supplied through [`FieldOptions`].

mod binary_expression;
mod call_expression;
mod literal;
mod prefix_expression;
mod reference;
mod suffix_expression;
mod types;

pub use binary_expression::{BinaryExpression, BinaryOperator};
pub use call_expression::CallExpression;
pub use literal::Literal;
pub use prefix_expression::PrefixExpression;
pub use reference::Reference;
pub use suffix_expression::SuffixExpression;
pub use types::FieldType;

use std::fmt;

use crate::error::BuildError;

/// A node of a field expression tree.
pub trait Field: fmt::Debug + Send + Sync {
    /// Canonical Pig Latin text for this node.
    fn render(&self) -> String;

    /// Resolved type of the value this node produces.
    fn field_type(&self) -> FieldType;

    /// Whether this node can be embedded in another expression without
    /// parentheses.
    fn is_simple(&self) -> bool;

    /// Text to use when this node appears as the child of a compound node.
    fn parenthesize(&self) -> String {
        if self.is_simple() {
            self.render()
        } else {
            format!("({})", self.render())
        }
    }
}

impl<F: Field + ?Sized> Field for Box<F> {
    fn render(&self) -> String {
        (**self).render()
    }

    fn field_type(&self) -> FieldType {
        (**self).field_type()
    }

    fn is_simple(&self) -> bool {
        (**self).is_simple()
    }
}

/// Construction options shared by the compound expression nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// Overrides the type the node would otherwise infer from its children
    pub field_type: Option<FieldType>,
}

impl FieldOptions {
    pub fn typed(field_type: FieldType) -> Self {
        FieldOptions {
            field_type: Some(field_type),
        }
    }
}

/// Builder methods available on every field expression.
///
/// Each method consumes the receiver and returns the enclosing node, so
/// expressions read left to right:
///
/// ```
/// use piglet::field::{Field, FieldExt, FieldType, Literal, Reference};
///
/// let age = Reference::typed("age", FieldType::Int).unwrap();
/// let adult = age.at_least(Literal::Int(18));
///
/// assert_eq!(adult.render(), "age >= 18");
/// assert_eq!(adult.field_type(), FieldType::Boolean);
/// ```
pub trait FieldExt: Field + Sized + 'static {
    /// `<self> IS NULL`
    fn is_null(self) -> SuffixExpression {
        SuffixExpression::from_parts("IS NULL", Box::new(self), Some(FieldType::Boolean))
    }

    /// `<self> IS NOT NULL`
    fn is_not_null(self) -> SuffixExpression {
        SuffixExpression::from_parts("IS NOT NULL", Box::new(self), Some(FieldType::Boolean))
    }

    /// Ascending sort key, `<self> ASC`
    fn asc(self) -> SuffixExpression {
        SuffixExpression::from_parts("ASC", Box::new(self), None)
    }

    /// Descending sort key, `<self> DESC`
    fn desc(self) -> SuffixExpression {
        SuffixExpression::from_parts("DESC", Box::new(self), None)
    }

    /// `NOT <self>`
    fn not(self) -> PrefixExpression {
        PrefixExpression::from_parts("NOT".to_string(), Box::new(self), Some(FieldType::Boolean))
    }

    /// `-<self>`
    fn negate(self) -> PrefixExpression {
        PrefixExpression::from_parts("-".to_string(), Box::new(self), None)
    }

    /// `(<type>)<self>`
    fn cast(self, field_type: FieldType) -> PrefixExpression {
        PrefixExpression::from_parts(format!("({field_type})"), Box::new(self), Some(field_type))
    }

    /// `<self> + <other>`
    fn plus(self, other: impl Field + 'static) -> BinaryExpression {
        self.binary(BinaryOperator::Add, other)
    }

    /// `<self> - <other>`
    fn minus(self, other: impl Field + 'static) -> BinaryExpression {
        self.binary(BinaryOperator::Subtract, other)
    }

    /// `<self> * <other>`
    fn times(self, other: impl Field + 'static) -> BinaryExpression {
        self.binary(BinaryOperator::Multiply, other)
    }

    /// `<self> / <other>`
    fn divided_by(self, other: impl Field + 'static) -> BinaryExpression {
        self.binary(BinaryOperator::Divide, other)
    }

    /// `<self> % <other>`
    fn modulo(self, other: impl Field + 'static) -> BinaryExpression {
        self.binary(BinaryOperator::Modulo, other)
    }

    /// `<self> == <other>`
    fn equals(self, other: impl Field + 'static) -> BinaryExpression {
        self.binary(BinaryOperator::Equal, other)
    }

    /// `<self> != <other>`
    fn not_equals(self, other: impl Field + 'static) -> BinaryExpression {
        self.binary(BinaryOperator::NotEqual, other)
    }

    /// `<self> < <other>`
    fn less_than(self, other: impl Field + 'static) -> BinaryExpression {
        self.binary(BinaryOperator::LessThan, other)
    }

    /// `<self> > <other>`
    fn greater_than(self, other: impl Field + 'static) -> BinaryExpression {
        self.binary(BinaryOperator::GreaterThan, other)
    }

    /// `<self> <= <other>`
    fn at_most(self, other: impl Field + 'static) -> BinaryExpression {
        self.binary(BinaryOperator::LessEqual, other)
    }

    /// `<self> >= <other>`
    fn at_least(self, other: impl Field + 'static) -> BinaryExpression {
        self.binary(BinaryOperator::GreaterEqual, other)
    }

    /// `<self> matches '<pattern>'`; the pattern is a Java regular expression
    fn matches(self, pattern: &str) -> BinaryExpression {
        self.binary(BinaryOperator::Matches, Literal::chararray(pattern))
    }

    /// `<self> AND <other>`
    fn and(self, other: impl Field + 'static) -> BinaryExpression {
        self.binary(BinaryOperator::And, other)
    }

    /// `<self> OR <other>`
    fn or(self, other: impl Field + 'static) -> BinaryExpression {
        self.binary(BinaryOperator::Or, other)
    }

    /// `<self> <op> <other>` for any binary operator
    fn binary(self, op: BinaryOperator, other: impl Field + 'static) -> BinaryExpression {
        BinaryExpression::new(self, op, other, FieldOptions::default())
    }
}

impl<F: Field + 'static> FieldExt for F {}

/// Trimmed copy of `text`, or [`BuildError::Empty`] if nothing is left.
pub(crate) fn required(text: impl Into<String>, what: &'static str) -> Result<String, BuildError> {
    let text = text.into();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(BuildError::Empty { what });
    }
    Ok(trimmed.to_string())
}
