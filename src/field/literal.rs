use rust_decimal::Decimal;

use super::{Field, FieldType};

/// Constant value.
///
/// Numeric literals carry Pig Latin's type suffixes so the engine reads them
/// back with the same type: `42`, `42L`, `1.5F`, `1.5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// `int` literal
    Int(i32),

    /// `long` literal, written with an `L` suffix
    Long(i64),

    /// `float` literal, written with an `F` suffix
    Float(Decimal),

    /// `double` literal
    ///
    /// Always written with a decimal point, so `Decimal::from(3)` renders as
    /// `3.0` rather than the int literal `3`.
    Double(Decimal),

    /// `chararray` literal in single quotes
    Chararray(String),
}

impl Literal {
    pub fn chararray(text: impl Into<String>) -> Self {
        Literal::Chararray(text.into())
    }
}

fn with_point(d: &Decimal) -> String {
    if d.scale() == 0 {
        format!("{d}.0")
    } else {
        d.to_string()
    }
}

fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        match c {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

impl Field for Literal {
    fn render(&self) -> String {
        match self {
            Literal::Int(n) => n.to_string(),
            Literal::Long(n) => format!("{n}L"),
            Literal::Float(d) => format!("{}F", with_point(d)),
            Literal::Double(d) => with_point(d),
            Literal::Chararray(s) => quote(s),
        }
    }

    fn field_type(&self) -> FieldType {
        match self {
            Literal::Int(_) => FieldType::Int,
            Literal::Long(_) => FieldType::Long,
            Literal::Float(_) => FieldType::Float,
            Literal::Double(_) => FieldType::Double,
            Literal::Chararray(_) => FieldType::Chararray,
        }
    }

    /// Negative numbers are compound, so a prefix `-` never lands directly
    /// against their sign and starts a `--` comment.
    fn is_simple(&self) -> bool {
        match self {
            Literal::Int(n) => *n >= 0,
            Literal::Long(n) => *n >= 0,
            Literal::Float(d) | Literal::Double(d) => !d.is_sign_negative(),
            Literal::Chararray(_) => true,
        }
    }
}
