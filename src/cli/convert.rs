//! JSON -> expression and statement conversion

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};

use crate::{
    field::{
        BinaryExpression, BinaryOperator, CallExpression, Field, FieldExt, FieldOptions,
        FieldType, Literal, PrefixExpression, Reference, SuffixExpression,
    },
    inout::{Describe, Dump, Explain, Illustrate, Output, Relation, ResolveStorage, Store, StoreOptions},
};

use super::CliError;

const STATEMENT_VERBS: [&str; 5] = ["store", "dump", "describe", "illustrate", "explain"];

fn shape(msg: impl Into<String>) -> CliError {
    CliError::Shape(msg.into())
}

fn as_object<'v>(v: &'v Value, what: &str) -> Result<&'v Map<String, Value>, CliError> {
    v.as_object()
        .ok_or_else(|| shape(format!("{what} must be a JSON object, got {v}")))
}

fn string_member<'v>(obj: &'v Map<String, Value>, key: &str) -> Result<&'v str, CliError> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(shape(format!("\"{key}\" must be a string, got {other}"))),
        None => Err(shape(format!("missing \"{key}\""))),
    }
}

fn optional_string<'v>(obj: &'v Map<String, Value>, key: &str) -> Result<Option<&'v str>, CliError> {
    if obj.contains_key(key) {
        string_member(obj, key).map(Some)
    } else {
        Ok(None)
    }
}

fn options(obj: &Map<String, Value>) -> Result<FieldOptions, CliError> {
    let field_type = optional_string(obj, "type")?
        .map(FieldType::from_str)
        .transpose()?;
    Ok(FieldOptions { field_type })
}

fn operand(obj: &Map<String, Value>) -> Result<Box<dyn Field>, CliError> {
    let v = obj
        .get("operand")
        .ok_or_else(|| shape("missing \"operand\""))?;
    json_to_field(v)
}

fn number_literal(n: &Number) -> Result<Literal, CliError> {
    if let Some(i) = n.as_i64() {
        return Ok(match i32::try_from(i) {
            Ok(small) => Literal::Int(small),
            Err(_) => Literal::Long(i),
        });
    }
    if n.is_u64() {
        return Err(shape(format!("integer literal {n} does not fit in a long")));
    }
    let text = n.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map(Literal::Double)
        .map_err(|_| shape(format!("number literal {n} is out of range")))
}

fn literal(v: &Value) -> Result<Literal, CliError> {
    match v {
        Value::Number(n) => number_literal(n),
        Value::String(s) => Ok(Literal::Chararray(s.clone())),
        other => Err(shape(format!("literal must be a number or string, got {other}"))),
    }
}

/// Builds an expression tree from its JSON description.
///
/// # Examples
///
/// ```
/// use piglet::cli::json_to_field;
/// use piglet::field::Field;
///
/// let doc = serde_json::json!({"suffix": "IS NULL", "operand": {"field": "age"}});
/// assert_eq!(json_to_field(&doc).unwrap().render(), "age IS NULL");
/// ```
pub fn json_to_field(v: &Value) -> Result<Box<dyn Field>, CliError> {
    let obj = as_object(v, "expression")?;

    if let Some(name) = obj.get("field") {
        let name = name
            .as_str()
            .ok_or_else(|| shape(format!("\"field\" must be a string, got {name}")))?;
        let field_type = options(obj)?.field_type.unwrap_or(FieldType::Bytearray);
        return Ok(Box::new(Reference::typed(name, field_type)?));
    }

    if let Some(value) = obj.get("literal") {
        return Ok(Box::new(literal(value)?));
    }

    if obj.contains_key("suffix") {
        let op = string_member(obj, "suffix")?;
        return Ok(Box::new(SuffixExpression::new(op, operand(obj)?, options(obj)?)?));
    }

    if obj.contains_key("prefix") {
        let op = string_member(obj, "prefix")?;
        return Ok(Box::new(PrefixExpression::new(op, operand(obj)?, options(obj)?)?));
    }

    if obj.contains_key("cast") {
        let target = FieldType::from_str(string_member(obj, "cast")?)?;
        return Ok(Box::new(operand(obj)?.cast(target)));
    }

    if obj.contains_key("binary") {
        let op = BinaryOperator::from_str(string_member(obj, "binary")?)?;
        let left = json_to_field(obj.get("left").ok_or_else(|| shape("missing \"left\""))?)?;
        let right = json_to_field(obj.get("right").ok_or_else(|| shape("missing \"right\""))?)?;
        return Ok(Box::new(BinaryExpression::new(left, op, right, options(obj)?)));
    }

    if obj.contains_key("call") {
        let function = string_member(obj, "call")?;
        let args = match obj.get("args") {
            Some(Value::Array(items)) => items
                .iter()
                .map(json_to_field)
                .collect::<Result<Vec<_>, CliError>>()?,
            Some(other) => return Err(shape(format!("\"args\" must be an array, got {other}"))),
            None => Vec::new(),
        };
        return Ok(Box::new(CallExpression::new(function, args, options(obj)?)?));
    }

    Err(shape(format!("not an expression: {v}")))
}

/// Renders one JSON-described output statement, without the trailing `;`.
pub fn json_to_statement(v: &Value, storage: &dyn ResolveStorage) -> Result<String, CliError> {
    let obj = as_object(v, "statement")?;

    let verb = STATEMENT_VERBS
        .into_iter()
        .find(|verb| obj.contains_key(*verb))
        .ok_or_else(|| shape(format!("not a statement: {v}")))?;
    let relation = Relation::new(string_member(obj, verb)?)?;

    let text = match verb {
        "store" => {
            let options = StoreOptions {
                using: optional_string(obj, "using")?.map(str::to_string),
            };
            Store::new(&relation, string_member(obj, "into")?, options)?.render(storage)?
        }
        "dump" => Dump::new(&relation).render(storage)?,
        "describe" => Describe::new(&relation).render(storage)?,
        "illustrate" => Illustrate::new(&relation).render(storage)?,
        _ => Explain::new(&relation).render(storage)?,
    };
    Ok(text)
}
