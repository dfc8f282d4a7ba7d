// tests/field_tests.rs

use std::str::FromStr;

use piglet::BuildError;
use piglet::field::{
    BinaryExpression, BinaryOperator, CallExpression, Field, FieldExt, FieldOptions, FieldType,
    Literal, PrefixExpression, Reference, SuffixExpression,
};
use rust_decimal::Decimal;

// Helper functions to build trees for testing
fn field(name: &str) -> Reference {
    Reference::new(name).unwrap()
}

fn typed(name: &str, field_type: FieldType) -> Reference {
    Reference::typed(name, field_type).unwrap()
}

fn sum(a: &str, b: &str) -> BinaryExpression {
    field(a).plus(field(b))
}

fn suffix(op: &str, operand: impl Field + 'static) -> SuffixExpression {
    SuffixExpression::new(op, operand, FieldOptions::default()).unwrap()
}

// ============================================================================
// Parenthesization
// ============================================================================

#[test]
fn test_simple_nodes_are_not_parenthesized() {
    let simple: Vec<Box<dyn Field>> = vec![
        Box::new(field("age")),
        Box::new(field("$0")),
        Box::new(field("users::name")),
        Box::new(Literal::Int(7)),
        Box::new(Literal::chararray("x")),
    ];

    for node in &simple {
        assert!(node.is_simple());
        assert_eq!(node.parenthesize(), node.render());
    }
}

#[test]
fn test_compound_nodes_are_parenthesized() {
    let compound: Vec<Box<dyn Field>> = vec![
        Box::new(sum("a", "b")),
        Box::new(field("age").is_null()),
        Box::new(field("flag").not()),
        Box::new(CallExpression::new("COUNT", vec![Box::new(field("a"))], FieldOptions::default()).unwrap()),
    ];

    for node in &compound {
        assert!(!node.is_simple());
        assert_eq!(node.parenthesize(), format!("({})", node.render()));
    }
}

#[test]
fn test_rendering_is_idempotent() {
    let expr = sum("a", "b").times(field("c")).desc();

    assert_eq!(expr.render(), expr.render());
    assert_eq!(expr.render(), "((a + b) * c) DESC");
}

#[test]
fn test_boxed_field_delegates() {
    let boxed: Box<dyn Field> = Box::new(sum("a", "b"));

    assert_eq!(boxed.render(), "a + b");
    assert!(!boxed.is_simple());
    assert_eq!(boxed.parenthesize(), "(a + b)");
}

// ============================================================================
// Suffix expressions
// ============================================================================

#[test]
fn test_suffix_on_simple_operand() {
    let expr = suffix("IS NULL", field("age"));

    assert_eq!(expr.render(), "age IS NULL");
    assert_eq!(expr.operator(), "IS NULL");
    assert_eq!(expr.operand().render(), "age");
}

#[test]
fn test_suffix_on_compound_operand() {
    let expr = suffix("DESC", sum("a", "b"));

    assert_eq!(expr.render(), "(a + b) DESC");
}

#[test]
fn test_suffix_is_never_simple() {
    let expr = suffix("ASC", field("a"));

    assert!(!expr.is_simple());
    assert_eq!(suffix("DESC", expr).render(), "(a ASC) DESC");
}

#[test]
fn test_suffix_type_follows_operand() {
    let expr = suffix("DESC", typed("score", FieldType::Double));

    assert_eq!(expr.field_type(), FieldType::Double);
}

#[test]
fn test_suffix_type_override() {
    let expr = SuffixExpression::new(
        "IS NULL",
        typed("score", FieldType::Double),
        FieldOptions::typed(FieldType::Boolean),
    )
    .unwrap();

    assert_eq!(expr.field_type(), FieldType::Boolean);
}

#[test]
fn test_suffix_rejects_blank_operator() {
    let err = SuffixExpression::new("  ", field("a"), FieldOptions::default()).unwrap_err();

    assert_eq!(err, BuildError::Empty { what: "suffix operator" });
}

#[test]
fn test_suffix_builders() {
    assert_eq!(field("a").is_null().field_type(), FieldType::Boolean);
    assert_eq!(field("a").is_not_null().render(), "a IS NOT NULL");
    assert_eq!(field("a").asc().render(), "a ASC");
    assert_eq!(typed("a", FieldType::Long).desc().field_type(), FieldType::Long);
}

// ============================================================================
// Prefix expressions and casts
// ============================================================================

#[test]
fn test_word_prefix_is_spaced() {
    let expr = field("active").equals(Literal::Int(1)).not();

    assert_eq!(expr.render(), "NOT (active == 1)");
    assert_eq!(expr.field_type(), FieldType::Boolean);
}

#[test]
fn test_symbol_prefix_is_not_spaced() {
    assert_eq!(field("x").negate().render(), "-x");
    assert_eq!(sum("a", "b").negate().render(), "-(a + b)");
}

#[test]
fn test_cast() {
    let expr = sum("a", "b").cast(FieldType::Long);

    assert_eq!(expr.render(), "(long)(a + b)");
    assert_eq!(expr.field_type(), FieldType::Long);
    assert_eq!(field("a").cast(FieldType::Chararray).render(), "(chararray)a");
}

#[test]
fn test_prefix_constructor() {
    let expr = PrefixExpression::new("NOT", field("a"), FieldOptions::default()).unwrap();
    assert_eq!(expr.render(), "NOT a");
    assert_eq!(expr.field_type(), FieldType::Bytearray);

    let err = PrefixExpression::new("", field("a"), FieldOptions::default()).unwrap_err();
    assert_eq!(err, BuildError::Empty { what: "prefix operator" });
}

// ============================================================================
// Binary expressions
// ============================================================================

#[test]
fn test_nested_arithmetic() {
    let expr = sum("a", "b").times(field("c").minus(field("d")));

    assert_eq!(expr.render(), "(a + b) * (c - d)");
}

#[test]
fn test_arithmetic_takes_left_type() {
    let expr = typed("a", FieldType::Int).plus(Literal::Long(2));

    assert_eq!(expr.render(), "a + 2L");
    assert_eq!(expr.field_type(), FieldType::Int);
}

#[test]
fn test_comparisons_are_boolean() {
    let expr = typed("price", FieldType::Double)
        .greater_than(Literal::Int(100))
        .and(field("status").equals(Literal::chararray("open")));

    assert_eq!(expr.render(), "(price > 100) AND (status == 'open')");
    assert_eq!(expr.field_type(), FieldType::Boolean);
}

#[test]
fn test_binary_type_override() {
    let expr = BinaryExpression::new(
        field("a"),
        BinaryOperator::Divide,
        field("b"),
        FieldOptions::typed(FieldType::Double),
    );

    assert_eq!(expr.field_type(), FieldType::Double);
    assert_eq!(expr.op(), BinaryOperator::Divide);
}

#[test]
fn test_matches() {
    let expr = field("url").matches(".*\\.com");

    assert_eq!(expr.render(), "url matches '.*\\\\.com'");
}

#[test]
fn test_binary_operator_from_str() {
    assert_eq!(BinaryOperator::from_str("and").unwrap(), BinaryOperator::And);
    assert_eq!(BinaryOperator::from_str(">=").unwrap(), BinaryOperator::GreaterEqual);
    assert_eq!(
        BinaryOperator::from_str("<>").unwrap_err(),
        BuildError::InvalidOperator("<>".into())
    );
}

// ============================================================================
// Calls, literals and references
// ============================================================================

#[test]
fn test_call_renders_bare_arguments() {
    let call = CallExpression::new(
        "CONCAT",
        vec![Box::new(sum("a", "b").cast(FieldType::Chararray)), Box::new(Literal::chararray("!"))],
        FieldOptions::default(),
    )
    .unwrap();

    assert_eq!(call.render(), "CONCAT((chararray)(a + b), '!')");
    assert_eq!(call.field_type(), FieldType::Chararray);
}

#[test]
fn test_call_types() {
    let count = CallExpression::new("COUNT", vec![Box::new(field("bag"))], FieldOptions::typed(FieldType::Long))
        .unwrap();
    assert_eq!(count.field_type(), FieldType::Long);

    let nullary = CallExpression::new("RANDOM", Vec::new(), FieldOptions::default()).unwrap();
    assert_eq!(nullary.render(), "RANDOM()");
    assert_eq!(nullary.field_type(), FieldType::Bytearray);
}

#[test]
fn test_call_names() {
    assert!(CallExpression::new("com.example.Upper", Vec::new(), FieldOptions::default()).is_ok());
    assert!(matches!(
        CallExpression::new("bad name", Vec::new(), FieldOptions::default()),
        Err(BuildError::InvalidFunctionName(_))
    ));
}

#[test]
fn test_literals() {
    assert_eq!(Literal::Int(-3).render(), "-3");
    assert_eq!(Literal::Long(42).render(), "42L");
    assert_eq!(Literal::Double(Decimal::from(3)).render(), "3.0");
    assert_eq!(Literal::Double(Decimal::new(125, 2)).render(), "1.25");
    assert_eq!(Literal::Float(Decimal::new(15, 1)).render(), "1.5F");
    assert_eq!(Literal::chararray("it's").render(), "'it\\'s'");
    assert_eq!(Literal::Float(Decimal::ONE).field_type(), FieldType::Float);
}

#[test]
fn test_negative_literals_are_compound() {
    assert!(!Literal::Int(-5).is_simple());
    assert!(!Literal::Long(-5).is_simple());
    assert!(!Literal::Double(Decimal::new(-15, 1)).is_simple());
    assert!(!Literal::Float(Decimal::new(-15, 1)).is_simple());
    assert!(Literal::Int(0).is_simple());
    assert_eq!(Literal::Int(-5).render(), "-5");
}

#[test]
fn test_negated_negative_literal_has_no_comment_marker() {
    let ints = Literal::Int(-5).negate().render();
    let doubles = Literal::Double(Decimal::new(-15, 1)).negate().render();

    assert_eq!(ints, "-(-5)");
    assert_eq!(doubles, "-(-1.5)");
    assert!(!ints.contains("--"));
    assert!(!doubles.contains("--"));
}

#[test]
fn test_negative_literal_under_operators() {
    assert_eq!(field("a").minus(Literal::Int(-5)).render(), "a - (-5)");
    assert_eq!(Literal::Int(-5).cast(FieldType::Long).render(), "(long)(-5)");
    assert_eq!(Literal::Long(-7).times(field("b")).render(), "(-7L) * b");
    assert_eq!(Literal::Int(-5).desc().render(), "(-5) DESC");
}

#[test]
fn test_reference_validation() {
    assert_eq!(field("a").field_type(), FieldType::Bytearray);
    assert_eq!(
        Reference::new("").unwrap_err(),
        BuildError::Empty { what: "field name" }
    );
    assert_eq!(
        Reference::new("1abc").unwrap_err(),
        BuildError::InvalidFieldName("1abc".into())
    );
    assert!(Reference::new("a b").is_err());
}

// ============================================================================
// Types
// ============================================================================

#[test]
fn test_field_type_from_str() {
    assert_eq!(FieldType::from_str("chararray").unwrap(), FieldType::Chararray);
    assert_eq!(FieldType::from_str("INT").unwrap(), FieldType::Int);
    assert_eq!(
        FieldType::from_str("string").unwrap_err(),
        BuildError::UnknownType("string".into())
    );
}

#[test]
fn test_field_type_names_round_trip() {
    for t in FieldType::ALL {
        assert_eq!(FieldType::from_str(&t.to_string()).unwrap(), t);
    }
    assert!(FieldType::Long.is_numeric());
    assert!(!FieldType::Bag.is_numeric());
}
