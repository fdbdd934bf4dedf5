// tests/evaluator_tests.rs

use argot::evaluator::Evaluator;
use argot::lexer::tokenize;
use argot::parser::Parser;
use argot::value::Value;
use argot::{Context, EmptyContext, ValueContext};
use serde_json::json;

fn eval_with(input: &str, frontmatter: serde_json::Value) -> Value {
    let ctx = ValueContext::from_json(frontmatter);
    let expr = Parser::new(tokenize(input).expect("input should lex"))
        .parse()
        .expect("input should parse");
    Evaluator::new(&ctx).eval(&expr)
}

fn eval(input: &str) -> Value {
    eval_with(input, json!({}))
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_arithmetic_precedence() {
    assert_eq!(eval("2 + 3 * 4"), Value::Number(14.0));
    assert_eq!(eval("(2 + 3) * 4"), Value::Number(20.0));
}

#[test]
fn test_division_by_zero_is_infinity() {
    assert_eq!(eval("1 / 0"), Value::Number(f64::INFINITY));
    assert_eq!(eval("-1 / 0"), Value::Number(f64::NEG_INFINITY));
    match eval("0 / 0") {
        Value::Number(n) => assert!(n.is_nan()),
        other => panic!("Expected a number, got {:?}", other),
    }
}

#[test]
fn test_numeric_coercion_in_arithmetic() {
    // Strings and booleans coerce to numbers outside of +
    assert_eq!(eval("\"10\" - 4"), Value::Number(6.0));
    assert_eq!(eval("true + true"), Value::Number(2.0));
    assert_eq!(eval("\"abc\" * 3"), Value::Number(0.0));
}

#[test]
fn test_unary_operators() {
    assert_eq!(eval("-\"5\""), Value::Number(-5.0));
    assert_eq!(eval("!0"), Value::Boolean(true));
    assert_eq!(eval("!!\"text\""), Value::Boolean(true));
}

// ============================================================================
// String Concatenation
// ============================================================================

#[test]
fn test_plus_concatenates_when_either_side_is_a_string() {
    assert_eq!(
        eval("\"a\" + \"b\""),
        Value::String("ab".to_string())
    );
    assert_eq!(eval("\"n=\" + 5"), Value::String("n=5".to_string()));
    assert_eq!(eval("1 + \"2\""), Value::String("12".to_string()));
}

#[test]
fn test_absent_concatenates_as_empty_string() {
    assert_eq!(
        eval_with("\"x\" + fm.missing", json!({})),
        Value::String("x".to_string())
    );
}

#[test]
fn test_whole_numbers_concatenate_without_decimal_point() {
    assert_eq!(eval("\"v\" + 2.0"), Value::String("v2".to_string()));
    assert_eq!(eval("\"v\" + 2.5"), Value::String("v2.5".to_string()));
}

// ============================================================================
// Truthiness
// ============================================================================

#[test]
fn test_falsy_values() {
    let falsy = vec![
        "fm.missing",
        "false",
        "0",
        "\"\"",
        "\"undefined\"",
        "\"NULL\"",
        "\"False\"",
        "\"0\"",
    ];
    for input in falsy {
        assert_eq!(
            eval(&format!("if({})", input)),
            Value::Boolean(false),
            "Expected falsy: {}",
            input
        );
    }
}

#[test]
fn test_truthy_values() {
    let truthy = vec!["1", "\"text\"", "true", "\"no\"", "-1", "0.5"];
    for input in truthy {
        assert_eq!(
            eval(&format!("if({})", input)),
            Value::Boolean(true),
            "Expected truthy: {}",
            input
        );
    }
}

#[test]
fn test_empty_collections_are_truthy() {
    let ctx = json!({"tags": [], "meta": {}});
    assert_eq!(eval_with("if(fm.tags)", ctx.clone()), Value::Boolean(true));
    assert_eq!(eval_with("if(fm.meta)", ctx), Value::Boolean(true));
}

// ============================================================================
// Loose Equality
// ============================================================================

#[test]
fn test_numeric_equality_across_types() {
    assert_eq!(eval("\"5\" == 5"), Value::Boolean(true));
    assert_eq!(eval("true == 1"), Value::Boolean(true));
    assert_eq!(eval("\"5.0\" == 5"), Value::Boolean(true));
}

#[test]
fn test_string_equality_is_case_insensitive() {
    assert_eq!(eval("\"Draft\" == draft"), Value::Boolean(true));
    assert_eq!(eval("\"a\" != \"b\""), Value::Boolean(true));
}

#[test]
fn test_absent_equality() {
    assert_eq!(
        eval_with("fm.a == fm.b", json!({})),
        Value::Boolean(true)
    );
    assert_eq!(eval_with("fm.a == 0", json!({})), Value::Boolean(false));
    assert_eq!(eval_with("fm.a != \"\"", json!({})), Value::Boolean(true));
}

#[test]
fn test_comparisons_coerce_numerically() {
    assert_eq!(eval("\"10\" > 9"), Value::Boolean(true));
    assert_eq!(eval("\"abc\" < 5"), Value::Boolean(true)); // "abc" coerces to 0
    assert_eq!(eval("3 >= 3"), Value::Boolean(true));
    assert_eq!(eval("false <= 0"), Value::Boolean(true));
}

// ============================================================================
// Logical Operators
// ============================================================================

#[test]
fn test_and_or_preserve_values() {
    assert_eq!(eval("5 && \"right\""), Value::String("right".to_string()));
    assert_eq!(eval("0 && \"right\""), Value::Number(0.0));
    assert_eq!(eval("5 || \"right\""), Value::Number(5.0));
    assert_eq!(eval("0 || \"right\""), Value::String("right".to_string()));
}

#[test]
fn test_coalesce_keeps_falsy_but_present_values() {
    let ctx = json!({"val": 0});
    assert_eq!(eval_with("fm.val ?? \"default\"", ctx.clone()), Value::Number(0.0));
    assert_eq!(
        eval_with("fm.val || \"default\"", ctx),
        Value::String("default".to_string())
    );
    assert_eq!(
        eval_with("fm.missing ?? \"default\"", json!({})),
        Value::String("default".to_string())
    );
}

// ============================================================================
// Conditionals
// ============================================================================

#[test]
fn test_if_branches() {
    let ctx = json!({"active": true});
    assert_eq!(
        eval_with("if(fm.active, \"on\", \"off\")", ctx.clone()),
        Value::String("on".to_string())
    );
    assert_eq!(
        eval_with("if(!fm.active, \"on\", \"off\")", ctx),
        Value::String("off".to_string())
    );
}

#[test]
fn test_if_without_else_is_false_not_absent() {
    assert_eq!(eval("if(0, \"then\")"), Value::Boolean(false));
}

// ============================================================================
// contains() and length()
// ============================================================================

#[test]
fn test_contains_on_arrays_uses_loose_equality() {
    let ctx = json!({"nums": [1, 2, 3], "tags": ["Home", "Work"]});
    assert_eq!(
        eval_with("contains(fm.nums, \"2\")", ctx.clone()),
        Value::Boolean(true)
    );
    assert_eq!(
        eval_with("contains(fm.tags, \"home\")", ctx.clone()),
        Value::Boolean(true)
    );
    assert_eq!(
        eval_with("contains(fm.nums, 4)", ctx),
        Value::Boolean(false)
    );
}

#[test]
fn test_contains_on_strings_is_case_insensitive() {
    assert_eq!(
        eval("contains(\"Hello World\", \"WORLD\")"),
        Value::Boolean(true)
    );
    assert_eq!(
        eval("contains(\"Hello\", \"xyz\")"),
        Value::Boolean(false)
    );
}

#[test]
fn test_contains_edge_shapes() {
    // Absent needle on a string haystack is false, as is any
    // non-collection haystack.
    assert_eq!(
        eval_with("contains(\"undefined\", fm.missing)", json!({})),
        Value::Boolean(false)
    );
    assert_eq!(eval("contains(5, 5)"), Value::Boolean(false));
    assert_eq!(
        eval_with("contains(fm.missing, 1)", json!({})),
        Value::Boolean(false)
    );
}

#[test]
fn test_length() {
    let ctx = json!({"tags": ["a", "b", "c"]});
    assert_eq!(eval("length(\"hello\")"), Value::Number(5.0));
    assert_eq!(eval_with("length(fm.tags)", ctx), Value::Number(3.0));
    assert_eq!(eval("length(42)"), Value::Number(0.0));
    assert_eq!(
        eval_with("length(fm.missing)", json!({})),
        Value::Number(0.0)
    );
}

// ============================================================================
// Context Resolution
// ============================================================================

#[test]
fn test_nested_path_resolution() {
    let ctx = json!({"author": {"name": "Ada", "stats": {"posts": 3}}});
    assert_eq!(
        eval_with("fm.author.name", ctx.clone()),
        Value::String("Ada".to_string())
    );
    assert_eq!(
        eval_with("fm.author.stats.posts", ctx),
        Value::Number(3.0)
    );
}

#[test]
fn test_missing_segments_resolve_to_absent() {
    let ctx = json!({"author": {"name": "Ada"}, "gone": null});
    assert_eq!(eval_with("fm.author.email", ctx.clone()), Value::Null);
    assert_eq!(eval_with("fm.nobody.name", ctx.clone()), Value::Null);
    // Walking through a null container is absent, not an error.
    assert_eq!(eval_with("fm.gone.deeper", ctx), Value::Null);
}

#[test]
fn test_both_namespaces_resolve_identically() {
    let ctx = json!({"name": "doc"});
    assert_eq!(
        eval_with("fm.name", ctx.clone()),
        eval_with("file.name", ctx)
    );
}

#[test]
fn test_empty_context() {
    let expr = Parser::new(tokenize("fm.anything").unwrap())
        .parse()
        .unwrap();
    assert_eq!(Evaluator::new(&EmptyContext).eval(&expr), Value::Null);
}

#[test]
fn test_context_resolves_non_object_root() {
    let ctx = ValueContext::new(Value::Number(7.0));
    assert_eq!(ctx.resolve("anything"), Value::Null);
}
