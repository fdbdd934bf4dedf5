//! Public entry points.
//!
//! [`evaluate_expression`] runs the full pipeline - tokenize, collect
//! referenced keys, parse, evaluate - with an all-or-nothing fallback: any
//! lex or parse failure returns the input verbatim as a string. Most
//! argument values are plain text (paths, labels, URLs) that were never
//! meant to parse as expressions, so the fallback is the common path, not
//! an exceptional one. Lex and parse errors never reach the caller.
//!
//! Referenced keys are collected from the token list *before* parsing, so
//! key collection survives a parse failure but not a lex failure.

use indexmap::{IndexMap, IndexSet};

use crate::ast::{Namespace, Token};
use crate::context::Context;
use crate::evaluator::Evaluator;
use crate::lexer::tokenize;
use crate::parser::Parser;
use crate::value::Value;

/// Context keys referenced by an expression, split by namespace and
/// de-duplicated in first-appearance order.
///
/// Hosts use these for their own change-detection: re-evaluate when a
/// referenced frontmatter or file field changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferencedKeys {
    /// Dotted paths referenced through `fm.`
    pub frontmatter: IndexSet<String>,
    /// Dotted paths referenced through `file.`
    pub file: IndexSet<String>,
}

impl ReferencedKeys {
    fn collect(tokens: &[Token]) -> Self {
        let mut keys = ReferencedKeys::default();
        for token in tokens {
            if let Token::Reference(namespace, path) = token {
                keys.record(*namespace, path);
            }
        }
        keys
    }

    fn record(&mut self, namespace: Namespace, path: &str) {
        let set = match namespace {
            Namespace::Frontmatter => &mut self.frontmatter,
            Namespace::File => &mut self.file,
        };
        set.insert(path.to_string());
    }

    /// Merge another key set into this one, preserving first-occurrence
    /// order across both.
    pub fn merge(&mut self, other: ReferencedKeys) {
        self.frontmatter.extend(other.frontmatter);
        self.file.extend(other.file);
    }
}

/// Result of evaluating a single argument expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The resulting value, or the input verbatim as a string when the
    /// input did not lex or parse as an expression.
    pub value: Value,
    /// Keys the expression referenced (empty after a lex failure).
    pub keys: ReferencedKeys,
}

/// Result of batch evaluation over a map of argument strings.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgsEvaluation {
    /// Stringified result per argument, in input order.
    pub evaluated: IndexMap<String, String>,
    /// Keys referenced across all entries, merged and de-duplicated.
    pub keys: ReferencedKeys,
}

/// Evaluate one argument value against a context.
///
/// # Examples
///
/// ```
/// use argot::{evaluate_expression, Value, ValueContext};
/// use serde_json::json;
///
/// let ctx = ValueContext::from_json(json!({"count": 15}));
///
/// let result = evaluate_expression("fm.count > 10", &ctx);
/// assert_eq!(result.value, Value::Boolean(true));
/// assert!(result.keys.frontmatter.contains("count"));
///
/// // Plain text falls through verbatim.
/// let result = evaluate_expression("notes/today.md#section", &ctx);
/// assert_eq!(result.value, Value::String("notes/today.md#section".to_string()));
/// ```
pub fn evaluate_expression(input: &str, context: &dyn Context) -> Evaluation {
    let tokens = match tokenize(input) {
        Ok(tokens) => tokens,
        Err(_) => {
            return Evaluation {
                value: Value::String(input.to_string()),
                keys: ReferencedKeys::default(),
            };
        }
    };

    // Collected before parsing so hosts still learn the dependencies of
    // inputs that lex but do not parse.
    let keys = ReferencedKeys::collect(&tokens);

    let expr = match Parser::new(tokens).parse() {
        Ok(expr) => expr,
        Err(_) => {
            return Evaluation {
                value: Value::String(input.to_string()),
                keys,
            };
        }
    };

    Evaluation {
        value: Evaluator::new(context).eval(&expr),
        keys,
    }
}

/// Evaluate a map of argument strings and stringify every result.
///
/// Absent values stringify as `"undefined"`, arrays and objects as compact
/// JSON, and everything else in its natural form. Referenced keys are
/// accumulated across all entries in first-occurrence order.
///
/// # Examples
///
/// ```
/// use argot::{evaluate_args, ValueContext};
/// use indexmap::IndexMap;
/// use serde_json::json;
///
/// let ctx = ValueContext::from_json(json!({"x": "hello"}));
/// let mut args = IndexMap::new();
/// args.insert("a".to_string(), "fm.x".to_string());
///
/// let result = evaluate_args(&args, &ctx);
/// assert_eq!(result.evaluated["a"], "hello");
/// assert!(result.keys.frontmatter.contains("x"));
/// ```
pub fn evaluate_args(
    args: &IndexMap<String, String>,
    context: &dyn Context,
) -> ArgsEvaluation {
    let mut evaluated = IndexMap::new();
    let mut keys = ReferencedKeys::default();

    for (name, raw) in args {
        let result = evaluate_expression(raw, context);
        evaluated.insert(name.clone(), result.value.as_string());
        keys.merge(result.keys);
    }

    ArgsEvaluation { evaluated, keys }
}
