//! Caller-supplied context for `fm.` and `file.` references.
//!
//! The evaluator never sees the host's document or metadata types. It is
//! handed a [`Context`] exposing exactly one capability: resolve a
//! dot-separated path to a [`Value`], or to [`Value::Null`] if anything
//! along the path is missing. How that mapping is populated is the host's
//! business.

use crate::output::from_json;
use crate::value::Value;

/// Read-only lookup the evaluator resolves references through.
pub trait Context {
    /// Resolve a dot-separated path.
    ///
    /// Returns [`Value::Null`] the moment any segment is missing or the
    /// container along the path is not an object. Never fails.
    fn resolve(&self, path: &str) -> Value;
}

/// A [`Context`] backed by a single root value, typically an object built
/// from a document's frontmatter.
///
/// # Examples
///
/// ```
/// use argot::{Context, Value, ValueContext};
/// use serde_json::json;
///
/// let ctx = ValueContext::from_json(json!({"author": {"name": "Ada"}}));
/// assert_eq!(ctx.resolve("author.name"), Value::String("Ada".to_string()));
/// assert_eq!(ctx.resolve("author.email"), Value::Null);
/// ```
#[derive(Debug, Clone)]
pub struct ValueContext {
    root: Value,
}

impl ValueContext {
    pub fn new(root: Value) -> Self {
        ValueContext { root }
    }

    /// Build a context from a JSON document.
    pub fn from_json(root: serde_json::Value) -> Self {
        ValueContext::new(from_json(root))
    }
}

impl Context for ValueContext {
    fn resolve(&self, path: &str) -> Value {
        let mut current = &self.root;
        for segment in path.split('.') {
            match current {
                Value::Object(map) => match map.get(segment) {
                    Some(value) => current = value,
                    None => return Value::Null,
                },
                _ => return Value::Null,
            }
        }
        current.clone()
    }
}

/// A [`Context`] with no entries; every reference resolves to absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyContext;

impl Context for EmptyContext {
    fn resolve(&self, _path: &str) -> Value {
        Value::Null
    }
}
