use crate::ast::{BinOp, Namespace, UnOp};

/// Abstract Syntax Tree node representing a parsed expression.
///
/// The AST is the internal representation of an argument expression after
/// parsing. It is built once per evaluation call, never mutated, and owned
/// exclusively by that call.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Literals
    /// Numeric literal
    ///
    /// # Example
    /// ```text
    /// 42
    /// ```
    Number(f64),

    /// String literal
    ///
    /// Also produced for bare words that are neither keywords nor context
    /// references, so `draft` and `"draft"` parse to the same node.
    String(String),

    /// Boolean literal
    Boolean(bool),

    // References
    /// Context reference (`fm.path` or `file.path`)
    ///
    /// The path is dot-separated and resolved against the caller-supplied
    /// context at evaluation time.
    Reference {
        namespace: Namespace,
        path: String,
    },

    // Operations
    /// Unary operation (`!x`, `-x`)
    Unary {
        op: UnOp,
        operand: Box<Expr>,
    },

    /// Binary operation (arithmetic, comparison, logical)
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    // Calls
    /// Conditional
    ///
    /// The one-argument form `if(c)` parses with a `Boolean(true)` then
    /// branch and a `Boolean(false)` else branch. A missing else branch
    /// evaluates to `false` when the condition is falsy.
    ///
    /// # Examples
    /// ```text
    /// if(fm.active)
    /// if(fm.active, "on")
    /// if(fm.active, "on", "off")
    /// ```
    If {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Option<Box<Expr>>,
    },

    /// Membership test
    ///
    /// # Example
    /// ```text
    /// contains(fm.tags, "project")
    /// ```
    Contains {
        haystack: Box<Expr>,
        needle: Box<Expr>,
    },

    /// String or array length
    ///
    /// # Example
    /// ```text
    /// length(fm.tags)
    /// ```
    Length(Box<Expr>),
}
