//! # Argot Expression Language - Abstract Syntax Tree
//!
//! This module defines the tokens and Abstract Syntax Tree (AST) for argot,
//! a one-line expression language used to resolve textual argument values
//! against a document's frontmatter.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, references, operations)
//! - **[operators]** - Unary and binary operators
//!
//! ## Quick Start
//!
//! ```text
//! if(fm.count > 10, "many", "few")
//! ```
//!
//! This expression reads the `count` frontmatter field and picks one of two
//! labels.
//!
//! ## Core Concepts
//!
//! ### One Expression, One Value
//!
//! Every input is a single expression that reduces to a single value. There
//! are no statements, no assignment, and no user-defined functions.
//!
//! ### Context References
//!
//! Two reference namespaces read from the externally supplied context:
//!
//! ```text
//! fm.status            // frontmatter field
//! fm.author.name       // nested lookup, dot-separated
//! file.name            // file metadata
//! ```
//!
//! Missing or null path segments resolve to the absent value rather than
//! failing.
//!
//! ### Bare Words Are Strings
//!
//! An unquoted word that is not a keyword or reference parses as a string
//! literal, so `status == draft` compares against the string `"draft"`.
//!
//! ## Examples
//!
//! ### Arithmetic with precedence
//!
//! ```text
//! 2 + 3 * 4
//! ```
//!
//! ### Conditional label
//!
//! ```text
//! if(fm.active, "on", "off")
//! ```
//!
//! ### Defaulting with null-coalescing
//!
//! ```text
//! fm.title ?? file.name
//! ```
//!
//! ### Membership test
//!
//! ```text
//! contains(fm.tags, "project")
//! ```
pub mod tokens;
pub mod expressions;
pub mod operators;

pub use tokens::{Namespace, Token};
pub use expressions::Expr;
pub use operators::{BinOp, UnOp};
