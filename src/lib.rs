pub mod api;
pub mod ast;
pub mod context;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod value;

pub use api::{ArgsEvaluation, Evaluation, ReferencedKeys, evaluate_args, evaluate_expression};
pub use ast::{BinOp, Expr, Namespace, Token, UnOp};
pub use context::{Context, EmptyContext, ValueContext};
pub use evaluator::Evaluator;
pub use lexer::{LexError, Lexer, tokenize};
pub use parser::{DEFAULT_MAX_DEPTH, ParseError, Parser};
pub use value::Value;
