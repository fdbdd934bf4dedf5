use crate::ast::{BinOp, Expr, UnOp};
use crate::context::Context;
use crate::value::Value;

/// The expression evaluator.
///
/// A pure tree walk over an [`Expr`], resolving references through the
/// caller-supplied [`Context`]. Evaluation is total: every operator has a
/// defined result for every value shape, so a well-formed AST never fails.
///
/// # Examples
///
/// ```
/// use argot::{Evaluator, Expr, EmptyContext, Value};
///
/// let evaluator = Evaluator::new(&EmptyContext);
/// let expr = Expr::Number(42.0);
///
/// assert_eq!(evaluator.eval(&expr), Value::Number(42.0));
/// ```
pub struct Evaluator<'a> {
    context: &'a dyn Context,
}

impl<'a> Evaluator<'a> {
    pub fn new(context: &'a dyn Context) -> Self {
        Evaluator { context }
    }

    /// Reduce an expression to a runtime value.
    pub fn eval(&self, expr: &Expr) -> Value {
        match expr {
            Expr::Number(n) => Value::Number(*n),
            Expr::String(s) => Value::String(s.clone()),
            Expr::Boolean(b) => Value::Boolean(*b),
            // Both namespaces resolve against the same context mapping.
            Expr::Reference { namespace: _, path } => self.context.resolve(path),
            Expr::Unary { op, operand } => {
                let value = self.eval(operand);
                match op {
                    UnOp::Not => Value::Boolean(!value.is_truthy()),
                    UnOp::Negate => Value::Number(-value.coerce_number()),
                }
            }
            Expr::Binary { op, left, right } => self.eval_binary(*op, left, right),
            Expr::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval(condition).is_truthy() {
                    self.eval(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.eval(else_branch)
                } else {
                    // A missing else branch yields false, not absent.
                    Value::Boolean(false)
                }
            }
            Expr::Contains { haystack, needle } => {
                let haystack = self.eval(haystack);
                let needle = self.eval(needle);
                let found = match &haystack {
                    Value::Array(items) => items.iter().any(|item| item.loose_eq(&needle)),
                    Value::String(s) => {
                        !matches!(needle, Value::Null)
                            && s.to_lowercase()
                                .contains(&needle.as_string().to_lowercase())
                    }
                    _ => false,
                };
                Value::Boolean(found)
            }
            Expr::Length(operand) => {
                let value = self.eval(operand);
                let length = match &value {
                    Value::String(s) => s.chars().count(),
                    Value::Array(items) => items.len(),
                    _ => 0,
                };
                Value::Number(length as f64)
            }
        }
    }

    /// `&&`, `||` and `??` short-circuit and preserve operand values; the
    /// rest evaluate both sides eagerly.
    fn eval_binary(&self, op: BinOp, left: &Expr, right: &Expr) -> Value {
        match op {
            BinOp::And => {
                let left = self.eval(left);
                if left.is_truthy() { self.eval(right) } else { left }
            }
            BinOp::Or => {
                let left = self.eval(left);
                if left.is_truthy() { left } else { self.eval(right) }
            }
            BinOp::NullCoalesce => {
                let left = self.eval(left);
                if matches!(left, Value::Null) {
                    self.eval(right)
                } else {
                    left
                }
            }
            _ => {
                let left = self.eval(left);
                let right = self.eval(right);
                apply_binop(op, &left, &right)
            }
        }
    }
}

fn apply_binop(op: BinOp, left: &Value, right: &Value) -> Value {
    match op {
        BinOp::Equal => Value::Boolean(left.loose_eq(right)),
        BinOp::NotEqual => Value::Boolean(!left.loose_eq(right)),
        BinOp::LessThan => Value::Boolean(left.coerce_number() < right.coerce_number()),
        BinOp::GreaterThan => Value::Boolean(left.coerce_number() > right.coerce_number()),
        BinOp::LessEqual => Value::Boolean(left.coerce_number() <= right.coerce_number()),
        BinOp::GreaterEqual => Value::Boolean(left.coerce_number() >= right.coerce_number()),
        BinOp::Add => {
            if matches!(left, Value::String(_)) || matches!(right, Value::String(_)) {
                Value::String(format!("{}{}", concat_part(left), concat_part(right)))
            } else {
                Value::Number(left.coerce_number() + right.coerce_number())
            }
        }
        BinOp::Subtract => Value::Number(left.coerce_number() - right.coerce_number()),
        BinOp::Multiply => Value::Number(left.coerce_number() * right.coerce_number()),
        // IEEE division: x/0 is an infinity, never an error.
        BinOp::Divide => Value::Number(left.coerce_number() / right.coerce_number()),
        BinOp::And | BinOp::Or | BinOp::NullCoalesce => {
            unreachable!("short-circuit operators handled in eval_binary")
        }
    }
}

/// String form used by `+` concatenation; absent contributes nothing.
fn concat_part(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        v => v.as_string(),
    }
}
