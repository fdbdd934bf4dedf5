/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinOp {
    // Comparison
    /// Loose equality (`==`)
    Equal,
    /// Loose inequality (`!=`)
    NotEqual,
    /// Less than (`<`)
    LessThan,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,

    // Arithmetic
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,

    // Logical
    /// Logical AND (`&&`), value-preserving
    And,
    /// Logical OR (`||`), value-preserving
    Or,
    /// Null-coalescing (`??`)
    ///
    /// Unlike `||`, keeps falsy-but-present left operands such as `0`,
    /// `""` and `false`.
    NullCoalesce,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnOp {
    /// Boolean negation of truthiness (`!`)
    Not,
    /// Numeric negation (`-`)
    Negate,
}
