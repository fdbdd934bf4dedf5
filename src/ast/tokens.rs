/// Reference namespace for context lookups.
///
/// Both namespaces currently resolve against the same context mapping; the
/// distinction exists so hosts can track which frontmatter fields and which
/// file metadata fields an expression depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// `fm.` prefix - document frontmatter
    Frontmatter,

    /// `file.` prefix - file metadata
    File,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Numeric literal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// .5
    /// ```
    Number(f64),

    /// String literal enclosed in single or double quotes
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// 'it said "hi"'
    /// ```
    String(String),

    /// Boolean values
    ///
    /// # Examples
    /// ```text
    /// true
    /// false
    /// ```
    Boolean(bool),

    // References
    /// Context reference with its prefix stripped
    ///
    /// # Examples
    /// ```text
    /// fm.status        // Reference(Frontmatter, "status")
    /// fm.author.name   // Reference(Frontmatter, "author.name")
    /// file.name        // Reference(File, "name")
    /// ```
    Reference(Namespace, String),

    /// Catch-all word carrying its full text
    ///
    /// Any word that is not a keyword or a context reference. The parser
    /// treats these as string literals.
    ///
    /// # Examples
    /// ```text
    /// draft
    /// path.md
    /// ```
    Identifier(String),

    // Keywords
    /// `if` conditional call
    If,

    /// `contains` membership call
    Contains,

    /// `length` call
    Length,

    // Comparison
    /// Equality operator
    EqEq,

    /// Inequality operator
    NotEq,

    /// Less than
    Lt,

    /// Greater than
    Gt,

    /// Less than or equal
    LtEq,

    /// Greater than or equal
    GtEq,

    // Arithmetic
    /// Addition or string concatenation
    Plus,

    /// Subtraction or unary negation
    Minus,

    /// Multiplication
    Star,

    /// Division
    Slash,

    // Logical
    /// Logical AND (`&&`)
    AndAnd,

    /// Logical OR (`||`)
    OrOr,

    /// Null-coalescing (`??`)
    QuestionQuestion,

    /// Logical NOT (`!`)
    Bang,

    // Delimiters
    /// Left parenthesis for grouping or call arguments
    LParen,

    /// Right parenthesis
    RParen,

    /// Comma separating call arguments
    Comma,

    /// End of input sentinel
    Eof,
}
