use crate::ast::{BinOp, Expr, Token, UnOp};
use std::mem;

/// Default nesting depth limit.
///
/// The grammar recurses on parentheses, call arguments and unary chains;
/// the limit turns pathological nesting into a [`ParseError`] instead of
/// stack exhaustion. Override with [`Parser::with_max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Errors raised while parsing a token sequence.
///
/// A parse failure never yields a partial tree; the public API converts it
/// into the verbatim-string fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The grammar expected something else at this token
    UnexpectedToken {
        found: Token,
        expected: &'static str,
    },

    /// A complete expression was parsed but input remains
    TrailingInput { found: Token },

    /// Nesting exceeded the configured depth limit
    NestingTooDeep { limit: usize },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnexpectedToken { found, expected } => {
                write!(f, "Expected {}, got {:?}", expected, found)
            }
            ParseError::TrailingInput { found } => {
                write!(f, "Unexpected trailing input starting at {:?}", found)
            }
            ParseError::NestingTooDeep { limit } => {
                write!(f, "Expression nesting exceeds the limit of {}", limit)
            }
        }
    }
}

impl std::error::Error for ParseError {}

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser::with_max_depth(tokens, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(tokens: Vec<Token>, max_depth: usize) -> Self {
        Parser {
            tokens,
            position: 0,
            depth: 0,
            max_depth,
        }
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&Token::Eof)
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.position + 1).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(self.current()) == mem::discriminant(token)
    }

    fn expect(&mut self, expected: Token, description: &'static str) -> Result<(), ParseError> {
        if mem::discriminant(self.current()) != mem::discriminant(&expected) {
            return Err(ParseError::UnexpectedToken {
                found: self.current().clone(),
                expected: description,
            });
        }
        self.advance();
        Ok(())
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    /// Parse the whole token sequence into a single expression.
    ///
    /// Every token must be consumed; trailing tokens after a complete
    /// expression are an error, so partial matches never silently succeed.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;
        if !self.check(&Token::Eof) {
            return Err(ParseError::TrailingInput {
                found: self.current().clone(),
            });
        }
        Ok(expr)
    }

    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.descend()?;
        let expr = self.parse_or();
        self.depth -= 1;
        expr
    }

    /// `||` and `??` share the lowest tier and are parsed left-to-right in
    /// one loop; the evaluator distinguishes them.
    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;

        loop {
            let op = match self.current() {
                Token::OrOr => BinOp::Or,
                Token::QuestionQuestion => BinOp::NullCoalesce,
                _ => break,
            };

            self.advance();
            let right = self.parse_and()?;

            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;

        while self.check(&Token::AndAnd) {
            self.advance();
            let right = self.parse_equality()?;

            left = Expr::Binary {
                op: BinOp::And,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;

        loop {
            let op = match self.current() {
                Token::EqEq => BinOp::Equal,
                Token::NotEq => BinOp::NotEqual,
                _ => break,
            };

            self.advance();
            let right = self.parse_comparison()?;

            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;

        loop {
            let op = match self.current() {
                Token::Gt => BinOp::GreaterThan,
                Token::GtEq => BinOp::GreaterEqual,
                Token::Lt => BinOp::LessThan,
                Token::LtEq => BinOp::LessEqual,
                _ => break,
            };

            self.advance();
            let right = self.parse_additive()?;

            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.current() {
                Token::Plus => BinOp::Add,
                Token::Minus => BinOp::Subtract,
                _ => break,
            };

            self.advance();
            let right = self.parse_multiplicative()?;

            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.current() {
                Token::Star => BinOp::Multiply,
                Token::Slash => BinOp::Divide,
                _ => break,
            };

            self.advance();
            let right = self.parse_unary()?;

            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// Unary operators recurse into themselves, so `!!x` and `--x` parse.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        self.descend()?;
        let expr = if self.check(&Token::Bang) {
            self.advance();
            self.parse_unary().map(|operand| Expr::Unary {
                op: UnOp::Not,
                operand: Box::new(operand),
            })
        } else if self.check(&Token::Minus) {
            self.advance();
            self.parse_unary().map(|operand| Expr::Unary {
                op: UnOp::Negate,
                operand: Box::new(operand),
            })
        } else {
            self.parse_call()
        };
        self.depth -= 1;
        expr
    }

    /// Call forms are recognized only when the keyword immediately
    /// precedes `(`.
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        match (self.current(), self.peek()) {
            (Token::If, Token::LParen) => self.parse_if(),
            (Token::Contains, Token::LParen) => self.parse_contains(),
            (Token::Length, Token::LParen) => self.parse_length(),
            _ => self.parse_primary(),
        }
    }

    fn parse_if(&mut self) -> Result<Expr, ParseError> {
        self.advance(); // consume `if`
        self.advance(); // consume `(`
        let condition = self.parse_expression()?;

        if !self.check(&Token::Comma) {
            // `if(condition)` is the boolean form.
            self.expect(Token::RParen, "')' to close if(...)")?;
            return Ok(Expr::If {
                condition: Box::new(condition),
                then_branch: Box::new(Expr::Boolean(true)),
                else_branch: Some(Box::new(Expr::Boolean(false))),
            });
        }

        self.advance(); // consume `,`
        let then_branch = self.parse_expression()?;

        let else_branch = if self.check(&Token::Comma) {
            self.advance();
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };

        self.expect(Token::RParen, "')' to close if(...)")?;
        Ok(Expr::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch,
        })
    }

    fn parse_contains(&mut self) -> Result<Expr, ParseError> {
        self.advance(); // consume `contains`
        self.advance(); // consume `(`
        let haystack = self.parse_expression()?;
        self.expect(Token::Comma, "',' between contains arguments")?;
        let needle = self.parse_expression()?;
        self.expect(Token::RParen, "')' to close contains(...)")?;
        Ok(Expr::Contains {
            haystack: Box::new(haystack),
            needle: Box::new(needle),
        })
    }

    fn parse_length(&mut self) -> Result<Expr, ParseError> {
        self.advance(); // consume `length`
        self.advance(); // consume `(`
        let operand = self.parse_expression()?;
        self.expect(Token::RParen, "')' to close length(...)")?;
        Ok(Expr::Length(Box::new(operand)))
    }

    /// Parse primary expressions (atoms): literals, references, bare words
    /// and parenthesized groups.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.current().clone() {
            Token::Number(n) => {
                self.advance();
                Ok(Expr::Number(n))
            }
            Token::String(s) => {
                self.advance();
                Ok(Expr::String(s))
            }
            Token::Boolean(b) => {
                self.advance();
                Ok(Expr::Boolean(b))
            }
            Token::Reference(namespace, path) => {
                self.advance();
                Ok(Expr::Reference { namespace, path })
            }
            // A bare word that survived lexing as a generic identifier
            // behaves as a string literal.
            Token::Identifier(word) => {
                self.advance();
                Ok(Expr::String(word))
            }
            Token::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(Token::RParen, "')' to close grouping")?;
                Ok(expr)
            }
            token => Err(ParseError::UnexpectedToken {
                found: token,
                expected: "an expression",
            }),
        }
    }
}
