use crate::ast::{Namespace, Token};

/// Error raised when the lexer hits a character it does not recognize.
///
/// The lexer never skips or recovers; callers treat this as "the input is
/// not an expression".
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub position: usize,
    pub character: char,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unexpected character '{}' at position {}",
            self.character, self.position
        )
    }
}

impl std::error::Error for LexError {}

/// Tokenize a full input string.
///
/// The returned sequence always ends with exactly one [`Token::Eof`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token == Token::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if matches!(ch, ' ' | '\t' | '\r' | '\n') {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Words run over letters, digits, underscores and dots. Dots are part
    /// of the word so that `fm.author.name` lexes as one reference.
    fn read_word(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' || ch == '.' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// Read a string delimited by `quote`; the other quote character may
    /// appear unescaped inside. `\n`, `\t` and `\r` are translated; any
    /// other escaped character is kept with the backslash dropped. An
    /// unterminated string consumes to end of input without error.
    fn read_string(&mut self, quote: char) -> String {
        let mut result = String::new();
        self.advance(); // consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                c if c == quote => {
                    self.advance();
                    return result;
                }
                '\\' => {
                    self.advance(); // consume backslash
                    match self.current_char() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        Some('r') => result.push('\r'),
                        Some(other) => result.push(other),
                        None => return result,
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        result
    }

    /// Read a run of digits with at most one decimal point. A second dot
    /// terminates the number, so `1.2.3` lexes as `1.2` followed by `.3`.
    fn read_number(&mut self) -> Token {
        let mut number = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::Number(number.parse::<f64>().unwrap_or(0.0))
    }

    fn classify_word(word: String) -> Token {
        match word.as_str() {
            "true" => Token::Boolean(true),
            "false" => Token::Boolean(false),
            "if" => Token::If,
            "contains" => Token::Contains,
            "length" => Token::Length,
            _ => {
                if let Some(path) = word.strip_prefix("fm.") {
                    Token::Reference(Namespace::Frontmatter, path.to_string())
                } else if let Some(path) = word.strip_prefix("file.") {
                    Token::Reference(Namespace::File, path.to_string())
                } else {
                    Token::Identifier(word)
                }
            }
        }
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(Token::Eof);
        };

        match ch {
            // Two-character operators are matched before their
            // one-character prefixes.
            '=' if self.peek_char(1) == Some('=') => {
                self.advance();
                self.advance();
                Ok(Token::EqEq)
            }
            '!' => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Ok(Token::NotEq)
                } else {
                    self.advance();
                    Ok(Token::Bang)
                }
            }
            '>' => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Ok(Token::GtEq)
                } else {
                    self.advance();
                    Ok(Token::Gt)
                }
            }
            '<' => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Ok(Token::LtEq)
                } else {
                    self.advance();
                    Ok(Token::Lt)
                }
            }
            '&' if self.peek_char(1) == Some('&') => {
                self.advance();
                self.advance();
                Ok(Token::AndAnd)
            }
            '|' if self.peek_char(1) == Some('|') => {
                self.advance();
                self.advance();
                Ok(Token::OrOr)
            }
            '?' if self.peek_char(1) == Some('?') => {
                self.advance();
                self.advance();
                Ok(Token::QuestionQuestion)
            }
            '+' => {
                self.advance();
                Ok(Token::Plus)
            }
            '-' => {
                self.advance();
                Ok(Token::Minus)
            }
            '*' => {
                self.advance();
                Ok(Token::Star)
            }
            '/' => {
                self.advance();
                Ok(Token::Slash)
            }
            '(' => {
                self.advance();
                Ok(Token::LParen)
            }
            ')' => {
                self.advance();
                Ok(Token::RParen)
            }
            ',' => {
                self.advance();
                Ok(Token::Comma)
            }
            '"' => Ok(Token::String(self.read_string('"'))),
            '\'' => Ok(Token::String(self.read_string('\''))),
            c if c.is_ascii_digit() => Ok(self.read_number()),
            '.' if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => {
                Ok(self.read_number())
            }
            c if c.is_alphabetic() || c == '_' => {
                let word = self.read_word();
                Ok(Lexer::classify_word(word))
            }
            _ => Err(LexError {
                position: self.position,
                character: ch,
            }),
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("true false if contains length");
    assert_eq!(lexer.next_token(), Ok(Token::Boolean(true)));
    assert_eq!(lexer.next_token(), Ok(Token::Boolean(false)));
    assert_eq!(lexer.next_token(), Ok(Token::If));
    assert_eq!(lexer.next_token(), Ok(Token::Contains));
    assert_eq!(lexer.next_token(), Ok(Token::Length));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_references() {
    let mut lexer = Lexer::new("fm.count > 10");
    assert_eq!(
        lexer.next_token(),
        Ok(Token::Reference(Namespace::Frontmatter, "count".to_string()))
    );
    assert_eq!(lexer.next_token(), Ok(Token::Gt));
    assert_eq!(lexer.next_token(), Ok(Token::Number(10.0)));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}
