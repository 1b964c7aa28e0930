//! Lexer (tokenizer) for the netlist DSL.
//!
//! Netlists are whitespace separated, so the lexer only splits words,
//! directives and line breaks. Whether a word is a node label or a value is
//! decided by the parser from its position.

use crate::error::{MnaError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A word that does not parse as a value (names, labels, keywords)
    Identifier,
    /// A word that parses as a value, possibly with a unit suffix
    Number,
    /// A directive (starts with '.')
    Directive,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing netlist input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
    at_line_start: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
            at_line_start: true,
        }
    }

    /// Get the next token.
    ///
    /// A '.' opens a directive only as the first word of a line; elsewhere it
    /// is part of a word, so `.5u` is a value.
    pub fn next_token(&mut self) -> Result<Token> {
        let token = self.lex_token()?;
        self.at_line_start = token.kind == TokenKind::Newline;
        Ok(token)
    }

    fn lex_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let (line, column) = (self.line, self.column);
        let token = |kind, text| Token {
            kind,
            text,
            line,
            column,
        };

        let ch = match self.chars.peek().copied() {
            Some(ch) => ch,
            None => return Ok(token(TokenKind::Eof, String::new())),
        };

        match ch {
            '\n' => {
                self.advance();
                Ok(token(TokenKind::Newline, "\n".to_string()))
            }
            '.' if self.at_line_start => {
                self.advance();
                let name = self.read_word();
                if name.is_empty() {
                    return Err(MnaError::lexer(line, column, "empty directive"));
                }
                Ok(token(TokenKind::Directive, format!(".{}", name)))
            }
            _ if ch.is_control() => Err(MnaError::lexer(
                line,
                column,
                format!("unexpected character {:?}", ch),
            )),
            _ => {
                let text = self.read_word();
                let kind = if parse_value(&text).is_some() {
                    TokenKind::Number
                } else {
                    TokenKind::Identifier
                };
                Ok(token(kind, text))
            }
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.advance();
            } else if is_comment_start(ch) {
                // Skip comment until end of line
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() || ch.is_control() || is_comment_start(ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }
}

fn is_comment_start(ch: char) -> bool {
    ch == '#' || ch == ';'
}

/// Parse a number string with optional unit suffix.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let last = text.chars().last()?;

    let multiplier = match last {
        'p' => 1e-12,
        'n' => 1e-9,
        'u' | 'µ' => 1e-6,
        'm' => 1e-3,
        'k' | 'K' => 1e3,
        'M' => 1e6,
        'G' => 1e9,
        _ => return text.parse::<f64>().ok().filter(|v| v.is_finite()),
    };

    let digits = &text[..text.len() - last.len_utf8()];
    digits
        .parse::<f64>()
        .ok()
        .map(|v| v * multiplier)
        .filter(|v| v.is_finite())
}
