//! Parser for the structured encoding
//!
//! Grammar:
//!
//! ```text
//! document := entry*
//! entry    := IDENT ':' value [',' | ';']
//! value    := INT | STRING | IDENT | '{' entry* '}' | '[' [value (',' value)* [',']] ']'
//! ```
//!
//! `#` starts a comment running to end of line. Strings accept the escapes
//! the writer produces plus `\'`, `\xHH` and one-to-three digit octal.

use super::TextValue;
use crate::error::DecodingError;
use std::iter::Peekable;
use std::str::Chars;

/// Maximum nesting depth of messages and lists
pub(super) const MAX_NESTING_DEPTH: usize = 64;

/// Parse a full document into its top-level entries
pub(super) fn parse(text: &str) -> Result<Vec<(String, TextValue)>, DecodingError> {
    let mut parser = Parser::new(text)?;
    let entries = parser.entries(None, 0)?;
    Ok(entries)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ident(String),
    Int(i128),
    Str(String),
    Colon,
    Comma,
    Semicolon,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Eof,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Ident(s) => format!("identifier '{}'", s),
            Token::Int(n) => format!("integer {}", n),
            Token::Str(_) => "string".to_string(),
            Token::Colon => "':'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Semicolon => "';'".to_string(),
            Token::LBrace => "'{'".to_string(),
            Token::RBrace => "'}'".to_string(),
            Token::LBracket => "'['".to_string(),
            Token::RBracket => "']'".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }
}

/// Token plus its 1-based start position
#[derive(Debug, Clone)]
struct Spanned {
    token: Token,
    line: usize,
    column: usize,
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str) -> Self {
        Lexer {
            chars: text.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn error(&self, detail: impl Into<String>) -> DecodingError {
        DecodingError::syntax(detail, self.line, self.column)
    }

    fn skip_trivia(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() {
                self.bump();
            } else if c == '#' {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Result<Spanned, DecodingError> {
        self.skip_trivia();
        let (line, column) = (self.line, self.column);
        let token = match self.chars.peek().copied() {
            None => Token::Eof,
            Some(c) => match c {
                ':' | ',' | ';' | '{' | '}' | '[' | ']' => {
                    self.bump();
                    match c {
                        ':' => Token::Colon,
                        ',' => Token::Comma,
                        ';' => Token::Semicolon,
                        '{' => Token::LBrace,
                        '}' => Token::RBrace,
                        '[' => Token::LBracket,
                        _ => Token::RBracket,
                    }
                }
                '"' => Token::Str(self.string()?),
                '-' | '0'..='9' => Token::Int(self.integer()?),
                c if c == '_' || c.is_ascii_alphabetic() => Token::Ident(self.ident()),
                other => return Err(self.error(format!("unexpected character '{}'", other))),
            },
        };
        Ok(Spanned {
            token,
            line,
            column,
        })
    }

    fn ident(&mut self) -> String {
        let mut s = String::new();
        while let Some(&c) = self.chars.peek() {
            if c == '_' || c.is_ascii_alphanumeric() {
                s.push(c);
                self.bump();
            } else {
                break;
            }
        }
        s
    }

    fn integer(&mut self) -> Result<i128, DecodingError> {
        let negative = self.chars.peek() == Some(&'-');
        if negative {
            self.bump();
        }
        let mut value: i128 = 0;
        let mut digits = 0;
        while let Some(d) = self.chars.peek().and_then(|c| c.to_digit(10)) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i128::from(d)))
                .ok_or_else(|| self.error("integer literal overflows"))?;
            digits += 1;
            self.bump();
        }
        if digits == 0 {
            return Err(self.error("expected digits"));
        }
        Ok(if negative { -value } else { value })
    }

    fn string(&mut self) -> Result<String, DecodingError> {
        self.bump();
        let mut bytes = Vec::new();
        loop {
            let c = match self.bump() {
                None | Some('\n') => return Err(self.error("unterminated string")),
                Some(c) => c,
            };
            match c {
                '"' => break,
                '\\' => self.escape(&mut bytes)?,
                c => {
                    let mut buf = [0u8; 4];
                    bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                }
            }
        }
        String::from_utf8(bytes).map_err(|_| self.error("string is not valid UTF-8"))
    }

    fn escape(&mut self, bytes: &mut Vec<u8>) -> Result<(), DecodingError> {
        let c = self
            .bump()
            .ok_or_else(|| self.error("unterminated escape"))?;
        match c {
            'n' => bytes.push(b'\n'),
            'r' => bytes.push(b'\r'),
            't' => bytes.push(b'\t'),
            '"' => bytes.push(b'"'),
            '\'' => bytes.push(b'\''),
            '\\' => bytes.push(b'\\'),
            'x' => {
                let mut value: u32 = 0;
                for _ in 0..2 {
                    let d = self
                        .chars
                        .peek()
                        .and_then(|c| c.to_digit(16))
                        .ok_or_else(|| self.error("expected hex digit"))?;
                    value = value * 16 + d;
                    self.bump();
                }
                bytes.push(value as u8);
            }
            '0'..='7' => {
                let mut value = c.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match self.chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            self.bump();
                        }
                        None => break,
                    }
                }
                let byte = u8::try_from(value).map_err(|_| self.error("octal escape out of range"))?;
                bytes.push(byte);
            }
            other => return Err(self.error(format!("unknown escape '\\{}'", other))),
        }
        Ok(())
    }
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Spanned,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Result<Self, DecodingError> {
        let mut lexer = Lexer::new(text);
        let current = lexer.next_token()?;
        Ok(Parser { lexer, current })
    }

    fn advance(&mut self) -> Result<Spanned, DecodingError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn unexpected(&self, expected: &str) -> DecodingError {
        DecodingError::syntax(
            format!("expected {}, found {}", expected, self.current.token.describe()),
            self.current.line,
            self.current.column,
        )
    }

    fn expect(&mut self, token: Token, expected: &str) -> Result<(), DecodingError> {
        if self.current.token != token {
            return Err(self.unexpected(expected));
        }
        self.advance()?;
        Ok(())
    }

    /// Entries up to `close` (or end of input at top level)
    fn entries(
        &mut self,
        close: Option<Token>,
        depth: usize,
    ) -> Result<Vec<(String, TextValue)>, DecodingError> {
        let end = close.unwrap_or(Token::Eof);
        let mut entries = Vec::new();
        while self.current.token != end {
            let key = match &self.current.token {
                Token::Ident(key) => key.clone(),
                _ => return Err(self.unexpected("field name")),
            };
            self.advance()?;
            self.expect(Token::Colon, "':'")?;
            let value = self.value(depth)?;
            entries.push((key, value));
            if matches!(self.current.token, Token::Comma | Token::Semicolon) {
                self.advance()?;
            }
        }
        Ok(entries)
    }

    fn value(&mut self, depth: usize) -> Result<TextValue, DecodingError> {
        if depth >= MAX_NESTING_DEPTH {
            return Err(DecodingError::syntax(
                format!("nesting deeper than {}", MAX_NESTING_DEPTH),
                self.current.line,
                self.current.column,
            ));
        }
        match self.current.token.clone() {
            Token::Int(n) => {
                self.advance()?;
                Ok(TextValue::Int(n))
            }
            Token::Str(s) => {
                self.advance()?;
                Ok(TextValue::Str(s))
            }
            Token::Ident(name) => {
                self.advance()?;
                Ok(TextValue::Enum(name))
            }
            Token::LBrace => {
                self.advance()?;
                let entries = self.entries(Some(Token::RBrace), depth + 1)?;
                self.expect(Token::RBrace, "'}'")?;
                Ok(TextValue::Message(entries))
            }
            Token::LBracket => {
                self.advance()?;
                let mut items = Vec::new();
                while self.current.token != Token::RBracket {
                    items.push(self.value(depth + 1)?);
                    match self.current.token {
                        Token::Comma => {
                            self.advance()?;
                        }
                        Token::RBracket => {}
                        _ => return Err(self.unexpected("',' or ']'")),
                    }
                }
                self.advance()?;
                Ok(TextValue::List(items))
            }
            _ => Err(self.unexpected("value")),
        }
    }
}
