use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Keyword or function name (`linear-gradient`, `to`, `red`).
    Ident(String),
    /// Number with its unit suffix as written; `unit` is empty for bare numbers.
    Number { value: String, unit: String },
    /// Text after `#`, not yet validated as hex.
    Hash(String),
    LParen,
    RParen,
    Comma,
    Eof,
}

/// A token plus the 1-based column it started at.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let col = self.col;
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, col });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.src[self.pos..].chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        self.col += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'s str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if pred(c)) {
            self.advance();
        }
        &self.src[start..self.pos]
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let ch = match self.peek() {
            None => return Ok(Token::Eof),
            Some(c) => c,
        };

        match ch {
            '(' => { self.advance(); Ok(Token::LParen) }
            ')' => { self.advance(); Ok(Token::RParen) }
            ',' => { self.advance(); Ok(Token::Comma) }
            '#' => {
                self.advance();
                let digits = self.take_while(|c| c.is_ascii_alphanumeric());
                Ok(Token::Hash(digits.to_string()))
            }
            c if c.is_ascii_digit() || c == '.' => self.lex_number(),
            '-' | '+' if matches!(self.peek_second(), Some(n) if n.is_ascii_digit() || n == '.') => {
                self.lex_number()
            }
            c if c.is_alphabetic() || c == '-' || c == '_' => {
                let word = self.take_while(|c| c.is_alphanumeric() || c == '-' || c == '_');
                Ok(Token::Ident(word.to_string()))
            }
            other => Err(ParseError::new(format!("unexpected character {:?}", other), self.col)),
        }
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let col = self.col;
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.advance();
        }
        self.take_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') {
            self.advance();
            self.take_while(|c| c.is_ascii_digit());
        }
        let value = &self.src[start..self.pos];
        if value.parse::<f64>().is_err() {
            return Err(ParseError::new(format!("invalid number {:?}", value), col));
        }
        let unit = if self.peek() == Some('%') {
            self.advance();
            "%"
        } else {
            self.take_while(|c| c.is_ascii_alphabetic())
        };
        Ok(Token::Number { value: value.to_string(), unit: unit.to_string() })
    }
}
