use crate::ast::{ColorStop, GradientKind, GradientNode, Length, LengthUnit, Orientation, StopColor};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

const SIDES: [&str; 4] = ["top", "bottom", "left", "right"];

/// Keywords that can open a radial-gradient prelude.
const RADIAL_KEYWORDS: [&str; 9] = [
    "circle",
    "ellipse",
    "closest-side",
    "closest-corner",
    "farthest-side",
    "farthest-corner",
    "contain",
    "cover",
    "at",
];

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_col(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| t.col)
            .unwrap_or(1)
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos).map(|t| t.token.clone()).unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(msg, self.current_col())
    }

    fn expect_token(&mut self, expected: &Token) -> Result<(), ParseError> {
        if self.peek() == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.err(format!("expected {:?}, got {:?}", expected, self.peek())))
        }
    }

    // ── List ──────────────────────────────────────────────────────────────

    pub fn parse_list(&mut self) -> Result<Vec<GradientNode>, ParseError> {
        let mut gradients = vec![self.parse_gradient()?];
        while self.peek() == &Token::Comma {
            self.advance();
            gradients.push(self.parse_gradient()?);
        }
        match self.peek() {
            Token::Eof => Ok(gradients),
            tok => Err(self.err(format!("unexpected {:?} after gradient", tok))),
        }
    }

    // ── Gradient ──────────────────────────────────────────────────────────

    fn parse_gradient(&mut self) -> Result<GradientNode, ParseError> {
        let kind = match self.peek() {
            Token::Ident(name) => GradientKind::from_name(name)
                .ok_or_else(|| self.err(format!("unsupported gradient type {:?}", name)))?,
            tok => return Err(self.err(format!("expected a gradient function, got {:?}", tok))),
        };
        self.advance();
        self.expect_token(&Token::LParen)?;

        let orientation = match kind {
            GradientKind::Linear => self.parse_linear_orientation()?,
            GradientKind::Radial => self.parse_radial_prelude()?,
        };
        if orientation.is_some() {
            self.expect_token(&Token::Comma)?;
        }

        let mut color_stops = vec![self.parse_color_stop()?];
        while self.peek() == &Token::Comma {
            self.advance();
            color_stops.push(self.parse_color_stop()?);
        }
        self.expect_token(&Token::RParen)?;

        Ok(GradientNode { kind, orientation, color_stops })
    }

    // ── Orientation ───────────────────────────────────────────────────────

    fn parse_linear_orientation(&mut self) -> Result<Option<Orientation>, ParseError> {
        match self.peek().clone() {
            Token::Number { value, unit } if unit.eq_ignore_ascii_case("deg") => {
                self.advance();
                Ok(Some(Orientation::Angular(value)))
            }
            Token::Ident(word) if word.eq_ignore_ascii_case("to") => {
                self.advance();
                let mut sides = Vec::new();
                while let Token::Ident(side) = self.peek() {
                    let side = side.to_ascii_lowercase();
                    if !SIDES.contains(&side.as_str()) || sides.len() == 2 {
                        break;
                    }
                    self.advance();
                    sides.push(side);
                }
                if sides.is_empty() {
                    return Err(self.err("expected a side or corner after `to`"));
                }
                Ok(Some(Orientation::Directional(sides.join(" "))))
            }
            _ => Ok(None),
        }
    }

    /// Everything up to the first top-level comma, kept as text.
    fn parse_radial_prelude(&mut self) -> Result<Option<Orientation>, ParseError> {
        let opens_prelude = match self.peek() {
            Token::Ident(word) => RADIAL_KEYWORDS.contains(&word.to_ascii_lowercase().as_str()),
            _ => false,
        };
        if !opens_prelude {
            return Ok(None);
        }

        let mut parts = Vec::new();
        loop {
            match self.peek().clone() {
                Token::Comma => break,
                Token::Ident(word) => {
                    self.advance();
                    parts.push(word);
                }
                Token::Number { value, unit } => {
                    self.advance();
                    parts.push(format!("{value}{unit}"));
                }
                tok => return Err(self.err(format!("unexpected {:?} in radial shape", tok))),
            }
        }
        Ok(Some(Orientation::Shape(parts.join(" "))))
    }

    // ── Color stops ───────────────────────────────────────────────────────

    fn parse_color_stop(&mut self) -> Result<ColorStop, ParseError> {
        let color = self.parse_color()?;
        let length = match self.peek().clone() {
            Token::Number { value, unit } => {
                let unit = LengthUnit::from_suffix(&unit)
                    .ok_or_else(|| self.err(format!("unsupported stop length unit {:?}", unit)))?;
                self.advance();
                Some(Length { value, unit })
            }
            _ => None,
        };
        Ok(ColorStop { color, length })
    }

    fn parse_color(&mut self) -> Result<StopColor, ParseError> {
        match self.peek().clone() {
            Token::Hash(digits) => {
                let valid_len = matches!(digits.len(), 3 | 4 | 6 | 8);
                if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(self.err(format!("invalid hex color #{}", digits)));
                }
                self.advance();
                Ok(StopColor::Hex(digits))
            }
            Token::Ident(word) => {
                self.advance();
                if self.peek() != &Token::LParen {
                    return Ok(StopColor::Literal(word));
                }
                let args = self.parse_color_args()?;
                match word.to_ascii_lowercase().as_str() {
                    "rgb" => Ok(StopColor::Rgb(args)),
                    "rgba" => Ok(StopColor::Rgba(args)),
                    "hsl" => Ok(StopColor::Hsl(args)),
                    "hsla" => Ok(StopColor::Hsla(args)),
                    other => Err(self.err(format!("unsupported color function {:?}", other))),
                }
            }
            tok => Err(self.err(format!("expected a color, got {:?}", tok))),
        }
    }

    /// `( n [,] n [,] n ... )`; commas between components are optional.
    fn parse_color_args(&mut self) -> Result<Vec<String>, ParseError> {
        self.advance(); // consume `(`
        let mut args = Vec::new();
        loop {
            match self.advance() {
                Token::Number { value, unit } => args.push(format!("{value}{unit}")),
                Token::Comma if !args.is_empty() => continue,
                Token::RParen if !args.is_empty() => break,
                tok => return Err(self.err(format!("unexpected {:?} in color arguments", tok))),
            }
        }
        Ok(args)
    }
}

// ── Public parse entry points ─────────────────────────────────────────────

/// Parse a comma-separated list of gradient functions.
pub fn parse_str(src: &str) -> Result<Vec<GradientNode>, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_list()
}

/// Parse `src` and return its first gradient.
pub fn parse_gradient(src: &str) -> Result<GradientNode, ParseError> {
    parse_str(src)?
        .into_iter()
        .next()
        .ok_or_else(|| ParseError::new("empty gradient list", 1))
}
