use super::{parse_atom, Program};
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};
use crate::runtime::Value;

/// S-expression parser for canonical texted syntax
///
/// Top-level forms are normally parenthesized, but a bare token is accepted
/// and yields the unwrapped literal.
pub struct SExprParser {
    tokens: Vec<Token>,
}

impl SExprParser {
    /// Creates a new S-expression parser
    pub fn new(tokens: Vec<Token>) -> Self {
        SExprParser { tokens }
    }

    /// Parses every top-level form
    pub fn parse(&self) -> Result<Program> {
        let mut program = Vec::new();
        let mut pos = 0;

        while !matches!(self.tokens.get(pos).map(|t| &t.kind), None | Some(TokenKind::Eof)) {
            let (value, next) = parse_expression(&self.tokens, pos)?;
            program.push(value);
            pos = next;
        }

        Ok(program)
    }
}

/// Lists may nest at most this deep
pub(crate) const MAX_DEPTH: usize = 128;

/// Parses one expression starting at `pos`, returning it with the index of
/// the first unconsumed token
pub(crate) fn parse_expression(tokens: &[Token], pos: usize) -> Result<(Value, usize)> {
    parse_nested(tokens, pos, 0)
}

fn parse_nested(tokens: &[Token], mut pos: usize, depth: usize) -> Result<(Value, usize)> {
    loop {
        let token = token_at(tokens, pos)?;

        return match &token.kind {
            TokenKind::LeftParen => parse_list(tokens, pos, depth + 1),
            TokenKind::RightParen => Err(unexpected(token)),
            TokenKind::String(s) => Ok((Value::String(s.clone()), pos + 1)),
            TokenKind::Atom(text) => Ok((parse_atom(text), pos + 1)),
            TokenKind::Semicolon | TokenKind::Newline => {
                pos += 1;
                continue;
            }
            TokenKind::Eof => Err(Error::syntax(
                token.line,
                token.column,
                "unexpected end of input",
            )),
        };
    }
}

/// Parses `( elem* )`; `pos` points at the opening parenthesis
fn parse_list(tokens: &[Token], pos: usize, depth: usize) -> Result<(Value, usize)> {
    let open = token_at(tokens, pos)?;
    if depth > MAX_DEPTH {
        return Err(Error::syntax(open.line, open.column, "nesting too deep"));
    }

    let mut elements = Vec::new();
    let mut pos = pos + 1;

    loop {
        let token = token_at(tokens, pos)?;
        match token.kind {
            TokenKind::RightParen => return Ok((Value::List(elements), pos + 1)),
            TokenKind::Semicolon => pos += 1,
            // Newlines only reach the parser in shell syntax, where a list must close on its line
            TokenKind::Newline | TokenKind::Eof => {
                return Err(Error::syntax(open.line, open.column, "unterminated list"));
            }
            _ => {
                let (value, next) = parse_nested(tokens, pos, depth)?;
                elements.push(value);
                pos = next;
            }
        }
    }
}

fn token_at(tokens: &[Token], pos: usize) -> Result<&Token> {
    tokens
        .get(pos)
        .ok_or_else(|| Error::syntax(0, 0, "unexpected end of input"))
}

pub(crate) fn unexpected(token: &Token) -> Error {
    Error::syntax(
        token.line,
        token.column,
        format!("unexpected token '{}'", token.kind),
    )
}
