use super::sexpr_parser::{parse_expression, unexpected};
use super::{parse_atom, Program};
use crate::error::Result;
use crate::lexer::{Token, TokenKind};
use crate::runtime::Value;

/// Parser for the line-oriented shell syntax
///
/// Each line is split on top-level semicolons. A segment that starts with
/// `(` is a single S-expression; any other segment is read as an implicit
/// list, so `insert "x"` means `(insert "x")`. Empty segments are skipped.
/// Parentheses must close on the line that opens them; only quoted strings
/// may span lines.
pub struct ShellParser {
    tokens: Vec<Token>,
}

impl ShellParser {
    /// Creates a new shell parser
    pub fn new(tokens: Vec<Token>) -> Self {
        ShellParser { tokens }
    }

    /// Parses every segment into a top-level form
    pub fn parse(&self) -> Result<Program> {
        let mut program = Vec::new();
        let mut pos = 0;

        loop {
            let Some(token) = self.tokens.get(pos) else {
                break;
            };
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Semicolon | TokenKind::Newline => pos += 1,
                TokenKind::LeftParen => {
                    let (value, next) = parse_expression(&self.tokens, pos)?;
                    pos = self.expect_segment_end(next)?;
                    program.push(value);
                }
                _ => {
                    let (value, next) = self.parse_implicit_list(pos)?;
                    program.push(value);
                    pos = next;
                }
            }
        }

        Ok(program)
    }

    /// Reads tokens up to the end of the segment into one list
    fn parse_implicit_list(&self, mut pos: usize) -> Result<(Value, usize)> {
        let mut elements = Vec::new();

        while let Some(token) = self.tokens.get(pos) {
            match &token.kind {
                TokenKind::Semicolon | TokenKind::Newline | TokenKind::Eof => break,
                TokenKind::LeftParen => {
                    let (value, next) = parse_expression(&self.tokens, pos)?;
                    elements.push(value);
                    pos = next;
                }
                TokenKind::RightParen => return Err(unexpected(token)),
                TokenKind::String(s) => {
                    elements.push(Value::String(s.clone()));
                    pos += 1;
                }
                TokenKind::Atom(text) => {
                    elements.push(parse_atom(text));
                    pos += 1;
                }
            }
        }

        Ok((Value::List(elements), pos))
    }

    /// A parenthesized segment must not be followed by more tokens
    fn expect_segment_end(&self, pos: usize) -> Result<usize> {
        match self.tokens.get(pos) {
            None => Ok(pos),
            Some(token) => match token.kind {
                TokenKind::Semicolon | TokenKind::Newline | TokenKind::Eof => Ok(pos),
                _ => Err(unexpected(token)),
            },
        }
    }
}
