use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Which surface syntax the scanner is reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Line oriented: `;` and newlines separate forms
    Shell,
    /// Canonical S-expressions: `;` starts a comment, newlines are whitespace
    SExpr,
}

/// Scanner for texted scripts
pub struct SExprScanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    mode: ScanMode,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
    start_line: usize,
    start_column: usize,
}

impl SExprScanner {
    /// Creates a scanner for S-expression syntax
    pub fn new(source: &str) -> Self {
        Self::with_mode(source, ScanMode::SExpr)
    }

    /// Creates a scanner for the given syntax
    pub fn with_mode(source: &str, mode: ScanMode) -> Self {
        SExprScanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            mode,
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
        }
    }

    /// Scans all tokens from source code and returns them as a vector
    pub fn scan_tokens(mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.start_column = self.column;
            self.scan_token()?;
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            String::new(),
            self.line,
            self.column,
        ));

        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<()> {
        let c = self.advance();

        match c {
            ' ' | '\r' | '\t' => {}

            '\n' => {
                if self.mode == ScanMode::Shell {
                    self.add_token(TokenKind::Newline);
                }
                self.line += 1;
                self.column = 1;
            }

            ';' => match self.mode {
                ScanMode::Shell => self.add_token(TokenKind::Semicolon),
                ScanMode::SExpr => self.skip_line_comment(),
            },

            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),

            '"' => self.scan_string()?,

            _ => self.scan_atom(),
        }

        Ok(())
    }

    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    fn scan_string(&mut self) -> Result<()> {
        let mut value = String::new();

        while !self.is_at_end() && self.peek() != '"' {
            if self.peek() == '\\' {
                self.advance();
                if self.is_at_end() {
                    break;
                }
                let escaped = self.advance();
                match escaped {
                    'n' => value.push('\n'),
                    't' => value.push('\t'),
                    'r' => value.push('\r'),
                    '0' => value.push('\0'),
                    '\\' => value.push('\\'),
                    '"' => value.push('"'),
                    '\'' => value.push('\''),
                    'u' => value.push(self.scan_unicode_escape()?),
                    _ => {
                        return Err(Error::syntax(
                            self.line,
                            self.column - 1,
                            format!("invalid escape sequence \\{}", escaped),
                        ));
                    }
                }
            } else {
                if self.peek() == '\n' {
                    self.line += 1;
                    self.column = 0;
                }
                value.push(self.advance());
            }
        }

        if self.is_at_end() {
            return Err(Error::syntax(
                self.start_line,
                self.start_column,
                "unterminated string",
            ));
        }

        self.advance(); // Closing "

        self.add_token(TokenKind::String(value));
        Ok(())
    }

    /// Reads the `{HEX}` part of a `\u{HEX}` escape
    fn scan_unicode_escape(&mut self) -> Result<char> {
        let (line, column) = (self.line, self.column);
        let invalid = |message: &str| Error::syntax(line, column, message.to_string());

        if !self.match_char('{') {
            return Err(invalid("expected '{' after \\u"));
        }
        let mut digits = String::new();
        while !self.is_at_end() && self.peek() != '}' {
            digits.push(self.advance());
        }
        if !self.match_char('}') {
            return Err(invalid("unterminated unicode escape"));
        }
        u32::from_str_radix(&digits, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| invalid("invalid unicode escape"))
    }

    fn scan_atom(&mut self) {
        while !self.is_at_end() && !is_delimiter(self.peek()) {
            self.advance();
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        self.add_token(TokenKind::Atom(text));
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            return false;
        }
        self.advance();
        true
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(
            kind,
            lexeme,
            self.start_line,
            self.start_column,
        ));
    }
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '"' | ';')
}
