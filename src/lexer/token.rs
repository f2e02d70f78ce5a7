use std::fmt;

/// A single token from a shell or S-expression script
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, line: usize, column: usize) -> Self {
        Token {
            kind,
            lexeme,
            line,
            column,
        }
    }
}

/// All possible token types
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Quoted string literal, escapes already decoded
    String(String),
    /// Unquoted run of characters: a number or a symbol
    Atom(String),
    /// Form separator (shell syntax only)
    Semicolon,
    /// End of line (shell syntax only)
    Newline,
    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::String(s) => write!(f, "string {:?}", s),
            TokenKind::Atom(a) => write!(f, "{}", a),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}
