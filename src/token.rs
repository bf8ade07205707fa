use std::fmt;

use crate::number::Number;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Number(Number),
    Id,
    Num,
    Plus,
    Minus,
    Multiply,
    Divide,
    Sqrt,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semi,
    Assign,
    Eof,
}

impl TokenKind {
    /// Same kind, ignoring any literal payload.
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Number(_) => "NUMBER",
            TokenKind::Id => "ID",
            TokenKind::Num => "NUM",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MUL",
            TokenKind::Divide => "DIV",
            TokenKind::Sqrt => "SQRT",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Semi => "SEMI",
            TokenKind::Assign => "EQ",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexed token. `offset` is the 0-based character index of the first
/// character of `lexeme` in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, offset: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            offset,
        }
    }

    pub fn eof(offset: usize) -> Self {
        Token::new(TokenKind::Eof, "<EOF>", offset)
    }
}
