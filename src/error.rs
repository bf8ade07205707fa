use std::io;

use thiserror::Error;

/// Failure while turning source text into tokens.
#[derive(Debug, Error, PartialEq)]
pub enum LexError {
    /// `position` is 1-based.
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },
    #[error("Malformed number '{lexeme}' at position {offset}")]
    MalformedNumber { lexeme: String, offset: usize },
}

/// Failure while building the syntax tree.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Expected {expected}, got {found} '{lexeme}' at position {offset}")]
    Expected {
        expected: &'static str,
        found: &'static str,
        lexeme: String,
        offset: usize,
    },
    #[error("Unexpected {found} '{lexeme}' in {context} at position {offset}")]
    Unexpected {
        context: &'static str,
        found: &'static str,
        lexeme: String,
        offset: usize,
    },
}

/// Failure while running a parsed program.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Variable '{0}' already exists")]
    DuplicateBinding(String),
    #[error("Variable '{0}' does not exist")]
    UnboundVariable(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Square root of negative number {0}")]
    MathDomain(String),
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
