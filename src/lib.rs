mod ast;
mod environment;
mod error;
mod interpreter;
mod lexer;
mod number;
mod parser;
pub mod repl;
mod token;

pub use ast::{AddOp, Expr, Factor, MulOp, Program, Sign, Statement, Term};
pub use environment::Environment;
pub use error::{Error, LexError, ParseError, RuntimeError};
pub use interpreter::Interpreter;
pub use lexer::Lexer;
pub use number::Number;
pub use parser::Parser;
pub use token::{Token, TokenKind};

use std::io::Write;

/// Lexes, parses and runs `program`, writing printed values to `out`.
///
/// Each stage finishes before the next starts, so a lexical or syntax error
/// means nothing was printed. A runtime error leaves earlier output in place.
pub fn execute<W: Write>(program: &str, out: W) -> Result<Environment, Error> {
    let tokens = Lexer::new(program).tokenize()?;
    let tree = Parser::new(tokens).parse()?;
    let mut interpreter = Interpreter::new(out);
    interpreter.interpret(&tree)?;
    let (env, _) = interpreter.into_parts();
    Ok(env)
}
