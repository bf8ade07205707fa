use tracing::{debug, trace};

use crate::error::LexError;
use crate::number::Number;
use crate::token::{Token, TokenKind};

pub struct Lexer {
    text: Vec<char>,
    pos: usize,
    current_char: Option<char>,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let current_char = chars.first().copied();
        Lexer {
            text: chars,
            pos: 0,
            current_char,
        }
    }

    fn advance(&mut self) {
        self.pos += 1;
        self.current_char = self.text.get(self.pos).copied();
    }

    fn skip_comment(&mut self) {
        while let Some(ch) = self.current_char {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char {
            if !accept(ch) {
                break;
            }
            result.push(ch);
            self.advance();
        }
        result
    }

    fn number(&mut self, start: usize) -> Result<Token, LexError> {
        let lexeme = self.take_while(|ch| ch.is_ascii_digit() || ch == '.');
        match Number::from_literal(&lexeme) {
            Some(value) => Ok(Token::new(TokenKind::Number(value), lexeme, start)),
            None => Err(LexError::MalformedNumber {
                lexeme,
                offset: start,
            }),
        }
    }

    fn id(&mut self, start: usize) -> Token {
        let lexeme = self.take_while(char::is_alphanumeric);
        let kind = if lexeme == "num" {
            TokenKind::Num
        } else {
            TokenKind::Id
        };
        Token::new(kind, lexeme, start)
    }

    /// Returns the next token, or an `Eof` token once the input is exhausted.
    /// Calling again after `Eof` keeps returning `Eof`.
    pub fn get_next_token(&mut self) -> Result<Token, LexError> {
        while let Some(ch) = self.current_char {
            let start = self.pos;

            if matches!(ch, ' ' | '\t' | '\n') {
                self.advance();
                continue;
            }

            if ch == '#' {
                self.skip_comment();
                continue;
            }

            if ch.is_alphabetic() {
                return Ok(self.id(start));
            }

            if ch.is_ascii_digit() || ch == '.' {
                return self.number(start);
            }

            let kind = match ch {
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Multiply,
                '/' => TokenKind::Divide,
                '√' => TokenKind::Sqrt,
                ';' => TokenKind::Semi,
                '=' => TokenKind::Assign,
                _ => {
                    return Err(LexError::UnexpectedChar {
                        ch,
                        position: start + 1,
                    });
                }
            };

            self.advance();
            return Ok(Token::new(kind, ch.to_string(), start));
        }

        Ok(Token::eof(self.text.len()))
    }

    /// Lexes the whole input, ending with a single `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.get_next_token()?;
            trace!(kind = %token.kind, lexeme = %token.lexeme, offset = token.offset, "token");
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        debug!(count = tokens.len(), "lexed source");
        Ok(tokens)
    }
}
