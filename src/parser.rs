use tracing::{debug, trace};

use crate::ast::{AddOp, Expr, Factor, MulOp, Program, Sign, Statement, Term};
use crate::error::ParseError;
use crate::token::{Token, TokenKind};

/// Recursive-descent parser with one token of lookahead.
///
/// The token sequence is never mutated; `pos` indexes the lookahead token and
/// stops advancing once it reaches the trailing `Eof`.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            let end = tokens
                .last()
                .map_or(0, |t| t.offset + t.lexeme.chars().count());
            tokens.push(Token::eof(end));
        }
        Parser { tokens, pos: 0 }
    }

    fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Consumes the lookahead if it has the given kind, otherwise fails
    /// without consuming anything.
    fn eat(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.current_token();
        if token.kind.same_kind(&kind) {
            let token = token.clone();
            trace!(kind = %token.kind, offset = token.offset, "eat");
            self.advance();
            Ok(token)
        } else {
            Err(ParseError::Expected {
                expected: kind.name(),
                found: token.kind.name(),
                lexeme: token.lexeme.clone(),
                offset: token.offset,
            })
        }
    }

    fn unexpected(&self, context: &'static str) -> ParseError {
        let token = self.current_token();
        ParseError::Unexpected {
            context,
            found: token.kind.name(),
            lexeme: token.lexeme.clone(),
            offset: token.offset,
        }
    }

    /// Parses a whole program and requires the input to end right after the
    /// closing brace.
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let program = self.program()?;
        self.eat(TokenKind::Eof)?;
        debug!(statements = program.statements.len(), "parsed program");
        Ok(program)
    }

    fn program(&mut self) -> Result<Program, ParseError> {
        self.eat(TokenKind::LBrace)?;
        let statements = self.statement_list()?;
        self.eat(TokenKind::RBrace)?;
        Ok(Program { statements })
    }

    fn statement_list(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut results = vec![self.statement()?];

        while matches!(
            self.current_token().kind,
            TokenKind::Num | TokenKind::Id | TokenKind::Semi
        ) {
            results.push(self.statement()?);
        }

        Ok(results)
    }

    fn statement(&mut self) -> Result<Statement, ParseError> {
        let kind = self.current_token().kind;
        match kind {
            TokenKind::Num => {
                self.eat(TokenKind::Num)?;
                let name = self.variable()?;
                self.eat(TokenKind::Assign)?;
                let expr = self.expr()?;
                self.eat(TokenKind::Semi)?;
                Ok(Statement::Declare { name, expr })
            }
            TokenKind::Id => {
                let name = self.variable()?;
                self.eat(TokenKind::Assign)?;
                let expr = self.expr()?;
                self.eat(TokenKind::Semi)?;
                Ok(Statement::Assign { name, expr })
            }
            TokenKind::Semi => {
                self.eat(TokenKind::Semi)?;
                let expr = self.expr()?;
                self.eat(TokenKind::Semi)?;
                Ok(Statement::Print { expr })
            }
            _ => Err(self.unexpected("statement")),
        }
    }

    fn variable(&mut self) -> Result<String, ParseError> {
        Ok(self.eat(TokenKind::Id)?.lexeme)
    }

    /// Optional `+`/`-`; absent means `+`.
    fn sign(&mut self) -> Result<Sign, ParseError> {
        let kind = self.current_token().kind;
        match kind {
            TokenKind::Plus => {
                self.eat(TokenKind::Plus)?;
                Ok(Sign::Plus)
            }
            TokenKind::Minus => {
                self.eat(TokenKind::Minus)?;
                Ok(Sign::Minus)
            }
            _ => Ok(Sign::Plus),
        }
    }

    fn add_op(&mut self) -> Result<AddOp, ParseError> {
        let kind = self.current_token().kind;
        match kind {
            TokenKind::Plus => {
                self.eat(TokenKind::Plus)?;
                Ok(AddOp::Add)
            }
            TokenKind::Minus => {
                self.eat(TokenKind::Minus)?;
                Ok(AddOp::Sub)
            }
            _ => Err(self.unexpected("additive operator")),
        }
    }

    fn mul_op(&mut self) -> Result<MulOp, ParseError> {
        let kind = self.current_token().kind;
        match kind {
            TokenKind::Multiply => {
                self.eat(TokenKind::Multiply)?;
                Ok(MulOp::Mul)
            }
            TokenKind::Divide => {
                self.eat(TokenKind::Divide)?;
                Ok(MulOp::Div)
            }
            TokenKind::Sqrt => {
                self.eat(TokenKind::Sqrt)?;
                Ok(MulOp::SqrtMul)
            }
            _ => Err(self.unexpected("multiplicative operator")),
        }
    }

    fn expr(&mut self) -> Result<Expr, ParseError> {
        let sign = self.sign()?;
        let first = self.term()?;
        let mut rest = Vec::new();

        while matches!(self.current_token().kind, TokenKind::Plus | TokenKind::Minus) {
            let op = self.add_op()?;
            rest.push((op, self.term()?));
        }

        Ok(Expr { sign, first, rest })
    }

    fn term(&mut self) -> Result<Term, ParseError> {
        let first = self.factor()?;
        let mut rest = Vec::new();

        // `√` is accepted by mul_op but never starts a chain step here
        while matches!(
            self.current_token().kind,
            TokenKind::Multiply | TokenKind::Divide
        ) {
            let op = self.mul_op()?;
            let sign = self.sign()?;
            rest.push((op, sign, self.factor()?));
        }

        Ok(Term { first, rest })
    }

    fn factor(&mut self) -> Result<Factor, ParseError> {
        let kind = self.current_token().kind;
        match kind {
            TokenKind::Number(value) => {
                self.advance();
                Ok(Factor::Num(value))
            }
            TokenKind::LParen => {
                self.eat(TokenKind::LParen)?;
                let node = self.expr()?;
                self.eat(TokenKind::RParen)?;
                Ok(Factor::Grouped(Box::new(node)))
            }
            TokenKind::Id => Ok(Factor::Var(self.variable()?)),
            _ => Err(self.unexpected("factor")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::number::Number;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Result<Program, ParseError> {
        let tokens = Lexer::new(text).tokenize().unwrap();
        Parser::new(tokens).parse()
    }

    fn int(n: i64) -> Factor {
        Factor::Num(Number::Int(n))
    }

    #[test]
    fn test_parse_declaration() {
        let program = parse("{ num x = 5; }").unwrap();
        assert_eq!(
            program.statements,
            vec![Statement::Declare {
                name: "x".to_string(),
                expr: int(5).into(),
            }]
        );
    }

    #[test]
    fn test_parse_assignment_and_print() {
        let program = parse("{ x = y; ;x; }").unwrap();
        assert_eq!(
            program.statements,
            vec![
                Statement::Assign {
                    name: "x".to_string(),
                    expr: Factor::Var("y".to_string()).into(),
                },
                Statement::Print {
                    expr: Factor::Var("x".to_string()).into(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_precedence_shape() {
        let program = parse("{ ;2 + 3 * 4; }").unwrap();
        let expected = Expr {
            sign: Sign::Plus,
            first: Term::factor(int(2)),
            rest: vec![(
                AddOp::Add,
                Term {
                    first: int(3),
                    rest: vec![(MulOp::Mul, Sign::Plus, int(4))],
                },
            )],
        };
        assert_eq!(program.statements, vec![Statement::Print { expr: expected }]);
    }

    #[test]
    fn test_parse_signs() {
        let program = parse("{ ;-3 * -2; }").unwrap();
        let expected = Expr {
            sign: Sign::Minus,
            first: Term {
                first: int(3),
                rest: vec![(MulOp::Mul, Sign::Minus, int(2))],
            },
            rest: vec![],
        };
        assert_eq!(program.statements, vec![Statement::Print { expr: expected }]);
    }

    #[test]
    fn test_parse_grouping() {
        let program = parse("{ ;(1 - 2) / 3; }").unwrap();
        let inner = Expr {
            sign: Sign::Plus,
            first: Term::factor(int(1)),
            rest: vec![(AddOp::Sub, Term::factor(int(2)))],
        };
        let expected = Expr::term(Term {
            first: Factor::Grouped(Box::new(inner)),
            rest: vec![(MulOp::Div, Sign::Plus, int(3))],
        });
        assert_eq!(program.statements, vec![Statement::Print { expr: expected }]);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "{ num a = 1.5; a = -a * (2 - pi) / +3; ;a; }";
        assert_eq!(parse(text).unwrap(), parse(text).unwrap());
    }

    #[test]
    fn test_parse_empty_block() {
        let err = parse("{ }").unwrap_err();
        assert!(matches!(err, ParseError::Unexpected { context: "statement", .. }));
    }

    #[test]
    fn test_parse_missing_semicolon() {
        let err = parse("{ num x = 5 }").unwrap_err();
        assert_eq!(
            err,
            ParseError::Expected {
                expected: "SEMI",
                found: "RBRACE",
                lexeme: "}".to_string(),
                offset: 12,
            }
        );
    }

    #[test]
    fn test_parse_missing_closing_brace() {
        let err = parse("{ ;1;").unwrap_err();
        assert_eq!(
            err,
            ParseError::Expected {
                expected: "RBRACE",
                found: "EOF",
                lexeme: "<EOF>".to_string(),
                offset: 5,
            }
        );
    }

    #[test]
    fn test_parse_trailing_tokens() {
        let err = parse("{ ;1; } ;").unwrap_err();
        assert!(matches!(err, ParseError::Expected { expected: "EOF", found: "SEMI", .. }));
    }

    #[test]
    fn test_parse_sqrt_does_not_start_chain() {
        let err = parse("{ ;4 √ 9; }").unwrap_err();
        assert!(matches!(err, ParseError::Expected { expected: "SEMI", found: "SQRT", .. }));
    }

    #[test]
    fn test_parse_double_sign_rejected() {
        let err = parse("{ ;--1; }").unwrap_err();
        assert!(matches!(err, ParseError::Unexpected { context: "factor", .. }));
    }

    #[test]
    fn test_mul_op_reads_sqrt() {
        let tokens = Lexer::new("√").tokenize().unwrap();
        let mut parser = Parser::new(tokens);
        assert_eq!(parser.mul_op().unwrap(), MulOp::SqrtMul);
    }

    #[test]
    fn test_new_appends_missing_eof() {
        let parser = Parser::new(vec![Token::new(TokenKind::LBrace, "{", 3)]);
        assert_eq!(parser.tokens.last(), Some(&Token::eof(4)));
    }
}
