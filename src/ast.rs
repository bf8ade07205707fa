use crate::number::Number;

/// Absent signs parse as `Plus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn apply(self, value: Number) -> Number {
        match self {
            Sign::Plus => value,
            Sign::Minus => -value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOp {
    Add,
    Sub,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulOp {
    Mul,
    Div,
    /// `a √ b` is `a * sqrt(b)`.
    SqrtMul,
}

/// `{ stmt stmt ... }`, never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Declare { name: String, expr: Expr },
    Assign { name: String, expr: Expr },
    Print { expr: Expr },
}

/// A sum: `[sign] term (('+'|'-') term)*`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub sign: Sign,
    pub first: Term,
    pub rest: Vec<(AddOp, Term)>,
}

/// A product: `factor (('*'|'/') [sign] factor)*`.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub first: Factor,
    pub rest: Vec<(MulOp, Sign, Factor)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    Num(Number),
    Grouped(Box<Expr>),
    Var(String),
}

impl Expr {
    /// An unsigned expression made of a single term.
    pub fn term(first: Term) -> Self {
        Expr {
            sign: Sign::Plus,
            first,
            rest: Vec::new(),
        }
    }
}

impl Term {
    pub fn factor(first: Factor) -> Self {
        Term {
            first,
            rest: Vec::new(),
        }
    }
}

impl From<Factor> for Expr {
    fn from(factor: Factor) -> Self {
        Expr::term(Term::factor(factor))
    }
}
