use std::io::Write;

use tracing::{debug, trace};

use crate::ast::{AddOp, Expr, Factor, MulOp, Program, Statement, Term};
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::number::Number;

/// Tree-walking evaluator. Printed values are written to `out`, one per line.
pub struct Interpreter<W: Write> {
    env: Environment,
    out: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Interpreter {
            env: Environment::new(),
            out,
        }
    }

    /// Runs every statement in order. The first error stops the run; output
    /// already written stays written.
    pub fn interpret(&mut self, program: &Program) -> Result<(), RuntimeError> {
        for statement in &program.statements {
            self.execute(statement)?;
        }
        debug!(bindings = self.env.len(), "program finished");
        Ok(())
    }

    fn execute(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
        match statement {
            Statement::Declare { name, expr } => {
                if self.env.get(name).is_some() {
                    return Err(RuntimeError::DuplicateBinding(name.clone()));
                }
                let value = self.eval_expr(expr)?;
                trace!(%name, %value, "declare");
                self.env.declare(name, value)
            }
            Statement::Assign { name, expr } => {
                if self.env.get(name).is_none() {
                    return Err(RuntimeError::UnboundVariable(name.clone()));
                }
                let value = self.eval_expr(expr)?;
                trace!(%name, %value, "assign");
                self.env.assign(name, value)
            }
            Statement::Print { expr } => {
                let value = self.eval_expr(expr)?;
                trace!(%value, "print");
                writeln!(self.out, "{}", value)?;
                Ok(())
            }
        }
    }

    pub fn eval_expr(&self, expr: &Expr) -> Result<Number, RuntimeError> {
        let mut acc = expr.sign.apply(self.eval_term(&expr.first)?);
        for (op, term) in &expr.rest {
            let value = self.eval_term(term)?;
            acc = match op {
                AddOp::Add => acc + value,
                AddOp::Sub => acc - value,
            };
        }
        Ok(acc)
    }

    fn eval_term(&self, term: &Term) -> Result<Number, RuntimeError> {
        let mut acc = self.eval_factor(&term.first)?;
        for (op, sign, factor) in &term.rest {
            let value = sign.apply(self.eval_factor(factor)?);
            acc = match op {
                MulOp::Mul => acc * value,
                MulOp::Div => {
                    if value.is_zero() {
                        return Err(RuntimeError::DivisionByZero);
                    }
                    acc / value
                }
                MulOp::SqrtMul => match value.sqrt() {
                    Some(root) => acc * root,
                    None => return Err(RuntimeError::MathDomain(value.to_string())),
                },
            };
        }
        Ok(acc)
    }

    fn eval_factor(&self, factor: &Factor) -> Result<Number, RuntimeError> {
        match factor {
            Factor::Num(value) => Ok(*value),
            Factor::Grouped(inner) => self.eval_expr(inner),
            Factor::Var(name) => self.env.lookup(name),
        }
    }

    pub fn get_variables(&self) -> &Environment {
        &self.env
    }

    pub fn into_parts(self) -> (Environment, W) {
        (self.env, self.out)
    }
}
