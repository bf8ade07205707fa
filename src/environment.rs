use std::collections::HashMap;
use std::f64::consts::{E, PI, TAU};

use crate::error::RuntimeError;
use crate::number::Number;

/// Variable bindings for a single program run.
///
/// Every environment starts with `e`, `pi` and `tau` bound. They are ordinary
/// bindings: they can be reassigned, and declaring them again fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Number>,
}

impl Environment {
    pub fn new() -> Self {
        let variables = HashMap::from([
            ("e".to_string(), Number::Float(E)),
            ("pi".to_string(), Number::Float(PI)),
            ("tau".to_string(), Number::Float(TAU)),
        ]);
        Environment { variables }
    }

    pub fn declare(&mut self, name: &str, value: Number) -> Result<(), RuntimeError> {
        if self.variables.contains_key(name) {
            return Err(RuntimeError::DuplicateBinding(name.to_string()));
        }
        self.variables.insert(name.to_string(), value);
        Ok(())
    }

    pub fn assign(&mut self, name: &str, value: Number) -> Result<(), RuntimeError> {
        match self.variables.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(RuntimeError::UnboundVariable(name.to_string())),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<Number, RuntimeError> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnboundVariable(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Number> {
        self.variables.get(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Number)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
