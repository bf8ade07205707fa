use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A runtime numeric value.
///
/// Integer arithmetic stays integral until it overflows, at which point the
/// result falls back to a float. Division is always real-valued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Parses a numeric lexeme made of digits and `.` characters.
    /// Returns `None` when it holds more than one decimal point or no digits.
    pub fn from_literal(lexeme: &str) -> Option<Number> {
        match lexeme.matches('.').count() {
            // digit runs too long for i64 degrade to a float
            0 => match lexeme.parse::<i64>() {
                Ok(n) => Some(Number::Int(n)),
                Err(_) => lexeme.parse::<f64>().ok().map(Number::Float),
            },
            1 => lexeme.parse::<f64>().ok().map(Number::Float),
            _ => None,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Float(x) => x == 0.0,
        }
    }

    /// Square root, or `None` for a negative operand.
    pub fn sqrt(self) -> Option<Number> {
        let x = self.as_f64();
        if x < 0.0 {
            None
        } else {
            Some(Number::Float(x.sqrt()))
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Number::Float(a as f64 + b as f64), Number::Int),
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_sub(b)
                .map_or_else(|| Number::Float(a as f64 - b as f64), Number::Int),
            (a, b) => Number::Float(a.as_f64() - b.as_f64()),
        }
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_mul(b)
                .map_or_else(|| Number::Float(a as f64 * b as f64), Number::Int),
            (a, b) => Number::Float(a.as_f64() * b.as_f64()),
        }
    }
}

/// Real-valued division. A zero divisor is the caller's problem.
impl Div for Number {
    type Output = Number;

    fn div(self, rhs: Number) -> Number {
        Number::Float(self.as_f64() / rhs.as_f64())
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Int(n) => n
                .checked_neg()
                .map_or_else(|| Number::Float(-(n as f64)), Number::Int),
            Number::Float(x) => Number::Float(-x),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            // Debug keeps the trailing ".0" on integral floats
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_literal_integer() {
        assert_eq!(Number::from_literal("42"), Some(Number::Int(42)));
    }

    #[test]
    fn test_from_literal_float() {
        assert_eq!(Number::from_literal("3.25"), Some(Number::Float(3.25)));
        assert_eq!(Number::from_literal(".5"), Some(Number::Float(0.5)));
        assert_eq!(Number::from_literal("7."), Some(Number::Float(7.0)));
    }

    #[test]
    fn test_from_literal_too_many_dots() {
        assert_eq!(Number::from_literal("1.2.3"), None);
        assert_eq!(Number::from_literal(".."), None);
        assert_eq!(Number::from_literal("."), None);
    }

    #[test]
    fn test_from_literal_huge_integer() {
        assert_eq!(
            Number::from_literal("100000000000000000000"),
            Some(Number::Float(1e20))
        );
    }

    #[test]
    fn test_integer_arithmetic_stays_integral() {
        assert_eq!(Number::Int(2) + Number::Int(3), Number::Int(5));
        assert_eq!(Number::Int(2) - Number::Int(3), Number::Int(-1));
        assert_eq!(Number::Int(4) * Number::Int(5), Number::Int(20));
    }

    #[test]
    fn test_mixed_arithmetic_promotes() {
        assert_eq!(Number::Int(2) + Number::Float(0.5), Number::Float(2.5));
        assert_eq!(Number::Float(1.5) * Number::Int(2), Number::Float(3.0));
    }

    #[test]
    fn test_division_is_real_valued() {
        assert_eq!(Number::Int(1) / Number::Int(2), Number::Float(0.5));
        assert_eq!(Number::Int(4) / Number::Int(2), Number::Float(2.0));
    }

    #[test]
    fn test_overflow_falls_back_to_float() {
        assert_eq!(
            Number::Int(i64::MAX) + Number::Int(1),
            Number::Float(i64::MAX as f64 + 1.0)
        );
        assert_eq!(-Number::Int(i64::MIN), Number::Float(-(i64::MIN as f64)));
    }

    #[test]
    fn test_is_zero() {
        assert!(Number::Int(0).is_zero());
        assert!(Number::Float(0.0).is_zero());
        assert!(Number::Float(-0.0).is_zero());
        assert!(!Number::Float(0.1).is_zero());
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(Number::Int(9).sqrt(), Some(Number::Float(3.0)));
        assert_eq!(Number::Int(-1).sqrt(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Int(25).to_string(), "25");
        assert_eq!(Number::Float(2.0).to_string(), "2.0");
        assert_eq!(Number::Float(0.5).to_string(), "0.5");
        assert_eq!(Number::Int(-10).to_string(), "-10");
    }
}
