use std::fmt;

use crate::expression::errors::ExpressionError;

/// One of the four arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Enumeration order used by the operator sequence generator
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Apply the operator to `a` (pushed first) and `b` (pushed last).
    ///
    /// # Errors
    ///
    /// Division requires a nonzero divisor that divides `a` exactly. Any
    /// operation whose result does not fit in an `i64` fails with
    /// [`ExpressionError::Overflow`].
    #[inline]
    pub fn apply(self, a: i64, b: i64) -> Result<i64, ExpressionError> {
        match self {
            Operator::Add => a.checked_add(b).ok_or(ExpressionError::Overflow),
            Operator::Sub => a.checked_sub(b).ok_or(ExpressionError::Overflow),
            Operator::Mul => a.checked_mul(b).ok_or(ExpressionError::Overflow),
            Operator::Div => {
                if b == 0 {
                    return Err(ExpressionError::DivisionByZero);
                }
                if a.checked_rem(b).ok_or(ExpressionError::Overflow)? != 0 {
                    return Err(ExpressionError::InexactDivision {
                        dividend: a,
                        divisor: b,
                    });
                }
                a.checked_div(b).ok_or(ExpressionError::Overflow)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single postfix token: an operand value or an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Operand(i64),
    Operator(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Operand(value) => write!(f, "{}", value),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}
