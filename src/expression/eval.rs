use log::{debug, trace};

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::token::{Operator, Token};

/// Stack machine for postfix token streams.
///
/// Holds its stack between calls so the hot enumeration loop does not
/// allocate per stream.
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Vec<i64>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns an error when the stream is not a valid integer computation:
    /// - an operator finds fewer than two values on the stack
    /// - a division has a zero divisor or leaves a remainder
    /// - an intermediate value overflows `i64`
    /// - the stream does not end with exactly one value
    pub fn evaluate(&mut self, tokens: &[Token]) -> Result<i64, ExpressionError> {
        if tokens.is_empty() {
            return Err(ExpressionError::EmptyStream);
        }

        self.stack.clear();
        for (position, token) in tokens.iter().enumerate() {
            match *token {
                Token::Operand(value) => self.stack.push(value),
                Token::Operator(op) => {
                    let (b, a) = match (self.stack.pop(), self.stack.pop()) {
                        (Some(b), Some(a)) => (b, a),
                        _ => {
                            trace!("Stack underflow at token {}", position);
                            return Err(ExpressionError::StackUnderflow { position });
                        }
                    };
                    let value = op.apply(a, b).map_err(|e| {
                        trace!("Rejected {} {} {}: {}", a, op, b, e);
                        e
                    })?;
                    self.stack.push(value);
                }
            }
        }

        match self.stack.as_slice() {
            [value] => Ok(*value),
            rest => Err(ExpressionError::UnbalancedStack { depth: rest.len() }),
        }
    }
}

/// Evaluate a token stream with a fresh [`Evaluator`]
///
/// # Errors
///
/// See [`Evaluator::evaluate`].
pub fn evaluate_postfix(tokens: &[Token]) -> Result<i64, ExpressionError> {
    Evaluator::new().evaluate(tokens)
}

impl Expression {
    /// # Errors
    ///
    /// Same failure modes as the postfix evaluator: zero or inexact
    /// division and `i64` overflow.
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => Operator::Add.apply(l.evaluate()?, r.evaluate()?),
            Expression::Sub(l, r) => Operator::Sub.apply(l.evaluate()?, r.evaluate()?),
            Expression::Mul(l, r) => Operator::Mul.apply(l.evaluate()?, r.evaluate()?),
            Expression::Div(l, r) => Operator::Div.apply(l.evaluate()?, r.evaluate()?),
        };

        match &result {
            Ok(value) => debug!("Expression {} evaluated to {}", self, value),
            Err(e) => debug!("Expression {} failed: {}", self, e),
        }

        result
    }
}
