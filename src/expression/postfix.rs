use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::token::Token;

impl Expression {
    /// Rebuild the expression tree for a postfix stream using the same stack
    /// discipline as the evaluator: literals are pushed, each operator pops
    /// its right then left operand.
    ///
    /// # Errors
    ///
    /// Fails on empty streams, stack underflow and leftover stack depth.
    /// Arithmetic validity is not checked here.
    pub fn from_tokens(tokens: &[Token]) -> Result<Self, ExpressionError> {
        if tokens.is_empty() {
            return Err(ExpressionError::EmptyStream);
        }

        let mut stack: Vec<Expression> = Vec::with_capacity(tokens.len());
        for (position, token) in tokens.iter().enumerate() {
            match *token {
                Token::Operand(value) => stack.push(Expression::Number(value)),
                Token::Operator(op) => {
                    let (right, left) = match (stack.pop(), stack.pop()) {
                        (Some(right), Some(left)) => (right, left),
                        _ => return Err(ExpressionError::StackUnderflow { position }),
                    };
                    stack.push(Expression::binary(op, left, right));
                }
            }
        }

        match stack.pop() {
            Some(expr) if stack.is_empty() => Ok(expr),
            _ => Err(ExpressionError::UnbalancedStack {
                depth: stack.len() + 1,
            }),
        }
    }

    /// Postfix token stream for this expression
    pub fn to_tokens(&self) -> Vec<Token> {
        fn walk(expr: &Expression, out: &mut Vec<Token>) {
            match expr.as_binary() {
                None => {
                    if let Expression::Number(n) = expr {
                        out.push(Token::Operand(*n));
                    }
                }
                Some((op, l, r)) => {
                    walk(l, out);
                    walk(r, out);
                    out.push(Token::Operator(op));
                }
            }
        }

        let mut out = Vec::with_capacity(2 * self.operand_count() - 1);
        walk(self, &mut out);
        out
    }
}
