use std::fmt;

use crate::expression::ast::Expression;

/// Canonical form: every binary operation is wrapped as `(left OP right)`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Add(l, r) => write!(f, "({} + {})", l, r),
            Expression::Sub(l, r) => write!(f, "({} - {})", l, r),
            Expression::Mul(l, r) => write!(f, "({} * {})", l, r),
            Expression::Div(l, r) => write!(f, "({} / {})", l, r),
        }
    }
}
