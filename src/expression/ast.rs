use crate::expression::token::Operator;

/// Integer arithmetic expression reconstructed from a token stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(i64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        let (l, r) = (Box::new(left), Box::new(right));
        match op {
            Operator::Add => Expression::Add(l, r),
            Operator::Sub => Expression::Sub(l, r),
            Operator::Mul => Expression::Mul(l, r),
            Operator::Div => Expression::Div(l, r),
        }
    }

    /// The top-level operator and its operands, or `None` for a literal
    pub fn as_binary(&self) -> Option<(Operator, &Expression, &Expression)> {
        match self {
            Expression::Number(_) => None,
            Expression::Add(l, r) => Some((Operator::Add, l, r)),
            Expression::Sub(l, r) => Some((Operator::Sub, l, r)),
            Expression::Mul(l, r) => Some((Operator::Mul, l, r)),
            Expression::Div(l, r) => Some((Operator::Div, l, r)),
        }
    }

    /// Number of literal operands in the expression
    pub fn operand_count(&self) -> usize {
        match self.as_binary() {
            None => 1,
            Some((_, l, r)) => l.operand_count() + r.operand_count(),
        }
    }
}
