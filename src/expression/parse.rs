use std::str::FromStr;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::token::Operator;

/// Recursive descent over the canonical form:
///
/// ```text
/// expr := integer | "(" expr operator expr ")"
/// ```
struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn error(&self, message: &str) -> ExpressionError {
        ExpressionError::Parse(format!(
            "{} at offset {} in '{}'",
            message, self.pos, self.input
        ))
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: u8) -> Result<(), ExpressionError> {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", expected as char)))
        }
    }

    fn parse_expression(&mut self) -> Result<Expression, ExpressionError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'(') => {
                self.pos += 1;
                let left = self.parse_expression()?;
                let op = self.parse_operator()?;
                let right = self.parse_expression()?;
                self.expect(b')')?;
                Ok(Expression::binary(op, left, right))
            }
            Some(b) if b == b'-' || b.is_ascii_digit() => self.parse_number(),
            Some(_) => Err(self.error("unexpected character")),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_operator(&mut self) -> Result<Operator, ExpressionError> {
        self.skip_whitespace();
        let op = self
            .peek()
            .and_then(|b| Operator::from_symbol(b as char))
            .ok_or_else(|| self.error("expected operator"))?;
        self.pos += 1;
        Ok(op)
    }

    fn parse_number(&mut self) -> Result<Expression, ExpressionError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }

        let literal = self
            .input
            .get(start..self.pos)
            .ok_or_else(|| self.error("invalid literal"))?;
        literal
            .parse::<i64>()
            .map(Expression::Number)
            .map_err(|_| self.error(&format!("invalid integer '{}'", literal)))
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(s);
        let expr = parser.parse_expression()?;
        parser.skip_whitespace();
        if parser.peek().is_some() {
            return Err(parser.error("trailing input"));
        }
        Ok(expr)
    }
}
