use crate::enumerate::{Marker, Shape};
use crate::expression::token::{Operator, Token};

/// Merge a shape with operand values and operators into a postfix stream,
/// writing into `out` so the buffer can be reused across the enumeration.
///
/// The first operand is always pushed before the shape's markers are read;
/// every `Push` marker then takes the next operand and every `Apply` marker
/// the next operator.
pub fn assemble_into(shape: &Shape, operands: &[i64], operators: &[Operator], out: &mut Vec<Token>) {
    debug_assert_eq!(operands.len(), shape.operand_slots());
    debug_assert_eq!(operators.len(), shape.operator_slots());

    out.clear();
    let mut operands = operands.iter().copied();
    let mut operators = operators.iter().copied();

    if let Some(first) = operands.next() {
        out.push(Token::Operand(first));
    }

    for marker in shape.markers() {
        match marker {
            Marker::Push => {
                if let Some(value) = operands.next() {
                    out.push(Token::Operand(value));
                }
            }
            Marker::Apply => {
                if let Some(op) = operators.next() {
                    out.push(Token::Operator(op));
                }
            }
        }
    }
}

pub fn assemble(shape: &Shape, operands: &[i64], operators: &[Operator]) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(operands.len() + operators.len());
    assemble_into(shape, operands, operators, &mut tokens);
    tokens
}
