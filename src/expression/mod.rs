//! Postfix token streams, the stack-machine evaluator and canonical
//! expression reconstruction

mod assemble;
mod ast;
mod display;
mod errors;
mod eval;
mod parse;
mod postfix;
mod token;

pub use assemble::{assemble, assemble_into};
pub use ast::Expression;
pub use errors::ExpressionError;
pub use eval::{Evaluator, evaluate_postfix};
pub use token::{Operator, Token};

#[cfg(test)]
mod tests;
