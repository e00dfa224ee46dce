use crate::enumerate::{OperatorSequences, Permutations, generate_shapes};
use crate::expression::{
    Evaluator, Expression, ExpressionError, Operator, Token, assemble, evaluate_postfix,
};

fn num(n: i64) -> Token {
    Token::Operand(n)
}

fn op(op: Operator) -> Token {
    Token::Operator(op)
}

#[test]
fn test_exact_division_is_valid() {
    let result = evaluate_postfix(&[num(6), num(2), op(Operator::Div)]);
    assert_eq!(result, Ok(3));
}

#[test]
fn test_inexact_division_is_invalid() {
    let result = evaluate_postfix(&[num(3), num(2), op(Operator::Div)]);
    assert_eq!(
        result,
        Err(ExpressionError::InexactDivision {
            dividend: 3,
            divisor: 2
        })
    );
}

#[test]
fn test_division_by_zero_is_invalid() {
    let tokens = [num(4), num(2), num(2), op(Operator::Sub), op(Operator::Div)];
    assert_eq!(evaluate_postfix(&tokens), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_subtraction_operand_order() {
    // a is pushed first, b last: a - b
    assert_eq!(evaluate_postfix(&[num(3), num(2), op(Operator::Sub)]), Ok(1));
    assert_eq!(evaluate_postfix(&[num(2), num(3), op(Operator::Sub)]), Ok(-1));
}

#[test]
fn test_stack_underflow() {
    let result = evaluate_postfix(&[num(3), op(Operator::Add)]);
    assert_eq!(result, Err(ExpressionError::StackUnderflow { position: 1 }));
}

#[test]
fn test_leftover_stack_is_invalid() {
    let result = evaluate_postfix(&[num(3), num(4)]);
    assert_eq!(result, Err(ExpressionError::UnbalancedStack { depth: 2 }));
}

#[test]
fn test_empty_stream_is_invalid() {
    assert_eq!(evaluate_postfix(&[]), Err(ExpressionError::EmptyStream));
}

#[test]
fn test_overflow_is_invalid() {
    let tokens = [num(i64::MAX), num(2), op(Operator::Mul)];
    assert_eq!(evaluate_postfix(&tokens), Err(ExpressionError::Overflow));
    assert_eq!(Operator::Div.apply(i64::MIN, -1), Err(ExpressionError::Overflow));
}

#[test]
fn test_evaluator_reuse_between_streams() {
    let mut evaluator = Evaluator::new();
    assert!(evaluator.evaluate(&[num(3), num(2), op(Operator::Div)]).is_err());
    assert_eq!(evaluator.evaluate(&[num(9)]), Ok(9));
    assert_eq!(
        evaluator.evaluate(&[num(2), num(3), op(Operator::Mul), num(4), op(Operator::Add)]),
        Ok(10)
    );
}

#[test]
fn test_assemble_fills_slots_in_order() {
    let shapes = generate_shapes(3);
    let left_deep = shapes.iter().find(|s| s.to_string() == "0101");
    assert!(left_deep.is_some());
    if let Some(shape) = left_deep {
        let tokens = assemble(shape, &[4, 5, 6], &[Operator::Mul, Operator::Sub]);
        assert_eq!(
            tokens,
            vec![num(4), num(5), op(Operator::Mul), num(6), op(Operator::Sub)]
        );
        assert_eq!(evaluate_postfix(&tokens), Ok(14));
    }
}

#[test]
fn test_assemble_single_operand() {
    let shapes = generate_shapes(1);
    if let Some(shape) = shapes.first() {
        assert_eq!(assemble(shape, &[42], &[]), vec![num(42)]);
    }
}

#[test]
fn test_canonical_rendering() {
    let tokens = [num(2), num(3), op(Operator::Add), num(4), op(Operator::Mul)];
    let expr = Expression::from_tokens(&tokens);
    assert!(expr.is_ok());
    if let Ok(expr) = expr {
        assert_eq!(expr.to_string(), "((2 + 3) * 4)");
        assert_eq!(expr.evaluate(), Ok(20));
        assert_eq!(expr.operand_count(), 3);
    }
}

#[test]
fn test_single_literal_renders_bare() {
    let expr = Expression::from_tokens(&[num(75)]);
    assert_eq!(expr.map(|e| e.to_string()), Ok("75".to_string()));
}

#[test]
fn test_from_tokens_rejects_malformed_streams() {
    assert!(Expression::from_tokens(&[op(Operator::Add)]).is_err());
    assert!(Expression::from_tokens(&[num(1), num(2)]).is_err());
    assert!(Expression::from_tokens(&[]).is_err());
}

#[test]
fn test_parse_canonical_form() {
    let parsed: Result<Expression, _> = "((100 - 4) / (2 * 3))".parse();
    assert!(parsed.is_ok());
    if let Ok(expr) = parsed {
        assert_eq!(expr.evaluate(), Ok(16));
        assert_eq!(expr.to_string(), "((100 - 4) / (2 * 3))");
    }

    let negative: Result<Expression, _> = "(5 - -3)".parse();
    assert_eq!(negative.and_then(|e| e.evaluate()), Ok(8));
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!("".parse::<Expression>().is_err());
    assert!("(2 + 3".parse::<Expression>().is_err());
    assert!("(2 ^ 3)".parse::<Expression>().is_err());
    assert!("2 + 3".parse::<Expression>().is_err());
    assert!("(2 + x)".parse::<Expression>().is_err());
}

#[test]
fn test_round_trip_for_every_valid_four_operand_stream() {
    let operands = vec![25, 4, 7, 3];
    let shapes = generate_shapes(operands.len());
    let op_seqs: Vec<_> = OperatorSequences::new(operands.len() - 1).collect();
    let mut evaluator = Evaluator::new();
    let mut valid = 0;

    for perm in Permutations::new(operands) {
        for ops in &op_seqs {
            for shape in &shapes {
                let tokens = assemble(shape, &perm, ops);
                let Ok(value) = evaluator.evaluate(&tokens) else {
                    continue;
                };
                valid += 1;

                let expr = Expression::from_tokens(&tokens);
                assert!(expr.is_ok());
                if let Ok(expr) = expr {
                    assert_eq!(expr.evaluate(), Ok(value));
                    assert_eq!(expr.to_tokens(), tokens);

                    let reparsed: Result<Expression, _> = expr.to_string().parse();
                    assert_eq!(reparsed.as_ref(), Ok(&expr));
                    let retokenized = reparsed.map(|e| e.to_tokens()).unwrap_or_default();
                    assert_eq!(evaluator.evaluate(&retokenized), Ok(value));
                }
            }
        }
    }

    assert!(valid > 0);
}
