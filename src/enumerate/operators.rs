use crate::expression::Operator;

/// Lazily yields all 4^len assignments of operators to `len` slots.
///
/// Works like an odometer over [`Operator::ALL`] with the last slot turning
/// fastest. A length of zero yields a single empty sequence.
#[derive(Debug, Clone)]
pub struct OperatorSequences {
    digits: Vec<usize>,
    done: bool,
}

impl OperatorSequences {
    pub fn new(len: usize) -> Self {
        Self {
            digits: vec![0; len],
            done: false,
        }
    }

    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            if *digit + 1 < Operator::ALL.len() {
                *digit += 1;
                return;
            }
            *digit = 0;
        }
        self.done = true;
    }
}

impl Iterator for OperatorSequences {
    type Item = Vec<Operator>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self
            .digits
            .iter()
            .filter_map(|&d| Operator::ALL.get(d).copied())
            .collect();
        self.advance();
        Some(current)
    }
}
