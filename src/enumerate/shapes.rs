use std::fmt;

use log::debug;

/// One step of a shape: push the next operand, or apply the next operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Push,
    Apply,
}

/// A parenthesization of `m` operands encoded as a balanced sequence of
/// `2(m - 1)` markers.
///
/// The first operand is implicit: a stream always opens with a push, and the
/// markers describe everything after it. Reading left to right, the number
/// of `Push` markers never falls behind the number of `Apply` markers, and
/// both counts are equal at the end.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    markers: Vec<Marker>,
}

impl Shape {
    /// Returns `None` when the markers are not balanced
    pub fn new(markers: Vec<Marker>) -> Option<Self> {
        if Self::is_balanced(&markers) {
            Some(Self { markers })
        } else {
            None
        }
    }

    pub fn is_balanced(markers: &[Marker]) -> bool {
        let mut score: usize = 0;
        for marker in markers {
            match marker {
                Marker::Push => score += 1,
                Marker::Apply => match score.checked_sub(1) {
                    Some(next) => score = next,
                    None => return false,
                },
            }
        }
        score == 0
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Operands consumed by the shape, including the implicit first one
    pub fn operand_slots(&self) -> usize {
        self.operator_slots() + 1
    }

    pub fn operator_slots(&self) -> usize {
        self.markers.len() / 2
    }
}

/// Bit notation: `0` for push, `1` for apply
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for marker in &self.markers {
            match marker {
                Marker::Push => write!(f, "0")?,
                Marker::Apply => write!(f, "1")?,
            }
        }
        Ok(())
    }
}

/// Generate every shape for `operands` operands.
///
/// Depth-first over partial marker strings with an explicit stack, tracking
/// the running score (pushes minus applies). An `Apply` is only taken while
/// the score is positive and a `Push` only while pushes remain, so each
/// complete string is a distinct balanced shape. Yields Catalan(operands - 1)
/// shapes; zero operands yields none.
pub fn generate_shapes(operands: usize) -> Vec<Shape> {
    debug!("Generating shapes for {} operands", operands);

    let Some(total_pushes) = operands.checked_sub(1) else {
        return Vec::new();
    };
    let len = 2 * total_pushes;

    let mut result = Vec::new();
    let mut stack: Vec<(Vec<Marker>, usize, usize)> = vec![(Vec::with_capacity(len), 0, 0)];

    while let Some((markers, score, pushes)) = stack.pop() {
        if markers.len() == len {
            if score == 0 {
                result.push(Shape { markers });
            }
            continue;
        }

        if pushes < total_pushes {
            let mut next = markers.clone();
            next.push(Marker::Push);
            stack.push((next, score + 1, pushes + 1));
        }

        if score > 0 {
            let mut next = markers;
            next.push(Marker::Apply);
            stack.push((next, score - 1, pushes));
        }
    }

    debug!("Generated {} shapes", result.len());
    result
}
