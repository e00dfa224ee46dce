/// Lazily yields every strictly increasing `k`-tuple of indices from
/// `0..n` in lexicographic order. There are C(n, k) of them.
#[derive(Debug, Clone)]
pub struct IndexCombinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl IndexCombinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }

    fn advance(&mut self) {
        let k = self.indices.len();
        let n = self.n;
        // Rightmost position that has not reached its maximum value
        let pivot = self
            .indices
            .iter()
            .enumerate()
            .rposition(|(i, &idx)| idx != i + n - k);

        match pivot {
            None => self.done = true,
            Some(i) => {
                let Some(rest) = self.indices.get_mut(i..) else {
                    self.done = true;
                    return;
                };
                let base = rest.first().map_or(0, |first| first + 1);
                for (offset, slot) in rest.iter_mut().enumerate() {
                    *slot = base + offset;
                }
            }
        }
    }
}

impl Iterator for IndexCombinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();
        self.advance();
        Some(current)
    }
}
