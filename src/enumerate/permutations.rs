/// Lazily yields every ordering of `items`, permuting positions rather than
/// values: repeated values still produce all `m!` orderings.
///
/// Orderings come out in lexicographic order of the position vector, so the
/// first one is the input order.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    order: Vec<usize>,
    done: bool,
}

impl<T: Clone> Permutations<T> {
    pub fn new(items: Vec<T>) -> Self {
        let order = (0..items.len()).collect();
        Self {
            items,
            order,
            done: false,
        }
    }
}

/// Step `order` to its lexicographic successor; false once it was the last
fn next_permutation(order: &mut [usize]) -> bool {
    let Some(i) = order.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let pivot = order[i];
    let Some(j) = order.iter().rposition(|&x| x > pivot) else {
        return false;
    };
    order.swap(i, j);
    order[i + 1..].reverse();
    true
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self
            .order
            .iter()
            .filter_map(|&i| self.items.get(i).cloned())
            .collect();
        self.done = !next_permutation(&mut self.order);
        Some(current)
    }
}
