use log::{info, warn};
use rand::Rng;

use crate::bag::errors::BagError;
use crate::bag::Bag;

pub const BIG_NUMBERS: [i64; 4] = [25, 50, 75, 100];
pub const SMALL_NUMBERS: [i64; 20] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// The two source pools a bag is drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    big: Vec<i64>,
    small: Vec<i64>,
}

impl Pool {
    pub fn new(big: Vec<i64>, small: Vec<i64>) -> Self {
        Self { big, small }
    }

    /// Four big numbers and two copies of 1 through 10
    pub fn standard() -> Self {
        Self::new(BIG_NUMBERS.to_vec(), SMALL_NUMBERS.to_vec())
    }

    pub fn big(&self) -> &[i64] {
        &self.big
    }

    pub fn small(&self) -> &[i64] {
        &self.small
    }

    /// Draw `big_count` values from the big pool followed by `small_count`
    /// from the small pool, each without replacement.
    ///
    /// Every draw removes its slot from a working copy of the pool, so a
    /// value that appears twice in a pool can be drawn twice, but no slot is
    /// used more than once.
    ///
    /// # Errors
    ///
    /// Returns an error if either count exceeds the size of its pool.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        big_count: usize,
        small_count: usize,
        rng: &mut R,
    ) -> Result<Bag, BagError> {
        if big_count > self.big.len() {
            warn!(
                "Cannot draw {} big numbers from a pool of {}",
                big_count,
                self.big.len()
            );
            return Err(BagError::TooManyBig {
                requested: big_count,
                available: self.big.len(),
            });
        }
        if small_count > self.small.len() {
            warn!(
                "Cannot draw {} small numbers from a pool of {}",
                small_count,
                self.small.len()
            );
            return Err(BagError::TooManySmall {
                requested: small_count,
                available: self.small.len(),
            });
        }

        let mut values = Vec::with_capacity(big_count + small_count);
        take_random(&self.big, big_count, rng, &mut values);
        take_random(&self.small, small_count, rng, &mut values);

        let bag = Bag::new(values);
        info!("Drew bag {} ({} big, {} small)", bag, big_count, small_count);
        Ok(bag)
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::standard()
    }
}

fn take_random<R: Rng + ?Sized>(source: &[i64], count: usize, rng: &mut R, out: &mut Vec<i64>) {
    let mut remaining = source.to_vec();
    for _ in 0..count {
        if remaining.is_empty() {
            break;
        }
        let idx = rng.random_range(0..remaining.len());
        out.push(remaining.remove(idx));
    }
}
