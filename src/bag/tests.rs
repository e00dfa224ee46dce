use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bag::{BIG_NUMBERS, Bag, BagError, Pool, SMALL_NUMBERS};

fn count_of(values: &[i64], target: i64) -> usize {
    values.iter().filter(|&&v| v == target).count()
}

#[test]
fn test_draw_sizes_and_sources() {
    let mut rng = StdRng::seed_from_u64(7);
    let result = Pool::standard().draw(2, 4, &mut rng);
    assert!(result.is_ok());
    if let Ok(bag) = result {
        assert_eq!(bag.len(), 6);
        let (big, small) = bag.values().split_at(2);
        assert!(big.iter().all(|v| BIG_NUMBERS.contains(v)));
        assert!(small.iter().all(|v| SMALL_NUMBERS.contains(v)));
    }
}

#[test]
fn test_draw_never_reuses_a_slot() {
    let pool = Pool::standard();
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = pool.draw(4, 20, &mut rng);
        assert!(result.is_ok());
        if let Ok(bag) = result {
            let (big, small) = bag.values().split_at(4);
            let mut big = big.to_vec();
            big.sort_unstable();
            assert_eq!(big, BIG_NUMBERS.to_vec());
            for value in 1..=10 {
                assert_eq!(count_of(small, value), 2);
            }
        }
    }
}

#[test]
fn test_draw_is_reproducible_with_seed() {
    let pool = Pool::standard();
    let first = pool.draw(2, 4, &mut StdRng::seed_from_u64(42));
    let second = pool.draw(2, 4, &mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
}

#[test]
fn test_draw_rejects_too_many_big() {
    let mut rng = StdRng::seed_from_u64(1);
    let result = Pool::standard().draw(5, 1, &mut rng);
    assert_eq!(
        result,
        Err(BagError::TooManyBig {
            requested: 5,
            available: 4
        })
    );
}

#[test]
fn test_draw_rejects_too_many_small() {
    let mut rng = StdRng::seed_from_u64(1);
    let result = Pool::new(vec![100], vec![1, 2]).draw(0, 3, &mut rng);
    assert_eq!(
        result,
        Err(BagError::TooManySmall {
            requested: 3,
            available: 2
        })
    );
}

#[test]
fn test_draw_zero_counts() {
    let mut rng = StdRng::seed_from_u64(3);
    let result = Pool::standard().draw(0, 0, &mut rng);
    assert_eq!(result, Ok(Bag::new(Vec::new())));
}

#[test]
fn test_bag_display() {
    let bag: Bag = vec![25, 3, 7].into();
    assert_eq!(bag.to_string(), "[25, 3, 7]");
    let collected: Bag = (1..=3).collect();
    assert_eq!(collected.values(), &[1, 2, 3]);
}

#[test]
fn test_bag_serializes_as_plain_list() {
    let bag = Bag::new(vec![100, 4, 1]);
    let json = serde_json::to_string(&bag);
    assert!(json.is_ok());
    if let Ok(json) = json {
        assert_eq!(json, "[100,4,1]");
    }
}
