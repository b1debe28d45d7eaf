use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

#[test]
fn sequence_from_zero_seed() {
    let mut rng = RandomGenerator::new(Integer::ZERO);
    assert_eq!(rng.float(), Double::new(1.0 / 4_294_967_296.0));
    assert_eq!(rng.seed(), Integer::new(1));
    rng.float();
    assert_eq!(rng.seed(), Integer::new(134_775_814));
}

#[test]
fn seed_wraps_to_signed() {
    let mut rng = RandomGenerator::new(Integer::new(-1));
    // 0xFFFFFFFF * 134775813 + 1 == -134775812 mod 2^32
    rng.int(Integer::new(10));
    assert_eq!(rng.seed(), Integer::new(-134_775_812));
}

#[test]
fn same_seed_same_sequence() {
    let mut a = RandomGenerator::new(Integer::new(42));
    let mut b = RandomGenerator::new(Integer::new(42));
    let first: Vec<_> = (0..20).map(|_| a.int(Integer::new(1000))).collect();
    let second: Vec<_> = (0..20).map(|_| b.int(Integer::new(1000))).collect();
    assert_eq!(first, second);
}

#[test]
fn empty_range_yields_zero() {
    let mut rng = RandomGenerator::new(Integer::new(7));
    assert_eq!(rng.int(Integer::ZERO), Integer::ZERO);
    assert_eq!(rng.int(Integer::new(-5)), Integer::ZERO);
}

#[test]
fn shared_generator_is_usable() {
    randomize();
    let value = random_int(Integer::new(6));
    assert!((0..6).contains(&value.raw()));
    let x = random_float().raw();
    assert!((0.0..1.0).contains(&x));
    let _ = rand_seed();
}

proptest! {
    #[test]
    fn int_stays_in_range(seed in any::<i32>(), range in 1..i32::MAX) {
        let mut rng = RandomGenerator::new(Integer::new(seed));
        for _ in 0..8 {
            let value = rng.int(Integer::new(range)).raw();
            prop_assert!((0..range).contains(&value));
        }
    }

    #[test]
    fn float_in_unit_interval(seed in any::<i32>()) {
        let mut rng = RandomGenerator::new(Integer::new(seed));
        let value = rng.float().raw();
        prop_assert!((0.0..1.0).contains(&value));
    }
}
