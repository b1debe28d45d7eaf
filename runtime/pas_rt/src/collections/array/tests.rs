use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_array_bounds() {
    let array: DynArray<i32> = DynArray::new();
    assert_eq!(array.length(), Integer::ZERO);
    assert_eq!(array.low(), Integer::ZERO);
    assert_eq!(array.high(), Integer::new(-1));
    assert!(array.is_empty());
}

#[test]
fn set_length_grows_with_defaults_and_shrinks() {
    let mut array = DynArray::from_vec(vec![1, 2, 3]);
    array.set_length(5);
    assert_eq!(array.as_slice(), &[1, 2, 3, 0, 0]);
    assert_eq!(array.high(), Integer::new(4));

    array.set_length(Integer::new(2));
    assert_eq!(array.as_slice(), &[1, 2]);

    array.set_length(-4);
    assert!(array.is_empty());
}

#[test]
fn set_length_with_value() {
    let mut array = DynArray::with_value(2, 'x');
    array.set_length_with(4, 'y');
    assert_eq!(array.into_vec(), vec!['x', 'x', 'y', 'y']);
}

#[test]
fn indexing_is_zero_based() {
    let mut array: DynArray<i64> = DynArray::with_length(3);
    array[0] = 10;
    array[Integer::new(2)] = 30;
    assert_eq!(array[0], 10);
    assert_eq!(array[1u8], 0);
    assert_eq!(array[2], 30);
    assert_eq!(array.get(3), None);
    assert_eq!(array.get(-1), None);
}

#[test]
#[should_panic(expected = "array index 3 out of range 0..3")]
fn index_past_end_panics() {
    let array = DynArray::from_vec(vec![1, 2, 3]);
    let _ = array[3];
}

#[test]
#[should_panic(expected = "array index -1 out of range")]
fn negative_index_panics() {
    let array = DynArray::from_vec(vec![1]);
    let _ = array[-1];
}

#[test]
fn copy_clamps_count() {
    let array = DynArray::from_vec(vec![1, 2, 3, 4, 5]);
    assert_eq!(array.copy(1, 2).into_vec(), vec![2, 3]);
    assert_eq!(array.copy(3, 100).into_vec(), vec![4, 5]);
    assert_eq!(array.copy(0, 0).into_vec(), Vec::<i32>::new());
}

#[test]
fn copy_out_of_range_is_empty() {
    let array = DynArray::from_vec(vec![1, 2, 3]);
    assert!(array.copy(3, 1).is_empty());
    assert!(array.copy(-1, 2).is_empty());
    assert!(array.copy(0, -2).is_empty());
}

#[test]
fn iteration_and_collect() {
    let array: DynArray<i32> = (1..=4).collect();
    let doubled: DynArray<i32> = array.iter().map(|x| x * 2).collect();
    assert_eq!(doubled.as_slice(), &[2, 4, 6, 8]);
    let total: i32 = (&array).into_iter().sum();
    assert_eq!(total, 10);
}

#[test]
fn fixed_array_bounds() {
    let mut array: FixedArray<u8, 4> = FixedArray::default();
    assert_eq!(array.length(), Integer::new(4));
    assert_eq!(array.low(), Integer::ZERO);
    assert_eq!(array.high(), Integer::new(3));
    array[3] = 9;
    assert_eq!(array.into_inner(), [0, 0, 0, 9]);
}

#[test]
#[should_panic(expected = "array index 4 out of range 0..4")]
fn fixed_array_index_past_end_panics() {
    let array = FixedArray::new([1, 2, 3, 4]);
    let _ = array[4];
}
