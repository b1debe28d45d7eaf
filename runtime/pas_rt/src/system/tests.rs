use pretty_assertions::assert_eq;

use super::*;

// The only test that touches the captured command line: the slot is
// process-wide and set once.
#[test]
fn startup_captures_command_line() {
    startup(["prog", "alpha", "beta"]);
    startup(["other"]);
    assert_eq!(param_count(), Integer::new(2));
    assert_eq!(param_str(0), "prog");
    assert_eq!(param_str(Integer::new(2)), "beta");
    assert_eq!(param_str(3), "");
    assert_eq!(param_str(-1), "");
}

#[test]
fn tick_count_is_monotonic() {
    let first = get_tick_count64();
    let second = get_tick_count64();
    assert!(second >= first);
    assert!(first.raw() >= 0);
}

#[test]
fn swaps() {
    let mut a = PasString::from("a");
    let mut b = PasString::from("b");
    swap(&mut a, &mut b);
    assert_eq!(a, "b");
    assert_eq!(b, "a");
    assert_eq!(swap_word(Word::new(0x1234)), Word::new(0x3412));
}

#[test]
fn assigned_pointers() {
    assert_eq!(assigned(Pointer::NIL), Boolean::FALSE);
    assert_eq!(assigned(Pointer::new(0x10)), Boolean::TRUE);
}
