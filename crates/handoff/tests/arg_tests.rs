//! Arg wrapper tests

use handoff::{arg, Arg, Category};

// ═══════════════════════════════════════════════════════════════════════
// Construction and Deduction
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_borrowed_is_persistent() {
    let mut count = 100_i64;
    let arg = Arg::borrowed(&mut count);

    assert_eq!(arg.category(), Category::Persistent);
    assert!(!arg.is_movable());
}

#[test]
fn test_owned_is_disposable() {
    let arg = Arg::owned(String::from("ala"));

    assert_eq!(arg.category(), Category::Disposable);
    assert!(arg.is_movable());
}

#[test]
fn test_macro_deduces_named_handle_as_persistent() {
    let mut text = String::from("ala");
    assert_eq!(arg!(&mut text).category(), Category::Persistent);
}

#[test]
fn test_macro_deduces_value_as_disposable() {
    assert_eq!(arg!(String::from("ala")).category(), Category::Disposable);
    assert_eq!(arg!(10).category(), Category::Disposable);
}

#[test]
fn test_from_mut_ref_is_persistent() {
    let mut count = 3_i64;
    let arg: Arg<'_, i64> = (&mut count).into();
    assert_eq!(arg.category(), Category::Persistent);
}

// ═══════════════════════════════════════════════════════════════════════
// Aliasing and Mutation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_deref_reads_through() {
    let mut count = 7_i64;
    let arg = Arg::borrowed(&mut count);
    assert_eq!(*arg, 7);
}

#[test]
fn test_mutation_reaches_the_caller_variable() {
    let mut count = 7_i64;
    {
        let mut arg = Arg::borrowed(&mut count);
        *arg += 1;
    }
    assert_eq!(count, 8);
}

#[test]
fn test_mutation_of_owned_stays_inside_the_wrapper() {
    let mut arg = Arg::owned(String::from("ala"));
    arg.push('!');
    assert_eq!(&*arg, "ala!");
}

// ═══════════════════════════════════════════════════════════════════════
// Reborrowing (persistent outer position)
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_reborrow_of_borrowed_stays_persistent() {
    let mut count = 1_i64;
    let mut arg = Arg::borrowed(&mut count);
    assert_eq!(arg.reborrow().category(), Category::Persistent);
}

#[test]
fn test_reborrow_of_owned_becomes_persistent() {
    let mut arg = Arg::owned(10_i64);
    assert_eq!(arg.reborrow().category(), Category::Persistent);
    // the wrapper itself still owns the value afterwards
    assert_eq!(arg.category(), Category::Disposable);
}

#[test]
fn test_reborrow_mutation_is_visible_to_the_owner() {
    let mut arg = Arg::owned(String::from("ala"));
    {
        let mut inner = arg.reborrow();
        inner.push('!');
    }
    assert_eq!(&*arg, "ala!");
}

#[test]
fn test_repeated_reborrowing_is_stable() {
    let mut arg = Arg::owned(5_i64);
    let mut once = arg.reborrow();
    let twice = once.reborrow();
    assert_eq!(twice.category(), Category::Persistent);
}

// ═══════════════════════════════════════════════════════════════════════
// Moving Out
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_try_take_moves_from_owned() {
    let taken = Arg::owned(String::from("ala")).try_take().ok();
    assert_eq!(taken, Some(String::from("ala")));
}

#[test]
fn test_try_take_refuses_borrowed_and_returns_the_wrapper() {
    let mut count = 5_i64;
    {
        let back = Arg::borrowed(&mut count).try_take();
        let arg = back.unwrap_err();
        assert_eq!(arg.category(), Category::Persistent);
        assert_eq!(*arg, 5);
    }
    assert_eq!(count, 5);
}

#[test]
fn test_into_owned_moves_from_owned() {
    let text = Arg::owned(String::from("ala")).into_owned();
    assert_eq!(text, "ala");
}

#[test]
fn test_into_owned_clones_from_borrowed() {
    let mut text = String::from("ala");
    let copy = Arg::borrowed(&mut text).into_owned();
    assert_eq!(copy, "ala");
    assert_eq!(text, "ala");
}

// ═══════════════════════════════════════════════════════════════════════
// Formatting
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_display_is_transparent() {
    let mut count = 100_i64;
    assert_eq!(format!("{}", Arg::borrowed(&mut count)), "100");
    assert_eq!(format!("{}", Arg::owned(100_i64)), "100");
}

#[test]
fn test_debug_marks_borrowed_arguments() {
    let mut count = 100_i64;
    assert_eq!(format!("{:?}", Arg::borrowed(&mut count)), "&mut 100");
    assert_eq!(format!("{:?}", Arg::owned(100_i64)), "100");
}
