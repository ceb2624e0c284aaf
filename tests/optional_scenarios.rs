use inline_optional::{BadOptionalAccess, Optional};

#[test]
fn test_default_int_is_empty_and_value_fails() {
    let c: Optional<i32> = Optional::default();
    assert!(!c.has_value());
    assert_eq!(c.value(), Err(BadOptionalAccess));
    // A failed access leaves the container as it was.
    assert!(!c.has_value());
}

#[test]
fn test_int_from_value() {
    let c = Optional::from(42);
    assert!(c.has_value());
    assert_eq!(*c, 42);
    assert_eq!(c.value(), Ok(&42));
}

#[test]
fn test_reset_after_value() {
    let mut c = Optional::some(42);
    c.reset();
    assert!(!c.has_value());
}

#[test]
fn test_copy_then_assign_empty_leaves_source() {
    let a = Optional::some(String::from("x"));
    let mut b = a.clone();
    b.clone_from(&Optional::new());

    assert!(!b.has_value());
    assert!(a.has_value());
    assert_eq!(a.value().map(String::as_str), Ok("x"));
}

#[test]
fn test_value_assignment_engages_empty() {
    let mut c: Optional<i32> = Optional::new();
    c.assign(7);
    assert!(c.has_value());
    assert_eq!(c.value(), Ok(&7));
}

#[test]
fn test_copy_is_independent() {
    let a = Optional::some(vec![1, 2, 3]);
    let mut b = a.clone();
    b.push(4);

    assert_eq!(a.value().map(Vec::len), Ok(3));
    assert_eq!(b.value().map(Vec::len), Ok(4));
}

#[test]
fn test_move_assign_from_empty_resets() {
    let mut target = Optional::some(String::from("live"));
    target.assign_from(Optional::new());
    assert!(target.is_empty());
}

#[test]
fn test_move_assign_from_engaged() {
    let mut target: Optional<String> = Optional::new();
    target.assign_from(Optional::some(String::from("moved")));
    assert_eq!(target.as_option().map(String::as_str), Some("moved"));

    target.assign_from(Optional::some(String::from("again")));
    assert_eq!(target.as_option().map(String::as_str), Some("again"));
}

#[test]
fn test_take_from_empties_source() {
    let mut source = Optional::some(5_u64);
    let mut target = Optional::some(1_u64);

    target.take_from(&mut source);
    assert_eq!(target.value(), Ok(&5));
    assert!(source.is_empty());

    // Moving from the now-empty source resets the target.
    target.take_from(&mut source);
    assert!(target.is_empty());
}

#[test]
fn test_value_mut_updates_in_place() {
    let mut c = Optional::some(10);
    if let Ok(v) = c.value_mut() {
        *v += 1;
    }
    assert_eq!(*c, 11);

    let mut empty: Optional<i32> = Optional::new();
    assert_eq!(empty.value_mut(), Err(BadOptionalAccess));
}

#[test]
fn test_option_conversions() {
    let c: Optional<&str> = Some("v").into();
    assert_eq!(Option::<&str>::from(c), Some("v"));

    let empty: Optional<&str> = None.into();
    assert_eq!(empty.into_option(), None);
}

#[test]
fn test_equality() {
    assert_eq!(Optional::some(1), Optional::some(1));
    assert_ne!(Optional::some(1), Optional::some(2));
    assert_ne!(Optional::some(1), Optional::new());
    assert_eq!(Optional::<i32>::new(), Optional::new());
}

#[test]
fn test_bad_access_propagates_with_question_mark() {
    fn first_char(c: &Optional<String>) -> anyhow::Result<char> {
        let s = c.value()?;
        s.chars().next().ok_or_else(|| anyhow::anyhow!("empty string"))
    }

    assert_eq!(first_char(&Optional::some(String::from("abc"))).ok(), Some('a'));

    let err = first_char(&Optional::new()).unwrap_err();
    assert_eq!(err.to_string(), "bad optional access");
    assert!(err.downcast_ref::<BadOptionalAccess>().is_some());
}

#[test]
fn test_container_cycles_between_states() {
    let mut c = Optional::<i32>::new();
    for round in 0..3 {
        c.assign(round);
        assert_eq!(c.value(), Ok(&round));
        c.assign(round + 100);
        assert_eq!(c.value(), Ok(&(round + 100)));
        c.reset();
        assert!(c.is_empty());
    }
}
