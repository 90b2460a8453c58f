use super::*;

#[test]
fn test_name_layout() {
    let name = Name::new(5, 1000);
    assert_eq!(name.shard(), 5);
    assert_eq!(name.local(), 1000);
}

#[test]
fn test_name_empty() {
    assert_eq!(Name::EMPTY.shard(), 0);
    assert_eq!(Name::EMPTY.local(), 0);
    assert_eq!(Name::intern(""), Name::EMPTY);
}

#[test]
fn test_name_round_trips_text() {
    let name = Name::intern("factorial");
    assert_eq!(name.as_str(), "factorial");
    assert_eq!(name.to_string(), "factorial");
    assert_eq!(format!("{name:?}"), "Name(\"factorial\")");
}

#[test]
fn test_name_identity_follows_text() {
    let a = Name::intern("ok");
    let b = Name::intern_owned(String::from("ok"));
    let c = Name::intern("no");
    assert_eq!(a, b);
    assert_ne!(a, c);
}
