use objmangle_core::accessor::{getter_from_setter, is_setter_name, setter_from_getter};

#[test]
fn test_setter_predicate() {
    assert!(is_setter_name("setFoo:"));
    assert!(!is_setter_name("set:"));
    assert!(!is_setter_name("setfoo:"));
    assert!(!is_setter_name("foo"));
    // four characters is too short even with the right shape
    assert!(!is_setter_name("setX"));
    assert!(!is_setter_name("setFoo:bar:x"));
}

#[test]
fn test_accessor_conversions() {
    assert_eq!(getter_from_setter("setFoo:").as_deref(), Some("foo"));
    assert_eq!(setter_from_getter("foo"), "setFoo:");
    assert_eq!(getter_from_setter("setfoo:"), None);
}

#[test]
fn test_round_trip_over_valid_setters() {
    let setters = [
        "setName:",
        "setDelegate:",
        "setHTTPBody:",
        "setX:",
        "setNeedsDisplay:",
        "setA2B:",
    ];
    for setter in setters {
        assert!(is_setter_name(setter), "{setter}");
        let getter = getter_from_setter(setter).unwrap();
        assert_eq!(getter.len() + 4, setter.len());
        assert_eq!(setter_from_getter(&getter), setter);
    }
}
