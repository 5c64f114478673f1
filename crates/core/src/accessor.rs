//! Objective-C property accessor naming conventions.
//!
//! A read accessor `foo` pairs with the write accessor `setFoo:`. Selector mangling
//! keeps the two in lockstep, so these helpers convert between both spellings.

const SETTER_PREFIX: &str = "set";
const SETTER_SUFFIX: char = ':';

/// Returns true if `name` follows the setter convention (`setFoo:`).
///
/// The name must be at least five characters long, start with `set`, end with `:`
/// and have an ASCII uppercase letter right after the prefix. `set:`, `setfoo:`
/// and `setFoo` are all rejected.
pub fn is_setter_name(name: &str) -> bool {
    if name.chars().count() < 5 || !name.ends_with(SETTER_SUFFIX) {
        return false;
    }
    name.strip_prefix(SETTER_PREFIX)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

/// Derives the getter name from a setter, e.g. `setFoo:` to `foo`.
///
/// Returns `None` unless [`is_setter_name`] holds for `setter`.
pub fn getter_from_setter(setter: &str) -> Option<String> {
    if !is_setter_name(setter) {
        return None;
    }
    let property = setter
        .strip_prefix(SETTER_PREFIX)?
        .strip_suffix(SETTER_SUFFIX)?;
    let mut chars = property.chars();
    let first = chars.next()?;
    Some(first.to_lowercase().chain(chars).collect())
}

/// Derives the setter name from a getter, e.g. `foo` to `setFoo:`.
pub fn setter_from_getter(getter: &str) -> String {
    let mut setter = String::with_capacity(getter.len() + SETTER_PREFIX.len() + 1);
    setter.push_str(SETTER_PREFIX);
    setter.push_str(&capitalize_first(getter));
    setter.push(SETTER_SUFFIX);
    setter
}

/// Uppercases the first character of `s`, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
