//! Ready-made name normalization hooks.
//!
//! These fit [`NameProcessor`] and can be used with `#[enum_choice(process_name = "...")]` or
//! [`EnumClassBuilder::process_name`](crate::EnumClassBuilder::process_name).

use std::borrow::Cow;

use heck::ToUpperCamelCase;

/// Canonicalizes a name before it's matched against declared member names.
pub type NameProcessor = for<'a> fn(&'a str) -> Cow<'a, str>;

/// Leaves the name untouched. This is the default hook.
pub fn identity(name: &str) -> Cow<'_, str> {
    Cow::Borrowed(name)
}

/// Upper-cases the name, for members declared in `SCREAMING_SNAKE_CASE`.
pub fn to_uppercase(name: &str) -> Cow<'_, str> {
    if name.chars().any(char::is_lowercase) {
        Cow::Owned(name.to_uppercase())
    } else {
        Cow::Borrowed(name)
    }
}

/// Converts the name to `UpperCamelCase`, for members declared as Rust enum variants.
pub fn to_upper_camel_case(name: &str) -> Cow<'_, str> {
    let converted = name.to_upper_camel_case();
    if converted == name {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(converted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase() {
        assert_eq!(to_uppercase("read"), "READ");
        assert!(matches!(to_uppercase("READ"), Cow::Borrowed("READ")));
    }

    #[test]
    fn upper_camel_case() {
        assert_eq!(to_upper_camel_case("freshman"), "Freshman");
        assert_eq!(to_upper_camel_case("DARK_RED"), "DarkRed");
        assert_eq!(to_upper_camel_case("dark red"), "DarkRed");
        assert!(matches!(to_upper_camel_case("Senior"), Cow::Borrowed("Senior")));
    }
}
