//! Text renderings of enumerations, printed by the subcommands.

use std::fmt::Write;

use enum_choice::{EnumClass, LookupError, Member};

use crate::catalog::Catalog;

/// One line per enumeration: its name, base type and number of members.
pub fn list(catalog: &Catalog) -> String {
    let mut out = String::new();
    for class in catalog.classes() {
        _ = writeln!(
            out,
            "{} ({}, {} members)",
            class.name(),
            class.base_type(),
            class.len()
        );
    }
    out
}

/// One `value<TAB>label` line per choice. Values are quoted when they're strings, so that empty
/// values stay visible.
pub fn choices(class: &EnumClass) -> String {
    let mut out = String::new();
    for (value, label) in class.choices() {
        _ = writeln!(out, "{}\t{label}", value.repr());
    }
    out
}

pub fn member(member: &Member) -> String {
    format!(
        "{} = {} ({})",
        member.name(),
        member.value().repr(),
        member.label()
    )
}

/// Renders the member called `name`, or `fallback` verbatim if there is no such member.
pub fn get(class: &EnumClass, name: &str, fallback: Option<&str>) -> Result<String, LookupError> {
    match (class.get(name), fallback) {
        (Ok(found), _) => Ok(member(found)),
        (Err(_), Some(fallback)) => Ok(fallback.to_owned()),
        (Err(error), None) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn list_shows_every_enumeration() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(
            list(&catalog),
            indoc! {"
                YearInSchool (str, 4 members)
                Grade (int, 5 members)
                Gender (object, 3 members)
                Chmod (int, 3 members)
            "}
        );
    }

    #[test]
    fn choices_are_tab_separated() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(
            choices(catalog.find("Grade").unwrap()),
            indoc! {"
                5\tHighest Grade
                4\tVery strong pass
                3\tPassed but with difficulties
                2\tBorderline: not passed but was not far from passing
                0\tFailed
            "}
        );
        assert_eq!(
            choices(catalog.find("Gender").unwrap()),
            indoc! {"
                ''\tUnspecified
                'M'\tMale
                'F'\tFemale
            "}
        );
    }

    #[test]
    fn get_renders_member_or_fallback() {
        let catalog = Catalog::load().unwrap();
        let year_in_school = catalog.find("YearInSchool").unwrap();
        assert_eq!(
            get(year_in_school, "SENIOR", None).unwrap(),
            "Senior = 'SR' (Senior)"
        );
        assert_eq!(
            get(year_in_school, "Graduate", Some("n/a")).unwrap(),
            "n/a"
        );
        assert_eq!(
            get(year_in_school, "Graduate", None).unwrap_err(),
            LookupError::new("YearInSchool", "Graduate")
        );
    }
}
