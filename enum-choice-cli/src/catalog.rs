//! The enumerations bundled with the CLI.

use anyhow::{anyhow, Context};
use enum_choice::{names, EnumChoice, EnumClass};

#[derive(Debug, Clone, Copy, EnumChoice)]
#[enum_choice(base = "&'static str", process_name = "names::to_upper_camel_case")]
pub enum YearInSchool {
    #[choice(value = "FR")]
    Freshman,
    #[choice(value = "SO")]
    Sophomore,
    #[choice(value = "JR")]
    Junior,
    #[choice(value = "SR")]
    Senior,
}

#[derive(Debug, Clone, Copy, EnumChoice)]
#[enum_choice(base = "i64")]
pub enum Grade {
    #[choice(label = "Highest Grade")]
    A = 5,
    #[choice(label = "Very strong pass")]
    B = 4,
    #[choice(label = "Passed but with difficulties")]
    C = 3,
    #[choice(label = "Borderline: not passed but was not far from passing")]
    D = 2,
    #[choice(label = "Failed")]
    F = 0,
}

/// Object-based: members keep their string values but aren't strings themselves.
#[derive(Debug, Clone, Copy, EnumChoice)]
#[enum_choice(process_name = "names::to_upper_camel_case")]
pub enum Gender {
    #[choice(value = "")]
    Unspecified,
    #[choice(value = "M")]
    Male,
    #[choice(value = "F")]
    Female,
}

#[derive(Debug, Clone, Copy, EnumChoice)]
#[enum_choice(base = "i64", process_name = "names::to_upper_camel_case")]
pub enum Chmod {
    Read = 4,
    Write = 2,
    Execute = 1,
}

pub struct Catalog {
    classes: Vec<EnumClass>,
}

impl Catalog {
    pub fn load() -> anyhow::Result<Self> {
        let classes = vec![
            EnumClass::from_enum::<YearInSchool>()?,
            EnumClass::from_enum::<Grade>()?,
            EnumClass::from_enum::<Gender>()?,
            EnumClass::from_enum::<Chmod>()?,
        ];
        Ok(Self { classes })
    }

    pub fn classes(&self) -> &[EnumClass] {
        &self.classes
    }

    /// Finds an enumeration by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> anyhow::Result<&EnumClass> {
        self.classes
            .iter()
            .find(|class| class.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow!("no enumeration named {name:?}"))
            .with_context(|| {
                let known: Vec<_> = self.classes.iter().map(EnumClass::name).collect();
                format!("known enumerations are: {}", known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use enum_choice::{BaseType, ChoiceField, FieldError, Value};

    use super::*;

    #[test]
    fn catalog_mirrors_derived_enumerations() {
        let catalog = Catalog::load().unwrap();
        let names: Vec<_> = catalog.classes().iter().map(EnumClass::name).collect();
        assert_eq!(names, ["YearInSchool", "Grade", "Gender", "Chmod"]);

        assert_eq!(catalog.find("grade").unwrap().base_type(), BaseType::Int);
        assert_eq!(catalog.find("GENDER").unwrap().base_type(), BaseType::Object);
        assert_eq!(catalog.find("yearinschool").unwrap().base_type(), BaseType::Str);
        assert!(catalog.find("Colour").is_err());
    }

    #[test]
    fn default_labels_come_from_variant_names() {
        assert_eq!(
            YearInSchool::choices(),
            vec![
                ("FR", "Freshman"),
                ("SO", "Sophomore"),
                ("JR", "Junior"),
                ("SR", "Senior"),
            ]
        );
        assert_eq!(Gender::Unspecified.label(), "Unspecified");
        assert_eq!(Grade::D.label(), "Borderline: not passed but was not far from passing");
    }

    #[test]
    fn names_are_normalized_before_lookup() {
        assert_eq!(YearInSchool::get("FRESHMAN"), Ok(YearInSchool::Freshman));
        assert_eq!(Chmod::get("execute").map(Chmod::value), Ok(1));
        assert_eq!(Gender::get_or("OTHER", Gender::Unspecified), Gender::Unspecified);
    }

    // Every member must survive a round trip through a field configured from its enumeration.
    #[test]
    fn members_are_valid_field_values() {
        let year_in_school =
            ChoiceField::from_enum::<YearInSchool>().with_default(YearInSchool::Freshman);
        let grade = ChoiceField::from_enum::<Grade>().with_default(Grade::C);
        let gender = ChoiceField::from_enum::<Gender>().blank(true);

        for year in YearInSchool::iter() {
            for mark in Grade::iter() {
                for sex in Gender::iter() {
                    assert_eq!(year_in_school.clean(Some(year.into())), Ok(year.value()));
                    assert_eq!(grade.clean(Some(mark.into())), Ok(mark.value()));
                    assert_eq!(gender.clean(Some(sex.into())), Ok(sex.value()));
                }
            }
        }

        assert_eq!(year_in_school.clean(None), Ok("FR"));
        assert_eq!(grade.clean(None), Ok(3));
        assert_eq!(gender.clean(None), Err(FieldError::Required));
        assert_eq!(
            gender.clean(Some(Value::from("X"))),
            Err(FieldError::InvalidChoice { value: "X".into() })
        );
    }
}
