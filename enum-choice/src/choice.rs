use std::{borrow::Cow, iter::Copied, slice};

use tracing::trace;

use crate::{
    base::BaseType,
    error::{ConversionError, LookupError},
    primitive::ChoiceValue,
};

/// An enum whose variants are members with a value and a label.
///
/// Implemented by `#[derive(EnumChoice)]`; see the crate docs for the attributes it accepts.
///
/// Values are checked against the base type when the enum is compiled:
///
/// ```compile_fail,E0308
/// use enum_choice::EnumChoice;
///
/// #[derive(Debug, Clone, Copy, EnumChoice)]
/// #[enum_choice(base = "i64")]
/// enum Sizes {
///     #[choice(value = 1)]
///     Small,
///     #[choice(value = "large")]
///     Large,
/// }
/// ```
///
/// Every member needs a value, given either as `#[choice(value = ...)]` or as a discriminant:
///
/// ```compile_fail
/// use enum_choice::EnumChoice;
///
/// #[derive(Debug, Clone, Copy, EnumChoice)]
/// enum Colors {
///     Red = 1,
///     Green,
/// }
/// ```
///
/// Only unit variants can be members:
///
/// ```compile_fail
/// use enum_choice::EnumChoice;
///
/// #[derive(Debug, Clone, Copy, EnumChoice)]
/// enum Shapes {
///     #[choice(value = 1)]
///     Circle(u32),
/// }
/// ```
///
/// The same declarations compile once the values fit:
///
/// ```
/// use enum_choice::EnumChoice;
///
/// #[derive(Debug, Clone, Copy, EnumChoice)]
/// #[enum_choice(base = "i64")]
/// enum Sizes {
///     #[choice(value = 1)]
///     Small,
///     #[choice(value = 3)]
///     Large,
/// }
///
/// #[derive(Debug, Clone, Copy, EnumChoice)]
/// enum Colors {
///     Red = 1,
///     #[choice(value = 2)]
///     Green,
/// }
///
/// assert_eq!(Sizes::get("Large"), Ok(Sizes::Large));
/// assert_eq!(Colors::Green, 2_i64);
/// ```
pub trait EnumChoice: Copy + 'static {
    type Value: ChoiceValue;

    /// Name of the enumeration, used in error messages.
    const NAME: &'static str;

    /// All members, in declaration order.
    const MEMBERS: &'static [Self];

    fn name(self) -> &'static str;
    fn value(self) -> Self::Value;
    fn label(self) -> &'static str;

    /// Canonicalizes a name before it's matched against member names. Identity by default.
    fn process_name(name: &str) -> Cow<'_, str> {
        Cow::Borrowed(name)
    }

    fn base_type() -> BaseType {
        <Self::Value as ChoiceValue>::BASE_TYPE
    }

    fn iter() -> Copied<slice::Iter<'static, Self>> {
        Self::MEMBERS.iter().copied()
    }

    fn lookup(name: &str) -> Option<Self> {
        let name = Self::process_name(name);
        let found = Self::iter().find(|member| member.name() == name);
        if found.is_none() {
            trace!("{} has no member named {name:?}", Self::NAME);
        }
        found
    }

    fn get(name: &str) -> Result<Self, LookupError> {
        Self::lookup(name).ok_or_else(|| LookupError::new(Self::NAME, Self::process_name(name)))
    }

    /// Returns `fallback` when there's no member called `name`.
    ///
    /// The fallback has to be a member. For a fallback of any other type, use
    /// `lookup(name).map_or(fallback, ...)`.
    fn get_or(name: &str, fallback: Self) -> Self {
        Self::lookup(name).unwrap_or(fallback)
    }

    /// `(value, label)` pairs in declaration order, built anew on every call.
    fn choices() -> Vec<(Self::Value, &'static str)> {
        Self::iter()
            .map(|member| (member.value(), member.label()))
            .collect()
    }

    fn is_truthy(self) -> bool {
        self.value().is_truthy()
    }

    fn to_int(self) -> Result<i64, ConversionError> {
        self.value().to_int()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::{hash_map::RandomState, HashMap, HashSet},
        hash::{BuildHasher, Hash, Hasher},
    };

    use crate::{names, BaseType, EnumChoice, LookupError, Value};

    #[derive(Debug, Clone, Copy, EnumChoice)]
    #[enum_choice(base = "i64")]
    enum Chmod {
        Read = 4,
        Write = 2,
        Execute = 1,
    }

    #[derive(Debug, Clone, Copy, EnumChoice)]
    enum Mixed {
        A = 1,
        #[choice(value = 2, label = "bbbb")]
        B,
        #[choice(value = "c", label = "third letter")]
        C,
    }

    #[derive(Debug, Clone, Copy, EnumChoice)]
    enum Labelled {
        #[choice(value = 1, label = "First")]
        A,
        #[choice(value = 2, label = 1)]
        B,
        #[choice(value = 3, label = 7.4)]
        C,
    }

    #[derive(Debug, Clone, Copy, EnumChoice)]
    #[enum_choice(base = "i64")]
    #[allow(clippy::upper_case_acronyms, non_camel_case_types)]
    enum Shades {
        RED = 1,
        DARK_RED = 2,
        SuperDarkRed = 3,
    }

    #[derive(Debug, Clone, Copy, EnumChoice)]
    #[enum_choice(base = "f64")]
    enum Weights {
        #[choice(value = 0.9)]
        Light,
        #[choice(value = 2.6)]
        Heavy,
    }

    #[derive(Debug, Clone, Copy, EnumChoice)]
    #[enum_choice(base = "&'static str", process_name = "names::to_upper_camel_case")]
    enum YearInSchool {
        #[choice(value = "FR")]
        Freshman,
        #[choice(value = "SO")]
        Sophomore,
    }

    #[derive(Debug, Clone, Copy, EnumChoice)]
    enum Falsy {
        A = 0,
        #[choice(value = "")]
        B,
        #[choice(value = false)]
        C,
    }

    fn hash_of<T: Hash + ?Sized>(state: &RandomState, value: &T) -> u64 {
        let mut hasher = state.build_hasher();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn members_equal_their_raw_values() {
        assert_eq!(Chmod::Execute, 1_i64);
        assert_eq!(Chmod::Execute, Value::Float(1.0));
        assert_eq!(1_i64, Chmod::Execute);
        assert_ne!(Chmod::Execute, -1_i64);
        assert_ne!(Chmod::Execute, Value::Float(1.0001));
        assert_ne!(Chmod::Execute, Value::from("1"));
        assert_ne!(Chmod::Execute, Chmod::Read);
    }

    #[test]
    fn members_order_like_their_values() {
        assert!(Chmod::Execute < 11_i64);
        assert!(Chmod::Execute < Value::Float(1.001));
        assert!(Chmod::Execute >= -1_i64);
        assert!(Chmod::Execute >= Value::Float(0.999));
        assert!(Chmod::Write < Chmod::Read);

        for other in [-1_i64, 0, 1, 2, 5] {
            let less = Chmod::Execute < other;
            let equal = Chmod::Execute == other;
            let greater = Chmod::Execute > other;
            assert_eq!([less, equal, greater].iter().filter(|x| **x).count(), 1);
            assert_eq!(Chmod::Execute >= other, !less);
            assert_eq!(Chmod::Execute <= other, !greater);
        }
    }

    #[test]
    fn truthiness_follows_value() {
        assert!(Chmod::iter().all(|member| member.is_truthy()));
        assert!(Falsy::iter().all(|member| !member.is_truthy()));
    }

    #[test]
    fn display_and_int_conversion_follow_value() {
        assert_eq!(Chmod::Read.to_string(), "4");
        assert_eq!(Mixed::C.to_string(), "c");
        assert_eq!(Weights::Heavy.to_string(), "2.6");
        assert_eq!(Chmod::Read.to_int(), Ok(4));
        assert_eq!(Weights::Heavy.to_int(), Ok(2));
        assert!(Mixed::C.to_int().is_err());
        assert_eq!(i64::from(Chmod::Write), 2);
    }

    #[test]
    fn members_hash_like_their_values() {
        let state = RandomState::new();
        for member in Chmod::iter() {
            assert_eq!(hash_of(&state, &member), hash_of(&state, &member.value()));
        }
        for member in Mixed::iter() {
            assert_eq!(hash_of(&state, &member), hash_of(&state, &member.value()));
        }

        let mut permissions = HashMap::new();
        permissions.insert(Chmod::Read, "r");
        permissions.insert(Chmod::Write, "w");
        assert_eq!(permissions.get(&Chmod::Read), Some(&"r"));
        let set: HashSet<_> = Chmod::iter().chain(Chmod::iter()).collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn base_type_follows_declared_base() {
        assert_eq!(Chmod::base_type(), BaseType::Int);
        assert_eq!(Weights::base_type(), BaseType::Float);
        assert_eq!(YearInSchool::base_type(), BaseType::Str);
        assert_eq!(Mixed::base_type(), BaseType::Object);
    }

    #[test]
    fn explicit_labels_are_stringified() {
        let labels: Vec<_> = Labelled::iter().map(Labelled::label).collect();
        assert_eq!(labels, ["First", "1", "7.4"]);
    }

    #[test]
    fn default_labels_are_title_cased_names() {
        let labels: Vec<_> = Shades::iter().map(Shades::label).collect();
        assert_eq!(labels, ["Red", "Dark Red", "Super Dark Red"]);
    }

    #[test]
    fn choices_pair_values_with_labels() {
        assert_eq!(
            Mixed::choices(),
            vec![
                (Value::Int(1), "A"),
                (Value::Int(2), "bbbb"),
                (Value::from("c"), "third letter"),
            ]
        );
        assert_eq!(Chmod::choices(), vec![(4, "Read"), (2, "Write"), (1, "Execute")]);
        assert_eq!(Chmod::choices(), Chmod::choices());
    }

    #[test]
    fn get_finds_members_by_name() {
        assert_eq!(Chmod::get("Read"), Ok(Chmod::Read));
        assert_eq!(Chmod::get("Write"), Ok(Chmod::Write));
        assert_eq!(Chmod::get("Execute"), Ok(Chmod::Execute));
    }

    #[test]
    fn get_or_returns_fallback_on_miss() {
        for name in ["Suid", "read", "WRITE"] {
            assert_eq!(Chmod::get_or(name, Chmod::Execute), Chmod::Execute);
            assert_eq!(Chmod::lookup(name), None);
        }
    }

    #[test]
    fn lookup_accepts_fallbacks_of_any_type() {
        let describe = |name: &str| Chmod::lookup(name).map_or("none", Chmod::label);
        assert_eq!(describe("Write"), "Write");
        assert_eq!(describe("Suid"), "none");
        let value = Chmod::lookup("Suid").map_or(Value::None, |member| Value::Int(member.value()));
        assert_eq!(value, Value::None);
    }

    #[test]
    fn get_fails_on_miss() {
        assert_eq!(
            Chmod::get("Suid"),
            Err(LookupError {
                enumeration: "Chmod".into(),
                name: "Suid".into(),
            })
        );
    }

    #[test]
    fn process_name_canonicalizes_before_lookup() {
        assert_eq!(YearInSchool::get("freshman"), Ok(YearInSchool::Freshman));
        assert_eq!(YearInSchool::get("SOPHOMORE"), Ok(YearInSchool::Sophomore));
        let error = YearInSchool::get("senior").unwrap_err();
        assert_eq!(error.name, "Senior");
    }
}
