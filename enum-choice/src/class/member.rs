use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    base::{BaseType, Instance},
    error::ConversionError,
    value::Value,
};

/// One named constant of an [`EnumClass`](super::EnumClass).
///
/// Equality, ordering, hashing and `Display` all go through the member's value, so a member can
/// stand in for its raw value in comparisons and as a map key.
#[derive(Debug, Clone)]
pub struct Member {
    pub(super) name: String,
    pub(super) value: Value,
    pub(super) label: String,
    pub(super) instance: Instance,
}

impl Member {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value exactly as it was declared.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The value as an instance of the enumeration's base type.
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    pub fn base_type(&self) -> BaseType {
        self.instance.base_type()
    }

    /// Every member is an `Object`; members of a typed enumeration are also instances of its base.
    pub fn is_instance_of(&self, base: BaseType) -> bool {
        base == BaseType::Object || self.base_type() == base
    }

    pub fn as_int(&self) -> Option<i64> {
        match self.instance {
            Instance::Int(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self.instance {
            Instance::Float(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.instance {
            Instance::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        self.value.is_truthy()
    }

    pub fn to_int(&self) -> Result<i64, ConversionError> {
        self.value.to_int()
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Member {}

impl PartialOrd for Member {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl Hash for Member {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.value.hash(state)
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl From<&Member> for Value {
    fn from(member: &Member) -> Self {
        member.value.clone()
    }
}

macro_rules! compare_member_with {
    ($($T:ty),*) => {
        $(
            impl PartialEq<$T> for Member {
                fn eq(&self, other: &$T) -> bool {
                    self.value == *other
                }
            }

            impl PartialEq<Member> for $T {
                fn eq(&self, other: &Member) -> bool {
                    other.value == *self
                }
            }

            impl PartialOrd<$T> for Member {
                fn partial_cmp(&self, other: &$T) -> Option<Ordering> {
                    self.value.partial_cmp(other)
                }
            }

            impl PartialOrd<Member> for $T {
                fn partial_cmp(&self, other: &Member) -> Option<Ordering> {
                    other.value.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )*
    };
}

compare_member_with!(Value, i64, f64, bool);

impl<'a> PartialEq<&'a str> for Member {
    fn eq(&self, other: &&'a str) -> bool {
        self.value == *other
    }
}

impl<'a> PartialOrd<&'a str> for Member {
    fn partial_cmp(&self, other: &&'a str) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}
