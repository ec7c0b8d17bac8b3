use thiserror::Error;

use crate::base::BaseType;

/// Raised when a member name doesn't resolve and no fallback was given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{enumeration}` has no member named `{name}`")]
pub struct LookupError {
    pub enumeration: String,
    /// The name after `process_name` was applied to it.
    pub name: String,
}

impl LookupError {
    pub fn new(enumeration: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            enumeration: enumeration.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert {value} to {target}")]
pub struct ConversionError {
    pub value: String,
    pub target: BaseType,
}

/// Failures while building an enumeration. Nothing is built when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("`{enumeration}` declares a member with an empty name")]
    EmptyName { enumeration: String },
    #[error("`{enumeration}` declares member `{name}` more than once")]
    DuplicateName { enumeration: String, name: String },
    #[error("`{enumeration}` has conflicting base types `{first}` and `{second}`")]
    ConflictingBases {
        enumeration: String,
        first: BaseType,
        second: BaseType,
    },
    #[error("member `{enumeration}.{member}` has an incompatible value: {source}")]
    IncompatibleValue {
        enumeration: String,
        member: String,
        source: ConversionError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("a value is required")]
    Required,
    #[error("{value} is not one of the available choices")]
    InvalidChoice { value: String },
}
