//! Enumerations built at runtime.

mod builder;
mod member;

use std::{borrow::Cow, fmt, slice};

use indexmap::IndexMap;
use tracing::trace;

use crate::{
    base::BaseType,
    choice::EnumChoice,
    error::{ConstructionError, LookupError},
    names::NameProcessor,
    primitive::ChoiceValue,
    value::Value,
};

pub use builder::*;
pub use member::*;

/// A closed, ordered set of members, fixed once [`EnumClassBuilder::build`] returns it.
#[derive(Clone)]
pub struct EnumClass {
    name: String,
    base_type: BaseType,
    /// Canonical members, in declaration order.
    members: Vec<Member>,
    /// Every declared name, aliases included, mapped to an index into `members`.
    names: IndexMap<String, usize>,
    process_name: NameProcessor,
}

impl EnumClass {
    pub fn builder(name: impl Into<String>) -> EnumClassBuilder {
        EnumClassBuilder::new(name)
    }

    /// Builds the runtime counterpart of a derived enumeration.
    pub fn from_enum<E>() -> Result<Self, ConstructionError>
    where
        E: EnumChoice,
    {
        E::iter()
            .fold(
                EnumClassBuilder::new(E::NAME)
                    .base(E::base_type())
                    .process_name(E::process_name),
                |builder, member| {
                    builder.member_with_label(
                        member.name(),
                        member.value().to_value(),
                        member.label(),
                    )
                },
            )
            .build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_type(&self) -> BaseType {
        self.base_type
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Canonical members in declaration order. Aliases are not included.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn iter(&self) -> slice::Iter<'_, Member> {
        self.members.iter()
    }

    /// Every declared name with the member it resolves to, aliases included.
    pub fn names(&self) -> impl Iterator<Item = (&str, &Member)> + '_ {
        self.names
            .iter()
            .map(|(name, &index)| (name.as_str(), &self.members[index]))
    }

    pub fn process_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
        (self.process_name)(name)
    }

    pub fn lookup(&self, name: &str) -> Option<&Member> {
        let name = self.process_name(name);
        let found = self
            .names
            .get(&*name)
            .map(|&index| &self.members[index]);
        if found.is_none() {
            trace!("{} has no member named {name:?}", self.name);
        }
        found
    }

    pub fn get(&self, name: &str) -> Result<&Member, LookupError> {
        self.lookup(name)
            .ok_or_else(|| LookupError::new(&self.name, self.process_name(name)))
    }

    /// Returns `fallback` when there's no member called `name`.
    ///
    /// The fallback has to be a member, possibly of another class. For a fallback of any other
    /// type, use `lookup(name).map_or(fallback, ...)`.
    pub fn get_or<'a>(&'a self, name: &str, fallback: &'a Member) -> &'a Member {
        self.lookup(name).unwrap_or(fallback)
    }

    /// `(value, label)` pairs in declaration order, built anew on every call.
    pub fn choices(&self) -> Vec<(Value, String)> {
        self.members
            .iter()
            .map(|member| (member.value().clone(), member.label().to_owned()))
            .collect()
    }
}

impl fmt::Debug for EnumClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumClass")
            .field("name", &self.name)
            .field("base_type", &self.base_type)
            .field("members", &self.members)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a EnumClass {
    type Item = &'a Member;
    type IntoIter = slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
