use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{
    base::BaseType, error::ConstructionError, label::resolve_label, names, names::NameProcessor,
    value::Value,
};

use super::{EnumClass, Member};

/// A member as it was written down: its value followed by companion values.
///
/// The first companion is the label. Any further companions are accepted and ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    value: Value,
    companions: Vec<Value>,
}

impl Declaration {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            companions: vec![],
        }
    }

    pub fn with_label(mut self, label: impl Into<Value>) -> Self {
        let label = label.into();
        match self.companions.first_mut() {
            Some(first) => *first = label,
            None => self.companions.push(label),
        }
        self
    }

    pub fn with_companion(mut self, companion: impl Into<Value>) -> Self {
        self.companions.push(companion.into());
        self
    }
}

/// Collects member declarations and turns them into an [`EnumClass`] in one step.
#[derive(Debug, Clone)]
pub struct EnumClassBuilder {
    name: String,
    bases: Vec<BaseType>,
    declarations: Vec<(String, Declaration)>,
    process_name: NameProcessor,
}

impl EnumClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: vec![],
            declarations: vec![],
            process_name: names::identity,
        }
    }

    /// Declares a parent type. `Object` parents don't affect the resolved base type.
    pub fn base(mut self, base: BaseType) -> Self {
        self.bases.push(base);
        self
    }

    pub fn process_name(mut self, process_name: NameProcessor) -> Self {
        self.process_name = process_name;
        self
    }

    pub fn member(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.declare(name, Declaration::new(value))
    }

    pub fn member_with_label(
        self,
        name: impl Into<String>,
        value: impl Into<Value>,
        label: impl Into<Value>,
    ) -> Self {
        self.declare(name, Declaration::new(value).with_label(label))
    }

    pub fn declare(mut self, name: impl Into<String>, declaration: Declaration) -> Self {
        self.declarations.push((name.into(), declaration));
        self
    }

    /// Resolves the base type, then constructs and validates every member.
    ///
    /// A member whose value equals an earlier member's value becomes an alias of that member.
    pub fn build(self) -> Result<EnumClass, ConstructionError> {
        let base_type = resolve_base_type(&self.name, &self.bases)?;

        let mut members: Vec<Member> = Vec::with_capacity(self.declarations.len());
        let mut names = IndexMap::with_capacity(self.declarations.len());
        for (name, Declaration { value, companions }) in self.declarations {
            if name.is_empty() {
                return Err(ConstructionError::EmptyName {
                    enumeration: self.name,
                });
            }
            if names.contains_key(&name) {
                return Err(ConstructionError::DuplicateName {
                    enumeration: self.name,
                    name,
                });
            }

            let instance = match base_type.construct(&value) {
                Ok(instance) => instance,
                Err(source) => {
                    return Err(ConstructionError::IncompatibleValue {
                        enumeration: self.name,
                        member: name,
                        source,
                    })
                }
            };
            if companions.len() > 1 {
                trace!(
                    "Ignoring {} extra companion values of {}.{name}",
                    companions.len() - 1,
                    self.name
                );
            }

            if let Some(canonical) = members.iter().position(|member| member.value == value) {
                trace!(
                    "{}.{name} is an alias of {}.{}",
                    self.name,
                    self.name,
                    members[canonical].name
                );
                names.insert(name, canonical);
                continue;
            }

            let label = resolve_label(&name, companions.first());
            names.insert(name.clone(), members.len());
            members.push(Member {
                name,
                value,
                label,
                instance,
            });
        }

        debug!(
            "Built enumeration {} with base type {base_type}, {} members and {} aliases",
            self.name,
            members.len(),
            names.len() - members.len()
        );

        Ok(EnumClass {
            name: self.name,
            base_type,
            members,
            names,
            process_name: self.process_name,
        })
    }
}

fn resolve_base_type(enumeration: &str, bases: &[BaseType]) -> Result<BaseType, ConstructionError> {
    let mut resolved = BaseType::Object;
    for &base in bases {
        if base == BaseType::Object || base == resolved {
            continue;
        }
        if resolved != BaseType::Object {
            return Err(ConstructionError::ConflictingBases {
                enumeration: enumeration.to_owned(),
                first: resolved,
                second: base,
            });
        }
        resolved = base;
    }
    Ok(resolved)
}
