//! A form field restricted to a list of choices.

use crate::{
    choice::EnumChoice, class::EnumClass, error::FieldError, primitive::ChoiceValue, value::Value,
};

/// Validates values against `(value, label)` choices, the way a model field with `choices` does.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceField<V> {
    choices: Vec<(V, String)>,
    default: Option<V>,
    blank: bool,
}

impl<V> ChoiceField<V>
where
    V: ChoiceValue,
{
    pub fn new<L>(choices: impl IntoIterator<Item = (V, L)>) -> Self
    where
        L: Into<String>,
    {
        Self {
            choices: choices
                .into_iter()
                .map(|(value, label)| (value, label.into()))
                .collect(),
            default: None,
            blank: false,
        }
    }

    pub fn from_enum<E>() -> Self
    where
        E: EnumChoice<Value = V>,
    {
        Self::new(E::choices())
    }

    /// Sets the value used when none is given. Members convert into their value, so a member can
    /// be passed here directly.
    pub fn with_default(mut self, default: impl Into<V>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Allows empty (falsy) values that are not among the choices.
    pub fn blank(mut self, blank: bool) -> Self {
        self.blank = blank;
        self
    }

    pub fn choices(&self) -> &[(V, String)] {
        &self.choices
    }

    pub fn default_value(&self) -> Option<&V> {
        self.default.as_ref()
    }

    pub fn label_of(&self, value: &V) -> Option<&str> {
        self.choices
            .iter()
            .find(|(choice, _)| choice == value)
            .map(|(_, label)| label.as_str())
    }

    pub fn clean(&self, value: Option<V>) -> Result<V, FieldError> {
        let value = match value {
            Some(value) => value,
            None => return self.default.clone().ok_or(FieldError::Required),
        };
        let is_choice = self.choices.iter().any(|(choice, _)| *choice == value);
        if is_choice || (self.blank && !value.is_truthy()) {
            Ok(value)
        } else {
            Err(FieldError::InvalidChoice {
                value: value.to_string(),
            })
        }
    }
}

impl ChoiceField<Value> {
    pub fn from_class(class: &EnumClass) -> Self {
        Self::new(class.choices())
    }
}
