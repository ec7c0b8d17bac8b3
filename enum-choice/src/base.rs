use std::fmt;

use crate::{error::ConversionError, value::Value};

/// Primitive type every member of an enumeration also behaves as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BaseType {
    /// No primitive base; members are plain objects.
    #[default]
    Object,
    Int,
    Float,
    Str,
}

impl BaseType {
    /// Builds the primitive instance a member of this base type carries for `value`.
    ///
    /// `Object` accepts anything. The other bases coerce the value the way their constructors
    /// would, and fail if they can't.
    pub fn construct(self, value: &Value) -> Result<Instance, ConversionError> {
        Ok(match self {
            BaseType::Object => Instance::Object,
            BaseType::Int => Instance::Int(value.to_int()?),
            BaseType::Float => Instance::Float(value.to_float()?),
            BaseType::Str => Instance::Str(value.to_string()),
        })
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BaseType::Object => "object",
            BaseType::Int => "int",
            BaseType::Float => "float",
            BaseType::Str => "str",
        })
    }
}

/// The primitive side of a member, produced by [`BaseType::construct`].
#[derive(Debug, Clone, PartialEq)]
pub enum Instance {
    Object,
    Int(i64),
    Float(f64),
    Str(String),
}

impl Instance {
    pub fn base_type(&self) -> BaseType {
        match self {
            Instance::Object => BaseType::Object,
            Instance::Int(_) => BaseType::Int,
            Instance::Float(_) => BaseType::Float,
            Instance::Str(_) => BaseType::Str,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_base_coerces_numbers_and_numeric_strings() {
        assert_eq!(BaseType::Int.construct(&Value::Int(3)), Ok(Instance::Int(3)));
        assert_eq!(BaseType::Int.construct(&Value::Float(2.6)), Ok(Instance::Int(2)));
        assert_eq!(BaseType::Int.construct(&Value::from("7")), Ok(Instance::Int(7)));
        assert!(BaseType::Int.construct(&Value::from("seven")).is_err());
    }

    #[test]
    fn float_base_rejects_tuples() {
        assert_eq!(BaseType::Float.construct(&Value::Int(3)), Ok(Instance::Float(3.0)));
        let error = BaseType::Float
            .construct(&Value::tuple([Value::Int(1)]))
            .unwrap_err();
        assert_eq!(error.target, BaseType::Float);
        assert_eq!(error.value, "(1,)");
    }

    #[test]
    fn str_and_object_accept_anything() {
        assert_eq!(
            BaseType::Str.construct(&Value::Float(2.5)),
            Ok(Instance::Str("2.5".into()))
        );
        assert_eq!(BaseType::Object.construct(&Value::None), Ok(Instance::Object));
    }
}
