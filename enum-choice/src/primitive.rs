use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{base::BaseType, error::ConversionError, value::Value};

/// A primitive type members can be backed by.
///
/// Members delegate equality, ordering, hashing, truthiness and conversions to their value
/// through this trait.
pub trait ChoiceValue:
    Clone + PartialEq + PartialOrd + fmt::Display + fmt::Debug + Send + Sync + 'static
{
    const BASE_TYPE: BaseType;

    fn to_value(&self) -> Value;

    /// Feeds the value into `state`. Members hash through this, so it must agree with `Hash`
    /// where the type implements it.
    fn hash_value<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.to_value().hash(state)
    }

    fn is_truthy(&self) -> bool {
        self.to_value().is_truthy()
    }

    fn to_int(&self) -> Result<i64, ConversionError> {
        self.to_value().to_int()
    }
}

macro_rules! lossless_int {
    ($T:ty) => {
        impl ChoiceValue for $T {
            const BASE_TYPE: BaseType = BaseType::Int;

            fn to_value(&self) -> Value {
                Value::Int(i64::from(*self))
            }

            fn hash_value<H>(&self, state: &mut H)
            where
                H: Hasher,
            {
                self.hash(state)
            }

            fn is_truthy(&self) -> bool {
                *self != 0
            }

            fn to_int(&self) -> Result<i64, ConversionError> {
                Ok(i64::from(*self))
            }
        }
    };
}

lossless_int!(i8);
lossless_int!(i16);
lossless_int!(i32);
lossless_int!(i64);

lossless_int!(u8);
lossless_int!(u16);
lossless_int!(u32);

macro_rules! wide_int {
    ($T:ty) => {
        impl ChoiceValue for $T {
            const BASE_TYPE: BaseType = BaseType::Int;

            fn to_value(&self) -> Value {
                i64::try_from(*self)
                    .map(Value::Int)
                    .unwrap_or(Value::Float(*self as f64))
            }

            fn hash_value<H>(&self, state: &mut H)
            where
                H: Hasher,
            {
                self.hash(state)
            }

            fn is_truthy(&self) -> bool {
                *self != 0
            }

            fn to_int(&self) -> Result<i64, ConversionError> {
                i64::try_from(*self).map_err(|_| ConversionError {
                    value: self.to_string(),
                    target: BaseType::Int,
                })
            }
        }
    };
}

wide_int!(u64);
wide_int!(isize);
wide_int!(usize);

macro_rules! float {
    ($T:ty) => {
        impl ChoiceValue for $T {
            const BASE_TYPE: BaseType = BaseType::Float;

            fn to_value(&self) -> Value {
                Value::Float(f64::from(*self))
            }
        }
    };
}

float!(f32);
float!(f64);

// `bool` is an integer subtype, as far as base types are concerned.
impl ChoiceValue for bool {
    const BASE_TYPE: BaseType = BaseType::Int;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ChoiceValue for char {
    const BASE_TYPE: BaseType = BaseType::Str;

    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

impl ChoiceValue for &'static str {
    const BASE_TYPE: BaseType = BaseType::Str;

    fn to_value(&self) -> Value {
        Value::from(*self)
    }

    fn hash_value<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.hash(state)
    }
}

impl ChoiceValue for String {
    const BASE_TYPE: BaseType = BaseType::Str;

    fn to_value(&self) -> Value {
        Value::from(self.clone())
    }

    fn hash_value<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.hash(state)
    }
}

impl ChoiceValue for Value {
    const BASE_TYPE: BaseType = BaseType::Object;

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn hash_value<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.hash(state)
    }

    fn is_truthy(&self) -> bool {
        Value::is_truthy(self)
    }

    fn to_int(&self) -> Result<i64, ConversionError> {
        Value::to_int(self)
    }
}
