use std::{
    borrow::Cow,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use crate::{base::BaseType, error::ConversionError};

/// Dynamically typed member value.
///
/// Numbers compare and hash across variants, so `Int(1)`, `Float(1.0)` and `Bool(true)` are all
/// equal and hash the same. Float `NaN` is treated as equal to itself to keep `Eq` lawful.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Cow<'static, str>),
    Tuple(Vec<Value>),
}

#[derive(Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

// 2^63, the first float past `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl Value {
    pub fn tuple(elements: impl IntoIterator<Item = Value>) -> Self {
        Self::Tuple(elements.into_iter().collect())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Tuple(_) => "tuple",
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Tuple(elements) => !elements.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Converts to an integer the way `int(value)` would: floats are truncated, strings parsed.
    pub fn to_int(&self) -> Result<i64, ConversionError> {
        let converted = match self {
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Int(i) => Some(*i),
            Value::Float(f) if f.is_finite() => {
                let truncated = f.trunc();
                (truncated >= -I64_BOUND && truncated < I64_BOUND).then_some(truncated as i64)
            }
            Value::Str(s) => s.trim().parse().ok(),
            _ => None,
        };
        converted.ok_or_else(|| self.conversion_error(BaseType::Int))
    }

    pub fn to_float(&self) -> Result<f64, ConversionError> {
        let converted = match self {
            Value::Bool(b) => Some(f64::from(u8::from(*b))),
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Str(s) => s.trim().parse().ok(),
            _ => None,
        };
        converted.ok_or_else(|| self.conversion_error(BaseType::Float))
    }

    pub(crate) fn conversion_error(&self, target: BaseType) -> ConversionError {
        ConversionError {
            value: self.repr(),
            target,
        }
    }

    /// Quoted form used inside tuples and error messages.
    pub fn repr(&self) -> String {
        match self {
            Value::Str(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
            _ => self.to_string(),
        }
    }

    fn as_number(&self) -> Option<Number> {
        match self {
            Value::Bool(b) => Some(Number::Int(i64::from(*b))),
            Value::Int(i) => Some(Number::Int(*i)),
            Value::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }
}

fn compare_int_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        None
    } else if float >= I64_BOUND {
        Some(Ordering::Less)
    } else if float < -I64_BOUND {
        Some(Ordering::Greater)
    } else {
        let truncated = float.trunc();
        Some(int.cmp(&(truncated as i64)).then_with(|| {
            if float > truncated {
                Ordering::Less
            } else if float < truncated {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }))
    }
}

fn compare_numbers(a: Number, b: Number) -> Option<Ordering> {
    match (a, b) {
        (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
        (Number::Float(a), Number::Float(b)) if a.is_nan() && b.is_nan() => Some(Ordering::Equal),
        (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
        (Number::Int(a), Number::Float(b)) => compare_int_float(a, b),
        (Number::Float(a), Number::Int(b)) => compare_int_float(b, a).map(Ordering::reverse),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            return compare_numbers(a, b) == Some(Ordering::Equal);
        }
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            return compare_numbers(a, b);
        }
        match (self, other) {
            (Value::None, Value::None) => Some(Ordering::Equal),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (Value::Tuple(a), Value::Tuple(b)) => {
                for (x, y) in a.iter().zip(b) {
                    if x != y {
                        return x.partial_cmp(y);
                    }
                }
                Some(a.len().cmp(&b.len()))
            }
            _ => None,
        }
    }
}

impl Hash for Value {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        match self {
            Value::None => state.write_u8(0),
            Value::Bool(b) => i64::from(*b).hash(state),
            Value::Int(i) => i.hash(state),
            Value::Float(f) => {
                if f.fract() == 0.0 && *f >= -I64_BOUND && *f < I64_BOUND {
                    (*f as i64).hash(state)
                } else if f.is_nan() {
                    f64::NAN.to_bits().hash(state)
                } else {
                    f.to_bits().hash(state)
                }
            }
            Value::Str(s) => str::hash(s, state),
            Value::Tuple(elements) => elements.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(i) => fmt::Display::fmt(i, f),
            Value::Float(x) => fmt_float(*x, f),
            Value::Str(s) => f.write_str(s),
            Value::Tuple(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&element.repr())?;
                }
                if elements.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Writes a float the way Python's `str(float)` does: shortest round-trip digits, switching to
/// scientific notation with a signed, at least two-digit exponent below `1e-4` and from `1e16` on.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("nan");
    }
    if x.is_infinite() {
        return f.write_str(if x < 0.0 { "-inf" } else { "inf" });
    }

    let scientific = format!("{x:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if x != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    } else {
        let fixed = x.to_string();
        if fixed.contains('.') {
            f.write_str(&fixed)
        } else {
            write!(f, "{fixed}.0")
        }
    }
}

macro_rules! value_from_int {
    ($($T:ty),*) => {
        $(
            impl From<$T> for Value {
                fn from(value: $T) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&'static str> for Value {
    fn from(value: &'static str) -> Self {
        Value::Str(Cow::Borrowed(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(Cow::Owned(value))
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Str(Cow::Owned(value.to_string()))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Tuple(value)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::None)
    }
}

macro_rules! compare_with_primitive {
    ($($T:ty),*) => {
        $(
            impl PartialEq<$T> for Value {
                fn eq(&self, other: &$T) -> bool {
                    *self == Value::from(*other)
                }
            }

            impl PartialEq<Value> for $T {
                fn eq(&self, other: &Value) -> bool {
                    other == self
                }
            }

            impl PartialOrd<$T> for Value {
                fn partial_cmp(&self, other: &$T) -> Option<Ordering> {
                    self.partial_cmp(&Value::from(*other))
                }
            }

            impl PartialOrd<Value> for $T {
                fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )*
    };
}

compare_with_primitive!(i64, f64, bool);

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl<'a> PartialEq<&'a str> for Value {
    fn eq(&self, other: &&'a str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl<'a> PartialEq<Value> for &'a str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl<'a> PartialOrd<&'a str> for Value {
    fn partial_cmp(&self, other: &&'a str) -> Option<Ordering> {
        self.as_str().map(|s| s.cmp(other))
    }
}

impl<'a> PartialOrd<Value> for &'a str {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}
