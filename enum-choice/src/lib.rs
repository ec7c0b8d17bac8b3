//! Enumerations that double as `(value, label)` choice lists.
//!
//! There are two ways of declaring an enumeration:
//!
//! - `#[derive(EnumChoice)]` on a Rust enum with unit variants. Values, labels and the base type
//!   are resolved at compile time.
//! - [`EnumClass::builder`] for enumerations that are only known at runtime. The builder resolves
//!   the base type and validates every member before the class exists.
//!
//! ```
//! use enum_choice::EnumChoice;
//!
//! #[derive(Debug, Clone, Copy, EnumChoice)]
//! #[enum_choice(base = "i64")]
//! enum Color {
//!     #[choice(label = "Red")]
//!     R = 1,
//!     G = 2,
//!     DarkBlue = 3,
//! }
//!
//! assert_eq!(Color::choices(), vec![(1, "Red"), (2, "G"), (3, "Dark Blue")]);
//! assert_eq!(Color::DarkBlue, 3_i64);
//! ```
//!
//! The derive implements `PartialEq`, `Eq`, `PartialOrd`, `Hash` and `Display` in terms of the
//! member's value, so those must not be derived alongside it.

extern crate self as enum_choice;

pub mod base;
pub mod choice;
pub mod class;
pub mod error;
pub mod field;
pub mod label;
pub mod names;
pub mod primitive;
pub mod value;

pub use base::{BaseType, Instance};
pub use choice::EnumChoice;
pub use class::{Declaration, EnumClass, EnumClassBuilder, Member};
pub use error::{ConstructionError, ConversionError, FieldError, LookupError};
pub use field::ChoiceField;
pub use primitive::ChoiceValue;
pub use value::Value;

pub use enum_choice_derive::*;
