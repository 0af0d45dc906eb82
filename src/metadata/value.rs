//! Scalar values of declared constants.
//!
//! [`ConstValue`] is what a constant symbol holds and what a label mapping is keyed by. It is
//! deliberately restricted to totally ordered, hashable scalars; floating point constants are
//! not representable since they could not key a [`crate::metadata::LabelMap`].

use std::fmt;

use strum::{Display, EnumCount, EnumIter, EnumString};

/// The kind of a [`ConstValue`], without data
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, EnumCount,
)]
pub enum ConstKind {
    /// `bool`
    Boolean,
    /// Any integer that fits an `i64`
    Integer,
    /// A single `char`
    Char,
    /// An owned string
    String,
}

/// Value of a constant symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstValue {
    /// Boolean value
    Boolean(bool),
    /// Integer value, widened to 64 bits
    Integer(i64),
    /// Character value
    Char(char),
    /// String value
    String(String),
}

impl ConstValue {
    /// Returns the kind of this value
    #[must_use]
    pub fn kind(&self) -> ConstKind {
        match self {
            ConstValue::Boolean(_) => ConstKind::Boolean,
            ConstValue::Integer(_) => ConstKind::Integer,
            ConstValue::Char(_) => ConstKind::Char,
            ConstValue::String(_) => ConstKind::String,
        }
    }

    /// Detect the kind of this value, restricted to an allow-list
    ///
    /// ## Arguments
    /// * `allowed` - Kinds the caller accepts; an empty list accepts every kind
    /// * `default` - Kind reported when the value's kind is not allowed
    ///
    /// Without a `default`, the value's own kind is reported even if it is not allowed.
    #[must_use]
    pub fn detect_kind(&self, allowed: &[ConstKind], default: Option<ConstKind>) -> ConstKind {
        let kind = self.kind();
        if allowed.is_empty() || allowed.contains(&kind) {
            return kind;
        }

        default.unwrap_or(kind)
    }

    /// Try to convert to a boolean value
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConstValue::Boolean(value) => Some(*value),
            ConstValue::Integer(value) => Some(*value != 0),
            _ => None,
        }
    }

    /// Try to convert to a 64-bit integer value
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConstValue::Boolean(value) => Some(i64::from(*value)),
            ConstValue::Integer(value) => Some(*value),
            ConstValue::Char(value) => Some(i64::from(u32::from(*value))),
            ConstValue::String(value) => value.trim().parse().ok(),
        }
    }

    /// Borrow the string payload, if this is a string value
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConstValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Boolean(value) => write!(f, "{value}"),
            ConstValue::Integer(value) => write!(f, "{value}"),
            ConstValue::Char(value) => write!(f, "{value}"),
            ConstValue::String(value) => f.write_str(value),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ConstValue {
                fn from(value: $ty) -> Self {
                    ConstValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for ConstValue {
    fn from(value: bool) -> Self {
        ConstValue::Boolean(value)
    }
}

impl From<char> for ConstValue {
    fn from(value: char) -> Self {
        ConstValue::Char(value)
    }
}

impl From<&str> for ConstValue {
    fn from(value: &str) -> Self {
        ConstValue::String(value.to_string())
    }
}

impl From<String> for ConstValue {
    fn from(value: String) -> Self {
        ConstValue::String(value)
    }
}
