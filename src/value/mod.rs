//! Tagged value model shared by the builder, optimizer and evaluator.

pub(crate) mod approx;
pub(crate) mod ops;

use crate::foundation::error::{ExprError, ExprResult};
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;

/// Kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ValueType {
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    Long,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// 96-bit fixed point decimal.
    Decimal,
    /// Boolean.
    Boolean,
    /// Immutable string.
    String,
    /// Absence of a value.
    Null,
}

impl ValueType {
    /// True for the five numeric kinds.
    pub fn is_numeric(self) -> bool {
        self.is_integer_family() || self.is_float_family()
    }

    /// Integer or Long.
    pub fn is_integer_family(self) -> bool {
        matches!(self, Self::Integer | Self::Long)
    }

    /// Float, Double or Decimal.
    pub fn is_float_family(self) -> bool {
        matches!(self, Self::Float | Self::Double | Self::Decimal)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Decimal => "Decimal",
            Self::Boolean => "Boolean",
            Self::String => "String",
            Self::Null => "Null",
        };
        f.write_str(s)
    }
}

/// A single evaluated value. Exactly one payload is live, selected by the variant.
///
/// Cloning never allocates: strings are shared through [`Arc`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// 32-bit signed integer.
    Integer(i32),
    /// 64-bit signed integer.
    Long(i64),
    /// 32-bit float.
    Float(f32),
    /// 64-bit float.
    Double(f64),
    /// Fixed point decimal.
    Decimal(Decimal),
    /// Boolean.
    Boolean(bool),
    /// Immutable shared string.
    String(Arc<str>),
    /// Absence of a value.
    #[default]
    Null,
}

impl Value {
    /// Kind tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Integer(_) => ValueType::Integer,
            Self::Long(_) => ValueType::Long,
            Self::Float(_) => ValueType::Float,
            Self::Double(_) => ValueType::Double,
            Self::Decimal(_) => ValueType::Decimal,
            Self::Boolean(_) => ValueType::Boolean,
            Self::String(_) => ValueType::String,
            Self::Null => ValueType::Null,
        }
    }

    /// True for the five numeric kinds.
    pub fn is_numeric(&self) -> bool {
        self.value_type().is_numeric()
    }

    /// Build a string value.
    pub fn string(s: &str) -> Self {
        Self::String(Arc::from(s))
    }

    /// Boolean payload, or a type error naming `what` for any other kind.
    pub fn as_bool(&self, what: &str) -> ExprResult<bool> {
        match self {
            Self::Boolean(v) => Ok(*v),
            other => Err(ExprError::type_error(format!(
                "'{what}' expects Boolean, got {}",
                other.value_type()
            ))),
        }
    }

    /// Numeric payload widened to `f64`. Decimal converts with rounding.
    pub fn as_f64(&self) -> ExprResult<f64> {
        use rust_decimal::prelude::ToPrimitive;
        match self {
            Self::Integer(v) => Ok(f64::from(*v)),
            Self::Long(v) => Ok(*v as f64),
            Self::Float(v) => Ok(f64::from(*v)),
            Self::Double(v) => Ok(*v),
            Self::Decimal(v) => v.to_f64().ok_or_else(|| {
                ExprError::runtime(format!("decimal {v} is not representable as f64"))
            }),
            other => Err(ExprError::type_error(format!(
                "expected numeric, got {}",
                other.value_type()
            ))),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v}"),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::string(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/value.rs"]
mod tests;
