use crate::value::ValueType;
use std::collections::BTreeSet;

/// Width used for integer literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntPrecision {
    /// Integer literals become [`ValueType::Integer`].
    #[default]
    I32,
    /// Integer literals become [`ValueType::Long`].
    I64,
}

/// Representation used for floating point literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatPrecision {
    /// Float literals become [`ValueType::Float`].
    F32,
    /// Float literals become [`ValueType::Double`].
    #[default]
    F64,
    /// Float literals become [`ValueType::Decimal`].
    Decimal,
}

/// Compile-time engine configuration.
///
/// These choices are fixed per compiled expression; they decide which value kind literal
/// nodes populate and hence which kinds arithmetic nodes produce.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Integer literal width.
    pub int_precision: IntPrecision,
    /// Float literal representation.
    pub float_precision: FloatPrecision,
    /// Variables treated as compile-time constants. Their value is read from the scope
    /// passed to `compile` and folded by the optimizer.
    pub constants: BTreeSet<String>,
    /// Reject statically known type conflicts at compile time.
    pub strict: bool,
}

impl EngineConfig {
    /// Kind produced by integer literals.
    pub fn integer_type(&self) -> ValueType {
        match self.int_precision {
            IntPrecision::I32 => ValueType::Integer,
            IntPrecision::I64 => ValueType::Long,
        }
    }

    /// Kind produced by float literals.
    pub fn float_type(&self) -> ValueType {
        match self.float_precision {
            FloatPrecision::F32 => ValueType::Float,
            FloatPrecision::F64 => ValueType::Double,
            FloatPrecision::Decimal => ValueType::Decimal,
        }
    }

    /// Builder-style helper marking `name` as a compile-time constant.
    pub fn with_constant(mut self, name: impl Into<String>) -> Self {
        self.constants.insert(name.into());
        self
    }

    /// True when `name` is configured as a compile-time constant.
    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.contains(name)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
