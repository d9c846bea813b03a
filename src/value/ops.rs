//! Numeric promotion, arithmetic and comparison over [`Value`]s.
//!
//! Promotion rules:
//! - Integer-family with integer-family: Long if either side is Long, else Integer.
//! - Float with Double: Double. Same kinds stay put.
//! - Integer-family with float-family: the float operand's kind.
//! - Decimal with Float or Double: type error, no implicit lossy mixing.

use crate::foundation::error::{ExprError, ExprResult};
use crate::value::approx::{nearly_equal_f32, nearly_equal_f64};
use crate::value::{Value, ValueType};
use rust_decimal::Decimal;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl ArithOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }

    fn is_equality(self) -> bool {
        matches!(self, Self::Eq | Self::Ne)
    }
}

/// Result kind of a binary numeric operation over `a` and `b`.
pub(crate) fn promote(a: ValueType, b: ValueType) -> ExprResult<ValueType> {
    use ValueType::*;
    if !a.is_numeric() || !b.is_numeric() {
        return Err(ExprError::type_error(format!(
            "numeric operation on {a} and {b}"
        )));
    }
    let t = match (a, b) {
        _ if a == b => a,
        (Integer, Long) | (Long, Integer) => Long,
        (Float, Double) | (Double, Float) => Double,
        (Decimal, Float | Double) | (Float | Double, Decimal) => {
            return Err(ExprError::type_error(format!(
                "cannot mix {a} and {b} without an explicit conversion"
            )));
        }
        (x, y) if x.is_integer_family() => y,
        (x, _) => x,
    };
    Ok(t)
}

enum Pair {
    I32(i32, i32),
    I64(i64, i64),
    F32(f32, f32),
    F64(f64, f64),
    Dec(Decimal, Decimal),
}

fn to_i64(v: &Value) -> i64 {
    match v {
        Value::Integer(x) => i64::from(*x),
        Value::Long(x) => *x,
        _ => 0,
    }
}

fn to_f32(v: &Value) -> f32 {
    match v {
        Value::Integer(x) => *x as f32,
        Value::Long(x) => *x as f32,
        Value::Float(x) => *x,
        _ => 0.0,
    }
}

fn to_f64(v: &Value) -> f64 {
    match v {
        Value::Integer(x) => f64::from(*x),
        Value::Long(x) => *x as f64,
        Value::Float(x) => f64::from(*x),
        Value::Double(x) => *x,
        _ => 0.0,
    }
}

fn to_decimal(v: &Value) -> Decimal {
    match v {
        Value::Integer(x) => Decimal::from(*x),
        Value::Long(x) => Decimal::from(*x),
        Value::Decimal(x) => *x,
        _ => Decimal::ZERO,
    }
}

fn numeric_pair(a: &Value, b: &Value) -> ExprResult<Pair> {
    let pair = match promote(a.value_type(), b.value_type())? {
        ValueType::Integer => match (a, b) {
            (Value::Integer(x), Value::Integer(y)) => Pair::I32(*x, *y),
            _ => unreachable!("promote yields Integer only for two Integers"),
        },
        ValueType::Long => Pair::I64(to_i64(a), to_i64(b)),
        ValueType::Float => Pair::F32(to_f32(a), to_f32(b)),
        ValueType::Double => Pair::F64(to_f64(a), to_f64(b)),
        ValueType::Decimal => Pair::Dec(to_decimal(a), to_decimal(b)),
        other => unreachable!("promote never yields {other}"),
    };
    Ok(pair)
}

fn overflow(op: ArithOp, ty: &str) -> ExprError {
    ExprError::runtime(format!("{ty} overflow in '{}'", op.symbol()))
}

fn div_by_zero(op: ArithOp) -> ExprError {
    ExprError::runtime(format!("division by zero in '{}'", op.symbol()))
}

macro_rules! checked_int {
    ($op:expr, $x:expr, $y:expr, $zero:expr, $ty:literal) => {{
        let r = match $op {
            ArithOp::Add => $x.checked_add($y),
            ArithOp::Sub => $x.checked_sub($y),
            ArithOp::Mul => $x.checked_mul($y),
            ArithOp::Div | ArithOp::Mod if $y == $zero => return Err(div_by_zero($op)),
            ArithOp::Div => $x.checked_div($y),
            ArithOp::Mod => $x.checked_rem($y),
        };
        r.ok_or_else(|| overflow($op, $ty))?
    }};
}

macro_rules! float_op {
    ($op:expr, $x:expr, $y:expr) => {
        match $op {
            ArithOp::Add => $x + $y,
            ArithOp::Sub => $x - $y,
            ArithOp::Mul => $x * $y,
            ArithOp::Div => $x / $y,
            ArithOp::Mod => $x % $y,
        }
    };
}

/// Apply `op` to two numeric values following the promotion rules.
pub(crate) fn arith(op: ArithOp, a: &Value, b: &Value) -> ExprResult<Value> {
    let v = match numeric_pair(a, b).map_err(|e| arith_type_error(op, a, b, e))? {
        Pair::I32(x, y) => Value::Integer(checked_int!(op, x, y, 0, "Integer")),
        Pair::I64(x, y) => Value::Long(checked_int!(op, x, y, 0, "Long")),
        Pair::F32(x, y) => Value::Float(float_op!(op, x, y)),
        Pair::F64(x, y) => Value::Double(float_op!(op, x, y)),
        Pair::Dec(x, y) => Value::Decimal(checked_int!(op, x, y, Decimal::ZERO, "Decimal")),
    };
    Ok(v)
}

fn arith_type_error(op: ArithOp, a: &Value, b: &Value, e: ExprError) -> ExprError {
    match e {
        ExprError::Type(_) if !a.is_numeric() || !b.is_numeric() => ExprError::type_error(format!(
            "operator '{}' expects numeric operands, got {} and {}",
            op.symbol(),
            a.value_type(),
            b.value_type()
        )),
        other => other,
    }
}

/// Compare two values. Float and Double equality is approximate.
pub(crate) fn compare(op: CompareOp, a: &Value, b: &Value) -> ExprResult<bool> {
    if a.is_numeric() && b.is_numeric() {
        return Ok(match numeric_pair(a, b)? {
            Pair::F32(x, y) if op.is_equality() => (op == CompareOp::Eq) == nearly_equal_f32(x, y),
            Pair::F64(x, y) if op.is_equality() => (op == CompareOp::Eq) == nearly_equal_f64(x, y),
            Pair::I32(x, y) => ordering_holds(op, x.partial_cmp(&y)),
            Pair::I64(x, y) => ordering_holds(op, x.partial_cmp(&y)),
            Pair::F32(x, y) => ordering_holds(op, x.partial_cmp(&y)),
            Pair::F64(x, y) => ordering_holds(op, x.partial_cmp(&y)),
            Pair::Dec(x, y) => ordering_holds(op, x.partial_cmp(&y)),
        });
    }

    match (a, b) {
        (Value::String(x), Value::String(y)) => Ok(ordering_holds(op, x.partial_cmp(y))),
        (Value::Boolean(x), Value::Boolean(y)) if op.is_equality() => {
            Ok((op == CompareOp::Eq) == (x == y))
        }
        (Value::Null, _) | (_, Value::Null) if op.is_equality() => {
            let both = a.value_type() == b.value_type();
            Ok((op == CompareOp::Eq) == both)
        }
        _ => Err(ExprError::type_error(format!(
            "operator '{}' cannot compare {} with {}",
            op.symbol(),
            a.value_type(),
            b.value_type()
        ))),
    }
}

fn ordering_holds(op: CompareOp, ord: Option<Ordering>) -> bool {
    let Some(ord) = ord else {
        // NaN: only inequality holds.
        return op == CompareOp::Ne;
    };
    match op {
        CompareOp::Eq => ord == Ordering::Equal,
        CompareOp::Ne => ord != Ordering::Equal,
        CompareOp::Lt => ord == Ordering::Less,
        CompareOp::Le => ord != Ordering::Greater,
        CompareOp::Gt => ord == Ordering::Greater,
        CompareOp::Ge => ord != Ordering::Less,
    }
}

/// Arithmetic negation, preserving the operand's kind.
pub(crate) fn negate(v: &Value) -> ExprResult<Value> {
    let r = match v {
        Value::Integer(x) => Value::Integer(
            x.checked_neg()
                .ok_or_else(|| ExprError::runtime("Integer overflow in unary '-'"))?,
        ),
        Value::Long(x) => Value::Long(
            x.checked_neg()
                .ok_or_else(|| ExprError::runtime("Long overflow in unary '-'"))?,
        ),
        Value::Float(x) => Value::Float(-x),
        Value::Double(x) => Value::Double(-x),
        Value::Decimal(x) => Value::Decimal(-*x),
        other => {
            return Err(ExprError::type_error(format!(
                "unary '-' expects a numeric operand, got {}",
                other.value_type()
            )));
        }
    };
    Ok(r)
}

/// Absolute value, preserving the operand's kind.
pub(crate) fn abs(v: &Value) -> ExprResult<Value> {
    match v {
        Value::Integer(x) if *x < 0 => negate(v),
        Value::Long(x) if *x < 0 => negate(v),
        Value::Float(x) => Ok(Value::Float(x.abs())),
        Value::Double(x) => Ok(Value::Double(x.abs())),
        Value::Decimal(x) => Ok(Value::Decimal(x.abs())),
        Value::Integer(_) | Value::Long(_) => Ok(v.clone()),
        other => Err(ExprError::type_error(format!(
            "abs expects a numeric operand, got {}",
            other.value_type()
        ))),
    }
}

/// Convert a numeric value to `ty` (the promoted kind of some operation).
pub(crate) fn convert(v: &Value, ty: ValueType) -> ExprResult<Value> {
    if v.value_type() == ty {
        return Ok(v.clone());
    }
    let promoted = promote(v.value_type(), ty)?;
    if promoted != ty {
        return Err(ExprError::type_error(format!(
            "cannot convert {} to {ty}",
            v.value_type()
        )));
    }
    Ok(match ty {
        ValueType::Long => Value::Long(to_i64(v)),
        ValueType::Float => Value::Float(to_f32(v)),
        ValueType::Double => Value::Double(to_f64(v)),
        ValueType::Decimal => Value::Decimal(to_decimal(v)),
        _ => v.clone(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/value/ops.rs"]
mod tests;
