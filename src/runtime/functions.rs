use crate::foundation::error::{ExprError, ExprResult};
use crate::value::Value;
use crate::value::ops::{self, CompareOp};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Native callable invoked by function-call nodes.
pub type NativeFn = Arc<dyn Fn(&[Value]) -> ExprResult<Value> + Send + Sync>;

/// Number of arguments an overload accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly `n` arguments.
    Exact(usize),
    /// `n` or more arguments.
    AtLeast(usize),
}

impl Arity {
    /// True when `argc` arguments satisfy this arity.
    pub fn accepts(self, argc: usize) -> bool {
        match self {
            Self::Exact(n) => argc == n,
            Self::AtLeast(n) => argc >= n,
        }
    }
}

/// One overload of a named function.
#[derive(Clone)]
pub struct FunctionDef {
    /// Accepted argument count.
    pub arity: Arity,
    /// Pure functions with constant arguments are folded at compile time.
    pub pure: bool,
    /// Implementation.
    pub call: NativeFn,
}

impl fmt::Debug for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionDef")
            .field("arity", &self.arity)
            .field("pure", &self.pure)
            .finish_non_exhaustive()
    }
}

/// Named native functions, resolved by name and argument count at build time.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    overloads: HashMap<String, Vec<FunctionDef>>,
}

impl FunctionRegistry {
    /// Registry with no functions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the numeric builtins (`abs`, `min`, `max`, `clamp`, `sin`,
    /// `cos`, `sqrt`, `pow`, `lerp`).
    pub fn with_builtins() -> Self {
        let mut r = Self::new();
        r.register_pure("abs", Arity::Exact(1), |a| ops::abs(&a[0]));
        r.register_pure("min", Arity::AtLeast(1), |a| fold_extreme(a, CompareOp::Lt));
        r.register_pure("max", Arity::AtLeast(1), |a| fold_extreme(a, CompareOp::Gt));
        r.register_pure("clamp", Arity::Exact(3), |a| {
            let lo = fold_extreme(&a[..2], CompareOp::Gt)?;
            fold_extreme(&[lo, a[2].clone()], CompareOp::Lt)
        });
        r.register_pure("sin", Arity::Exact(1), |a| Ok(Value::Double(a[0].as_f64()?.sin())));
        r.register_pure("cos", Arity::Exact(1), |a| Ok(Value::Double(a[0].as_f64()?.cos())));
        r.register_pure("sqrt", Arity::Exact(1), |a| Ok(Value::Double(a[0].as_f64()?.sqrt())));
        r.register_pure("pow", Arity::Exact(2), |a| {
            Ok(Value::Double(a[0].as_f64()?.powf(a[1].as_f64()?)))
        });
        r.register_pure("lerp", Arity::Exact(3), |a| {
            let (x, y, t) = (a[0].as_f64()?, a[1].as_f64()?, a[2].as_f64()?);
            Ok(Value::Double(x + (y - x) * t))
        });
        r
    }

    /// Add an overload.
    pub fn register(&mut self, name: impl Into<String>, def: FunctionDef) {
        self.overloads.entry(name.into()).or_default().push(def);
    }

    /// Add a pure overload from a closure.
    pub fn register_pure<F>(&mut self, name: &str, arity: Arity, f: F)
    where
        F: Fn(&[Value]) -> ExprResult<Value> + Send + Sync + 'static,
    {
        self.register(
            name,
            FunctionDef {
                arity,
                pure: true,
                call: Arc::new(f),
            },
        );
    }

    /// Add an impure overload (never folded at compile time).
    pub fn register_impure<F>(&mut self, name: &str, arity: Arity, f: F)
    where
        F: Fn(&[Value]) -> ExprResult<Value> + Send + Sync + 'static,
    {
        self.register(
            name,
            FunctionDef {
                arity,
                pure: false,
                call: Arc::new(f),
            },
        );
    }

    /// First overload of `name` accepting `argc` arguments. Exact arities win over
    /// variadic ones.
    pub fn resolve(&self, name: &str, argc: usize) -> ExprResult<&FunctionDef> {
        let candidates = self
            .overloads
            .get(name)
            .ok_or_else(|| ExprError::type_error(format!("unknown function '{name}'")))?;
        candidates
            .iter()
            .find(|d| d.arity == Arity::Exact(argc))
            .or_else(|| candidates.iter().find(|d| d.arity.accepts(argc)))
            .ok_or_else(|| {
                ExprError::type_error(format!(
                    "no overload of '{name}' takes {argc} argument(s)"
                ))
            })
    }

    /// True when a function called `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.overloads.contains_key(name)
    }
}

/// Smallest (`Lt`) or largest (`Gt`) argument, converted to the promoted kind of all
/// arguments.
fn fold_extreme(args: &[Value], keep_if: CompareOp) -> ExprResult<Value> {
    let mut ty = args[0].value_type();
    for a in &args[1..] {
        ty = ops::promote(ty, a.value_type())?;
    }
    if !ty.is_numeric() {
        return Err(ExprError::type_error(format!("expected numeric, got {ty}")));
    }
    let mut best = ops::convert(&args[0], ty)?;
    for a in &args[1..] {
        let a = ops::convert(a, ty)?;
        if ops::compare(keep_if, &a, &best)? {
            best = a;
        }
    }
    Ok(best)
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/functions.rs"]
mod tests;
