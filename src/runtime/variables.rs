use crate::foundation::error::{ExprError, ExprResult};
use crate::foundation::intern::{self, Ident};
use crate::value::Value;
use std::collections::HashMap;

/// Variable container the evaluator reads from and assignments write to.
pub trait VariableStore {
    /// Current value bound to `id`.
    fn get(&self, id: Ident) -> Option<&Value>;

    /// Bind `value` to `id`.
    fn set(&mut self, id: Ident, value: Value) -> ExprResult<()>;
}

/// `HashMap`-backed [`VariableStore`] keyed by process-wide [`Ident`]s.
///
/// Re-binding an existing name does not allocate, so a store that is populated once and
/// then updated per frame is suitable for the no-allocation execution mode.
#[derive(Debug, Clone, Default)]
pub struct Variables {
    values: HashMap<Ident, Value>,
}

impl Variables {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` (interning it) to `value`.
    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        self.values.insert(intern::intern(name), value.into());
    }

    /// Value bound to `name`, if any.
    pub fn get_named(&self, name: &str) -> Option<&Value> {
        intern::lookup(name).and_then(|id| self.values.get(&id))
    }

    /// Remove the binding for `name`.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        intern::lookup(name).and_then(|id| self.values.remove(&id))
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl VariableStore for Variables {
    fn get(&self, id: Ident) -> Option<&Value> {
        self.values.get(&id)
    }

    fn set(&mut self, id: Ident, value: Value) -> ExprResult<()> {
        match self.values.get_mut(&id) {
            Some(slot) => *slot = value,
            None => {
                self.values.insert(id, value);
            }
        }
        Ok(())
    }
}

/// Read-only view used while folding constants at compile time.
pub(crate) struct ReadOnly<'a>(pub(crate) &'a dyn VariableStore);

impl VariableStore for ReadOnly<'_> {
    fn get(&self, id: Ident) -> Option<&Value> {
        self.0.get(id)
    }

    fn set(&mut self, id: Ident, _value: Value) -> ExprResult<()> {
        let name = intern::resolve(id);
        Err(ExprError::runtime(format!(
            "cannot assign '{}' while compiling",
            name.as_deref().unwrap_or("?")
        )))
    }
}

/// Store with no bindings.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyScope;

impl VariableStore for EmptyScope {
    fn get(&self, _id: Ident) -> Option<&Value> {
        None
    }

    fn set(&mut self, _id: Ident, _value: Value) -> ExprResult<()> {
        Err(ExprError::runtime("the empty scope cannot hold variables"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/variables.rs"]
mod tests;
