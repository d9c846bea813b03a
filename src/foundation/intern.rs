//! Identifier interning.
//!
//! Variable names are resolved to small dense integers once, at build time, so that the
//! evaluator looks variables up by [`Ident`] instead of hashing strings on every frame.
//! A process-wide table backs [`intern`], [`resolve`] and [`reset`].

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

/// Interned identifier. Only meaningful for the interner that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ident(pub(crate) u32);

impl Ident {
    /// Dense index of this identifier (first interned string is `0`).
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Bidirectional string <-> [`Ident`] table.
#[derive(Debug, Default)]
pub struct Interner {
    ids_by_str: HashMap<Arc<str>, Ident>,
    strs_by_id: Vec<Arc<str>>,
}

impl Interner {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `s`, assigning the next free id on first sight.
    pub fn intern(&mut self, s: &str) -> Ident {
        if let Some(&id) = self.ids_by_str.get(s) {
            return id;
        }
        let next = u32::try_from(self.strs_by_id.len()).unwrap_or(u32::MAX);
        let id = Ident(next);
        let shared: Arc<str> = Arc::from(s);
        self.strs_by_id.push(Arc::clone(&shared));
        self.ids_by_str.insert(shared, id);
        id
    }

    /// Id previously assigned to `s`, without interning it.
    pub fn lookup(&self, s: &str) -> Option<Ident> {
        self.ids_by_str.get(s).copied()
    }

    /// String for `id`, if it was issued by this table since the last reset.
    pub fn resolve(&self, id: Ident) -> Option<Arc<str>> {
        self.strs_by_id.get(id.0 as usize).cloned()
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.strs_by_id.len()
    }

    /// True when nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.strs_by_id.is_empty()
    }

    /// Forget every string. All previously issued ids become dangling.
    pub fn reset(&mut self) {
        self.ids_by_str.clear();
        self.strs_by_id.clear();
    }
}

static GLOBAL: LazyLock<RwLock<Interner>> = LazyLock::new(|| RwLock::new(Interner::new()));

/// Intern `s` in the process-wide table.
pub fn intern(s: &str) -> Ident {
    {
        let table = GLOBAL.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(id) = table.lookup(s) {
            return id;
        }
    }
    GLOBAL
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .intern(s)
}

/// Resolve an id issued by [`intern`].
pub fn resolve(id: Ident) -> Option<Arc<str>> {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .resolve(id)
}

/// Id already assigned to `s` in the process-wide table, if any.
pub fn lookup(s: &str) -> Option<Ident> {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .lookup(s)
}

/// Clear the process-wide table.
///
/// Every [`Ident`] issued before the call is invalidated, including those captured inside
/// compiled expressions and [`Variables`](crate::Variables) stores. Only call this when no
/// such value remains live.
pub fn reset() {
    tracing::debug!("resetting process-wide identifier table");
    GLOBAL.write().unwrap_or_else(PoisonError::into_inner).reset();
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/intern.rs"]
mod tests;
