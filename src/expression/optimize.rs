//! Optimizer driver.

use super::node::Node;
use crate::foundation::error::ExprResult;
use crate::runtime::variables::{ReadOnly, VariableStore};

/// Rewrite `root` bottom-up against the compile-time `scope`.
///
/// Folding executes precomputable subtrees, so `scope` must bind every configured
/// constant. The scope is read-only for the duration.
pub(crate) fn optimize_tree(root: Node, scope: &dyn VariableStore) -> ExprResult<Node> {
    let mut view = ReadOnly(scope);
    let before = root.kind();
    let optimized = root.optimize(&mut view)?;
    tracing::debug!(?before, after = ?optimized.kind(), "optimized expression tree");
    Ok(optimized)
}
