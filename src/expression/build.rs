//! Postfix sequence → executable tree.

use super::element::Element;
use super::node::{BuildCtx, Node, Operands};
use crate::foundation::error::{ExprError, ExprResult};

/// Consume `postfix` left to right and return the single remaining root node.
pub(crate) fn build_tree(postfix: &[Element<'_>], ctx: &BuildCtx<'_>) -> ExprResult<Node> {
    let mut stack = Operands::default();
    for el in postfix {
        let node = Node::build(&mut stack, el, ctx)?;
        stack.push(node);
    }

    let leftover = stack.len();
    let mut nodes = stack.into_vec();
    match (nodes.pop(), leftover) {
        (Some(root), 1) => Ok(root),
        (None, _) => Err(ExprError::syntax_at(1, "", "empty expression")),
        (Some(_), n) => {
            let at = postfix.last().map_or(1, |el| el.token.line);
            Err(ExprError::syntax_at(
                at,
                "",
                format!("{n} operands left without an operator"),
            ))
        }
    }
}
