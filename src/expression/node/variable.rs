use super::{BuildCtx, Node, NodeOps, Operands, Slot, fold};
use crate::expression::element::Element;
use crate::foundation::error::{ExprError, ExprResult};
use crate::foundation::intern::{self, Ident};
use crate::runtime::variables::VariableStore;
use crate::value::{Value, ValueType};
use std::sync::Arc;

/// Read of a caller-supplied variable.
#[derive(Debug, Clone)]
pub(crate) struct VariableNode {
    pub(crate) id: Ident,
    pub(crate) name: Arc<str>,
    pub(crate) constant: bool,
    pub(crate) slot: Slot,
}

impl NodeOps for VariableNode {
    fn build(_stack: &mut Operands, el: &Element<'_>, ctx: &BuildCtx<'_>) -> ExprResult<Self> {
        let name = el.lexeme();
        let id = intern::intern(name);
        let bound = ctx.scope.get(id);
        let constant = ctx.config.is_constant(name);
        if constant && bound.is_none() {
            return Err(ExprError::config(format!(
                "constant '{name}' has no value in the compile scope"
            )));
        }
        // Constants (and every bound variable under strict mode) keep their scope kind.
        // Other variables take their kind from the first value read.
        let pinned = if constant || ctx.config.strict {
            bound.map(Value::value_type)
        } else {
            None
        };
        Ok(Self {
            id,
            name: Arc::from(name),
            constant,
            slot: Slot::typed(pinned),
        })
    }

    fn execute(&mut self, vars: &mut dyn VariableStore) -> ExprResult<&Value> {
        let value = vars
            .get(self.id)
            .ok_or_else(|| ExprError::runtime(format!("variable '{}' not found", self.name)))?
            .clone();
        self.slot.store(value)
    }

    fn optimize(self, vars: &mut dyn VariableStore) -> ExprResult<Node> {
        fold(Node::Variable(self), vars)
    }

    fn validate(&self) -> ExprResult<()> {
        Ok(())
    }

    fn configure_no_alloc(&mut self) {}

    fn is_precomputable(&self) -> bool {
        self.constant
    }

    fn value_type(&self) -> Option<ValueType> {
        self.slot.value_type()
    }
}
