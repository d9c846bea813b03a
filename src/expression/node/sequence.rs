use super::{BuildCtx, Node, NodeOps, Operands, Slot};
use crate::expression::element::Element;
use crate::foundation::error::ExprResult;
use crate::runtime::variables::VariableStore;
use crate::value::{Value, ValueType};

/// `first; second`: runs both, yields the second.
#[derive(Debug, Clone)]
pub(crate) struct SequenceNode {
    pub(crate) first: Box<Node>,
    pub(crate) second: Box<Node>,
    pub(crate) slot: Slot,
}

impl NodeOps for SequenceNode {
    fn build(stack: &mut Operands, el: &Element<'_>, _ctx: &BuildCtx<'_>) -> ExprResult<Self> {
        let (first, second) = stack.pop_pair(el)?;
        let ty = second.value_type();
        Ok(Self {
            first: Box::new(first),
            second: Box::new(second),
            slot: Slot::typed(ty),
        })
    }

    fn execute(&mut self, vars: &mut dyn VariableStore) -> ExprResult<&Value> {
        self.first.execute(vars)?;
        let v = self.second.execute(vars)?.clone();
        self.slot.store(v)
    }

    fn optimize(self, vars: &mut dyn VariableStore) -> ExprResult<Node> {
        let first = self.first.optimize(vars)?;
        let second = self.second.optimize(vars)?;
        if first.is_precomputable() {
            tracing::debug!("side-effect free statement dropped");
            return Ok(second);
        }
        Ok(Node::Sequence(Self {
            first: Box::new(first),
            second: Box::new(second),
            slot: self.slot,
        }))
    }

    fn validate(&self) -> ExprResult<()> {
        self.first.validate()?;
        self.second.validate()
    }

    fn configure_no_alloc(&mut self) {
        self.first.configure_no_alloc();
        self.second.configure_no_alloc();
    }

    fn is_precomputable(&self) -> bool {
        self.first.is_precomputable() && self.second.is_precomputable()
    }

    fn value_type(&self) -> Option<ValueType> {
        self.slot.value_type()
    }
}
