use super::{BuildCtx, Node, NodeOps, Operands, Slot, fold};
use crate::expression::element::{Element, ElementType};
use crate::foundation::error::{ExprError, ExprResult};
use crate::runtime::variables::VariableStore;
use crate::value::ops::{CompareOp, compare, promote};
use crate::value::{Value, ValueType};

/// `== != < > <= >=`. Float and Double equality is approximate.
#[derive(Debug, Clone)]
pub(crate) struct CompareNode {
    pub(crate) op: CompareOp,
    pub(crate) left: Box<Node>,
    pub(crate) right: Box<Node>,
    pub(crate) slot: Slot,
}

fn check_types(op: CompareOp, a: ValueType, b: ValueType) -> ExprResult<()> {
    let equality = matches!(op, CompareOp::Eq | CompareOp::Ne);
    let ok = match (a, b) {
        _ if a.is_numeric() && b.is_numeric() => return promote(a, b).map(drop),
        (ValueType::String, ValueType::String) => true,
        (ValueType::Boolean, ValueType::Boolean) => equality,
        (ValueType::Null, _) | (_, ValueType::Null) => equality,
        _ => false,
    };
    if ok {
        Ok(())
    } else {
        Err(ExprError::type_error(format!(
            "operator '{}' cannot compare {a} with {b}",
            op.symbol()
        )))
    }
}

impl NodeOps for CompareNode {
    fn build(stack: &mut Operands, el: &Element<'_>, _ctx: &BuildCtx<'_>) -> ExprResult<Self> {
        let op = match el.ty {
            ElementType::Equal => CompareOp::Eq,
            ElementType::NotEqual => CompareOp::Ne,
            ElementType::Less => CompareOp::Lt,
            ElementType::Greater => CompareOp::Gt,
            ElementType::LessEqual => CompareOp::Le,
            _ => CompareOp::Ge,
        };
        let (left, right) = stack.pop_pair(el)?;
        Ok(Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
            slot: Slot::typed(Some(ValueType::Boolean)),
        })
    }

    fn execute(&mut self, vars: &mut dyn VariableStore) -> ExprResult<&Value> {
        let left = self.left.execute(vars)?.clone();
        let right = self.right.execute(vars)?;
        let v = compare(self.op, &left, right)?;
        self.slot.store(Value::Boolean(v))
    }

    fn optimize(self, vars: &mut dyn VariableStore) -> ExprResult<Node> {
        let left = Box::new(self.left.optimize(vars)?);
        let right = Box::new(self.right.optimize(vars)?);
        fold(
            Node::Compare(Self {
                op: self.op,
                left,
                right,
                slot: self.slot,
            }),
            vars,
        )
    }

    fn validate(&self) -> ExprResult<()> {
        self.left.validate()?;
        self.right.validate()?;
        match (self.left.value_type(), self.right.value_type()) {
            (Some(a), Some(b)) => check_types(self.op, a, b),
            _ => Ok(()),
        }
    }

    fn configure_no_alloc(&mut self) {
        self.left.configure_no_alloc();
        self.right.configure_no_alloc();
    }

    fn is_precomputable(&self) -> bool {
        self.left.is_precomputable() && self.right.is_precomputable()
    }

    fn value_type(&self) -> Option<ValueType> {
        Some(ValueType::Boolean)
    }
}
