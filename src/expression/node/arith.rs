use super::{BuildCtx, Node, NodeOps, Operands, Slot, fold};
use crate::expression::element::{Element, ElementType};
use crate::foundation::error::ExprResult;
use crate::runtime::variables::VariableStore;
use crate::value::ops::{ArithOp, arith, promote};
use crate::value::{Value, ValueType};

/// Binary `+ - * / %`.
#[derive(Debug, Clone)]
pub(crate) struct ArithNode {
    pub(crate) op: ArithOp,
    pub(crate) left: Box<Node>,
    pub(crate) right: Box<Node>,
    pub(crate) slot: Slot,
}

pub(crate) fn arith_op(ty: ElementType) -> Option<ArithOp> {
    match ty {
        ElementType::Add | ElementType::AddAssign => Some(ArithOp::Add),
        ElementType::Subtract | ElementType::SubtractAssign => Some(ArithOp::Sub),
        ElementType::Multiply | ElementType::MultiplyAssign => Some(ArithOp::Mul),
        ElementType::Divide | ElementType::DivideAssign => Some(ArithOp::Div),
        ElementType::Modulo => Some(ArithOp::Mod),
        _ => None,
    }
}

/// Statically known result kind of combining `a` and `b` arithmetically.
pub(crate) fn static_type(a: Option<ValueType>, b: Option<ValueType>) -> Option<ValueType> {
    promote(a?, b?).ok()
}

/// Reject kind pairs known to fail at run time.
pub(crate) fn check_types(a: Option<ValueType>, b: Option<ValueType>) -> ExprResult<()> {
    match (a, b) {
        (Some(a), Some(b)) => promote(a, b).map(drop),
        _ => Ok(()),
    }
}

impl NodeOps for ArithNode {
    fn build(stack: &mut Operands, el: &Element<'_>, _ctx: &BuildCtx<'_>) -> ExprResult<Self> {
        let op = arith_op(el.ty).unwrap_or(ArithOp::Add);
        let (left, right) = stack.pop_pair(el)?;
        let ty = static_type(left.value_type(), right.value_type());
        Ok(Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
            slot: Slot::typed(ty),
        })
    }

    fn execute(&mut self, vars: &mut dyn VariableStore) -> ExprResult<&Value> {
        let left = self.left.execute(vars)?.clone();
        let right = self.right.execute(vars)?;
        let v = arith(self.op, &left, right)?;
        self.slot.store(v)
    }

    fn optimize(self, vars: &mut dyn VariableStore) -> ExprResult<Node> {
        let left = Box::new(self.left.optimize(vars)?);
        let right = Box::new(self.right.optimize(vars)?);
        fold(
            Node::Arith(Self {
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
        check_types(self.left.value_type(), self.right.value_type())
    }

    fn configure_no_alloc(&mut self) {
        self.left.configure_no_alloc();
        self.right.configure_no_alloc();
    }

    fn is_precomputable(&self) -> bool {
        self.left.is_precomputable() && self.right.is_precomputable()
    }

    fn value_type(&self) -> Option<ValueType> {
        self.slot.value_type()
    }
}
