use super::arith::{arith_op, check_types, static_type};
use super::{BuildCtx, Node, NodeOps, Operands, Slot};
use crate::expression::element::Element;
use crate::foundation::error::{ExprError, ExprResult};
use crate::foundation::intern::Ident;
use crate::runtime::variables::VariableStore;
use crate::value::ops::{ArithOp, arith};
use crate::value::{Value, ValueType};
use std::sync::Arc;

/// `= += -= *= /=`: writes through to the variable store and yields the stored value.
#[derive(Debug, Clone)]
pub(crate) struct AssignNode {
    /// `None` for plain `=`.
    pub(crate) op: Option<ArithOp>,
    pub(crate) target: Ident,
    pub(crate) name: Arc<str>,
    target_type: Option<ValueType>,
    pub(crate) value: Box<Node>,
    pub(crate) slot: Slot,
}

impl AssignNode {
    pub(crate) fn symbol(&self) -> &'static str {
        match self.op {
            None => "=",
            Some(ArithOp::Add) => "+=",
            Some(ArithOp::Sub) => "-=",
            Some(ArithOp::Mul) => "*=",
            Some(ArithOp::Div) => "/=",
            Some(ArithOp::Mod) => "%=",
        }
    }

    /// A target with a pinned kind (strict mode) only accepts values of that kind.
    fn check_target(&self, produced: ValueType) -> ExprResult<()> {
        match self.target_type {
            Some(fixed) if fixed != produced => Err(ExprError::type_error(format!(
                "cannot assign a {produced} value to '{}' of kind {fixed}",
                self.name
            ))),
            _ => Ok(()),
        }
    }
}

impl NodeOps for AssignNode {
    fn build(stack: &mut Operands, el: &Element<'_>, _ctx: &BuildCtx<'_>) -> ExprResult<Self> {
        let (target, value) = stack.pop_pair(el)?;
        let Node::Variable(target) = target else {
            return Err(ExprError::syntax(
                &el.token,
                format!("left side of '{}' must be a variable", el.lexeme()),
            ));
        };
        if target.constant {
            return Err(ExprError::syntax(
                &el.token,
                format!("cannot assign to compile-time constant '{}'", target.name),
            ));
        }
        let op = arith_op(el.ty);
        let target_type = target.slot.value_type();
        let ty = match op {
            None => value.value_type(),
            Some(_) => static_type(target_type, value.value_type()),
        };
        Ok(Self {
            op,
            target: target.id,
            name: target.name,
            target_type,
            value: Box::new(value),
            slot: Slot::typed(ty),
        })
    }

    fn execute(&mut self, vars: &mut dyn VariableStore) -> ExprResult<&Value> {
        let rhs = self.value.execute(vars)?;
        let next = match self.op {
            None => rhs.clone(),
            Some(op) => {
                let current = vars.get(self.target).ok_or_else(|| {
                    ExprError::runtime(format!("variable '{}' not found", self.name))
                })?;
                arith(op, current, rhs)?
            }
        };
        let produced = next.value_type();
        self.slot.admit(produced)?;
        self.check_target(produced)?;
        vars.set(self.target, next.clone())?;
        self.slot.store(next)
    }

    fn optimize(self, vars: &mut dyn VariableStore) -> ExprResult<Node> {
        let value = Box::new(self.value.optimize(vars)?);
        Ok(Node::Assign(Self { value, ..self }))
    }

    fn validate(&self) -> ExprResult<()> {
        self.value.validate()?;
        let rhs = self.value.value_type();
        let produced = match self.op {
            None => rhs,
            Some(_) => {
                check_types(self.target_type, rhs)?;
                static_type(self.target_type, rhs)
            }
        };
        produced.map_or(Ok(()), |p| self.check_target(p))
    }

    fn configure_no_alloc(&mut self) {
        self.value.configure_no_alloc();
    }

    fn is_precomputable(&self) -> bool {
        false
    }

    fn value_type(&self) -> Option<ValueType> {
        self.slot.value_type()
    }
}
