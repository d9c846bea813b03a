use super::{BuildCtx, Node, NodeKind, NodeOps, Operands, Slot, fold};
use crate::expression::element::{Element, ElementType};
use crate::foundation::error::{ExprError, ExprResult};
use crate::runtime::variables::VariableStore;
use crate::value::ops::negate;
use crate::value::{Value, ValueType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

/// Unary `+` / `-` over any numeric kind.
#[derive(Debug, Clone)]
pub(crate) struct SignNode {
    pub(crate) sign: Sign,
    pub(crate) operand: Box<Node>,
    pub(crate) slot: Slot,
}

impl SignNode {
    pub(crate) fn symbol(&self) -> &'static str {
        match self.sign {
            Sign::Positive => "+",
            Sign::Negative => "-",
        }
    }

    pub(crate) fn kind(&self) -> NodeKind {
        match self.sign {
            Sign::Positive => NodeKind::Positive,
            Sign::Negative => NodeKind::Negative,
        }
    }

    fn check_operand(&self, ty: Option<ValueType>) -> ExprResult<()> {
        match ty {
            Some(t) if !t.is_numeric() => Err(ExprError::type_error(format!(
                "unary '{}' expects a numeric operand, got {t}",
                self.symbol()
            ))),
            _ => Ok(()),
        }
    }
}

impl NodeOps for SignNode {
    fn build(stack: &mut Operands, el: &Element<'_>, _ctx: &BuildCtx<'_>) -> ExprResult<Self> {
        let sign = match el.ty {
            ElementType::Positive => Sign::Positive,
            _ => Sign::Negative,
        };
        let operand = stack.pop(el)?;
        let ty = operand.value_type().filter(|t| t.is_numeric());
        Ok(Self {
            sign,
            operand: Box::new(operand),
            slot: Slot::typed(ty),
        })
    }

    fn execute(&mut self, vars: &mut dyn VariableStore) -> ExprResult<&Value> {
        let v = self.operand.execute(vars)?;
        let result = match self.sign {
            Sign::Negative => negate(v)?,
            Sign::Positive if v.is_numeric() => v.clone(),
            Sign::Positive => {
                return Err(ExprError::type_error(format!(
                    "unary '+' expects a numeric operand, got {}",
                    v.value_type()
                )));
            }
        };
        self.slot.store(result)
    }

    fn optimize(self, vars: &mut dyn VariableStore) -> ExprResult<Node> {
        let Self {
            sign,
            operand,
            slot,
        } = self;
        let operand = operand.optimize(vars)?;
        if operand.is_precomputable() {
            // A non-numeric constant operand fails here, at compile time.
            return fold(
                Node::Sign(Self {
                    sign,
                    operand: Box::new(operand),
                    slot,
                }),
                vars,
            );
        }
        // Dropping `+` is only safe when the numeric check cannot fail at run time.
        if sign == Sign::Positive && operand.is_numeric() {
            tracing::debug!("unary '+' elided");
            return Ok(operand);
        }
        Ok(Node::Sign(Self {
            sign,
            operand: Box::new(operand),
            slot,
        }))
    }

    fn validate(&self) -> ExprResult<()> {
        self.operand.validate()?;
        self.check_operand(self.operand.value_type())
    }

    fn configure_no_alloc(&mut self) {
        self.operand.configure_no_alloc();
    }

    fn is_precomputable(&self) -> bool {
        self.operand.is_precomputable()
    }

    fn value_type(&self) -> Option<ValueType> {
        self.slot.value_type()
    }
}
