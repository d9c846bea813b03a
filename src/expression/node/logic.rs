use super::{BuildCtx, Node, NodeKind, NodeOps, Operands, Slot, fold};
use crate::expression::element::{Element, ElementType};
use crate::foundation::error::{ExprError, ExprResult};
use crate::runtime::variables::VariableStore;
use crate::value::{Value, ValueType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogicOp {
    And,
    Or,
}

impl LogicOp {
    /// Operand value that decides the result on its own.
    fn absorbing(self) -> bool {
        match self {
            Self::And => false,
            Self::Or => true,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

/// Short-circuiting `&&` / `||`.
#[derive(Debug, Clone)]
pub(crate) struct LogicNode {
    pub(crate) op: LogicOp,
    pub(crate) left: Box<Node>,
    pub(crate) right: Box<Node>,
    pub(crate) slot: Slot,
}

impl LogicNode {
    pub(crate) fn symbol(&self) -> &'static str {
        self.op.symbol()
    }

    pub(crate) fn kind(&self) -> NodeKind {
        match self.op {
            LogicOp::And => NodeKind::And,
            LogicOp::Or => NodeKind::Or,
        }
    }
}

/// Value of a precomputable operand, when it evaluates to a Boolean without error.
fn probe(node: &mut Node, vars: &mut dyn VariableStore) -> Option<bool> {
    if !node.is_precomputable() {
        return None;
    }
    match node.execute(vars) {
        Ok(Value::Boolean(b)) => Some(*b),
        _ => None,
    }
}

fn expect_boolean(op: &str, ty: Option<ValueType>) -> ExprResult<()> {
    match ty {
        Some(t) if t != ValueType::Boolean => Err(ExprError::type_error(format!(
            "operator '{op}' expects Boolean operands, got {t}"
        ))),
        _ => Ok(()),
    }
}

impl NodeOps for LogicNode {
    fn build(stack: &mut Operands, el: &Element<'_>, _ctx: &BuildCtx<'_>) -> ExprResult<Self> {
        let op = match el.ty {
            ElementType::And => LogicOp::And,
            _ => LogicOp::Or,
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
        let symbol = self.op.symbol();
        let absorbing = self.op.absorbing();
        let left = self.left.execute(vars)?.as_bool(symbol)?;
        let result = if left == absorbing {
            absorbing
        } else {
            self.right.execute(vars)?.as_bool(symbol)?
        };
        self.slot.store(Value::Boolean(result))
    }

    fn optimize(self, vars: &mut dyn VariableStore) -> ExprResult<Node> {
        let Self {
            op,
            mut left,
            mut right,
            slot,
        } = self;
        let absorbing = op.absorbing();
        let left_known = probe(&mut left, vars);
        let right_known = probe(&mut right, vars);

        if left_known == Some(absorbing) || right_known == Some(absorbing) {
            tracing::debug!(op = op.symbol(), "absorbing constant decides the result");
            return Ok(Node::literal(Value::Boolean(absorbing)));
        }

        if left_known.is_some() && right_known.is_some() {
            // Neither side is absorbing, so both are the identity value.
            return Ok(Node::literal(Value::Boolean(!absorbing)));
        }

        let fully_constant = left.is_precomputable() && right.is_precomputable();
        if fully_constant {
            // A constant operand that is not a Boolean: surface the failure now.
            return fold(
                Node::Logic(Self {
                    op,
                    left,
                    right,
                    slot,
                }),
                vars,
            );
        }

        if left_known == Some(!absorbing) || right_known == Some(!absorbing) {
            let other = if left_known.is_some() { *right } else { *left };
            let other = other.optimize(vars)?;
            if other.value_type() == Some(ValueType::Boolean) {
                tracing::debug!(op = op.symbol(), "identity constant elided");
                return Ok(other);
            }
            let constant = Box::new(Node::literal(Value::Boolean(!absorbing)));
            let (left, right) = if left_known.is_some() {
                (constant, Box::new(other))
            } else {
                (Box::new(other), constant)
            };
            return Ok(Node::Logic(Self {
                op,
                left,
                right,
                slot,
            }));
        }

        // Precomputable operands that failed to probe stay unoptimized: the failure must
        // only surface if execution actually reaches them.
        let left = if left.is_precomputable() {
            left
        } else {
            Box::new(left.optimize(vars)?)
        };
        let right = if right.is_precomputable() {
            right
        } else {
            Box::new(right.optimize(vars)?)
        };
        Ok(Node::Logic(Self {
            op,
            left,
            right,
            slot,
        }))
    }

    fn validate(&self) -> ExprResult<()> {
        self.left.validate()?;
        self.right.validate()?;
        expect_boolean(self.op.symbol(), self.left.value_type())?;
        expect_boolean(self.op.symbol(), self.right.value_type())
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

/// Boolean negation `!`.
#[derive(Debug, Clone)]
pub(crate) struct NotNode {
    pub(crate) operand: Box<Node>,
    pub(crate) slot: Slot,
}

impl NodeOps for NotNode {
    fn build(stack: &mut Operands, el: &Element<'_>, _ctx: &BuildCtx<'_>) -> ExprResult<Self> {
        Ok(Self {
            operand: Box::new(stack.pop(el)?),
            slot: Slot::typed(Some(ValueType::Boolean)),
        })
    }

    fn execute(&mut self, vars: &mut dyn VariableStore) -> ExprResult<&Value> {
        let v = self.operand.execute(vars)?.as_bool("!")?;
        self.slot.store(Value::Boolean(!v))
    }

    fn optimize(self, vars: &mut dyn VariableStore) -> ExprResult<Node> {
        let operand = Box::new(self.operand.optimize(vars)?);
        fold(
            Node::Not(Self {
                operand,
                slot: self.slot,
            }),
            vars,
        )
    }

    fn validate(&self) -> ExprResult<()> {
        self.operand.validate()?;
        expect_boolean("!", self.operand.value_type())
    }

    fn configure_no_alloc(&mut self) {
        self.operand.configure_no_alloc();
    }

    fn is_precomputable(&self) -> bool {
        self.operand.is_precomputable()
    }

    fn value_type(&self) -> Option<ValueType> {
        Some(ValueType::Boolean)
    }
}
