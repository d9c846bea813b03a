//! Executable tree.
//!
//! [`Node`] is a closed set of node kinds. Every kind implements [`NodeOps`], the shared
//! build / execute / optimize / validate / configure-no-alloc contract, and `Node`
//! forwards to it with a plain `match`.
//!
//! Each node owns its children and keeps the result of its last successful execution in
//! a [`Slot`]. The slot's kind is fixed the first time it becomes known (statically at
//! build time where possible) and an execution producing another kind is a type error.

mod arith;
mod assign;
mod call;
mod compare;
mod literal;
mod logic;
mod sequence;
mod sign;
mod variable;

pub(crate) use arith::ArithNode;
pub(crate) use assign::AssignNode;
pub(crate) use call::CallNode;
pub(crate) use compare::CompareNode;
pub(crate) use literal::LiteralNode;
pub(crate) use logic::{LogicNode, NotNode};
pub(crate) use sequence::SequenceNode;
pub(crate) use sign::SignNode;
pub(crate) use variable::VariableNode;

use crate::config::EngineConfig;
use crate::expression::element::{Element, ElementType};
use crate::foundation::error::{ExprError, ExprResult};
use crate::runtime::functions::FunctionRegistry;
use crate::runtime::variables::VariableStore;
use crate::value::{Value, ValueType};
use std::fmt;

/// Everything a node may consult while being built.
pub(crate) struct BuildCtx<'c> {
    pub(crate) config: &'c EngineConfig,
    pub(crate) functions: &'c FunctionRegistry,
    pub(crate) scope: &'c dyn VariableStore,
}

/// Operand stack of the AST builder.
#[derive(Default)]
pub(crate) struct Operands {
    nodes: Vec<Node>,
}

impl Operands {
    pub(crate) fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Pop the most recently pushed operand of `el`.
    pub(crate) fn pop(&mut self, el: &Element<'_>) -> ExprResult<Node> {
        self.nodes.pop().ok_or_else(|| {
            ExprError::syntax(
                &el.token,
                format!("missing operand for '{}'", el.lexeme()),
            )
        })
    }

    /// Pop two operands, returning them in source order (left, right).
    pub(crate) fn pop_pair(&mut self, el: &Element<'_>) -> ExprResult<(Node, Node)> {
        let right = self.pop(el)?;
        let left = self.pop(el)?;
        Ok((left, right))
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn into_vec(self) -> Vec<Node> {
        self.nodes
    }
}

/// Last computed value of a node plus its fixed kind.
#[derive(Debug, Clone, Default)]
pub(crate) struct Slot {
    value: Value,
    ty: Option<ValueType>,
}

impl Slot {
    pub(crate) fn typed(ty: Option<ValueType>) -> Self {
        Self {
            value: Value::Null,
            ty,
        }
    }

    /// Fail when a value of kind `produced` could not be stored.
    pub(crate) fn admit(&self, produced: ValueType) -> ExprResult<()> {
        match self.ty {
            Some(fixed) if fixed != produced => Err(ExprError::type_error(format!(
                "expression of kind {fixed} produced a {produced} value"
            ))),
            _ => Ok(()),
        }
    }

    /// Commit a fully computed value.
    pub(crate) fn store(&mut self, value: Value) -> ExprResult<&Value> {
        let produced = value.value_type();
        self.admit(produced)?;
        self.ty = Some(produced);
        self.value = value;
        Ok(&self.value)
    }

    pub(crate) fn value(&self) -> &Value {
        &self.value
    }

    pub(crate) fn value_type(&self) -> Option<ValueType> {
        self.ty
    }
}

/// Capability interface shared by all node kinds.
pub(crate) trait NodeOps: Sized {
    /// Pop operands off `stack` and construct the node for `el`.
    fn build(stack: &mut Operands, el: &Element<'_>, ctx: &BuildCtx<'_>) -> ExprResult<Self>;

    /// Evaluate against `vars`, returning the freshly stored value.
    fn execute(&mut self, vars: &mut dyn VariableStore) -> ExprResult<&Value>;

    /// Rewrite into an equivalent, cheaper node. `vars` is the compile-time scope.
    fn optimize(self, vars: &mut dyn VariableStore) -> ExprResult<Node>;

    /// Reject statically known kind conflicts.
    fn validate(&self) -> ExprResult<()>;

    /// Pre-size buffers so that later executions do not allocate.
    fn configure_no_alloc(&mut self);

    /// True when the value does not depend on runtime bindings.
    fn is_precomputable(&self) -> bool;

    /// Kind of the value this node produces, when known.
    fn value_type(&self) -> Option<ValueType>;
}

/// Coarse node kind, for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Constant value.
    Literal,
    /// Variable reference.
    Variable,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `!`
    Not,
    /// Unary `+`.
    Positive,
    /// Unary `-`.
    Negative,
    /// `+ - * / %`
    Arithmetic,
    /// `== != < > <= >=`
    Comparison,
    /// `= += -= *= /=`
    Assignment,
    /// Native function call.
    Call,
    /// `;`
    Sequence,
}

#[derive(Debug, Clone)]
pub(crate) enum Node {
    Literal(LiteralNode),
    Variable(VariableNode),
    Logic(LogicNode),
    Not(NotNode),
    Sign(SignNode),
    Arith(ArithNode),
    Compare(CompareNode),
    Assign(AssignNode),
    Call(CallNode),
    Sequence(SequenceNode),
}

macro_rules! dispatch {
    ($node:expr, $n:ident => $body:expr) => {
        match $node {
            Node::Literal($n) => $body,
            Node::Variable($n) => $body,
            Node::Logic($n) => $body,
            Node::Not($n) => $body,
            Node::Sign($n) => $body,
            Node::Arith($n) => $body,
            Node::Compare($n) => $body,
            Node::Assign($n) => $body,
            Node::Call($n) => $body,
            Node::Sequence($n) => $body,
        }
    };
}

impl Node {
    /// Build the node for one postfix element.
    pub(crate) fn build(
        stack: &mut Operands,
        el: &Element<'_>,
        ctx: &BuildCtx<'_>,
    ) -> ExprResult<Self> {
        use ElementType as E;
        let node = match el.ty {
            E::IntegerLiteral
            | E::FloatLiteral
            | E::StringLiteral
            | E::BooleanLiteral
            | E::NullLiteral => Self::Literal(LiteralNode::build(stack, el, ctx)?),
            E::Variable => Self::Variable(VariableNode::build(stack, el, ctx)?),
            E::And | E::Or => Self::Logic(LogicNode::build(stack, el, ctx)?),
            E::Not => Self::Not(NotNode::build(stack, el, ctx)?),
            E::Positive | E::Negative => Self::Sign(SignNode::build(stack, el, ctx)?),
            E::Multiply | E::Divide | E::Modulo | E::Add | E::Subtract => {
                Self::Arith(ArithNode::build(stack, el, ctx)?)
            }
            E::Equal | E::NotEqual | E::Less | E::Greater | E::LessEqual | E::GreaterEqual => {
                Self::Compare(CompareNode::build(stack, el, ctx)?)
            }
            E::Assign | E::AddAssign | E::SubtractAssign | E::MultiplyAssign | E::DivideAssign => {
                Self::Assign(AssignNode::build(stack, el, ctx)?)
            }
            E::Function => Self::Call(CallNode::build(stack, el, ctx)?),
            E::Semicolon => Self::Sequence(SequenceNode::build(stack, el, ctx)?),
            E::Comma | E::LeftParenthesis | E::FunctionStartParenthesis | E::RightParenthesis => {
                return Err(ExprError::syntax(
                    &el.token,
                    format!("unexpected '{}'", el.lexeme()),
                ));
            }
        };
        Ok(node)
    }

    pub(crate) fn literal(value: Value) -> Self {
        Self::Literal(LiteralNode::new(value))
    }

    pub(crate) fn execute(&mut self, vars: &mut dyn VariableStore) -> ExprResult<&Value> {
        dispatch!(self, n => n.execute(vars))
    }

    pub(crate) fn optimize(self, vars: &mut dyn VariableStore) -> ExprResult<Node> {
        dispatch!(self, n => n.optimize(vars))
    }

    pub(crate) fn validate(&self) -> ExprResult<()> {
        dispatch!(self, n => n.validate())
    }

    pub(crate) fn configure_no_alloc(&mut self) {
        dispatch!(self, n => n.configure_no_alloc())
    }

    pub(crate) fn is_precomputable(&self) -> bool {
        dispatch!(self, n => n.is_precomputable())
    }

    pub(crate) fn value_type(&self) -> Option<ValueType> {
        dispatch!(self, n => n.value_type())
    }

    pub(crate) fn is_numeric(&self) -> bool {
        self.value_type().is_some_and(ValueType::is_numeric)
    }

    /// Value stored by the last successful execution (literals: their constant).
    pub(crate) fn last_value(&self) -> &Value {
        match self {
            Self::Literal(n) => n.value(),
            Self::Variable(n) => n.slot.value(),
            Self::Logic(n) => n.slot.value(),
            Self::Not(n) => n.slot.value(),
            Self::Sign(n) => n.slot.value(),
            Self::Arith(n) => n.slot.value(),
            Self::Compare(n) => n.slot.value(),
            Self::Assign(n) => n.slot.value(),
            Self::Call(n) => n.slot.value(),
            Self::Sequence(n) => n.slot.value(),
        }
    }

    pub(crate) fn kind(&self) -> NodeKind {
        match self {
            Self::Literal(_) => NodeKind::Literal,
            Self::Variable(_) => NodeKind::Variable,
            Self::Logic(n) => n.kind(),
            Self::Not(_) => NodeKind::Not,
            Self::Sign(n) => n.kind(),
            Self::Arith(_) => NodeKind::Arithmetic,
            Self::Compare(_) => NodeKind::Comparison,
            Self::Assign(_) => NodeKind::Assignment,
            Self::Call(_) => NodeKind::Call,
            Self::Sequence(_) => NodeKind::Sequence,
        }
    }
}

/// Execute a precomputable node and replace it by a literal holding the result.
pub(crate) fn fold(mut node: Node, vars: &mut dyn VariableStore) -> ExprResult<Node> {
    if !node.is_precomputable() || matches!(node, Node::Literal(_)) {
        return Ok(node);
    }
    let value = node.execute(vars)?.clone();
    tracing::debug!(from = %node, to = %value, "folded constant subtree");
    Ok(Node::literal(value))
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(n) => match n.value() {
                Value::String(s) => write!(f, "{s:?}"),
                v => write!(f, "{v}"),
            },
            Self::Variable(n) => f.write_str(&n.name),
            Self::Logic(n) => write!(f, "({} {} {})", n.symbol(), n.left, n.right),
            Self::Not(n) => write!(f, "(! {})", n.operand),
            Self::Sign(n) => write!(f, "({} {})", n.symbol(), n.operand),
            Self::Arith(n) => write!(f, "({} {} {})", n.op.symbol(), n.left, n.right),
            Self::Compare(n) => write!(f, "({} {} {})", n.op.symbol(), n.left, n.right),
            Self::Assign(n) => write!(f, "({} {} {})", n.symbol(), n.name, n.value),
            Self::Call(n) => {
                write!(f, "({}", n.name)?;
                for a in &n.args {
                    write!(f, " {a}")?;
                }
                f.write_str(")")
            }
            Self::Sequence(n) => write!(f, "(; {} {})", n.first, n.second),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/expression/node.rs"]
mod tests;
