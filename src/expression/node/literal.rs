use super::{BuildCtx, Node, NodeOps, Operands};
use crate::expression::element::{Element, ElementType};
use crate::expression::lexer::{Token, unescape};
use crate::foundation::error::{ExprError, ExprResult};
use crate::runtime::variables::VariableStore;
use crate::value::{Value, ValueType};
use rust_decimal::Decimal;
use std::num::IntErrorKind;
use std::str::FromStr;
use std::sync::Arc;

/// Constant value, parsed once at build time.
#[derive(Debug, Clone)]
pub(crate) struct LiteralNode {
    value: Value,
}

impl LiteralNode {
    pub(crate) fn new(value: Value) -> Self {
        Self { value }
    }

    pub(crate) fn value(&self) -> &Value {
        &self.value
    }
}

impl NodeOps for LiteralNode {
    fn build(_stack: &mut Operands, el: &Element<'_>, ctx: &BuildCtx<'_>) -> ExprResult<Self> {
        let token = &el.token;
        let value = match el.ty {
            ElementType::IntegerLiteral => parse_integer(token, ctx.config.integer_type())?,
            ElementType::FloatLiteral => parse_float(token, ctx.config.float_type())?,
            ElementType::StringLiteral => Value::String(Arc::from(unescape(token)?)),
            ElementType::BooleanLiteral => Value::Boolean(token.lexeme == "true"),
            ElementType::NullLiteral => Value::Null,
            other => {
                return Err(ExprError::syntax(
                    token,
                    format!("{other:?} is not a literal"),
                ));
            }
        };
        Ok(Self { value })
    }

    fn execute(&mut self, _vars: &mut dyn VariableStore) -> ExprResult<&Value> {
        Ok(&self.value)
    }

    fn optimize(self, _vars: &mut dyn VariableStore) -> ExprResult<Node> {
        Ok(Node::Literal(self))
    }

    fn validate(&self) -> ExprResult<()> {
        Ok(())
    }

    fn configure_no_alloc(&mut self) {}

    fn is_precomputable(&self) -> bool {
        true
    }

    fn value_type(&self) -> Option<ValueType> {
        Some(self.value.value_type())
    }
}

fn parse_integer(token: &Token<'_>, ty: ValueType) -> ExprResult<Value> {
    let text = token.lexeme;
    let fail = |kind: &IntErrorKind, width: &str| match kind {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ExprError::overflow(token, format!("does not fit in a {width} integer"))
        }
        _ => ExprError::syntax(token, "malformed integer literal"),
    };
    match ty {
        ValueType::Long => i64::from_str(text)
            .map(Value::Long)
            .map_err(|e| fail(e.kind(), "64-bit")),
        _ => i32::from_str(text)
            .map(Value::Integer)
            .map_err(|e| fail(e.kind(), "32-bit")),
    }
}

fn parse_float(token: &Token<'_>, ty: ValueType) -> ExprResult<Value> {
    let text = token.lexeme;
    let malformed = || ExprError::syntax(token, "malformed floating point literal");
    match ty {
        ValueType::Float => {
            let v = f32::from_str(text).map_err(|_| malformed())?;
            if v.is_infinite() {
                return Err(ExprError::overflow(token, "does not fit in a 32-bit float"));
            }
            Ok(Value::Float(v))
        }
        ValueType::Decimal => parse_decimal(token).map(Value::Decimal),
        _ => {
            let v = f64::from_str(text).map_err(|_| malformed())?;
            if v.is_infinite() {
                return Err(ExprError::overflow(token, "does not fit in a 64-bit float"));
            }
            Ok(Value::Double(v))
        }
    }
}

fn parse_decimal(token: &Token<'_>) -> ExprResult<Decimal> {
    let text = token.lexeme;
    let owned;
    let text = if text.starts_with('.') {
        owned = format!("0{text}");
        owned.as_str()
    } else {
        text
    };
    let parsed = if text.contains(['e', 'E']) {
        Decimal::from_scientific(text)
    } else {
        Decimal::from_str(text)
    };
    parsed.map_err(|e| match e {
        rust_decimal::Error::ExceedsMaximumPossibleValue
        | rust_decimal::Error::LessThanMinimumPossibleValue
        | rust_decimal::Error::ScaleExceedsMaximumPrecision(_) => {
            ExprError::overflow(token, "does not fit in a decimal")
        }
        other => ExprError::syntax(token, format!("malformed decimal literal: {other}")),
    })
}
