//! `exprtree` is an embeddable expression engine.
//!
//! Short textual expressions (arithmetic, boolean logic, comparisons, assignments and
//! calls to native functions) are compiled once into an executable tree and then
//! evaluated repeatedly against changing variable bindings, for example once per
//! simulation frame.
//!
//! - Compile source text with a [`Compiler`] into an [`Expression`]
//! - Bind variables in a [`Variables`] store (or any [`VariableStore`])
//! - Call [`Expression::execute`] as often as needed
//!
//! ```
//! use exprtree::{Compiler, Value, Variables};
//!
//! let mut vars = Variables::new();
//! vars.insert("x", 4);
//! let mut expr = Compiler::with_defaults().compile("x * 2 + 1", &vars).unwrap();
//! assert_eq!(expr.execute(&mut vars).unwrap(), Value::Integer(9));
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod expression;
mod foundation;
mod runtime;
mod value;

pub use crate::config::{EngineConfig, FloatPrecision, IntPrecision};
pub use crate::expression::classify::{classify, classify_token};
pub use crate::expression::element::{Associativity, Element, ElementType, NO_PRECEDENCE};
pub use crate::expression::lexer::{Token, TokenKind, tokenize};
pub use crate::expression::node::NodeKind;
pub use crate::expression::postfix::to_postfix;
pub use crate::foundation::alloc_track::{AllocRegion, AllocStats};
pub use crate::foundation::error::{ExprError, ExprResult};
pub use crate::foundation::intern;
pub use crate::foundation::intern::{Ident, Interner};
pub use crate::runtime::compiler::{Compiler, Expression};
pub use crate::runtime::functions::{Arity, FunctionDef, FunctionRegistry, NativeFn};
pub use crate::runtime::variables::{EmptyScope, VariableStore, Variables};
pub use crate::value::approx::{F32_EPSILON, F64_EPSILON, nearly_equal_f32, nearly_equal_f64};
pub use crate::value::{Value, ValueType};
