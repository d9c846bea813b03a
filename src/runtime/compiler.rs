//! Compilation pipeline and the compiled-expression handle.
//!
//! `Compiler::compile` runs tokenize → classify → postfix → build → (validate) → optimize.
//! The resulting [`Expression`] owns its tree and can be executed any number of times
//! against different variable stores.

use crate::config::EngineConfig;
use crate::expression::build::build_tree;
use crate::expression::classify::classify;
use crate::expression::lexer::tokenize;
use crate::expression::node::{BuildCtx, Node, NodeKind};
use crate::expression::optimize::optimize_tree;
use crate::expression::postfix::to_postfix;
use crate::foundation::error::{ExprError, ExprResult};
use crate::runtime::functions::FunctionRegistry;
use crate::runtime::variables::VariableStore;
use crate::value::{Value, ValueType};
use std::fmt;

/// Compiles source text under a fixed configuration and function registry.
#[derive(Debug, Clone)]
pub struct Compiler {
    config: EngineConfig,
    functions: FunctionRegistry,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Compiler {
    /// Compiler using `config` and resolving calls against `functions`.
    pub fn new(config: EngineConfig, functions: FunctionRegistry) -> Self {
        Self { config, functions }
    }

    /// Default configuration with the builtin functions.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default(), FunctionRegistry::with_builtins())
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Function registry calls are resolved against.
    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    /// Compile and optimize `src`.
    ///
    /// `scope` supplies the kinds of already bound variables and the values of configured
    /// constants. It is only read.
    #[tracing::instrument(skip(self, scope), fields(len = src.len()))]
    pub fn compile(&self, src: &str, scope: &dyn VariableStore) -> ExprResult<Expression> {
        let root = self.build(src, scope)?;
        let root = optimize_tree(root, scope)?;
        Ok(Expression::new(root))
    }

    /// Compile `src` without running the optimizer.
    pub fn compile_unoptimized(
        &self,
        src: &str,
        scope: &dyn VariableStore,
    ) -> ExprResult<Expression> {
        Ok(Expression::new(self.build(src, scope)?))
    }

    /// Postfix (RPN) lexemes of `src`. Function calls appear as their name after their
    /// arguments.
    pub fn postfix(&self, src: &str) -> ExprResult<Vec<String>> {
        let tokens = tokenize(src)?;
        let elements = classify(&tokens)?;
        Ok(to_postfix(&elements)?
            .iter()
            .map(|el| el.lexeme().to_owned())
            .collect())
    }

    fn build(&self, src: &str, scope: &dyn VariableStore) -> ExprResult<Node> {
        let tokens = tokenize(src)?;
        let elements = classify(&tokens)?;
        let postfix = to_postfix(&elements)?;
        let ctx = BuildCtx {
            config: &self.config,
            functions: &self.functions,
            scope,
        };
        let root = build_tree(&postfix, &ctx)?;
        if self.config.strict {
            root.validate()?;
        }
        Ok(root)
    }
}

/// A compiled, re-executable expression.
#[derive(Debug, Clone)]
pub struct Expression {
    root: Node,
    executed: bool,
    no_alloc: bool,
}

impl Expression {
    fn new(root: Node) -> Self {
        Self {
            root,
            executed: false,
            no_alloc: false,
        }
    }

    /// Evaluate against `vars`. Assignments write through to `vars`.
    pub fn execute(&mut self, vars: &mut dyn VariableStore) -> ExprResult<Value> {
        self.executed = true;
        self.root.execute(vars).cloned()
    }

    /// Switch to the no-allocation mode: later executions reuse pre-sized buffers.
    ///
    /// Must be called once, before the first [`execute`](Self::execute).
    pub fn configure_no_alloc(&mut self) -> ExprResult<()> {
        if self.executed {
            return Err(ExprError::config(
                "no-allocation mode must be configured before the first execution",
            ));
        }
        if !self.no_alloc {
            self.root.configure_no_alloc();
            self.no_alloc = true;
        }
        Ok(())
    }

    /// True once [`configure_no_alloc`](Self::configure_no_alloc) succeeded.
    pub fn is_no_alloc(&self) -> bool {
        self.no_alloc
    }

    /// Re-check statically known kind conflicts.
    pub fn validate(&self) -> ExprResult<()> {
        self.root.validate()
    }

    /// Kind of the result, when known without executing.
    pub fn value_type(&self) -> Option<ValueType> {
        self.root.value_type()
    }

    /// True when the result does not depend on runtime bindings.
    pub fn is_precomputable(&self) -> bool {
        self.root.is_precomputable()
    }

    /// True when the result is statically known to be numeric.
    pub fn is_numeric(&self) -> bool {
        self.root.is_numeric()
    }

    /// Result of the last successful execution (`Null` before the first one, except for
    /// literal roots).
    pub fn last_value(&self) -> &Value {
        self.root.last_value()
    }

    /// Kind of the root node.
    pub fn root_kind(&self) -> NodeKind {
        self.root.kind()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}
