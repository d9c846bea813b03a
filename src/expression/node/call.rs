use super::{BuildCtx, Node, NodeOps, Operands, Slot, fold};
use crate::expression::element::Element;
use crate::foundation::error::{ExprError, ExprResult};
use crate::runtime::functions::FunctionDef;
use crate::runtime::variables::VariableStore;
use crate::value::{Value, ValueType};
use smallvec::SmallVec;
use std::sync::Arc;

/// Call of a native function resolved at build time.
#[derive(Debug, Clone)]
pub(crate) struct CallNode {
    pub(crate) name: Arc<str>,
    def: FunctionDef,
    pub(crate) args: Vec<Node>,
    /// Argument buffer reused across executions once no-alloc mode is configured.
    scratch: SmallVec<[Value; 4]>,
    no_alloc: bool,
    pub(crate) slot: Slot,
}

impl NodeOps for CallNode {
    fn build(stack: &mut Operands, el: &Element<'_>, ctx: &BuildCtx<'_>) -> ExprResult<Self> {
        let name = el.lexeme();
        let def = ctx.functions.resolve(name, el.argc)?.clone();
        if stack.len() < el.argc {
            return Err(ExprError::syntax(
                &el.token,
                format!("'{name}' expects {} argument(s)", el.argc),
            ));
        }
        let mut args = Vec::with_capacity(el.argc);
        for _ in 0..el.argc {
            args.push(stack.pop(el)?);
        }
        args.reverse();
        Ok(Self {
            name: Arc::from(name),
            def,
            args,
            scratch: SmallVec::new(),
            no_alloc: false,
            slot: Slot::default(),
        })
    }

    fn execute(&mut self, vars: &mut dyn VariableStore) -> ExprResult<&Value> {
        let result = if self.no_alloc {
            self.scratch.clear();
            for a in &mut self.args {
                let v = a.execute(vars)?.clone();
                self.scratch.push(v);
            }
            let r = (self.def.call)(&self.scratch);
            self.scratch.clear();
            r?
        } else {
            let mut values = Vec::with_capacity(self.args.len());
            for a in &mut self.args {
                values.push(a.execute(vars)?.clone());
            }
            (self.def.call)(&values)?
        };
        self.slot.store(result)
    }

    fn optimize(self, vars: &mut dyn VariableStore) -> ExprResult<Node> {
        let mut args = Vec::with_capacity(self.args.len());
        for a in self.args {
            args.push(a.optimize(vars)?);
        }
        fold(
            Node::Call(Self {
                name: self.name,
                def: self.def,
                args,
                scratch: self.scratch,
                no_alloc: self.no_alloc,
                slot: self.slot,
            }),
            vars,
        )
    }

    fn validate(&self) -> ExprResult<()> {
        for a in &self.args {
            a.validate()?;
        }
        Ok(())
    }

    fn configure_no_alloc(&mut self) {
        let additional = self.args.len().saturating_sub(self.scratch.len());
        self.scratch.reserve_exact(additional);
        self.no_alloc = true;
        for a in &mut self.args {
            a.configure_no_alloc();
        }
    }

    fn is_precomputable(&self) -> bool {
        self.def.pure && self.args.iter().all(Node::is_precomputable)
    }

    fn value_type(&self) -> Option<ValueType> {
        self.slot.value_type()
    }
}
