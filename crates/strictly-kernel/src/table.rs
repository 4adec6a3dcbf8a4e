//! Function table: names bound by decoration.

use std::collections::HashMap;
use std::sync::Arc;

use strictly_types::Value;
use tracing::warn;

use crate::args::CallArgs;
use crate::checker::Checker;
use crate::decorate::{BindPolicy, Decoration};
use crate::error::{CallError, CheckResult};
use crate::function::ContractFn;

/// Name → function bindings produced by decoration.
#[derive(Default)]
pub struct FunctionTable {
    functions: HashMap<String, Arc<dyn ContractFn>>,
}

impl FunctionTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decorate `func` with the checker's default policy and bind the result.
    pub fn define(
        &mut self,
        checker: &Checker,
        func: impl ContractFn + 'static,
    ) -> CheckResult<Decoration> {
        self.define_with(checker, Arc::new(func), checker.default_policy())
    }

    /// Decorate `func` with an explicit policy and bind the result.
    ///
    /// A definition that binds nothing, or whose check fails outright,
    /// removes any earlier binding of the same name.
    pub fn define_with(
        &mut self,
        checker: &Checker,
        func: Arc<dyn ContractFn>,
        policy: BindPolicy,
    ) -> CheckResult<Decoration> {
        let name = func.name().to_string();
        let decoration = match checker.decorate(func, policy) {
            Ok(decoration) => decoration,
            Err(err) => {
                if self.functions.remove(&name).is_some() {
                    warn!(function = %name, error = %err, "earlier binding removed");
                }
                return Err(err);
            }
        };
        match &decoration.binding {
            Some(binding) => {
                self.functions
                    .insert(decoration.name.clone(), Arc::clone(binding));
            }
            None => {
                if self.functions.remove(&decoration.name).is_some() {
                    warn!(function = %decoration.name, "earlier binding removed");
                }
            }
        }
        Ok(decoration)
    }

    /// The function currently bound to `name`, wrapper included.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ContractFn>> {
        self.functions.get(name).cloned()
    }

    /// True if a definition of `name` survived decoration.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Bind `args` against the bound function's contract and run it.
    pub fn call(&self, name: &str, args: CallArgs) -> Result<Value, CallError> {
        let func = self
            .functions
            .get(name)
            .ok_or_else(|| CallError::NotDefined(name.to_string()))?;
        func.invoke(args)
    }

    /// Bound function names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.functions.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// How many names are bound.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// True when no definition has been bound.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl std::fmt::Debug for FunctionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
