//! Functions that carry a contract.

use std::fmt;
use std::sync::Arc;

use strictly_types::Value;

use crate::args::{BoundArgs, CallArgs};
use crate::contract::Contract;
use crate::error::CallError;

/// A callable with a declared contract.
///
/// Implementors supply the body through [`call`](ContractFn::call), which
/// receives arguments already bound against the contract.
pub trait ContractFn: Send + Sync {
    /// Function name, used as the binding key.
    fn name(&self) -> &str;

    /// The declared contract.
    fn contract(&self) -> &Contract;

    /// Run the body on bound arguments.
    fn call(&self, args: &BoundArgs) -> Result<Value, CallError>;

    /// Bind caller arguments, then run the body.
    fn invoke(&self, args: CallArgs) -> Result<Value, CallError> {
        let bound = self.contract().bind(self.name(), args)?;
        self.call(&bound)
    }

    /// Call with no caller arguments, so every parameter takes its default.
    fn invoke_defaults(&self) -> Result<Value, CallError> {
        self.invoke(CallArgs::new())
    }
}

type Body = dyn Fn(&BoundArgs) -> Result<Value, CallError> + Send + Sync;

/// A contract function backed by a closure.
#[derive(Clone)]
pub struct Function {
    name: String,
    contract: Contract,
    body: Arc<Body>,
}

impl Function {
    pub fn new<F>(name: impl Into<String>, contract: Contract, body: F) -> Self
    where
        F: Fn(&BoundArgs) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            contract,
            body: Arc::new(body),
        }
    }
}

impl ContractFn for Function {
    fn name(&self) -> &str {
        &self.name
    }

    fn contract(&self) -> &Contract {
        &self.contract
    }

    fn call(&self, args: &BoundArgs) -> Result<Value, CallError> {
        (self.body)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("contract", &self.contract)
            .finish_non_exhaustive()
    }
}
