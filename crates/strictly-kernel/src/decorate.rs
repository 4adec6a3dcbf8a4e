//! Decoration: validate a function at definition time, then decide what its
//! name gets bound to.
//!
//! Validation ([`Checker::validate`]) and binding ([`BindPolicy`]) are separate
//! steps. A verdict never stands in for the function itself.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strictly_types::Value;
use tracing::{debug, info};

use crate::args::BoundArgs;
use crate::checker::{Checker, Verdict, Violation};
use crate::contract::Contract;
use crate::error::{CallError, CheckResult};
use crate::function::ContractFn;

/// What to bind a decorated name to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindPolicy {
    /// Always bind the function as written. The verdict is only reported.
    Original,
    /// Bind the function only if it passed.
    #[default]
    Reject,
    /// Bind a [`Guarded`] wrapper that also checks real call arguments and
    /// results. Violations leave the name unbound.
    Guard,
}

/// Result of decorating one function.
pub struct Decoration {
    pub name: String,
    pub verdict: Verdict,
    /// What the name is bound to, if anything.
    pub binding: Option<Arc<dyn ContractFn>>,
}

impl Decoration {
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }
}

impl fmt::Debug for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoration")
            .field("name", &self.name)
            .field("verdict", &self.verdict)
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl Checker {
    /// Validate `func` and bind it according to `policy`.
    ///
    /// Fails when the contract is malformed or when the return check's
    /// invocation fails. Either way nothing is bound.
    pub fn decorate(
        &self,
        func: Arc<dyn ContractFn>,
        policy: BindPolicy,
    ) -> CheckResult<Decoration> {
        let verdict = self.validate(func.as_ref())?;
        let name = func.name().to_string();

        let binding: Option<Arc<dyn ContractFn>> = match (policy, &verdict) {
            (BindPolicy::Original, _) => Some(func),
            (BindPolicy::Reject, Verdict::Pass) => Some(func),
            (BindPolicy::Reject, _) => None,
            (BindPolicy::Guard, Verdict::Violation(_)) => None,
            (BindPolicy::Guard, _) => Some(Arc::new(Guarded::new(self.clone(), func))),
        };

        info!(
            function = %name,
            ?policy,
            %verdict,
            bound = binding.is_some(),
            "decorated"
        );

        Ok(Decoration {
            name,
            verdict,
            binding,
        })
    }
}

/// A wrapper that checks every call against the contract.
///
/// Each argument with a descriptor is checked before the body runs, and the
/// result is checked against the return descriptor afterwards. This covers
/// call-site values, which definition-time validation does not.
pub struct Guarded {
    checker: Checker,
    inner: Arc<dyn ContractFn>,
}

impl Guarded {
    pub fn new(checker: Checker, inner: Arc<dyn ContractFn>) -> Self {
        Self { checker, inner }
    }

    fn violation(&self, violation: Violation) -> CallError {
        CallError::ContractViolation {
            function: self.inner.name().to_string(),
            violation,
        }
    }
}

impl ContractFn for Guarded {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn contract(&self) -> &Contract {
        self.inner.contract()
    }

    fn call(&self, args: &BoundArgs) -> Result<Value, CallError> {
        let contract = self.inner.contract();

        // Bound values follow declaration order, one per parameter.
        for (param, (_, value)) in contract.params().iter().zip(args.iter()) {
            let Some(expected) = param.descriptor else {
                continue;
            };
            if !self.checker.check_type(value, expected) {
                return Err(self.violation(Violation::Parameter {
                    name: param.name.clone(),
                    expected,
                    found: value.kind(),
                }));
            }
        }

        let result = self.inner.call(args)?;

        if let Some(expected) = contract.return_clause().descriptor() {
            if !self.checker.check_type(&result, expected) {
                return Err(self.violation(Violation::Return {
                    expected,
                    found: result.kind(),
                }));
            }
        }

        debug!(function = self.inner.name(), "guarded call ok");
        Ok(result)
    }
}

impl fmt::Debug for Guarded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guarded")
            .field("function", &self.inner.name())
            .field("checker", &self.checker.name())
            .finish()
    }
}
