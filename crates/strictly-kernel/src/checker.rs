//! The strict checker.
//!
//! A [`Checker`] owns a [`Registry`] and answers two questions:
//!
//! - **check_type**: does this value belong to this descriptor's kind?
//! - **check_function**: are this function's declared defaults and return
//!   value consistent with its contract?
//!
//! Parameters are checked against their *declared defaults*, not against any
//! caller's arguments. The return clause is checked by really calling the
//! function once with those defaults. Nothing is inferred statically.

use std::fmt;

use serde::{Deserialize, Serialize};
use strictly_types::{NativeKind, TypeDescriptor, Value};
use tracing::{debug, warn};

use crate::config::CheckerConfig;
use crate::contract::ReturnClause;
use crate::decorate::BindPolicy;
use crate::error::{CheckError, CheckResult};
use crate::function::ContractFn;
use crate::registry::Registry;

/// Why a function failed its contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// A parameter value did not match its descriptor.
    Parameter {
        name: String,
        expected: TypeDescriptor,
        found: NativeKind,
    },
    /// The return value did not match the return descriptor.
    Return {
        expected: TypeDescriptor,
        found: NativeKind,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Parameter {
                name,
                expected,
                found,
            } => write!(f, "parameter '{name}' must be {expected}, got {found}"),
            Violation::Return { expected, found } => {
                write!(f, "return value must be {expected}, got {found}")
            }
        }
    }
}

/// Outcome of validating a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", content = "detail", rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Violation(Violation),
    /// Defaults passed, but the return clause is declared uncheckable.
    Uncheckable,
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Verdict::Violation(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => f.write_str("pass"),
            Verdict::Violation(v) => write!(f, "violation: {v}"),
            Verdict::Uncheckable => f.write_str("uncheckable"),
        }
    }
}

/// Validates values and functions against descriptors.
///
/// Read-only after construction, so one checker can be shared freely.
#[derive(Debug, Clone)]
pub struct Checker {
    name: String,
    registry: Registry,
    policy: BindPolicy,
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(CheckerConfig::default())
    }
}

impl Checker {
    pub fn new(config: CheckerConfig) -> Self {
        debug!(
            checker = %config.name,
            kinds = ?config.registry.names(),
            "checker ready"
        );
        Self {
            name: config.name,
            registry: config.registry,
            policy: config.policy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Policy used when no explicit one is given.
    pub fn default_policy(&self) -> BindPolicy {
        self.policy
    }

    /// True iff the descriptor's kind is registered and `value` is of that kind.
    ///
    /// An unregistered kind never passes, whatever the value.
    pub fn check_type(&self, value: &Value, descriptor: TypeDescriptor) -> bool {
        let kind = descriptor.native_kind();
        self.registry.is_known(kind) && value.is_kind(kind)
    }

    /// Validate a function's contract.
    ///
    /// 1. Each parameter with both a descriptor and a default has its default
    ///    checked, in declaration order. The first mismatch ends validation;
    ///    the body is never called.
    /// 2. A checked return clause invokes the function once with no caller
    ///    arguments and checks the result.
    ///
    /// Errors when the contract is malformed or when that invocation fails.
    pub fn validate(&self, func: &dyn ContractFn) -> CheckResult<Verdict> {
        let contract = func.contract();
        contract
            .well_formed()
            .map_err(|source| CheckError::Malformed {
                function: func.name().to_string(),
                source,
            })?;

        for param in contract.params() {
            let (Some(descriptor), Some(default)) = (param.descriptor, param.default.as_ref())
            else {
                continue;
            };
            if !self.check_type(default, descriptor) {
                let violation = Violation::Parameter {
                    name: param.name.clone(),
                    expected: descriptor,
                    found: default.kind(),
                };
                warn!(function = func.name(), %violation, "default breaks contract");
                return Ok(Verdict::Violation(violation));
            }
        }

        let descriptor = match contract.return_clause() {
            ReturnClause::Unchecked => {
                debug!(function = func.name(), "no return clause, pass");
                return Ok(Verdict::Pass);
            }
            ReturnClause::Uncheckable(_) => {
                debug!(function = func.name(), "return declared uncheckable");
                return Ok(Verdict::Uncheckable);
            }
            ReturnClause::Checked(descriptor) => descriptor,
        };

        debug!(function = func.name(), "invoking with defaults for return check");
        let value = func
            .invoke_defaults()
            .map_err(|source| CheckError::Execution {
                function: func.name().to_string(),
                source,
            })?;

        if self.check_type(&value, descriptor) {
            Ok(Verdict::Pass)
        } else {
            let violation = Violation::Return {
                expected: descriptor,
                found: value.kind(),
            };
            warn!(function = func.name(), %violation, "return value breaks contract");
            Ok(Verdict::Violation(violation))
        }
    }

    /// Boolean form of [`validate`](Self::validate).
    ///
    /// A declared-uncheckable return clause is an error here, since there is
    /// no honest `true` or `false` to give.
    pub fn check_function(&self, func: &dyn ContractFn) -> CheckResult<bool> {
        match self.validate(func)? {
            Verdict::Pass => Ok(true),
            Verdict::Violation(_) => Ok(false),
            Verdict::Uncheckable => Err(CheckError::Uncheckable {
                function: func.name().to_string(),
            }),
        }
    }
}
