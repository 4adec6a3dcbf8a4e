//! Error types for calling and checking functions.
//!
//! Contract violations are not errors: they come back as `false` or as a
//! [`Verdict`](crate::Verdict). Only genuine failures live here.

use strictly_types::NativeKind;
use thiserror::Error;

use crate::checker::Violation;

/// A call to a contract function failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    #[error("{function}() missing required argument '{param}'")]
    MissingArgument { function: String, param: String },

    #[error("{function}() got an unexpected argument '{param}'")]
    UnexpectedArgument { function: String, param: String },

    #[error("{function}() got multiple values for argument '{param}'")]
    DuplicateArgument { function: String, param: String },

    #[error("{function}() takes {max} positional arguments but {given} were given")]
    TooManyArguments {
        function: String,
        max: usize,
        given: usize,
    },

    /// A body asked for an argument as one kind and got another.
    #[error("argument '{param}' must be {expected}, got {found}")]
    WrongKind {
        param: String,
        expected: NativeKind,
        found: NativeKind,
    },

    /// A guarded function was called with, or produced, a value outside its contract.
    #[error("{function}(): {violation}")]
    ContractViolation {
        function: String,
        violation: Violation,
    },

    #[error("{0}() is not defined")]
    NotDefined(String),

    /// The body itself failed.
    #[error("{0}")]
    Failed(String),
}

impl CallError {
    /// Shorthand for a body failure.
    pub fn failed(msg: impl Into<String>) -> Self {
        CallError::Failed(msg.into())
    }
}

/// A contract's parameter list is not well formed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("parameter name '{0}' is reserved for the return clause")]
    ReservedName(String),

    #[error("parameter '{0}' is declared more than once")]
    DuplicateParam(String),
}

/// Checking a function could not produce a pass/fail answer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckError {
    /// The zero-argument invocation used for the return check failed.
    #[error("calling {function}() to check its return value failed: {source}")]
    Execution {
        function: String,
        #[source]
        source: CallError,
    },

    /// The contract's parameter list is malformed, so nothing was checked.
    #[error("{function}() has a malformed contract: {source}")]
    Malformed {
        function: String,
        #[source]
        source: ContractError,
    },

    /// The contract says its return value cannot be checked by invocation.
    #[error("{function}() declares its return value uncheckable")]
    Uncheckable { function: String },
}

/// Result alias for checker operations.
pub type CheckResult<T> = std::result::Result<T, CheckError>;
