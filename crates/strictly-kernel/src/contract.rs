//! Function contracts.
//!
//! A contract is an ordinary value attached to a function when the function
//! is built. It lists each parameter in declaration order, with an optional
//! descriptor and an optional default, plus a return clause.
//!
//! ```
//! use strictly_kernel::{Contract, Param};
//! use strictly_types::TypeDescriptor;
//!
//! let contract = Contract::new()
//!     .param(Param::typed("a", TypeDescriptor::Int).with_default(1))
//!     .param(Param::typed("b", TypeDescriptor::Int).with_default(2))
//!     .returns(TypeDescriptor::Int);
//!
//! assert_eq!(contract.descriptor("a"), Some(TypeDescriptor::Int));
//! assert_eq!(contract.descriptor("return"), Some(TypeDescriptor::Int));
//! ```

use strictly_types::{TypeDescriptor, Value};

use crate::args::{BoundArgs, CallArgs};
use crate::error::{CallError, ContractError};

/// Reserved key naming the return clause in [`Contract::descriptor`].
pub const RETURN_KEY: &str = "return";

/// One declared parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub descriptor: Option<TypeDescriptor>,
    pub default: Option<Value>,
}

impl Param {
    /// An unannotated parameter with no default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descriptor: None,
            default: None,
        }
    }

    /// A parameter annotated with a descriptor.
    pub fn typed(name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            descriptor: Some(descriptor),
            default: None,
        }
    }

    /// Give the parameter a default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// What the contract says about the return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnClause {
    /// No return descriptor.
    #[default]
    Unchecked,
    /// Checked by invoking the function with its defaults.
    Checked(TypeDescriptor),
    /// Declared, but the function has no meaningful default-argument call.
    /// The checker never invokes it.
    Uncheckable(TypeDescriptor),
}

impl ReturnClause {
    pub fn descriptor(&self) -> Option<TypeDescriptor> {
        match self {
            ReturnClause::Unchecked => None,
            ReturnClause::Checked(d) | ReturnClause::Uncheckable(d) => Some(*d),
        }
    }
}

/// Declared parameters and return clause of a function.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contract {
    params: Vec<Param>,
    returns: ReturnClause,
}

impl Contract {
    /// An empty contract: no parameters, nothing declared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    ///
    /// Names are not checked here; [`Checker::validate`](crate::Checker::validate)
    /// refuses a contract that fails [`well_formed`](Self::well_formed). Use
    /// [`try_param`](Self::try_param) to catch the mistake while building.
    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Append a parameter, rejecting `"return"` and repeated names.
    pub fn try_param(self, param: Param) -> Result<Self, ContractError> {
        if param.name == RETURN_KEY {
            return Err(ContractError::ReservedName(param.name));
        }
        if self.params.iter().any(|p| p.name == param.name) {
            return Err(ContractError::DuplicateParam(param.name));
        }
        Ok(self.param(param))
    }

    /// Every parameter name is unique and none is `"return"`.
    pub fn well_formed(&self) -> Result<(), ContractError> {
        for (i, param) in self.params.iter().enumerate() {
            if param.name == RETURN_KEY {
                return Err(ContractError::ReservedName(param.name.clone()));
            }
            if self.params[..i].iter().any(|p| p.name == param.name) {
                return Err(ContractError::DuplicateParam(param.name.clone()));
            }
        }
        Ok(())
    }

    /// Declare a return descriptor, checked by invocation.
    pub fn returns(mut self, descriptor: TypeDescriptor) -> Self {
        self.returns = ReturnClause::Checked(descriptor);
        self
    }

    /// Declare a return descriptor that must not be checked by invocation.
    pub fn returns_uncheckable(mut self, descriptor: TypeDescriptor) -> Self {
        self.returns = ReturnClause::Uncheckable(descriptor);
        self
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn return_clause(&self) -> ReturnClause {
        self.returns
    }

    /// Look up a declared descriptor. `"return"` names the return clause.
    pub fn descriptor(&self, key: &str) -> Option<TypeDescriptor> {
        if key == RETURN_KEY {
            return self.returns.descriptor();
        }
        self.params
            .iter()
            .find(|p| p.name == key)
            .and_then(|p| p.descriptor)
    }

    /// True if nothing at all is declared.
    pub fn is_unannotated(&self) -> bool {
        self.returns == ReturnClause::Unchecked
            && self.params.iter().all(|p| p.descriptor.is_none())
    }

    /// Resolve caller arguments to one value per parameter.
    ///
    /// Positional arguments fill parameters in order, then named arguments,
    /// then defaults. A parameter left without a value is an error.
    pub fn bind(&self, function: &str, args: CallArgs) -> Result<BoundArgs, CallError> {
        let CallArgs {
            positional,
            mut named,
        } = args;

        if positional.len() > self.params.len() {
            return Err(CallError::TooManyArguments {
                function: function.to_string(),
                max: self.params.len(),
                given: positional.len(),
            });
        }

        let mut positional = positional.into_iter();
        let mut values = Vec::with_capacity(self.params.len());
        for param in &self.params {
            let value = match positional.next() {
                Some(value) => {
                    if named.contains_key(&param.name) {
                        return Err(CallError::DuplicateArgument {
                            function: function.to_string(),
                            param: param.name.clone(),
                        });
                    }
                    value
                }
                None => match named.remove(&param.name) {
                    Some(value) => value,
                    None => param.default.clone().ok_or_else(|| CallError::MissingArgument {
                        function: function.to_string(),
                        param: param.name.clone(),
                    })?,
                },
            };
            values.push((param.name.clone(), value));
        }

        if let Some(extra) = named.into_keys().next() {
            return Err(CallError::UnexpectedArgument {
                function: function.to_string(),
                param: extra,
            });
        }

        Ok(BoundArgs::new(function, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_types::TypeDescriptor::{Int, Str};

    fn add_contract() -> Contract {
        Contract::new()
            .param(Param::typed("a", Int).with_default(1))
            .param(Param::typed("b", Int).with_default(2))
            .returns(Int)
    }

    #[test]
    fn descriptor_lookup() {
        let contract = add_contract();
        assert_eq!(contract.descriptor("a"), Some(Int));
        assert_eq!(contract.descriptor(RETURN_KEY), Some(Int));
        assert_eq!(contract.descriptor("c"), None);
    }

    #[test]
    fn uncheckable_still_names_its_descriptor() {
        let contract = Contract::new().returns_uncheckable(Str);
        assert_eq!(contract.descriptor("return"), Some(Str));
        assert_eq!(contract.return_clause(), ReturnClause::Uncheckable(Str));
    }

    #[test]
    fn try_param_rejects_reserved_and_duplicate_names() {
        let err = Contract::new()
            .try_param(Param::typed("return", Str))
            .unwrap_err();
        assert_eq!(err, ContractError::ReservedName("return".into()));

        let err = Contract::new()
            .try_param(Param::typed("a", Int))
            .and_then(|c| c.try_param(Param::typed("a", Str)))
            .unwrap_err();
        assert_eq!(err, ContractError::DuplicateParam("a".into()));

        assert!(Contract::new().try_param(Param::new("a")).is_ok());
    }

    #[test]
    fn well_formed() {
        assert_eq!(add_contract().well_formed(), Ok(()));
        let reserved = Contract::new().param(Param::typed("return", Str));
        assert_eq!(
            reserved.well_formed(),
            Err(ContractError::ReservedName("return".into()))
        );
        let twice = Contract::new().param(Param::new("x")).param(Param::new("x"));
        assert_eq!(
            twice.well_formed(),
            Err(ContractError::DuplicateParam("x".into()))
        );
    }

    #[test]
    fn unannotated() {
        assert!(Contract::new().is_unannotated());
        assert!(Contract::new().param(Param::new("x")).is_unannotated());
        assert!(!add_contract().is_unannotated());
    }

    #[test]
    fn bind_uses_defaults() {
        let bound = add_contract().bind("add", CallArgs::new()).unwrap();
        assert_eq!(bound.int("a"), Ok(1));
        assert_eq!(bound.int("b"), Ok(2));
    }

    #[test]
    fn bind_positional_then_named() {
        let args = CallArgs::positional([10]).named("b", 20);
        let bound = add_contract().bind("add", args).unwrap();
        assert_eq!(bound.int("a"), Ok(10));
        assert_eq!(bound.int("b"), Ok(20));
    }

    #[test]
    fn bind_missing_without_default() {
        let contract = Contract::new().param(Param::typed("a", Int));
        let err = contract.bind("f", CallArgs::new()).unwrap_err();
        assert_eq!(
            err,
            CallError::MissingArgument {
                function: "f".into(),
                param: "a".into(),
            }
        );
    }

    #[test]
    fn bind_too_many() {
        let err = add_contract()
            .bind("add", CallArgs::positional([1, 2, 3]))
            .unwrap_err();
        assert!(matches!(err, CallError::TooManyArguments { max: 2, given: 3, .. }));
    }

    #[test]
    fn bind_unexpected_named() {
        let err = add_contract()
            .bind("add", CallArgs::new().named("z", 1))
            .unwrap_err();
        assert!(matches!(err, CallError::UnexpectedArgument { ref param, .. } if param == "z"));
    }

    #[test]
    fn bind_duplicate() {
        let err = add_contract()
            .bind("add", CallArgs::positional([1]).named("a", 5))
            .unwrap_err();
        assert!(matches!(err, CallError::DuplicateArgument { ref param, .. } if param == "a"));
    }
}
