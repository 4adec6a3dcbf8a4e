//! Call arguments, before and after binding to a contract.

use std::collections::BTreeMap;

use strictly_types::{NativeKind, Value};

use crate::error::CallError;

/// Arguments as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    /// Positional arguments, bound in parameter order.
    pub positional: Vec<Value>,
    /// Named arguments: `name=value`.
    pub named: BTreeMap<String, Value>,
}

impl CallArgs {
    /// No arguments at all; every parameter falls back to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from positional values.
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            named: BTreeMap::new(),
        }
    }

    /// Add a named argument.
    pub fn named(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

/// Arguments resolved against a contract: one value per parameter, in
/// declaration order, with defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundArgs {
    function: String,
    values: Vec<(String, Value)>,
}

impl BoundArgs {
    pub(crate) fn new(function: impl Into<String>, values: Vec<(String, Value)>) -> Self {
        Self {
            function: function.into(),
            values,
        }
    }

    /// Get an argument by parameter name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, value)| value)
    }

    /// Get an argument that must exist, whatever its kind.
    pub fn require(&self, name: &str) -> Result<&Value, CallError> {
        self.get(name).ok_or_else(|| CallError::MissingArgument {
            function: self.function.clone(),
            param: name.to_string(),
        })
    }

    /// Get a whole-number argument.
    pub fn int(&self, name: &str) -> Result<i64, CallError> {
        let value = self.require(name)?;
        value.as_int().ok_or_else(|| CallError::WrongKind {
            param: name.to_string(),
            expected: NativeKind::Int,
            found: value.kind(),
        })
    }

    /// Get a text argument.
    pub fn text(&self, name: &str) -> Result<&str, CallError> {
        let value = self.require(name)?;
        value.as_str().ok_or_else(|| CallError::WrongKind {
            param: name.to_string(),
            expected: NativeKind::Str,
            found: value.kind(),
        })
    }

    /// Iterate `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
