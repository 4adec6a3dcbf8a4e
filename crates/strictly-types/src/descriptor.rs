//! Type descriptors — the markers a contract is written in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::NativeKind;

/// A marker declaring which primitive kind a value must belong to.
///
/// The set is closed. Each variant hardcodes its native kind, so building a
/// descriptor takes no input and cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeDescriptor {
    /// Whole numbers.
    Int,
    /// Character sequences.
    Str,
}

impl TypeDescriptor {
    /// Every descriptor, in declaration order.
    pub const ALL: [TypeDescriptor; 2] = [TypeDescriptor::Int, TypeDescriptor::Str];

    /// The descriptor's name, which is also its registry key.
    pub fn name(&self) -> &'static str {
        match self {
            TypeDescriptor::Int => "Int",
            TypeDescriptor::Str => "Str",
        }
    }

    /// The native kind this descriptor maps to.
    pub fn native_kind(&self) -> NativeKind {
        match self {
            TypeDescriptor::Int => NativeKind::Int,
            TypeDescriptor::Str => NativeKind::Str,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
