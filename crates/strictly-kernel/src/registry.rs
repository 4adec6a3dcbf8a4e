//! Descriptor registry: which native kinds a checker recognizes.

use std::collections::BTreeMap;

use strictly_types::{NativeKind, TypeDescriptor};

/// Fixed table from descriptor name to native kind.
///
/// Built once when a checker is constructed and never mutated afterwards.
/// A descriptor whose native kind is not among the values here is unknown,
/// and unknown descriptors never pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<String, NativeKind>,
}

impl Registry {
    /// The standard registry: `Int` and `Str`.
    pub fn builtin() -> Self {
        Self::from_entries(
            TypeDescriptor::ALL
                .iter()
                .map(|d| (d.name(), d.native_kind())),
        )
    }

    /// A registry with no entries. Nothing checks against it.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Build a registry from explicit entries. Later duplicates win.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, NativeKind)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, kind)| (name.into(), kind))
                .collect(),
        }
    }

    /// True if `kind` appears among the registry's values.
    pub fn is_known(&self, kind: NativeKind) -> bool {
        self.entries.values().any(|k| *k == kind)
    }

    /// Look up a native kind by descriptor name.
    pub fn get(&self, name: &str) -> Option<NativeKind> {
        self.entries.get(name).copied()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
