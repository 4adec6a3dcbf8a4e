//! Checker configuration.

use crate::decorate::BindPolicy;
use crate::registry::Registry;

/// Configuration for checker construction.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Name of this checker (shows up in logs).
    pub name: String,
    /// Registry the checker owns. Read-only once the checker exists.
    pub registry: Registry,
    /// Policy [`FunctionTable::define`](crate::FunctionTable::define) uses
    /// when the caller does not pick one.
    pub policy: BindPolicy,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            registry: Registry::builtin(),
            policy: BindPolicy::Reject,
        }
    }
}

impl CheckerConfig {
    /// Bind every function as written, whatever its verdict.
    pub fn permissive() -> Self {
        Self {
            name: "permissive".to_string(),
            policy: BindPolicy::Original,
            ..Self::default()
        }
    }

    /// Bind passing functions behind a call-time guard.
    pub fn guarded() -> Self {
        Self {
            name: "guarded".to_string(),
            policy: BindPolicy::Guard,
            ..Self::default()
        }
    }

    /// Replace the registry.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }
}
