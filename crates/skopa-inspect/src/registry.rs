//! Explicit check registry.
//!
//! The set of active checks is an ordinary table built once at start-up
//! and passed by reference to whatever drives execution. There is no
//! global state and no load-time registration side effects, which keeps
//! the active set testable in isolation.

use std::fmt;

use serde::Serialize;
use skopa_common::error::{Result, SkopaError};
use skopa_common::finding::Finding;

/// Category a check is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Environment information gathering.
    Information,
    /// Security posture of the current process and kernel.
    Security,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Information => write!(f, "information"),
            Self::Security => write!(f, "security"),
        }
    }
}

/// A registered check: stable id, description, and entry point.
#[derive(Debug, Clone)]
pub struct Check {
    /// Stable identifier, e.g. `security.seccomp_status`.
    pub id: &'static str,
    /// Human-readable description for listings.
    pub description: &'static str,
    /// Category the check belongs to.
    pub category: Category,
    /// Zero-argument entry point returning structured findings.
    pub run: fn() -> Vec<Finding>,
}

/// Report of one executed check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Identifier of the check that produced the findings.
    pub id: &'static str,
    /// Category of the check.
    pub category: Category,
    /// Findings in emission order.
    pub findings: Vec<Finding>,
}

/// Ordered table of registered checks.
#[derive(Debug, Default)]
pub struct Registry {
    checks: Vec<Check>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Builds the registry of built-in security checks.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Check {
            id: "security.namespace_isolation",
            description: "Check container namespace isolation",
            category: Category::Security,
            run: crate::namespace::check_namespace_isolation,
        });
        registry.register(Check {
            id: "security.seccomp_status",
            description: "Check Seccomp status",
            category: Category::Security,
            run: crate::seccomp::check_seccomp_status,
        });
        registry.register(Check {
            id: "security.seccomp_support",
            description: "Check kernel Seccomp support",
            category: Category::Security,
            run: crate::seccomp::check_seccomp_kernel_support,
        });
        registry.register(Check {
            id: "security.selinux",
            description: "Check SELinux status",
            category: Category::Security,
            run: crate::selinux::check_selinux,
        });
        registry.register(Check {
            id: "security.apparmor",
            description: "Check AppArmor status and container profile",
            category: Category::Security,
            run: crate::apparmor::check_apparmor,
        });
        registry
    }

    /// Adds a check to the table.
    pub fn register(&mut self, check: Check) {
        self.checks.push(check);
    }

    /// All registered checks in registration order.
    #[must_use]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Looks up a check by its stable id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Check> {
        self.checks.iter().find(|check| check.id == id)
    }

    /// Runs a single check by id.
    ///
    /// # Errors
    ///
    /// Returns [`SkopaError::NotFound`] when no check carries the id.
    pub fn run(&self, id: &str) -> Result<CheckReport> {
        let check = self.find(id).ok_or_else(|| SkopaError::NotFound {
            kind: "check",
            id: id.to_string(),
        })?;
        tracing::debug!(id = check.id, "running check");
        Ok(CheckReport {
            id: check.id,
            category: check.category,
            findings: (check.run)(),
        })
    }

    /// Runs every registered check, in registration order.
    #[must_use]
    pub fn run_all(&self) -> Vec<CheckReport> {
        self.checks
            .iter()
            .map(|check| {
                tracing::debug!(id = check.id, "running check");
                CheckReport {
                    id: check.id,
                    category: check.category,
                    findings: (check.run)(),
                }
            })
            .collect()
    }
}
