//! SELinux enforcement-state probe.
//!
//! `/sys/fs/selinux/enforce` exists only when SELinux is compiled in and
//! selinuxfs is mounted; an unreadable flag therefore means SELinux is not
//! in play at all and the label read is skipped as meaningless.

use std::fs;
use std::path::Path;

use skopa_common::constants;
use skopa_common::finding::Finding;

use crate::attr;

/// Classification of the enforce flag contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnforceState {
    /// "1" — policy violations are blocked.
    Enforcing,
    /// "0" — violations are logged but permitted.
    Permissive,
    /// Anything else, kept verbatim for diagnostics.
    Unexpected(String),
}

/// Classifies the raw contents of the enforce flag file.
#[must_use]
pub fn classify_enforce(raw: &str) -> EnforceState {
    match raw.trim() {
        "1" => EnforceState::Enforcing,
        "0" => EnforceState::Permissive,
        other => EnforceState::Unexpected(other.to_string()),
    }
}

/// Reports the SELinux enforcement state and the current process label.
#[must_use]
pub fn check_selinux() -> Vec<Finding> {
    let Ok(raw) = fs::read_to_string(constants::SELINUX_ENFORCE) else {
        return vec![Finding::warn(
            "SELinux: not detected (no SELinux filesystem mounted)",
        )];
    };

    let mut findings = vec![match classify_enforce(&raw) {
        EnforceState::Enforcing => Finding::info("SELinux: enforcing"),
        EnforceState::Permissive => {
            Finding::warn("SELinux: permissive (loaded but not enforcing)")
        }
        EnforceState::Unexpected(value) => {
            Finding::info(format!("SELinux: unexpected enforce value {value:?}"))
        }
    }];

    // The label may legitimately be absent; only report it when readable.
    if let Some(label) = attr::read_label(Path::new(constants::PROC_SELF_ATTR_CURRENT)) {
        findings.push(Finding::info(format!("SELinux: container label: {label}")));
    }

    findings
}
