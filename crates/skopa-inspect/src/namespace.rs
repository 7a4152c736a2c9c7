//! Namespace isolation probe.
//!
//! Compares the namespace identity of the init process (`/proc/1/ns/<kind>`)
//! against the current process (`/proc/self/ns/<kind>`) for each namespace
//! kind. Differing symlink targets mean the namespace is isolated from the
//! host; equal targets mean it is shared.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use skopa_common::finding::Finding;

/// A Linux namespace kind relevant to container isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceKind {
    /// Cgroup root directory.
    Cgroup,
    /// System V IPC and POSIX message queues.
    Ipc,
    /// Mount points.
    Mnt,
    /// Network devices, stacks, and ports.
    Net,
    /// Process IDs.
    Pid,
    /// Hostname and NIS domain name.
    Uts,
}

impl NamespaceKind {
    /// All kinds, in the fixed report ordering.
    pub const ALL: [Self; 6] = [
        Self::Cgroup,
        Self::Ipc,
        Self::Mnt,
        Self::Net,
        Self::Pid,
        Self::Uts,
    ];

    /// The kind's name as it appears under `/proc/<pid>/ns/`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cgroup => "cgroup",
            Self::Ipc => "ipc",
            Self::Mnt => "mnt",
            Self::Net => "net",
            Self::Pid => "pid",
            Self::Uts => "uts",
        }
    }

    fn link_path(self, pid: &str) -> PathBuf {
        PathBuf::from(format!("/proc/{pid}/ns/{}", self.as_str()))
    }
}

impl fmt::Display for NamespaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Isolation verdict for a single namespace kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Isolation {
    /// Init and self identities differ; the given identity is ours.
    Isolated(String),
    /// Init and self share the given identity.
    Shared(String),
    /// One or both identities could not be read.
    Unknown,
}

/// Classifies a pair of namespace identity strings.
#[must_use]
pub fn classify(init: Option<&str>, current: Option<&str>) -> Isolation {
    match (init, current) {
        (Some(init), Some(current)) if init == current => {
            Isolation::Shared(current.to_string())
        }
        (Some(_), Some(current)) => Isolation::Isolated(current.to_string()),
        _ => Isolation::Unknown,
    }
}

fn link_target(path: PathBuf) -> Option<String> {
    fs::read_link(path)
        .ok()
        .map(|target| target.to_string_lossy().into_owned())
}

/// Reports the isolation state of every namespace kind.
///
/// An unreadable symlink on either side yields an "unable to determine"
/// finding for that kind only; the remaining kinds are still probed.
#[must_use]
pub fn check_namespace_isolation() -> Vec<Finding> {
    NamespaceKind::ALL
        .iter()
        .map(|&kind| {
            let init = link_target(kind.link_path("1"));
            let current = link_target(kind.link_path("self"));
            match classify(init.as_deref(), current.as_deref()) {
                Isolation::Isolated(identity) => {
                    Finding::info(format!("{kind}: isolated ({identity})"))
                }
                Isolation::Shared(identity) => Finding::warn(format!(
                    "{kind}: NOT isolated (shared with host, {identity})"
                )),
                Isolation::Unknown => {
                    Finding::info(format!("{kind}: unable to read namespace links"))
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_identities_are_shared() {
        assert_eq!(
            classify(Some("pid:[4026531836]"), Some("pid:[4026531836]")),
            Isolation::Shared("pid:[4026531836]".to_string())
        );
    }

    #[test]
    fn differing_identities_are_isolated() {
        assert_eq!(
            classify(Some("pid:[4026531836]"), Some("pid:[4026532605]")),
            Isolation::Isolated("pid:[4026532605]".to_string())
        );
    }

    #[test]
    fn unreadable_side_is_unknown() {
        assert_eq!(classify(None, Some("pid:[4026531836]")), Isolation::Unknown);
        assert_eq!(classify(Some("pid:[4026531836]"), None), Isolation::Unknown);
        assert_eq!(classify(None, None), Isolation::Unknown);
    }

    #[test]
    fn report_covers_all_kinds_in_fixed_order() {
        let findings = check_namespace_isolation();
        assert_eq!(findings.len(), 6);
        for (finding, kind) in findings.iter().zip(NamespaceKind::ALL) {
            assert!(
                finding.message.starts_with(kind.as_str()),
                "expected {kind} prefix in {:?}",
                finding.message
            );
        }
    }
}
