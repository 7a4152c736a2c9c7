//! # skopa-proc
//!
//! Process enumeration for the `skopa ps` command. Reports owner, pid,
//! parent pid, and executable path for every process visible from the
//! current namespace. Per-process fields that cannot be read (a common
//! situation for other users' processes in a locked-down container) are
//! left unset rather than failing the listing.

use std::path::PathBuf;

use skopa_common::error::{Result, SkopaError};
use sysinfo::{ProcessRefreshKind, RefreshKind, System, Users};

/// One row of the process listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntry {
    /// Owning user name, when resolvable.
    pub user: Option<String>,
    /// Process ID.
    pub pid: u32,
    /// Parent process ID, when known.
    pub ppid: Option<u32>,
    /// Executable path, when readable.
    pub exe: Option<PathBuf>,
}

/// Lists all visible processes, sorted by pid.
///
/// # Errors
///
/// Returns [`SkopaError::ProcessListing`] when not a single process is
/// visible, which indicates procfs itself is unavailable.
pub fn list_processes() -> Result<Vec<ProcessEntry>> {
    let system = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::everything()),
    );
    let users = Users::new_with_refreshed_list();

    let mut entries: Vec<ProcessEntry> = system
        .processes()
        .iter()
        .map(|(pid, process)| ProcessEntry {
            user: process
                .user_id()
                .and_then(|uid| users.get_user_by_id(uid))
                .map(|user| user.name().to_string()),
            pid: pid.as_u32(),
            ppid: process.parent().map(|parent| parent.as_u32()),
            exe: process.exe().map(PathBuf::from),
        })
        .collect();

    if entries.is_empty() {
        return Err(SkopaError::ProcessListing {
            message: "no processes visible".to_string(),
        });
    }

    entries.sort_unstable_by_key(|entry| entry.pid);
    tracing::debug!(count = entries.len(), "enumerated processes");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_is_nonempty_and_sorted() {
        let entries = list_processes().expect("process listing");
        assert!(!entries.is_empty());
        assert!(entries.windows(2).all(|pair| pair[0].pid <= pair[1].pid));
    }

    #[test]
    fn listing_includes_current_process() {
        let entries = list_processes().expect("process listing");
        let own_pid = std::process::id();
        assert!(entries.iter().any(|entry| entry.pid == own_pid));
    }
}
