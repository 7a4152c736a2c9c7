//! `skopa ps` — List visible processes.

use clap::Args;
use skopa_proc::list_processes;

/// Arguments for the `ps` command.
#[derive(Args, Debug)]
pub struct PsArgs {}

/// Executes the `ps` command.
///
/// Lists every process visible from the current namespace with its
/// owner, pid, parent pid, and executable path. Unreadable fields are
/// rendered as `-`.
///
/// # Errors
///
/// Returns an error if process enumeration fails entirely.
pub fn execute(_args: &PsArgs) -> anyhow::Result<()> {
    tracing::info!("listing processes");
    let entries = list_processes().map_err(|e| anyhow::anyhow!("{e}"))?;

    println!("{:<16} {:<8} {:<8} {}", "USER", "PID", "PPID", "EXE");
    for entry in &entries {
        println!(
            "{:<16} {:<8} {:<8} {}",
            entry.user.as_deref().unwrap_or("-"),
            entry.pid,
            entry.ppid.map_or_else(|| "-".to_string(), |p| p.to_string()),
            entry
                .exe
                .as_deref()
                .map_or_else(|| "-".to_string(), |p| p.display().to_string())
        );
    }

    Ok(())
}
