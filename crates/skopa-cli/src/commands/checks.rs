//! `skopa checks` — List registered checks.

use clap::Args;
use skopa_inspect::registry::Registry;

/// Arguments for the `checks` command.
#[derive(Args, Debug)]
pub struct ChecksArgs {}

/// Executes the `checks` command.
///
/// Displays the registered checks (id, category, description) in a
/// tabular format without running any of them.
///
/// # Errors
///
/// Currently infallible; the signature matches the other commands.
pub fn execute(_args: &ChecksArgs) -> anyhow::Result<()> {
    tracing::info!("listing registered checks");
    let registry = Registry::builtin();

    println!("{:<32} {:<12} {}", "ID", "CATEGORY", "DESCRIPTION");
    for check in registry.checks() {
        println!(
            "{:<32} {:<12} {}",
            check.id,
            check.category.to_string(),
            check.description
        );
    }

    Ok(())
}
