//! `skopa evaluate` — Run security checks and report findings.

use clap::Args;
use skopa_inspect::registry::Registry;

use crate::output;

/// Arguments for the `evaluate` command.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Run only the check with this id (see `skopa checks`).
    #[arg(long)]
    pub check: Option<String>,

    /// Emit the reports as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `evaluate` command.
///
/// Runs all registered checks, or a single one when `--check` is given,
/// and renders their findings. Warnings are data, not failures: the exit
/// status is 0 whenever the evaluation itself completes.
///
/// # Errors
///
/// Returns an error when `--check` names an unknown id or JSON
/// serialization fails.
pub fn execute(args: &EvaluateArgs) -> anyhow::Result<()> {
    tracing::info!(check = args.check.as_deref(), "evaluating security checks");
    let registry = Registry::builtin();

    let reports = match &args.check {
        Some(id) => vec![registry.run(id).map_err(|e| anyhow::anyhow!("{e}"))?],
        None => registry.run_all(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        println!("{} [{}]", report.id, report.category);
        for finding in &report.findings {
            println!("{}", output::render_finding(finding));
        }
    }
    println!("{}", output::summarize(&reports));

    Ok(())
}
