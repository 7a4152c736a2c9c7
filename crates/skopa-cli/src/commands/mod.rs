//! CLI command definitions and dispatch.

pub mod checks;
pub mod evaluate;
pub mod ps;

use clap::{Parser, Subcommand};

/// skopa — read-only container security-posture inspector.
#[derive(Parser, Debug)]
#[command(name = "skopa", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the registered security checks and report findings.
    Evaluate(evaluate::EvaluateArgs),
    /// List the registered checks without running them.
    Checks(checks::ChecksArgs),
    /// List visible processes (user, pid, ppid, executable).
    Ps(ps::PsArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Evaluate(args) => evaluate::execute(&args),
        Command::Checks(args) => checks::execute(&args),
        Command::Ps(args) => ps::execute(&args),
    }
}
