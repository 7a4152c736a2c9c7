//! # skopa — container security-posture inspector
//!
//! Read-only diagnostics for the current process: namespace isolation,
//! seccomp, SELinux, AppArmor, and kernel build configuration.

mod commands;
mod output;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
        )
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
