//! Seccomp enforcement and kernel-support probes.
//!
//! The enforcement mode is read from the `Seccomp:` field of
//! `/proc/self/status`. The presence of that field at all is the primary
//! kernel-support signal; the kernel config option is a corroborating one.

use std::fmt;
use std::fs;

use skopa_common::constants;
use skopa_common::finding::Finding;

use crate::kconfig;

/// Seccomp state parsed from a process status file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeccompStatus {
    /// Mode 0: no syscall filtering.
    Disabled,
    /// Mode 1: fixed allow-list.
    Strict,
    /// Mode 2: programmable BPF filter.
    Filter,
    /// A mode token outside 0/1/2.
    Unknown(String),
    /// A `Seccomp:` line with no mode token.
    Malformed,
    /// No `Seccomp:` field in the status file at all.
    Absent,
}

impl fmt::Display for SeccompStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::Strict => write!(f, "strict mode (1)"),
            Self::Filter => write!(f, "filter mode (2)"),
            Self::Unknown(token) => write!(f, "unknown value {token}"),
            Self::Malformed => write!(f, "malformed Seccomp line"),
            Self::Absent => write!(f, "field not found"),
        }
    }
}

/// Extracts the seccomp mode from status-file text.
///
/// The scan stops at the first `Seccomp:` line, malformed or not; status
/// files do not carry duplicate fields.
#[must_use]
pub fn parse_status(status: &str) -> SeccompStatus {
    for line in status.lines() {
        if line.starts_with("Seccomp:") {
            let Some(token) = line.split_whitespace().nth(1) else {
                return SeccompStatus::Malformed;
            };
            return match token {
                "0" => SeccompStatus::Disabled,
                "1" => SeccompStatus::Strict,
                "2" => SeccompStatus::Filter,
                other => SeccompStatus::Unknown(other.to_string()),
            };
        }
    }
    SeccompStatus::Absent
}

fn status_finding(status: &SeccompStatus) -> Finding {
    match status {
        SeccompStatus::Disabled => Finding::warn("Seccomp: disabled"),
        SeccompStatus::Absent => Finding::info(format!(
            "Seccomp: field not found in {} (kernel may not support Seccomp)",
            constants::PROC_SELF_STATUS
        )),
        other => Finding::info(format!("Seccomp: {other}")),
    }
}

/// Reports the current process's seccomp enforcement mode.
#[must_use]
pub fn check_seccomp_status() -> Vec<Finding> {
    match fs::read_to_string(constants::PROC_SELF_STATUS) {
        Ok(status) => vec![status_finding(&parse_status(&status))],
        Err(err) => vec![Finding::info(format!(
            "Seccomp: unable to read {}: {err}",
            constants::PROC_SELF_STATUS
        ))],
    }
}

/// Reports whether the running kernel was built with seccomp support.
///
/// Emits the status-field signal and, when the kernel config is
/// resolvable, the literal `CONFIG_SECCOMP` value as a second finding.
/// The two signals are independent; neither overrides the other.
#[must_use]
pub fn check_seccomp_kernel_support() -> Vec<Finding> {
    let mut findings = Vec::new();

    match fs::read_to_string(constants::PROC_SELF_STATUS) {
        Ok(status) if status.contains("Seccomp:") => {
            findings.push(Finding::info("Seccomp: kernel supports Seccomp"));
        }
        Ok(_) => findings.push(Finding::warn("Seccomp: kernel does NOT support Seccomp")),
        Err(err) => findings.push(Finding::info(format!(
            "Seccomp: unable to read {}: {err}",
            constants::PROC_SELF_STATUS
        ))),
    }

    if let Some(value) = kconfig::resolve_option(constants::CONFIG_SECCOMP) {
        findings.push(Finding::info(format!(
            "Seccomp: kernel config {}={value}",
            constants::CONFIG_SECCOMP
        )));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS_FILTER: &str = "Name:\tcat\nUmask:\t0022\nSeccomp:\t2\nSeccomp_filters:\t1\n";

    #[test]
    fn parses_filter_mode() {
        assert_eq!(parse_status(STATUS_FILTER), SeccompStatus::Filter);
    }

    #[test]
    fn parses_disabled_and_strict() {
        assert_eq!(parse_status("Seccomp:\t0\n"), SeccompStatus::Disabled);
        assert_eq!(parse_status("Seccomp:\t1\n"), SeccompStatus::Strict);
    }

    #[test]
    fn unexpected_token_is_reported_verbatim() {
        assert_eq!(
            parse_status("Seccomp:\t9\n"),
            SeccompStatus::Unknown("9".to_string())
        );
    }

    #[test]
    fn line_without_mode_token_is_malformed() {
        assert_eq!(parse_status("Seccomp:\n"), SeccompStatus::Malformed);
    }

    #[test]
    fn missing_field_is_absent_not_disabled() {
        let status = parse_status("Name:\tcat\nUmask:\t0022\n");
        assert_eq!(status, SeccompStatus::Absent);
        assert_ne!(
            status_finding(&status),
            status_finding(&SeccompStatus::Disabled)
        );
    }

    #[test]
    fn disabled_is_a_warning() {
        use skopa_common::finding::Severity;
        assert_eq!(
            status_finding(&SeccompStatus::Disabled).severity,
            Severity::Warning
        );
        assert_eq!(
            status_finding(&SeccompStatus::Filter).severity,
            Severity::Info
        );
    }
}
