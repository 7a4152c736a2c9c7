//! The finding data model emitted by every probe.
//!
//! Probes return structured [`Finding`]s instead of printing; the caller
//! decides how to render them. This keeps the probes testable without
//! capturing console output.

use std::fmt;

use serde::Serialize;

/// How much a finding should concern the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral observation, including "unable to determine".
    Info,
    /// The finding indicates weakened or absent isolation.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warn"),
        }
    }
}

/// A single observation produced by a security probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Severity classification.
    pub severity: Severity,
    /// Human-readable status line.
    pub message: String,
}

impl Finding {
    /// Creates an informational finding.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    /// Creates a warning finding.
    #[must_use]
    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_displays_short_form() {
        assert_eq!(Severity::Info.to_string(), "info");
        assert_eq!(Severity::Warning.to_string(), "warn");
    }

    #[test]
    fn finding_displays_severity_and_message() {
        let finding = Finding::warn("pid: NOT isolated");
        assert_eq!(finding.to_string(), "[warn] pid: NOT isolated");
    }
}
