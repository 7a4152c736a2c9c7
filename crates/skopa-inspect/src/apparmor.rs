//! AppArmor probe: build option, boot parameters, runtime flag, profile.
//!
//! Four independently sourced tiers, emitted in a fixed order. No single
//! unreadable source suppresses the others, so a partially locked-down
//! environment still yields a full picture.

use std::fs;
use std::path::Path;

use skopa_common::constants;
use skopa_common::finding::Finding;

use crate::attr;
use crate::kconfig;

/// Outcome of scanning the kernel command line for AppArmor parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootParam {
    /// `apparmor=1` or `security=apparmor` present.
    Enabled,
    /// `apparmor=0` present without an enabling parameter.
    Disabled,
    /// No explicit AppArmor parameter.
    NotSpecified,
}

/// Classifies the kernel command line.
///
/// Substring checks are deliberately permissive of token boundaries, and
/// the enabling parameters win over `apparmor=0` when both appear.
#[must_use]
pub fn classify_cmdline(cmdline: &str) -> BootParam {
    if cmdline.contains("apparmor=1") || cmdline.contains("security=apparmor") {
        BootParam::Enabled
    } else if cmdline.contains("apparmor=0") {
        BootParam::Disabled
    } else {
        BootParam::NotSpecified
    }
}

fn build_option_finding() -> Finding {
    // Absence of the key is informationally different from a confirmed "n".
    kconfig::resolve_option(constants::CONFIG_SECURITY_APPARMOR).map_or_else(
        || Finding::info("AppArmor: kernel config not available"),
        |value| {
            Finding::info(format!(
                "AppArmor: kernel config {}={value}",
                constants::CONFIG_SECURITY_APPARMOR
            ))
        },
    )
}

fn boot_param_finding() -> Finding {
    match fs::read_to_string(constants::PROC_CMDLINE) {
        Ok(cmdline) => match classify_cmdline(&cmdline) {
            BootParam::Enabled => Finding::info(format!(
                "AppArmor: enabled via boot parameters ({})",
                cmdline.trim()
            )),
            BootParam::Disabled => {
                Finding::warn("AppArmor: disabled via boot parameter apparmor=0")
            }
            BootParam::NotSpecified => {
                Finding::info("AppArmor: no explicit AppArmor boot parameter found")
            }
        },
        Err(err) => Finding::info(format!(
            "AppArmor: unable to read {}: {err}",
            constants::PROC_CMDLINE
        )),
    }
}

fn runtime_finding() -> Finding {
    match fs::read_to_string(constants::APPARMOR_ENABLED) {
        Ok(flag) if flag.trim() == "Y" => Finding::info("AppArmor: module is enabled (runtime)"),
        Ok(_) => Finding::warn("AppArmor: module is loaded but disabled (runtime)"),
        Err(_) => Finding::warn("AppArmor: module not loaded"),
    }
}

fn profile_finding() -> Finding {
    match attr::read_label(Path::new(constants::PROC_SELF_ATTR_CURRENT)) {
        None => Finding::info("AppArmor: unable to read container profile"),
        Some(label) if label.is_empty() || label == "unconfined" => {
            Finding::warn("AppArmor: container is unconfined (no profile attached)")
        }
        Some(label) => Finding::info(format!("AppArmor: container profile: {label}")),
    }
}

/// Reports AppArmor state across all four tiers.
#[must_use]
pub fn check_apparmor() -> Vec<Finding> {
    vec![
        build_option_finding(),
        boot_param_finding(),
        runtime_finding(),
        profile_finding(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apparmor_1_enables_via_boot() {
        assert_eq!(
            classify_cmdline("BOOT_IMAGE=/vmlinuz root=/dev/sda1 apparmor=1 ro"),
            BootParam::Enabled
        );
    }

    #[test]
    fn security_apparmor_enables_via_boot() {
        assert_eq!(
            classify_cmdline("BOOT_IMAGE=/vmlinuz security=apparmor ro"),
            BootParam::Enabled
        );
    }

    #[test]
    fn apparmor_0_disables_via_boot() {
        assert_eq!(
            classify_cmdline("BOOT_IMAGE=/vmlinuz apparmor=0 ro"),
            BootParam::Disabled
        );
    }

    #[test]
    fn no_parameter_is_not_specified() {
        assert_eq!(
            classify_cmdline("BOOT_IMAGE=/vmlinuz root=/dev/sda1 ro quiet"),
            BootParam::NotSpecified
        );
    }

    #[test]
    fn enabling_parameter_wins_over_disable() {
        assert_eq!(
            classify_cmdline("security=apparmor apparmor=0"),
            BootParam::Enabled
        );
    }

    #[test]
    fn probe_emits_exactly_four_findings() {
        assert_eq!(check_apparmor().len(), 4);
    }
}
