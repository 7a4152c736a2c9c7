//! Pseudo-filesystem paths and kernel option keys read by the inspector.
//!
//! Every path here is Linux-specific and read-only; the inspector never
//! writes to any of them.

/// Compressed kernel configuration snapshot, present when the kernel was
/// built with `CONFIG_IKCONFIG_PROC=y`.
pub const PROC_CONFIG_GZ: &str = "/proc/config.gz";

/// Running kernel release string, used to locate the boot-partition config.
pub const PROC_OSRELEASE: &str = "/proc/sys/kernel/osrelease";

/// Directory holding `config-<release>` files written at kernel install.
pub const BOOT_CONFIG_DIR: &str = "/boot";

/// Status attributes of the current process, one `Field:\tvalue` per line.
pub const PROC_SELF_STATUS: &str = "/proc/self/status";

/// Kernel boot command line.
pub const PROC_CMDLINE: &str = "/proc/cmdline";

/// Current process security attribute (SELinux context or AppArmor profile).
pub const PROC_SELF_ATTR_CURRENT: &str = "/proc/self/attr/current";

/// SELinux enforcement flag, present only when selinuxfs is mounted.
pub const SELINUX_ENFORCE: &str = "/sys/fs/selinux/enforce";

/// AppArmor module runtime flag, "Y" when the module is enabled.
pub const APPARMOR_ENABLED: &str = "/sys/module/apparmor/parameters/enabled";

/// Kernel build option for seccomp support.
pub const CONFIG_SECCOMP: &str = "CONFIG_SECCOMP";

/// Kernel build option for the AppArmor security module.
pub const CONFIG_SECURITY_APPARMOR: &str = "CONFIG_SECURITY_APPARMOR";
