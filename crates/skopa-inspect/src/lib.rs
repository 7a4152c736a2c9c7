//! # skopa-inspect
//!
//! Read-only probes that determine whether Linux isolation mechanisms are
//! present and active for the current process:
//!
//! - **Namespaces**: compares PID 1 and self namespace identities.
//! - **Seccomp**: current enforcement mode and kernel build support.
//! - **SELinux**: enforcement state and current process label.
//! - **AppArmor**: build option, boot parameters, runtime flag, profile.
//! - **Kernel config**: locates and scans the running kernel's build
//!   configuration from `/proc/config.gz` or `/boot/config-<release>`.
//!
//! Every probe is stateless, side-effect-free, and safe to call from any
//! single thread. Filesystem failures degrade to reported findings; no
//! probe ever aborts an inspection pass.

pub mod apparmor;
mod attr;
pub mod kconfig;
pub mod namespace;
pub mod registry;
pub mod seccomp;
pub mod selinux;
