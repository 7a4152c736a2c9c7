//! Current-process security attribute (`/proc/self/attr/current`).
//!
//! The attribute holds the SELinux context or AppArmor profile of the
//! calling process. Kernels pad the value with a trailing NUL and sometimes
//! a newline; both are stripped before use.

use std::fs;
use std::path::Path;

/// Strips trailing NUL and newline bytes from a raw attribute value.
pub(crate) fn trim_label(raw: &[u8]) -> String {
    let end = raw
        .iter()
        .rposition(|&byte| byte != 0 && byte != b'\n')
        .map_or(0, |index| index + 1);
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

/// Reads and trims the security attribute, `None` when unreadable.
///
/// Absence is not an error: the attribute only exists when an LSM that
/// uses it is active.
pub(crate) fn read_label(path: &Path) -> Option<String> {
    fs::read(path).ok().map(|raw| trim_label(&raw))
}
