//! Kernel build configuration resolver.
//!
//! Kernel configs are not always exposed at runtime: `/proc/config.gz`
//! exists only when the kernel was built with `CONFIG_IKCONFIG_PROC=y`.
//! The resolver tries the compressed snapshot first and falls back to the
//! boot-partition copy keyed by the running kernel release. Each call is
//! independent and idempotent; there is no cache and no retry.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use flate2::read::GzDecoder;
use skopa_common::constants;

/// Value of a kernel build option as recorded in the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// `y` — enabled and compiled into the kernel.
    BuiltIn,
    /// `m` — enabled as a loadable module.
    Module,
    /// `n` — explicitly disabled (`# KEY is not set`).
    Disabled,
    /// Any other literal, e.g. a quoted string or numeric value.
    Other(String),
}

impl ConfigValue {
    fn from_raw(raw: &str) -> Self {
        match raw {
            "y" => Self::BuiltIn,
            "m" => Self::Module,
            "n" => Self::Disabled,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltIn => write!(f, "y"),
            Self::Module => write!(f, "m"),
            Self::Disabled => write!(f, "n"),
            Self::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// Checks whether a kernel config line sets the given key.
///
/// Two shapes match: `KEY=VALUE` yields the value verbatim, and the
/// comment convention `# KEY is not set` yields [`ConfigValue::Disabled`].
/// Anything else, including lines with extra surrounding whitespace, does
/// not match.
#[must_use]
pub fn match_config_line(line: &str, key: &str) -> Option<ConfigValue> {
    if let Some(raw) = line.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')) {
        return Some(ConfigValue::from_raw(raw));
    }
    if line
        .strip_prefix("# ")
        .and_then(|rest| rest.strip_suffix(" is not set"))
        == Some(key)
    {
        return Some(ConfigValue::Disabled);
    }
    None
}

/// Outcome of consulting a single config source.
enum SourceOutcome {
    /// The source was readable and contained the key.
    Found(ConfigValue),
    /// The source was readable but the key never appeared.
    Absent,
    /// The source could not be opened or decoded.
    Unavailable,
}

/// Locations of the kernel configuration sources.
///
/// The defaults point at the live system; tests substitute fixture paths.
#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Compressed snapshot, normally `/proc/config.gz`.
    pub gz_path: PathBuf,
    /// Kernel release file, normally `/proc/sys/kernel/osrelease`.
    pub osrelease_path: PathBuf,
    /// Directory holding `config-<release>`, normally `/boot`.
    pub boot_dir: PathBuf,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            gz_path: PathBuf::from(constants::PROC_CONFIG_GZ),
            osrelease_path: PathBuf::from(constants::PROC_OSRELEASE),
            boot_dir: PathBuf::from(constants::BOOT_CONFIG_DIR),
        }
    }
}

impl KernelConfig {
    /// Resolves a kernel build option to its configured value.
    ///
    /// Sources are tried in order: the compressed snapshot, then the
    /// boot-partition file. A snapshot that opens and decodes cleanly is
    /// authoritative even when the key is absent from it; only an
    /// open/decode failure advances to the fallback. `None` means the key
    /// was not found anywhere, which is distinct from a confirmed
    /// [`ConfigValue::Disabled`].
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<ConfigValue> {
        match self.from_compressed(key) {
            SourceOutcome::Found(value) => Some(value),
            SourceOutcome::Absent => None,
            SourceOutcome::Unavailable => {
                tracing::debug!(path = %self.gz_path.display(), "compressed config unavailable, trying boot config");
                self.from_boot(key)
            }
        }
    }

    fn from_compressed(&self, key: &str) -> SourceOutcome {
        let Ok(file) = File::open(&self.gz_path) else {
            return SourceOutcome::Unavailable;
        };
        let reader = BufReader::new(GzDecoder::new(file));
        match scan(reader, key) {
            Ok(Some(value)) => SourceOutcome::Found(value),
            Ok(None) => SourceOutcome::Absent,
            // Decode errors surface on read; treat the source as corrupt.
            Err(_) => SourceOutcome::Unavailable,
        }
    }

    fn from_boot(&self, key: &str) -> Option<ConfigValue> {
        let release = std::fs::read_to_string(&self.osrelease_path).ok()?;
        let path = self.boot_dir.join(format!("config-{}", release.trim()));
        let file = File::open(&path).ok()?;
        scan(BufReader::new(file), key).ok()?
    }
}

/// Scans a config source line-by-line, returning the first match.
fn scan<R: BufRead>(reader: R, key: &str) -> io::Result<Option<ConfigValue>> {
    for line in reader.lines() {
        if let Some(value) = match_config_line(&line?, key) {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Resolves a kernel build option against the live system sources.
#[must_use]
pub fn resolve_option(key: &str) -> Option<ConfigValue> {
    KernelConfig::default().resolve(key)
}
