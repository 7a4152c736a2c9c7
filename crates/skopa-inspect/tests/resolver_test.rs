//! Integration tests for the kernel config resolver's source fallback
//! chain, exercised against temporary fixture files.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;
use std::io::Write;
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use skopa_inspect::kconfig::{ConfigValue, KernelConfig};
use tempfile::TempDir;

const RELEASE: &str = "6.8.0-test";

fn write_gz(path: &Path, content: &str) {
    let file = fs::File::create(path).expect("create gz fixture");
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(content.as_bytes()).expect("write gz");
    let _ = encoder.finish().expect("finish gz");
}

fn fixture(dir: &TempDir) -> KernelConfig {
    let osrelease = dir.path().join("osrelease");
    fs::write(&osrelease, format!("{RELEASE}\n")).expect("write osrelease");
    KernelConfig {
        gz_path: dir.path().join("config.gz"),
        osrelease_path: osrelease,
        boot_dir: dir.path().to_path_buf(),
    }
}

#[test]
fn compressed_source_takes_priority_over_boot_config() {
    let dir = TempDir::new().expect("tempdir");
    let config = fixture(&dir);

    write_gz(&config.gz_path, "# comment\nCONFIG_SECCOMP=y\n");
    fs::write(
        config.boot_dir.join(format!("config-{RELEASE}")),
        "# CONFIG_SECCOMP is not set\n",
    )
    .expect("write boot config");

    assert_eq!(
        config.resolve("CONFIG_SECCOMP"),
        Some(ConfigValue::BuiltIn)
    );
}

#[test]
fn readable_compressed_source_without_key_is_terminal() {
    let dir = TempDir::new().expect("tempdir");
    let config = fixture(&dir);

    write_gz(&config.gz_path, "CONFIG_OTHER=m\n");
    fs::write(
        config.boot_dir.join(format!("config-{RELEASE}")),
        "CONFIG_SECCOMP=y\n",
    )
    .expect("write boot config");

    // The fallback would match, but a healthy snapshot is authoritative.
    assert_eq!(config.resolve("CONFIG_SECCOMP"), None);
}

#[test]
fn corrupt_compressed_source_falls_back_to_boot_config() {
    let dir = TempDir::new().expect("tempdir");
    let config = fixture(&dir);

    fs::write(&config.gz_path, b"not gzip data at all").expect("write corrupt gz");
    fs::write(
        config.boot_dir.join(format!("config-{RELEASE}")),
        "CONFIG_SECURITY_APPARMOR=y\n# CONFIG_SECCOMP is not set\n",
    )
    .expect("write boot config");

    assert_eq!(
        config.resolve("CONFIG_SECURITY_APPARMOR"),
        Some(ConfigValue::BuiltIn)
    );
    assert_eq!(
        config.resolve("CONFIG_SECCOMP"),
        Some(ConfigValue::Disabled)
    );
}

#[test]
fn missing_sources_resolve_to_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let config = fixture(&dir);

    // Neither config.gz nor config-<release> exists.
    assert_eq!(config.resolve("CONFIG_SECCOMP"), None);
}

#[test]
fn unreadable_osrelease_fails_resolution_quietly() {
    let dir = TempDir::new().expect("tempdir");
    let config = KernelConfig {
        gz_path: dir.path().join("config.gz"),
        osrelease_path: dir.path().join("missing-osrelease"),
        boot_dir: dir.path().to_path_buf(),
    };

    assert_eq!(config.resolve("CONFIG_SECCOMP"), None);
}

#[test]
fn module_and_literal_values_survive_resolution() {
    let dir = TempDir::new().expect("tempdir");
    let config = fixture(&dir);

    write_gz(
        &config.gz_path,
        "CONFIG_NF_NAT=m\nCONFIG_DEFAULT_HOSTNAME=\"(none)\"\n",
    );

    assert_eq!(config.resolve("CONFIG_NF_NAT"), Some(ConfigValue::Module));
    assert_eq!(
        config.resolve("CONFIG_DEFAULT_HOSTNAME"),
        Some(ConfigValue::Other("\"(none)\"".to_string()))
    );
}
