//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test loading profiles from fixture files.
//! - Test read and parse error reporting.
//! - Test environment/default path resolution.
//!
//! Does NOT handle:
//! - Line-level parser behavior (tested in parser.rs).
//! - Query semantics on an already built Config (tested in types/config.rs).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Profile file used across loader tests.
pub const EXAMPLE_CONFIG: &str = "# an example profile file
[default]
region=us-west-2
output=json

[profile user2]
region=us-east-1
output=text

[profile withsource]
source_profile=user2
region=us-east-1

[profile withmfa]
source_profile=user2
role_arn=arn:aws:iam::4451234513441615400570:role/aws_admin
mfa_serial=arn:aws:iam::1234513441:mfa/blah
region=us-east-1
";

/// Writes `contents` to a `config` file inside `dir`.
pub fn write_config_file(dir: &Path, contents: &str) -> PathBuf {
    let config_path = dir.join("config");
    std::fs::write(&config_path, contents).unwrap();
    config_path
}
