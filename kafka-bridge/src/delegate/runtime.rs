//! Java runtime discovery
//!
//! Looks in `$JAVA_HOME/bin` first, then walks `PATH` in order.

use crate::env::HostEnv;
use crate::error::{Result, RuntimeNotFoundSnafu};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(windows)]
pub const RUNTIME_NAME: &str = "java.exe";
#[cfg(not(windows))]
pub const RUNTIME_NAME: &str = "java";

/// Locate the `java` executable for the delegated jar
pub fn find_runtime(env: &HostEnv) -> Result<PathBuf> {
    if let Some(home) = &env.java_home {
        let candidate = home.join("bin").join(RUNTIME_NAME);
        if is_executable(&candidate) {
            debug!(path = %candidate.display(), "using java from JAVA_HOME");
            return Ok(candidate);
        }
    }

    if let Some(search_path) = &env.search_path {
        if let Some(found) = find_in_search_path(search_path, RUNTIME_NAME) {
            debug!(path = %found.display(), "using java from PATH");
            return Ok(found);
        }
    }

    RuntimeNotFoundSnafu.fail()
}

/// First executable called `name` in the directories of a PATH-style value
pub fn find_in_search_path(search_path: &OsStr, name: &str) -> Option<PathBuf> {
    std::env::split_paths(search_path)
        .map(|dir| unquote(&dir).join(name))
        .find(|candidate| is_executable(candidate))
}

/// PATH entries are sometimes written with surrounding double quotes
fn unquote(dir: &Path) -> PathBuf {
    match dir.to_str() {
        Some(raw) => PathBuf::from(raw.trim_matches('"')),
        None => dir.to_path_buf(),
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
