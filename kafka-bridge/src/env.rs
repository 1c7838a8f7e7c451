//! Snapshot of the process environment
//!
//! Everything the bridge reads from the environment is captured once at
//! startup and handed to the locator and delegate runner explicitly.

use std::ffi::OsString;
use std::path::PathBuf;

/// Path of the DC/OS CLI configuration file
pub const CONFIG_VAR: &str = "DCOS_CONFIG";
pub const JAVA_HOME_VAR: &str = "JAVA_HOME";
pub const PATH_VAR: &str = "PATH";
/// Overrides the directory searched for the bundled jar
pub const RESOURCES_VAR: &str = "DCOS_KAFKA_RESOURCES";

#[derive(Debug, Clone, Default)]
pub struct HostEnv {
    pub config_path: Option<PathBuf>,
    pub java_home: Option<PathBuf>,
    pub search_path: Option<OsString>,
    pub resource_dir: Option<PathBuf>,
}

impl HostEnv {
    /// Read the variables of interest from the current process
    pub fn capture() -> Self {
        let resource_dir = std::env::var_os(RESOURCES_VAR)
            .map(PathBuf::from)
            .or_else(executable_dir);

        Self {
            config_path: std::env::var_os(CONFIG_VAR).map(PathBuf::from),
            java_home: std::env::var_os(JAVA_HOME_VAR).map(PathBuf::from),
            search_path: std::env::var_os(PATH_VAR),
            resource_dir,
        }
    }
}

/// Directory holding the running binary; the jar ships next to it
fn executable_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
}
