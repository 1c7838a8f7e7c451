//! Cluster configuration read from the DC/OS CLI config file
//!
//! Only the `[marathon]` table is consumed; everything else in the file
//! belongs to other DC/OS subcommands and is ignored.

use crate::env::CONFIG_VAR;
use crate::error::{ConfigError, MissingVarSnafu, ParseSnafu, ReadSnafu};
use serde::Deserialize;
use snafu::{OptionExt, ResultExt};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClusterConfig {
    pub marathon: MarathonConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarathonConfig {
    pub host: String,
    pub port: u16,
}

impl ClusterConfig {
    /// Load from the path captured from `DCOS_CONFIG`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.context(MissingVarSnafu { var: CONFIG_VAR })?;
        Self::from_path(path)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let path = expand_path(path);
        debug!(path = %path.display(), "loading cluster config");

        let content = std::fs::read_to_string(&path).context(ReadSnafu { path: &path })?;
        Self::parse(&content, &path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).context(ParseSnafu { path })
    }

    /// Base URL of the Marathon REST API
    pub fn marathon_url(&self) -> String {
        format!("http://{}:{}", self.marathon.host, self.marathon.port)
    }
}

/// Expand a leading `~` to the home directory
fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
        None => path.to_path_buf(),
    }
}
