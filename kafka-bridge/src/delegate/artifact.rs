//! Bundled jar discovery

use crate::error::{ArtifactNotFoundSnafu, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name prefix and suffix identifying an artifact family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactPattern {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

/// The kafka-mesos scheduler jar shipped alongside the binary
pub const KAFKA_MESOS_JAR: ArtifactPattern = ArtifactPattern {
    prefix: "kafka-mesos",
    suffix: ".jar",
};

impl ArtifactPattern {
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.starts_with(self.prefix) && file_name.ends_with(self.suffix)
    }
}

impl std::fmt::Display for ArtifactPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}*{}", self.prefix, self.suffix)
    }
}

/// Find the first file in `dir` matching `pattern`, in directory-listing order
pub fn find_artifact(dir: Option<&Path>, pattern: ArtifactPattern) -> Result<PathBuf> {
    let not_found = || {
        ArtifactNotFoundSnafu {
            pattern: pattern.to_string(),
            location: dir.map_or_else(
                || "package resources".to_string(),
                |d| d.display().to_string(),
            ),
        }
        .build()
    };

    let dir = dir.ok_or_else(not_found)?;
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "cannot list resource directory");
            return Err(not_found());
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let matched = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| pattern.matches(name));

        if matched && path.is_file() {
            debug!(path = %path.display(), "found artifact");
            return Ok(path);
        }
    }

    Err(not_found())
}
