//! Error taxonomy for the bridge
//!
//! Every failure is terminal for the invocation. The binary prints the
//! `Display` form behind an `Error: ` prefix and exits with status 1.

use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures while loading the cluster configuration file
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    #[snafu(display("Please specify {var} env variable"))]
    MissingVar { var: &'static str },

    #[snafu(display("Failed to read {}: {source}", path.display()))]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to parse {}: {source}", path.display()))]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("{source}"), context(false))]
    Config { source: ConfigError },

    #[snafu(display("{} is not running", capitalize(app)))]
    NotRunning { app: String },

    #[snafu(display("Unexpected status code: {status}"))]
    UnexpectedStatus { status: u16 },

    /// Marathon answered 200 but did not describe the app
    #[snafu(display("{message}"))]
    Api { message: String },

    #[snafu(display("Failed to reach Marathon at {url}: {source}"))]
    Request { url: String, source: reqwest::Error },

    #[snafu(display("This command requires Java to be installed. Please install JRE"))]
    RuntimeNotFound,

    #[snafu(display("{pattern} not found in {location}"))]
    ArtifactNotFound { pattern: String, location: String },

    #[snafu(display("Failed to execute {}: {source}", program.display()))]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to relay output of delegated process: {source}"))]
    Relay { source: std::io::Error },
}

/// `kafka` -> `Kafka`, for messages naming a Marathon app id
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
