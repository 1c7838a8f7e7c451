//! Launch the kafka-mesos jar and relay its outcome

use super::artifact::{KAFKA_MESOS_JAR, find_artifact};
use super::runtime::find_runtime;
use crate::env::HostEnv;
use crate::error::{RelaySnafu, Result, SpawnSnafu};
use crate::locator::EndpointResolver;
use snafu::ResultExt;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Variable telling kafka-mesos to act as a CLI client, not a scheduler
pub const NO_SCHEDULER_VAR: &str = "KM_NO_SCHEDULER";
/// Variable carrying the scheduler API endpoint
pub const API_VAR: &str = "KM_API";

/// The complete environment of the delegated process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionEnv {
    vars: BTreeMap<String, String>,
}

impl ExecutionEnv {
    fn new() -> Self {
        let mut vars = BTreeMap::new();
        vars.insert(NO_SCHEDULER_VAR.to_string(), "true".to_string());
        Self { vars }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Fully prepared child invocation
#[derive(Debug, Clone)]
pub struct Launch {
    pub runtime: PathBuf,
    pub args: Vec<OsString>,
    pub env: ExecutionEnv,
}

impl Launch {
    /// `[runtime, "-jar", artifact, ...args]`
    pub fn command_line(&self) -> Vec<OsString> {
        std::iter::once(self.runtime.clone().into_os_string())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

/// Captured outcome of the delegated process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub code: i32,
}

pub struct DelegateRunner<'a> {
    env: &'a HostEnv,
}

impl<'a> DelegateRunner<'a> {
    pub fn new(env: &'a HostEnv) -> Self {
        Self { env }
    }

    /// Locate runtime and jar, then build the environment.
    ///
    /// The endpoint is only resolved after both files are found, and never
    /// for help invocations.
    pub fn prepare(
        &self,
        args: &[OsString],
        is_help: bool,
        resolver: &dyn EndpointResolver,
    ) -> Result<Launch> {
        let runtime = find_runtime(self.env)?;
        let artifact = find_artifact(self.env.resource_dir.as_deref(), KAFKA_MESOS_JAR)?;

        let mut env = ExecutionEnv::new();
        if !is_help {
            let endpoint = resolver.resolve_endpoint()?;
            env.vars.insert(API_VAR.to_string(), endpoint);
        }

        let mut jar_args = vec![OsString::from("-jar"), artifact.into_os_string()];
        jar_args.extend(args.iter().cloned());

        Ok(Launch {
            runtime,
            args: jar_args,
            env,
        })
    }

    /// Run the child to completion with captured output. No timeout is applied.
    pub fn execute(&self, launch: &Launch) -> Result<ProcessResult> {
        info!(
            runtime = %launch.runtime.display(),
            args = ?launch.args,
            "delegating to kafka-mesos"
        );

        let output = duct::cmd(&launch.runtime, &launch.args)
            .full_env(launch.env.vars())
            .stdout_capture()
            .stderr_capture()
            .unchecked()
            .run()
            .context(SpawnSnafu {
                program: &launch.runtime,
            })?;

        let code = output.status.code().unwrap_or(1);
        debug!(code, "delegated process exited");

        Ok(ProcessResult {
            stdout: output.stdout,
            stderr: output.stderr,
            code,
        })
    }

    /// Prepare, execute and relay; returns the child's exit code
    pub fn delegate(
        &self,
        args: &[OsString],
        is_help: bool,
        resolver: &dyn EndpointResolver,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<i32> {
        let launch = self.prepare(args, is_help, resolver)?;
        let result = self.execute(&launch)?;
        relay(&result, stdout, stderr)?;
        Ok(result.code)
    }
}

/// Write captured output verbatim to the caller's streams
pub fn relay(result: &ProcessResult, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<()> {
    stdout.write_all(&result.stdout).context(RelaySnafu)?;
    stdout.flush().context(RelaySnafu)?;
    stderr.write_all(&result.stderr).context(RelaySnafu)?;
    stderr.flush().context(RelaySnafu)?;
    Ok(())
}
