//! Delegation of CLI invocations to the kafka-mesos jar
//!
//! - Java runtime discovery (`JAVA_HOME`, then `PATH`)
//! - Bundled jar discovery in the resource directory
//! - Child process launch with a fresh environment and output relay

pub mod artifact;
pub mod runner;
pub mod runtime;

pub use artifact::{ArtifactPattern, KAFKA_MESOS_JAR, find_artifact};
pub use runner::{API_VAR, DelegateRunner, ExecutionEnv, Launch, NO_SCHEDULER_VAR, ProcessResult};
pub use runtime::find_runtime;
