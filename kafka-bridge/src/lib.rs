//! DC/OS Kafka CLI bridge
//!
//! Finds the Kafka scheduler through Marathon and hands the command line to
//! the bundled kafka-mesos jar, with the scheduler endpoint in `KM_API`.

pub mod cli;
pub mod config;
pub mod delegate;
pub mod env;
pub mod error;
pub mod locator;

pub use cli::{Cli, Invocation};
pub use config::{ClusterConfig, MarathonConfig};
pub use delegate::{DelegateRunner, ExecutionEnv, ProcessResult};
pub use env::HostEnv;
pub use error::{ConfigError, Error, Result};
pub use locator::{AppDescriptor, EndpointResolver, Locator, TaskInstance};
