//! `dcos-kafka` - DC/OS subcommand for Kafka on Mesos
//!
//! Answers `--info`, `--version` and `--config-schema` locally; everything
//! else runs through the kafka-mesos jar. Exits with the jar's exit code,
//! or 1 after printing `Error: <message>` when delegation fails.

use anyhow::{Context, Result};
use clap::Parser;
use kafka_bridge::{Cli, DelegateRunner, HostEnv, Invocation, Locator};
use std::io::Write;
use std::process::exit;

/// Log filter variable; logs go to stderr and default to warnings only
const LOG_ENV: &str = "DCOS_KAFKA_LOG";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn")).init();

    let invocation = Cli::parse().into_invocation();

    match run(invocation) {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            exit(1);
        }
    }
}

fn run(invocation: Invocation) -> Result<i32> {
    match invocation {
        Invocation::Delegate { args, is_help } => {
            let host = HostEnv::capture();
            let locator = Locator::new(host.config_path.clone());
            let runner = DelegateRunner::new(&host);

            let code = runner.delegate(
                &args,
                is_help,
                &locator,
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
            )?;
            Ok(code)
        }
        local => {
            let text = local.local_output().unwrap_or_default();
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}").context("Failed to write to stdout")?;
            Ok(0)
        }
    }
}
