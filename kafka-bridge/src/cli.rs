//! Command line surface of `dcos-kafka`
//!
//! Arguments belong to kafka-mesos, so clap only collects them raw. The
//! three local flags are answered here; help flags are folded into a
//! `help` positional.

use clap::Parser;
use std::ffi::OsString;

/// DC/OS passes its subcommand name as the first argument
pub const SUBCOMMAND: &str = "kafka";
pub const INFO: &str = "Start and manage Kafka brokers";
pub const CONFIG_SCHEMA: &str = "{}";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(
    name = "dcos-kafka",
    about = INFO,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Arguments forwarded to kafka-mesos, byte for byte
    ///
    /// clap still treats a `--` in first position as its own end of options
    /// marker and drops it; later occurrences are forwarded.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

/// What a single run of the binary has to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Info,
    Version,
    ConfigSchema,
    Delegate { args: Vec<OsString>, is_help: bool },
}

impl Cli {
    pub fn into_invocation(self) -> Invocation {
        let mut args = self.args;
        if args.first().is_some_and(|a| a == SUBCOMMAND) {
            args.remove(0);
        }
        Invocation::from_args(args)
    }
}

impl Invocation {
    pub fn from_args(mut args: Vec<OsString>) -> Self {
        if let [only] = args.as_slice() {
            match only.to_str() {
                Some("--info") => return Self::Info,
                Some("--version") => return Self::Version,
                Some("--config-schema") => return Self::ConfigSchema,
                _ => {}
            }
        }

        let mut is_help = false;
        for flag in ["--help", "-h"] {
            if let Some(pos) = args.iter().position(|a| a == flag) {
                args.remove(pos);
                is_help = true;
            }
        }
        if is_help {
            args.insert(0, OsString::from("help"));
        }

        Self::Delegate { args, is_help }
    }

    /// Output of the invocations answered without discovery or delegation
    pub fn local_output(&self) -> Option<&'static str> {
        match self {
            Self::Info => Some(INFO),
            Self::Version => Some(VERSION),
            Self::ConfigSchema => Some(CONFIG_SCHEMA),
            Self::Delegate { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<OsString> {
        raw.iter().map(|s| OsString::from(*s)).collect()
    }

    fn parse(raw: &[&str]) -> Invocation {
        let argv = std::iter::once("dcos-kafka").chain(raw.iter().copied());
        Cli::parse_from(argv).into_invocation()
    }

    #[test]
    fn test_local_flags() {
        assert_eq!(parse(&["kafka", "--info"]), Invocation::Info);
        assert_eq!(parse(&["kafka", "--version"]), Invocation::Version);
        assert_eq!(parse(&["kafka", "--config-schema"]), Invocation::ConfigSchema);
        assert_eq!(parse(&["--version"]), Invocation::Version);
        assert_eq!(Invocation::ConfigSchema.local_output(), Some("{}"));
    }

    #[test]
    fn test_local_flags_only_when_alone() {
        assert_eq!(
            parse(&["kafka", "broker", "--version"]),
            Invocation::Delegate {
                args: args(&["broker", "--version"]),
                is_help: false
            }
        );
    }

    #[test]
    fn test_help_flag_becomes_positional() {
        assert_eq!(
            parse(&["kafka", "broker", "--help"]),
            Invocation::Delegate {
                args: args(&["help", "broker"]),
                is_help: true
            }
        );
        assert_eq!(
            parse(&["kafka", "-h", "broker", "add", "--help"]),
            Invocation::Delegate {
                args: args(&["help", "broker", "add"]),
                is_help: true
            }
        );
    }

    #[test]
    fn test_help_removes_single_occurrence_of_each_flag() {
        assert_eq!(
            Invocation::from_args(args(&["--help", "topic", "--help"])),
            Invocation::Delegate {
                args: args(&["help", "topic", "--help"]),
                is_help: true
            }
        );
    }

    #[test]
    fn test_passthrough_keeps_hyphenated_args() {
        assert_eq!(
            parse(&["kafka", "broker", "add", "0..2", "--cpus", "2", "--heap=1024"]),
            Invocation::Delegate {
                args: args(&["broker", "add", "0..2", "--cpus", "2", "--heap=1024"]),
                is_help: false
            }
        );
    }

    #[test]
    fn test_empty_invocation() {
        assert_eq!(
            parse(&[]),
            Invocation::Delegate {
                args: Vec::new(),
                is_help: false
            }
        );
    }

    #[test]
    fn test_double_dash_after_first_value_is_forwarded() {
        assert_eq!(
            parse(&["kafka", "topic", "add", "--", "-weird-name"]),
            Invocation::Delegate {
                args: args(&["topic", "add", "--", "-weird-name"]),
                is_help: false
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_args_pass_through() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"caf\xe9".to_vec());
        let argv = vec![
            OsString::from("dcos-kafka"),
            OsString::from("kafka"),
            OsString::from("topic"),
            raw.clone(),
        ];
        assert_eq!(
            Cli::parse_from(argv).into_invocation(),
            Invocation::Delegate {
                args: vec![OsString::from("topic"), raw],
                is_help: false
            }
        );
    }
}
