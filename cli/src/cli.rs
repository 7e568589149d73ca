//! CLI argument parsing with clap derive

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use crate::app::{AppContext, RunConfig};
use crate::domain::{ExecutionMode, RunSummary, SaError};
use crate::infra::command_runner::{DEFAULT_TRANSPORT, TRANSPORT_ENV};
use crate::infra::config::{CONFIG_ENV, default_hosts_path};
use crate::output::OutputContext;

/// Environment variable that, when present, skips the confirmation prompt.
pub const YES_ENV: &str = "SA_YES";

/// Run a shell command on many hosts, addressed directly or through groups
#[derive(Parser, Debug)]
#[command(name = "sa", version)]
pub struct Cli {
    /// Command to run
    #[arg(short, long)]
    pub command: Option<String>,

    /// User to connect as
    #[arg(short, long)]
    pub username: Option<String>,

    /// Ini-file containing host/group definitions [default: ~/.sa/hosts.ini]
    #[arg(short = 'f', long = "inifile", env = CONFIG_ENV, value_name = "FILE")]
    pub inifile: Option<PathBuf>,

    /// Run in sequence instead of in parallel
    #[arg(short, long)]
    pub sequence: bool,

    /// Prefix each line of output with the host name
    #[arg(short, long)]
    pub prefix: bool,

    /// Print debug information on stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Assume yes on questions (also set by the SA_YES env var)
    #[arg(short, long)]
    pub yes: bool,

    /// Run at most N hosts at a time in parallel mode
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<NonZeroUsize>,

    /// Remote shell program used to reach each host
    #[arg(
        long,
        env = TRANSPORT_ENV,
        default_value = DEFAULT_TRANSPORT,
        value_name = "PROGRAM"
    )]
    pub transport: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Hosts and groups to run the command on
    #[arg(value_name = "HOST|GROUP")]
    pub targets: Vec<String>,
}

impl Cli {
    /// Validate the arguments and freeze them into a `RunConfig`.
    ///
    /// # Errors
    ///
    /// `MissingArguments` without a command or username, `NoIdentifiers`
    /// without positional targets, `ConfigLoad` when no hosts file path can
    /// be determined.
    pub fn into_config(self) -> Result<RunConfig, SaError> {
        let Cli {
            command,
            username,
            inifile,
            sequence,
            prefix,
            debug,
            yes,
            jobs,
            transport,
            no_color,
            targets,
        } = self;

        let (Some(command), Some(username)) = (command, username) else {
            return Err(SaError::MissingArguments);
        };
        if targets.is_empty() {
            return Err(SaError::NoIdentifiers);
        }

        let config_path = match inifile {
            Some(path) => path,
            None => default_hosts_path().ok_or_else(|| SaError::ConfigLoad {
                path: "$HOME/.sa/hosts.ini".to_string(),
                reason: "cannot determine home directory".to_string(),
            })?,
        };

        Ok(RunConfig {
            command,
            username,
            identifiers: targets,
            mode: if sequence {
                ExecutionMode::Sequential
            } else {
                ExecutionMode::Parallel
            },
            prefix,
            assume_yes: yes || std::env::var(YES_ENV).is_ok(),
            config_path,
            transport,
            max_parallel: jobs,
            debug,
            no_color,
        })
    }

    /// Execute the run described by the arguments.
    ///
    /// # Errors
    ///
    /// Returns the `SaError` (as `anyhow::Error`) that stopped the run.
    pub async fn run(self) -> Result<RunSummary> {
        let config = self.into_config()?;
        AppContext::new(config).run().await
    }
}

/// Print the message for a failed run and pick the exit code.
pub fn report_failure(ctx: &OutputContext, err: &anyhow::Error) -> ExitCode {
    let Some(sa) = err.downcast_ref::<SaError>() else {
        ctx.error(&format!("{err:#}"));
        return ExitCode::FAILURE;
    };

    match sa {
        SaError::Aborted => ctx.info(&sa.to_string()),
        SaError::MissingArguments => {
            println!("{}", Cli::command().render_usage());
            ctx.error(&sa.to_string());
        }
        _ => ctx.error(&sa.to_string()),
    }
    ExitCode::from(sa.exit_code())
}
