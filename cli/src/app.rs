//! Application context: the immutable run configuration and its wiring.
//!
//! `RunConfig` is built once from the command line and environment, then
//! handed to `AppContext`, which owns the production port implementations.
//! No component reads flags or environment on its own.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::application::services::run::{RunOptions, run_command};
use crate::domain::{ExecutionMode, RunSummary};
use crate::infra::{IniGroupStore, StdinConfirmation, StdoutSink, TokioRemoteShell};
use crate::output::{OutputContext, TerminalReporter};

/// Everything one run needs to know, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Literal command string sent to every host.
    pub command: String,
    /// User to connect as.
    pub username: String,
    /// Host and group identifiers, in argument order.
    pub identifiers: Vec<String>,
    pub mode: ExecutionMode,
    /// Tag each output line with its host.
    pub prefix: bool,
    /// Skip the confirmation gate.
    pub assume_yes: bool,
    /// Hosts file location.
    pub config_path: PathBuf,
    /// Remote shell program, `ssh` unless overridden.
    pub transport: String,
    /// Concurrency ceiling for parallel mode.
    pub max_parallel: Option<NonZeroUsize>,
    pub debug: bool,
    pub no_color: bool,
}

/// Unified application context for one run.
pub struct AppContext {
    pub config: RunConfig,
    /// Terminal output context (colors).
    pub output: OutputContext,
    groups: IniGroupStore,
    shell: Arc<TokioRemoteShell>,
}

impl AppContext {
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        Self {
            output: OutputContext::new(config.no_color),
            groups: IniGroupStore::new(config.config_path.clone()),
            shell: Arc::new(TokioRemoteShell::new(config.transport.clone())),
            config,
        }
    }

    /// Resolve, confirm and execute.
    ///
    /// # Errors
    ///
    /// Propagates the `SaError` that stopped the run, see `run_command`.
    pub async fn run(&self) -> Result<RunSummary> {
        let reporter = TerminalReporter::new(&self.output);
        let mut input = StdinConfirmation;
        let cfg = &self.config;

        run_command(
            &self.groups,
            &mut input,
            &self.shell,
            &StdoutSink,
            RunOptions {
                reporter: &reporter,
                command: &cfg.command,
                username: &cfg.username,
                identifiers: &cfg.identifiers,
                mode: cfg.mode,
                prefix: cfg.prefix,
                assume_yes: cfg.assume_yes,
                max_parallel: cfg.max_parallel,
            },
        )
        .await
    }
}

/// Initialise tracing on stderr.
///
/// `RUST_LOG` wins when set; otherwise `debug` enables this crate's debug
/// events and everything else stays at `warn`.
pub fn init_tracing(debug: bool) {
    let default = if debug { "warn,sa_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
