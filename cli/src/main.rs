//! sa - run one shell command on many hosts at once

use std::process::ExitCode;

use clap::Parser;

use sa_cli::app::init_tracing;
use sa_cli::cli::{Cli, report_failure};
use sa_cli::output::OutputContext;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    let ctx = OutputContext::new(cli.no_color);

    match cli.run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => report_failure(&ctx, &err),
    }
}
