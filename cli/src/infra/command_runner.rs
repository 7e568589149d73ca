//! Infrastructure implementation of the `RemoteShell` port.
//!
//! `TokioRemoteShell` runs `<transport> <user>@<host> <command>` as a child
//! process. Its stdout and stderr share one OS pipe, so the captured bytes keep
//! the order in which the remote side wrote them.

use std::io::Read;
use std::process::Stdio;

use anyhow::{Context, Result};

use crate::application::ports::{RemoteCapture, RemoteShell};

/// Transport program used when none is configured.
pub const DEFAULT_TRANSPORT: &str = "ssh";

/// Environment variable overriding the transport program.
pub const TRANSPORT_ENV: &str = "SA_TRANSPORT";

/// Production `RemoteShell`: one child process per invocation, no timeout.
#[derive(Debug, Clone)]
pub struct TokioRemoteShell {
    program: String,
}

impl TokioRemoteShell {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl RemoteShell for TokioRemoteShell {
    async fn invoke(&self, destination: &str, command: &str) -> Result<RemoteCapture> {
        let program = self.program.as_str();
        let (mut reader, writer) = std::io::pipe().context("failed to create output pipe")?;

        // The command owns the parent's copies of the write end; it must be
        // dropped right after spawning or the reader never sees EOF.
        let mut child = {
            let stderr_writer = writer
                .try_clone()
                .context("failed to duplicate output pipe")?;
            tokio::process::Command::new(program)
                .arg(destination)
                .arg(command)
                .stdin(Stdio::null())
                .stdout(writer)
                .stderr(stderr_writer)
                .kill_on_drop(true)
                .spawn()
                .with_context(|| format!("failed to spawn {program}"))?
        };

        let drain = tokio::task::spawn_blocking(move || {
            let mut buf = Vec::new();
            reader.read_to_end(&mut buf).map(|_| buf)
        });

        let (status, combined) = tokio::join!(child.wait(), drain);
        let status = status.with_context(|| format!("waiting for {program}"))?;
        let combined = combined
            .context("output reader task failed")?
            .with_context(|| format!("reading output of {program}"))?;

        Ok(RemoteCapture { status, combined })
    }
}
