//! Infrastructure implementation of the `OutputSink` port.

use std::io::Write;

use anyhow::{Context, Result};

use crate::application::ports::OutputSink;

/// Writes rendered blocks to standard output, holding the lock per block.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_block(&self, block: &[u8]) -> Result<()> {
        let mut out = std::io::stdout().lock();
        out.write_all(block).context("writing output")?;
        out.flush().context("flushing output")
    }
}
