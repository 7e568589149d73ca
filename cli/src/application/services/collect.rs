//! Output collector: renders finished targets onto the output sink.

use anyhow::Result;

use crate::application::ports::OutputSink;
use crate::domain::{ExecutionResult, output_segments, render_output};

/// Writes each finished target as one block: an optional failure line
/// followed by the target's output.
pub struct OutputCollector<'a, S: OutputSink> {
    sink: &'a S,
    prefix: bool,
}

impl<'a, S: OutputSink> OutputCollector<'a, S> {
    #[must_use]
    pub fn new(sink: &'a S, prefix: bool) -> Self {
        Self { sink, prefix }
    }

    /// Render `result` and hand it to the sink in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink rejects the write.
    pub fn collect(&self, result: &ExecutionResult) -> Result<()> {
        let mut block = Vec::new();
        if let Some(err) = &result.error {
            block.extend_from_slice(format!("[warn] {}: {err}\n", result.target).as_bytes());
        }
        if self.prefix {
            tracing::debug!(
                host = %result.target,
                segments = output_segments(&result.output).count(),
                "prefixing output"
            );
        }
        block.extend(render_output(&result.target, &result.output, self.prefix));

        if block.is_empty() {
            return Ok(());
        }
        self.sink.write_block(&block)
    }
}
