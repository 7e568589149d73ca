//! Infrastructure implementation of the `ConfirmationInput` port.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::application::ports::ConfirmationInput;

/// Reads the answer from standard input after printing the prompt.
#[derive(Debug, Default)]
pub struct StdinConfirmation;

impl ConfirmationInput for StdinConfirmation {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(prompt.as_bytes())
            .context("writing prompt")?;
        stdout.flush().context("flushing prompt")?;
        drop(stdout);

        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("reading confirmation")?;
        Ok(line)
    }
}
