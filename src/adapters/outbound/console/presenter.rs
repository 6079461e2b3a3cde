use crate::ports::outbound::OutputPresenter;
use crate::shared::error::PacbarError;
use crate::shared::Result;
use std::io::{self, Write};

/// StdoutPresenter adapter for writing the payload to stdout
///
/// This adapter implements the OutputPresenter port for the status bar's
/// one-payload-per-invocation contract.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.write_all(b"\n"))
            .map_err(|e| PacbarError::OutputError {
                details: e.to_string(),
            })?;
        Ok(())
    }
}
