use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow the status bar (and scripts wrapping it) to distinguish
/// "payload produced" from "the process itself could not run". Per-source
/// failures never escalate past exit code 0 - a degraded payload is still a
/// valid payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - a status payload was written, possibly a degraded one
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, unable to write the payload, etc.)
    ApplicationError = 3,
    /// Terminated by signal mid-cycle; no payload was written
    Interrupted = 130,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::Interrupted => write!(f, "Interrupted (130)"),
        }
    }
}

/// Application-specific errors for the update checker.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
/// Only conditions that prevent producing the payload at all live here;
/// per-source failures are a `SourceError` and never abort the run.
#[derive(Debug, Error)]
pub enum PacbarError {
    #[error("Failed to read config file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists and is readable")]
    ConfigReadError { path: PathBuf, details: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}")]
    ConfigValidation { message: String },

    #[error("Failed to write status payload\nDetails: {details}")]
    OutputError { details: String },
}

/// Failures of a single update-listing command.
///
/// These never terminate the reporting cycle: the aggregator logs them
/// through the progress reporter and carries on with an empty sequence
/// for the failing source. "No updates pending" and "tool not installed"
/// are not failures and are handled inside the adapter.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("`{command}` produced output that is not valid UTF-8")]
    InvalidOutput { command: String },

    #[error("`{command}` did not finish within {timeout_secs}s")]
    Timeout { command: String, timeout_secs: u64 },

    #[error("failed to spawn `{command}`: {details}")]
    SpawnFailed { command: String, details: String },
}
