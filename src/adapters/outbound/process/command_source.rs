use crate::ports::outbound::UpdateSource;
use crate::shared::error::SourceError;
use crate::update_check::domain::{Origin, PackageUpdate};
use crate::update_check::services::UpdateListingParser;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Limit on how much captured stderr ends up in a diagnostic message.
const STDERR_SNIPPET_LIMIT: usize = 512;

/// CommandUpdateSource adapter for running one update-listing command
///
/// This adapter implements the UpdateSource port by executing a configured
/// argument vector (no shell interpretation), capturing stdout, and parsing
/// it with the domain parser. Both backing commands are query invocations
/// and never mutate system state.
///
/// Expected, non-error conditions map to an empty sequence:
/// - the command's "nothing pending" exit code (1 for `pacman -Qu` and
///   `yay -Qua`)
/// - the tool not being installed at all
///
/// Everything else - unexplained exit status, non-UTF-8 output, timeout -
/// surfaces as a `SourceError` for the caller to log.
pub struct CommandUpdateSource {
    name: String,
    origin: Origin,
    argv: Vec<String>,
    no_updates_exit: i32,
    timeout: Duration,
}

/// `pacman -Qu` and `yay -Qua` both exit 1 when nothing is pending.
const NO_UPDATES_EXIT: i32 = 1;

impl CommandUpdateSource {
    /// Creates a source for the official repositories
    pub fn official(argv: Vec<String>, timeout: Duration) -> Self {
        Self::new("official", Origin::Official, argv, timeout)
    }

    /// Creates a source for the AUR
    pub fn aur(argv: Vec<String>, timeout: Duration) -> Self {
        Self::new("AUR", Origin::Aur, argv, timeout)
    }

    fn new(name: &str, origin: Origin, argv: Vec<String>, timeout: Duration) -> Self {
        Self {
            name: name.to_string(),
            origin,
            argv,
            no_updates_exit: NO_UPDATES_EXIT,
            timeout,
        }
    }

    /// The command as a display string for diagnostics
    fn command_line(&self) -> String {
        self.argv.join(" ")
    }

    fn stderr_snippet(stderr: &[u8]) -> String {
        let text = String::from_utf8_lossy(stderr);
        let trimmed = text.trim();
        if trimmed.chars().count() > STDERR_SNIPPET_LIMIT {
            let snippet: String = trimmed.chars().take(STDERR_SNIPPET_LIMIT).collect();
            format!("{}...", snippet)
        } else {
            trimmed.to_string()
        }
    }
}

#[async_trait]
impl UpdateSource for CommandUpdateSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn origin(&self) -> Origin {
        self.origin
    }

    async fn fetch_updates(&self) -> Result<Vec<PackageUpdate>, SourceError> {
        let (program, args) = match self.argv.split_first() {
            Some(parts) => parts,
            None => {
                return Err(SourceError::SpawnFailed {
                    command: String::new(),
                    details: "empty command".to_string(),
                })
            }
        };

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Err(_) => {
                return Err(SourceError::Timeout {
                    command: self.command_line(),
                    timeout_secs: self.timeout.as_secs(),
                })
            }
            // Tool not installed is an expected condition, not an error
            Ok(Err(e)) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Ok(Err(e)) => {
                return Err(SourceError::SpawnFailed {
                    command: self.command_line(),
                    details: e.to_string(),
                })
            }
            Ok(Ok(output)) => output,
        };

        if !output.status.success() {
            // The tooling signals "nothing pending" through a non-zero exit
            if output.status.code() == Some(self.no_updates_exit) {
                return Ok(Vec::new());
            }
            return Err(SourceError::CommandFailed {
                command: self.command_line(),
                status: output.status.to_string(),
                stderr: Self::stderr_snippet(&output.stderr),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| SourceError::InvalidOutput {
            command: self.command_line(),
        })?;

        Ok(UpdateListingParser::parse_listing(&stdout, self.origin))
    }
}
