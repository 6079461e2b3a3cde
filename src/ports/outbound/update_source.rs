use crate::shared::error::SourceError;
use crate::update_check::domain::{Origin, PackageUpdate};
use async_trait::async_trait;

/// UpdateSource port for listing pending package updates
///
/// This port abstracts one external update-listing command (official
/// repositories, AUR helper). Implementations must be read-only with
/// respect to system state - a source queries, it never installs.
///
/// # Async Support
/// Fetching is async so the aggregator can run both sources concurrently.
/// Implementations must be `Send + Sync`.
#[async_trait]
pub trait UpdateSource: Send + Sync {
    /// Human-readable source name, used in diagnostics
    fn name(&self) -> &str;

    /// Which origin this source's records carry
    fn origin(&self) -> Origin;

    /// Fetches the pending updates for this source
    ///
    /// # Returns
    /// Update records in listing order. "Nothing pending" and "tool not
    /// installed" are empty sequences, not errors.
    ///
    /// # Errors
    /// Returns a `SourceError` only for unexpected conditions: an
    /// unexplained exit status, undecodable output, or a timeout. The
    /// caller logs these and continues with an empty sequence.
    async fn fetch_updates(&self) -> Result<Vec<PackageUpdate>, SourceError>;
}
