use crate::ports::outbound::{ProgressReporter, UpdateSource};
use crate::shared::error::SourceError;
use crate::update_check::domain::{PackageUpdate, UpdateReport};
use crate::update_check::policies::VendorPolicy;
use futures::future;

/// CheckUpdatesUseCase - Core use case for one reporting cycle
///
/// Orchestrates the two update sources, classifies each record through the
/// vendor policy, and produces the per-cycle aggregate. Infrastructure is
/// injected generically through the ports.
///
/// No source failure ever propagates: an errored source is logged through
/// the progress reporter and contributes an empty sequence, so a report is
/// produced even when both sources fail completely.
///
/// # Type Parameters
/// * `O` - UpdateSource implementation for the official repositories
/// * `A` - UpdateSource implementation for the AUR
/// * `PR` - ProgressReporter implementation
pub struct CheckUpdatesUseCase<O, A, PR> {
    official_source: O,
    aur_source: A,
    vendor_policy: VendorPolicy,
    progress_reporter: PR,
}

impl<O, A, PR> CheckUpdatesUseCase<O, A, PR>
where
    O: UpdateSource,
    A: UpdateSource,
    PR: ProgressReporter,
{
    /// Creates a new CheckUpdatesUseCase with injected dependencies
    pub fn new(
        official_source: O,
        aur_source: A,
        vendor_policy: VendorPolicy,
        progress_reporter: PR,
    ) -> Self {
        Self {
            official_source,
            aur_source,
            vendor_policy,
            progress_reporter,
        }
    }

    /// Executes one reporting cycle
    ///
    /// The two sources run concurrently, but their results are joined and
    /// appended in the fixed official-then-AUR order, so report ordering is
    /// deterministic regardless of which command returns first.
    pub async fn execute(&self) -> UpdateReport {
        let (official, aur) = future::join(
            self.official_source.fetch_updates(),
            self.aur_source.fetch_updates(),
        )
        .await;

        let mut report = UpdateReport::new();
        for update in self.updates_or_empty(official, self.official_source.name()) {
            report.append(update, &self.vendor_policy);
        }
        for update in self.updates_or_empty(aur, self.aur_source.name()) {
            report.append(update, &self.vendor_policy);
        }

        self.progress_reporter
            .report(&format!("Detected {} pending update(s)", report.total()));

        report
    }

    /// Unwraps one source result, degrading a failure to an empty sequence
    fn updates_or_empty(
        &self,
        result: Result<Vec<PackageUpdate>, SourceError>,
        source_name: &str,
    ) -> Vec<PackageUpdate> {
        match result {
            Ok(updates) => updates,
            Err(error) => {
                self.progress_reporter
                    .report_error(&format!("Error checking {} updates: {}", source_name, error));
                Vec::new()
            }
        }
    }
}
