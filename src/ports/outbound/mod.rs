/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (subprocesses, console, stdout).
pub mod output_presenter;
pub mod progress_reporter;
pub mod status_formatter;
pub mod update_source;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use status_formatter::StatusFormatter;
pub use update_source::UpdateSource;
