/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_update_source;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_update_source::MockUpdateSource;
