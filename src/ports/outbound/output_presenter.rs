use crate::shared::Result;

/// OutputPresenter port for presenting the final payload
///
/// This port abstracts the output destination where the formatted status
/// payload is presented. The status bar reads stdout; other destinations
/// only need another implementation of this trait.
pub trait OutputPresenter {
    /// Presents the formatted payload to the output destination
    ///
    /// # Arguments
    /// * `content` - The formatted payload to present
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails. This is
    /// the only failure in the system that escalates to a non-zero exit.
    fn present(&self, content: &str) -> Result<()>;
}
