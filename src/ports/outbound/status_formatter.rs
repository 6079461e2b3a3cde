use crate::application::read_models::StatusReadModel;
use crate::shared::Result;

/// StatusFormatter port for rendering the status read model
///
/// This port abstracts the output format (waybar JSON payload, plain
/// terminal text).
pub trait StatusFormatter {
    /// Formats the status read model
    ///
    /// # Arguments
    /// * `model` - The read model containing the payload fields and the
    ///   per-origin update views
    ///
    /// # Returns
    /// Formatted content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &StatusReadModel) -> Result<String>;
}
