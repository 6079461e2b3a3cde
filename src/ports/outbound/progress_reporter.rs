/// ProgressReporter port for diagnostics during a reporting cycle
///
/// This port abstracts the error channel (e.g. stderr) so that source
/// failures stay observable without polluting the payload on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports an error or warning message
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);
}
