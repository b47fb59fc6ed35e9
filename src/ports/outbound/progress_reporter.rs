/// ProgressReporter port for status messages while a report is built
///
/// Messages go to a side channel (e.g. stderr) so they never mix with
/// the rendered report.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
