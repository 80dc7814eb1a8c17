/// ProgressReporter port for status messages during a run
///
/// Messages go to a side channel (stderr), never to the document sink.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);

    /// Shows an activity indicator until the next message or `finish_spinner`
    fn start_spinner(&self, _message: &str) {}

    /// Clears the activity indicator, if one is running
    fn finish_spinner(&self) {}
}
