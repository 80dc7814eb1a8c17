use crate::application::dto::FormatOption;
use crate::shared::Result;
use std::io::Write;

/// Presenter port for rendering license results into one output format
///
/// A presenter is built by `PresenterFactory` around a borrowed `ResultSet`
/// and used for a single render. It writes to a sink it does not own: the
/// caller opens the sink beforehand and closes it afterwards.
pub trait Presenter {
    /// The format this presenter produces
    fn format(&self) -> FormatOption;

    /// Writes the complete document for the held results to `sink`
    ///
    /// # Arguments
    /// * `sink` - Writable destination; it is never seeked or rewritten
    ///
    /// # Returns
    /// `Ok(())` once the whole document is written and the sink flushed
    ///
    /// # Errors
    /// Returns `BouncerError::WriteFailed` as soon as the sink rejects a write
    /// or a flush. Whatever reached the sink before that is not a usable document.
    fn present(&self, sink: &mut dyn Write) -> Result<()>;
}
