use crate::application::dto::FormatOption;
use crate::license_evaluation::domain::ResultSet;
use crate::ports::outbound::Presenter;
use crate::shared::error::BouncerError;
use crate::shared::Result;
use std::io::Write;

/// JsonPresenter adapter for machine-readable output
///
/// Emits one compact JSON array with an object per result, keys in the
/// order `dependency`, `license`, `outcome`. An empty result set is `[]`.
/// The document is not newline-terminated.
pub struct JsonPresenter<'a> {
    results: &'a ResultSet,
}

impl<'a> JsonPresenter<'a> {
    pub fn new(results: &'a ResultSet) -> Self {
        Self { results }
    }
}

impl Presenter for JsonPresenter<'_> {
    fn format(&self) -> FormatOption {
        FormatOption::Json
    }

    fn present(&self, sink: &mut dyn Write) -> Result<()> {
        serde_json::to_writer(&mut *sink, self.results)
            .map_err(|e| BouncerError::write_failed(FormatOption::Json, e))?;
        sink.flush()
            .map_err(|e| BouncerError::write_failed(FormatOption::Json, e))?;
        Ok(())
    }
}
