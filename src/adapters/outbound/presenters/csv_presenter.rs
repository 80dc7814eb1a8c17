use crate::application::dto::FormatOption;
use crate::license_evaluation::domain::ResultSet;
use crate::ports::outbound::Presenter;
use crate::shared::error::BouncerError;
use crate::shared::Result;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

/// CSV header row
const CSV_HEADER: [&str; 3] = ["dependency", "license", "outcome"];

/// CsvPresenter adapter for comma-separated output
///
/// Quoting is delegated to the `csv` crate: fields containing a comma, a
/// quote or a line break are quoted and inner quotes doubled. Licenses are
/// written exactly as evaluated, so an undetected license is an empty field.
pub struct CsvPresenter<'a> {
    results: &'a ResultSet,
}

impl<'a> CsvPresenter<'a> {
    pub fn new(results: &'a ResultSet) -> Self {
        Self { results }
    }

    fn write_csv(&self, sink: &mut dyn Write) -> csv::Result<()> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(sink);

        writer.write_record(CSV_HEADER)?;
        for result in self.results {
            writer.write_record([
                result.dependency(),
                result.license(),
                result.outcome().as_str(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl Presenter for CsvPresenter<'_> {
    fn format(&self) -> FormatOption {
        FormatOption::Csv
    }

    fn present(&self, sink: &mut dyn Write) -> Result<()> {
        self.write_csv(sink)
            .map_err(|e| BouncerError::write_failed(FormatOption::Csv, e))?;
        Ok(())
    }
}
