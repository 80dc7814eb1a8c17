use crate::application::dto::FormatOption;
use crate::license_evaluation::domain::ResultSet;
use crate::ports::outbound::Presenter;
use crate::shared::error::BouncerError;
use crate::shared::Result;
use comfy_table::presets::NOTHING;
use comfy_table::{ContentArrangement, Table};
use std::borrow::Cow;
use std::io::{self, Write};

/// Column titles of the text table
const HEADERS: [&str; 3] = ["DEPENDENCY", "LICENSE", "OUTCOME"];

/// Space between columns
const COLUMN_GAP: u16 = 2;

/// TextPresenter adapter for a human-readable, column-aligned table
///
/// One header row followed by one row per result in input order. Missing
/// licenses print as `unknown`. Padding is cosmetic; column order is not.
pub struct TextPresenter<'a> {
    results: &'a ResultSet,
}

impl<'a> TextPresenter<'a> {
    pub fn new(results: &'a ResultSet) -> Self {
        Self { results }
    }

    fn breaks_line(c: char) -> bool {
        c.is_control() || matches!(c, '\u{2028}' | '\u{2029}')
    }

    /// Keeps each result on one physical line
    fn sanitize_cell(text: &str) -> Cow<'_, str> {
        if text.contains(Self::breaks_line) {
            Cow::Owned(text.replace(Self::breaks_line, " "))
        } else {
            Cow::Borrowed(text)
        }
    }

    fn build_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(NOTHING)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(HEADERS);

        for result in self.results {
            table.add_row([
                Self::sanitize_cell(result.dependency()),
                Self::sanitize_cell(result.license_or_placeholder()),
                Cow::Borrowed(result.outcome().as_str()),
            ]);
        }

        let last = HEADERS.len() - 1;
        for (index, column) in table.column_iter_mut().enumerate() {
            let right = if index == last { 0 } else { COLUMN_GAP };
            column.set_padding((0, right));
        }
        table
    }

    fn write_table(&self, sink: &mut dyn Write) -> io::Result<()> {
        for line in self.build_table().lines() {
            writeln!(sink, "{}", line.trim_end())?;
        }
        sink.flush()
    }
}

impl Presenter for TextPresenter<'_> {
    fn format(&self) -> FormatOption {
        FormatOption::Text
    }

    fn present(&self, sink: &mut dyn Write) -> Result<()> {
        self.write_table(sink)
            .map_err(|e| BouncerError::write_failed(FormatOption::Text, e))?;
        Ok(())
    }
}
