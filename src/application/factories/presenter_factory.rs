use crate::adapters::outbound::presenters::{CsvPresenter, JsonPresenter, TextPresenter};
use crate::application::dto::FormatOption;
use crate::license_evaluation::domain::ResultSet;
use crate::ports::outbound::Presenter;
use crate::shared::error::BouncerError;
use crate::shared::Result;

/// Factory for creating license result presenters
///
/// This factory encapsulates the selection of a presenter implementation
/// for a given output format, following the Factory Pattern. Each call
/// builds a fresh presenter bound to the given results; presenters are
/// not cached or reused.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates the presenter for `format`, borrowing `results`
    ///
    /// # Examples
    /// ```
    /// use license_bouncer::application::dto::FormatOption;
    /// use license_bouncer::application::factories::PresenterFactory;
    /// use license_bouncer::license_evaluation::domain::ResultSet;
    ///
    /// let results = ResultSet::empty();
    /// let presenter = PresenterFactory::create(FormatOption::Json, &results);
    /// let mut sink = Vec::new();
    /// presenter.present(&mut sink).unwrap();
    /// assert_eq!(sink, b"[]");
    /// ```
    pub fn create(format: FormatOption, results: &ResultSet) -> Box<dyn Presenter + '_> {
        match format {
            FormatOption::Text => Box::new(TextPresenter::new(results)),
            FormatOption::Csv => Box::new(CsvPresenter::new(results)),
            FormatOption::Json => Box::new(JsonPresenter::new(results)),
        }
    }

    /// Creates the presenter named by a format token such as `"csv"`
    ///
    /// There is no fallback: a token outside the supported set (including
    /// an empty one) fails before any presenter is built.
    ///
    /// # Errors
    /// Returns `BouncerError::UnsupportedFormat` for an unrecognized token
    ///
    /// # Examples
    /// ```
    /// use license_bouncer::application::factories::PresenterFactory;
    /// use license_bouncer::license_evaluation::domain::ResultSet;
    ///
    /// let results = ResultSet::empty();
    /// assert!(PresenterFactory::select("csv", &results).is_ok());
    /// assert!(PresenterFactory::select("yaml", &results).is_err());
    /// ```
    pub fn select<'a>(token: &str, results: &'a ResultSet) -> Result<Box<dyn Presenter + 'a>> {
        let format = Self::parse_format(token)?;
        Ok(Self::create(format, results))
    }

    /// Resolves a format token without building a presenter
    ///
    /// # Errors
    /// Returns `BouncerError::UnsupportedFormat` for an unrecognized token
    pub fn parse_format(token: &str) -> Result<FormatOption> {
        token.parse::<FormatOption>().map_err(|_| {
            BouncerError::UnsupportedFormat {
                format: token.to_string(),
            }
            .into()
        })
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use license_bouncer::application::dto::FormatOption;
    /// use license_bouncer::application::factories::PresenterFactory;
    ///
    /// let message = PresenterFactory::progress_message(FormatOption::Csv);
    /// assert_eq!(message, "📝 Generating CSV output...");
    /// ```
    pub fn progress_message(format: FormatOption) -> &'static str {
        match format {
            FormatOption::Text => "📝 Generating text table output...",
            FormatOption::Csv => "📝 Generating CSV output...",
            FormatOption::Json => "📝 Generating JSON output...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_evaluation::domain::{LicenseResult, Outcome};

    fn results() -> ResultSet {
        ResultSet::new(vec![LicenseResult::new(
            "left-pad@1.0",
            "MIT",
            Outcome::Allowed,
        )])
    }

    fn render(presenter: &dyn Presenter) -> String {
        let mut sink = Vec::new();
        presenter.present(&mut sink).unwrap();
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn test_create_returns_presenter_for_every_format() {
        let results = results();
        for format in FormatOption::ALL {
            let presenter = PresenterFactory::create(format, &results);
            assert_eq!(presenter.format(), format);
        }
    }

    #[test]
    fn test_create_json_presenter_output() {
        let results = results();
        let presenter = PresenterFactory::create(FormatOption::Json, &results);
        assert_eq!(
            render(presenter.as_ref()),
            r#"[{"dependency":"left-pad@1.0","license":"MIT","outcome":"allowed"}]"#
        );
    }

    #[test]
    fn test_create_csv_presenter_output() {
        let results = results();
        let presenter = PresenterFactory::create(FormatOption::Csv, &results);
        assert_eq!(
            render(presenter.as_ref()),
            "dependency,license,outcome\nleft-pad@1.0,MIT,allowed\n"
        );
    }

    #[test]
    fn test_select_known_tokens() {
        let results = results();
        assert_eq!(
            PresenterFactory::select("text", &results).unwrap().format(),
            FormatOption::Text
        );
        assert_eq!(
            PresenterFactory::select("CSV", &results).unwrap().format(),
            FormatOption::Csv
        );
        assert_eq!(
            PresenterFactory::select("json", &results).unwrap().format(),
            FormatOption::Json
        );
    }

    #[test]
    fn test_select_unsupported_format_fails_loudly() {
        let results = results();
        for token in ["yaml", "markdown", "", "  ", "jsonl"] {
            let err = match PresenterFactory::select(token, &results) {
                Ok(_) => panic!("token {:?} must not select a presenter", token),
                Err(e) => e,
            };
            match err.downcast_ref::<BouncerError>() {
                Some(BouncerError::UnsupportedFormat { format }) => assert_eq!(format, token),
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_format_is_deterministic() {
        assert!(PresenterFactory::parse_format("xml").is_err());
        assert!(PresenterFactory::parse_format("xml").is_err());
        assert_eq!(
            PresenterFactory::parse_format("json").unwrap(),
            FormatOption::Json
        );
    }

    #[test]
    fn test_progress_message() {
        assert_eq!(
            PresenterFactory::progress_message(FormatOption::Text),
            "📝 Generating text table output..."
        );
        assert_eq!(
            PresenterFactory::progress_message(FormatOption::Json),
            "📝 Generating JSON output..."
        );
    }
}
