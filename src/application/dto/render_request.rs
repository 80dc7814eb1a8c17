use super::FormatOption;
use std::path::PathBuf;

/// Where the evaluated license results are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSource {
    Stdin,
    File(PathBuf),
}

impl ResultSource {
    /// Interprets a CLI argument; `-` means stdin
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => ResultSource::Stdin,
            Some(path) => ResultSource::File(PathBuf::from(path)),
        }
    }

    /// Human-readable name used in progress and error messages
    pub fn display_name(&self) -> String {
        match self {
            ResultSource::Stdin => "<stdin>".to_string(),
            ResultSource::File(path) => path.display().to_string(),
        }
    }
}

/// RenderRequest - Request DTO for the render use case
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Source of the evaluated results
    pub source: ResultSource,
    /// Format to render the results in
    pub format: FormatOption,
}

impl RenderRequest {
    pub fn new(source: ResultSource, format: FormatOption) -> Self {
        Self { source, format }
    }
}
