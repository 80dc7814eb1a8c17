/// Output format selector for rendering license results
///
/// This closed enumeration is the only control surface of the rendering
/// core: exactly one option selects exactly one presenter. It belongs in the
/// application layer because both the CLI (inbound adapter) and the
/// presenters (outbound adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatOption {
    /// Aligned, human-readable table (default)
    Text,
    /// Comma-separated values with a header row
    Csv,
    /// JSON array of result objects
    Json,
}

impl FormatOption {
    /// Every supported option, in documentation order
    pub const ALL: [FormatOption; 3] = [FormatOption::Text, FormatOption::Csv, FormatOption::Json];

    /// Canonical lowercase token for this option
    pub fn as_str(self) -> &'static str {
        match self {
            FormatOption::Text => "text",
            FormatOption::Csv => "csv",
            FormatOption::Json => "json",
        }
    }
}

impl std::str::FromStr for FormatOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "table" => Ok(FormatOption::Text),
            "csv" => Ok(FormatOption::Csv),
            "json" => Ok(FormatOption::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text', 'csv' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for FormatOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
