use super::FormatOption;

/// RenderResponse - Summary of a completed render
///
/// The document itself went to the destination; this only carries the
/// counts the CLI needs for its status line and exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResponse {
    pub format: FormatOption,
    pub result_count: usize,
    pub denied_count: usize,
    pub unknown_count: usize,
}

impl RenderResponse {
    pub fn new(
        format: FormatOption,
        result_count: usize,
        denied_count: usize,
        unknown_count: usize,
    ) -> Self {
        Self {
            format,
            result_count,
            denied_count,
            unknown_count,
        }
    }

    pub fn has_denied(&self) -> bool {
        self.denied_count > 0
    }
}
