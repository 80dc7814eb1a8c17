use crate::application::dto::ResultSource;
use crate::license_evaluation::domain::ResultSet;
use crate::shared::Result;

/// ResultSetReader port for loading evaluated license results
///
/// The evaluator that produced the results sits upstream of this crate;
/// this port only reads what it emitted.
pub trait ResultSetReader {
    /// Reads and parses the result set from `source`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source file does not exist or cannot be read
    /// - The content is not a valid result document
    fn read_results(&self, source: &ResultSource) -> Result<ResultSet>;
}
