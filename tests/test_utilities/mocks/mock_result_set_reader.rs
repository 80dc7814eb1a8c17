use license_bouncer::prelude::*;
use std::path::PathBuf;

/// Mock ResultSetReader that serves a fixed result set or fails
pub struct MockResultSetReader {
    results: Option<ResultSet>,
}

#[allow(dead_code)]
impl MockResultSetReader {
    pub fn new(results: ResultSet) -> Self {
        Self {
            results: Some(results),
        }
    }

    pub fn with_failure() -> Self {
        Self { results: None }
    }
}

impl ResultSetReader for MockResultSetReader {
    fn read_results(&self, source: &ResultSource) -> Result<ResultSet> {
        match &self.results {
            Some(results) => Ok(results.clone()),
            None => Err(BouncerError::ResultsNotFound {
                path: PathBuf::from(source.display_name()),
                suggestion: "Mock failure".to_string(),
            }
            .into()),
        }
    }
}
