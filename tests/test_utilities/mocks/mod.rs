/// Mock implementations for testing
mod mock_destination;
mod mock_progress_reporter;
mod mock_result_set_reader;

#[allow(unused_imports)]
pub use mock_destination::{FailingSink, MockDestination};
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_result_set_reader::MockResultSetReader;
