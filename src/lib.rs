//! license-bouncer - render dependency license evaluation results
//!
//! This library turns an already-evaluated list of dependency license
//! results into a text table, a CSV document or a JSON array. How the
//! outcomes were decided is out of scope; the results are input data.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_evaluation`): The result record shape
//! - **Application Layer** (`application`): Format selection, factories and the render use case
//! - **Ports** (`ports`): The presenter contract and other infrastructure interfaces
//! - **Adapters** (`adapters`): Presenters, file/stdout destinations, console reporting
//! - **Shared** (`shared`): Error types and file security checks
//!
//! # Example
//!
//! ```
//! use license_bouncer::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let results = ResultSet::new(vec![LicenseResult::new(
//!     "left-pad@1.0",
//!     "MIT",
//!     Outcome::Allowed,
//! )]);
//!
//! let presenter = PresenterFactory::create(FormatOption::Csv, &results);
//! let mut sink = Vec::new();
//! presenter.present(&mut sink)?;
//!
//! assert_eq!(
//!     String::from_utf8(sink)?,
//!     "dependency,license,outcome\nleft-pad@1.0,MIT,allowed\n"
//! );
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod license_evaluation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileDestination, FileSystemReader, StdoutDestination,
    };
    pub use crate::adapters::outbound::presenters::{CsvPresenter, JsonPresenter, TextPresenter};
    pub use crate::application::dto::{FormatOption, RenderRequest, RenderResponse, ResultSource};
    pub use crate::application::factories::{DestinationFactory, DestinationType, PresenterFactory};
    pub use crate::application::use_cases::RenderResultsUseCase;
    pub use crate::license_evaluation::domain::{LicenseResult, Outcome, ResultSet};
    pub use crate::ports::outbound::{
        OutputDestination, Presenter, ProgressReporter, ResultSetReader,
    };
    pub use crate::shared::error::{BouncerError, ExitCode};
    pub use crate::shared::Result;
}
