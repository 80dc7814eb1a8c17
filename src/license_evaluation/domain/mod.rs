pub mod license_result;
pub mod result_set;

pub use license_result::{LicenseResult, Outcome};
pub use result_set::ResultSet;
