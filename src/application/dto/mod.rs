/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod format_option;
mod render_request;
mod render_response;

pub use format_option::FormatOption;
pub use render_request::{RenderRequest, ResultSource};
pub use render_response::RenderResponse;
