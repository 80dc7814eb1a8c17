/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with output sinks, input sources and the console.
pub mod output_destination;
pub mod presenter;
pub mod progress_reporter;
pub mod result_set_reader;

pub use output_destination::OutputDestination;
pub use presenter::Presenter;
pub use progress_reporter::ProgressReporter;
pub use result_set_reader::ResultSetReader;
