/// Filesystem adapters: result input and document output
mod file_reader;
mod file_writer;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileDestination, StdoutDestination};
