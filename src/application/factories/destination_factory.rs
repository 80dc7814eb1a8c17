use crate::adapters::outbound::filesystem::{FileDestination, StdoutDestination};
use crate::ports::outbound::OutputDestination;
use std::path::PathBuf;

/// Destination type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationType {
    Stdout,
    File(PathBuf),
}

impl DestinationType {
    /// `None` means stdout
    pub fn from_output(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) => DestinationType::File(path),
            None => DestinationType::Stdout,
        }
    }
}

/// Factory for creating output destinations
///
/// The destination owns the sink a presenter writes into; this factory
/// picks the implementation from the caller's choice of target.
pub struct DestinationFactory;

impl DestinationFactory {
    /// Creates a destination instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use license_bouncer::application::factories::{DestinationFactory, DestinationType};
    ///
    /// let destination = DestinationFactory::create(DestinationType::Stdout);
    /// ```
    pub fn create(destination_type: DestinationType) -> Box<dyn OutputDestination> {
        match destination_type {
            DestinationType::Stdout => Box::new(StdoutDestination::new()),
            DestinationType::File(path) => Box::new(FileDestination::new(path)),
        }
    }
}
