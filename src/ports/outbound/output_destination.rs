use crate::ports::outbound::Presenter;
use crate::shared::Result;

/// OutputDestination port for delivering a rendered document
///
/// This port abstracts where the document goes (stdout, a file, ...).
/// Implementations own the sink's lifecycle: they acquire it, hand it to the
/// presenter, flush it and release it.
pub trait OutputDestination {
    /// Runs `presenter` against a freshly acquired sink
    ///
    /// # Errors
    /// Returns an error if:
    /// - The sink cannot be acquired (missing directory, symlink target, permissions)
    /// - The presenter fails to write
    fn deliver(&self, presenter: &dyn Presenter) -> Result<()>;
}
