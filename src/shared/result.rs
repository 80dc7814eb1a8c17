/// Result alias used across the crate.
///
/// Typed failures are `BouncerError` values carried inside `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
