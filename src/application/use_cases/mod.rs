/// Use cases module containing application business logic orchestration
mod render_results;

pub use render_results::RenderResultsUseCase;
