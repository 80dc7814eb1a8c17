use crate::application::dto::{RenderRequest, RenderResponse};
use crate::application::factories::PresenterFactory;
use crate::license_evaluation::domain::Outcome;
use crate::ports::outbound::{OutputDestination, ProgressReporter, ResultSetReader};
use crate::shared::Result;

/// RenderResultsUseCase - Core use case for rendering license results
///
/// Loads the evaluated results, picks the presenter for the requested
/// format and hands it to the caller's destination. Status messages go to
/// the progress reporter only.
///
/// # Type Parameters
/// * `R` - ResultSetReader implementation
/// * `PR` - ProgressReporter implementation
pub struct RenderResultsUseCase<R, PR> {
    result_reader: R,
    progress_reporter: PR,
}

impl<R, PR> RenderResultsUseCase<R, PR>
where
    R: ResultSetReader,
    PR: ProgressReporter,
{
    /// Creates a new RenderResultsUseCase with injected dependencies
    pub fn new(result_reader: R, progress_reporter: PR) -> Self {
        Self {
            result_reader,
            progress_reporter,
        }
    }

    /// Executes the render use case
    ///
    /// # Arguments
    /// * `request` - Source of the results and the output format
    /// * `destination` - Where the document is written
    ///
    /// # Returns
    /// RenderResponse with the result counts of the rendered document
    ///
    /// # Errors
    /// Returns an error if the results cannot be read or the document cannot
    /// be written. Nothing is retried.
    pub fn execute(
        &self,
        request: RenderRequest,
        destination: &dyn OutputDestination,
    ) -> Result<RenderResponse> {
        // Step 1: Load results
        self.progress_reporter.report(&format!(
            "📖 Loading license results from: {}",
            request.source.display_name()
        ));

        self.progress_reporter
            .start_spinner("Reading license results...");
        let results = match self.result_reader.read_results(&request.source) {
            Ok(results) => results,
            Err(e) => {
                self.progress_reporter.finish_spinner();
                return Err(e);
            }
        };

        let denied_count = results.count(Outcome::Denied);
        let unknown_count = results.count(Outcome::Unknown);
        let breakdown: Vec<String> = Outcome::ALL
            .iter()
            .map(|&outcome| format!("{} {}", results.count(outcome), outcome))
            .collect();
        self.progress_reporter.report(&format!(
            "✅ Loaded {} result(s): {}",
            results.len(),
            breakdown.join(", ")
        ));

        // Step 2: Render
        self.progress_reporter
            .report(PresenterFactory::progress_message(request.format));

        let presenter = PresenterFactory::create(request.format, &results);
        if let Err(e) = destination.deliver(presenter.as_ref()) {
            self.progress_reporter
                .report_error("❌ Rendering failed; any partial output is unusable");
            return Err(e);
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Rendered {} result(s) as {}",
            results.len(),
            request.format
        ));

        Ok(RenderResponse::new(
            request.format,
            results.len(),
            denied_count,
            unknown_count,
        ))
    }
}
