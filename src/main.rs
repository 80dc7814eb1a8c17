mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use license_bouncer::adapters::outbound::console::{
    SilentProgressReporter, StderrProgressReporter,
};
use license_bouncer::adapters::outbound::filesystem::FileSystemReader;
use license_bouncer::application::dto::{
    FormatOption, RenderRequest, RenderResponse, ResultSource,
};
use license_bouncer::application::factories::{DestinationFactory, DestinationType};
use license_bouncer::application::use_cases::RenderResultsUseCase;
use license_bouncer::ports::outbound::ProgressReporter;
use license_bouncer::shared::error::ExitCode;
use license_bouncer::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    match run() {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load configuration (explicit path, or auto-discovery in the working directory)
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    let settings = Settings::merge(&args, &config)?;

    let response = if args.quiet {
        render(&settings, SilentProgressReporter::new())?
    } else {
        render(&settings, StderrProgressReporter::new())?
    };

    if settings.fail_on_denied && response.has_denied() {
        eprintln!(
            "🚫 {} dependency license(s) denied",
            response.denied_count
        );
        return Ok(ExitCode::DeniedLicenses);
    }

    Ok(ExitCode::Success)
}

fn render<PR: ProgressReporter>(settings: &Settings, progress_reporter: PR) -> Result<RenderResponse> {
    let use_case = RenderResultsUseCase::new(FileSystemReader::new(), progress_reporter);
    let destination = DestinationFactory::create(settings.destination.clone());
    let request = RenderRequest::new(settings.source.clone(), settings.format);
    use_case.execute(request, destination.as_ref())
}

/// Effective settings after CLI flags override the config file
#[derive(Debug)]
struct Settings {
    source: ResultSource,
    format: FormatOption,
    destination: DestinationType,
    fail_on_denied: bool,
}

impl Settings {
    fn merge(args: &Args, config: &ConfigFile) -> Result<Self> {
        let format = match args.format {
            Some(format) => format,
            None => config.format_option()?.unwrap_or(FormatOption::Text),
        };

        let output = args.output.clone().or_else(|| config.output.clone());

        Ok(Self {
            source: ResultSource::from_arg(args.input.as_deref()),
            format,
            destination: DestinationType::from_output(output),
            fail_on_denied: args.fail_on_denied || config.fail_on_denied.unwrap_or(false),
        })
    }
}
