mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod shared;
mod update_check;

use adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
use adapters::outbound::process::CommandUpdateSource;
use application::read_models::StatusReadModelBuilder;
use application::use_cases::CheckUpdatesUseCase;
use cli::Args;
use config::Settings;
use ports::outbound::OutputPresenter;
use shared::error::ExitCode;
use shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments before we get here
    let args = Args::parse_args();

    // Abandon the cycle on a termination signal: the in-flight commands are
    // killed on drop and no payload is written.
    let exit_code = tokio::select! {
        result = run(args) => match result {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                eprintln!("\n❌ An error occurred:\n");
                eprintln!("{}", e);

                // Display error chain
                let mut source = e.source();
                while let Some(err) = source {
                    eprintln!("\nCaused by: {}", err);
                    source = err.source();
                }

                eprintln!();
                ExitCode::ApplicationError
            }
        },
        _ = tokio::signal::ctrl_c() => ExitCode::Interrupted,
    };

    process::exit(exit_code.as_i32());
}

async fn run(args: Args) -> Result<()> {
    let config_file = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config()?.unwrap_or_default(),
    };
    let settings = Settings::resolve(args.format, config_file)?;

    // Create adapters (Dependency Injection)
    let official_source =
        CommandUpdateSource::official(settings.official_command.clone(), settings.timeout);
    let aur_source = CommandUpdateSource::aur(settings.aur_command.clone(), settings.timeout);
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = CheckUpdatesUseCase::new(
        official_source,
        aur_source,
        settings.vendor_policy.clone(),
        progress_reporter,
    );

    // Execute one reporting cycle; a valid payload is produced even when
    // both sources fail
    let report = use_case.execute().await;

    // Render and present
    let model = StatusReadModelBuilder::build(&report);
    let formatter = settings.format.create_formatter();
    let output = formatter.format(&model)?;

    StdoutPresenter::new().present(&output)?;

    Ok(())
}
