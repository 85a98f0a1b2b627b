//! Process entry point

use crate::app::cli::args::Args;
use crate::app::cli::config::Settings;
use crate::core::error_handling::{fallback_message, log_error_with_context};
use crate::core::logging::init_logging;
use crate::sync::{sync, SyncTarget};
use clap::Parser;
use std::process::ExitCode;

/// Parse arguments, resolve settings, run the sync and map the outcome to an exit code
pub fn startup() -> ExitCode {
    let args = Args::parse();
    run(&args)
}

/// Run with already parsed arguments
pub fn run(args: &Args) -> ExitCode {
    // Configuration must be known before the logger can be built
    let settings = match Settings::resolve(args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", fallback_message(&e, "Loading configuration"));
            return ExitCode::FAILURE;
        }
    };

    let log_file = settings.log_file.as_deref().and_then(|p| p.to_str());
    let logging_active = match init_logging(
        settings.log_level.as_deref(),
        settings.log_format.as_deref(),
        log_file,
        settings.use_color(),
    ) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: could not start logging: {}", e);
            false
        }
    };

    log::debug!("Resolved settings: {:?}", settings);
    execute(&settings.target, logging_active)
}

fn execute(target: &SyncTarget, logging_active: bool) -> ExitCode {
    log::info!(
        "Syncing plugin id \"{}\" in {} from {}",
        target.plugin_id,
        target.document.display(),
        target.manifest.display()
    );

    match sync(target) {
        Ok(report) => {
            log::debug!("Sync report: {:?}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let context = format!(
                "Syncing {} from {}",
                target.document.display(),
                target.manifest.display()
            );
            if logging_active {
                log_error_with_context(&e, &context);
            } else {
                eprintln!("{}", fallback_message(&e, &context));
            }
            ExitCode::FAILURE
        }
    }
}
