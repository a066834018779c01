//! pdfiler-setup CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pdfiler_setup::cli::Cli;
use pdfiler_setup::installer::{self, RunOptions};
use pdfiler_setup::shell::is_ci;
use pdfiler_setup::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pdfiler_setup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pdfiler_setup=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pdfiler-setup starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(!is_ci(), output_mode);

    let config = cli.install_config();
    let opts = RunOptions {
        dry_run: cli.dry_run,
    };

    match installer::run(&config, ui.as_mut(), &opts) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&format!("{}", e));
            ExitCode::from(1)
        }
    }
}
