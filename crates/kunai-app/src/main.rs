use std::process::ExitCode;

use clap::Parser;
use kunai_app::cli::{Cli, Command};
use kunai_app::{commands, logging};
use kunai_core::config::load_config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let filter_handle = logging::init();

    match run(&cli, &filter_handle) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", commands::error_report(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, filter_handle: &logging::FilterHandle) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;

    logging::apply_level(filter_handle, &config.logging.level);
    tracing::debug!(config = ?config, "Configuration loaded");

    let mut out = std::io::stdout().lock();

    match &cli.command {
        Command::Convert { input, output } => {
            commands::convert(input, output, &config.files, &mut out)
        }
        Command::Show { file } => commands::show(file, &config.files, &mut out),
        Command::Validate { file } => commands::validate(file, &config.files, &mut out),
        Command::List { dir } => commands::list(dir, &config.files, &mut out),
    }
}
