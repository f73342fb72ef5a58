//! lisible - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lisible::cli::{Cli, Commands, ConfigCommands};

/// Environment variable holding an explicit log filter.
const LOG_ENV: &str = "LISIBLE_LOG";

/// Install the stderr log subscriber.
///
/// `LISIBLE_LOG` wins over `-v`; without either only warnings are shown.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Simplify { file, args, json } => {
            commands::simplify::handle(file.as_deref(), &args, json, cli.verbose, config_path)
        }
        Commands::Analyze { file, json, words } => {
            commands::analyze::handle(file.as_deref(), json, words, config_path)
        }
        Commands::Batch {
            files,
            args,
            workers,
        } => commands::batch::handle(&files, &args, workers, config_path),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config_path),
            ConfigCommands::Path => commands::config::handle_path(config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(force, config_path),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
