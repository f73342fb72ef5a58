//! CLI definitions for lisible
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell as CompletionShell;
use once_cell::sync::Lazy;
use std::path::PathBuf;

/// Version string: crate version plus the git commit for dev builds.
pub static VERSION: Lazy<String> = Lazy::new(|| match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => format!("{} ({})", env!("CARGO_PKG_VERSION"), sha),
    None => env!("CARGO_PKG_VERSION").to_string(),
});

/// Build clap styles.
///
/// - Green: headers, usage, command names
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "lisible")]
#[command(about = "Estimate the CEFR level of French texts and rewrite them more simply")]
#[command(
    long_about = "lisible - French readability on the CEFR scale.

lisible estimates the reading level (A1 to C1) of a French text from its
sentence length and the share of rare words, and rewrites it to a simpler
register with an ordered set of rules (or a local LLM through ollama).

QUICK START:
    lisible analyze texte.txt                 Estimate the level of a file
    lisible simplify texte.txt                Simplify one level down
    lisible simplify --target A2 texte.txt    Simplify for an A2 reader
    echo \"Cependant, ...\" | lisible simplify    Read from stdin

Defaults come from ~/.config/lisible/config.toml (see 'lisible config show')."
)]
#[command(version = VERSION.as_str())]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of ~/.config/lisible/config.toml
    #[arg(long, id = "config_file", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Rewrite options shared by `simplify` and `batch`.
///
/// Unset options fall back to the `[simplify]` section of the config.
#[derive(Args, Debug, Clone, Default)]
pub struct SimplifyArgs {
    /// Intensity mode
    #[arg(long, value_parser = ["light", "standard", "strong"])]
    pub mode: Option<String>,

    /// How the target level is chosen
    #[arg(long, value_parser = ["auto", "target"])]
    pub strategy: Option<String>,

    /// Target CEFR level (implies --strategy target)
    #[arg(long, short, value_name = "LEVEL")]
    pub target: Option<String>,

    /// Rewrite engine
    #[arg(long, value_enum)]
    pub engine: Option<EngineArg>,
}

/// CLI mirror of [`crate::rewrite::Engine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineArg {
    /// Ordered rewrite rules
    Rules,
    /// Local model through ollama
    Llm,
}

impl From<EngineArg> for crate::rewrite::Engine {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Rules => crate::rewrite::Engine::Rules,
            EngineArg::Llm => crate::rewrite::Engine::Llm,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simplify a French text
    #[command(long_about = "Rewrite a French text to a simpler register.

The text is read from FILE, or from stdin when FILE is absent or '-'.
The simplified text is printed on stdout and the strategy rationale on
stderr. With --json the full result (including before/after analyses)
is printed instead.

With the default 'auto' strategy the level of the text is estimated and
the target is one level below it. Use --target to aim for a level.

EXAMPLES:
    lisible simplify texte.txt
    lisible simplify --target A1 texte.txt
    lisible simplify --mode light --json texte.txt
    lisible simplify --engine llm texte.txt")]
    Simplify {
        /// Input file ('-' or absent for stdin)
        #[arg(help = "Input file ('-' or absent for stdin)")]
        file: Option<PathBuf>,

        #[command(flatten)]
        args: SimplifyArgs,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate the CEFR level of a French text
    #[command(long_about = "Estimate the CEFR level of a French text.

Prints the estimated level, the level band, sentence and token counts
and the hardest words. With --json the full analysis is printed.

EXAMPLES:
    lisible analyze texte.txt
    lisible analyze --json texte.txt
    cat texte.txt | lisible analyze --words 20")]
    Analyze {
        /// Input file ('-' or absent for stdin)
        #[arg(help = "Input file ('-' or absent for stdin)")]
        file: Option<PathBuf>,

        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,

        /// Number of hard words to list
        #[arg(long, default_value_t = 10)]
        words: usize,
    },

    /// Simplify many files in parallel
    #[command(long_about = "Simplify several files in parallel.

Prints one JSON result per line, in the order the files were given.
A file that cannot be read is reported on its line and does not stop
the batch.

EXAMPLES:
    lisible batch chapitre1.txt chapitre2.txt
    lisible batch --workers 4 --target B1 textes/*.txt")]
    Batch {
        /// Input files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        args: SimplifyArgs,

        /// Number of parallel workers (default: CPU count, max 32)
        #[arg(long, short)]
        workers: Option<usize>,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and create the lisible configuration file.

Configuration is stored in ~/.config/lisible/config.toml and holds the
default simplification options, the LLM backend, the frequency table
and batch settings.

EXAMPLES:
    lisible config show      Display current configuration
    lisible config path      Print the config file location
    lisible config init      Write a default config file"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    #[command(long_about = "Write a configuration file with default values.

Refuses to overwrite an existing file unless --force is given.

EXAMPLE:
    lisible config init")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
