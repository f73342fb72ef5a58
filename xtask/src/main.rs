//! xtask - Build tasks for lisible
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand};

use lisible::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for lisible")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages only
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md only
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // No specific format means both
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Render one man page per command, recursing into subcommands.
///
/// Pages are named after the command path: `lisible.1`, `lisible-config-init.1`.
fn render_man_tree(cmd: &Command, prefix: &str, dir: &Path) -> Result<()> {
    use clap_mangen::Man;

    let name = if prefix.is_empty() {
        cmd.get_name().to_string()
    } else {
        format!("{}-{}", prefix, cmd.get_name())
    };

    let mut buffer = Vec::new();
    Man::new(cmd.clone()).render(&mut buffer)?;
    let path = dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {:?}", path))?;
    println!("Generated: {}", path.display());

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        render_man_tree(sub, &name, dir)?;
    }
    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    render_man_tree(&cmd, "", &man_dir)?;

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

/// Markdown section for one command and its visible options.
fn command_section(cmd: &Command, path: &str) -> String {
    let mut section = format!("## {}\n\n", path);
    if let Some(about) = cmd.get_about() {
        section.push_str(&format!("{}\n\n", about));
    }
    if let Some(long_about) = cmd.get_long_about() {
        section.push_str(&format!("```\n{}\n```\n\n", long_about));
    }

    let args: Vec<_> = cmd
        .get_arguments()
        .filter(|a| !a.is_hide_set() && !matches!(a.get_id().as_str(), "help" | "version"))
        .collect();
    if !args.is_empty() {
        section.push_str("| Argument | Description |\n|---|---|\n");
        for arg in args {
            let label = match (arg.get_long(), arg.get_short()) {
                (Some(long), Some(short)) => format!("`-{}, --{}`", short, long),
                (Some(long), None) => format!("`--{}`", long),
                (None, Some(short)) => format!("`-{}`", short),
                (None, None) => format!("`<{}>`", arg.get_id().as_str().to_uppercase()),
            };
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            section.push_str(&format!("| {} | {} |\n", label, help));
        }
        section.push('\n');
    }
    section
}

fn collect_sections(cmd: &Command, path: &str, out: &mut String) {
    out.push_str(&command_section(cmd, path));
    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        collect_sections(sub, &format!("{} {}", path, sub.get_name()), out);
    }
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();

    let mut markdown = String::from("# lisible Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    collect_sections(&cmd, "lisible", &mut markdown);

    let path = output.join("COMMANDS.md");
    fs::write(&path, markdown).with_context(|| format!("Failed to write {:?}", path))?;
    println!("Generated: {}", path.display());
    Ok(())
}
