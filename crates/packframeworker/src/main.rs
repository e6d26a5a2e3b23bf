use clap::builder::{styling::AnsiColor, Styles};
use clap::ColorChoice;
use clap::{CommandFactory, FromArgMatches, Parser};
use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

mod commands;
mod errors;
mod menu;
mod utils;

/// Builds giga, nano and server modpacks on top of PackFramework.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding beta/, mod/, framework/ and config.json.
    /// Defaults to the directory of the executable.
    #[arg(long)]
    root: Option<PathBuf>,
}

fn parse_args() -> Args {
    // Configure colored/styled help output
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Blue.on_default());

    let matches = Args::command()
        .styles(styles)
        .color(ColorChoice::Auto)
        .get_matches();

    Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = parse_args();
    init_logging();

    let missing = pfw_pack::missing_tools();
    if !missing.is_empty() {
        eprintln!(
            "{} {}",
            "⚠️  Not found on PATH:".bright_yellow(),
            missing.join(", ")
        );
    }

    let layout = utils::config::resolve_layout(args.root)?;
    tracing::debug!("Using install root {}", layout.root());

    let config = utils::config::load_or_prompt_config(&layout)?;
    menu::run_menu(&layout, config)?;
    Ok(())
}
