use colored::Colorize;
use pfw_pack::{promote, PackLayout};

use crate::errors::CliError;

pub fn promote_release(layout: &PackLayout) -> Result<(), CliError> {
    println!(
        "{} {} {} {}",
        "📦 Copying".bright_blue().bold(),
        layout.beta_root().as_str().bright_white(),
        "to".bright_blue().bold(),
        layout.release_root().as_str().bright_white()
    );

    let report = promote(layout).map_err(CliError::from_pack)?;

    if report.marker_stripped {
        println!("  {}", "Removed lastVersion.txt from release".dimmed());
    }
    println!(
        "{}\n{} {}",
        "✅ Release folder updated!".bright_green().bold(),
        "📍 Path:".bright_green(),
        report.release_root.as_str().bright_white().bold()
    );
    println!(
        "  {} files copied",
        report.stats.files_copied.to_string().bright_cyan()
    );

    Ok(())
}
