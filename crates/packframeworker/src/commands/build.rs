use colored::Colorize;
use inquire::Text;
use pfw_pack::builder::BuildReport;
use pfw_pack::stamp::StampOutcome;
use pfw_pack::{
    BuildProgress, BuildStage, PackBuilder, PackConfig, PackLayout, SyncOutcome, SystemRunner,
    VersionSelector,
};

use crate::errors::CliError;

/// Builds giga, nano and server for the current settings.
pub fn build_pack(layout: &PackLayout, config: &PackConfig) -> Result<(), CliError> {
    let version = select_version(layout)?;
    println!(
        "{} {}",
        "Selected modpack version:".bright_white(),
        version.bright_cyan().bold()
    );

    let mcversion = config.mcversion.clone();
    let builder = PackBuilder::new(layout.clone(), config.clone(), version)
        .with_progress(move |progress| print_progress(&mcversion, progress));
    let mut runner = SystemRunner;

    print_sync_outcome(&builder.sync_framework(&mut runner));

    for (variant, result) in builder.build_all(&mut runner) {
        match result {
            Ok(report) => print_report(&report),
            Err(e) => {
                eprintln!(
                    "{} {} {}",
                    "✗ Build of".bright_red().bold(),
                    variant.as_str().bright_red().bold(),
                    "failed:".bright_red().bold()
                );
                eprintln!("  {}", e.to_string().bright_red());
            }
        }
    }

    Ok(())
}

fn select_version(layout: &PackLayout) -> Result<String, CliError> {
    let selector = VersionSelector::new(layout.last_version_file());
    let mut prompt_error = None;

    let result = selector.select(|last| {
        let help = format!("Press Enter to keep '{}'", last);
        Text::new("Select the new modpack version:")
            .with_placeholder(last)
            .with_help_message(&help)
            .prompt()
            .map_err(|e| {
                prompt_error = Some(CliError::from_prompt(e));
                pfw_pack::Error::Other("version prompt failed".to_string())
            })
    });

    match (result, prompt_error) {
        (Ok(version), _) => Ok(version),
        (Err(_), Some(prompt_error)) => Err(prompt_error),
        (Err(e), None) => Err(CliError::from_pack(e)),
    }
}

fn print_sync_outcome(outcome: &SyncOutcome) {
    match outcome {
        SyncOutcome::Updated => {
            println!("{}", "✓ PackFramework is up to date".bright_green())
        }
        SyncOutcome::Cloned => println!("{}", "✓ PackFramework cloned".bright_green()),
        SyncOutcome::UpdateFailed(e) => {
            eprintln!("{} {}", "⚠️  Error updating PackFramework:".bright_yellow(), e)
        }
        SyncOutcome::CloneFailed(e) => eprintln!(
            "{} {}",
            "⚠️  Error cloning PackFramework repository:".bright_yellow(),
            e
        ),
    }
}

fn print_progress(mcversion: &str, progress: BuildProgress) {
    match progress.stage {
        BuildStage::Cleaning => println!(
            "{} {}",
            "🏗️  Building".bright_magenta(),
            format!("{}-{}...", mcversion, progress.variant)
                .bright_cyan()
                .bold()
        ),
        BuildStage::Merging(tier) => {
            println!("   {} {}", "•".bright_blue(), format!("merging {}", tier).dimmed())
        }
        BuildStage::Refreshing => println!(
            "   {} {}",
            "•".bright_blue(),
            "refreshing modpack using packwiz".dimmed()
        ),
        BuildStage::ApplyingRemovals | BuildStage::Stamping | BuildStage::Complete => {}
    }
}

fn print_report(report: &BuildReport) {
    if report.removal.list_found {
        println!(
            "   {} {}",
            "•".bright_blue(),
            format!(
                "removed {} listed path(s), {} already absent",
                report.removal.removed.len(),
                report.removal.missing.len()
            )
            .dimmed()
        );
    }
    for entry in &report.removal.skipped {
        eprintln!(
            "   {} {}",
            "⚠️  Skipped removal outside the pack:".bright_yellow(),
            entry
        );
    }
    for failure in &report.removal.failures {
        eprintln!("   {} {}", "⚠️  Error removing files:".bright_yellow(), failure);
    }

    let stamped = report
        .stamped
        .iter()
        .filter(|(_, outcome)| matches!(outcome, StampOutcome::Replaced(_)))
        .count();
    if stamped > 0 {
        println!(
            "   {} {}",
            "•".bright_blue(),
            format!("stamped version into {} file(s)", stamped).dimmed()
        );
    }
    for failure in &report.stamp_failures {
        eprintln!("   {} {}", "⚠️  Error processing file:".bright_yellow(), failure);
    }

    if let Err(e) = &report.packaging {
        eprintln!(
            "   {} {}",
            "⚠️  Error refreshing modpack with packwiz:".bright_yellow(),
            e
        );
    }

    let status = if report.is_clean() {
        "✅ Done!".bright_green().bold()
    } else {
        "✅ Done (with warnings)".bright_yellow().bold()
    };
    println!(
        "{} {} {}",
        status,
        "📍".bright_green(),
        report.output_dir.as_str().bright_white()
    );
}
