use colored::Colorize;
use inquire::{validator::Validation, Text};
use pfw_pack::{ConfigOverrides, ConfigStore, PackConfig, PackLayout};

use crate::errors::CliError;

/// Asks for the settings stored in a fresh `config.json`.
pub fn prompt_initial_config() -> Result<PackConfig, CliError> {
    let mcversion = prompt_required("Enter Minecraft version (e.g., 1.20.1):")?;
    let modloader = prompt_required("Enter modloader (e.g., forge):")?;
    Ok(PackConfig::new(mcversion, modloader))
}

fn prompt_required(message: &str) -> Result<String, CliError> {
    let validator = |input: &str| {
        if input.trim().is_empty() {
            Ok(Validation::Invalid("A value is required".into()))
        } else {
            Ok(Validation::Valid)
        }
    };

    let value = Text::new(message)
        .with_validator(validator)
        .prompt()
        .map_err(CliError::from_prompt)?;

    Ok(value.trim().to_string())
}

fn prompt_override(message: &str, current: &str) -> Result<Option<String>, CliError> {
    let value = Text::new(message)
        .with_placeholder(current)
        .with_help_message("Press Enter to keep current")
        .prompt()
        .map_err(CliError::from_prompt)?;

    Ok(Some(value).filter(|v| !v.trim().is_empty()))
}

/// Shows the current settings, asks for new ones and returns the saved result.
///
/// The returned value replaces the menu's working configuration.
pub fn change_settings(layout: &PackLayout, current: &PackConfig) -> Result<PackConfig, CliError> {
    let store = ConfigStore::new(layout.config_file());

    println!("{}", "Current settings:".bright_white().bold());
    println!(
        "  {} {}",
        "1) Minecraft version:".bright_white(),
        current.mcversion.bright_cyan()
    );
    println!(
        "  {} {}",
        "2) Modloader:".bright_white(),
        current.modloader.bright_cyan()
    );
    println!();

    let overrides = ConfigOverrides {
        mcversion: prompt_override("Enter new Minecraft version:", &current.mcversion)?,
        modloader: prompt_override("Enter new modloader:", &current.modloader)?,
    };

    let updated = store.update(current, &overrides).map_err(CliError::from_pack)?;

    println!("{}", "✓ Settings updated.".bright_green().bold());
    println!(
        "  {} {} {}",
        "Now building:".bright_white(),
        updated.modloader.bright_green(),
        updated.mcversion.bright_green()
    );

    Ok(updated)
}
