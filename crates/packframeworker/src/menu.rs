use colored::Colorize;
use inquire::Text;
use pfw_pack::{PackConfig, PackLayout};

use crate::commands::{build_pack, change_settings, promote_release};
use crate::errors::CliError;
use crate::utils::{clear_screen, print_ansi_boxed_lines};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Build,
    Release,
    Settings,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Build),
            "2" => Some(Self::Release),
            "3" => Some(Self::Settings),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn print_menu(config: &PackConfig) {
    print_ansi_boxed_lines(&[format!(
        "[{} {}]",
        "PackFrameworker".bright_cyan().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_white()
    )]);
    println!(
        "{} {} {}",
        "Current settings:".bright_white(),
        config.mcversion.bright_cyan(),
        config.modloader.bright_cyan()
    );
    println!();
    println!("  {} Build Modpack", "1.".bright_yellow());
    println!("  {} Copy Beta to Release folders", "2.".bright_yellow());
    println!("  {} Change settings", "3.".bright_yellow());
    println!("  {} Exit", "0.".bright_yellow());
    println!();
}

/// Runs the interactive loop until the user picks Exit or cancels a prompt.
pub fn run_menu(layout: &PackLayout, mut config: PackConfig) -> Result<(), CliError> {
    loop {
        print_menu(&config);
        let input = Text::new("Enter number:")
            .prompt()
            .map_err(CliError::from_prompt)?;
        clear_screen();

        let result = match MenuChoice::parse(&input) {
            Some(MenuChoice::Build) => build_pack(layout, &config),
            Some(MenuChoice::Release) => promote_release(layout),
            Some(MenuChoice::Settings) => change_settings(layout, &config).map(|updated| {
                config = updated;
            }),
            Some(MenuChoice::Exit) => return Ok(()),
            None => {
                println!(
                    "{}",
                    "I'm sorry, but it seems you've selected the wrong option.".bright_red()
                );
                Ok(())
            }
        };

        match result {
            Ok(()) => {}
            Err(e) if e.is_cancelled() => return Err(e),
            Err(e) => eprintln!("{:?}", miette::Report::new(e)),
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_numbers() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Build));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::Release));
        assert_eq!(MenuChoice::parse(" 3 "), Some(MenuChoice::Settings));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
    }

    #[test]
    fn rejects_unknown_input() {
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("build"), None);
    }
}
