//! Styles command implementation
//!
//! Lists the available styles and digit presets.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use digitune_spec::{Preset, Style};

use super::json_output::{print_json, PresetEntry, StyleEntry, StylesOutput};

/// Builds the listing.
pub fn listing() -> StylesOutput {
    StylesOutput {
        styles: Style::ALL
            .iter()
            .map(|style| StyleEntry {
                name: style.as_str().to_string(),
                description: style.description().to_string(),
            })
            .collect(),
        presets: Preset::ALL
            .iter()
            .map(|preset| PresetEntry {
                name: preset.as_str().to_string(),
                description: preset.description().to_string(),
                digits: preset.digits().to_string(),
            })
            .collect(),
    }
}

/// Run the styles command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let listing = listing();

    if json_output {
        print_json(&listing)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Styles:".cyan().bold());
    for entry in &listing.styles {
        println!("  {:<8} {}", entry.name.green(), entry.description);
    }

    println!();
    println!("{}", "Presets:".cyan().bold());
    for entry in &listing.presets {
        println!("  {:<8} {}", entry.name.green(), entry.description);
        println!("  {:<8} {}", "", entry.digits.dimmed());
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_covers_everything() {
        let listing = listing();
        let names: Vec<&str> = listing.styles.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["joyful", "waltz", "holy", "classic"]);
        assert_eq!(listing.presets.len(), 3);
        assert!(listing.presets.iter().all(|p| p.digits.len() == 51));
    }

    #[test]
    fn test_listed_names_parse_back() {
        let listing = listing();
        for entry in &listing.styles {
            assert!(entry.name.parse::<Style>().is_ok());
        }
        for entry in &listing.presets {
            assert!(entry.name.parse::<Preset>().is_ok());
        }
    }
}
