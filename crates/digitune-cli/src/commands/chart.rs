//! Chart command implementation
//!
//! Prints the digit sequence an on-screen chart would plot: the non-zero
//! digits of the input, capped in length. No audio is rendered.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use super::json_output::{print_json, ChartOutput, JsonError};
use crate::input::DigitInput;

/// Run the chart command
///
/// # Returns
/// Exit code: 0 success, 1 invalid input
pub fn run(digits: Option<&str>, preset: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let input = match DigitInput::resolve(digits, preset) {
        Ok(input) => input,
        Err(e) => {
            if json_output {
                print_json(&ChartOutput {
                    success: false,
                    errors: vec![JsonError::from_validation(&e)],
                    chart: Vec::new(),
                })?;
            } else {
                eprintln!("{}: {}", "error".red().bold(), e);
            }
            return Ok(ExitCode::from(1));
        }
    };

    let chart = input.sequence().chart_values();

    if json_output {
        print_json(&ChartOutput {
            success: true,
            errors: Vec::new(),
            chart,
        })?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Chart of".cyan().bold(), input.label());
    if chart.is_empty() {
        println!("  {}", "(no non-zero digits)".dimmed());
    }
    for line in render_bars(&chart) {
        println!("  {}", line.magenta());
    }

    Ok(ExitCode::SUCCESS)
}

/// One text bar per value.
pub fn render_bars(values: &[u8]) -> Vec<String> {
    values
        .iter()
        .map(|&v| format!("{} {}", v, "#".repeat(v as usize)))
        .collect()
}
