//! Generate command implementation
//!
//! Renders digits to a WAV file.

use std::fs;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use digitune_audio::{generate, AudioError};
use digitune_spec::ComposeRequest;
use tracing::debug;

use super::json_output::{error_codes, print_json, GenerateOutput, GenerateReport, JsonError};
use crate::input::{load_config, parse_style, DigitInput};

/// Output path used when `-o` is not given.
pub const DEFAULT_OUTPUT: &str = "digitune.wav";

/// Options of the generate command.
#[derive(Debug, Clone)]
pub struct GenerateOptions<'a> {
    /// Free digit text (`--digits`)
    pub digits: Option<&'a str>,
    /// Preset name (`--preset`)
    pub preset: Option<&'a str>,
    /// Tempo in beats per minute
    pub tempo_bpm: u32,
    /// Style name
    pub style: &'a str,
    /// Octave, 3 to 5
    pub octave: i32,
    /// Noise seed
    pub seed: u32,
    /// Optional synthesis configuration file
    pub config_path: Option<&'a str>,
    /// Output WAV path (default: [`DEFAULT_OUTPUT`])
    pub output: Option<&'a str>,
    /// Whether to output machine-readable JSON
    pub json: bool,
}

/// What one generate run ended with.
#[derive(Debug)]
enum Outcome {
    Written(GenerateReport),
    NoAudio,
    Failed { error: JsonError, exit: u8 },
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 success, 1 no audio or invalid input, 2 generation or write
/// error
pub fn run(options: &GenerateOptions<'_>) -> Result<ExitCode> {
    let outcome = execute(options);
    if options.json {
        report_json(outcome)
    } else {
        Ok(report_human(outcome))
    }
}

fn execute(options: &GenerateOptions<'_>) -> Outcome {
    let input = match DigitInput::resolve(options.digits, options.preset) {
        Ok(input) => input,
        Err(e) => return failed(JsonError::from_validation(&e), 1),
    };
    let style = match parse_style(options.style) {
        Ok(style) => style,
        Err(e) => return failed(JsonError::from_validation(&e), 1),
    };
    let config = match load_config(options.config_path) {
        Ok(config) => config,
        Err(e) => return failed(JsonError::from_config(&e), 1),
    };

    let request = ComposeRequest::new(input.text.clone(), options.tempo_bpm, style)
        .with_octave(options.octave)
        .with_seed(options.seed);
    debug!(source = %input.label(), ?request, "resolved request");

    let result = match generate(&request, &config) {
        Ok(Some(result)) => result,
        Ok(None) => return Outcome::NoAudio,
        Err(e) => {
            let exit = if matches!(e, AudioError::Spec(_)) { 1 } else { 2 };
            return failed(JsonError::from_audio(&e), exit);
        }
    };

    let output_path = options.output.unwrap_or(DEFAULT_OUTPUT);
    if let Err(e) = fs::write(output_path, &result.wav.wav_data) {
        return failed(
            JsonError::new(
                error_codes::WRITE,
                format!("Failed to write WAV file {}: {}", output_path, e),
            ),
            2,
        );
    }

    Outcome::Written(GenerateReport {
        source: input.label(),
        style: style.to_string(),
        tempo_bpm: request.tempo_bpm,
        octave: request.octave,
        seed: request.seed,
        output_path: output_path.to_string(),
        num_digits: result.num_digits,
        num_samples: result.wav.num_samples,
        sample_rate: result.wav.sample_rate,
        duration_seconds: result.wav.duration_seconds(),
        pcm_hash: result.wav.pcm_hash,
        chart: result.chart,
    })
}

fn failed(error: JsonError, exit: u8) -> Outcome {
    Outcome::Failed { error, exit }
}

fn report_json(outcome: Outcome) -> Result<ExitCode> {
    let (output, code) = match outcome {
        Outcome::Written(report) => (GenerateOutput::success(report), 0),
        Outcome::NoAudio => (
            GenerateOutput::failure(JsonError::new(
                error_codes::NO_AUDIO,
                "no audio: input contains no digits",
            )),
            1,
        ),
        Outcome::Failed { error, exit } => (GenerateOutput::failure(error), exit),
    };
    print_json(&output)?;
    Ok(ExitCode::from(code))
}

fn report_human(outcome: Outcome) -> ExitCode {
    match outcome {
        Outcome::Written(report) => {
            println!("{} {}", "Generated:".green().bold(), report.output_path);
            println!("  {} {}", "Source:".dimmed(), report.source);
            println!(
                "  {} {}, {} bpm, octave {}",
                "Style:".dimmed(),
                report.style,
                report.tempo_bpm,
                report.octave
            );
            println!(
                "  {} {} digits, {} samples ({:.2}s at {} Hz)",
                "Length:".dimmed(),
                report.num_digits,
                report.num_samples,
                report.duration_seconds,
                report.sample_rate
            );
            println!("  {} {}", "PCM hash:".dimmed(), report.pcm_hash);
            ExitCode::SUCCESS
        }
        Outcome::NoAudio => {
            println!("{} no audio: input contains no digits", "!!".yellow());
            ExitCode::from(1)
        }
        Outcome::Failed { error, exit } => {
            let location = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            eprintln!(
                "{} [{}]{}: {}",
                "error".red().bold(),
                error.code,
                location.dimmed(),
                error.message
            );
            ExitCode::from(exit)
        }
    }
}
