//! Digitune CLI - turn digit strings into melodies
//!
//! This binary renders digits (or a built-in mathematical constant) to a WAV
//! file and lists the available styles and presets.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use digitune_cli::commands;
use digitune_cli::commands::generate::GenerateOptions;

/// Digitune - Digits to Melody
#[derive(Parser)]
#[command(name = "digitune")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Where the digits come from.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// Digits to play; other characters are ignored
    #[arg(short, long, allow_hyphen_values = true)]
    digits: Option<String>,

    /// Built-in constant (pi, e, phi)
    #[arg(short, long)]
    preset: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render digits to a WAV file
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Tempo in beats per minute (1-1000)
        #[arg(short, long, default_value_t = 120)]
        tempo: u32,

        /// Style (joyful, waltz, holy, classic)
        #[arg(short, long, default_value = "joyful")]
        style: String,

        /// Octave (3-5)
        #[arg(long, default_value_t = 4)]
        octave: i32,

        /// Seed for the noise texture
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Synthesis configuration file (JSON)
        #[arg(short, long)]
        config: Option<String>,

        /// Output WAV path (default: digitune.wav)
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List available styles and presets
    Styles {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the chart sequence (non-zero digits) without rendering audio
    Chart {
        #[command(flatten)]
        source: SourceArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            source,
            tempo,
            style,
            octave,
            seed,
            config,
            output,
            json,
        } => commands::generate::run(&GenerateOptions {
            digits: source.digits.as_deref(),
            preset: source.preset.as_deref(),
            tempo_bpm: tempo,
            style: &style,
            octave,
            seed,
            config_path: config.as_deref(),
            output: output.as_deref(),
            json,
        }),
        Commands::Styles { json } => commands::styles::run(json),
        Commands::Chart { source, json } => {
            commands::chart::run(source.digits.as_deref(), source.preset.as_deref(), json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
