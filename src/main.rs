//! fincalc CLI
//!
//! Themed terminal calculator. Run with no arguments for the interactive
//! widget; the interest and installment computations are also available
//! as direct subcommands.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use fincalc::forms;
use fincalc::logging;
use fincalc::prefs::{self, ThemePreference};
use fincalc::report::{format_installment, format_interest, OutputFormat};
use fincalc::tui;

#[derive(Parser)]
#[command(name = "fincalc")]
#[command(about = "Themed terminal calculator with interest and installment modes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute simple interest and print the result card
    Interest {
        /// Principal amount
        #[arg(long)]
        principal: String,

        /// Annual interest rate, percent
        #[arg(long)]
        rate: String,

        /// Time period, years
        #[arg(long)]
        time: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Compute a fixed-rate installment plan
    Installment {
        /// Principal amount
        #[arg(long)]
        principal: String,

        /// Annual rate, percent (13 or 15)
        #[arg(long)]
        rate: String,

        /// Tenure in months (2-12)
        #[arg(long)]
        months: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Show or set the stored theme preference
    Theme {
        /// Set the preference instead of showing it
        #[arg(long, value_enum)]
        set: Option<ThemeArg>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemePreference::Light,
            ThemeArg::Dark => ThemePreference::Dark,
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = logging::init(&logging::default_log_dir()) {
        // The calculator works fine without a log file.
        eprintln!("Warning: logging disabled: {}", e);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_tui(),
        Some(Commands::Interest { principal, rate, time, format }) => {
            cmd_interest(&principal, &rate, &time, format.into())
        }
        Some(Commands::Installment { principal, rate, months, format }) => {
            cmd_installment(&principal, &rate, &months, format.into())
        }
        Some(Commands::Theme { set }) => cmd_theme(set.map(Into::into)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui() -> Result<(), String> {
    tui::run::run().map_err(|e| e.to_string())
}

/// Inputs arrive as raw strings so the CLI shares the forms' validation
/// and error messages with the widget.
fn cmd_interest(principal: &str, rate: &str, time: &str, format: OutputFormat) -> Result<(), String> {
    tracing::debug!("interest: principal={} rate={} time={}", principal, rate, time);

    let breakdown =
        forms::interest_from_fields(principal, rate, time).map_err(|e| e.to_string())?;
    print!("{}", format_interest(&breakdown, format));
    Ok(())
}

fn cmd_installment(
    principal: &str,
    rate: &str,
    months: &str,
    format: OutputFormat,
) -> Result<(), String> {
    tracing::debug!("installment: principal={} rate={} months={}", principal, rate, months);

    let breakdown =
        forms::installment_from_fields(principal, rate, months).map_err(|e| e.to_string())?;
    print!("{}", format_installment(&breakdown, format));
    Ok(())
}

fn cmd_theme(set: Option<ThemePreference>) -> Result<(), String> {
    let path = prefs::default_prefs_path();

    match set {
        Some(theme) => {
            prefs::save_theme(&path, theme).map_err(|e| e.to_string())?;
            println!("Theme set to {}", theme);
        }
        None => {
            println!("Theme: {}", prefs::load_theme(&path));
            println!("Preferences: {}", path.display());
        }
    }

    Ok(())
}
