//! gform CLI
//!
//! Command-line tool for inspecting saved form pages.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Inspect, validate and encode published HTML forms.
#[derive(Parser)]
#[command(name = "gform")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the extracted fields as JSON.
    Fields {
        /// Saved form page.
        page: PathBuf,
    },

    /// Validate values against the form's fields.
    Validate {
        /// Saved form page.
        page: PathBuf,

        /// JSON object of values keyed by field name.
        #[arg(long)]
        values: PathBuf,
    },

    /// Print the submission URL and the form-encoded body.
    Params {
        /// Saved form page.
        page: PathBuf,

        /// JSON object of values keyed by field name.
        #[arg(long)]
        values: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Fields { page } => {
            println!("{}", gform_cli::fields(&page)?);
        }

        Commands::Validate { page, values } => {
            let report = gform_cli::validate(&page, &values)?;
            println!("{}", report.output);
            if !report.valid {
                info!("validation failed");
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Params { page, values } => {
            println!("{}", gform_cli::params(&page, &values)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
