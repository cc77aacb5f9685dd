//! gradelens CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use gradelens_core::error::AnalysisError;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "gradelens", version, about = "Quiz grade statistics toolkit")]
struct Cli {
    /// Path to the grades CSV (overrides config)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Descriptive statistics over the total scores
    Stats {
        /// Output format: table, json
        #[arg(long)]
        format: Option<String>,
    },

    /// Pearson correlation between question pairs
    Correlation {
        /// First question (1-10); omit both questions for the full matrix
        #[arg(long)]
        given: Option<u8>,

        /// Second question (1-10)
        #[arg(long)]
        target: Option<u8>,

        /// Output format: table, json
        #[arg(long)]
        format: Option<String>,
    },

    /// Probability that the target question is correct given another is
    Conditional {
        /// Given question (1-10)
        #[arg(long)]
        given: u8,

        /// Target question (1-10)
        #[arg(long)]
        target: u8,

        /// Output format: table, json
        #[arg(long)]
        format: Option<String>,
    },

    /// Posterior probability of reaching a total-score threshold
    Bayes {
        /// Condition question label (q1-q10)
        #[arg(long)]
        condition: String,

        /// Expected answer value for the condition question
        #[arg(long, default_value = "1")]
        value: u8,

        /// Total-score threshold
        #[arg(long)]
        threshold: i64,

        /// Output format: table, json
        #[arg(long)]
        format: Option<String>,
    },

    /// Dump the parsed records
    Records {
        /// Output format: table, json
        #[arg(long)]
        format: Option<String>,
    },

    /// Validate a dataset file
    Validate,

    /// Run every analysis and write a report
    Report {
        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, html, all
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Create a starter config and sample dataset
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradelens=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let dataset = cli.dataset;
    let config = cli.config;

    let result = match cli.command {
        Commands::Stats { format } => commands::stats::execute(dataset, config, format),
        Commands::Correlation {
            given,
            target,
            format,
        } => commands::correlation::execute(dataset, config, given, target, format),
        Commands::Conditional {
            given,
            target,
            format,
        } => commands::conditional::execute(dataset, config, given, target, format),
        Commands::Bayes {
            condition,
            value,
            threshold,
            format,
        } => commands::bayes::execute(dataset, config, condition, value, threshold, format),
        Commands::Records { format } => commands::records::execute(dataset, config, format),
        Commands::Validate => commands::validate::execute(dataset, config),
        Commands::Report { output, format } => {
            commands::report::execute(dataset, config, output, format)
        }
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        let code = match e.downcast_ref::<AnalysisError>() {
            Some(err) if err.is_caller_error() => 2,
            _ => 1,
        };
        process::exit(code);
    }
}
