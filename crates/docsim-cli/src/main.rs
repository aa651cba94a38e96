//! docsim - Main Entry Point
//!
//! Compares two plain-text documents with edit distance and longest
//! common substring.
//!
//! Usage:
//!     docsim compare little_women.txt pride_and_prejudice.txt
//!     docsim compare a.txt b.txt --algorithm substring --format json
//!     docsim normalize a.txt

use clap::{Parser, Subcommand};
use docsim_cli::config::DEFAULT_FRAGMENT_CHARS;
use docsim_cli::{run_compare, run_normalize, AlgorithmSelection, CompareConfig, OutputFormat};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docsim")]
#[command(about = "Document similarity via edit distance and longest common substring")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides it
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare two documents
    Compare {
        /// First document
        first: PathBuf,

        /// Second document
        second: PathBuf,

        /// Engines to run
        #[arg(short, long, value_enum, default_value_t = AlgorithmSelection::Both)]
        algorithm: AlgorithmSelection,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Maximum characters of the common fragment shown in text reports
        #[arg(long, default_value_t = DEFAULT_FRAGMENT_CHARS)]
        fragment_chars: usize,
    },

    /// Print the normalized form of a document
    Normalize {
        /// Document to normalize
        path: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    docsim_cli::tracing::init_with_filter(&args.log_level);

    let output = match args.command {
        Command::Compare {
            first,
            second,
            algorithm,
            format,
            fragment_chars,
        } => {
            let config = CompareConfig {
                algorithms: algorithm,
                format,
                fragment_max_chars: fragment_chars,
            };
            run_compare(&first, &second, &config)?
        }
        Command::Normalize { path } => run_normalize(&path)?,
    };

    println!("{}", output);
    Ok(())
}
