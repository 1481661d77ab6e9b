//! Company Cost Tree CLI
//!
//! Fetches companies and travels, builds the hierarchy, rolls travel
//! costs up to every ancestor and writes the result as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::time::Duration;

use company_cost_tree::commands::{
    display_version, execute_build, validate_args, validate_tree_file, BuildArgs,
};
use company_cost_tree::utils::config::{
    COMPANIES_SOURCE_ENV, DEFAULT_COMPANIES_SOURCE, DEFAULT_OUTPUT_PATH, DEFAULT_TRAVELS_SOURCE,
    TRAVELS_SOURCE_ENV,
};

/// Company Cost Tree - travel expenses rolled up a company hierarchy
#[derive(Parser, Debug)]
#[command(name = "company-tree")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the company tree and apply travel costs
    Build {
        /// Companies source (URL or file path)
        #[arg(short, long, env = COMPANIES_SOURCE_ENV, default_value = DEFAULT_COMPANIES_SOURCE)]
        companies: String,

        /// Travels source (URL or file path)
        #[arg(short, long, env = TRAVELS_SOURCE_ENV, default_value = DEFAULT_TRAVELS_SOURCE)]
        travels: String,

        /// Output path for the JSON tree
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Print the JSON tree to stdout
        #[arg(short, long)]
        echo: bool,

        /// Print elapsed time for each stage
        #[arg(long)]
        timings: bool,

        /// Fetch timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
    },

    /// Validate a company tree JSON file
    Validate {
        /// Path to company tree JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Build {
            companies,
            travels,
            output,
            echo,
            timings,
            timeout,
        } => {
            let args = BuildArgs {
                companies_source: companies,
                travels_source: travels,
                output_json: output,
                echo,
                timings,
                timeout: Duration::from_secs(timeout),
            };

            // Validate args first
            validate_args(&args)?;

            execute_build(args)?;
        }

        Commands::Validate { file } => {
            validate_tree_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
