//! Craftlist - CLI
//!
//! Generates customized password wordlists from target-specific seed words.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;
use craftlist::{
    commands::Session,
    config::{Config, defaults::DEFAULT_OUTPUT},
    core::SeparatorPolicy,
    error::CraftError,
    generator::CancellationToken,
    output::{
        SpinnerProgress, print_cancelled, print_estimate, print_intro, print_loaded_words,
        print_placeholders, print_summary,
    },
    wordlists::SeedWords,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit status after an interrupt, as shells report SIGINT
const EXIT_CANCELLED: u8 = 130;

#[derive(Parser)]
#[command(
    name = "craftlist",
    about = "Generate customized wordlists tailored to a company's specific details",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file overriding the built-in lists and patterns
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Minimum password length
    #[arg(long, global = true)]
    min_length: Option<usize>,

    /// Maximum password length
    #[arg(long, global = true)]
    max_length: Option<usize>,

    /// First year of the year range (default 1990)
    #[arg(long, global = true)]
    min_year: Option<i32>,

    /// Last year of the year range (default: current year)
    #[arg(long, global = true)]
    max_year: Option<i32>,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Args)]
struct SeedArgs {
    /// Company names and abbreviations, one per line
    #[arg(short, long)]
    words: PathBuf,

    /// Network names (SSIDs), one per line
    #[arg(short, long)]
    ssids: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate, then write every candidate to the output file
    Generate {
        #[command(flatten)]
        seeds: SeedArgs,

        /// Output file path
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Skip candidates already written in this run
        #[arg(long)]
        dedup: bool,

        /// Fail instead of leaving <SEP> tokens unfilled
        #[arg(long)]
        strict_separators: bool,
    },

    /// Report how many candidates a run would produce
    Estimate {
        #[command(flatten)]
        seeds: SeedArgs,

        /// Show the breakdown per pattern
        #[arg(long)]
        details: bool,
    },

    /// List all available placeholders
    Placeholders,
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Config file overlay plus command-line bounds
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    let generator = &mut config.generator;

    if let Some(min) = cli.min_length {
        generator.min_password_length = min;
    }
    if let Some(max) = cli.max_length {
        generator.max_password_length = max;
    }
    if let Some(year) = cli.min_year {
        generator.min_year = year;
    }
    if let Some(year) = cli.max_year {
        generator.max_year = year;
    }

    Ok(config)
}

fn load_seeds(args: &SeedArgs) -> Result<SeedWords> {
    let seeds = SeedWords::load(&args.words, args.ssids.as_deref())?;

    print_loaded_words("custom words", seeds.custom.len());
    if let Some(ids) = &seeds.network_ids {
        print_loaded_words("SSIDs", ids.len());
    }

    Ok(seeds)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    print_intro(VERSION);

    match &cli.command {
        Commands::Placeholders => {
            print_placeholders();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Estimate { seeds, details } => {
            run_estimate_command(load_config(&cli)?, seeds, *details)
        }
        Commands::Generate {
            seeds,
            output,
            dedup,
            strict_separators,
        } => {
            let mut config = load_config(&cli)?;
            config.output.path.clone_from(output);
            config.output.dedup = *dedup;
            if *strict_separators {
                config.output.separator_policy = SeparatorPolicy::Strict;
            }
            run_generate_command(config, seeds)
        }
    }
}

fn run_estimate_command(config: Config, args: &SeedArgs, details: bool) -> Result<ExitCode> {
    let seeds = load_seeds(args)?;
    let session = Session::prepare(config, &seeds)?;
    print_estimate(&session.estimate(), details);
    Ok(ExitCode::SUCCESS)
}

fn run_generate_command(config: Config, args: &SeedArgs) -> Result<ExitCode> {
    let seeds = load_seeds(args)?;
    let session = Session::prepare(config, &seeds)?;
    print_estimate(&session.estimate(), false);

    let cancel = CancellationToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .context("failed to install Ctrl-C handler")?;

    println!("\n{}", "Generating password combinations...".cyan());

    let path = &session.config().output.path;
    let progress = SpinnerProgress::new();

    match session.generate(&cancel, &progress) {
        Ok(summary) => {
            print_summary(&summary, path);
            Ok(ExitCode::SUCCESS)
        }
        Err(CraftError::Cancelled { written }) => {
            progress.abandon();
            print_cancelled(written, path);
            Ok(ExitCode::from(EXIT_CANCELLED))
        }
        Err(err) => {
            progress.abandon();
            Err(err).context("password generation failed")
        }
    }
}
