mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gigcal")]
#[command(about = "Split a master gig listing into per-area text files and calendars")]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the listing and write every area's .txt and .ics files (default)
    Build(BuildArgs),
    /// Show the effective configuration
    Config {
        /// Config file to use instead of the default lookup
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(clap::Args, Default)]
struct BuildArgs {
    /// Config file to use instead of the default lookup
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Master listing to read
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory for <area>_Events.txt files
    #[arg(long)]
    txt_dir: Option<PathBuf>,

    /// Directory for <area>_Events.ics files
    #[arg(long)]
    ics_dir: Option<PathBuf>,

    /// Name of the calendar spanning every area
    #[arg(long)]
    label: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Commands::Build(BuildArgs::default())) {
        Commands::Build(args) => commands::build::run(commands::build::Overrides {
            config: args.config,
            input: args.input,
            txt_dir: args.txt_dir,
            ics_dir: args.ics_dir,
            label: args.label,
        }),
        Commands::Config { config } => commands::config::run(config.as_deref()),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
