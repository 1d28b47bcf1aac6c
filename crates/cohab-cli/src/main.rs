#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cohab_core::config::{CohabConfig, resolve_config};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "cohab: who lived with whom, and where",
    long_about = None
)]
struct Cli {
    /// Enable debug logging for cohab crates.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format. Defaults to pretty on a terminal, text when piped.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Config file. Defaults to `cohab.toml` in the current directory.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Build the cohabitation graph",
        long_about = "Replay an occupancy log and emit the cohabitation graph as JSON or Graphviz DOT.",
        after_help = "EXAMPLES:\n    # JSON graph document on stdout\n    cohab build moves.txt\n\n    # Render with Graphviz\n    cohab build moves.txt --dot | dot -Tpng -o graph.png\n\n    # Write to a file and print a summary\n    cohab build moves.txt --dot -o graph.dot"
    )]
    Build(cmd::build::BuildArgs),

    #[command(
        about = "Summarize the graph",
        long_about = "Replay an occupancy log and report node, edge, and component counts.",
        after_help = "EXAMPLES:\n    # Human summary\n    cohab stats moves.txt\n\n    # Emit machine-readable output\n    cohab stats moves.txt --format json"
    )]
    Stats(cmd::FeedArgs),

    #[command(
        about = "List houses",
        long_about = "List every house in first-mention order with its legend colour, current occupants, and edge count.",
        after_help = "EXAMPLES:\n    # Table of houses\n    cohab houses moves.txt\n\n    # Tab-separated for scripts\n    cohab houses moves.txt --format text"
    )]
    Houses(cmd::FeedArgs),

    #[command(
        about = "Show one person",
        long_about = "Show a person's residence history and everyone they lived with.",
        after_help = "EXAMPLES:\n    # Look up a tenant\n    cohab person moves.txt Alice\n\n    # Emit machine-readable output\n    cohab person moves.txt Alice --json"
    )]
    Person(cmd::person::PersonArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("COHAB_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "cohab=debug,cohab_core=debug,info"
        } else {
            "cohab=info,cohab_core=info,warn"
        })
    });

    let format = env::var("COHAB_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries command output; logs always go to stderr.
    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<CohabConfig> {
    let cwd = env::current_dir()?;
    resolve_config(cli.config.as_deref(), &cwd)
}

fn run(cli: &Cli, output: OutputMode) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    debug!(?config, "resolved config");

    match &cli.command {
        Commands::Build(args) => cmd::build::run_build(args, &config, output),
        Commands::Stats(args) => cmd::stats::run_stats(args, &config, output),
        Commands::Houses(args) => cmd::houses::run_houses(args, &config, output),
        Commands::Person(args) => cmd::person::run_person(args, &config, output),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();
    match run(&cli, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let cli_err = CliError::from_anyhow(&err);
            if render_error(output, &cli_err).is_err() {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
