// Rust guideline compliant 2026-02-06

//! Laptime CLI Application
//!
//! Runs programs as timed operations and prints how long they took.

use anyhow::Context;
use clap::Parser;
use laptime_cli::{color_choice, commands, create_formatter};
use laptime_core::{ConsoleTimer, TimerConfig};
use std::path::PathBuf;
use termcolor::StandardStream;
use tracing::Level;

const DEFAULT_CONFIG_FILE: &str = "laptime.toml";

#[derive(Parser, Debug)]
#[command(
    name = "laptime",
    version,
    about = "Laptime: time the steps of a command run",
    long_about = "Laptime runs programs as timed operations, printing a start line, a completion line padded to the terminal width, and the total run time.",
    after_help = "Examples:\n  laptime exec -- cargo build --release\n  laptime exec --label \"Running tests\" -- cargo test\n  laptime steps ci.toml\n  laptime format 42 1500 65000\n"
)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level for diagnostics on stderr
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run a program as a timed operation
    Exec {
        /// Label for the operation (defaults to the command line)
        #[arg(long)]
        label: Option<String>,

        /// Program and arguments, after `--`
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// Run the steps listed in a TOML file
    Steps {
        /// Path to the steps file
        file: PathBuf,
    },

    /// Format millisecond values as durations
    Format {
        /// Durations in milliseconds
        #[arg(required = true)]
        values: Vec<u64>,

        /// Enable JSON output
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, !cli.no_color)?;

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = TimerConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let choice = color_choice(config.color, cli.no_color);
    let stdout = StandardStream::stdout(choice);
    let mut timer = ConsoleTimer::with_config(stdout, config);

    let code = match cli.command {
        Some(Commands::Exec { label, command }) => {
            commands::exec::execute(&mut timer, label, &command)?
        }
        Some(Commands::Steps { file }) => commands::steps::execute(&mut timer, &file, choice)?,
        Some(Commands::Format { values, json }) => {
            let formatter = create_formatter(json);
            println!("{}", commands::format::execute(&values, formatter.as_ref()));
            0
        }
        None => {
            println!("Use --help for usage information");
            0
        }
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn init_tracing(level: &str, ansi: bool) -> anyhow::Result<()> {
    let level = parse_log_level(level)?;
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

fn parse_log_level(level: &str) -> anyhow::Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("Invalid log level: {}", other),
    }
}
