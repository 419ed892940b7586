mod commands;
mod config;
mod error;
mod javap;
mod skip;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{generate, init, inspect, GenerateArgs, InitArgs, InspectArgs};
use tracing_subscriber::EnvFilter;

/// javastub - Python stubs for Java classes
#[derive(Parser, Debug)]
#[command(name = "javastub")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output debugging information
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a javastub config file in the current directory
    Init(InitArgs),

    /// Generate Python wrapper stubs for Java classes
    Generate(GenerateArgs),

    /// Print the parsed public surface of Java classes
    Inspect(InspectArgs),
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Generate(args) => generate(args, &cwd),
        Command::Inspect(args) => inspect(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
