use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use todofmt::cli::commands::{self, Outcome};
use todofmt::cli::Cli;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            std::process::exit(1);
        },
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = commands::load_config(&cli).context("loading configuration")?;
    config.general.color.apply();
    init_logging(&config.general.log_level);

    match commands::run(&cli, &config)? {
        Outcome::Formatted(text) | Outcome::Grammar(text) => {
            print!("{text}");
            Ok(0)
        },
        Outcome::Rejected { error, input } => {
            eprintln!("{}: {}", "parse error".red().bold(), error);
            eprint!("{input}");
            Ok(1)
        },
    }
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
