//! Command implementation for todofmt.

mod input;

pub use input::{PendingInput, Source};

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::cli::args::Cli;
use crate::config::Config;
use crate::error::TodoError;
use crate::output::document_json;
use crate::pipeline::format_document;
use crate::syntax::{Grammar, ParseError};

/// Result of a run that did not fail outright.
#[derive(Debug)]
pub enum Outcome {
    /// Canonical text for stdout.
    Formatted(String),
    /// The grammar in EBNF, for stdout.
    Grammar(String),
    /// The input did not parse. It is handed back so it can be echoed.
    Rejected { error: ParseError, input: String },
}

/// Load the configuration named on the command line, or the default one.
///
/// # Errors
///
/// Returns `TodoError::Config` if the file exists but cannot be parsed.
pub fn load_config(cli: &Cli) -> Result<Config, TodoError> {
    match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Reference date for relative date expressions.
#[must_use]
pub fn reference_date(cli: &Cli) -> NaiveDate {
    cli.today.unwrap_or_else(|| Local::now().date_naive())
}

/// Execute the formatter.
///
/// The input is read on a background thread while the grammar is built, and
/// handed over before parsing starts. With `--verbose` the parsed document is
/// written to stderr as JSON.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the JSON dump fails. A
/// parse failure is not an error here; see [`Outcome::Rejected`].
pub fn run(cli: &Cli, config: &Config) -> Result<Outcome, TodoError> {
    if cli.ebnf {
        return Ok(Outcome::Grammar(Grammar::build().to_string()));
    }

    let source = Source::from_path(cli.file.as_deref().or(config.general.file.as_deref()));
    info!(?source, "reading todo file");
    let pending = PendingInput::spawn(source);
    let grammar = Grammar::build();
    let input = pending.wait()?;

    let document = match grammar.parse(&input) {
        Ok(document) => document,
        Err(error) => return Ok(Outcome::Rejected { error, input }),
    };

    if cli.verbose {
        eprintln!("{}", document_json(&document)?);
    }

    let today = reference_date(cli);
    debug!(%today, "formatting");
    Ok(Outcome::Formatted(format_document(document, today)))
}
