//! The end-to-end formatting pass.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::compile::{assign_creation_dates, compile, default_rules};
use crate::error::TodoError;
use crate::output::render;
use crate::syntax::{Document, Grammar};

static GRAMMAR: Lazy<Grammar> = Lazy::new(Grammar::build);

/// Compile an already parsed document and render it in canonical form.
#[must_use]
pub fn format_document(document: Document, today: NaiveDate) -> String {
    let document = assign_creation_dates(document, today);
    let compiled = compile(document, &default_rules(today));
    let text = render(&compiled);
    debug!(bytes = text.len(), "rendered document");
    text
}

/// Parse, compile and render `input` with a prepared grammar.
///
/// # Errors
///
/// Returns `TodoError::Parse` if the input does not match the grammar. No
/// output is produced in that case.
pub fn format_with(grammar: &Grammar, today: NaiveDate, input: &str) -> Result<String, TodoError> {
    let document = grammar.parse(input)?;
    Ok(format_document(document, today))
}

/// Parse, compile and render `input` using a shared grammar.
///
/// # Errors
///
/// Returns `TodoError::Parse` if the input does not match the grammar.
pub fn format(today: NaiveDate, input: &str) -> Result<String, TodoError> {
    format_with(&GRAMMAR, today, input)
}
