//! JSON structural dump.
//!
//! Used by `--verbose` to show the parsed document before it is compiled.

use serde_json::json;

use crate::error::TodoError;
use crate::syntax::Document;

/// Format a parsed document as pretty JSON with a short summary.
///
/// # Errors
///
/// Returns `TodoError::Json` if serialization fails.
pub fn document_json(document: &Document) -> Result<String, TodoError> {
    let output = json!({
        "groupings": document.groupings.len(),
        "entries": document.len(),
        "document": document,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
