//! Output formatting for todofmt.
//!
//! The canonical text form is the program's output; the JSON dump is a
//! debugging aid.

mod json;
mod text;

pub use json::document_json;
pub use text::{render, render_entry, DocumentText, EntryText};
