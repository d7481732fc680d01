//! todofmt - a canonical formatter for sectioned todo.txt files
//!
//! The crate parses a todo file into sections of entries, routes every entry
//! through an ordered rule list (completion, due and scheduled dates, manual
//! `move:` tags) and renders the result in a single canonical text form.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod compile;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod syntax;

pub use cli::Cli;
pub use error::TodoError;
pub use pipeline::{format, format_document, format_with};
pub use syntax::{Document, Grammar};
