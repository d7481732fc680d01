//! Canonical text rendering.
//!
//! Rendering is total: every [`Document`] has exactly one textual form, and
//! parsing that form yields the same document up to empty blocks and sections.

use std::fmt;

use crate::compile::rules::INBOX;
use crate::syntax::{DescriptionPart, Document, Entry, Grouping, NoteLine};

/// Prefix of a note line, aligned under the creation date column.
const NOTE_PREFIX: &str = "           |";

/// Render a document in canonical form.
#[must_use]
pub fn render(document: &Document) -> String {
    DocumentText(document).to_string()
}

/// Render a single entry line followed by its notes.
#[must_use]
pub fn render_entry(entry: &Entry) -> String {
    EntryText(entry).to_string()
}

/// [`fmt::Display`] adapter for a whole document.
#[derive(Debug, Clone, Copy)]
pub struct DocumentText<'a>(pub &'a Document);

/// [`fmt::Display`] adapter for one entry.
#[derive(Debug, Clone, Copy)]
pub struct EntryText<'a>(pub &'a Entry);

impl fmt::Display for DocumentText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let live = self.0.groupings.iter().filter(|g| !g.is_empty());
        for (index, grouping) in live.enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write_grouping(f, grouping)?;
        }
        Ok(())
    }
}

fn write_grouping(f: &mut fmt::Formatter<'_>, grouping: &Grouping) -> fmt::Result {
    if grouping.header.is_empty() {
        writeln!(f, "# {INBOX}")?;
    } else {
        writeln!(f, "# {}", grouping.header.join(" "))?;
    }
    writeln!(f)?;

    let blocks = grouping.blocks.iter().filter(|b| !b.is_empty());
    for (index, block) in blocks.enumerate() {
        if index > 0 {
            writeln!(f)?;
        }
        for entry in &block.entries {
            write!(f, "{}", EntryText(entry))?;
        }
    }
    Ok(())
}

impl fmt::Display for EntryText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.0;
        f.write_str(if entry.completed { "x" } else { " " })?;
        if let Some(priority) = entry.priority {
            write!(f, " ({priority})")?;
        }
        if let Some(date) = &entry.completion_date {
            write!(f, " {date}")?;
        }
        if let Some(date) = &entry.creation_date {
            write!(f, " {date}")?;
        }
        for part in &entry.description {
            write!(f, " ")?;
            write_part(f, part)?;
        }
        writeln!(f)?;

        for note in &entry.notes {
            write_note(f, note)?;
        }
        Ok(())
    }
}

fn write_part(f: &mut fmt::Formatter<'_>, part: &DescriptionPart) -> fmt::Result {
    match part {
        DescriptionPart::Project(name) => write!(f, "+{name}"),
        DescriptionPart::Context(name) => write!(f, "@{name}"),
        DescriptionPart::Tag(tag) => write!(f, "{}:{}", tag.key, tag.value),
        DescriptionPart::Words(words) => f.write_str(&words.join(" ")),
    }
}

fn write_note(f: &mut fmt::Formatter<'_>, note: &NoteLine) -> fmt::Result {
    f.write_str(NOTE_PREFIX)?;
    if !note.words.is_empty() {
        write!(f, " {}", note.words.join(" "))?;
    }
    writeln!(f)
}
