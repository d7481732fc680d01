//! The todo grammar as a reusable handle.
//!
//! Building a [`Grammar`] compiles the tokenizer rule table once; the handle
//! then parses any number of inputs and prints itself as EBNF.

use std::fmt;

use tracing::debug;

use super::ast::Document;
use super::lexer::{Lexer, RULES};
use super::parser::{parse, ParseError};

const PRODUCTIONS: &str = r##"Document = Newline* Grouping* .
Grouping = ( "#" Text+ Newline+ )? Block* .
Block = ( Entry Newline? )+ .
Entry = "x"? Priority? ( Date Date | Date )? DescriptionPart* NoteLine* .
DescriptionPart = "+" Text | "@" Text | Tag | Text+ .
NoteLine = Newline "|" ( Text | Tag | Date | Priority | Punct )* ."##;

/// Compiled tokenizer plus parser.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    lexer: Lexer,
}

impl Grammar {
    /// Build the grammar, compiling all token rules.
    #[must_use]
    pub fn build() -> Self {
        Self {
            lexer: Lexer::new(),
        }
    }

    /// Parse a complete todo file.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input does not match the grammar.
    pub fn parse(&self, input: &str) -> Result<Document, ParseError> {
        let tokens = self.lexer.tokenize(input);
        debug!(tokens = tokens.len(), "tokenized input");
        let document = parse(input, &tokens)?;
        debug!(
            groupings = document.groupings.len(),
            entries = document.len(),
            "parsed document"
        );
        Ok(document)
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{PRODUCTIONS}")?;
        for (kind, pattern) in RULES {
            writeln!(f, "{kind:?} = /{pattern}/ .")?;
        }
        Ok(())
    }
}
