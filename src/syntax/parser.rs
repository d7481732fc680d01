//! Recursive descent parser from tokens to a [`Document`].
//!
//! Parsing is single pass and all-or-nothing: the first token that does not
//! fit the grammar aborts with a [`ParseError`] and no document is returned.

use thiserror::Error;

use super::ast::{Block, DescriptionPart, Document, Entry, Grouping, NoteLine, SpecialTag};
use super::lexer::{Token, TokenKind};

/// Word that marks an entry as completed when it starts the line.
const COMPLETED_MARKER: &str = "x";

/// Word that starts a note line.
const NOTE_MARKER: &str = "|";

/// A grammar violation at a position in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: {message}")]
pub struct ParseError {
    pub message: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
    /// Byte offset into the input.
    pub offset: usize,
}

impl ParseError {
    fn at(source: &str, offset: usize, message: impl Into<String>) -> Self {
        let before = &source[..offset.min(source.len())];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Self {
            message: message.into(),
            line,
            column,
            offset,
        }
    }
}

/// Parse a token stream produced from `source`.
///
/// # Errors
///
/// Returns `ParseError` at the first token that does not fit the grammar.
pub fn parse(source: &str, tokens: &[Token<'_>]) -> Result<Document, ParseError> {
    Parser {
        source,
        tokens,
        pos: 0,
    }
    .document()
}

struct Parser<'s, 't> {
    source: &'s str,
    tokens: &'t [Token<'s>],
    pos: usize,
}

impl<'s> Parser<'s, '_> {
    fn peek(&self) -> Option<&Token<'s>> {
        self.tokens.get(self.pos)
    }

    fn peek_at(&self, ahead: usize) -> Option<&Token<'s>> {
        self.tokens.get(self.pos + ahead)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn advance(&mut self) -> Option<Token<'s>> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn at_header(&self) -> bool {
        self.peek().is_some_and(|t| t.is_punct('#'))
    }

    /// Consume consecutive newlines, returning how many were consumed.
    fn skip_newlines(&mut self) -> usize {
        let mut count = 0;
        while self.peek_kind() == Some(TokenKind::Newline) {
            self.pos += 1;
            count += 1;
        }
        count
    }

    fn error_here(&self, message: impl Into<String>) -> ParseError {
        let offset = self.peek().map_or(self.source.len(), |t| t.offset);
        ParseError::at(self.source, offset, message)
    }

    fn describe_next(&self) -> String {
        match self.peek() {
            Some(t) if t.kind == TokenKind::Newline => "end of line".to_string(),
            Some(t) => format!("{:?} {:?}", t.kind, t.text),
            None => "end of input".to_string(),
        }
    }

    /// `Document := Newline* Grouping*`
    fn document(mut self) -> Result<Document, ParseError> {
        let mut groupings = Vec::new();
        self.skip_newlines();

        if self.peek().is_some() && !self.at_header() {
            let blocks = self.blocks()?;
            groupings.push(Grouping {
                header: Vec::new(),
                blocks,
            });
        }

        while self.peek().is_some() {
            groupings.push(self.grouping()?);
        }

        Ok(Document { groupings })
    }

    /// `Grouping := "#" Word+ Newline+ Block*`
    fn grouping(&mut self) -> Result<Grouping, ParseError> {
        if !self.at_header() {
            return Err(self.error_here(format!(
                "expected section header, found {}",
                self.describe_next()
            )));
        }
        self.pos += 1;

        let mut header = Vec::new();
        while let Some(token) = self.peek() {
            if token.kind != TokenKind::Text {
                break;
            }
            header.push(token.text.to_string());
            self.pos += 1;
        }
        if header.is_empty() {
            return Err(self.error_here(format!(
                "expected section name after '#', found {}",
                self.describe_next()
            )));
        }
        if self.skip_newlines() == 0 {
            return Err(self.error_here(format!(
                "section header must end the line, found {}",
                self.describe_next()
            )));
        }

        let blocks = self.blocks()?;
        Ok(Grouping { header, blocks })
    }

    /// `Block := (Entry Newline?)+`, blocks separated by blank lines.
    fn blocks(&mut self) -> Result<Vec<Block>, ParseError> {
        let mut blocks = Vec::new();
        let mut current = Block::default();

        while self.peek().is_some() && !self.at_header() {
            current.entries.push(self.entry()?);
            if self.skip_newlines() >= 2 {
                blocks.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            blocks.push(current);
        }
        Ok(blocks)
    }

    /// `Entry := "x"? Priority? (Date Date | Date)? DescriptionPart* NoteLine*`
    fn entry(&mut self) -> Result<Entry, ParseError> {
        let start = self.pos;
        let mut entry = Entry::default();

        if self.peek().is_some_and(|t| t.is_word(COMPLETED_MARKER)) {
            entry.completed = true;
            self.pos += 1;
        }

        if self.peek_kind() == Some(TokenKind::Priority) {
            entry.priority = self.advance().and_then(|t| t.text.chars().nth(1));
        }

        if self.peek_kind() == Some(TokenKind::Date) {
            let first = self.advance().map(|t| t.text.to_string());
            if self.peek_kind() == Some(TokenKind::Date) {
                entry.completion_date = first;
                entry.creation_date = self.advance().map(|t| t.text.to_string());
            } else {
                entry.creation_date = first;
            }
        }

        while let Some(part) = self.description_part()? {
            entry.description.push(part);
        }

        while self.peek_kind() == Some(TokenKind::Newline)
            && self.peek_at(1).is_some_and(|t| t.is_word(NOTE_MARKER))
        {
            self.pos += 1;
            entry.notes.push(self.note_line());
        }

        if self.pos == start {
            return Err(self.error_here(format!(
                "expected todo entry, found {}",
                self.describe_next()
            )));
        }
        Ok(entry)
    }

    /// `DescrPart := "+" Word | "@" Word | Tag | Word+`
    fn description_part(&mut self) -> Result<Option<DescriptionPart>, ParseError> {
        let Some(token) = self.peek().copied() else {
            return Ok(None);
        };

        let part = match token.kind {
            TokenKind::Punct if token.is_punct('+') => {
                self.pos += 1;
                DescriptionPart::Project(self.word_after(&token)?)
            },
            TokenKind::Punct if token.is_punct('@') => {
                self.pos += 1;
                DescriptionPart::Context(self.word_after(&token)?)
            },
            TokenKind::Tag => {
                self.pos += 1;
                let tag = SpecialTag::from_token(token.text).ok_or_else(|| {
                    ParseError::at(self.source, token.offset, "malformed key:value tag")
                })?;
                DescriptionPart::Tag(tag)
            },
            TokenKind::Text => {
                let mut words = Vec::new();
                while let Some(t) = self.peek() {
                    if t.kind != TokenKind::Text {
                        break;
                    }
                    words.push(t.text.to_string());
                    self.pos += 1;
                }
                DescriptionPart::Words(words)
            },
            TokenKind::Punct
            | TokenKind::Date
            | TokenKind::Priority
            | TokenKind::Space
            | TokenKind::Newline => return Ok(None),
        };
        Ok(Some(part))
    }

    fn word_after(&mut self, marker: &Token<'_>) -> Result<String, ParseError> {
        match self.peek() {
            Some(t) if t.kind == TokenKind::Text => {
                let word = t.text.to_string();
                self.pos += 1;
                Ok(word)
            },
            _ => Err(self.error_here(format!(
                "expected a name after '{}', found {}",
                marker.text,
                self.describe_next()
            ))),
        }
    }

    /// `NoteLine := Newline "|" ...`, positioned on the `|` token.
    ///
    /// The rest of the line is kept verbatim as whitespace separated words.
    fn note_line(&mut self) -> NoteLine {
        let Some(marker) = self.advance() else {
            return NoteLine::default();
        };
        let mut end = marker.end();
        while let Some(t) = self.peek() {
            if t.kind == TokenKind::Newline {
                break;
            }
            end = t.end();
            self.pos += 1;
        }
        NoteLine {
            words: self.source[marker.end()..end]
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }
}
