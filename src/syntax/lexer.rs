//! Tokenizer for todo files.
//!
//! Rules are tried in priority order at each position and the first rule that
//! matches wins, so a `Date` is preferred over `Text` and a `key:value` run is
//! a single `Tag`. `Text` matches any non-space run, which makes tokenization
//! total.

use regex::Regex;
use serde::Serialize;

/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// `YYYY-MM-DD` shaped digits.
    Date,
    /// `(A)` through `(Z)`.
    Priority,
    /// One of `+`, `@`, `#`.
    Punct,
    /// `key:value`
    Tag,
    /// Horizontal whitespace. Never emitted.
    Space,
    /// `\n`
    Newline,
    /// Any other non-space run.
    Text,
}

/// A token borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of the token in the source.
    pub offset: usize,
}

impl Token<'_> {
    /// Byte offset just past the token.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Whether this is the given punctuation character.
    #[must_use]
    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct && self.text.starts_with(c)
    }

    /// Whether this is a `Text` token with exactly the given contents.
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Text && self.text == word
    }
}

/// Ordered tokenizer rule set.
#[derive(Debug, Clone)]
pub struct Lexer {
    rules: Vec<(TokenKind, Regex)>,
}

/// Rule table in match priority order.
pub const RULES: [(TokenKind, &str); 7] = [
    (TokenKind::Date, r"[0-9]{4}-[0-9]{2}-[0-9]{2}"),
    (TokenKind::Priority, r"\([A-Z]\)"),
    (TokenKind::Punct, r"[+@#]"),
    (TokenKind::Tag, r"\S+:[^:\s]+"),
    (TokenKind::Space, r"[^\S\n]+"),
    (TokenKind::Newline, r"\n"),
    (TokenKind::Text, r"\S+"),
];

impl Lexer {
    /// Compile the rule table.
    #[must_use]
    pub fn new() -> Self {
        let rules = RULES
            .iter()
            .map(|(kind, pattern)| {
                let regex = Regex::new(&format!("^(?:{pattern})"))
                    .unwrap_or_else(|e| panic!("Invalid {kind:?} regex: {e}"));
                (*kind, regex)
            })
            .collect();
        Self { rules }
    }

    /// Split `input` into tokens, dropping horizontal whitespace.
    #[must_use]
    pub fn tokenize<'a>(&self, input: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut offset = 0;

        while offset < input.len() {
            let rest = &input[offset..];
            let matched = self
                .rules
                .iter()
                .find_map(|(kind, regex)| regex.find(rest).map(|m| (*kind, m.end())));

            let (kind, len) = match matched {
                Some((kind, len)) if len > 0 => (kind, len),
                // Unreachable with the rule table above; step one char to stay total.
                _ => (TokenKind::Text, rest.chars().next().map_or(1, char::len_utf8)),
            };

            if kind != TokenKind::Space {
                tokens.push(Token {
                    kind,
                    text: &rest[..len],
                    offset,
                });
            }
            offset += len;
        }

        tokens
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}
