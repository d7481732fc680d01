//! Document model for sectioned todo files.
//!
//! A [`Document`] is a list of [`Grouping`]s (sections introduced by `# Header`
//! lines). Each grouping holds [`Block`]s, the blank-line separated paragraphs
//! of [`Entry`] lines.

use chrono::{Datelike, IsoWeek};
use serde::{Deserialize, Serialize};

use crate::core::parse_canonical;

/// Tag key used for manual routing between sections.
pub const MOVE_KEY: &str = "move";

/// Tag key holding a due date expression.
pub const DUE_KEY: &str = "due";

/// Tag keys that mark an entry as scheduled.
pub const SCHEDULED_KEYS: [&str; 4] = ["s", "sched", "schedule", "scheduled"];

/// Whether a tag key is one of the equivalent "scheduled" markers.
#[must_use]
pub fn is_scheduled_key(key: &str) -> bool {
    SCHEDULED_KEYS.contains(&key)
}

/// A whole todo file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub groupings: Vec<Grouping>,
}

impl Document {
    /// Total number of entries across all sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groupings.iter().map(Grouping::len).sum()
    }

    /// Whether the document holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A section of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping {
    /// Header words. Empty only for the leading section before any header.
    pub header: Vec<String>,
    pub blocks: Vec<Block>,
}

impl Grouping {
    /// Create a grouping named by a single header string.
    #[must_use]
    pub fn named(name: impl Into<String>, blocks: Vec<Block>) -> Self {
        let name = name.into();
        let header = if name.is_empty() { Vec::new() } else { vec![name] };
        Self { header, blocks }
    }

    /// The header words joined by single spaces.
    #[must_use]
    pub fn name(&self) -> String {
        self.header.join(" ")
    }

    /// Number of entries across all blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.iter().map(|b| b.entries.len()).sum()
    }

    /// Whether the grouping holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A blank-line delimited run of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub entries: Vec<Entry>,
}

impl Block {
    #[must_use]
    pub const fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One task line plus its note lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub completed: bool,
    #[serde(default)]
    pub priority: Option<char>,
    #[serde(default)]
    pub completion_date: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub description: Vec<DescriptionPart>,
    #[serde(default)]
    pub notes: Vec<NoteLine>,
}

impl Entry {
    /// Value of the first tag with the given key.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags()
            .find(|tag| tag.key == key)
            .map(|tag| tag.value.as_str())
    }

    /// Value of the first scheduling tag (`s`, `sched`, `schedule`, `scheduled`).
    #[must_use]
    pub fn scheduled_for(&self) -> Option<&str> {
        self.tags()
            .find(|tag| is_scheduled_key(&tag.key))
            .map(|tag| tag.value.as_str())
    }

    /// Value of the `due` tag.
    #[must_use]
    pub fn due(&self) -> Option<&str> {
        self.tag(DUE_KEY)
    }

    /// Iterate over the special tags in description order.
    pub fn tags(&self) -> impl Iterator<Item = &SpecialTag> {
        self.description.iter().filter_map(|part| match part {
            DescriptionPart::Tag(tag) => Some(tag),
            DescriptionPart::Project(_)
            | DescriptionPart::Context(_)
            | DescriptionPart::Words(_) => None,
        })
    }

    /// Drop every tag with the given key.
    #[must_use]
    pub fn without_tag(self, key: &str) -> Self {
        self.without_tags_where(|k| k == key)
    }

    /// Drop every tag whose key matches the predicate.
    #[must_use]
    pub fn without_tags_where(mut self, remove: impl Fn(&str) -> bool) -> Self {
        self.description.retain(|part| match part {
            DescriptionPart::Tag(tag) => !remove(&tag.key),
            DescriptionPart::Project(_)
            | DescriptionPart::Context(_)
            | DescriptionPart::Words(_) => true,
        });
        self
    }

    /// Rewrite the value of every tag whose key matches the predicate.
    #[must_use]
    pub fn map_tag_values(
        mut self,
        select: impl Fn(&str) -> bool,
        rewrite: impl Fn(&str) -> String,
    ) -> Self {
        for part in &mut self.description {
            if let DescriptionPart::Tag(tag) = part {
                if select(&tag.key) {
                    tag.value = rewrite(&tag.value);
                }
            }
        }
        self
    }

    /// ISO week of the completion date, if it is a valid calendar date.
    #[must_use]
    pub fn completed_week(&self) -> Option<IsoWeek> {
        self.completion_date
            .as_deref()
            .and_then(parse_canonical)
            .map(|date| date.iso_week())
    }
}

/// One semantic piece of an entry's description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DescriptionPart {
    /// `+name`
    Project(String),
    /// `@name`
    Context(String),
    /// `key:value`
    Tag(SpecialTag),
    /// A run of plain words.
    Words(Vec<String>),
}

/// A `key:value` description part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTag {
    pub key: String,
    pub value: String,
}

impl SpecialTag {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Split a raw `key:value` token at its first colon.
    #[must_use]
    pub fn from_token(raw: &str) -> Option<Self> {
        let (key, value) = raw.split_once(':')?;
        Some(Self::new(key, value))
    }
}

/// A `|` continuation line attached to the preceding entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteLine {
    pub words: Vec<String>,
}
