//! Canonical section ordering.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Fixed priority of the well-known sections.
pub const SECTION_PRIORITIES: [(&str, u32); 8] = [
    ("Inbox", 10),
    ("Today", 20),
    ("Evening", 21),
    ("Scheduled", 30),
    ("Next", 40),
    ("Next week", 41),
    ("Someday", 50),
    ("Logged", 999),
];

/// Priority of the last tier that sorts before unknown sections.
const BEFORE_UNKNOWN: u32 = 41;

/// Priority of the first tier that sorts after unknown sections.
const AFTER_UNKNOWN: u32 = 50;

/// Priority of a well-known section.
#[must_use]
pub fn section_priority(name: &str) -> Option<u32> {
    SECTION_PRIORITIES
        .iter()
        .find(|(section, _)| *section == name)
        .map(|(_, priority)| *priority)
}

/// Orders section names: known sections by priority, unknown sections between
/// "Next week" and "Someday" in their original document order.
#[derive(Debug, Clone, Default)]
pub struct SectionOrder {
    original: HashMap<String, usize>,
}

impl SectionOrder {
    /// Build from the section names of the original document, in order.
    pub fn from_original<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut original = HashMap::new();
        for (index, name) in names.into_iter().enumerate() {
            original.entry(name.into()).or_insert(index);
        }
        Self { original }
    }

    /// Position of a section in the original document. Sections that did not
    /// exist there sort after all that did.
    fn original_position(&self, name: &str) -> usize {
        self.original.get(name).copied().unwrap_or(usize::MAX)
    }

    /// Compare two section names.
    #[must_use]
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match (section_priority(left), section_priority(right)) {
            (Some(l), Some(r)) => l.cmp(&r),
            (None, None) => self
                .original_position(left)
                .cmp(&self.original_position(right)),
            (None, Some(r)) => {
                if r >= AFTER_UNKNOWN {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            },
            (Some(l), None) => {
                if l <= BEFORE_UNKNOWN {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            },
        }
    }

    /// Stable-sort items by the section name each carries.
    pub fn sort_by_name<T>(&self, items: &mut [T], name: impl Fn(&T) -> &str) {
        items.sort_by(|l, r| self.compare(name(l), name(r)));
    }
}
