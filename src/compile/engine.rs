//! Rule evaluation over a whole document.
//!
//! [`compile`] routes every entry through an ordered rule list, rebuilds the
//! sections from scratch, sorts their blocks and puts the sections in
//! canonical order. The input document is consumed; nothing is edited in place.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, trace};

use super::order::SectionOrder;
use super::rule::SectionRule;
use crate::core::format_date;
use crate::syntax::{Block, Document, Entry, Grouping};

/// Where an entry ends up after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Destination section name.
    pub header: String,
    /// The entry after any transform.
    pub entry: Entry,
}

/// Route a single entry.
///
/// The first rule whose filter accepts the entry decides its section and
/// transforms it. If no rule accepts it, the entry stays under
/// `original_header` and is transformed by the rule for that section, if any.
#[must_use]
pub fn classify(rules: &[SectionRule], original_header: &str, entry: Entry) -> Placement {
    let mut resident: Option<&SectionRule> = None;

    for rule in rules {
        if rule.accepts(original_header, &entry) {
            return Placement {
                header: rule.header.clone(),
                entry: rule.apply(entry),
            };
        }
        if rule.header == original_header {
            resident = Some(rule);
        }
    }

    let entry = match resident {
        Some(rule) => rule.apply(entry),
        None => entry,
    };
    Placement {
        header: original_header.to_string(),
        entry,
    }
}

/// Sections under construction, in first-use order.
#[derive(Debug, Default)]
struct Sections {
    sections: Vec<(String, Vec<Block>)>,
    index: HashMap<String, usize>,
}

impl Sections {
    fn insert(&mut self, header: String, block: usize, entry: Entry) {
        let slot = match self.index.get(&header) {
            Some(&slot) => slot,
            None => {
                self.index.insert(header.clone(), self.sections.len());
                self.sections.push((header, Vec::new()));
                self.sections.len() - 1
            },
        };

        let blocks = &mut self.sections[slot].1;
        if blocks.len() <= block {
            blocks.resize_with(block + 1, Block::default);
        }
        blocks[block].entries.push(entry);
    }

    fn into_inner(self) -> Vec<(String, Vec<Block>)> {
        self.sections
    }
}

/// Apply `rules` to every entry of `document`, producing a new document.
#[must_use]
pub fn compile(document: Document, rules: &[SectionRule]) -> Document {
    let order = SectionOrder::from_original(document.groupings.iter().map(Grouping::name));
    let mut sections = Sections::default();
    let mut moved = 0usize;

    for grouping in document.groupings {
        let original = grouping.name();
        for (block_index, block) in grouping.blocks.into_iter().enumerate() {
            for entry in block.entries {
                let Placement { header, entry } = classify(rules, &original, entry);
                // Entries arriving from elsewhere go to the top of their new section.
                let target = if header == original {
                    block_index
                } else {
                    trace!(from = %original, to = %header, "relocating entry");
                    moved += 1;
                    0
                };
                sections.insert(header, target, entry);
            }
        }
    }

    let mut sections = sections.into_inner();
    for (header, blocks) in &mut sections {
        if let Some(rule) = rules.iter().find(|rule| rule.header == *header) {
            rule.sort_blocks(blocks);
            *blocks = rule.reblock(std::mem::take(blocks));
        }
    }
    order.sort_by_name(&mut sections, |(header, _)| header.as_str());

    debug!(sections = sections.len(), moved, "compiled document");

    Document {
        groupings: sections
            .into_iter()
            .map(|(header, blocks)| Grouping::named(header, blocks))
            .collect(),
    }
}

/// Give every entry without a creation date the date `today`.
#[must_use]
pub fn assign_creation_dates(mut document: Document, today: NaiveDate) -> Document {
    let today = format_date(today);
    for entry in document
        .groupings
        .iter_mut()
        .flat_map(|g| g.blocks.iter_mut())
        .flat_map(|b| b.entries.iter_mut())
    {
        if entry.creation_date.is_none() {
            entry.creation_date = Some(today.clone());
        }
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{DescriptionPart, SpecialTag};

    fn task(name: &str) -> Entry {
        Entry {
            description: vec![DescriptionPart::Words(vec![name.to_string()])],
            ..Entry::default()
        }
    }

    fn tagged(name: &str, key: &str, value: &str) -> Entry {
        let mut entry = task(name);
        entry
            .description
            .push(DescriptionPart::Tag(SpecialTag::new(key, value)));
        entry
    }

    fn name_of(entry: &Entry) -> String {
        match entry.description.first() {
            Some(DescriptionPart::Words(words)) => words.join(" "),
            _ => String::new(),
        }
    }

    fn layout(document: &Document) -> Vec<(String, Vec<Vec<String>>)> {
        document
            .groupings
            .iter()
            .map(|g| {
                let blocks = g
                    .blocks
                    .iter()
                    .map(|b| b.entries.iter().map(name_of).collect())
                    .collect();
                (g.name(), blocks)
            })
            .collect()
    }

    fn section(name: &str, blocks: Vec<Vec<Entry>>) -> Grouping {
        Grouping::named(name, blocks.into_iter().map(Block::new).collect())
    }

    fn mover_rules() -> Vec<SectionRule> {
        vec![
            SectionRule::new("Someday", |_, e| e.tag("move") == Some("someday"))
                .with_transform(|e| e.without_tag("move")),
            SectionRule::new("Next", |_, e| e.tag("move") == Some("next"))
                .with_transform(|e| e.without_tag("move")),
            SectionRule::new("Inbox", |header, _| header.is_empty()),
        ]
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let rules = vec![
            SectionRule::new("A", |_, e| e.tag("k").is_some()),
            SectionRule::new("B", |_, e| e.tag("k").is_some()),
        ];
        let placement = classify(&rules, "Other", tagged("x", "k", "v"));
        assert_eq!(placement.header, "A");
    }

    #[test]
    fn test_unmatched_entry_stays_put() {
        let placement = classify(&mover_rules(), "Projects", task("stay"));
        assert_eq!(placement.header, "Projects");
        assert_eq!(name_of(&placement.entry), "stay");
    }

    #[test]
    fn test_resident_transform_applies_when_own_filter_rejects() {
        let rules = vec![
            SectionRule::new("Next", |_, e| e.tag("move") == Some("next")).with_transform(|mut e| {
                e.priority = Some('N');
                e
            }),
            SectionRule::new("Inbox", |header, _| header.is_empty()),
        ];
        let stays = classify(&rules, "Next", task("old"));
        assert_eq!(stays.header, "Next");
        assert_eq!(stays.entry.priority, Some('N'));

        let elsewhere = classify(&rules, "Someday", task("old"));
        assert_eq!(elsewhere.entry.priority, None);
    }

    #[test]
    fn test_relocated_entries_go_to_first_block() {
        let document = Document {
            groupings: vec![
                section("Next", vec![vec![task("n1")], vec![task("n2")]]),
                section(
                    "Projects",
                    vec![vec![task("p1")], vec![task("p2"), tagged("p3", "move", "next")]],
                ),
            ],
        };
        let compiled = compile(document, &mover_rules());
        assert_eq!(
            layout(&compiled),
            vec![
                ("Next".to_string(), vec![vec!["n1".to_string(), "p3".to_string()], vec!["n2".to_string()]]),
                ("Projects".to_string(), vec![vec!["p1".to_string()], vec!["p2".to_string()]]),
            ]
        );
    }

    #[test]
    fn test_staying_entries_keep_block_index() {
        let document = Document {
            groupings: vec![section(
                "Projects",
                vec![vec![tagged("a", "move", "next")], vec![task("b")], vec![task("c")]],
            )],
        };
        let compiled = compile(document, &mover_rules());
        let projects = compiled
            .groupings
            .iter()
            .find(|g| g.name() == "Projects")
            .unwrap();
        assert_eq!(projects.blocks.len(), 3);
        assert!(projects.blocks[0].is_empty());
        assert_eq!(name_of(&projects.blocks[2].entries[0]), "c");
    }

    #[test]
    fn test_headerless_section_becomes_inbox() {
        let document = Document {
            groupings: vec![
                section("", vec![vec![task("loose")]]),
                section("Inbox", vec![vec![task("filed")]]),
            ],
        };
        let compiled = compile(document, &mover_rules());
        assert_eq!(
            layout(&compiled),
            vec![("Inbox".to_string(), vec![vec!["loose".to_string(), "filed".to_string()]])]
        );
    }

    #[test]
    fn test_sections_reordered_and_sorted() {
        let rules = vec![SectionRule::new("Someday", |_, e| e.tag("move") == Some("someday"))
            .with_compare(|l, r| name_of(l).cmp(&name_of(r)))];
        let document = Document {
            groupings: vec![
                section("Someday", vec![vec![task("b"), task("a")], vec![task("d"), task("c")]]),
                section("Reading", vec![vec![task("r")]]),
                section("Inbox", vec![vec![task("i")]]),
            ],
        };
        let compiled = compile(document, &rules);
        let names: Vec<String> = compiled.groupings.iter().map(Grouping::name).collect();
        assert_eq!(names, vec!["Inbox", "Reading", "Someday"]);
        assert_eq!(
            layout(&compiled)[2].1,
            vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string(), "d".to_string()]]
        );
    }

    #[test]
    fn test_compile_without_rules_preserves_layout() {
        let document = Document {
            groupings: vec![section("Work", vec![vec![task("a"), task("b")], vec![task("c")]])],
        };
        let compiled = compile(document.clone(), &[]);
        assert_eq!(compiled, document);
    }

    #[test]
    fn test_assign_creation_dates() {
        let mut dated = task("dated");
        dated.creation_date = Some("2021-06-01".to_string());
        let document = Document {
            groupings: vec![section("", vec![vec![task("fresh"), dated]])],
        };
        let today = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let document = assign_creation_dates(document, today);
        let entries = &document.groupings[0].blocks[0].entries;
        assert_eq!(entries[0].creation_date.as_deref(), Some("2022-01-01"));
        assert_eq!(entries[1].creation_date.as_deref(), Some("2021-06-01"));
    }
}
