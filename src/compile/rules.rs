//! The default section rules.
//!
//! Order matters: completed entries are logged before anything else, entries
//! due today are pulled forward before manual routing, and only entries from
//! the leading headerless section fall through to the inbox.

use chrono::NaiveDate;
use tracing::debug;

use super::logbook::block_by_week;
use super::rule::SectionRule;
use crate::core::{format_date, resolve};
use crate::syntax::{is_scheduled_key, Entry, DUE_KEY, MOVE_KEY};

pub const INBOX: &str = "Inbox";
pub const TODAY: &str = "Today";
pub const SCHEDULED: &str = "Scheduled";
pub const LOGGED: &str = "Logged";

/// Sections an entry can be sent to with `move:<name>` or `s:<name>`.
pub const MANUAL_SECTIONS: [&str; 4] = ["Next", "Someday", "Waiting", "Evening"];

/// The production rule set, resolving relative dates against `today`.
#[must_use]
pub fn default_rules(today: NaiveDate) -> Vec<SectionRule> {
    let mut rules = vec![logged(today), due_today(today)];
    rules.extend(MANUAL_SECTIONS.iter().map(|name| manual(name, today)));
    rules.push(scheduled(today));
    rules.push(inbox(today));
    rules
}

/// Completed entries, newest first, split by completion week.
#[must_use]
pub fn logged(today: NaiveDate) -> SectionRule {
    let stamp = format_date(today);
    SectionRule::new(LOGGED, |_, e| e.completed)
        .with_transform(move |mut e| {
            e.completed = true;
            if e.completion_date.is_none() {
                e.completion_date = Some(stamp.clone());
            }
            e
        })
        .with_compare(|l, r| r.completion_date.cmp(&l.completion_date))
        .with_reblock(block_by_week)
}

/// Entries scheduled or due today or earlier. Scheduling and routing tags are
/// dropped so the entry stays in Today on later passes.
#[must_use]
pub fn due_today(today: NaiveDate) -> SectionRule {
    SectionRule::new(TODAY, move |_, e| {
        e.scheduled_for().is_some_and(|v| is_today_or_earlier(today, v))
            || e.due().is_some_and(|v| is_today_or_earlier(today, v))
    })
    .with_transform(|e| e.without_tags_where(is_scheduled_key).without_tag(MOVE_KEY))
}

/// A manually routed section.
#[must_use]
pub fn manual(name: &str, today: NaiveDate) -> SectionRule {
    let target = name.to_string();
    SectionRule::new(name, move |_, e| {
        e.tag(MOVE_KEY)
            .or_else(|| e.scheduled_for())
            .is_some_and(|v| v.eq_ignore_ascii_case(&target))
    })
    .with_transform(move |e| {
        let e = e.without_tag(MOVE_KEY).without_tag("sched").without_tag("s");
        normalize_tags(e, today, |key| key == DUE_KEY)
    })
}

/// Entries scheduled for a later date, soonest first.
#[must_use]
pub fn scheduled(today: NaiveDate) -> SectionRule {
    SectionRule::new(SCHEDULED, |_, e| e.scheduled_for().is_some())
        .with_transform(move |e| normalize_tags(e, today, is_scheduled_key))
        .with_compare(move |l, r| scheduled_key(today, l).cmp(&scheduled_key(today, r)))
}

/// Entries from the leading section without a header.
#[must_use]
pub fn inbox(today: NaiveDate) -> SectionRule {
    SectionRule::new(INBOX, |header, _| header.is_empty())
        .with_transform(move |e| normalize_tags(e, today, |key| key == DUE_KEY))
}

fn is_today_or_earlier(today: NaiveDate, value: &str) -> bool {
    value.eq_ignore_ascii_case("t")
        || value.eq_ignore_ascii_case("today")
        || resolve(today, value).is_ok_and(|date| date <= today)
}

fn scheduled_key(today: NaiveDate, entry: &Entry) -> String {
    normalize_value(today, entry.scheduled_for().unwrap_or_default())
}

/// Rewrite matching tag values to canonical dates, keeping values that do not resolve.
fn normalize_tags(entry: Entry, today: NaiveDate, select: impl Fn(&str) -> bool) -> Entry {
    entry.map_tag_values(select, |value| normalize_value(today, value))
}

fn normalize_value(today: NaiveDate, value: &str) -> String {
    match resolve(today, value) {
        Ok(date) => format_date(date),
        Err(e) => {
            debug!(error = %e, "keeping unresolved date expression");
            value.to_string()
        },
    }
}
