//! Rule engine: routes entries into sections and orders the result.

mod engine;
mod logbook;
mod order;
mod rule;
pub mod rules;

pub use engine::{assign_creation_dates, classify, compile, Placement};
pub use logbook::block_by_week;
pub use order::{section_priority, SectionOrder, SECTION_PRIORITIES};
pub use rule::{Compare, Filter, Reblock, SectionRule, Transform};
pub use rules::default_rules;
