//! Core utilities shared by the parser and the rule engine.

mod datetime;

pub use datetime::{
    format_date, next_weekday, normalize, parse_canonical, resolve, DateError, DATE_FORMAT,
};
