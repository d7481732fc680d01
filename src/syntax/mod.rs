//! Grammar layer: tokenizer, document model and parser.

pub mod ast;
mod grammar;
pub mod lexer;
mod parser;

pub use ast::{
    is_scheduled_key, Block, DescriptionPart, Document, Entry, Grouping, NoteLine, SpecialTag,
    DUE_KEY, MOVE_KEY, SCHEDULED_KEYS,
};
pub use grammar::Grammar;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{parse, ParseError};
