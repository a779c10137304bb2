//! Tag Annotation Parser
//!
//! Parses the per-field annotation language used by data-type declarations:
//! a comma-separated list of sub-tags, each either a bare `keyword` or
//! `keyword:payload`, drawn from the closed [`SubTag`] vocabulary.
//!
//! ```rust
//! use parser::{parse, SubTag};
//!
//! let tag = parse("column:id,primaryKey,default:0").unwrap();
//! assert_eq!(tag.get(SubTag::Default), Some("0"));
//!
//! let err = parse("column:id,column:name").unwrap_err();
//! assert!(err.to_string().contains("duplicate"));
//! ```

pub mod error;
pub mod parsed_tag;
pub mod sub_tag;

#[cfg(test)]
mod tests;

// Re-export core types for convenient access
pub use error::{ParserError, Result};
pub use parsed_tag::{ParsedTag, TagCursor};
pub use sub_tag::SubTag;

use pest::iterators::Pair;
use pest_derive::Parser;

/// Tag parser is powered by Pest, a PEG parser framework.
#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct TagParser;

/// Trait for converting Pest parse trees into tag types.
pub trait Lexeme: Sized {
    /// Converts a Pest parse rule into a structured type.
    fn from_parsed_rule(parsed_rule: Pair<Rule>) -> Result<Self>;
}

/// Parse a raw field annotation. See [`ParsedTag::parse`].
pub fn parse(raw: &str) -> Result<ParsedTag> {
    ParsedTag::parse(raw)
}
