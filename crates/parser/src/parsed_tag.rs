//! Parsed field tags and the cursor used to consume them.
//!
//! - [`ParsedTag`]: immutable `SubTag -> payload` mapping produced by [`ParsedTag::parse`]
//! - [`TagCursor`]: records which sub-tags a consumer has handled, so leftovers
//!   can be reported without mutating the tag
//!
//! # Example
//! ```rust
//! use parser::{ParsedTag, SubTag};
//!
//! let tag = ParsedTag::parse("column:id, primaryKey, default:0").unwrap();
//! assert_eq!(tag.get(SubTag::Column), Some("id"));
//! assert_eq!(tag.get(SubTag::PrimaryKey), Some(""));
//! assert_eq!(tag.to_string(), "column:id,primaryKey,default:0");
//!
//! let mut cursor = tag.cursor();
//! assert_eq!(cursor.take(SubTag::Column), Some("id"));
//! assert_eq!(cursor.remaining().count(), 2);
//! ```

use crate::{Lexeme, ParserError, Result, Rule, SubTag, TagParser};
use pest::iterators::Pair;
use pest::Parser;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

/// The sub-tags of one field annotation, keyed by keyword.
///
/// Every keyword appears at most once; the payload is the empty string for
/// bare keywords. Equality ignores the order the keywords were written in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTag {
    entries: BTreeMap<SubTag, String>,
}

impl ParsedTag {
    /// Parse a raw annotation string.
    ///
    /// All whitespace is removed first. An empty annotation yields an empty tag.
    ///
    /// # Errors
    /// - [`ParserError::DuplicateSubTag`] if a keyword is repeated
    /// - [`ParserError::UnrecognizedSubTag`] if a keyword is outside the vocabulary
    pub fn parse(raw: &str) -> Result<Self> {
        let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let parsed = TagParser::parse(Rule::tag, &stripped)
            .map_err(|e| ParserError::UnexpectedRule(stripped.clone(), e.to_string()))?
            .next()
            .ok_or_else(|| {
                ParserError::UnexpectedRule(stripped.clone(), "no parsed rule found".to_string())
            })?;

        Self::from_parsed_rule(parsed)
    }

    /// Payload of `sub_tag`, if present.
    #[must_use]
    #[inline]
    pub fn get(&self, sub_tag: SubTag) -> Option<&str> {
        self.entries.get(&sub_tag).map(String::as_str)
    }

    #[must_use]
    #[inline]
    pub fn contains(&self, sub_tag: SubTag) -> bool {
        self.entries.contains_key(&sub_tag)
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in canonical sub-tag order.
    pub fn iter(&self) -> impl Iterator<Item = (SubTag, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Start consuming this tag.
    #[must_use]
    pub fn cursor(&self) -> TagCursor<'_> {
        TagCursor {
            tag: self,
            consumed: BTreeSet::new(),
        }
    }
}

impl Lexeme for ParsedTag {
    /// Lower a `tag` parse tree, enforcing keyword uniqueness before the
    /// vocabulary check, in the order the keywords were written.
    fn from_parsed_rule(parsed_rule: Pair<Rule>) -> Result<Self> {
        let mut entries = BTreeMap::new();
        let mut seen = HashSet::new();

        let tokens = parsed_rule
            .into_inner()
            .filter(|pair| pair.as_rule() == Rule::sub_tags)
            .flat_map(|pair| pair.into_inner());

        for token in tokens {
            let mut name = "";
            let mut payload = "";
            for part in token.into_inner() {
                match part.as_rule() {
                    Rule::keyword => name = part.as_str(),
                    Rule::payload => payload = part.as_str(),
                    other => {
                        return Err(ParserError::UnexpectedRule(
                            "sub-tag".to_string(),
                            format!("{other:?}"),
                        ))
                    }
                }
            }

            if !seen.insert(name) {
                return Err(ParserError::DuplicateSubTag(name.to_string()));
            }
            let sub_tag = SubTag::from_str(name)?;
            entries.insert(sub_tag, payload.to_string());
        }

        Ok(Self { entries })
    }
}

impl FromStr for ParsedTag {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ParsedTag {
    /// Canonical serialization: `keyword` or `keyword:payload`, comma-joined.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .iter()
            .map(|(sub_tag, payload)| {
                if payload.is_empty() {
                    sub_tag.to_string()
                } else {
                    format!("{sub_tag}:{payload}")
                }
            })
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&rendered)
    }
}

/// Tracks which sub-tags of a [`ParsedTag`] have been handled.
#[derive(Debug, Clone)]
pub struct TagCursor<'a> {
    tag: &'a ParsedTag,
    consumed: BTreeSet<SubTag>,
}

impl<'a> TagCursor<'a> {
    /// Consume `sub_tag`, returning its payload.
    ///
    /// Returns `None` if the tag lacks it or it was already consumed.
    pub fn take(&mut self, sub_tag: SubTag) -> Option<&'a str> {
        let payload = self.tag.get(sub_tag)?;
        self.consumed.insert(sub_tag).then_some(payload)
    }

    /// Consume every sub-tag not yet handled, in canonical order.
    pub fn take_remaining(&mut self) -> Vec<(SubTag, &'a str)> {
        let rest: Vec<_> = self.remaining().collect();
        self.consumed.extend(rest.iter().map(|(sub_tag, _)| *sub_tag));
        rest
    }

    /// Sub-tags not yet consumed.
    pub fn remaining(&self) -> impl Iterator<Item = (SubTag, &'a str)> + '_ {
        let tag: &'a ParsedTag = self.tag;
        tag.iter()
            .filter(move |(sub_tag, _)| !self.consumed.contains(sub_tag))
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.consumed.len() == self.tag.len()
    }
}
