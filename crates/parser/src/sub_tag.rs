//! The closed sub-tag vocabulary.

use crate::ParserError;
use std::fmt;
use std::str::FromStr;

/// A recognized keyword inside a field tag.
///
/// Each variant has exactly one canonical lower-camel-case spelling, used both
/// for matching keywords in tag strings and for rendering diagnostics:
///
/// | variant      | keyword      | payload                          |
/// |--------------|--------------|----------------------------------|
/// | `Column`     | `column`     | explicit column name (optional)  |
/// | `NotNull`    | `notNull`    |                                  |
/// | `Unique`     | `unique`     |                                  |
/// | `PrimaryKey` | `primaryKey` |                                  |
/// | `ForeignKey` | `foreignKey` | referenced table                 |
/// | `Check`      | `check`      | check expression                 |
/// | `Default`    | `default`    | default value                    |
/// | `Index`      | `index`      |                                  |
/// | `OneToOne`   | `oneToOne`   | relation details                 |
/// | `OneToMany`  | `oneToMany`  | field to select on               |
/// | `ManyToOne`  | `manyToOne`  | relation details                 |
/// | `ManyToMany` | `manyToMany` | relation details                 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubTag {
    Column,
    NotNull,
    Unique,
    PrimaryKey,
    ForeignKey,
    Check,
    Default,
    Index,
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl SubTag {
    /// Every sub-tag, in canonical order.
    pub const ALL: [SubTag; 12] = [
        Self::Column,
        Self::NotNull,
        Self::Unique,
        Self::PrimaryKey,
        Self::ForeignKey,
        Self::Check,
        Self::Default,
        Self::Index,
        Self::OneToOne,
        Self::OneToMany,
        Self::ManyToOne,
        Self::ManyToMany,
    ];

    /// Canonical keyword spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::NotNull => "notNull",
            Self::Unique => "unique",
            Self::PrimaryKey => "primaryKey",
            Self::ForeignKey => "foreignKey",
            Self::Check => "check",
            Self::Default => "default",
            Self::Index => "index",
            Self::OneToOne => "oneToOne",
            Self::OneToMany => "oneToMany",
            Self::ManyToOne => "manyToOne",
            Self::ManyToMany => "manyToMany",
        }
    }

    /// True for the seven column constraint keywords.
    #[must_use]
    #[inline]
    pub fn is_constraint(self) -> bool {
        matches!(
            self,
            Self::NotNull
                | Self::Unique
                | Self::PrimaryKey
                | Self::ForeignKey
                | Self::Check
                | Self::Default
                | Self::Index
        )
    }

    /// True for the four table relation keywords.
    #[must_use]
    #[inline]
    pub fn is_relation(self) -> bool {
        matches!(
            self,
            Self::OneToOne | Self::OneToMany | Self::ManyToOne | Self::ManyToMany
        )
    }
}

impl FromStr for SubTag {
    type Err = ParserError;

    /// Look a keyword up in the vocabulary. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sub_tag| sub_tag.as_str() == s)
            .ok_or_else(|| ParserError::UnrecognizedSubTag(s.to_string()))
    }
}

impl fmt::Display for SubTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
