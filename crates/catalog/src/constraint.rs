//! Column constraints.
//!
//! - [`ConstraintType`]: the seven supported constraint kinds
//! - [`Constraint`]: a constraint type plus free-form details
//!
//! # Example
//! ```rust
//! use catalog::{Constraint, ConstraintType};
//! use std::str::FromStr;
//!
//! let ty = ConstraintType::from_str("default").unwrap();
//! let c = Constraint::new(ty, "0");
//! assert_eq!(c.to_string(), "default:0");
//! ```

use crate::{Result, SchemaError};
use parser::SubTag;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Kind of a constraint on a column.
///
/// - `NotNull`: the column cannot hold NULL
/// - `Unique`: all values in the column are different
/// - `PrimaryKey`: NOT NULL and UNIQUE; identifies each row
/// - `ForeignKey`: identifies a row in another table
/// - `Check`: all values satisfy a condition
/// - `Default`: value used when none is given
/// - `Index`: the column is indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintType {
    NotNull,
    Unique,
    PrimaryKey,
    ForeignKey,
    Check,
    Default,
    Index,
}

impl ConstraintType {
    pub const ALL: [ConstraintType; 7] = [
        Self::NotNull,
        Self::Unique,
        Self::PrimaryKey,
        Self::ForeignKey,
        Self::Check,
        Self::Default,
        Self::Index,
    ];

    /// Map a sub-tag onto its constraint type.
    ///
    /// # Errors
    /// [`SchemaError::UnrecognizedConstraint`] for non-constraint sub-tags.
    pub fn classify(sub_tag: SubTag) -> Result<Self> {
        match sub_tag {
            SubTag::NotNull => Ok(Self::NotNull),
            SubTag::Unique => Ok(Self::Unique),
            SubTag::PrimaryKey => Ok(Self::PrimaryKey),
            SubTag::ForeignKey => Ok(Self::ForeignKey),
            SubTag::Check => Ok(Self::Check),
            SubTag::Default => Ok(Self::Default),
            SubTag::Index => Ok(Self::Index),
            other => Err(SchemaError::UnrecognizedConstraint(other.to_string())),
        }
    }

    /// The sub-tag this constraint is written as.
    #[must_use]
    pub const fn sub_tag(self) -> SubTag {
        match self {
            Self::NotNull => SubTag::NotNull,
            Self::Unique => SubTag::Unique,
            Self::PrimaryKey => SubTag::PrimaryKey,
            Self::ForeignKey => SubTag::ForeignKey,
            Self::Check => SubTag::Check,
            Self::Default => SubTag::Default,
            Self::Index => SubTag::Index,
        }
    }

    /// Canonical lower-camel-case name, identical to the tag keyword.
    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        self.sub_tag().as_str()
    }
}

impl FromStr for ConstraintType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        SubTag::from_str(s)
            .ok()
            .and_then(|sub_tag| Self::classify(sub_tag).ok())
            .ok_or_else(|| SchemaError::UnrecognizedConstraint(s.to_string()))
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A constraint on a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Constraint {
    #[serde(rename = "type")]
    constraint_type: ConstraintType,
    #[serde(skip_serializing_if = "String::is_empty")]
    details: String,
}

impl Constraint {
    #[must_use]
    pub fn new(constraint_type: ConstraintType, details: impl Into<String>) -> Self {
        Self {
            constraint_type,
            details: details.into(),
        }
    }

    #[must_use]
    #[inline]
    pub fn constraint_type(&self) -> ConstraintType {
        self.constraint_type
    }

    /// Type-specific details, e.g. the value of a `default`.
    #[must_use]
    #[inline]
    pub fn details(&self) -> &str {
        &self.details
    }
}

impl fmt::Display for Constraint {
    /// Formats in tag syntax: `type` or `type:details`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.details.is_empty() {
            write!(f, "{}", self.constraint_type)
        } else {
            write!(f, "{}:{}", self.constraint_type, self.details)
        }
    }
}
