//! Relations between tables.

use crate::{Result, SchemaError};
use parser::SubTag;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use types::DeclarationId;

/// Cardinality of a relation between two tables.
///
/// - `OneToOne`: one row on the left matches one row on the right
/// - `OneToMany`: one row on the left matches many on the right
/// - `ManyToOne`: many rows on the left match one on the right
/// - `ManyToMany`: many rows on the left match many on the right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationType {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl RelationType {
    pub const ALL: [RelationType; 4] = [
        Self::OneToOne,
        Self::OneToMany,
        Self::ManyToOne,
        Self::ManyToMany,
    ];

    /// Map a sub-tag onto its relation type.
    ///
    /// # Errors
    /// [`SchemaError::UnrecognizedRelation`] for non-relation sub-tags.
    pub fn classify(sub_tag: SubTag) -> Result<Self> {
        match sub_tag {
            SubTag::OneToOne => Ok(Self::OneToOne),
            SubTag::OneToMany => Ok(Self::OneToMany),
            SubTag::ManyToOne => Ok(Self::ManyToOne),
            SubTag::ManyToMany => Ok(Self::ManyToMany),
            other => Err(SchemaError::UnrecognizedRelation(other.to_string())),
        }
    }

    #[must_use]
    pub const fn sub_tag(self) -> SubTag {
        match self {
            Self::OneToOne => SubTag::OneToOne,
            Self::OneToMany => SubTag::OneToMany,
            Self::ManyToOne => SubTag::ManyToOne,
            Self::ManyToMany => SubTag::ManyToMany,
        }
    }

    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        self.sub_tag().as_str()
    }
}

impl FromStr for RelationType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        SubTag::from_str(s)
            .ok()
            .and_then(|sub_tag| Self::classify(sub_tag).ok())
            .ok_or_else(|| SchemaError::UnrecognizedRelation(s.to_string()))
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relation from one table to another table of the same schema.
///
/// The target is referenced by declaration identity and resolved through
/// [`Schema::resolve`](crate::Schema::resolve); it may name a declaration the
/// schema does not contain (an unresolved forward reference).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relation {
    #[serde(rename = "type")]
    relation_type: RelationType,
    field: String,
    target: DeclarationId,
    #[serde(skip_serializing_if = "String::is_empty")]
    details: String,
}

impl Relation {
    #[must_use]
    pub fn new(
        relation_type: RelationType,
        field: impl Into<String>,
        target: DeclarationId,
        details: impl Into<String>,
    ) -> Self {
        Self {
            relation_type,
            field: field.into(),
            target,
            details: details.into(),
        }
    }

    #[must_use]
    #[inline]
    pub fn relation_type(&self) -> RelationType {
        self.relation_type
    }

    /// Name of the field declaring the relation.
    #[must_use]
    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Declaration the relation points to.
    #[must_use]
    #[inline]
    pub fn target(&self) -> &DeclarationId {
        &self.target
    }

    #[must_use]
    #[inline]
    pub fn details(&self) -> &str {
        &self.details
    }
}

impl fmt::Display for Relation {
    /// Formats as `field: type[:details] -> target`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.relation_type)?;
        if !self.details.is_empty() {
            write!(f, ":{}", self.details)?;
        }
        write!(f, " -> {}", self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_roundtrip() {
        for r in RelationType::ALL {
            assert_eq!(RelationType::classify(r.sub_tag()), Ok(r));
            assert_eq!(RelationType::from_str(r.as_str()).unwrap().to_string(), r.as_str());
        }
    }

    #[test]
    fn classify_rejects_constraints() {
        let err = RelationType::classify(SubTag::PrimaryKey).unwrap_err();
        assert_eq!(err, SchemaError::UnrecognizedRelation("primaryKey".into()));
        assert!(RelationType::from_str("asdf").unwrap_err().to_string().contains("asdf"));
    }

    #[test]
    fn display_golden() {
        let plain = Relation::new(RelationType::ManyToOne, "author", "blog::Author".into(), "");
        assert_eq!(plain.to_string(), "author: manyToOne -> blog::Author");

        let detailed = Relation::new(
            RelationType::OneToMany,
            "posts",
            "blog::Post".into(),
            "author_id",
        );
        assert_eq!(detailed.to_string(), "posts: oneToMany:author_id -> blog::Post");
    }
}
