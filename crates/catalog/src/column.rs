//! Table columns.

use crate::{Constraint, ConstraintType};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use types::SqlType;

/// A column: `name`, SQL type and constraints.
///
/// A column holds at most one constraint per [`ConstraintType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    name: String,
    sql_type: SqlType,
    #[serde(serialize_with = "serialize_constraints")]
    constraints: BTreeMap<ConstraintType, Constraint>,
}

impl Column {
    /// Create a column without constraints.
    #[must_use]
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            constraints: BTreeMap::new(),
        }
    }

    /// Add a constraint while building the column. See [`Column::insert_constraint`].
    #[must_use]
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.insert_constraint(constraint);
        self
    }

    /// Add a constraint, replacing (and returning) any previous constraint of
    /// the same type: the last one wins.
    pub(crate) fn insert_constraint(&mut self, constraint: Constraint) -> Option<Constraint> {
        self.constraints
            .insert(constraint.constraint_type(), constraint)
    }
}

// Getters
impl Column {
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    #[inline]
    pub fn sql_type(&self) -> &SqlType {
        &self.sql_type
    }

    /// Constraints ordered by type.
    pub fn constraints(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.values()
    }

    #[must_use]
    pub fn constraint_for(&self, constraint_type: ConstraintType) -> Option<&Constraint> {
        self.constraints.get(&constraint_type)
    }

    #[must_use]
    #[inline]
    pub fn has_constraint(&self, constraint_type: ConstraintType) -> bool {
        self.constraints.contains_key(&constraint_type)
    }

    #[must_use]
    #[inline]
    pub fn is_primary_key(&self) -> bool {
        self.has_constraint(ConstraintType::PrimaryKey)
    }
}

impl fmt::Display for Column {
    /// Formats as `name: Type constraint...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.sql_type)?;
        for constraint in self.constraints.values() {
            write!(f, " {constraint}")?;
        }
        Ok(())
    }
}

fn serialize_constraints<S: serde::Serializer>(
    constraints: &BTreeMap<ConstraintType, Constraint>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(constraints.values())
}
