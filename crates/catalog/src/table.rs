//! Tables derived from declarations.

use crate::{Column, Relation, RelationType, Result, SchemaError};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use types::DeclarationId;

/// A SQL table generated from one declaration.
///
/// Columns keep declaration order and have unique names. Relations keep the
/// order their fields were declared in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    id: DeclarationId,
    name: String,
    columns: Vec<Column>,
    #[serde(skip)]
    column_index: HashMap<String, usize>,
    relations: Vec<Relation>,
}

impl Table {
    #[must_use]
    pub fn new(id: DeclarationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            columns: Vec::new(),
            column_index: HashMap::new(),
            relations: Vec::new(),
        }
    }

    /// Append a column.
    ///
    /// # Errors
    /// [`SchemaError::DuplicateColumn`] if the name is taken.
    pub(crate) fn insert_column(&mut self, column: Column) -> Result<()> {
        if self.column_index.contains_key(column.name()) {
            return Err(SchemaError::DuplicateColumn {
                table: self.name.clone(),
                column: column.name().to_string(),
            });
        }
        self.column_index
            .insert(column.name().to_string(), self.columns.len());
        self.columns.push(column);
        Ok(())
    }

    pub(crate) fn push_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }
}

// Getters and lookups
impl Table {
    /// Declaration this table was generated from.
    #[must_use]
    #[inline]
    pub fn id(&self) -> &DeclarationId {
        &self.id
    }

    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column by name.
    ///
    /// # Errors
    /// [`SchemaError::NotFound`] carrying the name.
    pub fn column_for(&self, name: &str) -> Result<&Column> {
        self.column_index
            .get(name)
            .map(|&idx| &self.columns[idx])
            .ok_or_else(|| SchemaError::NotFound {
                key: name.to_string(),
                msg: "no column with the given name",
            })
    }

    /// Columns carrying a `primaryKey` constraint.
    pub fn primary_key(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_primary_key())
    }

    #[must_use]
    #[inline]
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// First relation of the given type.
    #[must_use]
    pub fn relation_for(&self, relation_type: RelationType) -> Option<&Relation> {
        self.relations
            .iter()
            .find(|r| r.relation_type() == relation_type)
    }

    /// Number of columns.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl fmt::Display for Table {
    /// Formats the table name and origin, then one indented line per column
    /// and relation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.id)?;
        for column in &self.columns {
            writeln!(f, "  {column}")?;
        }
        for relation in &self.relations {
            writeln!(f, "  {relation}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Constraint, ConstraintType};
    use types::{AbstractType, SqlType};

    fn users() -> Table {
        let mut table = Table::new("app::User".into(), "users");
        table
            .insert_column(
                Column::new("id", SqlType::new(AbstractType::Uint))
                    .with_constraint(Constraint::new(ConstraintType::PrimaryKey, "")),
            )
            .unwrap();
        table
            .insert_column(Column::new("score", SqlType::new(AbstractType::Double)))
            .unwrap();
        table
    }

    #[test]
    fn new_table_has_name_and_no_columns() {
        let t = Table::new("app::Empty".into(), "empties");
        assert_eq!(t.name(), "empties");
        assert_eq!(t.id().as_str(), "app::Empty");
        assert!(t.is_empty());
        assert!(t.relations().is_empty());
    }

    #[test]
    fn column_lookup() {
        let t = users();
        assert_eq!(t.len(), 2);
        assert_eq!(t.column_for("score").unwrap().name(), "score");
        assert_eq!(
            t.columns().iter().map(Column::name).collect::<Vec<_>>(),
            ["id", "score"]
        );
        assert_eq!(t.primary_key().map(Column::name).collect::<Vec<_>>(), ["id"]);
    }

    #[test]
    fn missing_column_is_not_found() {
        let err = users().column_for("nope").unwrap_err();
        assert!(matches!(&err, SchemaError::NotFound { key, .. } if key == "nope"));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn duplicate_column_is_rejected() {
        let mut t = users();
        let err = t
            .insert_column(Column::new("id", SqlType::new(AbstractType::Int)))
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateColumn {
                table: "users".into(),
                column: "id".into()
            }
        );
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn relation_for_returns_first_of_type() {
        let mut t = users();
        t.push_relation(Relation::new(RelationType::OneToMany, "posts", "app::Post".into(), ""));
        t.push_relation(Relation::new(RelationType::OneToMany, "likes", "app::Like".into(), ""));

        assert_eq!(t.relation_for(RelationType::OneToMany).unwrap().field(), "posts");
        assert!(t.relation_for(RelationType::ManyToMany).is_none());
    }

    #[test]
    fn display_golden() {
        let mut t = users();
        t.push_relation(Relation::new(RelationType::OneToMany, "posts", "app::Post".into(), ""));
        assert_eq!(
            t.to_string(),
            "users (app::User)\n  id: Uint primaryKey\n  score: Double\n  posts: oneToMany -> app::Post\n"
        );
    }
}
