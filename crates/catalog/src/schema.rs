//! The derived schema: a name plus one table per declaration.

use crate::{derive_schema, Descriptor, Relation, Result, SchemaError, Table};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use types::DeclarationId;

/// A relational schema derived from a set of declarations.
///
/// Each declaration maps to exactly one table and no two declarations share a
/// table. A schema is read-only once derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    name: String,
    tables: Vec<Table>,
    #[serde(skip)]
    by_id: HashMap<DeclarationId, usize>,
    #[serde(skip)]
    by_name: HashMap<String, usize>,
}

impl Schema {
    #[must_use]
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: Vec::new(),
            by_id: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Derive a schema from `declarations`. See [`derive_schema`].
    ///
    /// # Errors
    /// The first derivation error; no partial schema is returned.
    pub fn derive(name: &str, declarations: &[Descriptor]) -> Result<Self> {
        derive_schema(name, declarations)
    }

    /// Register a table under its declaration identity.
    pub(crate) fn insert(&mut self, table: Table) -> Result<()> {
        if self.by_id.contains_key(table.id()) {
            return Err(SchemaError::DuplicateDeclaration(table.id().to_string()));
        }
        if let Some(&idx) = self.by_name.get(table.name()) {
            return Err(SchemaError::DuplicateTable {
                table: table.name().to_string(),
                first: self.tables[idx].id().to_string(),
                second: table.id().to_string(),
            });
        }

        let idx = self.tables.len();
        self.by_id.insert(table.id().clone(), idx);
        self.by_name.insert(table.name().to_string(), idx);
        self.tables.push(table);
        Ok(())
    }
}

// Getters and lookups
impl Schema {
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tables in declaration order.
    #[must_use]
    #[inline]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Table generated from the declaration `id`.
    ///
    /// # Errors
    /// [`SchemaError::NotFound`] carrying the identity.
    pub fn table_for(&self, id: &DeclarationId) -> Result<&Table> {
        self.by_id
            .get(id)
            .map(|&idx| &self.tables[idx])
            .ok_or_else(|| SchemaError::NotFound {
                key: id.to_string(),
                msg: "no table for this object",
            })
    }

    /// Table generated from the Rust type `T`.
    ///
    /// # Errors
    /// See [`Schema::table_for`].
    pub fn table_for_type<T: ?Sized + 'static>(&self) -> Result<&Table> {
        self.table_for(&DeclarationId::of::<T>())
    }

    #[must_use]
    pub fn table_named(&self, name: &str) -> Option<&Table> {
        self.by_name.get(name).map(|&idx| &self.tables[idx])
    }

    /// Table a relation points to.
    ///
    /// # Errors
    /// [`SchemaError::NotFound`] when the target was never declared.
    pub fn resolve(&self, relation: &Relation) -> Result<&Table> {
        self.table_for(relation.target())
    }

    /// Number of tables.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "schema {} ({} tables)", self.name, self.tables.len())?;
        for table in &self.tables {
            write!(f, "{table}")?;
        }
        Ok(())
    }
}
