//! Schema derivation driver.
//!
//! Walks every declaration in order and builds its table:
//! 1. the shape is resolved through pointers and must be a record
//! 2. the table name is the explicit override or derived from the type name
//! 3. every tagged field is parsed; `column` yields a column carrying the
//!    field's constraints, relation sub-tags yield relations
//! 4. the table is registered under the declaration identity
//!
//! Any failure aborts the whole derivation.

use crate::naming::{derive_column_name, derive_table_name, type_base_name};
use crate::{
    Column, Constraint, ConstraintType, Descriptor, Field, Relation, RelationType, Result, Schema,
    SchemaError, Table,
};
use parser::{ParsedTag, SubTag};
use tracing::{debug, error, info, trace, warn};
use types::{map_type, DeclarationId};

/// Derive a schema named `name` from `declarations`.
///
/// # Errors
/// The first failure, wrapped as [`SchemaError::Derivation`] naming the
/// declaration. Field-level failures are additionally wrapped as
/// [`SchemaError::Field`].
pub fn derive_schema(name: &str, declarations: &[Descriptor]) -> Result<Schema> {
    let mut schema = Schema::new(name);

    for declaration in declarations {
        let wrap = |source: SchemaError| SchemaError::Derivation {
            declaration: declaration.id().to_string(),
            source: Box::new(source),
        };

        let table = derive_table(declaration).map_err(wrap)?;
        debug!(
            "Derived table '{}' for {} ({} columns, {} relations)",
            table.name(),
            declaration.id(),
            table.len(),
            table.relations().len()
        );
        schema.insert(table).map_err(wrap)?;
    }

    info!(
        "Derived schema '{}' with {} tables",
        schema.name(),
        schema.len()
    );
    Ok(schema)
}

fn derive_table(declaration: &Descriptor) -> Result<Table> {
    let fields = declaration
        .shape()
        .fields()
        .ok_or_else(|| SchemaError::UnsupportedShape {
            shape: declaration.shape().resolve().to_string(),
        })?;

    let name = match declaration.table_name() {
        Some(explicit) => explicit.to_string(),
        None => derive_table_name(type_base_name(declaration.id().as_str())),
    };

    let mut table = Table::new(declaration.id().clone(), name);
    for field in fields {
        derive_field(&mut table, field).map_err(|source| SchemaError::Field {
            field: field.name().to_string(),
            source: Box::new(source),
        })?;
    }
    Ok(table)
}

fn derive_field(table: &mut Table, field: &Field) -> Result<()> {
    let Some(raw) = field.tag() else {
        trace!("Skipping untagged field '{}'", field.name());
        return Ok(());
    };

    let tag = ParsedTag::parse(raw).map_err(|err| {
        error!("Invalid tag on field '{}': {}", field.name(), err);
        err
    })?;
    let mut cursor = tag.cursor();

    let mut column = match cursor.take(SubTag::Column) {
        Some(explicit) => {
            let name = if explicit.is_empty() {
                derive_column_name(field.name())
            } else {
                explicit.to_string()
            };
            Some(Column::new(name, map_type(field.kind())?))
        }
        None => None,
    };

    for (sub_tag, payload) in cursor.take_remaining() {
        if sub_tag.is_relation() {
            let relation_type = RelationType::classify(sub_tag)?;
            let target = relation_target(field, payload)?;
            trace!("Relation {} on field '{}'", relation_type, field.name());
            table.push_relation(Relation::new(relation_type, field.name(), target, payload));
            continue;
        }

        let constraint = Constraint::new(ConstraintType::classify(sub_tag)?, payload);
        match column.as_mut() {
            Some(column) => {
                if let Some(previous) = column.insert_constraint(constraint) {
                    debug!(
                        "Constraint '{}' on column '{}' replaced",
                        previous,
                        column.name()
                    );
                }
            }
            None => warn!(
                "Ignoring sub-tag '{}' on field '{}': no column declared",
                sub_tag,
                field.name()
            ),
        }
    }

    if let Some(column) = column {
        trace!("Column {}", column);
        table.insert_column(column)?;
    }
    Ok(())
}

/// Target of a relation declared on `field`: the record its kind refers to,
/// else the declaration named by the payload (possibly never declared).
fn relation_target(field: &Field, payload: &str) -> Result<DeclarationId> {
    if let Some(id) = field.kind().record_target() {
        return Ok(id.clone());
    }
    if payload.is_empty() {
        return Err(SchemaError::InvalidRelationTarget {
            field: field.name().to_string(),
            kind: field.kind().to_string(),
        });
    }
    Ok(DeclarationId::new(payload))
}
