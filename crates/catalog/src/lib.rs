//! Relational Catalog Library
//!
//! Derives a relational schema (tables, columns, constraints and relations
//! between tables) from annotated data-type declarations, and exposes the
//! resulting read-only model.
//!
//! ```rust
//! use catalog::{Descriptor, Field, Schema, Shape};
//! use types::NativeKind;
//!
//! let declarations = [Descriptor::new(
//!     "app::FakeStruct",
//!     Shape::Record(vec![
//!         Field::tagged("Id", NativeKind::U64, "column,primaryKey"),
//!         Field::tagged("FloatNumber", NativeKind::F64, "column"),
//!     ]),
//! )];
//!
//! let schema = Schema::derive("app", &declarations).unwrap();
//! let table = schema.table_named("fake_structs").unwrap();
//! assert_eq!(table.columns().len(), 2);
//! assert!(table.column_for("float_number").is_ok());
//! ```

/// Table columns.
pub mod column;
/// Column constraints and their classification.
pub mod constraint;
/// Declarations handed to the driver.
pub mod declaration;
/// The derivation driver.
pub mod derive;
pub mod error;
/// Table and column name derivation.
pub mod naming;
/// Relations between tables and their classification.
pub mod relation;
pub mod schema;
pub mod table;


/// Re-exported.
pub use column::Column;
pub use constraint::{Constraint, ConstraintType};
pub use declaration::{Descriptor, Entity, Field, Shape};
pub use derive::derive_schema;
pub use error::{Result, SchemaError};
pub use relation::{Relation, RelationType};
pub use schema::Schema;
pub use table::Table;
