//! Declarations: the data types a schema is derived from.
//!
//! A declaration is described explicitly rather than discovered at runtime:
//! a [`Descriptor`] carries the declaration's identity, its [`Shape`] and an
//! optional table name override. Types implementing [`Entity`] can produce
//! their own descriptor.
//!
//! # Example
//! ```rust
//! use catalog::{Descriptor, Entity, Field};
//!
//! #[allow(dead_code)]
//! struct Account {
//!     id: u64,
//!     display_name: String,
//! }
//!
//! impl Entity for Account {
//!     fn fields() -> Vec<Field> {
//!         vec![
//!             Field::of::<u64>("Id", Some("column,primaryKey")),
//!             Field::of::<String>("DisplayName", Some("column")),
//!         ]
//!     }
//! }
//!
//! let descriptor = Descriptor::of::<Account>();
//! assert!(descriptor.id().as_str().ends_with("Account"));
//! ```

use std::fmt;
use types::{DeclarationId, NativeKind, NativeType};

/// A field of a declaration, with its optional annotation tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    kind: NativeKind,
    tag: Option<String>,
}

impl Field {
    /// Field without a tag. Untagged fields produce no column.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: NativeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            tag: None,
        }
    }

    #[must_use]
    pub fn tagged(name: impl Into<String>, kind: NativeKind, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            tag: Some(tag.into()),
        }
    }

    /// Field whose kind is taken from the Rust type `T`.
    #[must_use]
    pub fn of<T: NativeType>(name: impl Into<String>, tag: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind: T::native_kind(),
            tag: tag.map(str::to_string),
        }
    }

    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    #[inline]
    pub fn kind(&self) -> &NativeKind {
        &self.kind
    }

    #[must_use]
    #[inline]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

/// Structural shape of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A record with named fields, in declaration order.
    Record(Vec<Field>),
    /// A pointer to another shape.
    Pointer(Box<Shape>),
    /// Anything that is not a record.
    Scalar(NativeKind),
}

impl Shape {
    /// Follow pointers down to the first non-pointer shape.
    #[must_use]
    pub fn resolve(&self) -> &Shape {
        match self {
            Self::Pointer(inner) => inner.resolve(),
            other => other,
        }
    }

    /// Fields of a record, looking through pointers.
    #[must_use]
    pub fn fields(&self) -> Option<&[Field]> {
        match self.resolve() {
            Self::Record(fields) => Some(fields),
            _ => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(fields) => write!(f, "record with {} field(s)", fields.len()),
            Self::Pointer(inner) => write!(f, "pointer to {inner}"),
            Self::Scalar(kind) => write!(f, "{kind}"),
        }
    }
}

/// A declared data type handed to the derivation driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    id: DeclarationId,
    shape: Shape,
    table_name: Option<String>,
}

impl Descriptor {
    #[must_use]
    pub fn new(id: impl Into<DeclarationId>, shape: Shape) -> Self {
        Self {
            id: id.into(),
            shape,
            table_name: None,
        }
    }

    /// Use `table_name` verbatim instead of deriving it.
    #[must_use]
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Descriptor of an [`Entity`], honouring its table name override.
    #[must_use]
    pub fn of<T: Entity>() -> Self {
        Self {
            id: DeclarationId::of::<T>(),
            shape: Shape::Record(T::fields()),
            table_name: T::table_name(),
        }
    }

    /// Descriptor of a pointer to an [`Entity`]. Identity is the entity's own.
    #[must_use]
    pub fn pointer_to<T: Entity>() -> Self {
        let Self {
            id,
            shape,
            table_name,
        } = Self::of::<T>();
        Self {
            id,
            shape: Shape::Pointer(Box::new(shape)),
            table_name,
        }
    }
}

// Getters
impl Descriptor {
    #[must_use]
    #[inline]
    pub fn id(&self) -> &DeclarationId {
        &self.id
    }

    #[must_use]
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Explicit table name, if any.
    #[must_use]
    #[inline]
    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }
}

/// A record type that can describe its own fields.
pub trait Entity: 'static {
    fn fields() -> Vec<Field>;

    /// Explicit table name. `None` derives it from the type name.
    fn table_name() -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl Entity for Plain {
        fn fields() -> Vec<Field> {
            vec![
                Field::of::<i32>("Id", Some("column")),
                Field::of::<Option<String>>("Nickname", None),
            ]
        }
    }

    struct Renamed;

    impl Entity for Renamed {
        fn fields() -> Vec<Field> {
            Vec::new()
        }

        fn table_name() -> Option<String> {
            Some("legacy_renamed".to_string())
        }
    }

    #[test]
    fn field_constructors() {
        let f = Field::of::<Option<String>>("Nickname", None);
        assert_eq!(f.name(), "Nickname");
        assert_eq!(f.kind(), &NativeKind::optional(NativeKind::String));
        assert_eq!(f.tag(), None);

        let g = Field::tagged("Id", NativeKind::U64, "column");
        assert_eq!(g.tag(), Some("column"));
        assert_eq!(Field::new("Id", NativeKind::U64).tag(), None);
    }

    #[test]
    fn entity_descriptor() {
        let d = Descriptor::of::<Plain>();
        assert_eq!(d.id(), &DeclarationId::of::<Plain>());
        assert_eq!(d.table_name(), None);
        assert_eq!(d.shape().fields().map(<[Field]>::len), Some(2));

        let r = Descriptor::of::<Renamed>();
        assert_eq!(r.table_name(), Some("legacy_renamed"));
    }

    #[test]
    fn pointer_descriptor_keeps_identity() {
        let d = Descriptor::pointer_to::<Plain>();
        assert_eq!(d.id(), &DeclarationId::of::<Plain>());
        assert!(matches!(d.shape(), Shape::Pointer(_)));
        assert!(matches!(d.shape().resolve(), Shape::Record(_)));
        assert!(d.shape().fields().is_some());
    }

    #[test]
    fn scalar_shape_has_no_fields() {
        let nested = Shape::Pointer(Box::new(Shape::Pointer(Box::new(Shape::Scalar(
            NativeKind::I32,
        )))));
        assert_eq!(nested.resolve(), &Shape::Scalar(NativeKind::I32));
        assert!(nested.fields().is_none());
        assert_eq!(nested.to_string(), "pointer to pointer to i32");
    }

    #[test]
    fn with_table_name_overrides() {
        let d = Descriptor::new("app::Thing", Shape::Record(Vec::new())).with_table_name("stuff");
        assert_eq!(d.table_name(), Some("stuff"));
        assert_eq!(d.id().as_str(), "app::Thing");
    }
}
