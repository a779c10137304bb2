//! Native field kinds of declared data types.

use crate::DeclarationId;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// The kind of a declared field, as seen by the type mapper.
///
/// Scalar variants mirror the Rust primitive types. Wrapper variants describe
/// pointer-like and container types; only the pointer-like ones
/// ([`NativeKind::Pointer`], [`NativeKind::Optional`]) are transparent to the
/// mapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    /// Platform-default signed integer.
    Isize,
    U8,
    U16,
    U32,
    U64,
    /// Platform-default unsigned integer.
    Usize,
    I128,
    U128,
    F32,
    F64,
    Char,
    String,
    /// Owned pointer, e.g. `Box<T>`.
    Pointer(Box<NativeKind>),
    /// Nullable value, e.g. `Option<T>`.
    Optional(Box<NativeKind>),
    /// Sequence, e.g. `Vec<T>`.
    List(Box<NativeKind>),
    /// Key/value map.
    Map(Box<NativeKind>, Box<NativeKind>),
    /// Another declared data type.
    Record(DeclarationId),
}

impl NativeKind {
    /// Kind of a field holding the declared record `T`.
    #[must_use]
    pub fn record<T: ?Sized + 'static>() -> Self {
        Self::Record(DeclarationId::of::<T>())
    }

    #[must_use]
    pub fn list_of(item: NativeKind) -> Self {
        Self::List(Box::new(item))
    }

    #[must_use]
    pub fn pointer_to(inner: NativeKind) -> Self {
        Self::Pointer(Box::new(inner))
    }

    #[must_use]
    pub fn optional(inner: NativeKind) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Strip pointer-like wrappers (any depth).
    #[must_use]
    pub fn concrete(&self) -> &NativeKind {
        match self {
            Self::Pointer(inner) | Self::Optional(inner) => inner.concrete(),
            other => other,
        }
    }

    /// The declared record this kind refers to, looking through pointer-like
    /// wrappers and lists. Used to find the target of a relation.
    #[must_use]
    pub fn record_target(&self) -> Option<&DeclarationId> {
        match self.concrete() {
            Self::Record(id) => Some(id),
            Self::List(item) => item.record_target(),
            _ => None,
        }
    }
}

impl fmt::Display for NativeKind {
    /// Formats the kind in Rust type syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::I8 => f.write_str("i8"),
            Self::I16 => f.write_str("i16"),
            Self::I32 => f.write_str("i32"),
            Self::I64 => f.write_str("i64"),
            Self::Isize => f.write_str("isize"),
            Self::U8 => f.write_str("u8"),
            Self::U16 => f.write_str("u16"),
            Self::U32 => f.write_str("u32"),
            Self::U64 => f.write_str("u64"),
            Self::Usize => f.write_str("usize"),
            Self::I128 => f.write_str("i128"),
            Self::U128 => f.write_str("u128"),
            Self::F32 => f.write_str("f32"),
            Self::F64 => f.write_str("f64"),
            Self::Char => f.write_str("char"),
            Self::String => f.write_str("String"),
            Self::Pointer(inner) => write!(f, "Box<{inner}>"),
            Self::Optional(inner) => write!(f, "Option<{inner}>"),
            Self::List(item) => write!(f, "Vec<{item}>"),
            Self::Map(key, value) => write!(f, "Map<{key}, {value}>"),
            Self::Record(id) => write!(f, "{id}"),
        }
    }
}

/// Rust types with a known [`NativeKind`].
///
/// Declared records do not implement this; use [`NativeKind::record`].
pub trait NativeType {
    fn native_kind() -> NativeKind;
}

macro_rules! native_scalars {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl NativeType for $ty {
                #[inline]
                fn native_kind() -> NativeKind {
                    NativeKind::$kind
                }
            }
        )*
    };
}

native_scalars! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    i128 => I128,
    u128 => U128,
    f32 => F32,
    f64 => F64,
    char => Char,
    String => String,
}

impl<T: NativeType> NativeType for Box<T> {
    fn native_kind() -> NativeKind {
        NativeKind::pointer_to(T::native_kind())
    }
}

impl<T: NativeType> NativeType for Option<T> {
    fn native_kind() -> NativeKind {
        NativeKind::optional(T::native_kind())
    }
}

impl<T: NativeType> NativeType for Vec<T> {
    fn native_kind() -> NativeKind {
        NativeKind::list_of(T::native_kind())
    }
}

impl<K: NativeType, V: NativeType> NativeType for HashMap<K, V> {
    fn native_kind() -> NativeKind {
        NativeKind::Map(Box::new(K::native_kind()), Box::new(V::native_kind()))
    }
}

impl<K: NativeType, V: NativeType> NativeType for BTreeMap<K, V> {
    fn native_kind() -> NativeKind {
        NativeKind::Map(Box::new(K::native_kind()), Box::new(V::native_kind()))
    }
}
