//! Native kind to abstract SQL type mapping.

use crate::{AbstractType, ArgType, NativeKind, Result, SqlType, TypeError};

/// Size argument given to `String` fields.
pub const DEFAULT_VARCHAR_SIZE: u32 = 255;

/// Map a field's native kind to its abstract SQL type.
///
/// Pointer-like kinds are dereferenced first. The mapping is closed:
///
/// | native            | SQL                   |
/// |-------------------|-----------------------|
/// | `bool`            | `Bit`                 |
/// | `i8` `i16` `i32`  | `TinyInt` `SmallInt` `MediumInt` |
/// | `i64` `isize`     | `Int`                 |
/// | `u8` `u16` `u32`  | `TinyUint` `SmallUint` `MediumUint` |
/// | `u64` `usize`     | `Uint`                |
/// | `f32` `f64`       | `Float` `Double`      |
/// | `String`          | `VarChar(255)`        |
///
/// # Errors
/// [`TypeError::UnsupportedNativeType`] naming the kind for anything else.
///
/// # Example
/// ```rust
/// use types::{map_type, AbstractType, NativeKind};
///
/// let t = map_type(&NativeKind::optional(NativeKind::String)).unwrap();
/// assert_eq!(t.abstract_type(), AbstractType::VarChar);
/// assert_eq!(t.size(), Some(255));
///
/// let err = map_type(&NativeKind::Char).unwrap_err();
/// assert!(err.to_string().contains("char"));
/// ```
pub fn map_type(kind: &NativeKind) -> Result<SqlType> {
    let abstract_type = match kind.concrete() {
        NativeKind::Bool => AbstractType::Bit,
        NativeKind::I8 => AbstractType::TinyInt,
        NativeKind::I16 => AbstractType::SmallInt,
        NativeKind::I32 => AbstractType::MediumInt,
        NativeKind::I64 | NativeKind::Isize => AbstractType::Int,
        NativeKind::U8 => AbstractType::TinyUint,
        NativeKind::U16 => AbstractType::SmallUint,
        NativeKind::U32 => AbstractType::MediumUint,
        NativeKind::U64 | NativeKind::Usize => AbstractType::Uint,
        NativeKind::F32 => AbstractType::Float,
        NativeKind::F64 => AbstractType::Double,
        NativeKind::String => {
            return Ok(SqlType::new(AbstractType::VarChar)
                .with_arg(ArgType::Size, DEFAULT_VARCHAR_SIZE))
        }
        other => return Err(TypeError::UnsupportedNativeType(other.to_string())),
    };
    Ok(SqlType::new(abstract_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NativeType;

    struct Address;

    #[test]
    fn scalar_table() {
        let cases = [
            (NativeKind::Bool, AbstractType::Bit),
            (NativeKind::I8, AbstractType::TinyInt),
            (NativeKind::I16, AbstractType::SmallInt),
            (NativeKind::I32, AbstractType::MediumInt),
            (NativeKind::I64, AbstractType::Int),
            (NativeKind::Isize, AbstractType::Int),
            (NativeKind::U8, AbstractType::TinyUint),
            (NativeKind::U16, AbstractType::SmallUint),
            (NativeKind::U32, AbstractType::MediumUint),
            (NativeKind::U64, AbstractType::Uint),
            (NativeKind::Usize, AbstractType::Uint),
            (NativeKind::F32, AbstractType::Float),
            (NativeKind::F64, AbstractType::Double),
        ];
        for (kind, expected) in cases {
            let mapped = map_type(&kind).unwrap();
            assert_eq!(mapped.abstract_type(), expected, "kind {kind}");
            assert_eq!(mapped.args().count(), 0, "kind {kind}");
        }
    }

    #[test]
    fn string_gets_default_size() {
        let mapped = map_type(&String::native_kind()).unwrap();
        assert_eq!(mapped.to_string(), "VarChar(255)");
    }

    #[test]
    fn pointer_like_kinds_are_dereferenced() {
        let mapped = map_type(&Option::<Box<u16>>::native_kind()).unwrap();
        assert_eq!(mapped.abstract_type(), AbstractType::SmallUint);
    }

    #[test]
    fn unsupported_kinds_are_named() {
        let cases = [
            (NativeKind::Char, "char"),
            (NativeKind::I128, "i128"),
            (Vec::<u8>::native_kind(), "Vec<u8>"),
            (NativeKind::record::<Address>(), "Address"),
        ];
        for (kind, name) in cases {
            let err = map_type(&kind).unwrap_err();
            assert!(
                matches!(&err, TypeError::UnsupportedNativeType(n) if n.contains(name)),
                "unexpected error {err:?}"
            );
            assert!(err.to_string().contains("unsupported"));
        }
    }

    #[test]
    fn error_names_concrete_kind() {
        let err = map_type(&Option::<char>::native_kind()).unwrap_err();
        assert_eq!(err, TypeError::UnsupportedNativeType("char".into()));
    }
}
