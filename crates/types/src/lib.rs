//! Field and column types.
//!
//! - [`NativeKind`]: the kind of a declared field (`i32`, `String`, `Vec<T>`, ...)
//! - [`SqlType`]: a dialect-independent SQL type with size/decimals arguments
//! - [`map_type`]: the closed mapping from the former to the latter
//! - [`DeclarationId`]: identity of a declared data type

pub mod declaration_id;
pub mod error;
pub mod mapper;
pub mod native_kind;
pub mod sql_type;

pub use declaration_id::DeclarationId;
pub use error::{Result, TypeError};
pub use mapper::{map_type, DEFAULT_VARCHAR_SIZE};
pub use native_kind::{NativeKind, NativeType};
pub use sql_type::{AbstractType, ArgType, SqlType};
