//! Identity of a declared data type.

use serde::Serialize;
use std::fmt;

/// Unique identifier of a data-type declaration.
///
/// For Rust types this is the full type path reported by
/// [`std::any::type_name`], e.g. `app::model::User`. Declarations registered
/// by hand may use any string, as long as it is unique within one schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DeclarationId(String);

impl DeclarationId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identity of the Rust type `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self(std::any::type_name::<T>().to_string())
    }

    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DeclarationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DeclarationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for DeclarationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
