//! Dialect-independent SQL column types.
//!
//! An [`SqlType`] pairs an [`AbstractType`] tag with optional [`ArgType`]
//! arguments (size, decimal places). A dialect layer later maps it onto a
//! concrete database type.
//!
//! # Example
//! ```rust
//! use types::{AbstractType, ArgType, SqlType};
//!
//! let price = SqlType::new(AbstractType::Decimal)
//!     .with_arg(ArgType::Size, 10)
//!     .with_arg(ArgType::Decimals, 2);
//! assert_eq!(price.to_string(), "Decimal(10, 2)");
//! assert_eq!(price.decimals(), Some(2));
//! ```

use crate::TypeError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Abstract SQL type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AbstractType {
    // Text
    Char,
    VarChar,
    Text,
    MediumText,
    LongText,
    Blob,
    MediumBlob,
    LongBlob,

    // Numeric
    Bit,
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,
    TinyUint,
    SmallUint,
    MediumUint,
    Uint,
    BigUint,
    Float,
    Double,
    Decimal,

    // Date and time
    Date,
    DateTime,
    TimeStamp,
    Time,
    Year,
}

impl AbstractType {
    pub const ALL: [AbstractType; 27] = [
        Self::Char,
        Self::VarChar,
        Self::Text,
        Self::MediumText,
        Self::LongText,
        Self::Blob,
        Self::MediumBlob,
        Self::LongBlob,
        Self::Bit,
        Self::TinyInt,
        Self::SmallInt,
        Self::MediumInt,
        Self::Int,
        Self::BigInt,
        Self::TinyUint,
        Self::SmallUint,
        Self::MediumUint,
        Self::Uint,
        Self::BigUint,
        Self::Float,
        Self::Double,
        Self::Decimal,
        Self::Date,
        Self::DateTime,
        Self::TimeStamp,
        Self::Time,
        Self::Year,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Char => "Char",
            Self::VarChar => "VarChar",
            Self::Text => "Text",
            Self::MediumText => "MediumText",
            Self::LongText => "LongText",
            Self::Blob => "Blob",
            Self::MediumBlob => "MediumBlob",
            Self::LongBlob => "LongBlob",
            Self::Bit => "Bit",
            Self::TinyInt => "TinyInt",
            Self::SmallInt => "SmallInt",
            Self::MediumInt => "MediumInt",
            Self::Int => "Int",
            Self::BigInt => "BigInt",
            Self::TinyUint => "TinyUint",
            Self::SmallUint => "SmallUint",
            Self::MediumUint => "MediumUint",
            Self::Uint => "Uint",
            Self::BigUint => "BigUint",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Decimal => "Decimal",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::TimeStamp => "TimeStamp",
            Self::Time => "Time",
            Self::Year => "Year",
        }
    }

    #[must_use]
    #[inline]
    pub fn is_text(self) -> bool {
        self <= Self::LongBlob
    }

    #[must_use]
    #[inline]
    pub fn is_numeric(self) -> bool {
        (Self::Bit..=Self::Decimal).contains(&self)
    }

    #[must_use]
    #[inline]
    pub fn is_temporal(self) -> bool {
        self >= Self::Date
    }
}

impl FromStr for AbstractType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TypeError::UnknownSqlType(s.to_string()))
    }
}

impl fmt::Display for AbstractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named argument of an [`SqlType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgType {
    /// Size of a text or numeric type.
    Size,
    /// Number of decimal places.
    Decimals,
}

/// An abstract SQL type with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SqlType {
    #[serde(rename = "type")]
    abstract_type: AbstractType,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    args: BTreeMap<ArgType, u32>,
}

impl SqlType {
    #[must_use]
    pub fn new(abstract_type: AbstractType) -> Self {
        Self {
            abstract_type,
            args: BTreeMap::new(),
        }
    }

    /// Set `arg`, replacing any previous value.
    #[must_use]
    pub fn with_arg(mut self, arg: ArgType, value: u32) -> Self {
        self.args.insert(arg, value);
        self
    }

    #[must_use]
    #[inline]
    pub fn abstract_type(&self) -> AbstractType {
        self.abstract_type
    }

    #[must_use]
    #[inline]
    pub fn arg(&self, arg: ArgType) -> Option<u32> {
        self.args.get(&arg).copied()
    }

    /// Arguments in `Size`, `Decimals` order.
    pub fn args(&self) -> impl Iterator<Item = (ArgType, u32)> + '_ {
        self.args.iter().map(|(k, v)| (*k, *v))
    }

    #[must_use]
    pub fn size(&self) -> Option<u32> {
        self.arg(ArgType::Size)
    }

    #[must_use]
    pub fn decimals(&self) -> Option<u32> {
        self.arg(ArgType::Decimals)
    }
}

impl From<AbstractType> for SqlType {
    fn from(abstract_type: AbstractType) -> Self {
        Self::new(abstract_type)
    }
}

impl fmt::Display for SqlType {
    /// Formats as `Type` or `Type(arg, ...)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abstract_type)?;
        if !self.args.is_empty() {
            let args = self
                .args
                .values()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "({args})")?;
        }
        Ok(())
    }
}
