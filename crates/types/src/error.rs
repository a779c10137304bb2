use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("unsupported native type '{0}'")]
    UnsupportedNativeType(String),
    #[error("unknown abstract SQL type '{0}'")]
    UnknownSqlType(String),
}

pub type Result<T> = std::result::Result<T, TypeError>;
