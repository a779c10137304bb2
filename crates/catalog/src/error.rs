use parser::ParserError;
use thiserror::Error;
use types::TypeError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error(transparent)]
    Tag(#[from] ParserError),
    #[error(transparent)]
    Type(#[from] TypeError),
    #[error("unrecognized constraint type '{0}'")]
    UnrecognizedConstraint(String),
    #[error("unrecognized relation type '{0}'")]
    UnrecognizedRelation(String),
    #[error("unsupported type {shape}: only records and pointers to records can be declared")]
    UnsupportedShape { shape: String },
    #[error("key not found: key = {key}, msg = {msg}")]
    NotFound { key: String, msg: &'static str },
    #[error("duplicate declaration '{0}'")]
    DuplicateDeclaration(String),
    #[error("duplicate table name '{table}' (declared by '{first}' and '{second}')")]
    DuplicateTable {
        table: String,
        first: String,
        second: String,
    },
    #[error("duplicate column '{column}' in table '{table}'")]
    DuplicateColumn { table: String, column: String },
    #[error("relation on field '{field}' needs a record field or a target payload, found '{kind}'")]
    InvalidRelationTarget { field: String, kind: String },
    #[error("field '{field}': {source}")]
    Field {
        field: String,
        source: Box<SchemaError>,
    },
    #[error("error generating table for '{declaration}': {source}")]
    Derivation {
        declaration: String,
        source: Box<SchemaError>,
    },
}

impl SchemaError {
    /// The innermost error, with field and declaration context stripped.
    #[must_use]
    pub fn root_cause(&self) -> &SchemaError {
        match self {
            Self::Field { source, .. } | Self::Derivation { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
