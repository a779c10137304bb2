use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("Parser error: unrecognized sub-tag '{0}'")]
    UnrecognizedSubTag(String),
    #[error("Parser error: duplicate sub-tag '{0}'")]
    DuplicateSubTag(String),
    /// Parse tree shape the lowering does not expect. The grammar accepts
    /// every input, so only a grammar change can produce this.
    #[error("Parser error: unexpected rule in {0}: {1}")]
    UnexpectedRule(String, String),
}

pub type Result<T> = std::result::Result<T, ParserError>;
