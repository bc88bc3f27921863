use thiserror::Error;

use std::io;

use crate::tag::TagType;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected end of SNBT input")]
    EndOfInput,

    #[error("malformed SNBT: expected {expected}, found {found:?}")]
    MalformedStructure { expected: &'static str, found: char },

    #[error("unknown SNBT array type {0:?}")]
    UnknownArrayType(char),

    #[error("mismatch between SNBT array and element types: expected {expected}, found {found}")]
    TypeMismatch { expected: TagType, found: TagType },

    #[error("literal {literal:?} does not fit in {target}")]
    NumericOverflow { literal: String, target: TagType },

    #[error("SNBT nesting deeper than {0} levels")]
    DepthLimitExceeded(usize),

    /// A cursor was asked to rewind further than it buffers.
    #[error("lookahead exceeded: cannot rewind past {0} characters")]
    LookaheadExceeded(usize),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("{0}")]
    Message(String),
}

impl Error {
    pub(crate) fn malformed(expected: &'static str, found: char) -> Self {
        Error::MalformedStructure { expected, found }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
