//! Error type for the protocol boundary.
//!
//! Only ingestion can fail. Decisions are total over any well-formed world.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeabedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input ended while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("Malformed integer {token:?} for {field}")]
    BadInt { field: &'static str, token: String },

    #[error("Malformed number {token:?} for {field}")]
    BadFloat { field: &'static str, token: String },

    #[error("Unknown creature kind code: {0}")]
    UnknownKind(i32),

    #[error("Unknown creature color code: {0}")]
    UnknownColor(i32),

    #[error("Unknown radar direction: {0}")]
    UnknownDirection(String),
}

pub type Result<T> = std::result::Result<T, SeabedError>;
