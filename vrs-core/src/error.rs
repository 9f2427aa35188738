//! Shared error taxonomy for the VRS core and its collaborators.
//!
//! One enum, shared across crates in this workspace, mirrors the teacher's
//! convention of a single `thiserror::Error` enum per library crate
//! (`gtars-core::errors::RegionSetError`).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("unknown reference: {0}")]
    UnknownReference(String),

    #[error("reference mismatch: {0}")]
    ReferenceMismatch(String),

    #[error("cannot represent object in target grammar: {0}")]
    Unrepresentable(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
