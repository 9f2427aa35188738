//! Normalization errors, folded into the shared [`vrs_core::Error`] taxonomy
//! (§7) at every call site that crosses into the rest of the workspace.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("location is not definite: normalization requires concrete start/end coordinates")]
    IndefiniteLocation,

    #[error("normalizer requires an inlined SequenceLocation, got a reference")]
    ReferencedLocation,

    #[error("start position {start} exceeds sequence length {seq_len}")]
    StartOutOfBounds { start: u64, seq_len: usize },

    #[error("ref allele (start={start}, len={ref_len}) extends past sequence length {seq_len}")]
    RefAllelePastEnd { start: usize, ref_len: usize, seq_len: usize },

    #[error("state carries no literal residues to normalize against the reference")]
    NoLiteralSequence,

    #[error("allele residues are not valid under the reference's alphabet: {0}")]
    InvalidAlphabet(String),

    #[error(transparent)]
    Repository(#[from] vrs_seqrepo::Error),
}

pub type Result<T> = std::result::Result<T, NormalizeError>;

impl From<NormalizeError> for vrs_core::Error {
    fn from(e: NormalizeError) -> Self {
        match e {
            NormalizeError::IndefiniteLocation
            | NormalizeError::ReferencedLocation
            | NormalizeError::StartOutOfBounds { .. }
            | NormalizeError::RefAllelePastEnd { .. }
            | NormalizeError::NoLiteralSequence => vrs_core::Error::InvalidInput(e.to_string()),
            NormalizeError::InvalidAlphabet(msg) => vrs_core::Error::InvalidAlphabet(msg),
            NormalizeError::Repository(inner) => inner.into(),
        }
    }
}
