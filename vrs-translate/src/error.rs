use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed {format} expression: {message}")]
    InvalidInput { format: &'static str, message: String },

    #[error("{0} has no representation in the requested grammar")]
    Unrepresentable(String),

    #[error("reference allele does not match the sequence at the given location: {0}")]
    ReferenceMismatch(String),

    #[error(transparent)]
    Repository(#[from] vrs_seqrepo::Error),

    #[error(transparent)]
    Normalize(#[from] vrs_normalize::NormalizeError),

    #[error(transparent)]
    Core(#[from] vrs_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for vrs_core::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::InvalidInput { format, message } => vrs_core::Error::InvalidInput(format!("{format}: {message}")),
            Error::Unrepresentable(msg) => vrs_core::Error::Unrepresentable(msg),
            Error::ReferenceMismatch(msg) => vrs_core::Error::ReferenceMismatch(msg),
            Error::Repository(inner) => inner.into(),
            Error::Normalize(inner) => inner.into(),
            Error::Core(inner) => inner,
        }
    }
}
