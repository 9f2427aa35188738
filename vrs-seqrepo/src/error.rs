use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown reference: {0}")]
    UnknownReference(String),

    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("malformed data-proxy URI: {0}")]
    InvalidUri(String),

    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for vrs_core::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::UnknownReference(s) => vrs_core::Error::UnknownReference(s),
            Error::InvalidAlphabet(s) => vrs_core::Error::InvalidAlphabet(s),
            Error::InvalidUri(s) => vrs_core::Error::InvalidInput(s),
            Error::BackendUnavailable(s) => vrs_core::Error::BackendUnavailable(s),
            Error::Io(e) => vrs_core::Error::BackendUnavailable(e.to_string()),
        }
    }
}
