//! # SequenceRepository collaborator (§6.1)
//!
//! Refget-accession-addressed sequence access, alias translation across
//! namespaces, and FASTA ingestion. Grounded on the teacher's
//! `gtars-refget` crate (alphabet detection, `sha512t24u`, alias tables),
//! trimmed to what the VRS core's normalizer and translators need: whole
//! sequences held in memory, not a production-scale encoded genome store.

pub mod alphabet;
pub mod error;
pub mod fasta;
pub mod repository;
pub mod uri;

#[cfg(feature = "http")]
pub mod remote;

pub use error::{Error, Result};
pub use repository::{InMemorySequenceRepository, SequenceMetadata, SequenceRepository};
pub use uri::DataProxyUri;
