//! # GA4GH VRS object model, canonical digest, and enref/deref engine
//!
//! This crate implements the leaf components of the VRS computation
//! pipeline: the tagged object model (§3), the canonical JSON serializer and
//! `sha512t24u`-based identifier algebra (§4.1), and the enref/deref engine
//! (§4.3). Normalization (`vrs-normalize`), sequence access (`vrs-seqrepo`),
//! and format translation (`vrs-translate`) are separate crates that depend
//! on this one.

pub mod canonical;
pub mod digest;
pub mod enref;
pub mod error;
pub mod model;
pub mod store;

pub use digest::Identifiable;
pub use error::{Error, Result};
pub use model::{
    Allele, AlleleState, CopyChange, CopyNumberChange, CopyNumberCount, Number, Ref,
    ResidueAlphabet, SequenceLocation, SequenceReference,
};
pub use store::{InMemoryObjectStore, ObjectStore};
