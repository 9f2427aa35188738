//! # Format translators (§4.5)
//!
//! `translate_from`/`translate_to` between a VRS `Allele` and HGVS (genomic
//! forms only — see [`ast`]), SPDI, gnomAD, and Beacon expressions, chaining
//! into `vrs-normalize` and `vrs-core`'s identifier assignment.

pub mod ast;
pub mod beacon;
pub mod error;
pub mod gnomad;
pub mod hgvs;
pub mod spdi;
pub mod translate;

pub use error::{Error, Result};
pub use translate::{Format, Translator};
