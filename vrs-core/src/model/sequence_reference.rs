//! `SequenceReference` — a pointer to a biological sequence by refget accession.

use serde::{Deserialize, Serialize};

/// The residue alphabet of a `SequenceReference`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResidueAlphabet {
    Dna,
    Rna,
    Aa,
}

/// A reference to a biological sequence, identified by its refget accession
/// (a content-based digest of the sequence itself — see `vrs-seqrepo`).
///
/// Not independently identifiable: the accession *is* its identity, so this
/// type never carries a `digest`/`id` of its own. Only `refget_accession` is
/// digest-contributing when this type is inlined into a parent's canonical
/// form (§4.1); `residue_alphabet`, `circular`, and the annotation fields are
/// excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceReference {
    pub refget_accession: String,
    pub residue_alphabet: Option<ResidueAlphabet>,
    pub circular: Option<bool>,

    // Annotation fields — excluded from the digest (§4.1, §8 property 4).
    pub label: Option<String>,
    pub alternative_labels: Option<Vec<String>>,
    pub description: Option<String>,
}

impl SequenceReference {
    pub fn new(refget_accession: impl Into<String>) -> Self {
        Self {
            refget_accession: refget_accession.into(),
            residue_alphabet: None,
            circular: None,
            label: None,
            alternative_labels: None,
            description: None,
        }
    }

    /// The canonical (digest-contributing) JSON form: `refgetAccession` and
    /// `type` only.
    pub fn canonical_json(&self) -> serde_json::Value {
        serde_json::json!({
            "refgetAccession": self.refget_accession,
            "type": "SequenceReference",
        })
    }
}
