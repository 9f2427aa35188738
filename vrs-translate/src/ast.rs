//! A minimal genomic (`g.`) HGVS intermediate, standing in for the external
//! HGVS-parser + transcript-alignment collaborator that the full grammar
//! (c., n., p., r., m. forms; intronic offsets; uncertain positions) is
//! explicitly out of scope for (§1 Non-goals: "the HGVS grammar parser
//! proper"). Shape grounded on the `hgvs-weaver` reference's
//! `GVariant`/`PosEdit`/`NaEdit`, narrowed to the genomic nucleic-acid edits
//! §4.5's translator table actually lists: substitution, deletion,
//! insertion, delins, duplication.

use serde::{Deserialize, Serialize};

/// A nucleic-acid edit, positioned by a [`SimpleInterval`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NaEdit {
    Sub { reference: String, alternate: String },
    Del { deleted: Option<String> },
    Ins { inserted: String },
    Delins { deleted: Option<String>, inserted: String },
    Dup { duplicated: Option<String> },
}

/// A 1-based, closed `[start, end]` interval (HGVS convention); `end ==
/// start` for a single-residue edit such as a substitution or an insertion's
/// anchor pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleInterval {
    pub start: u64,
    pub end: u64,
}

/// A parsed genomic HGVS variant: `{accession}:g.{interval}{edit}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomicVariant {
    pub accession: String,
    pub interval: SimpleInterval,
    pub edit: NaEdit,
}
