//! `SequenceLocation` — a half-open interbase interval on a `SequenceReference`.

use serde::{Deserialize, Serialize};

use super::coordinate::Number;
use super::sequence_reference::SequenceReference;
use crate::digest::Identifiable;
use crate::error::Result;

/// A half-open interbase interval on a `SequenceReference`.
///
/// Invariant (§3.1): for a linear reference, `0 <= start <= end <=
/// sequenceLength`; `start`/`end` may each be a definite integer or an
/// uncertain `[lower, upper]` range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceLocation {
    pub sequence_reference: SequenceReference,
    pub start: Number,
    pub end: Number,

    pub id: Option<String>,
    pub digest: Option<String>,
}

impl SequenceLocation {
    pub fn new(sequence_reference: SequenceReference, start: impl Into<Number>, end: impl Into<Number>) -> Self {
        Self {
            sequence_reference,
            start: start.into(),
            end: end.into(),
            id: None,
            digest: None,
        }
    }

    /// `true` when both `start` and `end` are definite integers — the
    /// precondition for normalization to operate on this location (Open
    /// Question (a): range-valued bounds are preserved as-is).
    pub fn is_definite(&self) -> bool {
        self.start.is_definite() && self.end.is_definite()
    }
}

impl Identifiable for SequenceLocation {
    const TYPE_PREFIX: &'static str = "SL";

    fn canonical_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::json!({
            "end": self.end.to_json(),
            "sequenceReference": self.sequence_reference.canonical_json(),
            "start": self.start.to_json(),
            "type": "SequenceLocation",
        }))
    }
}
