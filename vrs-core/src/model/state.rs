//! The three `Allele` state expressions: literal, reference-length, and
//! pure-length.

use serde::{Deserialize, Serialize};

/// The state (alternate allele expression) of a VRS `Allele`.
///
/// Not independently identifiable: inlined into the enclosing `Allele`'s
/// canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AlleleState {
    /// An explicit string over the alphabet of the enclosing reference.
    LiteralSequenceExpression { sequence: String },

    /// A compressed tandem-repeat expression: total length after the change,
    /// plus the length of the repeat unit.
    ReferenceLengthExpression {
        length: u64,
        repeat_subunit_length: u64,
        /// Optional concrete sequence (only present when decompression to
        /// literal form has been requested / is cheap).
        #[serde(skip_serializing_if = "Option::is_none")]
        sequence: Option<String>,
    },

    /// A purely numeric change in length with no sequence content.
    LengthExpression { length: u64 },
}

impl AlleleState {
    pub fn canonical_json(&self) -> serde_json::Value {
        match self {
            AlleleState::LiteralSequenceExpression { sequence } => serde_json::json!({
                "sequence": sequence,
                "type": "LiteralSequenceExpression",
            }),
            // `sequence`, when present, is a non-digest-contributing cache
            // of the decompressed repeat (not part of the real VRS
            // `ReferenceLengthExpression` schema): two RLEs with identical
            // `length`/`repeatSubunitLength` but different decompression
            // cache state must still digest identically (§3 invariant 5/6).
            AlleleState::ReferenceLengthExpression {
                length,
                repeat_subunit_length,
                sequence: _,
            } => serde_json::json!({
                "length": length,
                "repeatSubunitLength": repeat_subunit_length,
                "type": "ReferenceLengthExpression",
            }),
            AlleleState::LengthExpression { length } => serde_json::json!({
                "length": length,
                "type": "LengthExpression",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rle_decompression_cache_does_not_affect_canonical_form() {
        let with_cache = AlleleState::ReferenceLengthExpression {
            length: 5,
            repeat_subunit_length: 1,
            sequence: Some("AAAAA".to_string()),
        };
        let without_cache = AlleleState::ReferenceLengthExpression {
            length: 5,
            repeat_subunit_length: 1,
            sequence: None,
        };
        assert_eq!(with_cache.canonical_json(), without_cache.canonical_json());
    }
}
