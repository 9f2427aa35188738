//! `CopyNumberCount` and `CopyNumberChange` — absolute and relative copy
//! number variation over a `SequenceLocation`.

use serde::{Deserialize, Serialize};

use super::coordinate::Number;
use super::reference::Ref;
use super::sequence_location::SequenceLocation;
use crate::digest::{Identifiable, resolve_ref_digest};
use crate::error::Result;

/// A `CopyNumberCount`: an absolute copy count at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyNumberCount {
    pub location: Ref<SequenceLocation>,
    pub copies: Number,

    pub id: Option<String>,
    pub digest: Option<String>,
}

impl CopyNumberCount {
    pub fn new(location: impl Into<Ref<SequenceLocation>>, copies: impl Into<Number>) -> Self {
        Self {
            location: location.into(),
            copies: copies.into(),
            id: None,
            digest: None,
        }
    }
}

impl Identifiable for CopyNumberCount {
    const TYPE_PREFIX: &'static str = "CN";

    fn canonical_json(&self) -> Result<serde_json::Value> {
        let location_digest = resolve_ref_digest(&self.location)?;
        Ok(serde_json::json!({
            "copies": self.copies.to_json(),
            "location": location_digest,
            "type": "CopyNumberCount",
        }))
    }
}

/// The closed ontology of relative copy number change terms (§9 "Ontology
/// enum" — modeled as an enumerated variant, never a free string).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyChange {
    #[serde(rename = "efo:0030064")]
    RegionalBasePloidy,
    #[serde(rename = "efo:0030067")]
    Loss,
    #[serde(rename = "efo:0020073")]
    LowLevelLoss,
    #[serde(rename = "efo:0030068")]
    CompleteGenomicLoss,
    #[serde(rename = "efo:0030070")]
    Gain,
    #[serde(rename = "efo:0030071")]
    LowLevelGain,
    #[serde(rename = "efo:0030072")]
    HighLevelGain,
    #[serde(rename = "efo:0020072")]
    HighLevelLoss,
}

impl CopyChange {
    /// The EFO ontology term string, as it appears in the canonical digest.
    pub fn as_term(&self) -> &'static str {
        match self {
            CopyChange::RegionalBasePloidy => "efo:0030064",
            CopyChange::Loss => "efo:0030067",
            CopyChange::LowLevelLoss => "efo:0020073",
            CopyChange::CompleteGenomicLoss => "efo:0030068",
            CopyChange::Gain => "efo:0030070",
            CopyChange::LowLevelGain => "efo:0030071",
            CopyChange::HighLevelGain => "efo:0030072",
            CopyChange::HighLevelLoss => "efo:0020072",
        }
    }
}

/// A `CopyNumberChange`: a relative copy number change at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyNumberChange {
    pub location: Ref<SequenceLocation>,
    pub copy_change: CopyChange,

    pub id: Option<String>,
    pub digest: Option<String>,
}

impl CopyNumberChange {
    pub fn new(location: impl Into<Ref<SequenceLocation>>, copy_change: CopyChange) -> Self {
        Self {
            location: location.into(),
            copy_change,
            id: None,
            digest: None,
        }
    }
}

impl Identifiable for CopyNumberChange {
    const TYPE_PREFIX: &'static str = "CX";

    fn canonical_json(&self) -> Result<serde_json::Value> {
        let location_digest = resolve_ref_digest(&self.location)?;
        Ok(serde_json::json!({
            "copyChange": self.copy_change.as_term(),
            "location": location_digest,
            "type": "CopyNumberChange",
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sequence_reference::SequenceReference;

    fn loc() -> SequenceLocation {
        SequenceLocation::new(
            SequenceReference::new("SQ.F-LrLnMKIjgbR1HECnsl_VGjXfs3QHDE"),
            45002867u64,
            45015056u64,
        )
    }

    #[test]
    fn copy_number_change_identifier_has_the_cx_shape() {
        let cx = CopyNumberChange::new(loc(), CopyChange::Loss);
        let id = cx.identifier().unwrap();
        assert!(id.starts_with("ga4gh:CX."));
        assert_eq!(id.len(), "ga4gh:CX.".len() + 32);
    }

    #[test]
    fn canonical_form_embeds_the_bare_location_digest_not_its_identifier() {
        let location = loc();
        let location_digest = location.digest().unwrap();
        let cx = CopyNumberChange::new(location, CopyChange::Loss);

        let json = cx.canonical_json().unwrap();
        let embedded = json["location"].as_str().unwrap();
        assert_eq!(embedded, location_digest);
        assert!(!embedded.starts_with("ga4gh:"));
    }

    #[test]
    fn inlined_and_referenced_locations_produce_the_same_copy_number_change_digest() {
        let location = loc();
        let location_id = location.identifier().unwrap();

        let inlined = CopyNumberChange::new(location, CopyChange::Loss);
        let referenced = CopyNumberChange {
            location: Ref::referenced(location_id),
            copy_change: CopyChange::Loss,
            id: None,
            digest: None,
        };

        assert_eq!(inlined.digest().unwrap(), referenced.digest().unwrap());
    }

    #[test]
    fn inlined_and_referenced_locations_produce_the_same_copy_number_count_digest() {
        let location = loc();
        let location_id = location.identifier().unwrap();

        let inlined = CopyNumberCount::new(location, 3u64);
        let referenced = CopyNumberCount {
            location: Ref::referenced(location_id),
            copies: Number::from(3u64),
            id: None,
            digest: None,
        };

        assert_eq!(inlined.digest().unwrap(), referenced.digest().unwrap());
    }
}
