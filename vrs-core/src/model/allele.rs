//! `Allele` — a single state at a location.

use serde::{Deserialize, Serialize};

use super::reference::Ref;
use super::sequence_location::SequenceLocation;
use super::state::AlleleState;
use crate::digest::{Identifiable, resolve_ref_digest};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allele {
    pub location: Ref<SequenceLocation>,
    pub state: AlleleState,

    pub id: Option<String>,
    pub digest: Option<String>,
}

impl Allele {
    pub fn new(location: impl Into<Ref<SequenceLocation>>, state: AlleleState) -> Self {
        Self {
            location: location.into(),
            state,
            id: None,
            digest: None,
        }
    }
}

impl Identifiable for Allele {
    const TYPE_PREFIX: &'static str = "VA";

    fn canonical_json(&self) -> Result<serde_json::Value> {
        let location_digest = resolve_ref_digest(&self.location)?;
        Ok(serde_json::json!({
            "location": location_digest,
            "state": self.state.canonical_json(),
            "type": "Allele",
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SequenceReference;

    #[test]
    fn canonical_form_embeds_the_bare_location_digest_not_its_identifier() {
        let location = SequenceLocation::new(
            SequenceReference::new("SQ.F-LrLnMKIjgbR1HECnsl_VGjXfs3QHDE"),
            55181319u64,
            55181320u64,
        );
        let location_digest = location.digest().unwrap();
        let allele = Allele::new(location, AlleleState::LiteralSequenceExpression { sequence: "T".to_string() });

        let json = allele.canonical_json().unwrap();
        let embedded = json["location"].as_str().unwrap();
        assert_eq!(embedded, location_digest);
        assert!(!embedded.starts_with("ga4gh:"));
    }

    #[test]
    fn inlined_and_referenced_locations_produce_the_same_allele_digest() {
        let location = SequenceLocation::new(
            SequenceReference::new("SQ.F-LrLnMKIjgbR1HECnsl_VGjXfs3QHDE"),
            55181319u64,
            55181320u64,
        );
        let location_id = location.identifier().unwrap();
        let state = AlleleState::LiteralSequenceExpression { sequence: "T".to_string() };

        let inlined = Allele::new(location, state.clone());
        let referenced = Allele { location: Ref::referenced(location_id), state, id: None, digest: None };

        assert_eq!(inlined.digest().unwrap(), referenced.digest().unwrap());
    }
}
