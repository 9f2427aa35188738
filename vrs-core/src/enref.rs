//! Enref / deref engine (§4.3).
//!
//! `enref` walks the object tree depth-first, post-order: for each
//! identifiable child it computes the child's digest, stashes the
//! fully-inlined child form in the object store under that id, and replaces
//! the child slot with the id string. `deref` is the inverse. Because every
//! concrete VRS entity in this workspace nests at most one level deep
//! (`Allele`/`CopyNumberCount`/`CopyNumberChange` → `SequenceLocation`), the
//! recursion bottoms out at a single shared helper pair instead of a general
//! tree walk.

use crate::digest::Identifiable;
use crate::error::{Error, Result};
use crate::model::reference::Ref;
use crate::model::sequence_location::SequenceLocation;
use crate::store::ObjectStore;

fn enref_location(
    loc: &Ref<SequenceLocation>,
    store: &mut dyn ObjectStore,
) -> Result<Ref<SequenceLocation>> {
    match loc {
        Ref::Referenced(id) => Ok(Ref::Referenced(id.clone())),
        Ref::Inlined(boxed) => {
            let digest = boxed.digest()?;
            let id = format!("ga4gh:{}.{}", SequenceLocation::TYPE_PREFIX, digest);
            let mut stored = boxed.as_ref().clone();
            stored.digest = Some(digest);
            stored.id = Some(id.clone());
            let value = serde_json::to_value(&stored)
                .map_err(|e| Error::Serialization(e.to_string()))?;
            store.put(id.clone(), value);
            Ok(Ref::Referenced(id))
        }
    }
}

fn deref_location(
    loc: &Ref<SequenceLocation>,
    store: &dyn ObjectStore,
) -> Result<Ref<SequenceLocation>> {
    match loc {
        Ref::Inlined(boxed) => Ok(Ref::Inlined(boxed.clone())),
        Ref::Referenced(id) => {
            let value = store
                .get(id)
                .ok_or_else(|| Error::UnknownReference(id.clone()))?;
            let sl: SequenceLocation =
                serde_json::from_value(value).map_err(|e| Error::Serialization(e.to_string()))?;
            Ok(Ref::Inlined(Box::new(sl)))
        }
    }
}

/// Generates `enref`/`deref` inherent methods for a top-level identifiable
/// type whose only child slot is `location: Ref<SequenceLocation>`.
macro_rules! impl_enref_deref {
    ($t:ty) => {
        impl $t {
            /// Replace the inlined `location` with a reference, storing the
            /// (now fully-referenced) child and this object itself.
            pub fn enref(&self, store: &mut dyn ObjectStore) -> Result<Self> {
                let mut out = self.clone();
                out.location = enref_location(&self.location, store)?;
                let digest = out.digest()?;
                let id = format!("ga4gh:{}.{}", <Self as Identifiable>::TYPE_PREFIX, digest);
                out.digest = Some(digest);
                out.id = Some(id.clone());
                let value = serde_json::to_value(&out)
                    .map_err(|e| Error::Serialization(e.to_string()))?;
                store.put(id, value);
                Ok(out)
            }

            /// Replace a referenced `location` with its inlined form, looked
            /// up from the object store.
            pub fn deref(&self, store: &dyn ObjectStore) -> Result<Self> {
                let mut out = self.clone();
                out.location = deref_location(&self.location, store)?;
                Ok(out)
            }
        }
    };
}

impl_enref_deref!(crate::model::allele::Allele);
impl_enref_deref!(crate::model::copy_number::CopyNumberCount);
impl_enref_deref!(crate::model::copy_number::CopyNumberChange);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Allele, AlleleState, SequenceLocation, SequenceReference};
    use crate::store::InMemoryObjectStore;

    fn sample_allele() -> Allele {
        Allele::new(
            SequenceLocation::new(
                SequenceReference::new("SQ.F-LrLnMKIjgbR1HECnsl_VGjXfs3QHDE"),
                55181319u64,
                55181320u64,
            ),
            AlleleState::LiteralSequenceExpression {
                sequence: "T".to_string(),
            },
        )
    }

    #[test]
    fn enref_then_deref_preserves_identifier() {
        let allele = sample_allele();
        let original_id = allele.identifier().unwrap();

        let mut store = InMemoryObjectStore::new();
        let referenced = allele.enref(&mut store).unwrap();
        assert!(referenced.location.as_referenced().is_some());
        assert_eq!(referenced.id.as_deref(), Some(original_id.as_str()));

        let inlined = referenced.deref(&store).unwrap();
        assert!(inlined.location.as_inlined().is_some());
        assert_eq!(inlined.identifier().unwrap(), original_id);
    }

    #[test]
    fn deref_of_unknown_reference_fails() {
        let allele = Allele::new(
            Ref::referenced("ga4gh:SL.notfoundnotfoundnotfoundnotfoundnot"),
            AlleleState::LiteralSequenceExpression {
                sequence: "T".to_string(),
            },
        );
        let store = InMemoryObjectStore::new();
        let err = allele.deref(&store).unwrap_err();
        assert!(matches!(err, Error::UnknownReference(_)));
    }

    #[test]
    fn enref_stores_both_child_and_parent() {
        let allele = sample_allele();
        let mut store = InMemoryObjectStore::new();
        let referenced = allele.enref(&mut store).unwrap();
        assert!(store.get(&referenced.id.clone().unwrap()).is_some());
        let location_id = referenced.location.as_referenced().unwrap();
        assert!(store.get(location_id).is_some());
    }
}
