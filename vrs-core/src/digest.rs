//! Canonical serializer & digest contract (§4.1).
//!
//! `identify(o)` = `ga4gh:<TypePrefix>.<sha512t24u(canonical_json(o))>`.
//! Identifier assignment is strictly bottom-up (§5): a parent's digest
//! cannot be computed until every identifiable child's digest is known,
//! which `resolve_ref_digest` enforces by recursing into inlined children.
//!
//! A nested identifiable child contributes its **bare digest** to the
//! parent's canonical form, not its `ga4gh:`-prefixed identifier (matching
//! the teacher's `gtars_vrs::digest::allele_digest`, which inlines
//! `"location": sl_digest` — the un-prefixed `sha512t24u` value).

use crate::canonical::{canonicalize_json, sha512t24u};
use crate::error::{Error, Result};
use crate::model::reference::Ref;

/// An entity whose identifier is the truncated-base64url digest of its
/// canonical serialization (§3's "Identifiable" entities).
pub trait Identifiable {
    /// The two-letter GA4GH type prefix, e.g. `"VA"` for Allele.
    const TYPE_PREFIX: &'static str;

    /// The digest-contributing canonical JSON form of this object: the
    /// type-discriminant plus intrinsic content fields only, with nested
    /// identifiable children already resolved to `ga4gh:`-prefixed id
    /// strings and nested non-identifiable children inlined recursively.
    fn canonical_json(&self) -> Result<serde_json::Value>;

    /// The 32-character `sha512t24u` digest of this object's canonical form.
    fn digest(&self) -> Result<String> {
        let json = self.canonical_json()?;
        Ok(sha512t24u(canonicalize_json(&json).as_bytes()))
    }

    /// The full `ga4gh:<Prefix>.<digest>` identifier.
    fn identifier(&self) -> Result<String> {
        Ok(format!("ga4gh:{}.{}", Self::TYPE_PREFIX, self.digest()?))
    }
}

/// Resolve a `Ref<T>` slot to the **bare digest** (no `ga4gh:<prefix>.`
/// prefix) that a parent's canonical form embeds for this child,
/// computing it if the child is inlined.
///
/// Fails with `Error::Serialization` if a `Referenced` slot holds a string
/// that isn't a well-formed identifier for `T`'s type prefix (§4.1 error
/// conditions: "lacks both inlined content and a valid reference").
pub fn resolve_ref_digest<T: Identifiable>(r: &Ref<T>) -> Result<String> {
    match r {
        Ref::Inlined(v) => v.digest(),
        Ref::Referenced(id) => {
            let want = format!("ga4gh:{}.", T::TYPE_PREFIX);
            match id.strip_prefix(&want) {
                Some(digest) if is_well_formed_id(id, T::TYPE_PREFIX) => Ok(digest.to_string()),
                _ => Err(Error::Serialization(format!(
                    "reference slot holds a malformed {} identifier: {:?}",
                    T::TYPE_PREFIX,
                    id
                ))),
            }
        }
    }
}

/// `true` if `id` looks like `ga4gh:<prefix>.<32 base64url chars>`.
pub fn is_well_formed_id(id: &str, prefix: &str) -> bool {
    let want = format!("ga4gh:{prefix}.");
    match id.strip_prefix(&want) {
        Some(digest) => {
            digest.len() == 32
                && digest
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_id_check() {
        assert!(is_well_formed_id(
            "ga4gh:VA.ebezGL6HoAhtGJyVnB_mE5BH18ntKev4",
            "VA"
        ));
        assert!(!is_well_formed_id("ga4gh:SL.too_short", "SL"));
        assert!(!is_well_formed_id(
            "ga4gh:CN.ebezGL6HoAhtGJyVnB_mE5BH18ntKev4",
            "VA"
        ));
    }
}
