//! # Fully-justified allele normalization (§4.4)
//!
//! Normalizes an `Allele` against its `SequenceRepository`-resolved
//! reference: trims the common prefix/suffix between reference and
//! alternate residues, then rolls the remaining edit across any
//! surrounding tandem-repeat context so the same biological variant always
//! normalizes to the same `(start, end, state)` no matter how it arrived
//! (VCF left-alignment, 3' shifted HGVS, etc. — §3 invariant 4, §8
//! property 2).
//!
//! Grounded on `gtars-vrs`'s `normalize` module (trim + roll), extended to
//! read residues through a [`SequenceRepository`] instead of an in-memory
//! chromosome, and to emit a `ReferenceLengthExpression` when the rolled
//! span is an exact multiple of a repeat unit of length >= 2 (§4.4.1 step
//! 4, §9 Open Question (b)).

pub mod algorithm;
pub mod error;

use vrs_core::model::{AlleleState, Number};
use vrs_core::Allele;
use vrs_seqrepo::alphabet::validates_alphabet;
use vrs_seqrepo::SequenceRepository;

pub use algorithm::{normalize as normalize_bytes, NormalizedSpan};
pub use error::{NormalizeError, Result};

/// Residues of the would-be alternate allele, read off of an `Allele`'s
/// current state.
///
/// A `ReferenceLengthExpression` only yields residues when it already
/// carries a decompressed `sequence` (Open Question (b)): without the
/// original repeat unit's content there is no way to faithfully re-expand
/// it, so such an allele is returned unchanged by [`normalize_allele`]
/// rather than guessed at.
fn literal_alt(state: &AlleleState) -> Option<&str> {
    match state {
        AlleleState::LiteralSequenceExpression { sequence } => Some(sequence),
        AlleleState::ReferenceLengthExpression { sequence: Some(seq), .. } => Some(seq),
        AlleleState::ReferenceLengthExpression { sequence: None, .. } => None,
        AlleleState::LengthExpression { .. } => None,
    }
}

/// Normalize `allele` against the residues served by `repo`.
///
/// Returns a clone of `allele` unchanged when:
/// - its location has range-valued (uncertain) bounds (Open Question (a));
/// - its state carries no literal residues to compare against the
///   reference (a bare `LengthExpression`, or an undecompressed
///   `ReferenceLengthExpression`).
///
/// Otherwise returns a new `Allele` with rolled `start`/`end` and a state
/// re-derived from the rolled residues: a `ReferenceLengthExpression` when
/// the rolled span is an exact positive multiple of a >=2-residue repeat
/// unit, a `LiteralSequenceExpression` otherwise.
pub fn normalize_allele(allele: &Allele, repo: &dyn SequenceRepository) -> Result<Allele> {
    let location = allele
        .location
        .as_inlined()
        .ok_or(NormalizeError::ReferencedLocation)?;

    if !location.is_definite() {
        return Ok(allele.clone());
    }

    let Some(alt) = literal_alt(&allele.state) else {
        return Ok(allele.clone());
    };

    let start = location.start.as_definite().expect("checked is_definite above");
    let end = location.end.as_definite().expect("checked is_definite above");

    let accession = &location.sequence_reference.refget_accession;
    let metadata = repo.get_metadata(accession)?;

    let reference = repo.get_sequence(accession, Some(0), Some(metadata.length as u64))?;
    let ref_allele = reference
        .get(start as usize..end as usize)
        .ok_or(NormalizeError::RefAllelePastEnd {
            start: start as usize,
            ref_len: (end - start) as usize,
            seq_len: metadata.length,
        })?;

    if !validates_alphabet(ref_allele, metadata.alphabet) || !validates_alphabet(alt, metadata.alphabet) {
        return Err(NormalizeError::InvalidAlphabet(format!(
            "residues outside the {:?} alphabet of {accession}",
            metadata.alphabet
        )));
    }

    let span = algorithm::normalize(
        reference.as_bytes(),
        start,
        ref_allele.as_bytes(),
        alt.as_bytes(),
        metadata.circular,
    )?;

    let new_alt = String::from_utf8(span.alt).expect("reference and alt residues are ASCII");

    let state = match span.repeat_unit_len {
        Some(unit_len) if unit_len >= 2 && !new_alt.is_empty() && new_alt.len() % unit_len == 0 => {
            AlleleState::ReferenceLengthExpression {
                length: new_alt.len() as u64,
                repeat_subunit_length: unit_len as u64,
                sequence: Some(new_alt),
            }
        }
        _ => AlleleState::LiteralSequenceExpression { sequence: new_alt },
    };

    let mut new_location = location.clone();
    new_location.start = Number::Definite(span.start);
    new_location.end = Number::Definite(span.end);
    new_location.id = None;
    new_location.digest = None;

    let mut normalized = Allele::new(new_location, state);
    normalized.id = None;
    normalized.digest = None;
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrs_core::model::SequenceReference;
    use vrs_core::model::SequenceLocation;
    use vrs_seqrepo::InMemorySequenceRepository;

    fn repo_with(name: &str, sequence: &str) -> (InMemorySequenceRepository, String) {
        let mut repo = InMemorySequenceRepository::new();
        let accession = repo.add_sequence(name, sequence, None, false);
        (repo, accession)
    }

    fn allele(accession: &str, start: u64, end: u64, sequence: &str) -> Allele {
        let location = SequenceLocation::new(SequenceReference::new(accession), start, end);
        Allele::new(location, AlleleState::LiteralSequenceExpression { sequence: sequence.to_string() })
    }

    #[test]
    fn insertion_rolls_across_a_homopolymer_repeat_but_stays_literal() {
        let (repo, accession) = repo_with("chr1", "TAAAAG");
        let variant = allele(&accession, 1, 2, "AA");
        let normalized = normalize_allele(&variant, &repo).unwrap();
        let loc = normalized.location.as_inlined().unwrap();
        assert_eq!(loc.start.as_definite().unwrap(), 1);
        assert_eq!(loc.end.as_definite().unwrap(), 5);
        assert_eq!(
            normalized.state,
            AlleleState::LiteralSequenceExpression { sequence: "AAAAA".to_string() }
        );
    }

    #[test]
    fn snv_normalizes_to_literal_with_no_roll() {
        let (repo, accession) = repo_with("chr1", "ACGTACGT");
        let variant = allele(&accession, 2, 3, "T");
        let normalized = normalize_allele(&variant, &repo).unwrap();
        let loc = normalized.location.as_inlined().unwrap();
        assert_eq!(loc.start.as_definite().unwrap(), 2);
        assert_eq!(loc.end.as_definite().unwrap(), 3);
        assert_eq!(
            normalized.state,
            AlleleState::LiteralSequenceExpression { sequence: "T".to_string() }
        );
    }

    #[test]
    fn range_valued_location_is_left_untouched() {
        let (repo, accession) = repo_with("chr1", "ACGTACGT");
        let location = SequenceLocation::new(SequenceReference::new(&accession), Number::Range(2, 4), Number::Definite(3));
        let variant = Allele::new(location, AlleleState::LiteralSequenceExpression { sequence: "T".to_string() });
        let normalized = normalize_allele(&variant, &repo).unwrap();
        assert_eq!(normalized, variant);
    }

    #[test]
    fn already_rle_without_sequence_passes_through_unchanged() {
        let (repo, accession) = repo_with("chr1", "TAAAAG");
        let location = SequenceLocation::new(SequenceReference::new(&accession), 1u64, 2u64);
        let variant = Allele::new(
            location,
            AlleleState::ReferenceLengthExpression { length: 2, repeat_subunit_length: 1, sequence: None },
        );
        let normalized = normalize_allele(&variant, &repo).unwrap();
        assert_eq!(normalized, variant);
    }

    #[test]
    fn non_alphabet_residues_are_rejected() {
        let (repo, accession) = repo_with("chr1", "ACGTACGT");
        let variant = allele(&accession, 2, 3, "Z");
        assert!(normalize_allele(&variant, &repo).is_err());
    }

    #[test]
    fn referenced_location_cannot_be_normalized_directly() {
        use vrs_core::model::Ref;
        let variant = Allele {
            location: Ref::referenced("ga4gh:SL.abc"),
            state: AlleleState::LiteralSequenceExpression { sequence: "A".to_string() },
            id: None,
            digest: None,
        };
        assert!(matches!(normalize_allele(&variant, &InMemorySequenceRepository::new()), Err(NormalizeError::ReferencedLocation)));
    }
}
