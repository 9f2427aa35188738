//! The `translate_from`/`translate_to` pipeline (§4.5).
//!
//! `translate_from`: parse → resolve `reference_accession` to a refget
//! accession → build a raw `Allele` → normalize (if enabled) → assign
//! identifiers bottom-up (if enabled). `translate_to` is the inverse,
//! returning every equivalent expression for formats with more than one
//! alias (HGVS); SPDI/gnomAD/Beacon always return exactly one.

use vrs_core::digest::Identifiable;
use vrs_core::model::{Allele, AlleleState, CopyChange, CopyNumberChange, Ref, SequenceLocation, SequenceReference};
use vrs_seqrepo::SequenceRepository;

use crate::ast::{GenomicVariant, NaEdit, SimpleInterval};
use crate::beacon::{format_beacon, parse_beacon};
use crate::error::{Error, Result};
use crate::gnomad::{format_gnomad, parse_gnomad};
use crate::hgvs::{format_genomic_hgvs, parse_genomic_hgvs};
use crate::spdi::{format_spdi, parse_spdi};

/// The four external grammars §4.5 names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Hgvs,
    Spdi,
    Gnomad,
    Beacon,
}

/// A raw `(accession, start, end, reference_allele, alternate_allele)`
/// tuple, interbase-coordinated, after a format-specific parse.
struct RawVariant {
    accession: String,
    start: u64,
    end: u64,
    reference_allele: Option<String>,
    alternate_allele: String,
}

/// A format translator bound to one `SequenceRepository` (§4.5: "all
/// translators share a `SequenceRepository` handle, a configured default
/// assembly, a `normalize` flag, and an `identify` flag").
pub struct Translator<'a> {
    repo: &'a dyn SequenceRepository,
    assembly: String,
    normalize: bool,
    identify: bool,
    require_validation: bool,
}

impl<'a> Translator<'a> {
    pub fn new(repo: &'a dyn SequenceRepository) -> Self {
        Self { repo, assembly: "GRCh38".to_string(), normalize: true, identify: true, require_validation: true }
    }

    pub fn with_assembly(mut self, assembly: impl Into<String>) -> Self {
        self.assembly = assembly.into();
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_identify(mut self, identify: bool) -> Self {
        self.identify = identify;
        self
    }

    /// Whether a literal reference allele parsed from the input expression
    /// must match the repository's residues at that location. The
    /// repository's own residues are always fetched for normalization
    /// regardless of this setting; this only controls the hard-error check.
    pub fn with_require_validation(mut self, require_validation: bool) -> Self {
        self.require_validation = require_validation;
        self
    }

    fn raw_from_hgvs(&self, variant: GenomicVariant) -> Result<RawVariant> {
        let GenomicVariant { accession, interval, edit } = variant;
        let raw = match edit {
            NaEdit::Sub { reference, alternate } => RawVariant {
                accession,
                start: interval.start - 1,
                end: interval.end,
                reference_allele: Some(reference),
                alternate_allele: alternate,
            },
            NaEdit::Del { deleted } => RawVariant {
                accession,
                start: interval.start - 1,
                end: interval.end,
                reference_allele: deleted,
                alternate_allele: String::new(),
            },
            NaEdit::Ins { inserted } => RawVariant {
                accession,
                start: interval.start,
                end: interval.start,
                reference_allele: Some(String::new()),
                alternate_allele: inserted,
            },
            NaEdit::Delins { deleted, inserted } => RawVariant {
                accession,
                start: interval.start - 1,
                end: interval.end,
                reference_allele: deleted,
                alternate_allele: inserted,
            },
            NaEdit::Dup { duplicated } => {
                let refget_accession = self.repo.derive_refget_accession(&accession)?;
                let span = match duplicated {
                    Some(seq) => seq,
                    None => self.repo.get_sequence(&refget_accession, Some(interval.start - 1), Some(interval.end))?,
                };
                RawVariant {
                    accession,
                    start: interval.end,
                    end: interval.end,
                    reference_allele: Some(String::new()),
                    alternate_allele: span,
                }
            }
        };
        Ok(raw)
    }

    fn build_allele(&self, raw: RawVariant) -> Result<Allele> {
        let refget_accession = self.repo.derive_refget_accession(&raw.accession)?;

        if self.require_validation {
            if let Some(expected) = &raw.reference_allele {
                if !expected.is_empty() {
                    let actual = self.repo.get_sequence(&refget_accession, Some(raw.start), Some(raw.end))?;
                    if &actual != expected {
                        return Err(Error::ReferenceMismatch(format!(
                            "expected {expected:?} at {refget_accession}:{}-{}, found {actual:?}",
                            raw.start, raw.end
                        )));
                    }
                }
            }
        }

        let metadata = self.repo.get_metadata(&refget_accession)?;
        let sequence_reference = SequenceReference {
            refget_accession,
            residue_alphabet: Some(metadata.alphabet),
            circular: Some(metadata.circular),
            label: None,
            alternative_labels: None,
            description: None,
        };
        let location = SequenceLocation::new(sequence_reference, raw.start, raw.end);
        let state = AlleleState::LiteralSequenceExpression { sequence: raw.alternate_allele };
        let allele = Allele::new(location, state);

        let mut allele = if self.normalize { vrs_normalize::normalize_allele(&allele, self.repo)? } else { allele };

        if self.identify {
            self.stamp_identifiers(&mut allele)?;
        }
        Ok(allele)
    }

    fn stamp_identifiers(&self, allele: &mut Allele) -> Result<()> {
        if let Ref::Inlined(location) = &mut allele.location {
            let digest = location.digest()?;
            location.id = Some(format!("ga4gh:{}.{}", SequenceLocation::TYPE_PREFIX, digest));
            location.digest = Some(digest);
        }
        let digest = allele.digest()?;
        allele.id = Some(format!("ga4gh:{}.{}", Allele::TYPE_PREFIX, digest));
        allele.digest = Some(digest);
        Ok(())
    }

    /// Parse `expr` under `format`, resolve it against the repository, and
    /// return a (optionally normalized, optionally identified) `Allele`.
    pub fn translate_from(&self, expr: &str, format: Format) -> Result<Allele> {
        let raw = match format {
            Format::Hgvs => self.raw_from_hgvs(parse_genomic_hgvs(expr)?)?,
            Format::Spdi => {
                let p = parse_spdi(expr)?;
                RawVariant { accession: p.accession, start: p.start, end: p.end, reference_allele: p.deleted, alternate_allele: p.inserted }
            }
            Format::Gnomad => {
                let p = parse_gnomad(expr)?;
                RawVariant {
                    accession: format!("{}:{}", self.assembly, p.chromosome),
                    start: p.start,
                    end: p.end,
                    reference_allele: Some(p.reference_allele),
                    alternate_allele: p.alternate_allele,
                }
            }
            Format::Beacon => {
                let p = parse_beacon(expr)?;
                RawVariant {
                    accession: format!("{}:{}", self.assembly, p.chromosome),
                    start: p.start,
                    end: p.end,
                    reference_allele: Some(p.reference_allele),
                    alternate_allele: p.alternate_allele,
                }
            }
        };
        self.build_allele(raw)
    }

    /// A deleted or duplicated span annotated with a relative copy-number
    /// call (§8 scenario 6: an HGVS deletion plus `copyChange=loss`). The
    /// expression's edit content (if any) is discarded; only its span
    /// and accession matter for a `CopyNumberChange`.
    pub fn translate_copy_number_change(&self, expr: &str, format: Format, copy_change: CopyChange) -> Result<CopyNumberChange> {
        let raw = match format {
            Format::Hgvs => self.raw_from_hgvs(parse_genomic_hgvs(expr)?)?,
            Format::Spdi => {
                let p = parse_spdi(expr)?;
                RawVariant { accession: p.accession, start: p.start, end: p.end, reference_allele: None, alternate_allele: String::new() }
            }
            Format::Gnomad => {
                let p = parse_gnomad(expr)?;
                RawVariant { accession: format!("{}:{}", self.assembly, p.chromosome), start: p.start, end: p.end, reference_allele: None, alternate_allele: String::new() }
            }
            Format::Beacon => {
                let p = parse_beacon(expr)?;
                RawVariant { accession: format!("{}:{}", self.assembly, p.chromosome), start: p.start, end: p.end, reference_allele: None, alternate_allele: String::new() }
            }
        };

        let refget_accession = self.repo.derive_refget_accession(&raw.accession)?;
        let metadata = self.repo.get_metadata(&refget_accession)?;
        let sequence_reference = SequenceReference {
            refget_accession,
            residue_alphabet: Some(metadata.alphabet),
            circular: Some(metadata.circular),
            label: None,
            alternative_labels: None,
            description: None,
        };
        let mut location = SequenceLocation::new(sequence_reference, raw.start, raw.end);
        if self.identify {
            let digest = location.digest()?;
            location.id = Some(format!("ga4gh:{}.{}", SequenceLocation::TYPE_PREFIX, digest));
            location.digest = Some(digest);
        }

        let mut cnx = CopyNumberChange::new(location, copy_change);
        if self.identify {
            let digest = cnx.digest()?;
            cnx.id = Some(format!("ga4gh:{}.{}", CopyNumberChange::TYPE_PREFIX, digest));
            cnx.digest = Some(digest);
        }
        Ok(cnx)
    }

    fn chr_alias(&self, refget_accession: &str) -> Result<String> {
        let aliases = self.repo.translate_identifier(refget_accession, Some(&self.assembly))?;
        aliases
            .into_iter()
            .next()
            .map(|a| a.rsplit(':').next().unwrap_or(&a).to_string())
            .ok_or_else(|| Error::Unrepresentable(format!("no {} alias for {refget_accession}", self.assembly)))
    }

    /// The inverse of `translate_from`. HGVS returns one expression per
    /// alias of the location's accession; the others return exactly one.
    pub fn translate_to(&self, allele: &Allele, format: Format) -> Result<Vec<String>> {
        let location = allele
            .location
            .as_inlined()
            .ok_or_else(|| Error::Unrepresentable("translate_to requires an inlined location".to_string()))?;
        if !location.is_definite() {
            return Err(Error::Unrepresentable("uncertain coordinates have no grammar expression".to_string()));
        }
        let start = location.start.as_definite().expect("checked is_definite above");
        let end = location.end.as_definite().expect("checked is_definite above");
        let alternate_allele = match &allele.state {
            AlleleState::LiteralSequenceExpression { sequence } => sequence.clone(),
            AlleleState::ReferenceLengthExpression { sequence: Some(sequence), .. } => sequence.clone(),
            _ => return Err(Error::Unrepresentable("state has no decompressible sequence".to_string())),
        };
        let refget_accession = &location.sequence_reference.refget_accession;
        let reference_allele = self.repo.get_sequence(refget_accession, Some(start), Some(end))?;

        match format {
            Format::Spdi => Ok(vec![format_spdi(refget_accession, start, &reference_allele, &alternate_allele)]),
            Format::Gnomad => {
                let chr = self.chr_alias(refget_accession)?;
                Ok(vec![format_gnomad(&chr, start + 1, &reference_allele, &alternate_allele)])
            }
            Format::Beacon => {
                let chr = self.chr_alias(refget_accession)?;
                Ok(vec![format_beacon(&chr, start + 1, &reference_allele, &alternate_allele)])
            }
            Format::Hgvs => {
                let edit = if reference_allele.len() == 1 && alternate_allele.len() == 1 {
                    NaEdit::Sub { reference: reference_allele.clone(), alternate: alternate_allele.clone() }
                } else if alternate_allele.is_empty() {
                    NaEdit::Del { deleted: Some(reference_allele.clone()) }
                } else if reference_allele.is_empty() {
                    NaEdit::Ins { inserted: alternate_allele.clone() }
                } else {
                    NaEdit::Delins { deleted: Some(reference_allele.clone()), inserted: alternate_allele.clone() }
                };
                let interval = if reference_allele.is_empty() {
                    SimpleInterval { start, end: start + 1 }
                } else {
                    SimpleInterval { start: start + 1, end }
                };
                let aliases = self.repo.translate_identifier(refget_accession, None)?;
                Ok(aliases
                    .into_iter()
                    .map(|alias| {
                        let accession = alias.rsplit(':').next().unwrap_or(&alias).to_string();
                        format_genomic_hgvs(&GenomicVariant { accession, interval, edit: edit.clone() })
                    })
                    .collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrs_seqrepo::InMemorySequenceRepository;

    fn repo_with_window() -> InMemorySequenceRepository {
        let mut repo = InMemorySequenceRepository::new();
        let accession = repo.add_sequence("NC_000005.10", "ACGTACGTCCCCGT", None, false);
        repo.add_alias("GRCh38", "5", &accession);
        repo
    }

    #[test]
    fn spdi_hgvs_gnomad_beacon_agree_on_the_same_snv() {
        let repo = repo_with_window();
        let t = Translator::new(&repo).with_assembly("GRCh38");

        let from_spdi = t.translate_from("NC_000005.10:3:T:G", Format::Spdi).unwrap();
        let from_hgvs = t.translate_from("NC_000005.10:g.4T>G", Format::Hgvs).unwrap();
        let from_gnomad = t.translate_from("5-4-T-G", Format::Gnomad).unwrap();
        let from_beacon = t.translate_from("5 : 4 T > G", Format::Beacon).unwrap();

        assert_eq!(from_spdi.id, from_hgvs.id);
        assert_eq!(from_spdi.id, from_gnomad.id);
        assert_eq!(from_spdi.id, from_beacon.id);
    }

    #[test]
    fn translate_to_spdi_round_trips() {
        let repo = repo_with_window();
        let t = Translator::new(&repo);
        let allele = t.translate_from("NC_000005.10:3:T:G", Format::Spdi).unwrap();
        let back = t.translate_to(&allele, Format::Spdi).unwrap();
        assert_eq!(back.len(), 1);
        let reparsed = t.translate_from(&back[0], Format::Spdi).unwrap();
        assert_eq!(reparsed.id, allele.id);
    }

    #[test]
    fn translate_to_hgvs_lists_every_alias() {
        let repo = repo_with_window();
        let t = Translator::new(&repo);
        let allele = t.translate_from("NC_000005.10:3:T:G", Format::Spdi).unwrap();
        let expressions = t.translate_to(&allele, Format::Hgvs).unwrap();
        assert!(expressions.iter().any(|e| e.starts_with("NC_000005.10:g.")));
    }

    #[test]
    fn reference_mismatch_is_rejected() {
        let repo = repo_with_window();
        let t = Translator::new(&repo);
        assert!(matches!(t.translate_from("NC_000005.10:3:A:G", Format::Spdi), Err(Error::ReferenceMismatch(_))));
    }

    #[test]
    fn reference_mismatch_is_tolerated_when_validation_is_disabled() {
        let repo = repo_with_window();
        let t = Translator::new(&repo).with_require_validation(false);
        let allele = t.translate_from("NC_000005.10:3:A:G", Format::Spdi).unwrap();
        match &allele.state {
            AlleleState::LiteralSequenceExpression { sequence } => assert_eq!(sequence, "G"),
            other => panic!("expected a literal G, got {other:?}"),
        }
    }

    #[test]
    fn hgvs_deletion_translates_to_a_copy_number_change() {
        let repo = repo_with_window();
        let t = Translator::new(&repo);
        let cnx = t
            .translate_copy_number_change("NC_000005.10:g.1_10del", Format::Hgvs, vrs_core::CopyChange::Loss)
            .unwrap();
        assert!(cnx.id.as_deref().unwrap().starts_with("ga4gh:CX."));
        assert_eq!(cnx.copy_change, vrs_core::CopyChange::Loss);
    }

    #[test]
    fn deletion_across_a_homopolymer_repeat_stays_literal() {
        let mut repo = InMemorySequenceRepository::new();
        repo.add_sequence("NC_TEST", "TAAAAG", None, false);
        let t = Translator::new(&repo);
        let allele = t.translate_from("NC_TEST:1:A:AA", Format::Spdi).unwrap();
        match &allele.state {
            AlleleState::LiteralSequenceExpression { sequence } => assert_eq!(sequence, "AAAAA"),
            other => panic!("expected LiteralSequenceExpression, got {other:?}"),
        }
    }
}
