//! The `SequenceRepository` collaborator (§6.1): residue access, sequence
//! metadata, and alias translation across namespaces.

use std::collections::HashMap;
use std::path::Path;

use vrs_core::ResidueAlphabet;
use vrs_core::canonical::sha512t24u;

use crate::alphabet::AlphabetGuesser;
use crate::error::{Error, Result};
use crate::fasta::parse_fasta_file;

/// Metadata about a sequence, keyed by refget accession.
#[derive(Debug, Clone)]
pub struct SequenceMetadata {
    pub aliases: Vec<String>,
    pub alphabet: ResidueAlphabet,
    pub length: usize,
    pub circular: bool,
}

/// The required collaborator (§6.1). Implementations resolve aliases across
/// namespaces (RefSeq, GRCh38, `ga4gh:SQ.…`) and serve residues over
/// half-open intervals.
pub trait SequenceRepository {
    /// Residues of `accession` over `[start, end)`. `None`/`None` returns the
    /// whole sequence.
    fn get_sequence(&self, accession: &str, start: Option<u64>, end: Option<u64>) -> Result<String>;

    fn get_metadata(&self, accession: &str) -> Result<SequenceMetadata>;

    /// Map any known alias to every alias sharing its identity, optionally
    /// filtered to `target_namespace` (e.g. `"refget"`, `"GRCh38"`, `"refseq"`).
    fn translate_identifier(&self, identifier: &str, target_namespace: Option<&str>) -> Result<Vec<String>>;

    /// Shortcut to the canonical `SQ.…` refget accession for any alias.
    fn derive_refget_accession(&self, identifier: &str) -> Result<String> {
        self.translate_identifier(identifier, Some("refget"))?
            .into_iter()
            .next()
            .ok_or_else(|| Error::UnknownReference(identifier.to_string()))
    }
}

struct SequenceEntry {
    sequence: String,
    alphabet: ResidueAlphabet,
    circular: bool,
}

/// A `SequenceRepository` backed by sequences held fully in memory, indexed
/// by refget accession with an alias table for lookup by any namespaced
/// identifier. Grounded on `gtars_refget::store::RefgetStore::in_memory()`
/// plus its `AliasManager`, simplified to skip on-disk persistence and
/// bit-packed encoding (this crate only ever needs whole-sequence UTF-8
/// residues, not a production-scale genome store).
#[derive(Default)]
pub struct InMemorySequenceRepository {
    sequences: HashMap<String, SequenceEntry>,
    /// namespace -> (alias -> refget accession)
    aliases: HashMap<String, HashMap<String, String>>,
}

impl InMemorySequenceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sequence directly, returning its derived refget accession.
    /// `namespace` (e.g. `"GRCh38"`) is used to register `name` as an alias;
    /// pass `None` to skip alias registration.
    pub fn add_sequence(
        &mut self,
        name: &str,
        sequence: &str,
        namespace: Option<&str>,
        circular: bool,
    ) -> String {
        let normalized = sequence.to_ascii_uppercase();
        let accession = format!("SQ.{}", sha512t24u(normalized.as_bytes()));

        let mut guesser = AlphabetGuesser::new();
        guesser.update(normalized.as_bytes());

        self.sequences.insert(
            accession.clone(),
            SequenceEntry {
                sequence: normalized,
                alphabet: guesser.guess(),
                circular,
            },
        );

        self.add_alias("refget", &accession, &accession);
        self.add_alias("refget", name, &accession);
        if let Some(ns) = namespace {
            self.add_alias(ns, name, &accession);
        }
        accession
    }

    pub fn add_alias(&mut self, namespace: &str, alias: &str, accession: &str) {
        self.aliases
            .entry(namespace.to_string())
            .or_default()
            .insert(alias.to_string(), accession.to_string());
    }

    /// Load every record of a FASTA file (optionally gzipped), registering
    /// each record's header name as an alias under `namespace`.
    pub fn load_fasta(&mut self, path: impl AsRef<Path>, namespace: &str) -> Result<Vec<String>> {
        let records = parse_fasta_file(path.as_ref())?;
        let mut accessions = Vec::with_capacity(records.len());
        for record in records {
            let accession = self.add_sequence(&record.name, &record.sequence, Some(namespace), false);
            accessions.push(accession);
        }
        Ok(accessions)
    }

    fn resolve(&self, identifier: &str) -> Option<&str> {
        if self.sequences.contains_key(identifier) {
            return Some(identifier);
        }
        let identifier = identifier.strip_prefix("ga4gh:").unwrap_or(identifier);
        if self.sequences.contains_key(identifier) {
            return Some(identifier);
        }
        // Namespaced alias such as "refseq:NC_000005.10" or bare "NC_000005.10".
        let (ns, alias) = match identifier.split_once(':') {
            Some((ns, alias)) => (Some(ns), alias),
            None => (None, identifier),
        };
        for (namespace, table) in &self.aliases {
            if ns.is_some_and(|n| !n.eq_ignore_ascii_case(namespace)) {
                continue;
            }
            if let Some(accession) = table.get(alias) {
                return Some(accession.as_str());
            }
        }
        None
    }
}

impl SequenceRepository for InMemorySequenceRepository {
    fn get_sequence(&self, accession: &str, start: Option<u64>, end: Option<u64>) -> Result<String> {
        let accession = self
            .resolve(accession)
            .ok_or_else(|| Error::UnknownReference(accession.to_string()))?;
        let entry = &self.sequences[accession];
        let len = entry.sequence.len() as u64;
        let start = start.unwrap_or(0);
        let end = end.unwrap_or(len);
        if start > end || end > len {
            return Err(Error::UnknownReference(format!(
                "interval [{start}, {end}) out of bounds for sequence of length {len}"
            )));
        }
        Ok(entry.sequence[start as usize..end as usize].to_string())
    }

    fn get_metadata(&self, accession: &str) -> Result<SequenceMetadata> {
        let resolved = self
            .resolve(accession)
            .ok_or_else(|| Error::UnknownReference(accession.to_string()))?
            .to_string();
        let entry = &self.sequences[&resolved];
        let aliases = self
            .aliases
            .values()
            .flat_map(|table| {
                table
                    .iter()
                    .filter(|(_, v)| v.as_str() == resolved)
                    .map(|(k, _)| k.clone())
            })
            .collect();
        Ok(SequenceMetadata {
            aliases,
            alphabet: entry.alphabet,
            length: entry.sequence.len(),
            circular: entry.circular,
        })
    }

    fn translate_identifier(&self, identifier: &str, target_namespace: Option<&str>) -> Result<Vec<String>> {
        let accession = self
            .resolve(identifier)
            .ok_or_else(|| Error::UnknownReference(identifier.to_string()))?
            .to_string();

        if target_namespace == Some("refget") {
            return Ok(vec![format!("ga4gh:{accession}")]);
        }

        let mut out = Vec::new();
        for (namespace, table) in &self.aliases {
            if let Some(ns) = target_namespace {
                if !ns.eq_ignore_ascii_case(namespace) {
                    continue;
                }
            }
            for (alias, acc) in table {
                if acc == &accession && namespace != "refget" {
                    out.push(format!("{namespace}:{alias}"));
                }
            }
        }
        if out.is_empty() {
            out.push(format!("ga4gh:{accession}"));
        }
        out.sort();
        Ok(out)
    }
}
