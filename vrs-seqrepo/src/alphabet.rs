//! Residue alphabet detection, grounded on the teacher's
//! `gtars_refget::alphabet` (simplified: we only need to classify DNA vs RNA
//! vs protein for §3 invariant 2, not bit-pack for storage).

use vrs_core::ResidueAlphabet;

/// Guesses a sequence's alphabet incrementally from its residues, upgrading
/// the guess monotonically as more general characters are seen (mirrors
/// `gtars_refget::alphabet::AlphabetGuesser`).
pub struct AlphabetGuesser {
    seen_u: bool,
    seen_t: bool,
    seen_non_na: bool,
}

impl Default for AlphabetGuesser {
    fn default() -> Self {
        Self {
            seen_u: false,
            seen_t: false,
            seen_non_na: false,
        }
    }
}

impl AlphabetGuesser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, sequence: &[u8]) {
        for &byte in sequence {
            match byte.to_ascii_uppercase() {
                b'A' | b'C' | b'G' | b'N' => {}
                b'U' => self.seen_u = true,
                b'T' => self.seen_t = true,
                _ => self.seen_non_na = true,
            }
        }
    }

    pub fn guess(&self) -> ResidueAlphabet {
        if self.seen_non_na {
            ResidueAlphabet::Aa
        } else if self.seen_u && !self.seen_t {
            ResidueAlphabet::Rna
        } else {
            ResidueAlphabet::Dna
        }
    }
}

/// `true` if every residue in `sequence` belongs to `alphabet` (§3 invariant
/// 2: a `LiteralSequenceExpression`'s sequence must consist entirely of
/// residues from its enclosing location's reference alphabet).
pub fn validates_alphabet(sequence: &str, alphabet: ResidueAlphabet) -> bool {
    sequence.bytes().all(|b| match alphabet {
        ResidueAlphabet::Dna => matches!(b.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T' | b'N'),
        ResidueAlphabet::Rna => matches!(b.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'U' | b'N'),
        ResidueAlphabet::Aa => b.is_ascii_alphabetic() || b == b'*',
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_dna_by_default() {
        let mut g = AlphabetGuesser::new();
        g.update(b"ACGTN");
        assert_eq!(g.guess(), ResidueAlphabet::Dna);
    }

    #[test]
    fn upgrades_to_rna_on_u() {
        let mut g = AlphabetGuesser::new();
        g.update(b"ACGU");
        assert_eq!(g.guess(), ResidueAlphabet::Rna);
    }

    #[test]
    fn upgrades_to_protein_on_non_na_residue() {
        let mut g = AlphabetGuesser::new();
        g.update(b"ACDEFGHIK");
        assert_eq!(g.guess(), ResidueAlphabet::Aa);
    }

    #[test]
    fn validates_dna_alphabet() {
        assert!(validates_alphabet("ACGTN", ResidueAlphabet::Dna));
        assert!(!validates_alphabet("ACGU", ResidueAlphabet::Dna));
    }
}
