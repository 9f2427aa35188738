//! Minimal FASTA reader, grounded on `gtars_refget::fasta`'s streaming,
//! auto-decompressing line reader (simplified: no FAI offsets, no bit
//! packing — this crate only needs whole-sequence bytes and a name).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::Result;

/// One parsed FASTA record: header name, optional description, and residues
/// with interior whitespace removed.
pub struct FastaRecord {
    pub name: String,
    pub description: Option<String>,
    pub sequence: String,
}

fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Parse every record out of a (optionally gzipped) FASTA file.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<FastaRecord>> {
    let reader = open_reader(path)?;
    parse_fasta_reader(reader)
}

fn parse_fasta_reader(reader: impl BufRead) -> Result<Vec<FastaRecord>> {
    let mut records = Vec::new();
    let mut current_name: Option<String> = None;
    let mut current_description: Option<String> = None;
    let mut current_seq = String::new();

    for line in reader.lines() {
        let line = line?;
        if let Some(header) = line.strip_prefix('>') {
            if let Some(name) = current_name.take() {
                records.push(FastaRecord {
                    name,
                    description: current_description.take(),
                    sequence: std::mem::take(&mut current_seq),
                });
            }
            let mut parts = header.splitn(2, char::is_whitespace);
            current_name = parts.next().map(|s| s.to_string());
            current_description = parts.next().map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        } else {
            current_seq.push_str(line.trim_end());
        }
    }
    if let Some(name) = current_name.take() {
        records.push(FastaRecord {
            name,
            description: current_description.take(),
            sequence: current_seq,
        });
    }
    Ok(records)
}

/// Parse FASTA content already held in memory (used by tests and WASM-style
/// callers without filesystem access).
pub fn parse_fasta_bytes(data: &[u8]) -> Result<Vec<FastaRecord>> {
    parse_fasta_reader(std::io::Cursor::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_record() {
        let data = b">chr1 a test chromosome\nACGT\nACGT\n";
        let records = parse_fasta_bytes(data).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "chr1");
        assert_eq!(records[0].description.as_deref(), Some("a test chromosome"));
        assert_eq!(records[0].sequence, "ACGTACGT");
    }

    #[test]
    fn parses_multiple_records() {
        let data = b">a\nACGT\n>b\nTTTT\n";
        let records = parse_fasta_bytes(data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "b");
        assert_eq!(records[1].sequence, "TTTT");
    }
}
