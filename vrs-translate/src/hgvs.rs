//! Minimal genomic HGVS (`g.`) lexer/formatter covering the nucleic-acid
//! edit forms §4.5's translator table lists: substitution, deletion,
//! insertion, delins, duplication. See [`crate::ast`] for the scope this
//! deliberately excludes.

use crate::ast::{GenomicVariant, NaEdit, SimpleInterval};
use crate::error::{Error, Result};

const FORMAT: &str = "HGVS";

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidInput { format: FORMAT, message: message.into() }
}

fn take_digits(s: &str) -> Option<(u64, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse::<u64>().ok().map(|n| (n, &s[end..]))
}

pub fn parse_genomic_hgvs(expr: &str) -> Result<GenomicVariant> {
    let (accession, rest) = expr
        .split_once(":g.")
        .ok_or_else(|| invalid(format!("missing ':g.' in {expr:?}")))?;
    if accession.is_empty() {
        return Err(invalid("empty accession"));
    }

    let (start, rest) = take_digits(rest).ok_or_else(|| invalid("expected a start position"))?;
    let (end, rest) = match rest.strip_prefix('_') {
        Some(after_underscore) => {
            let (end, rest) = take_digits(after_underscore).ok_or_else(|| invalid("expected an end position after '_'"))?;
            (end, rest)
        }
        None => (start, rest),
    };
    if end < start {
        return Err(invalid(format!("end {end} precedes start {start}")));
    }
    let interval = SimpleInterval { start, end };

    let edit = if let Some(idx) = rest.find('>') {
        let reference = rest[..idx].to_string();
        let alternate = rest[idx + 1..].to_string();
        if reference.is_empty() || alternate.is_empty() {
            return Err(invalid("substitution requires both a reference and alternate residue"));
        }
        NaEdit::Sub { reference, alternate }
    } else if let Some(tail) = rest.strip_prefix("delins") {
        if tail.is_empty() {
            return Err(invalid("delins requires an inserted sequence"));
        }
        NaEdit::Delins { deleted: None, inserted: tail.to_string() }
    } else if let Some(tail) = rest.strip_prefix("del") {
        NaEdit::Del { deleted: if tail.is_empty() { None } else { Some(tail.to_string()) } }
    } else if let Some(tail) = rest.strip_prefix("ins") {
        if tail.is_empty() {
            return Err(invalid("insertion requires an inserted sequence"));
        }
        NaEdit::Ins { inserted: tail.to_string() }
    } else if let Some(tail) = rest.strip_prefix("dup") {
        NaEdit::Dup { duplicated: if tail.is_empty() { None } else { Some(tail.to_string()) } }
    } else {
        return Err(invalid(format!("unrecognized edit {rest:?}")));
    };

    Ok(GenomicVariant { accession: accession.to_string(), interval, edit })
}

pub fn format_genomic_hgvs(variant: &GenomicVariant) -> String {
    let GenomicVariant { accession, interval, edit } = variant;
    let pos = if interval.start == interval.end {
        interval.start.to_string()
    } else {
        format!("{}_{}", interval.start, interval.end)
    };
    let edit_str = match edit {
        NaEdit::Sub { reference, alternate } => format!("{reference}>{alternate}"),
        NaEdit::Del { deleted } => match deleted {
            Some(seq) => format!("del{seq}"),
            None => "del".to_string(),
        },
        NaEdit::Ins { inserted } => format!("ins{inserted}"),
        NaEdit::Delins { inserted, .. } => format!("delins{inserted}"),
        NaEdit::Dup { duplicated } => match duplicated {
            Some(seq) => format!("dup{seq}"),
            None => "dup".to_string(),
        },
    };
    format!("{accession}:g.{pos}{edit_str}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_substitution() {
        let v = parse_genomic_hgvs("NC_000005.10:g.80656489C>T").unwrap();
        assert_eq!(v.accession, "NC_000005.10");
        assert_eq!(v.interval, SimpleInterval { start: 80656489, end: 80656489 });
        assert_eq!(v.edit, NaEdit::Sub { reference: "C".to_string(), alternate: "T".to_string() });
    }

    #[test]
    fn parses_range_deletion() {
        let v = parse_genomic_hgvs("NC_000014.9:g.45002867_45015056del").unwrap();
        assert_eq!(v.interval, SimpleInterval { start: 45002867, end: 45015056 });
        assert_eq!(v.edit, NaEdit::Del { deleted: None });
    }

    #[test]
    fn parses_insertion() {
        let v = parse_genomic_hgvs("NC_000001.11:g.100_101insATG").unwrap();
        assert_eq!(v.edit, NaEdit::Ins { inserted: "ATG".to_string() });
    }

    #[test]
    fn parses_duplication() {
        let v = parse_genomic_hgvs("NC_000001.11:g.100_105dup").unwrap();
        assert_eq!(v.edit, NaEdit::Dup { duplicated: None });
    }

    #[test]
    fn format_round_trips_substitution() {
        let v = parse_genomic_hgvs("NC_000005.10:g.80656489C>T").unwrap();
        assert_eq!(format_genomic_hgvs(&v), "NC_000005.10:g.80656489C>T");
    }

    #[test]
    fn rejects_missing_genomic_marker() {
        assert!(parse_genomic_hgvs("NC_000005.10:c.123C>T").is_err());
    }

    #[test]
    fn rejects_inverted_interval() {
        assert!(parse_genomic_hgvs("NC_000005.10:g.200_100del").is_err());
    }
}
