//! SPDI (`<seq>:<pos>:<del>:<ins>`) parsing and formatting. `pos` is
//! 0-based interbase. `del` may be a literal deleted sequence or, per the
//! SPDI spec, a bare deletion length (the caller resolves the actual
//! residues from the `SequenceRepository` in that case).

use crate::error::{Error, Result};

const FORMAT: &str = "SPDI";

pub struct ParsedSpdi {
    pub accession: String,
    pub start: u64,
    pub end: u64,
    pub deleted: Option<String>,
    pub inserted: String,
}

pub fn parse_spdi(expr: &str) -> Result<ParsedSpdi> {
    let parts: Vec<&str> = expr.splitn(4, ':').collect();
    let [accession, pos, del, ins] = parts.as_slice() else {
        return Err(Error::InvalidInput { format: FORMAT, message: format!("expected 4 colon-separated fields, got {expr:?}") });
    };
    if accession.is_empty() {
        return Err(Error::InvalidInput { format: FORMAT, message: "empty accession".to_string() });
    }
    let start: u64 = pos
        .parse()
        .map_err(|_| Error::InvalidInput { format: FORMAT, message: format!("{pos:?} is not a 0-based integer position") })?;

    let (end, deleted) = if !del.is_empty() && del.bytes().all(|b| b.is_ascii_digit()) {
        let len: u64 = del.parse().expect("all-digit check above");
        (start + len, None)
    } else {
        (start + del.len() as u64, Some(del.to_string()))
    };

    Ok(ParsedSpdi { accession: accession.to_string(), start, end, deleted, inserted: ins.to_string() })
}

pub fn format_spdi(accession: &str, start: u64, deleted: &str, inserted: &str) -> String {
    format!("{accession}:{start}:{deleted}:{inserted}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_literal_deletion() {
        let p = parse_spdi("NC_000005.10:80656488:C:T").unwrap();
        assert_eq!(p.accession, "NC_000005.10");
        assert_eq!(p.start, 80656488);
        assert_eq!(p.end, 80656489);
        assert_eq!(p.deleted.as_deref(), Some("C"));
        assert_eq!(p.inserted, "T");
    }

    #[test]
    fn parses_numeric_deletion_length() {
        let p = parse_spdi("NC_000005.10:80656488:1:T").unwrap();
        assert_eq!(p.end, 80656489);
        assert_eq!(p.deleted, None);
    }

    #[test]
    fn rejects_malformed_field_count() {
        assert!(parse_spdi("NC_000005.10:80656488:C").is_err());
    }
}
