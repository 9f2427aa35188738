//! gnomAD/VCF-style (`<chr>-<pos>-<ref>-<alt>`) parsing and formatting.
//! `pos` is the 1-based position of the first reference residue.

use crate::error::{Error, Result};

const FORMAT: &str = "gnomAD";

pub struct ParsedGnomad {
    pub chromosome: String,
    pub start: u64,
    pub end: u64,
    pub reference_allele: String,
    pub alternate_allele: String,
}

pub fn parse_gnomad(expr: &str) -> Result<ParsedGnomad> {
    let parts: Vec<&str> = expr.splitn(4, '-').collect();
    let [chr, pos, reference, alternate] = parts.as_slice() else {
        return Err(Error::InvalidInput { format: FORMAT, message: format!("expected 4 hyphen-separated fields, got {expr:?}") });
    };
    if chr.is_empty() || reference.is_empty() || alternate.is_empty() {
        return Err(Error::InvalidInput { format: FORMAT, message: "chromosome, ref, and alt must be non-empty".to_string() });
    }
    let pos_1based: u64 = pos
        .parse()
        .map_err(|_| Error::InvalidInput { format: FORMAT, message: format!("{pos:?} is not a 1-based integer position") })?;
    let start = pos_1based.saturating_sub(1);
    let end = start + reference.len() as u64;
    Ok(ParsedGnomad {
        chromosome: chr.to_string(),
        start,
        end,
        reference_allele: reference.to_string(),
        alternate_allele: alternate.to_string(),
    })
}

pub fn format_gnomad(chromosome: &str, pos_1based: u64, reference_allele: &str, alternate_allele: &str) -> String {
    format!("{chromosome}-{pos_1based}-{reference_allele}-{alternate_allele}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snv() {
        let p = parse_gnomad("5-80656489-C-T").unwrap();
        assert_eq!(p.chromosome, "5");
        assert_eq!(p.start, 80656488);
        assert_eq!(p.end, 80656489);
        assert_eq!(p.reference_allele, "C");
        assert_eq!(p.alternate_allele, "T");
    }

    #[test]
    fn rejects_empty_allele() {
        assert!(parse_gnomad("5-80656489--T").is_err());
    }
}
