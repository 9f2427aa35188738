//! Beacon (`<chr> : <pos> <ref> > <alt>`) parsing and formatting. Same
//! 1-based positioning as gnomAD, laid out with Beacon's space-padded
//! punctuation.

use crate::error::{Error, Result};

const FORMAT: &str = "Beacon";

pub struct ParsedBeacon {
    pub chromosome: String,
    pub start: u64,
    pub end: u64,
    pub reference_allele: String,
    pub alternate_allele: String,
}

pub fn parse_beacon(expr: &str) -> Result<ParsedBeacon> {
    let (chr_part, rest) = expr
        .split_once(':')
        .ok_or_else(|| Error::InvalidInput { format: FORMAT, message: format!("missing ':' in {expr:?}") })?;
    let (left, alt_part) = rest
        .split_once('>')
        .ok_or_else(|| Error::InvalidInput { format: FORMAT, message: format!("missing '>' in {expr:?}") })?;

    let chromosome = chr_part.trim().to_string();
    let mut tokens = left.split_whitespace();
    let pos = tokens
        .next()
        .ok_or_else(|| Error::InvalidInput { format: FORMAT, message: "missing position".to_string() })?;
    let reference = tokens
        .next()
        .ok_or_else(|| Error::InvalidInput { format: FORMAT, message: "missing reference allele".to_string() })?;
    if tokens.next().is_some() {
        return Err(Error::InvalidInput { format: FORMAT, message: format!("unexpected extra tokens in {left:?}") });
    }
    let alternate = alt_part.trim();
    if chromosome.is_empty() || alternate.is_empty() {
        return Err(Error::InvalidInput { format: FORMAT, message: "chromosome and alt must be non-empty".to_string() });
    }

    let pos_1based: u64 = pos
        .parse()
        .map_err(|_| Error::InvalidInput { format: FORMAT, message: format!("{pos:?} is not a 1-based integer position") })?;
    let start = pos_1based.saturating_sub(1);
    let end = start + reference.len() as u64;

    Ok(ParsedBeacon {
        chromosome,
        start,
        end,
        reference_allele: reference.to_string(),
        alternate_allele: alternate.to_string(),
    })
}

pub fn format_beacon(chromosome: &str, pos_1based: u64, reference_allele: &str, alternate_allele: &str) -> String {
    format!("{chromosome} : {pos_1based} {reference_allele} > {alternate_allele}")
}
