//! VCF streaming reader and writer for the annotator.
//!
//! Grounded on the teacher's `gtars-vrs` VCF reader: gzip/bgzf
//! auto-detection via `flate2::read::MultiGzDecoder`, manual tab-splitting
//! instead of a full VCF parsing crate, one line buffered at a time.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

/// A VCF data line, split into its mandatory columns. `trailing` holds
/// FORMAT and sample columns verbatim, when present.
pub struct VcfRecord {
    pub chrom: String,
    pub pos_1based: u64,
    pub id: String,
    pub ref_allele: String,
    pub alt_alleles: Vec<String>,
    pub qual: String,
    pub filter: String,
    pub info: String,
    pub trailing: Option<String>,
}

pub const VRS_ID_INFO_HEADER: &str = concat!(
    "##INFO=<ID=VRS_Allele_IDs,Number=.,Type=String,",
    "Description=\"GA4GH VRS Allele identifier for each REF/ALT allele, REF first when present\">"
);

pub const VRS_ATTRIBUTE_INFO_HEADERS: [&str; 3] = [
    concat!(
        "##INFO=<ID=VRS_Start,Number=.,Type=Integer,",
        "Description=\"VRS SequenceLocation start, aligned with VRS_Allele_IDs\">"
    ),
    concat!(
        "##INFO=<ID=VRS_End,Number=.,Type=Integer,",
        "Description=\"VRS SequenceLocation end, aligned with VRS_Allele_IDs\">"
    ),
    concat!(
        "##INFO=<ID=VRS_State,Number=.,Type=String,",
        "Description=\"VRS Allele state sequence, aligned with VRS_Allele_IDs\">"
    ),
];

/// Open a VCF file, auto-detecting gzip/bgzf compression from its extension.
pub fn open_vcf(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("failed to open VCF: {}", path.display()))?;
    let capacity = 256 * 1024;
    let name = path.to_string_lossy();
    if name.ends_with(".gz") || name.ends_with(".bgz") {
        Ok(Box::new(BufReader::with_capacity(capacity, MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::with_capacity(capacity, file)))
    }
}

/// Parse one non-header data line. Returns `None` for malformed or
/// under-populated lines (skipped, not fatal).
pub fn parse_record(line: &str) -> Option<VcfRecord> {
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let fields: Vec<&str> = line.splitn(9, '\t').collect();
    if fields.len() < 8 {
        return None;
    }
    let pos_1based: u64 = fields[1].parse().ok()?;
    Some(VcfRecord {
        chrom: fields[0].to_string(),
        pos_1based,
        id: fields[2].to_string(),
        ref_allele: fields[3].to_string(),
        alt_alleles: fields[4].split(',').map(str::to_string).collect(),
        qual: fields[5].to_string(),
        filter: fields[6].to_string(),
        info: fields[7].to_string(),
        trailing: fields.get(8).map(|s| s.to_string()),
    })
}

/// Reassemble a data line, replacing/augmenting its INFO field.
pub fn format_record_line(record: &VcfRecord, extra_info: &str) -> String {
    let info = if extra_info.is_empty() {
        record.info.clone()
    } else if record.info.is_empty() || record.info == "." {
        extra_info.to_string()
    } else {
        format!("{};{extra_info}", record.info)
    };
    let mut line = format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        record.chrom,
        record.pos_1based,
        record.id,
        record.ref_allele,
        record.alt_alleles.join(","),
        record.qual,
        record.filter,
        info,
    );
    if let Some(trailing) = &record.trailing {
        line.push('\t');
        line.push_str(trailing);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn open_vcf_auto_detects_gzip_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variants.vcf.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"##fileformat=VCFv4.2\n5\t80656489\t.\tC\tT\t.\tPASS\t.\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let mut reader = open_vcf(&path).unwrap();
        let mut lines = Vec::new();
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap() > 0 {
            lines.push(line.trim_end().to_string());
            line.clear();
        }
        assert_eq!(lines[0], "##fileformat=VCFv4.2");
        let record = parse_record(&lines[1]).unwrap();
        assert_eq!(record.ref_allele, "C");
    }

    #[test]
    fn parses_a_minimal_data_line() {
        let r = parse_record("5\t80656489\t.\tC\tT\t.\tPASS\t.").unwrap();
        assert_eq!(r.chrom, "5");
        assert_eq!(r.pos_1based, 80656489);
        assert_eq!(r.ref_allele, "C");
        assert_eq!(r.alt_alleles, vec!["T".to_string()]);
        assert!(r.trailing.is_none());
    }

    #[test]
    fn parses_multiallelic_records_and_genotype_columns() {
        let r = parse_record("5\t80656489\trs1\tC\tT,G\t50\tPASS\tDP=10\tGT\t0/1").unwrap();
        assert_eq!(r.alt_alleles, vec!["T".to_string(), "G".to_string()]);
        assert_eq!(r.trailing.as_deref(), Some("GT\t0/1"));
    }

    #[test]
    fn header_lines_are_not_records() {
        assert!(parse_record("##fileformat=VCFv4.2").is_none());
        assert!(parse_record("#CHROM\tPOS\tID\tREF\tALT").is_none());
    }

    #[test]
    fn format_record_line_appends_to_existing_info() {
        let r = parse_record("5\t80656489\t.\tC\tT\t.\tPASS\tDP=10").unwrap();
        let formatted = format_record_line(&r, "VRS_Allele_IDs=ga4gh:VA.xyz");
        assert_eq!(formatted, "5\t80656489\t.\tC\tT\t.\tPASS\tDP=10;VRS_Allele_IDs=ga4gh:VA.xyz");
    }

    #[test]
    fn format_record_line_replaces_a_dot_info_field() {
        let r = parse_record("5\t80656489\t.\tC\tT\t.\tPASS\t.").unwrap();
        let formatted = format_record_line(&r, "VRS_Allele_IDs=ga4gh:VA.xyz");
        assert_eq!(formatted, "5\t80656489\t.\tC\tT\t.\tPASS\tVRS_Allele_IDs=ga4gh:VA.xyz");
    }
}
