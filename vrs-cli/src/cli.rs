//! The CLI surface (§6.4): a single command that annotates a VCF's records
//! with GA4GH VRS identifiers.

use clap::{Arg, ArgAction, ArgGroup, Command};

pub const VCF_PATH: &str = "vcf";
pub const DATAPROXY_URI: &str = "dataproxy_uri";
pub const ASSEMBLY: &str = "assembly";
pub const VRS_ATTRIBUTES: &str = "vrs_attributes";
pub const SKIP_REF: &str = "skip_ref";
pub const REQUIRE_VALIDATION: &str = "require_validation";
pub const STRICT: &str = "strict";
pub const VCF_OUT: &str = "vcf_out";
pub const NDJSON_OUT: &str = "ndjson_out";

pub fn build_parser() -> Command {
    Command::new("vrs-annotate")
        .bin_name("vrs-annotate")
        .version(env!("CARGO_PKG_VERSION"))
        .author("GA4GH")
        .about("Annotate a VCF's REF/ALT alleles with GA4GH VRS identifiers.")
        .arg(
            Arg::new(VCF_PATH)
                .required(true)
                .help("Input VCF path, plain text or gzip/bgzf-compressed"),
        )
        .arg(
            Arg::new(DATAPROXY_URI)
                .long("dataproxy_uri")
                .env("GA4GH_VRS_DATAPROXY_URI")
                .required(true)
                .help("seqrepo+file://<dir> or seqrepo+http(s)://<host>/seqrepo sequence repository (CLI flag takes priority over the env var)"),
        )
        .arg(
            Arg::new(ASSEMBLY)
                .long("assembly")
                .default_value("GRCh38")
                .help("Assembly used to resolve chromosome aliases"),
        )
        .arg(
            Arg::new(VRS_ATTRIBUTES)
                .long("vrs_attributes")
                .action(ArgAction::SetTrue)
                .help("Emit per-record VRS_Start, VRS_End, VRS_State INFO fields"),
        )
        .arg(
            Arg::new(SKIP_REF)
                .long("skip_ref")
                .action(ArgAction::SetTrue)
                .help("Do not compute identifiers for REF alleles, only ALT"),
        )
        .arg(
            Arg::new(REQUIRE_VALIDATION)
                .long("require_validation")
                .action(ArgAction::SetTrue)
                .help("Reject records where the VCF REF field disagrees with the repository"),
        )
        .arg(
            Arg::new(STRICT)
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Halt on the first per-record failure instead of logging, counting, and continuing"),
        )
        .arg(
            Arg::new(VCF_OUT)
                .long("vcf_out")
                .help("Write an annotated VCF to this path"),
        )
        .arg(
            Arg::new(NDJSON_OUT)
                .long("ndjson_out")
                .help("Write one VRS-annotated JSON record per REF/ALT allele to this path"),
        )
        .group(
            ArgGroup::new("outputs")
                .args([VCF_OUT, NDJSON_OUT])
                .multiple(true)
                .required(true),
        )
}
