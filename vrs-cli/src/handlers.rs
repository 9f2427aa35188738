//! The annotation loop: resolve a `SequenceRepository` from the data-proxy
//! URI, build a `Translator`, and walk each VCF record's REF/ALT alleles
//! through it, writing whichever output(s) were requested.

use std::fs::{self, File};
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;

use vrs_core::model::AlleleState;
use vrs_normalize::NormalizeError;
use vrs_seqrepo::{DataProxyUri, InMemorySequenceRepository, SequenceRepository};
use vrs_translate::{Format, Translator};

use crate::cli;
use crate::vcf::{self, VcfRecord};

pub struct AnnotateOptions {
    pub vcf_path: PathBuf,
    pub dataproxy_uri: String,
    pub assembly: String,
    pub vrs_attributes: bool,
    pub skip_ref: bool,
    pub require_validation: bool,
    pub strict: bool,
    pub vcf_out: Option<PathBuf>,
    pub ndjson_out: Option<PathBuf>,
}

impl AnnotateOptions {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            vcf_path: PathBuf::from(matches.get_one::<String>(cli::VCF_PATH).expect("required")),
            dataproxy_uri: matches.get_one::<String>(cli::DATAPROXY_URI).expect("required or env-backed").clone(),
            assembly: matches.get_one::<String>(cli::ASSEMBLY).expect("has a default").clone(),
            vrs_attributes: matches.get_flag(cli::VRS_ATTRIBUTES),
            skip_ref: matches.get_flag(cli::SKIP_REF),
            require_validation: matches.get_flag(cli::REQUIRE_VALIDATION),
            strict: matches.get_flag(cli::STRICT),
            vcf_out: matches.get_one::<String>(cli::VCF_OUT).map(PathBuf::from),
            ndjson_out: matches.get_one::<String>(cli::NDJSON_OUT).map(PathBuf::from),
        }
    }
}

/// Build the `SequenceRepository` named by a parsed data-proxy URI. Any
/// failure here (missing directory, no FASTA records, ...) is the §6.4
/// "data-proxy unreachable" condition.
fn build_repository(uri: &DataProxyUri, assembly: &str) -> Result<Box<dyn SequenceRepository>> {
    match uri {
        DataProxyUri::File(dir) => {
            let mut repo = InMemorySequenceRepository::new();
            let dir_path = Path::new(dir);
            let entries = fs::read_dir(dir_path).with_context(|| format!("cannot read data-proxy directory: {dir}"))?;
            let mut loaded_any = false;
            for entry in entries {
                let path = entry?.path();
                let name = path.to_string_lossy();
                if name.ends_with(".fa") || name.ends_with(".fasta") || name.ends_with(".fa.gz") || name.ends_with(".fasta.gz") {
                    repo.load_fasta(&path, assembly).with_context(|| format!("failed to load {}", path.display()))?;
                    loaded_any = true;
                }
            }
            if !loaded_any {
                anyhow::bail!("no FASTA files found under {dir}");
            }
            Ok(Box::new(repo))
        }
        DataProxyUri::Http(base_url) => Ok(Box::new(vrs_seqrepo::remote::RemoteSequenceRepository::new(base_url.clone()))),
    }
}

fn is_backend_unavailable(err: &vrs_translate::Error) -> bool {
    matches!(err, vrs_translate::Error::Repository(vrs_seqrepo::Error::BackendUnavailable(_)))
        || matches!(err, vrs_translate::Error::Core(vrs_core::Error::BackendUnavailable(_)))
        || matches!(
            err,
            vrs_translate::Error::Normalize(NormalizeError::Repository(vrs_seqrepo::Error::BackendUnavailable(_)))
        )
}

fn state_sequence(state: &AlleleState) -> String {
    match state {
        AlleleState::LiteralSequenceExpression { sequence } => sequence.clone(),
        AlleleState::ReferenceLengthExpression { sequence: Some(sequence), .. } => sequence.clone(),
        AlleleState::ReferenceLengthExpression { length, repeat_subunit_length, .. } => {
            format!("RLE({length}/{repeat_subunit_length})")
        }
        AlleleState::LengthExpression { length } => format!("LEN({length})"),
    }
}

fn ndjson_line(record: &VcfRecord, role: &str, allele_value: &str, outcome: &vrs_translate::Result<vrs_core::model::Allele>) -> Result<String> {
    let mut value = serde_json::json!({
        "chrom": record.chrom,
        "pos": record.pos_1based,
        "ref": record.ref_allele,
        "allele": allele_value,
        "role": role,
    });
    match outcome {
        Ok(allele) => value["vrs_allele"] = serde_json::to_value(allele)?,
        Err(e) => value["error"] = serde_json::Value::String(e.to_string()),
    }
    Ok(serde_json::to_string(&value)?)
}

/// Run the annotator end to end, returning the process exit code per §6.4
/// (`0` success, `3` data-proxy unreachable, `4` per-record failures
/// exceeded tolerance). CLI-misuse (`2`) is handled by clap itself before
/// this is ever called; other unexpected failures (e.g. the VCF or an
/// output path cannot be opened) surface as an `Err` for `main` to map.
pub fn run_annotate(opts: &AnnotateOptions) -> Result<i32> {
    let uri = DataProxyUri::parse(&opts.dataproxy_uri).with_context(|| format!("invalid --dataproxy_uri: {}", opts.dataproxy_uri))?;

    let repo = match build_repository(&uri, &opts.assembly) {
        Ok(repo) => repo,
        Err(e) => {
            eprintln!("data-proxy unreachable: {e:#}");
            return Ok(3);
        }
    };

    let translator = Translator::new(repo.as_ref())
        .with_assembly(opts.assembly.clone())
        .with_require_validation(opts.require_validation);

    let mut reader = vcf::open_vcf(&opts.vcf_path)?;
    let mut vcf_writer = opts
        .vcf_out
        .as_ref()
        .map(|path| -> Result<_> { Ok(BufWriter::new(File::create(path).with_context(|| format!("cannot create {}", path.display()))?)) })
        .transpose()?;
    let mut ndjson_writer = opts
        .ndjson_out
        .as_ref()
        .map(|path| -> Result<_> { Ok(BufWriter::new(File::create(path).with_context(|| format!("cannot create {}", path.display()))?)) })
        .transpose()?;

    let mut line = String::new();
    let mut failures = 0usize;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);

        if trimmed.starts_with('#') {
            if let Some(w) = vcf_writer.as_mut() {
                if trimmed.starts_with("#CHROM") {
                    writeln!(w, "{}", vcf::VRS_ID_INFO_HEADER)?;
                    if opts.vrs_attributes {
                        for header in &vcf::VRS_ATTRIBUTE_INFO_HEADERS {
                            writeln!(w, "{header}")?;
                        }
                    }
                }
                writeln!(w, "{trimmed}")?;
            }
            continue;
        }

        let Some(record) = vcf::parse_record(trimmed) else { continue };

        let mut roles: Vec<(&'static str, String)> = Vec::new();
        if !opts.skip_ref {
            roles.push(("ref", record.ref_allele.clone()));
        }
        for alt in &record.alt_alleles {
            roles.push(("alt", alt.clone()));
        }

        let mut allele_ids = Vec::with_capacity(roles.len());
        let mut starts = Vec::with_capacity(roles.len());
        let mut ends = Vec::with_capacity(roles.len());
        let mut states = Vec::with_capacity(roles.len());

        for (role, value) in &roles {
            let expr = format!("{}-{}-{}-{}", record.chrom, record.pos_1based, record.ref_allele, value);
            let outcome = translator.translate_from(&expr, Format::Gnomad);

            match &outcome {
                Ok(allele) => {
                    allele_ids.push(allele.id.clone().unwrap_or_default());
                    if let Some(location) = allele.location.as_inlined() {
                        starts.push(location.start.as_definite().map(|v| v.to_string()).unwrap_or_default());
                        ends.push(location.end.as_definite().map(|v| v.to_string()).unwrap_or_default());
                    }
                    states.push(state_sequence(&allele.state));
                }
                Err(e) if is_backend_unavailable(e) => {
                    eprintln!("data-proxy became unavailable at {}:{}: {e}", record.chrom, record.pos_1based);
                    if let Some(w) = vcf_writer.as_mut() {
                        w.flush()?;
                    }
                    if let Some(w) = ndjson_writer.as_mut() {
                        w.flush()?;
                    }
                    return Ok(3);
                }
                Err(e) => {
                    eprintln!("failed to annotate {}:{} {} ({role}): {e}", record.chrom, record.pos_1based, value);
                    allele_ids.push(String::new());
                    failures += 1;
                }
            }

            if let Some(w) = ndjson_writer.as_mut() {
                writeln!(w, "{}", ndjson_line(&record, role, value, &outcome)?)?;
            }

            if outcome.is_err() && opts.strict {
                if let Some(w) = vcf_writer.as_mut() {
                    w.flush()?;
                }
                if let Some(w) = ndjson_writer.as_mut() {
                    w.flush()?;
                }
                return Ok(4);
            }
        }

        if let Some(w) = vcf_writer.as_mut() {
            let mut extra_info = format!("VRS_Allele_IDs={}", allele_ids.join(","));
            if opts.vrs_attributes {
                extra_info.push_str(&format!(
                    ";VRS_Start={};VRS_End={};VRS_State={}",
                    starts.join(","),
                    ends.join(","),
                    states.join(","),
                ));
            }
            writeln!(w, "{}", vcf::format_record_line(&record, &extra_info))?;
        }
    }

    if let Some(w) = vcf_writer.as_mut() {
        w.flush()?;
    }
    if let Some(w) = ndjson_writer.as_mut() {
        w.flush()?;
    }

    Ok(if failures > 0 { 4 } else { 0 })
}
