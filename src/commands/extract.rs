use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use tracing::info;

use super::load_and_extract;
use crate::cli::ExtractArgs;
use crate::config::SOURCE_URL;
use crate::model::{CasualtyRecord, Extraction, ExtractionCounts, ExtractionReport};
use crate::util::{now_utc_string, sha256_hex, write_json_pretty, write_json_stdout};

const REPORT_VERSION: u32 = 1;

pub fn run(args: ExtractArgs) -> Result<()> {
    let loaded = load_and_extract(&args.input.document)?;
    let report = build_report(&args.input.document, &loaded.text, loaded.extraction);

    if let Some(report_path) = &args.report_path {
        write_json_pretty(report_path, &report)?;
        info!(path = %report_path.display(), "wrote extraction report");
    }

    if args.json {
        write_json_stdout(&report, "extraction")
    } else {
        write_text_records(&report.records, &report.counts)
    }
}

pub(super) fn build_report(
    document_path: &Path,
    document: &str,
    extraction: Extraction,
) -> ExtractionReport {
    ExtractionReport {
        report_version: REPORT_VERSION,
        generated_at: now_utc_string(),
        source_url: SOURCE_URL.to_string(),
        document_path: document_path.display().to_string(),
        document_bytes: document.len(),
        document_sha256: sha256_hex(document.as_bytes()),
        table_found: extraction.table_found,
        counts: extraction.counts,
        records: extraction.records,
    }
}

fn write_text_records(records: &[CasualtyRecord], counts: &ExtractionCounts) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());

    for record in records {
        writeln!(
            output,
            "{}\t{}\t{}\t{}",
            record.category, record.casualties, record.time_period, record.source
        )?;
    }
    writeln!(
        output,
        "Records: {} (rows seen {}, malformed {}, unlabelled {})",
        counts.records, counts.rows_seen, counts.malformed_rows, counts.unlabelled_rows
    )?;

    output.flush()?;
    Ok(())
}
