pub mod chat;
pub mod extract;
pub mod query;

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::extract::CasualtyTableExtractor;
use crate::model::Extraction;
use crate::util::read_document;

struct LoadedDocument {
    text: String,
    extraction: Extraction,
}

fn load_and_extract(path: &Path) -> Result<LoadedDocument> {
    let text = read_document(path)?;
    info!(path = %path.display(), bytes = text.len(), "loaded document");

    let extractor = CasualtyTableExtractor::new()?;
    let extraction = extractor.extract_records(&text);

    info!(
        table_found = extraction.table_found,
        rows_seen = extraction.counts.rows_seen,
        malformed_rows = extraction.counts.malformed_rows,
        unlabelled_rows = extraction.counts.unlabelled_rows,
        records = extraction.counts.records,
        "extraction complete"
    );

    Ok(LoadedDocument { text, extraction })
}
