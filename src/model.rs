use std::sync::Arc;

use serde::Serialize;

use crate::answer::{CategoryAxis, SourceAxis};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CasualtyRecord {
    /// Label from the merged header cell; every row under one cell holds the same allocation.
    pub category: Arc<str>,
    pub source: String,
    pub time_period: String,
    pub casualties: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionCounts {
    pub rows_seen: usize,
    pub header_rows_skipped: usize,
    pub malformed_rows: usize,
    pub unlabelled_rows: usize,
    pub records: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Extraction {
    pub table_found: bool,
    pub counts: ExtractionCounts,
    pub records: Vec<CasualtyRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    pub report_version: u32,
    pub generated_at: String,
    pub source_url: String,
    pub document_path: String,
    pub document_bytes: usize,
    pub document_sha256: String,
    pub table_found: bool,
    pub counts: ExtractionCounts,
    pub records: Vec<CasualtyRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse<'a> {
    pub category_axis: CategoryAxis,
    pub source_axis: SourceAxis,
    pub matched: usize,
    pub records: Vec<&'a CasualtyRecord>,
    pub text: String,
}
