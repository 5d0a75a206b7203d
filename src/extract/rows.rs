use std::sync::Arc;

use anyhow::{Result, anyhow};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::citation::CitationStripper;
use crate::model::{CasualtyRecord, ExtractionCounts};

#[derive(Debug, Clone)]
pub struct RowWalker {
    row: Selector,
    header_cell: Selector,
    data_cell: Selector,
}

impl RowWalker {
    pub fn new() -> Result<Self> {
        Ok(Self {
            row: parse_selector("tr")?,
            header_cell: parse_selector("th")?,
            data_cell: parse_selector("td")?,
        })
    }

    /// Walks the table rows in document order, carrying the label of a merged
    /// header cell over the rows its `rowspan` covers.
    ///
    /// The first row holds the column headers and is skipped. The span state is
    /// local to this call.
    pub fn walk(
        &self,
        table: &str,
        citations: &CitationStripper,
    ) -> (ExtractionCounts, Vec<CasualtyRecord>) {
        let fragment = Html::parse_fragment(table);
        let mut counts = ExtractionCounts::default();
        let mut records = Vec::new();

        let mut current_category: Arc<str> = Arc::from("");
        let mut remaining_span: usize = 0;

        for (index, row) in fragment.select(&self.row).enumerate() {
            counts.rows_seen += 1;
            if index == 0 {
                counts.header_rows_skipped += 1;
                continue;
            }

            if remaining_span == 0 {
                let header = row.select(&self.header_cell).next();
                current_category = match header {
                    Some(cell) => Arc::from(citations.strip(Some(&cell_text(cell)))),
                    None => Arc::from(""),
                };
                remaining_span = header.map(declared_row_span).unwrap_or(0);
            }
            remaining_span = remaining_span.saturating_sub(1);

            let cells = row
                .select(&self.data_cell)
                .map(cell_text)
                .collect::<Vec<String>>();

            let Some(record) = build_record(&current_category, &cells, citations) else {
                counts.malformed_rows += 1;
                debug!(row = index, cells = cells.len(), "skipping row without three data cells");
                continue;
            };

            if record.category.is_empty() {
                counts.unlabelled_rows += 1;
                debug!(row = index, "skipping row outside any category span");
                continue;
            }

            records.push(record);
        }

        counts.records = records.len();
        (counts, records)
    }
}

/// Builds one record from the raw texts of a row's data cells, in
/// casualties / time period / source order.
pub fn build_record(
    category: &Arc<str>,
    cells: &[String],
    citations: &CitationStripper,
) -> Option<CasualtyRecord> {
    let [casualties, time_period, source] = cells else {
        return None;
    };

    Some(CasualtyRecord {
        category: Arc::clone(category),
        source: citations.strip(Some(source.as_str())),
        time_period: citations.strip(Some(time_period.as_str())),
        casualties: citations.strip(Some(casualties.as_str())),
    })
}

/// Largest `rowspan` an HTML table honours.
const MAX_ROW_SPAN: u32 = 65_534;

/// Missing, negative or unparsable values count as no span; oversized ones
/// are clamped.
fn declared_row_span(cell: ElementRef<'_>) -> usize {
    let Some(value) = cell.value().attr("rowspan").map(str::trim) else {
        return 0;
    };
    let span = match value.parse::<u32>() {
        Ok(span) => span,
        Err(_) if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => MAX_ROW_SPAN,
        Err(_) => 0,
    };
    span.min(MAX_ROW_SPAN) as usize
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>()
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|err| anyhow!("failed to parse selector {css:?}: {err:?}"))
}
