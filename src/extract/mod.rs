//! Extraction of casualty records from the "Total casualties" table.
//!
//! The table is isolated with a bounded regex search (see [`TableLocator`]);
//! only the isolated markup is parsed as HTML, then walked row by row.

mod citation;
mod locate;
mod rows;
#[cfg(test)]
mod tests;

use anyhow::Result;
use tracing::warn;

pub use citation::CitationStripper;
pub use locate::TableLocator;
pub use rows::RowWalker;

use crate::model::Extraction;

#[derive(Debug, Clone)]
pub struct CasualtyTableExtractor {
    locator: TableLocator,
    walker: RowWalker,
    citations: CitationStripper,
}

impl CasualtyTableExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            locator: TableLocator::new()?,
            walker: RowWalker::new()?,
            citations: CitationStripper::new()?,
        })
    }

    /// A missing table is not an error: the extraction is simply empty.
    pub fn extract_records(&self, document: &str) -> Extraction {
        let Some(table) = self.locator.locate(document) else {
            warn!(document_bytes = document.len(), "total casualties table not found");
            return Extraction::default();
        };

        let (counts, records) = self.walker.walk(&table, &self.citations);
        Extraction {
            table_found: true,
            counts,
            records,
        }
    }
}
