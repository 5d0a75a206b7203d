//! Selection of extracted records for a (category, source) request and
//! rendering of the matches as sentences.

mod axis;
mod time_span;

use anyhow::Result;

pub use axis::{CategoryAxis, SourceAxis};
pub use time_span::TimeSpanFormatter;

use crate::model::CasualtyRecord;

#[derive(Debug, Clone)]
pub struct QueryEngine {
    time_span: TimeSpanFormatter,
}

impl QueryEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            time_span: TimeSpanFormatter::new()?,
        })
    }

    /// Filters by category keyword first, then by source keyword, keeping
    /// record order.
    pub fn select<'a>(
        &self,
        records: &'a [CasualtyRecord],
        category: CategoryAxis,
        source: SourceAxis,
    ) -> Vec<&'a CasualtyRecord> {
        let keyword = category.keyword();

        records
            .iter()
            .filter(|record| record.category.to_lowercase().contains(keyword))
            .filter(|record| source.accepts(&record.source))
            .collect()
    }

    pub fn render_line(&self, record: &CasualtyRecord) -> String {
        format!(
            "According to {} casualties of {} from {} are: {}.",
            record.source,
            record.category,
            self.time_span.format(&record.time_period),
            record.casualties
        )
    }

    pub fn render(&self, selected: &[&CasualtyRecord]) -> String {
        selected
            .iter()
            .map(|record| self.render_line(record))
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// An empty string means nothing matched; wording a "no data" reply is
    /// left to the caller.
    pub fn answer(
        &self,
        records: &[CasualtyRecord],
        category: CategoryAxis,
        source: SourceAxis,
    ) -> String {
        self.render(&self.select(records, category, source))
    }
}
