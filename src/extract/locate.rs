use anyhow::{Context, Result};
use regex::Regex;

use crate::config::{PARAGRAPH_MARKER, SECTION_ANCHOR, TABLE_SIGNATURE_PATTERN};

#[derive(Debug, Clone)]
pub struct TableLocator {
    signature: Regex,
}

impl TableLocator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            signature: Regex::new(TABLE_SIGNATURE_PATTERN)
                .context("failed to compile casualty table signature regex")?,
        })
    }

    /// Returns the markup of the "Total casualties" table, line breaks removed.
    ///
    /// The search never leaves the section: without the heading anchor there is
    /// no table, even if a matching one exists elsewhere in the document.
    pub fn locate(&self, document: &str) -> Option<String> {
        let start = document.find(SECTION_ANCHOR)?;
        let end = document[start..]
            .find(PARAGRAPH_MARKER)
            .map(|offset| start + offset)
            .unwrap_or(document.len());

        let window = collapse_line_breaks(&document[start..end]);
        self.signature
            .find(&window)
            .map(|found| found.as_str().to_string())
    }
}

fn collapse_line_breaks(input: &str) -> String {
    input
        .chars()
        .filter(|character| *character != '\r' && *character != '\n')
        .collect()
}
