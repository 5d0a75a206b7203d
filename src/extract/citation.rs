use anyhow::{Context, Result};
use regex::Regex;

use crate::config::CITATION_PATTERN;

/// Drops bracketed citation markers such as `[12]` or `[note 3]`.
#[derive(Debug, Clone)]
pub struct CitationStripper {
    marker: Regex,
}

impl CitationStripper {
    pub fn new() -> Result<Self> {
        Ok(Self {
            marker: Regex::new(CITATION_PATTERN).context("failed to compile citation marker regex")?,
        })
    }

    pub fn strip(&self, text: Option<&str>) -> String {
        match text {
            Some(text) => self.marker.replace_all(text, "").into_owned(),
            None => String::new(),
        }
    }
}
