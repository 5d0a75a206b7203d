use anyhow::{Context, Result};
use regex::Regex;

use crate::config::TIME_SPAN_PATTERN;

#[derive(Debug, Clone)]
pub struct TimeSpanFormatter {
    range: Regex,
}

impl TimeSpanFormatter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            range: Regex::new(TIME_SPAN_PATTERN).context("failed to compile time span regex")?,
        })
    }

    /// "1 Jan 2022 to 1 Feb 2023" becomes "1 Jan to 1 Feb". Periods without two
    /// day/month pairs collapse to an empty phrase.
    pub fn format(&self, time_period: &str) -> String {
        match self.range.captures(time_period) {
            Some(captures) => format!("{} to {}", &captures[1], &captures[2]),
            None => String::new(),
        }
    }
}
