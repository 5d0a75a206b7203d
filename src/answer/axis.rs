use clap::ValueEnum;
use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryAxis {
    Civilian,
    RussianMilitary,
    UkrainianMilitary,
}

impl CategoryAxis {
    /// Binds the conversational `requestedData` value; anything unrecognised
    /// asks about civilians.
    pub fn from_requested(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "russian" => Self::RussianMilitary,
            "ukrainian" => Self::UkrainianMilitary,
            _ => Self::Civilian,
        }
    }

    /// Substring looked for in the lowercased category label. The match is
    /// coarse: "russian" also selects any other label naming Russians.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Civilian => "civilian",
            Self::RussianMilitary => "russian",
            Self::UkrainianMilitary => "ukrainian",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Civilian => "civilian",
            Self::RussianMilitary => "russian-military",
            Self::UkrainianMilitary => "ukrainian-military",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceAxis {
    Ukrainian,
    Russian,
    Neutral,
}

impl SourceAxis {
    pub fn from_requested(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "russian" => Self::Russian,
            "ukrainian" => Self::Ukrainian,
            _ => Self::Neutral,
        }
    }

    pub fn accepts(self, source: &str) -> bool {
        let source = source.to_lowercase();
        let russian = source.contains("russian");
        let ukrainian = source.contains("ukrainian");

        match self {
            Self::Russian => russian,
            Self::Ukrainian => ukrainian,
            Self::Neutral => !russian && !ukrainian,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ukrainian => "ukrainian",
            Self::Russian => "russian",
            Self::Neutral => "neutral",
        }
    }
}
