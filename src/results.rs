use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when a page has no `<title>`
pub const NO_TITLE: &str = "No Title";

/// Meta description used when a page has none
pub const NO_DESCRIPTION: &str = "No Description";

/// Heading levels that make up a page outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Maps a lower-case tag name to a level
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(HeadingLevel::H1),
            "h2" => Some(HeadingLevel::H2),
            "h3" => Some(HeadingLevel::H3),
            _ => None,
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        };
        f.write_str(name)
    }
}

/// One heading of a page, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: String,
}

impl Heading {
    pub fn new(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.text)
    }
}

/// Everything collected from one successfully scanned page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    /// URL as given in the input
    pub url: String,

    /// Page title, or [`NO_TITLE`]
    pub title: String,

    /// Meta description, or [`NO_DESCRIPTION`]
    pub meta_description: String,

    /// H1-H3 headings in document order
    pub headings: Vec<Heading>,
}

impl PageRecord {
    /// H2 texts of this page, in order
    pub fn h2_texts(&self) -> impl Iterator<Item = &str> {
        self.headings
            .iter()
            .filter(|h| h.level == HeadingLevel::H2)
            .map(|h| h.text.as_str())
    }

    /// Headings rendered one per line as `[H2] text`
    pub fn headings_text(&self) -> String {
        self.headings
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Why a URL was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanFailure {
    /// The page looked like a 403 / Forbidden response
    Blocked,
    /// The input line is not a usable URL
    InvalidUrl(String),
    /// Navigation or source retrieval failed
    Navigation(String),
}

impl fmt::Display for ScanFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanFailure::Blocked => f.write_str("blocked (403 Forbidden)"),
            ScanFailure::InvalidUrl(reason) => write!(f, "invalid URL: {}", reason),
            ScanFailure::Navigation(reason) => write!(f, "failed to load: {}", reason),
        }
    }
}

/// Result of scanning a single URL
#[derive(Debug, Clone)]
pub enum ScanOutcome {
    Scanned(PageRecord),
    Failed { url: String, failure: ScanFailure },
}

impl ScanOutcome {
    pub fn url(&self) -> &str {
        match self {
            ScanOutcome::Scanned(record) => &record.url,
            ScanOutcome::Failed { url, .. } => url,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ScanOutcome::Scanned(_))
    }
}
