pub mod cleaner;
pub mod extract;
pub mod text;


use crate::config::CleanerConfig;
use crate::results::{NO_DESCRIPTION, NO_TITLE, PageRecord};
use scraper::Html;

/// Result of parsing one rendered page
pub struct ParsedPage {
    /// Extracted page data
    pub record: PageRecord,
    /// Number of noise subtrees the cleaner removed
    pub removed: usize,
}

impl ParsedPage {
    pub fn has_headings(&self) -> bool {
        !self.record.headings.is_empty()
    }
}

/// Parses rendered HTML into a page record.
///
/// Title and meta description are read before cleaning, since they may sit
/// inside containers the cleaner removes; headings are read afterwards.
pub fn parse_page(url: &str, html: &str, cleaner_config: &CleanerConfig) -> ParsedPage {
    let mut doc = Html::parse_document(html);

    let title = extract::extract_title(&doc).unwrap_or_else(|| NO_TITLE.to_string());
    let meta_description =
        extract::extract_meta_description(&doc).unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let removed = cleaner::clean(&mut doc, cleaner_config);
    let headings = extract::extract_headings(&doc);

    ParsedPage {
        record: PageRecord {
            url: url.to_string(),
            title,
            meta_description,
            headings,
        },
        removed,
    }
}
