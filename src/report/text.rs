use crate::outline::RecommendationEntry;
use crate::results::PageRecord;
use std::fmt::Write;

/// Copy-ready outline suggestion, one `- label` line per topic
pub fn outline_text(recommendations: &[RecommendationEntry]) -> String {
    if recommendations.is_empty() {
        return String::new();
    }

    let mut out = String::from("GỢI Ý OUTLINE:\n");
    for entry in recommendations {
        let _ = writeln!(out, "- {}", entry.label());
    }
    out
}

/// Plain-text dump of every scanned page and its heading structure
pub fn raw_text(pages: &[PageRecord]) -> String {
    let mut out = String::new();
    for page in pages {
        let _ = writeln!(out, "\nURL: {}", page.url);
        let _ = writeln!(out, "TITLE: {}", page.title);
        let _ = writeln!(out, "META: {}", page.meta_description);
        out.push_str("STRUCTURE:\n");
        for heading in &page.headings {
            let _ = writeln!(out, "- {}", heading);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{Heading, HeadingLevel};

    #[test]
    fn test_outline_text() {
        let recs = vec![
            RecommendationEntry {
                text: "A là gì".to_string(),
                count: 2,
            },
            RecommendationEntry {
                text: "Độ bền".to_string(),
                count: 1,
            },
        ];
        assert_eq!(
            outline_text(&recs),
            "GỢI Ý OUTLINE:\n- A là gì (x2)\n- Độ bền\n"
        );
        assert_eq!(outline_text(&[]), "");
    }

    #[test]
    fn test_raw_text() {
        let pages = vec![PageRecord {
            url: "https://a".to_string(),
            title: "T".to_string(),
            meta_description: "M".to_string(),
            headings: vec![Heading::new(HeadingLevel::H1, "Intro")],
        }];
        assert_eq!(
            raw_text(&pages),
            "\nURL: https://a\nTITLE: T\nMETA: M\nSTRUCTURE:\n- [H1] Intro\n"
        );
    }
}
