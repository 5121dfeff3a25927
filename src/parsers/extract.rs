use crate::parsers::text::collapse_whitespace;
use crate::results::{Heading, HeadingLevel};
use scraper::{ElementRef, Html, Selector};

/// Text of the first `<title>` element; empty when the element has no text.
///
/// `None` only when the document has no `<title>` at all.
pub fn extract_title(doc: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").unwrap();
    doc.root_element()
        .select(&title_selector)
        .next()
        .map(element_text)
}

/// Trimmed `content` of the first `meta[name=description]`, falling back to
/// the first `meta[property=og:description]`.
///
/// The first matching element wins even when its `content` is empty or
/// missing; `None` only when neither element exists.
pub fn extract_meta_description(doc: &Html) -> Option<String> {
    let selectors = [
        r#"meta[name="description"]"#,
        r#"meta[property="og:description"]"#,
    ];

    selectors.iter().find_map(|css| {
        let selector = Selector::parse(css).unwrap();
        doc.root_element().select(&selector).next().map(|meta| {
            meta.value()
                .attr("content")
                .map(|content| content.trim().to_string())
                .unwrap_or_default()
        })
    })
}

/// All H1-H3 headings in document order, skipping those without text
pub fn extract_headings(doc: &Html) -> Vec<Heading> {
    let heading_selector = Selector::parse("h1, h2, h3").unwrap();
    // Walk from the root so subtrees detached by the cleaner are skipped
    let headings = doc
        .root_element()
        .select(&heading_selector)
        .filter_map(|el| {
            let level = HeadingLevel::from_tag(el.value().name())?;
            let text = element_text(el);
            (!text.is_empty()).then(|| Heading::new(level, text))
        })
        .collect::<Vec<_>>();

    ::log::debug!("Extractor found {} headings", headings.len());
    headings
}

/// Concatenated text of an element with whitespace collapsed
fn element_text(el: ElementRef) -> String {
    collapse_whitespace(&el.text().collect::<String>())
}
