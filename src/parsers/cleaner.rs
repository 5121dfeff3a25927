use crate::config::CleanerConfig;
use scraper::{ElementRef, Html};

/// Structural elements that are never removed, whatever their class or id
const PROTECTED_TAGS: [&str; 3] = ["html", "head", "body"];

/// Removes noise elements from the document in place.
///
/// An element is noise when its tag name is in `strip_tags`, or, in aggressive
/// mode, when its `class` or `id` contains one of `noise_keywords`
/// (case-insensitive substring). Returns the number of subtrees detached;
/// elements nested inside an already removed subtree are not counted twice.
pub fn clean(doc: &mut Html, config: &CleanerConfig) -> usize {
    let keywords = lowercase_keywords(config);

    let targets: Vec<_> = doc
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| is_noise(el, config, &keywords))
        .filter(|el| {
            !el.ancestors()
                .filter_map(ElementRef::wrap)
                .any(|parent| is_noise(&parent, config, &keywords))
        })
        .map(|el| el.id())
        .collect();

    let removed = targets.len();
    for id in targets {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }

    ::log::debug!("Cleaner removed {} noise elements", removed);
    removed
}

fn lowercase_keywords(config: &CleanerConfig) -> Vec<String> {
    if !config.aggressive {
        return Vec::new();
    }
    config
        .noise_keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Checks a single element against the tag and keyword denylists
fn is_noise(el: &ElementRef, config: &CleanerConfig, keywords: &[String]) -> bool {
    let name = el.value().name();
    if PROTECTED_TAGS.contains(&name) {
        return false;
    }

    if config
        .strip_tags
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(name))
    {
        return true;
    }

    if keywords.is_empty() {
        return false;
    }

    [el.value().attr("class"), el.value().id()]
        .into_iter()
        .flatten()
        .map(|value| value.to_lowercase())
        .any(|value| keywords.iter().any(|k| value.contains(k.as_str())))
}
