use crate::browser::{PageSource, looks_blocked};
use crate::config::CleanerConfig;
use crate::parsers;
use crate::results::{ScanFailure, ScanOutcome};
use crate::session::ResearchSession;
use url::Url;

#[cfg(test)]
mod tests;

/// Scans every URL of the session, one at a time, recording each outcome.
///
/// A failing URL is logged and skipped; it never stops the batch.
pub async fn scan_all<S: PageSource>(
    source: &mut S,
    session: &mut ResearchSession,
    cleaner_config: &CleanerConfig,
) {
    let urls = session.urls().to_vec();
    let total = urls.len();

    for (i, url) in urls.iter().enumerate() {
        ::log::info!("Processing {}/{}: {}", i + 1, total, url);
        let outcome = scan_url(source, url, cleaner_config).await;
        session.record(outcome);
    }
}

/// Fetches, cleans and extracts a single URL
pub async fn scan_url<S: PageSource>(
    source: &mut S,
    url: &str,
    cleaner_config: &CleanerConfig,
) -> ScanOutcome {
    let failed = |failure: ScanFailure| {
        ::log::error!("Skipping {}: {}", url, failure);
        ScanOutcome::Failed {
            url: url.to_string(),
            failure,
        }
    };

    if let Err(reason) = validate_url(url) {
        return failed(ScanFailure::InvalidUrl(reason));
    }

    let page = match source.fetch(url).await {
        Ok(page) => page,
        Err(e) => return failed(ScanFailure::Navigation(e.to_string())),
    };

    if looks_blocked(&page) {
        return failed(ScanFailure::Blocked);
    }

    let parsed = parsers::parse_page(url, &page.html, cleaner_config);
    if !parsed.has_headings() {
        ::log::warn!(
            "No H1-H3 headings found on {}; page structure is unusual",
            url
        );
    }

    ::log::info!(
        "Extracted {} headings from {} ({} noise elements removed)",
        parsed.record.headings.len(),
        url,
        parsed.removed
    );
    ScanOutcome::Scanned(parsed.record)
}

/// Only absolute http(s) URLs are sent to the browser
fn validate_url(url: &str) -> Result<(), String> {
    let parsed = Url::parse(url).map_err(|e| e.to_string())?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme '{}'", other)),
    }
}
