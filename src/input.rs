/// Default cap on the number of URLs processed in one batch
pub const MAX_URLS: usize = 5;

/// Splits free-text input into URL lines.
///
/// Each line is trimmed, empty lines are dropped, and only the first `limit`
/// remaining lines are kept.
pub fn parse_url_list(input: &str, limit: usize) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(limit)
        .map(|line| line.to_string())
        .collect()
}
