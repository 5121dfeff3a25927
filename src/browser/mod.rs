pub mod webdriver;

use crate::error::FetchError;

pub use webdriver::WebDriverSource;

/// A page after the browser has finished rendering it
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// URL that was requested
    pub url: String,
    /// Document title as reported by the browser
    pub title: String,
    /// Rendered page source
    pub html: String,
}

/// Something that can turn a URL into rendered HTML.
///
/// One source is opened per batch and reused for every URL, so `fetch`
/// takes `&mut self` and `close` consumes it.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Load a URL and return the rendered page
    async fn fetch(&mut self, url: &str) -> Result<RenderedPage, FetchError>;

    /// Release the underlying session
    async fn close(self) -> Result<(), FetchError>
    where
        Self: Sized;
}

/// Heuristic check for a blocked response.
///
/// A page counts as blocked when its title contains "403" or its source
/// contains "Forbidden". Unrelated pages that mention either word are
/// reported as blocked too.
pub fn looks_blocked(page: &RenderedPage) -> bool {
    page.title.contains("403") || page.html.contains("Forbidden")
}
