// Re-export modules
pub mod browser;
pub mod config;
pub mod error;
pub mod input;
pub mod outline;
pub mod parsers;
pub mod report;
pub mod results;
pub mod scan;
pub mod session;

// Re-export commonly used types for convenience
pub use error::ResearchError;
pub use results::{Heading, HeadingLevel, PageRecord, ScanFailure, ScanOutcome};
pub use session::{ResearchReport, ResearchSession};

use browser::{PageSource, WebDriverSource};
use config::ResearchConfig;

/// Builder for one outline research batch
pub struct Research {
    input: String,
    config: ResearchConfig,
}

impl Research {
    /// Create a new batch from newline-separated URL input
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            config: ResearchConfig::default(),
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: ResearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Apply configuration from a JSON string
    pub fn with_config_str(mut self, json: &str) -> Result<Self, ResearchError> {
        self.config = ResearchConfig::from_json(json)?;
        Ok(self)
    }

    /// Override the WebDriver endpoint
    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.config.webdriver_url = url.into();
        self
    }

    /// Override the post-navigation render delay
    pub fn with_render_wait_ms(mut self, millis: u64) -> Self {
        self.config.browser.render_wait_ms = millis;
        self
    }

    /// Enable or disable class/id keyword cleaning
    pub fn with_aggressive_cleaning(mut self, aggressive: bool) -> Self {
        self.config.cleaner.aggressive = aggressive;
        self
    }

    pub fn config(&self) -> &ResearchConfig {
        &self.config
    }

    /// URLs this batch will process
    pub fn urls(&self) -> Vec<String> {
        input::parse_url_list(&self.input, self.config.max_urls)
    }

    /// Run the batch against a WebDriver browser session.
    ///
    /// Empty input is rejected before any browser is started.
    pub async fn run(self) -> Result<ResearchReport, ResearchError> {
        let session = ResearchSession::new(self.urls())?;
        let source =
            WebDriverSource::connect(&self.config.webdriver_url, &self.config.browser).await?;
        self.scan(source, session).await
    }

    /// Run the batch against any page source
    pub async fn run_with_source<S: PageSource>(
        self,
        source: S,
    ) -> Result<ResearchReport, ResearchError> {
        let session = ResearchSession::new(self.urls())?;
        self.scan(source, session).await
    }

    async fn scan<S: PageSource>(
        self,
        mut source: S,
        mut session: ResearchSession,
    ) -> Result<ResearchReport, ResearchError> {
        scan::scan_all(&mut source, &mut session, &self.config.cleaner).await;

        if let Err(e) = source.close().await {
            ::log::warn!("Failed to close browser session: {}", e);
        }

        session.finish(&self.config.recommender)
    }
}
