use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Top-level configuration for a research batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Maximum number of URLs taken from the input
    #[serde(default = "default_max_urls")]
    pub max_urls: usize,

    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub cleaner: CleanerConfig,

    #[serde(default)]
    pub recommender: RecommenderConfig,
}

/// Settings for the headless browser session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Run the browser without a window
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_window_width")]
    pub window_width: u32,

    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// Fixed delay after navigation so client-side rendering can finish
    #[serde(default = "default_render_wait_ms")]
    pub render_wait_ms: u64,
}

/// Denylists used to strip page noise before headings are read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Tag names removed together with their subtree
    #[serde(default = "default_strip_tags")]
    pub strip_tags: Vec<String>,

    /// Substrings matched against `class` and `id` (aggressive mode only)
    #[serde(default = "default_noise_keywords")]
    pub noise_keywords: Vec<String>,

    /// Also remove elements whose class/id contains a noise keyword
    #[serde(default)]
    pub aggressive: bool,
}

/// Settings for the H2 topic aggregation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Phrases dropped from a heading before grouping ("what is", "how to", ...)
    #[serde(default = "default_filler_phrases")]
    pub filler_phrases: Vec<String>,

    /// Number of topics kept after ranking
    #[serde(default = "default_max_topics")]
    pub max_topics: usize,
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_max_urls() -> usize {
    crate::input::MAX_URLS
}

fn default_headless() -> bool {
    true
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_window_width() -> u32 {
    1920
}

fn default_window_height() -> u32 {
    1080
}

fn default_render_wait_ms() -> u64 {
    5000
}

fn default_strip_tags() -> Vec<String> {
    [
        "script", "style", "header", "footer", "nav", "aside", "noscript", "iframe", "svg",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_noise_keywords() -> Vec<String> {
    [
        "sidebar",
        "menu",
        "popup",
        "cookie",
        "related",
        "banner",
        "advert",
        "comment",
        "share",
        "breadcrumb",
        "newsletter",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_filler_phrases() -> Vec<String> {
    vec!["là gì".to_string(), "như thế nào".to_string()]
}

fn default_max_topics() -> usize {
    15
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            max_urls: default_max_urls(),
            browser: BrowserConfig::default(),
            cleaner: CleanerConfig::default(),
            recommender: RecommenderConfig::default(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: default_headless(),
            user_agent: default_user_agent(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            render_wait_ms: default_render_wait_ms(),
        }
    }
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            strip_tags: default_strip_tags(),
            noise_keywords: default_noise_keywords(),
            aggressive: false,
        }
    }
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            filler_phrases: default_filler_phrases(),
            max_topics: default_max_topics(),
        }
    }
}

impl ResearchConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Apply the `WEBDRIVER_URL` environment override, if set and non-empty
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
        self
    }
}
