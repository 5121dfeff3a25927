use crate::browser::{PageSource, RenderedPage};
use crate::config::BrowserConfig;
use crate::error::FetchError;
use fantoccini::{Client, ClientBuilder};
use serde_json::{Map, Value, json};
use std::time::Duration;

/// Page source backed by a single WebDriver session (e.g. ChromeDriver)
pub struct WebDriverSource {
    client: Client,
    render_wait: Duration,
}

impl WebDriverSource {
    /// Opens a browser session on the given WebDriver server.
    ///
    /// Failure here is fatal for the batch: no URL can be fetched without a
    /// session.
    pub async fn connect(webdriver_url: &str, config: &BrowserConfig) -> Result<Self, FetchError> {
        ::log::info!("Connecting to WebDriver at {}", webdriver_url);

        let mut builder = ClientBuilder::native();
        builder.capabilities(chrome_capabilities(config));

        let client = builder
            .connect(webdriver_url)
            .await
            .map_err(|e| FetchError::Connect {
                url: webdriver_url.to_string(),
                message: e.to_string(),
            })?;

        ::log::debug!("WebDriver session established");
        Ok(Self {
            client,
            render_wait: Duration::from_millis(config.render_wait_ms),
        })
    }
}

/// Builds the Chrome capabilities for a headless session with a fixed
/// window size and user agent
pub fn chrome_capabilities(config: &BrowserConfig) -> Map<String, Value> {
    let mut args = vec![
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--disable-gpu".to_string(),
        format!(
            "--window-size={},{}",
            config.window_width, config.window_height
        ),
        format!("--user-agent={}", config.user_agent),
    ];
    if config.headless {
        args.insert(0, "--headless".to_string());
    }

    let mut caps = Map::new();
    caps.insert("browserName".to_string(), json!("chrome"));
    caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
    caps
}

impl PageSource for WebDriverSource {
    async fn fetch(&mut self, url: &str) -> Result<RenderedPage, FetchError> {
        let command_error = |e: fantoccini::error::CmdError| FetchError::Command {
            url: url.to_string(),
            message: e.to_string(),
        };

        self.client.goto(url).await.map_err(command_error)?;

        // Give client-side rendering time to finish
        tokio::time::sleep(self.render_wait).await;

        let title = self.client.title().await.map_err(command_error)?;
        let html = self.client.source().await.map_err(command_error)?;

        ::log::debug!("Fetched {} ({} bytes)", url, html.len());
        Ok(RenderedPage {
            url: url.to_string(),
            title,
            html,
        })
    }

    async fn close(self) -> Result<(), FetchError> {
        self.client
            .close()
            .await
            .map_err(|e| FetchError::Command {
                url: String::new(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chrome_args(caps: &Map<String, Value>) -> Vec<String> {
        caps["goog:chromeOptions"]["args"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_default_capabilities() {
        let caps = chrome_capabilities(&BrowserConfig::default());
        let args = chrome_args(&caps);

        assert_eq!(caps["browserName"], "chrome");
        assert_eq!(args[0], "--headless");
        assert!(args.contains(&"--window-size=1920,1080".to_string()));
        assert!(args.iter().any(|a| a.starts_with("--user-agent=Mozilla/5.0")));
    }

    #[test]
    fn test_headed_capabilities() {
        let config = BrowserConfig {
            headless: false,
            window_width: 800,
            window_height: 600,
            ..BrowserConfig::default()
        };
        let args = chrome_args(&chrome_capabilities(&config));

        assert!(!args.contains(&"--headless".to_string()));
        assert!(args.contains(&"--window-size=800,600".to_string()));
    }
}
