use thiserror::Error;

/// Errors raised while talking to the browser
#[derive(Debug, Error)]
pub enum FetchError {
    /// Could not open a WebDriver session
    #[error("failed to connect to WebDriver at {url}: {message}")]
    Connect { url: String, message: String },

    /// A WebDriver command failed for a single page
    #[error("browser command failed for {url}: {message}")]
    Command { url: String, message: String },
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while rendering or writing the report documents
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to build Word document: {0}")]
    Docx(String),

    #[error("failed to build spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Batch-level errors. Anything here stops the run without producing a report.
#[derive(Debug, Error)]
pub enum ResearchError {
    /// The input contained no usable URL lines
    #[error("no URLs given")]
    NoUrls,

    /// Every URL in the batch failed
    #[error("no data collected from any URL")]
    NoPages,

    /// The browser session could not be started
    #[error(transparent)]
    Browser(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
