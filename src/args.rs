use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "outline-research")]
#[command(about = "Collects page headings from up to five URLs and suggests an H2 outline")]
#[command(version)]
pub struct Args {
    /// File with one URL per line ("-" or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the Word and Excel reports are written to
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// WebDriver endpoint (overrides config and WEBDRIVER_URL)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Delay after navigation before reading the page, in milliseconds
    #[arg(long)]
    pub render_wait_ms: Option<u64>,

    /// Also strip elements whose class/id contains a noise keyword
    #[arg(long)]
    pub aggressive: bool,
}

impl Args {
    /// Whether the URL list comes from stdin
    pub fn reads_stdin(&self) -> bool {
        self.input
            .as_ref()
            .is_none_or(|path| path.as_os_str() == "-")
    }
}
