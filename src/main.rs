use clap::Parser;
use outline_research::config::ResearchConfig;
use outline_research::report::{self, text};
use outline_research::{Research, ResearchError};
use std::io::Read;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let input = match read_input(&args) {
        Ok(input) => input,
        Err(e) => {
            ::log::error!("Failed to read URL list: {}", e);
            std::process::exit(1);
        }
    };

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let research = Research::new(input).with_config(config);
    println!(
        "Note: a WebDriver server (e.g. ChromeDriver) must be running at {}",
        research.config().webdriver_url
    );

    let report = match research.run().await {
        Ok(report) => report,
        Err(ResearchError::NoUrls) => {
            ::log::warn!("No URLs given; nothing to analyze");
            std::process::exit(1);
        }
        Err(e) => {
            ::log::error!("Research failed: {}", e);
            std::process::exit(1);
        }
    };

    for (url, failure) in &report.failures {
        println!("Skipped {}: {}", url, failure);
    }
    println!("{}", text::outline_text(&report.recommendations));
    println!("{}", text::raw_text(&report.pages));

    match report::write_reports(&report, &args.out_dir) {
        Ok(written) => {
            println!("Word report: {}", written.docx.display());
            println!("Excel report: {}", written.xlsx.display());
        }
        Err(e) => {
            ::log::error!("Failed to write reports: {}", e);
            std::process::exit(1);
        }
    }
}

fn read_input(args: &Args) -> std::io::Result<String> {
    match &args.input {
        Some(path) if !args.reads_stdin() => std::fs::read_to_string(path),
        _ => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Config file (or defaults), then `WEBDRIVER_URL`, then command-line flags
fn load_config(args: &Args) -> Result<ResearchConfig, ResearchError> {
    let mut config = match &args.config {
        Some(path) => ResearchConfig::from_file(path)?,
        None => ResearchConfig::default(),
    }
    .with_env_overrides();

    if let Some(url) = &args.webdriver_url {
        config.webdriver_url = url.clone();
    }
    if let Some(millis) = args.render_wait_ms {
        config.browser.render_wait_ms = millis;
    }
    if args.aggressive {
        config.cleaner.aggressive = true;
    }
    Ok(config)
}
