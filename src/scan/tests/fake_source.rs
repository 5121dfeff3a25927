use crate::browser::{PageSource, RenderedPage};
use crate::error::FetchError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// What the fake browser saw, shared with the test after the source is consumed
#[derive(Debug, Default)]
pub struct FetchLog {
    pub fetched: Vec<String>,
    pub closed: bool,
}

/// In-memory page source: serves canned HTML per URL, errors for anything else
pub struct FakeSource {
    pages: HashMap<String, (String, String)>,
    log: Rc<RefCell<FetchLog>>,
}

impl FakeSource {
    pub fn new() -> (Self, Rc<RefCell<FetchLog>>) {
        let log = Rc::new(RefCell::new(FetchLog::default()));
        let source = Self {
            pages: HashMap::new(),
            log: Rc::clone(&log),
        };
        (source, log)
    }

    pub fn with_page(mut self, url: &str, title: &str, html: &str) -> Self {
        self.pages
            .insert(url.to_string(), (title.to_string(), html.to_string()));
        self
    }
}

impl PageSource for FakeSource {
    async fn fetch(&mut self, url: &str) -> Result<RenderedPage, FetchError> {
        self.log.borrow_mut().fetched.push(url.to_string());
        match self.pages.get(url) {
            Some((title, html)) => Ok(RenderedPage {
                url: url.to_string(),
                title: title.clone(),
                html: html.clone(),
            }),
            None => Err(FetchError::Command {
                url: url.to_string(),
                message: "net::ERR_NAME_NOT_RESOLVED".to_string(),
            }),
        }
    }

    async fn close(self) -> Result<(), FetchError> {
        self.log.borrow_mut().closed = true;
        Ok(())
    }
}

/// Minimal article page with the given title, meta and body
pub fn article(title: &str, meta: &str, body: &str) -> String {
    format!(
        r#"<html><head><title>{}</title><meta name="description" content="{}"></head><body>{}</body></html>"#,
        title, meta, body
    )
}
