//! State of one research batch.
//!
//! A [`ResearchSession`] is created when a batch starts, collects one
//! [`ScanOutcome`] per URL while scanning, and is consumed by
//! [`ResearchSession::finish`] into a [`ResearchReport`] that the renderers
//! read. Dropping either value resets the run.

use crate::config::RecommenderConfig;
use crate::error::ResearchError;
use crate::outline::{self, OutlineCorpus, RecommendationEntry};
use crate::results::{PageRecord, ScanFailure, ScanOutcome};

#[derive(Debug)]
pub struct ResearchSession {
    urls: Vec<String>,
    outcomes: Vec<ScanOutcome>,
    corpus: OutlineCorpus,
}

impl ResearchSession {
    /// Starts a batch over the given URLs. An empty list is rejected.
    pub fn new(urls: Vec<String>) -> Result<Self, ResearchError> {
        if urls.is_empty() {
            return Err(ResearchError::NoUrls);
        }
        Ok(Self {
            urls,
            outcomes: Vec::new(),
            corpus: OutlineCorpus::new(),
        })
    }

    /// URLs queued for this batch
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Records the result for one URL; H2s of scanned pages join the corpus
    pub fn record(&mut self, outcome: ScanOutcome) {
        ::log::debug!(
            "Recorded {} for {}",
            if outcome.is_success() { "page" } else { "failure" },
            outcome.url()
        );
        if let ScanOutcome::Scanned(page) = &outcome {
            self.corpus.extend(page.h2_texts());
        }
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[ScanOutcome] {
        &self.outcomes
    }

    pub fn corpus(&self) -> &OutlineCorpus {
        &self.corpus
    }

    /// Aggregates the batch into a report.
    ///
    /// Fails with [`ResearchError::NoPages`] when no URL was scanned
    /// successfully.
    pub fn finish(self, config: &RecommenderConfig) -> Result<ResearchReport, ResearchError> {
        let recommendations = outline::recommend(&self.corpus, config);

        let mut pages = Vec::new();
        let mut failures = Vec::new();
        for outcome in self.outcomes {
            match outcome {
                ScanOutcome::Scanned(page) => pages.push(page),
                ScanOutcome::Failed { url, failure } => failures.push((url, failure)),
            }
        }

        if pages.is_empty() {
            return Err(ResearchError::NoPages);
        }

        ::log::info!(
            "Batch finished: {} pages scanned, {} failed, {} topics recommended",
            pages.len(),
            failures.len(),
            recommendations.len()
        );

        Ok(ResearchReport {
            pages,
            failures,
            recommendations,
        })
    }
}

/// Read-only result of a finished batch
#[derive(Debug, Clone)]
pub struct ResearchReport {
    /// Successfully scanned pages, in input order
    pub pages: Vec<PageRecord>,
    /// URLs that were skipped and why
    pub failures: Vec<(String, ScanFailure)>,
    /// Ranked outline topics
    pub recommendations: Vec<RecommendationEntry>,
}
