//! Report rendering.
//!
//! Each output format is built in two steps: a pure layout of the collected
//! data (`layout`), then serialization of that layout to bytes (`render`).

pub mod docx;
pub mod text;
pub mod xlsx;

use crate::error::ReportError;
use crate::session::ResearchReport;
use std::fs;
use std::path::{Path, PathBuf};

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const DOCX_FILE_NAME: &str = "SEO_Report.docx";
pub const XLSX_FILE_NAME: &str = "SEO_Data.xlsx";

/// Paths of the documents written for one batch
#[derive(Debug, Clone)]
pub struct WrittenReports {
    pub docx: PathBuf,
    pub xlsx: PathBuf,
}

/// Renders both documents and writes them into `out_dir`
pub fn write_reports(report: &ResearchReport, out_dir: &Path) -> Result<WrittenReports, ReportError> {
    let docx_bytes = docx::build(report)?;
    let xlsx_bytes = xlsx::build(report)?;

    fs::create_dir_all(out_dir)?;
    let written = WrittenReports {
        docx: out_dir.join(DOCX_FILE_NAME),
        xlsx: out_dir.join(XLSX_FILE_NAME),
    };
    fs::write(&written.docx, docx_bytes)?;
    fs::write(&written.xlsx, xlsx_bytes)?;

    ::log::info!(
        "Wrote {} ({}) and {} ({})",
        written.docx.display(),
        DOCX_MIME,
        written.xlsx.display(),
        XLSX_MIME
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::RecommendationEntry;
    use crate::results::PageRecord;

    #[test]
    fn test_write_reports_creates_both_files() {
        let report = ResearchReport {
            pages: vec![PageRecord {
                url: "https://a.example".to_string(),
                title: "T".to_string(),
                meta_description: "M".to_string(),
                headings: Vec::new(),
            }],
            failures: Vec::new(),
            recommendations: vec![RecommendationEntry {
                text: "Topic".to_string(),
                count: 1,
            }],
        };
        let out_dir = std::env::temp_dir().join(format!("outline-research-{}", std::process::id()));

        let written = write_reports(&report, &out_dir).unwrap();
        assert!(written.docx.ends_with(DOCX_FILE_NAME));
        assert!(written.xlsx.ends_with(XLSX_FILE_NAME));
        assert!(fs::metadata(&written.docx).unwrap().len() > 0);
        assert!(fs::metadata(&written.xlsx).unwrap().len() > 0);

        fs::remove_dir_all(&out_dir).unwrap();
    }
}
