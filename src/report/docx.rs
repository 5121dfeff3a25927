use crate::error::ReportError;
use crate::session::ResearchReport;
use docx_rs::{
    AbstractNumbering, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, Paragraph, Run, SpecialIndentType, Start, Style, StyleType,
};
use std::io::Cursor;

const BULLET_NUMBERING_ID: usize = 1;

/// Layout element of the Word report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBlock {
    Title(String),
    Heading { level: u8, text: String },
    Bullet(String),
    Paragraph(String),
    /// One paragraph with a line break between entries
    Lines(Vec<String>),
}

/// Lays out the report: outline suggestion first, then raw data per page
pub fn layout(report: &ResearchReport) -> Vec<ReportBlock> {
    let mut blocks = vec![
        ReportBlock::Title("SEO REPORT".to_string()),
        ReportBlock::Heading {
            level: 2,
            text: "OUTLINE RECOMMEND".to_string(),
        },
    ];
    blocks.extend(
        report
            .recommendations
            .iter()
            .map(|entry| ReportBlock::Bullet(entry.label())),
    );

    blocks.push(ReportBlock::Heading {
        level: 1,
        text: "RAW DATA".to_string(),
    });
    for page in &report.pages {
        blocks.push(ReportBlock::Heading {
            level: 2,
            text: page.url.clone(),
        });
        blocks.push(ReportBlock::Paragraph(format!("Title: {}", page.title)));
        blocks.push(ReportBlock::Paragraph(format!(
            "Desc: {}",
            page.meta_description
        )));
        if !page.headings.is_empty() {
            blocks.push(ReportBlock::Lines(
                page.headings.iter().map(|h| h.to_string()).collect(),
            ));
        }
    }
    blocks
}

/// Serializes a layout into .docx bytes
pub fn render(blocks: &[ReportBlock]) -> Result<Vec<u8>, ReportError> {
    let mut doc = Docx::new()
        .add_style(
            Style::new("Title", StyleType::Paragraph)
                .name("Title")
                .size(56)
                .bold(),
        )
        .add_style(
            Style::new("Heading1", StyleType::Paragraph)
                .name("Heading 1")
                .size(32)
                .bold(),
        )
        .add_style(
            Style::new("Heading2", StyleType::Paragraph)
                .name("Heading 2")
                .size(26)
                .bold(),
        )
        .add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
                Level::new(
                    0,
                    Start::new(1),
                    NumberFormat::new("bullet"),
                    LevelText::new("•"),
                    LevelJc::new("left"),
                )
                .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
            ),
        )
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

    for block in blocks {
        doc = doc.add_paragraph(paragraph(block));
    }

    let mut buf = Cursor::new(Vec::new());
    doc.build()
        .pack(&mut buf)
        .map_err(|e| ReportError::Docx(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Lays out and serializes the report in one go
pub fn build(report: &ResearchReport) -> Result<Vec<u8>, ReportError> {
    render(&layout(report))
}

fn paragraph(block: &ReportBlock) -> Paragraph {
    match block {
        ReportBlock::Title(text) => Paragraph::new()
            .add_run(Run::new().add_text(text))
            .style("Title"),
        ReportBlock::Heading { level, text } => Paragraph::new()
            .add_run(Run::new().add_text(text))
            .style(&format!("Heading{}", level)),
        ReportBlock::Bullet(text) => Paragraph::new()
            .add_run(Run::new().add_text(text))
            .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0)),
        ReportBlock::Paragraph(text) => Paragraph::new().add_run(Run::new().add_text(text)),
        ReportBlock::Lines(lines) => {
            let mut run = Run::new();
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    run = run.add_break(BreakType::TextWrapping);
                }
                run = run.add_text(line);
            }
            Paragraph::new().add_run(run)
        }
    }
}
