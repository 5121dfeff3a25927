use crate::error::ReportError;
use crate::outline::RecommendationEntry;
use crate::results::PageRecord;
use crate::session::ResearchReport;
use rust_xlsxwriter::{Format, FormatAlign, Workbook};

pub const RESEARCH_SHEET: &str = "Outline Research";
pub const RECOMMEND_SHEET: &str = "Outline Recommend";

/// Longest string a single Excel cell accepts
const MAX_CELL_CHARS: usize = 32_767;

/// Column definition of a sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub header: &'static str,
    pub width: f64,
    /// Long-text columns wrap and align to the top
    pub wrap: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
}

/// A sheet ready to be written: header row plus data rows
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub name: &'static str,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

/// One row per page: No., URL, Title, Meta Desc, Headings
pub fn research_table(pages: &[PageRecord]) -> SheetTable {
    let columns = vec![
        Column { header: "No.", width: 6.0, wrap: false },
        Column { header: "URL", width: 40.0, wrap: false },
        Column { header: "Title", width: 40.0, wrap: true },
        Column { header: "Meta Desc", width: 50.0, wrap: true },
        Column { header: "Headings", width: 80.0, wrap: true },
    ];

    let rows = pages
        .iter()
        .enumerate()
        .map(|(i, page)| {
            vec![
                Cell::Number((i + 1) as f64),
                Cell::Text(page.url.clone()),
                Cell::Text(page.title.clone()),
                Cell::Text(page.meta_description.clone()),
                Cell::Text(page.headings_text()),
            ]
        })
        .collect();

    SheetTable {
        name: RESEARCH_SHEET,
        columns,
        rows,
    }
}

/// One row per recommended topic
pub fn recommend_table(recommendations: &[RecommendationEntry]) -> SheetTable {
    let columns = vec![
        Column { header: "Recommended H2", width: 60.0, wrap: true },
        Column { header: "Occurrences", width: 12.0, wrap: false },
    ];

    let rows = recommendations
        .iter()
        .map(|entry| {
            vec![
                Cell::Text(entry.text.clone()),
                Cell::Number(entry.count as f64),
            ]
        })
        .collect();

    SheetTable {
        name: RECOMMEND_SHEET,
        columns,
        rows,
    }
}

pub fn layout(report: &ResearchReport) -> Vec<SheetTable> {
    vec![
        research_table(&report.pages),
        recommend_table(&report.recommendations),
    ]
}

/// Serializes sheets into .xlsx bytes
pub fn render(tables: &[SheetTable]) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let wrap_format = Format::new().set_text_wrap().set_align(FormatAlign::Top);

    for table in tables {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(table.name)?;

        for (col, column) in table.columns.iter().enumerate() {
            let col = col as u16;
            worksheet.set_column_width(col, column.width)?;
            worksheet.write_string_with_format(0, col, column.header, &header_format)?;
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            let row_num = (row_idx + 1) as u32;
            for (col_idx, cell) in row.iter().enumerate() {
                let col = col_idx as u16;
                let wrap = table.columns.get(col_idx).is_some_and(|c| c.wrap);
                match cell {
                    Cell::Number(n) => {
                        worksheet.write_number(row_num, col, *n)?;
                    }
                    Cell::Text(text) => {
                        let text = truncate_cell(text);
                        if wrap {
                            worksheet.write_string_with_format(row_num, col, text, &wrap_format)?;
                        } else {
                            worksheet.write_string(row_num, col, text)?;
                        }
                    }
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Lays out and serializes the workbook in one go
pub fn build(report: &ResearchReport) -> Result<Vec<u8>, ReportError> {
    render(&layout(report))
}

fn truncate_cell(text: &str) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{Heading, HeadingLevel};
    use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
    use std::io::Cursor;

    fn page(url: &str) -> PageRecord {
        PageRecord {
            url: url.to_string(),
            title: "T".to_string(),
            meta_description: "M".to_string(),
            headings: vec![
                Heading::new(HeadingLevel::H1, "Intro"),
                Heading::new(HeadingLevel::H2, "A"),
            ],
        }
    }

    #[test]
    fn test_research_rows_numbered_in_order() {
        let table = research_table(&[page("https://a"), page("https://b"), page("https://c")]);

        assert_eq!(table.name, "Outline Research");
        assert_eq!(
            table.columns.iter().map(|c| c.header).collect::<Vec<_>>(),
            vec!["No.", "URL", "Title", "Meta Desc", "Headings"]
        );
        assert_eq!(table.rows.len(), 3);
        for (i, url) in ["https://a", "https://b", "https://c"].iter().enumerate() {
            assert_eq!(table.rows[i][0], Cell::Number((i + 1) as f64));
            assert_eq!(table.rows[i][1], Cell::Text(url.to_string()));
        }
        assert_eq!(
            table.rows[0][4],
            Cell::Text("[H1] Intro\n[H2] A".to_string())
        );
    }

    #[test]
    fn test_recommend_rows() {
        let table = recommend_table(&[RecommendationEntry {
            text: "Giá gỗ là gì".to_string(),
            count: 2,
        }]);
        assert_eq!(table.name, "Outline Recommend");
        assert_eq!(
            table.rows,
            vec![vec![
                Cell::Text("Giá gỗ là gì".to_string()),
                Cell::Number(2.0)
            ]]
        );
    }

    #[test]
    fn test_long_text_columns_wrap() {
        let table = research_table(&[]);
        let wrapped = table
            .columns
            .iter()
            .filter(|c| c.wrap)
            .map(|c| c.header)
            .collect::<Vec<_>>();
        assert_eq!(wrapped, vec!["Title", "Meta Desc", "Headings"]);
    }

    #[test]
    fn test_truncate_cell() {
        assert_eq!(truncate_cell("short"), "short");
        let long = "ế".repeat(MAX_CELL_CHARS + 10);
        assert_eq!(truncate_cell(&long).chars().count(), MAX_CELL_CHARS);
    }

    #[test]
    fn test_render_round_trips_through_reader() {
        let report = ResearchReport {
            pages: vec![page("https://a"), page("https://b")],
            failures: Vec::new(),
            recommendations: vec![RecommendationEntry {
                text: "A".to_string(),
                count: 2,
            }],
        };
        let bytes = build(&report).unwrap();
        assert!(bytes.starts_with(b"PK"));

        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        assert_eq!(workbook.sheet_names(), vec![RESEARCH_SHEET, RECOMMEND_SHEET]);

        let research = workbook.worksheet_range(RESEARCH_SHEET).unwrap();
        assert_eq!(research.height(), 3);
        assert_eq!(
            research.get_value((0, 4)),
            Some(&Data::String("Headings".to_string()))
        );
        assert_eq!(research.get_value((1, 0)), Some(&Data::Float(1.0)));
        assert_eq!(
            research.get_value((2, 1)),
            Some(&Data::String("https://b".to_string()))
        );

        let recommend = workbook.worksheet_range(RECOMMEND_SHEET).unwrap();
        assert_eq!(recommend.height(), 2);
        assert_eq!(
            recommend.get_value((1, 0)),
            Some(&Data::String("A".to_string()))
        );
        assert_eq!(recommend.get_value((1, 1)), Some(&Data::Float(2.0)));
    }
}
