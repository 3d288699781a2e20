//! In-memory document model.
//!
//! Tools mutate this block list; `.docx` encoding happens only when the
//! document is saved (see `codec`). Paragraphs, tables, and sections are
//! addressed by ordinal ids (`p0`, `table_0`, `section_0`) handed back to the
//! caller when the element is created. A reference tool may omit the id to
//! target the most recently added element of that kind; an id that does not
//! resolve is a hard error, never a silent fallback.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::color::DocColor;
use super::error::DocumentError;

/// Default style applied to new tables.
pub const DEFAULT_TABLE_STYLE: &str = "Table Grid";

/// Paragraph alignment, spelled the way callers pass it (`LEFT`, `CENTER`...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// A contiguous run of text sharing one set of character properties.
#[derive(Debug, Clone, Default)]
pub struct RunSpec {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Font size in points.
    pub size: Option<u32>,
    pub color: Option<DocColor>,
    pub highlight: Option<DocColor>,
}

impl RunSpec {
    /// A plain run with default formatting.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: content.into(),
            ..Default::default()
        }
    }
}

/// A paragraph: an ordered list of runs plus paragraph-level properties.
#[derive(Debug, Clone, Default)]
pub struct ParagraphSpec {
    pub style: Option<String>,
    pub align: Alignment,
    pub runs: Vec<RunSpec>,
}

impl ParagraphSpec {
    /// A paragraph holding one plain run.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            runs: vec![RunSpec::text(content)],
            ..Default::default()
        }
    }
}

/// A table: a grid of cells, each holding one paragraph.
#[derive(Debug, Clone)]
pub struct TableSpec {
    pub style: String,
    pub cols: usize,
    pub rows: Vec<Vec<ParagraphSpec>>,
    pub has_headers: bool,
}

impl TableSpec {
    /// An empty `rows` x `cols` grid.
    pub fn new(rows: usize, cols: usize, style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            cols,
            rows: vec![vec![ParagraphSpec::default(); cols]; rows],
            has_headers: false,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Borrow a cell, bounds-checked (row first, then column).
    pub fn cell_mut(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<&mut ParagraphSpec, DocumentError> {
        let rows = self.rows.len();
        let cells = self
            .rows
            .get_mut(row)
            .ok_or(DocumentError::RowOutOfRange { row, rows })?;
        let cols = cells.len();
        cells
            .get_mut(col)
            .ok_or(DocumentError::ColOutOfRange { col, cols })
    }

    /// Replace a cell's content, bounds-checked; no mutation on error.
    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        content: ParagraphSpec,
    ) -> Result<(), DocumentError> {
        *self.cell_mut(row, col)? = content;
        Ok(())
    }

    /// Append a row. Values beyond the column count are ignored; missing
    /// values leave their cells empty. Header rows are bold and centered.
    pub fn add_row(&mut self, data: &[String], is_header: bool) {
        let mut cells = Vec::with_capacity(self.cols);
        for i in 0..self.cols {
            let mut cell = match data.get(i) {
                Some(text) => ParagraphSpec::text(text.clone()),
                None => ParagraphSpec::default(),
            };
            if is_header {
                for run in &mut cell.runs {
                    run.bold = true;
                }
                cell.align = Alignment::Center;
            }
            cells.push(cell);
        }
        self.rows.push(cells);
    }
}

/// Picture data, already re-encoded and sized in EMU.
#[derive(Debug, Clone)]
pub struct PictureSpec {
    pub data: Vec<u8>,
    pub width_emu: u32,
    pub height_emu: u32,
}

/// A section break. New sections start on a new page.
#[derive(Debug, Clone)]
pub struct SectionSpec {
    pub columns: usize,
}

impl Default for SectionSpec {
    fn default() -> Self {
        Self { columns: 1 }
    }
}

/// One top-level block of the document body.
#[derive(Debug, Clone)]
pub enum Block {
    Paragraph(ParagraphSpec),
    Table(TableSpec),
    Picture(PictureSpec),
    PageBreak,
    Section(SectionSpec),
}

/// The mutable document: an ordered list of body blocks.
#[derive(Debug, Default)]
pub struct DocumentModel {
    pub blocks: Vec<Block>,
}

impl DocumentModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paragraph_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Paragraph(_)))
            .count()
    }

    pub fn table_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Table(_)))
            .count()
    }

    pub fn section_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Section(_)))
            .count()
    }

    /// Append a paragraph and return its id (`p{ordinal}`).
    pub fn add_paragraph(&mut self, spec: ParagraphSpec) -> String {
        self.blocks.push(Block::Paragraph(spec));
        format!("p{}", self.paragraph_count() - 1)
    }

    /// Append a heading. Level 0 maps to the `Title` style, level N to
    /// `Heading N`.
    pub fn add_heading(&mut self, content: &str, level: usize) -> String {
        let style = if level == 0 {
            "Title".to_string()
        } else {
            format!("Heading {}", level)
        };
        self.add_paragraph(ParagraphSpec {
            style: Some(style),
            runs: vec![RunSpec::text(content)],
            ..Default::default()
        })
    }

    /// Append a table and return its id (`table_{ordinal}`).
    pub fn add_table(&mut self, spec: TableSpec) -> String {
        self.blocks.push(Block::Table(spec));
        format!("table_{}", self.table_count() - 1)
    }

    /// Append a new-page section break and return its id (`section_{ordinal}`).
    pub fn add_section(&mut self) -> String {
        self.blocks.push(Block::Section(SectionSpec::default()));
        format!("section_{}", self.section_count() - 1)
    }

    /// Append a page break.
    pub fn add_page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    /// Append a picture.
    pub fn add_picture(&mut self, picture: PictureSpec) {
        self.blocks.push(Block::Picture(picture));
    }

    /// Resolve a paragraph reference. `None` targets the last paragraph.
    pub fn paragraph_mut(
        &mut self,
        id: Option<&str>,
    ) -> Result<&mut ParagraphSpec, DocumentError> {
        let mut paragraphs = self.blocks.iter_mut().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        });
        match id {
            None => paragraphs.last().ok_or(DocumentError::NoParagraphs),
            Some(id) => {
                let ordinal = parse_ordinal(id, "p")
                    .ok_or_else(|| DocumentError::UnknownParagraph(id.to_string()))?;
                paragraphs
                    .nth(ordinal)
                    .ok_or_else(|| DocumentError::UnknownParagraph(id.to_string()))
            }
        }
    }

    /// Resolve a table reference. `None` targets the last table.
    pub fn table_mut(&mut self, id: Option<&str>) -> Result<&mut TableSpec, DocumentError> {
        let mut tables = self.blocks.iter_mut().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        });
        match id {
            None => tables.last().ok_or(DocumentError::NoTables),
            Some(id) => {
                let ordinal = parse_ordinal(id, "table_")
                    .ok_or_else(|| DocumentError::UnknownTable(id.to_string()))?;
                tables
                    .nth(ordinal)
                    .ok_or_else(|| DocumentError::UnknownTable(id.to_string()))
            }
        }
    }

    /// Resolve a section reference. `None` targets the last section.
    pub fn section_mut(&mut self, id: Option<&str>) -> Result<&mut SectionSpec, DocumentError> {
        let mut sections = self.blocks.iter_mut().filter_map(|b| match b {
            Block::Section(s) => Some(s),
            _ => None,
        });
        match id {
            None => sections.last().ok_or(DocumentError::NoSections),
            Some(id) => {
                let ordinal = parse_ordinal(id, "section_")
                    .ok_or_else(|| DocumentError::UnknownSection(id.to_string()))?;
                sections
                    .nth(ordinal)
                    .ok_or_else(|| DocumentError::UnknownSection(id.to_string()))
            }
        }
    }
}

fn parse_ordinal(id: &str, prefix: &str) -> Option<usize> {
    id.strip_prefix(prefix)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_ids_are_ordinal() {
        let mut model = DocumentModel::new();
        assert_eq!(model.add_paragraph(ParagraphSpec::text("one")), "p0");
        assert_eq!(model.add_heading("Title", 0), "p1");
        assert_eq!(model.add_paragraph(ParagraphSpec::text("two")), "p2");
    }

    #[test]
    fn test_heading_style_mapping() {
        let mut model = DocumentModel::new();
        model.add_heading("Doc", 0);
        model.add_heading("Part", 2);
        let title = model.paragraph_mut(Some("p0")).unwrap();
        assert_eq!(title.style.as_deref(), Some("Title"));
        let part = model.paragraph_mut(Some("p1")).unwrap();
        assert_eq!(part.style.as_deref(), Some("Heading 2"));
    }

    #[test]
    fn test_resolve_last_paragraph_when_omitted() {
        let mut model = DocumentModel::new();
        model.add_paragraph(ParagraphSpec::text("first"));
        model.add_paragraph(ParagraphSpec::text("second"));
        let p = model.paragraph_mut(None).unwrap();
        assert_eq!(p.runs[0].text, "second");
    }

    #[test]
    fn test_unknown_paragraph_is_an_error() {
        let mut model = DocumentModel::new();
        model.add_paragraph(ParagraphSpec::text("only"));
        assert!(matches!(
            model.paragraph_mut(Some("p7")),
            Err(DocumentError::UnknownParagraph(_))
        ));
        assert!(matches!(
            model.paragraph_mut(Some("bogus")),
            Err(DocumentError::UnknownParagraph(_))
        ));
    }

    #[test]
    fn test_no_tables_error() {
        let mut model = DocumentModel::new();
        assert!(matches!(model.table_mut(None), Err(DocumentError::NoTables)));
    }

    #[test]
    fn test_table_resolution_by_ordinal() {
        let mut model = DocumentModel::new();
        let first = model.add_table(TableSpec::new(1, 1, DEFAULT_TABLE_STYLE));
        model.add_paragraph(ParagraphSpec::text("between"));
        let second = model.add_table(TableSpec::new(2, 2, DEFAULT_TABLE_STYLE));
        assert_eq!(first, "table_0");
        assert_eq!(second, "table_1");
        assert_eq!(model.table_mut(Some("table_0")).unwrap().cols, 1);
        assert_eq!(model.table_mut(None).unwrap().cols, 2);
        assert!(matches!(
            model.table_mut(Some("table_9")),
            Err(DocumentError::UnknownTable(_))
        ));
    }

    #[test]
    fn test_cell_bounds_row_then_col() {
        let mut table = TableSpec::new(3, 2, DEFAULT_TABLE_STYLE);
        let err = table.set_cell(5, 0, ParagraphSpec::text("x")).unwrap_err();
        assert!(matches!(err, DocumentError::RowOutOfRange { row: 5, rows: 3 }));
        let err = table.set_cell(0, 4, ParagraphSpec::text("x")).unwrap_err();
        assert!(matches!(err, DocumentError::ColOutOfRange { col: 4, cols: 2 }));
        // failed writes must not mutate the grid
        assert!(table.rows[0][0].runs.is_empty());
    }

    #[test]
    fn test_add_row_pads_and_truncates() {
        let mut table = TableSpec::new(0, 3, DEFAULT_TABLE_STYLE);
        table.add_row(&["a".into(), "b".into(), "c".into(), "extra".into()], false);
        table.add_row(&["only".into()], false);
        assert_eq!(table.rows[0].len(), 3);
        assert_eq!(table.rows[0][2].runs[0].text, "c");
        assert_eq!(table.rows[1][0].runs[0].text, "only");
        assert!(table.rows[1][1].runs.is_empty());
    }

    #[test]
    fn test_header_row_formatting() {
        let mut table = TableSpec::new(0, 2, DEFAULT_TABLE_STYLE);
        table.add_row(&["A".into(), "B".into()], true);
        assert!(table.rows[0][0].runs[0].bold);
        assert_eq!(table.rows[0][0].align, Alignment::Center);
    }
}
