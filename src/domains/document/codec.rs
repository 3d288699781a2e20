//! Encoding the document model to `.docx` and decoding it back.
//!
//! All `docx-rs` interaction is confined to this module. Encoding walks the
//! block list once; decoding recovers paragraph text and table cell text from
//! an existing file (character formatting beyond run boundaries is not
//! round-tripped).

use std::fs;
use std::path::Path;

use docx_rs::{
    AlignmentType, BreakType, Docx, DocumentChild, Paragraph, ParagraphChild, Pic, Run, RunChild,
    Table, TableCell, TableCellContent, TableChild, TableRow, TableRowChild, read_docx,
};

use super::error::DocumentError;
use super::model::{
    Alignment, Block, DocumentModel, ParagraphSpec, RunSpec, TableSpec, DEFAULT_TABLE_STYLE,
};

impl From<Alignment> for AlignmentType {
    fn from(align: Alignment) -> Self {
        match align {
            Alignment::Left => AlignmentType::Left,
            Alignment::Center => AlignmentType::Center,
            Alignment::Right => AlignmentType::Right,
            Alignment::Justify => AlignmentType::Justified,
        }
    }
}

/// Encode the model and write it to `path`, creating parent directories.
pub fn write_docx(model: &DocumentModel, path: &Path) -> Result<(), DocumentError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = fs::File::create(path)?;
    encode(model)
        .build()
        .pack(file)
        .map_err(|e| DocumentError::Encode(e.to_string()))?;
    Ok(())
}

/// Read a `.docx` file into a fresh model.
pub fn read_docx_file(path: &Path) -> Result<DocumentModel, DocumentError> {
    let buf = fs::read(path)?;
    let docx = read_docx(&buf).map_err(|e| DocumentError::Decode(e.to_string()))?;
    Ok(decode(&docx))
}

fn encode(model: &DocumentModel) -> Docx {
    let mut docx = Docx::new();
    for block in &model.blocks {
        docx = match block {
            Block::Paragraph(spec) => docx.add_paragraph(encode_paragraph(spec)),
            Block::Table(spec) => docx.add_table(encode_table(spec)),
            Block::Picture(pic) => docx.add_paragraph(
                Paragraph::new().add_run(
                    Run::new()
                        .add_image(Pic::new(&pic.data).size(pic.width_emu, pic.height_emu)),
                ),
            ),
            // Sections start on a new page; column layout stays in the
            // model only.
            Block::PageBreak | Block::Section(_) => docx
                .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page))),
        };
    }
    docx
}

fn encode_paragraph(spec: &ParagraphSpec) -> Paragraph {
    let mut p = Paragraph::new().align(spec.align.into());
    if let Some(style) = &spec.style {
        p = p.style(&style_id(style));
    }
    for run in &spec.runs {
        p = p.add_run(encode_run(run));
    }
    p
}

fn encode_run(spec: &RunSpec) -> Run {
    let mut run = Run::new().add_text(spec.text.as_str());
    if spec.bold {
        run = run.bold();
    }
    if spec.italic {
        run = run.italic();
    }
    if spec.underline {
        run = run.underline("single");
    }
    if let Some(size) = spec.size {
        // docx sizes are half-points
        run = run.size(size as usize * 2);
    }
    if let Some(color) = spec.color {
        run = run.color(color.hex());
    }
    if let Some(highlight) = spec.highlight {
        run = run.highlight(highlight.highlight());
    }
    run
}

fn encode_table(spec: &TableSpec) -> Table {
    let rows = spec
        .rows
        .iter()
        .map(|cells| {
            TableRow::new(
                cells
                    .iter()
                    .map(|cell| TableCell::new().add_paragraph(encode_paragraph(cell)))
                    .collect(),
            )
        })
        .collect();
    Table::new(rows).style(&style_id(&spec.style))
}

/// Style names arrive the way word processors display them ("Table Grid",
/// "Heading 1"); style ids drop the spaces.
fn style_id(name: &str) -> String {
    name.split_whitespace().collect()
}

fn decode(docx: &Docx) -> DocumentModel {
    let mut model = DocumentModel::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => {
                model.blocks.push(Block::Paragraph(decode_paragraph(p)));
            }
            DocumentChild::Table(t) => {
                model.blocks.push(Block::Table(decode_table(t)));
            }
            _ => {}
        }
    }
    model
}

fn decode_paragraph(p: &Paragraph) -> ParagraphSpec {
    let mut spec = ParagraphSpec::default();
    for child in &p.children {
        if let ParagraphChild::Run(run) = child {
            let text: String = run
                .children
                .iter()
                .filter_map(|c| match c {
                    RunChild::Text(t) => Some(t.text.as_str()),
                    _ => None,
                })
                .collect();
            if !text.is_empty() {
                spec.runs.push(RunSpec::text(text));
            }
        }
    }
    spec
}

fn decode_table(t: &Table) -> TableSpec {
    let mut rows = Vec::new();
    for row in &t.rows {
        let TableChild::TableRow(row) = row;
        let mut cells = Vec::new();
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            let mut content = ParagraphSpec::default();
            for child in &cell.children {
                if let TableCellContent::Paragraph(p) = child {
                    content.runs.extend(decode_paragraph(p).runs);
                }
            }
            cells.push(content);
        }
        rows.push(cells);
    }
    let cols = rows.first().map(Vec::len).unwrap_or(0);
    TableSpec {
        style: DEFAULT_TABLE_STYLE.to_string(),
        cols,
        rows,
        has_headers: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.docx");

        let mut model = DocumentModel::new();
        model.add_heading("Report", 1);
        model.add_paragraph(ParagraphSpec::text("Body text"));
        let mut table = TableSpec::new(0, 2, DEFAULT_TABLE_STYLE);
        table.add_row(&["A".into(), "B".into()], true);
        table.add_row(&["1".into(), "2".into()], false);
        model.add_table(table);

        write_docx(&model, &path).unwrap();
        assert!(path.exists());

        let mut reread = read_docx_file(&path).unwrap();
        assert_eq!(reread.paragraph_count(), 2);
        assert_eq!(reread.table_count(), 1);
        let table = reread.table_mut(None).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][0].runs[0].text, "A");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/out.docx");
        let model = DocumentModel::new();
        write_docx(&model, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let tmp = TempDir::new().unwrap();
        let err = read_docx_file(&tmp.path().join("absent.docx")).unwrap_err();
        assert!(matches!(err, DocumentError::Io(_)));
    }

    #[test]
    fn test_style_id_strips_spaces() {
        assert_eq!(style_id("Table Grid"), "TableGrid");
        assert_eq!(style_id("Heading 1"), "Heading1");
        assert_eq!(style_id("Normal"), "Normal");
    }
}
