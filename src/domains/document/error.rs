//! Document-specific error types.

use thiserror::Error;

/// Errors that can occur during document operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document contains no paragraphs to reference.
    #[error("No paragraphs in the document")]
    NoParagraphs,

    /// A paragraph reference did not resolve.
    #[error("Unknown paragraph reference: '{0}'")]
    UnknownParagraph(String),

    /// The document contains no tables to reference.
    #[error("No tables in the document")]
    NoTables,

    /// A table reference did not resolve.
    #[error("Unknown table reference: '{0}'")]
    UnknownTable(String),

    /// The document contains no sections to reference.
    #[error("No sections in the document")]
    NoSections,

    /// A section reference did not resolve.
    #[error("Unknown section reference: '{0}'")]
    UnknownSection(String),

    /// A row index exceeded the table's row count.
    #[error("Row index {row} is out of range for a table with {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    /// A column index exceeded the row's cell count.
    #[error("Column index {col} is out of range for a row with {cols} columns")]
    ColOutOfRange { col: usize, cols: usize },

    /// Header count does not match the requested column count.
    #[error("Header count ({headers}) does not match column count ({cols})")]
    HeaderMismatch { headers: usize, cols: usize },

    /// A color name outside the supported set was supplied.
    #[error(
        "Unknown color name '{0}' (valid: black, blue, green, dark blue, dark red, \
         dark yellow, dark green, pink, red, white, teal, yellow, violet, gray25, gray50)"
    )]
    UnknownColor(String),

    /// Failed to encode the document to .docx.
    #[error("Failed to encode document: {0}")]
    Encode(String),

    /// Failed to parse a .docx file.
    #[error("Failed to read document: {0}")]
    Decode(String),

    /// Image data could not be decoded or re-encoded.
    #[error("Invalid image: {0}")]
    Image(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
