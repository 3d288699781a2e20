//! Document domain module.
//!
//! This module owns the single shared document that the structural tools
//! mutate. The in-memory model is a plain block list; `.docx` encoding and
//! decoding are delegated to `docx-rs` and confined to `codec`.
//!
//! ## Architecture
//!
//! - `model.rs` - block model, element ids, and reference resolution
//! - `handle.rs` - the mutex-guarded shared document instance
//! - `codec.rs` - `.docx` encode/decode (the only `docx-rs` boundary)
//! - `color.rs` - the color-name lookup table
//! - `error.rs` - document-specific error types

mod codec;
mod color;
mod error;
mod handle;
mod model;

pub use codec::{read_docx_file, write_docx};
pub use color::{parse_color, DocColor};
pub use error::DocumentError;
pub use handle::DocumentHandle;
pub use model::{
    Alignment, Block, DocumentModel, ParagraphSpec, PictureSpec, RunSpec, SectionSpec, TableSpec,
    DEFAULT_TABLE_STYLE,
};
