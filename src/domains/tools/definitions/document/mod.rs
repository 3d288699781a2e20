//! Document tool definitions.
//!
//! Tools that build and mutate the shared in-memory document: lifecycle
//! (create/open/save), paragraphs and runs, breaks, sections, and pictures.

mod columns;
mod heading;
mod new;
mod open;
mod page_break;
mod paragraph;
mod picture;
mod run;
mod save;
mod section;
mod update_paragraph;

pub use columns::SetColumnsTool;
pub use heading::AddHeadingTool;
pub use new::CreateDocumentTool;
pub use open::OpenDocumentTool;
pub use page_break::AddPageBreakTool;
pub use paragraph::AddParagraphTool;
pub use picture::AddPictureTool;
pub use run::AddRunTool;
pub use save::SaveFileTool;
pub use section::AddSectionTool;
pub use update_paragraph::UpdateParagraphTool;
