pub mod editing;
pub mod export;
pub mod io;
pub mod models;
pub mod numbering;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{
    Cmd, EditOutcome, EditRejection, Outline, OutlineError, Patch, RenderParagraph, Snapshot,
};
pub use export::{ExportParagraph, export_paragraphs, render_plain_text};
pub use io::*;
pub use models::*;
pub use numbering::{citation_part, citations, full_citation, from_letters, to_letters};
pub use validation::{AcronymError, StructureWarning, check_acronyms, rescan, validate};
