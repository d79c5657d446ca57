//! Advisory checks over an outline. Nothing here blocks editing or export.

pub mod acronyms;
pub mod structure;

pub use acronyms::{AcronymChecker, AcronymError, check_acronyms, defines_acronym, rescan};
pub use structure::{StructureWarning, validate};
