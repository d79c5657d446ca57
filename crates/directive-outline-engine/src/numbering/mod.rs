//! Citation numbering: the letter codec and the per-level label rules.

pub mod citation;
pub mod letters;

pub use citation::{
    ancestor_parts, citation_part, citations, count_at_level, full_citation, own_part,
    strip_punctuation,
};
pub use letters::{from_letters, to_letters};
