use crate::models::ParagraphId;

/// Result of an applied edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Outline positions touched by the edit, after it was applied
    pub changed: std::ops::Range<usize>,
    /// Paragraph the UI should focus next (the inserted or moved one)
    pub focus: Option<ParagraphId>,
    pub version: u64,
}
