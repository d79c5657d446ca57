use crate::editing::Patch;
use crate::models::{Level, ParagraphId};

/// Edit operations on an outline.
///
/// Inserts place a new empty paragraph immediately after `after`; they
/// differ only in the level the new paragraph gets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// New top-level paragraph
    InsertMain { after: ParagraphId },
    /// New paragraph at the target's own level
    InsertSame { after: ParagraphId },
    /// New paragraph one level deeper than the target (at most 8)
    InsertSub { after: ParagraphId },
    /// New paragraph one level shallower than the target (at least 1)
    InsertUp { after: ParagraphId },
    Remove { id: ParagraphId },
    /// Swap with the paragraph directly above
    MoveUp { id: ParagraphId },
    /// Swap with the paragraph directly below
    MoveDown { id: ParagraphId },
    /// Replace the text; normalised to a single logical line
    SetContent { id: ParagraphId, text: String },
    SetLevel { id: ParagraphId, level: Level },
}

impl Cmd {
    /// The paragraph the command is aimed at
    pub fn target(&self) -> ParagraphId {
        match self {
            Cmd::InsertMain { after }
            | Cmd::InsertSame { after }
            | Cmd::InsertSub { after }
            | Cmd::InsertUp { after } => *after,
            Cmd::Remove { id }
            | Cmd::MoveUp { id }
            | Cmd::MoveDown { id }
            | Cmd::SetContent { id, .. }
            | Cmd::SetLevel { id, .. } => *id,
        }
    }

    /// Level of a paragraph inserted by this command after one at `target`,
    /// or `None` when the command does not insert
    pub fn inserted_level(&self, target: Level) -> Option<Level> {
        match self {
            Cmd::InsertMain { .. } => Some(Level::TOP),
            Cmd::InsertSame { .. } => Some(target),
            Cmd::InsertSub { .. } => Some(target.deeper()),
            Cmd::InsertUp { .. } => Some(target.shallower()),
            _ => None,
        }
    }
}

/// Why an edit was refused. The outline is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditRejection {
    #[error("No paragraph with id {0}.")]
    UnknownParagraph(ParagraphId),
    #[error("Cannot delete the first paragraph.")]
    FirstParagraph,
    #[error(
        "Cannot delete mandatory paragraphs. Mandatory paragraphs like \"Situation\", \"Mission\", etc. are required for the document format."
    )]
    MandatoryParagraph { title: Option<String> },
    #[error("Cannot move a subparagraph above its parent paragraph.")]
    ChildAboveParent,
    #[error("Paragraph is already at the top.")]
    AtTop,
    #[error("Paragraph is already at the bottom.")]
    AtBottom,
}

/// Outcome of [`crate::editing::Outline::apply`]; edits never fail hard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Applied(Patch),
    Rejected(EditRejection),
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied(_))
    }

    pub fn patch(&self) -> Option<&Patch> {
        match self {
            EditOutcome::Applied(patch) => Some(patch),
            EditOutcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&EditRejection> {
        match self {
            EditOutcome::Applied(_) => None,
            EditOutcome::Rejected(reason) => Some(reason),
        }
    }
}
