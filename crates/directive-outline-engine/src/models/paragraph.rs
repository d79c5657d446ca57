use serde::{Deserialize, Serialize};

use crate::models::{Level, ParagraphId};
use crate::validation::AcronymError;

/// The one mandatory title that may still be removed by the user
pub const CONDITIONALLY_REMOVABLE_TITLE: &str = "Cancellation";

/// A single numbered paragraph of a directive body.
///
/// Hierarchy is positional: a paragraph has no parent pointer, its parent is
/// the nearest preceding paragraph one level shallower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub id: ParagraphId,
    pub level: Level,
    #[serde(default)]
    pub content: String,
    #[serde(default, rename = "mandatory")]
    pub is_mandatory: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// First undefined acronym in `content`; recomputed on every rescan
    #[serde(skip)]
    pub acronym_error: Option<AcronymError>,
}

impl Paragraph {
    /// Create an empty, optional paragraph
    pub fn new(id: ParagraphId, level: Level) -> Self {
        Self {
            id,
            level,
            content: String::new(),
            is_mandatory: false,
            title: None,
            acronym_error: None,
        }
    }

    /// Create an empty mandatory section paragraph with a fixed title
    pub fn mandatory(id: ParagraphId, title: impl Into<String>) -> Self {
        Self {
            is_mandatory: true,
            title: Some(title.into()),
            ..Self::new(id, Level::TOP)
        }
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = normalize_content(content);
        self
    }

    /// Whether deletion is allowed for this paragraph on its own merits.
    /// The outline additionally protects its first paragraph.
    pub fn is_removable(&self) -> bool {
        !self.is_mandatory || self.title.as_deref() == Some(CONDITIONALLY_REMOVABLE_TITLE)
    }

    /// Whether the document generator should emit this paragraph
    pub fn is_active(&self) -> bool {
        !self.content.trim().is_empty() || self.is_mandatory
    }
}

/// Flatten paragraph text to a single logical line.
///
/// Non-breaking, figure and narrow no-break spaces become ordinary spaces and
/// each carriage return or line feed becomes one space. Ordinary spaces are
/// preserved as typed.
pub fn normalize_content(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\r' | '\n' => ' ',
            other => other,
        })
        .collect()
}
