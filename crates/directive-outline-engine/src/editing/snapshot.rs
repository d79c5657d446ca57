use crate::editing::Outline;
use crate::models::{Level, ParagraphId, placeholder};
use crate::validation::StructureWarning;

/// Immutable view of an outline for a paragraph editor UI.
///
/// The UI renders from snapshots and issues [`crate::Cmd`]s; it never
/// touches the paragraph vector directly. Everything a paragraph row needs
/// is precomputed here:
///
/// - **Citation** for the live preview next to each editor
/// - **Acronym warning** rendered inline under the paragraph
/// - **Structure warnings** rendered as advisory text for the whole outline
/// - **Capabilities** so buttons for refused edits can be hidden
///
/// ```rust
/// # use directive_outline_engine::{DirectiveType, Outline};
/// let outline = Outline::from_template(DirectiveType::Bulletin);
/// let snapshot = outline.snapshot();
/// for row in &snapshot.paragraphs {
///     println!("{} {}", row.citation, row.title.as_deref().unwrap_or(""));
/// }
/// # assert_eq!(snapshot.paragraphs[0].citation, "1.");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Outline version for change detection
    pub version: u64,
    pub paragraphs: Vec<RenderParagraph>,
    pub warnings: Vec<StructureWarning>,
}

/// One paragraph row prepared for display
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParagraph {
    pub id: ParagraphId,
    pub level: Level,
    /// Full citation over the whole outline, e.g. `2b(1)`
    pub citation: String,
    pub content: String,
    pub title: Option<String>,
    /// Guidance text, only while the paragraph is still empty
    pub placeholder: Option<String>,
    pub acronym_error: Option<String>,
    pub is_mandatory: bool,
    pub can_remove: bool,
    pub can_move_up: bool,
    pub can_move_down: bool,
}

pub(crate) fn create_snapshot(outline: &Outline) -> Snapshot {
    let citations = outline.citations();
    let directive = outline.directive();

    let paragraphs = outline
        .paragraphs()
        .iter()
        .zip(citations)
        .map(|(p, citation)| RenderParagraph {
            id: p.id,
            level: p.level,
            citation,
            content: p.content.clone(),
            title: p.title.clone(),
            placeholder: p
                .content
                .is_empty()
                .then(|| placeholder(directive, p.title.as_deref())),
            acronym_error: p.acronym_error.as_ref().map(ToString::to_string),
            is_mandatory: p.is_mandatory,
            can_remove: outline.can_remove(p.id),
            can_move_up: outline.can_move_up(p.id),
            can_move_down: outline.can_move_down(p.id),
        })
        .collect();

    Snapshot {
        version: outline.version(),
        paragraphs,
        warnings: outline.structure_warnings(),
    }
}

impl Outline {
    pub fn snapshot(&self) -> Snapshot {
        create_snapshot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::Cmd;
    use crate::models::DirectiveType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_snapshot_rows_for_order_template() {
        let outline = Outline::from_template(DirectiveType::Order);
        let snapshot = outline.snapshot();

        assert_eq!(snapshot.version, 0);
        assert_eq!(snapshot.paragraphs.len(), 6);
        assert!(snapshot.warnings.is_empty());

        let situation = &snapshot.paragraphs[0];
        assert_eq!(situation.citation, "1.");
        assert_eq!(situation.title.as_deref(), Some("Situation"));
        assert!(!situation.can_remove);
        assert!(!situation.can_move_up);
        assert!(situation.can_move_down);
        assert!(
            situation
                .placeholder
                .as_deref()
                .is_some_and(|p| p.starts_with("Enter the purpose"))
        );

        let cancellation = &snapshot.paragraphs[1];
        assert!(cancellation.can_remove);
    }

    #[test]
    fn test_snapshot_carries_warnings_and_errors() {
        let mut outline = Outline::new();
        outline.apply(Cmd::InsertSub {
            after: ParagraphId(1),
        });
        outline.apply(Cmd::SetContent {
            id: ParagraphId(2),
            text: "Coordinate with MARFORRES.".to_string(),
        });

        let snapshot = outline.snapshot();
        let child = &snapshot.paragraphs[1];

        assert_eq!(snapshot.version, 2);
        assert_eq!(child.citation, "1a");
        assert_eq!(child.placeholder, None);
        assert_eq!(
            child.acronym_error.as_deref(),
            Some(
                "Acronym \"MARFORRES\" used without being defined first. Please define it as \"Full Name (MARFORRES)\"."
            )
        );
        assert_eq!(
            snapshot
                .warnings
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec!["Paragraph 1a requires at least one sibling paragraph at the same level."]
        );
    }
}
