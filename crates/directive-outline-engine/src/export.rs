//! Hand-off to the document generator.
//!
//! The generator owns every typographic concern (fonts, physical indents,
//! tab stops). It receives one `(citation, level, text)` entry per active
//! paragraph, in outline order.

use serde::Serialize;

use crate::editing::Outline;
use crate::models::{Level, Paragraph};
use crate::numbering;

/// A paragraph as the document generator sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportParagraph {
    pub citation: String,
    pub level: Level,
    pub text: String,
}

/// Active paragraphs with citations for the generated document.
///
/// Paragraphs with blank content are dropped unless mandatory, and the
/// remaining ones are renumbered among themselves so that an empty optional
/// paragraph never leaves a gap in the numbering.
pub fn export_paragraphs(outline: &Outline) -> Vec<ExportParagraph> {
    let active: Vec<&Paragraph> = outline
        .paragraphs()
        .iter()
        .filter(|p| p.is_active())
        .collect();
    let levels: Vec<Level> = active.iter().map(|p| p.level).collect();

    active
        .iter()
        .zip(numbering::citations(&levels))
        .map(|(p, citation)| ExportParagraph {
            citation,
            level: p.level,
            text: p.content.clone(),
        })
        .collect()
}

const INDENT_PER_LEVEL: &str = "    ";

/// Plain-text rendering of the directive body, one paragraph per block
pub fn render_plain_text(paragraphs: &[ExportParagraph]) -> String {
    let blocks: Vec<String> = paragraphs
        .iter()
        .map(|p| {
            let indent = INDENT_PER_LEVEL.repeat(usize::from(p.level.get() - 1));
            format!("{indent}{}  {}", p.citation, p.text)
                .trim_end()
                .to_string()
        })
        .collect();

    let mut text = blocks.join("\n\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

impl Outline {
    pub fn export(&self) -> Vec<ExportParagraph> {
        export_paragraphs(self)
    }
}
