use std::collections::HashSet;

use crate::editing::{Cmd, EditOutcome, EditRejection, Patch};
use crate::models::{DirectiveType, Level, Paragraph, ParagraphId, normalize_content};
use crate::numbering;
use crate::validation::{self, StructureWarning};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutlineError {
    #[error("an outline needs at least one paragraph")]
    Empty,
    #[error("paragraph id {0} appears more than once")]
    DuplicateId(ParagraphId),
}

/// Ordered paragraphs of a directive body.
///
/// Document order is the only source of hierarchy. Citations, structural
/// warnings and acronym verdicts are all derived from the sequence; only
/// the acronym verdicts are cached on the paragraphs, and they are
/// recomputed after every applied edit.
///
/// ```rust
/// use directive_outline_engine::{Cmd, Outline, ParagraphId};
///
/// let mut outline = Outline::new();
/// outline.apply(Cmd::InsertSub { after: ParagraphId(1) });
/// outline.apply(Cmd::InsertSame { after: ParagraphId(2) });
///
/// assert_eq!(outline.citations(), vec!["1.", "1a", "1b"]);
/// assert!(outline.structure_warnings().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    paragraphs: Vec<Paragraph>,
    /// Id of the first paragraph at construction; never removable
    seed_id: ParagraphId,
    /// Highest id ever handed out, so deleted ids are not reused
    high_water: ParagraphId,
    directive: DirectiveType,
    version: u64,
}

impl Default for Outline {
    fn default() -> Self {
        Self::new()
    }
}

impl Outline {
    /// A single empty top-level paragraph with id 1
    pub fn new() -> Self {
        let seed = Paragraph::new(ParagraphId(1), Level::TOP);
        Self {
            seed_id: seed.id,
            high_water: seed.id,
            paragraphs: vec![seed],
            directive: DirectiveType::Default,
            version: 0,
        }
    }

    /// Outline seeded with the directive type's mandatory sections
    pub fn from_template(directive: DirectiveType) -> Self {
        let mut outline = Self::from_paragraphs(directive.seed_paragraphs())
            .unwrap_or_else(|_| Self::new());
        outline.directive = directive;
        outline
    }

    /// Build from existing paragraphs, e.g. loaded from disk.
    ///
    /// Content is normalised and acronyms are rescanned.
    pub fn from_paragraphs(mut paragraphs: Vec<Paragraph>) -> Result<Self, OutlineError> {
        let Some(first) = paragraphs.first() else {
            return Err(OutlineError::Empty);
        };
        let seed_id = first.id;

        let mut seen = HashSet::new();
        for paragraph in &paragraphs {
            if !seen.insert(paragraph.id) {
                return Err(OutlineError::DuplicateId(paragraph.id));
            }
        }

        for paragraph in paragraphs.iter_mut() {
            paragraph.content = normalize_content(&paragraph.content);
        }
        validation::rescan(&mut paragraphs);

        let high_water = paragraphs
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap_or(seed_id);

        Ok(Self {
            paragraphs,
            seed_id,
            high_water,
            directive: DirectiveType::Default,
            version: 0,
        })
    }

    pub fn with_directive(mut self, directive: DirectiveType) -> Self {
        self.directive = directive;
        self
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Always false; an outline keeps at least its seed paragraph
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn directive(&self) -> DirectiveType {
        self.directive
    }

    pub fn seed_id(&self) -> ParagraphId {
        self.seed_id
    }

    pub fn get(&self, id: ParagraphId) -> Option<&Paragraph> {
        self.paragraphs.iter().find(|p| p.id == id)
    }

    pub fn index_of(&self, id: ParagraphId) -> Option<usize> {
        self.paragraphs.iter().position(|p| p.id == id)
    }

    pub fn levels(&self) -> Vec<Level> {
        self.paragraphs.iter().map(|p| p.level).collect()
    }

    /// Full citation of every paragraph, recomputed on each call
    pub fn citations(&self) -> Vec<String> {
        numbering::citations(&self.levels())
    }

    pub fn citation_of(&self, id: ParagraphId) -> Option<String> {
        let index = self.index_of(id)?;
        Some(numbering::full_citation(&self.levels(), index))
    }

    /// Find a paragraph by its rendered citation, e.g. `"2b(1)"`
    pub fn find_by_citation(&self, citation: &str) -> Option<ParagraphId> {
        let wanted = citation.trim();
        self.citations()
            .iter()
            .position(|c| c == wanted)
            .map(|index| self.paragraphs[index].id)
    }

    pub fn structure_warnings(&self) -> Vec<StructureWarning> {
        validation::validate(&self.levels())
    }

    /// Whether `Cmd::Remove` would be accepted
    pub fn can_remove(&self, id: ParagraphId) -> bool {
        self.check_remove(id).is_ok()
    }

    /// Whether `Cmd::MoveUp` would be accepted
    pub fn can_move_up(&self, id: ParagraphId) -> bool {
        self.check_move_up(id).is_ok()
    }

    /// Whether `Cmd::MoveDown` would be accepted
    pub fn can_move_down(&self, id: ParagraphId) -> bool {
        self.check_move_down(id).is_ok()
    }

    /// Apply an edit. Refused edits leave the outline unchanged and report
    /// why; nothing here panics or returns an error.
    pub fn apply(&mut self, cmd: Cmd) -> EditOutcome {
        let result = match &cmd {
            Cmd::InsertMain { after }
            | Cmd::InsertSame { after }
            | Cmd::InsertSub { after }
            | Cmd::InsertUp { after } => self.insert_after(*after, &cmd),
            Cmd::Remove { id } => self.remove(*id),
            Cmd::MoveUp { id } => self.move_up(*id),
            Cmd::MoveDown { id } => self.move_down(*id),
            Cmd::SetContent { id, text } => self.set_content(*id, text),
            Cmd::SetLevel { id, level } => self.set_level(*id, *level),
        };

        match result {
            Ok((changed, focus)) => {
                validation::rescan(&mut self.paragraphs);
                self.version += 1;
                log::debug!("applied {cmd:?}, outline now at version {}", self.version);
                EditOutcome::Applied(Patch {
                    changed,
                    focus,
                    version: self.version,
                })
            }
            Err(reason) => {
                log::debug!("rejected {cmd:?}: {reason}");
                EditOutcome::Rejected(reason)
            }
        }
    }

    fn require_index(&self, id: ParagraphId) -> Result<usize, EditRejection> {
        self.index_of(id)
            .ok_or(EditRejection::UnknownParagraph(id))
    }

    fn next_id(&mut self) -> ParagraphId {
        self.high_water = self.high_water.next();
        self.high_water
    }

    fn insert_after(&mut self, after: ParagraphId, cmd: &Cmd) -> EditResult {
        let index = self.require_index(after)?;
        let target_level = self.paragraphs[index].level;
        let level = cmd.inserted_level(target_level).unwrap_or(target_level);

        let id = self.next_id();
        self.paragraphs.insert(index + 1, Paragraph::new(id, level));

        let warnings = self.structure_warnings();
        if !warnings.is_empty() {
            let messages: Vec<String> = warnings.iter().map(ToString::to_string).collect();
            log::warn!("paragraph numbering warnings: {messages:?}");
        }

        Ok((index + 1..index + 2, Some(id)))
    }

    fn check_remove(&self, id: ParagraphId) -> Result<usize, EditRejection> {
        let index = self.require_index(id)?;
        let paragraph = &self.paragraphs[index];

        if !paragraph.is_removable() {
            return Err(EditRejection::MandatoryParagraph {
                title: paragraph.title.clone(),
            });
        }
        if id == self.seed_id || index == 0 {
            return Err(EditRejection::FirstParagraph);
        }
        Ok(index)
    }

    fn remove(&mut self, id: ParagraphId) -> EditResult {
        let index = self.check_remove(id)?;
        self.paragraphs.remove(index);

        let focus = self.paragraphs.get(index - 1).map(|p| p.id);
        Ok((index - 1..index, focus))
    }

    fn check_move_up(&self, id: ParagraphId) -> Result<usize, EditRejection> {
        let index = self.require_index(id)?;
        if index == 0 {
            return Err(EditRejection::AtTop);
        }
        if self.paragraphs[index].level > self.paragraphs[index - 1].level {
            return Err(EditRejection::ChildAboveParent);
        }
        Ok(index)
    }

    fn move_up(&mut self, id: ParagraphId) -> EditResult {
        let index = self.check_move_up(id)?;
        self.paragraphs.swap(index - 1, index);
        Ok((index - 1..index + 1, Some(id)))
    }

    fn check_move_down(&self, id: ParagraphId) -> Result<usize, EditRejection> {
        let index = self.require_index(id)?;
        if index + 1 >= self.paragraphs.len() {
            return Err(EditRejection::AtBottom);
        }
        Ok(index)
    }

    fn move_down(&mut self, id: ParagraphId) -> EditResult {
        let index = self.check_move_down(id)?;
        self.paragraphs.swap(index, index + 1);
        Ok((index..index + 2, Some(id)))
    }

    fn set_content(&mut self, id: ParagraphId, text: &str) -> EditResult {
        let index = self.require_index(id)?;
        self.paragraphs[index].content = normalize_content(text);
        Ok((index..index + 1, Some(id)))
    }

    fn set_level(&mut self, id: ParagraphId, level: Level) -> EditResult {
        let index = self.require_index(id)?;
        self.paragraphs[index].level = level;
        Ok((index..index + 1, Some(id)))
    }
}

type EditResult = Result<(std::ops::Range<usize>, Option<ParagraphId>), EditRejection>;
