use anyhow::Result;
use crossterm::event::KeyCode;
use directive_outline_engine::{
    Cmd, DirectiveType, EditOutcome, Level, Outline, ParagraphId, Snapshot, io,
};
use ratatui::widgets::ListState;
use std::path::PathBuf;

/// What the keyboard is currently driving
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Editing the text of the selected paragraph
    Editing { buffer: String },
    /// Typing a citation to jump to
    Goto { buffer: String },
}

pub struct App {
    pub path: PathBuf,
    pub outline: Outline,
    pub list_state: ListState,
    pub mode: Mode,
    /// One-line notice shown above the help bar
    pub status: Option<String>,
    pub dirty: bool,
}

impl App {
    pub fn new(path: PathBuf, outline: Outline) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            path,
            outline,
            list_state,
            mode: Mode::Normal,
            status: None,
            dirty: false,
        }
    }

    /// Load `path`, or start a fresh outline from `directive` when it does not exist yet
    pub fn open(path: PathBuf, directive: DirectiveType) -> Result<Self> {
        let (outline, dirty) = match io::read_outline_at(&path) {
            Ok(outline) => (outline, false),
            Err(io::IoError::NotFound(_)) => {
                log::info!("starting new {directive} outline at {}", path.display());
                (Outline::from_template(directive), true)
            }
            Err(e) => return Err(e.into()),
        };

        let mut app = Self::new(path, outline);
        app.dirty = dirty;
        Ok(app)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.outline.snapshot()
    }

    pub fn selected_index(&self) -> usize {
        self.list_state
            .selected()
            .unwrap_or(0)
            .min(self.outline.len().saturating_sub(1))
    }

    pub fn selected_id(&self) -> ParagraphId {
        self.outline.paragraphs()[self.selected_index()].id
    }

    fn select(&mut self, index: usize) {
        self.list_state.select(Some(index));
    }

    fn next(&mut self) {
        let i = (self.selected_index() + 1) % self.outline.len();
        self.select(i);
    }

    fn previous(&mut self) {
        let i = match self.selected_index() {
            0 => self.outline.len() - 1,
            i => i - 1,
        };
        self.select(i);
    }

    /// Apply an edit and move the selection to wherever the edit points
    pub fn apply(&mut self, cmd: Cmd) {
        match self.outline.apply(cmd) {
            EditOutcome::Applied(patch) => {
                self.dirty = true;
                self.status = None;
                if let Some(index) = patch.focus.and_then(|id| self.outline.index_of(id)) {
                    self.select(index);
                }
            }
            EditOutcome::Rejected(reason) => self.status = Some(reason.to_string()),
        }
    }

    fn change_level(&mut self, level: fn(Level) -> Level) {
        let id = self.selected_id();
        let current = self.outline.paragraphs()[self.selected_index()].level;
        let target = level(current);
        if target == current {
            self.status = Some(format!("Paragraph is already at level {current}."));
            return;
        }
        self.apply(Cmd::SetLevel { id, level: target });
    }

    pub fn save(&mut self) -> Result<()> {
        io::write_outline_at(&self.path, &self.outline)?;
        self.dirty = false;
        self.status = Some(format!("Saved {}", self.path.display()));
        Ok(())
    }

    /// Handle one key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        match std::mem::replace(&mut self.mode, Mode::Normal) {
            Mode::Normal => return self.handle_normal_key(code),
            Mode::Editing { mut buffer } => match code {
                KeyCode::Enter => {
                    let id = self.selected_id();
                    self.apply(Cmd::SetContent { id, text: buffer });
                }
                KeyCode::Esc => {}
                KeyCode::Backspace => {
                    buffer.pop();
                    self.mode = Mode::Editing { buffer };
                }
                KeyCode::Char(c) => {
                    buffer.push(c);
                    self.mode = Mode::Editing { buffer };
                }
                _ => self.mode = Mode::Editing { buffer },
            },
            Mode::Goto { mut buffer } => match code {
                KeyCode::Enter => match self.outline.find_by_citation(&buffer) {
                    Some(id) => {
                        if let Some(index) = self.outline.index_of(id) {
                            self.select(index);
                        }
                    }
                    None => self.status = Some(format!("No paragraph {}", buffer.trim())),
                },
                KeyCode::Esc => {}
                KeyCode::Backspace => {
                    buffer.pop();
                    self.mode = Mode::Goto { buffer };
                }
                KeyCode::Char(c) => {
                    buffer.push(c);
                    self.mode = Mode::Goto { buffer };
                }
                _ => self.mode = Mode::Goto { buffer },
            },
        }
        Ok(false)
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> Result<bool> {
        let id = self.selected_id();
        match code {
            KeyCode::Char('q') if self.dirty => {
                self.status = Some("Unsaved changes: w to save, Q to quit anyway".to_string());
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Char('m') => self.apply(Cmd::InsertMain { after: id }),
            KeyCode::Char('o') => self.apply(Cmd::InsertSame { after: id }),
            KeyCode::Char('s') => self.apply(Cmd::InsertSub { after: id }),
            KeyCode::Char('u') => self.apply(Cmd::InsertUp { after: id }),
            KeyCode::Char('d') | KeyCode::Delete => self.apply(Cmd::Remove { id }),
            KeyCode::Char('K') => self.apply(Cmd::MoveUp { id }),
            KeyCode::Char('J') => self.apply(Cmd::MoveDown { id }),
            KeyCode::Char('<') => self.change_level(Level::shallower),
            KeyCode::Char('>') => self.change_level(Level::deeper),
            KeyCode::Enter | KeyCode::Char('e') => {
                let buffer = self.outline.paragraphs()[self.selected_index()]
                    .content
                    .clone();
                self.mode = Mode::Editing { buffer };
            }
            KeyCode::Char('g') => {
                self.mode = Mode::Goto {
                    buffer: String::new(),
                }
            }
            KeyCode::Char('w') => {
                if let Err(e) = self.save() {
                    self.status = Some(format!("Save failed: {e}"));
                }
            }
            _ => {}
        }
        Ok(false)
    }
}
