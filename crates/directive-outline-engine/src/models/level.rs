use serde::{Deserialize, Serialize};
use std::fmt;

/// Outline depth of a paragraph: 1 is a top-level numbered paragraph, 8 the
/// deepest sub-sub-paragraph the correspondence manual allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const TOP: Level = Level(1);
    pub const DEEPEST: Level = Level(8);

    pub fn new(value: u8) -> Option<Self> {
        (Self::TOP.0..=Self::DEEPEST.0)
            .contains(&value)
            .then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// One level down, saturating at the deepest level
    pub fn deeper(self) -> Self {
        Self((self.0 + 1).min(Self::DEEPEST.0))
    }

    /// One level up, saturating at the top level
    pub fn shallower(self) -> Self {
        Self((self.0 - 1).max(Self::TOP.0))
    }

    /// The level directly above this one, or `None` at the top
    pub fn parent(self) -> Option<Self> {
        Self::new(self.0 - 1)
    }

    pub fn is_top(self) -> bool {
        self == Self::TOP
    }

    pub fn all() -> impl Iterator<Item = Level> {
        (Self::TOP.0..=Self::DEEPEST.0).map(Level)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::TOP
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("paragraph level must be between 1 and 8, got {0}")]
pub struct LevelOutOfRange(pub u8);

impl TryFrom<u8> for Level {
    type Error = LevelOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Level::new(value).ok_or(LevelOutOfRange(value))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

/// Stable paragraph identifier, assigned monotonically and never reused
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ParagraphId(pub u64);

impl ParagraphId {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ParagraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
