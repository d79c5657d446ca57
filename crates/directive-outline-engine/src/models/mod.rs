pub mod level;
pub mod paragraph;
pub mod template;

pub use level::{Level, LevelOutOfRange, ParagraphId};
pub use paragraph::{CONDITIONALLY_REMOVABLE_TITLE, Paragraph, normalize_content};
pub use template::{DirectiveType, ParseDirectiveTypeError, placeholder};
